pub mod factory;
pub mod service;

pub use factory::HttpServiceFactory;
pub use service::HttpShareService;
