pub mod factory;
pub mod share_service;

pub use factory::{ServiceConfig, ServiceFactory, ServiceRegistry};
pub use share_service::{ServiceError, ShareService};
