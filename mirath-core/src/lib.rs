pub mod calculations;
pub mod form;
pub mod models;
pub mod presentation;
pub mod render;
pub mod rules;
pub mod service;
pub mod session;

#[cfg(test)]
mod test_support;

pub use models::*;
pub use presentation::{Notification, NotificationKind, Presentation};
pub use service::{ServiceConfig, ServiceError, ShareService};
pub use session::{CalculateOutcome, SessionController, SessionError, SessionStatus};
