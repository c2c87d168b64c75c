use async_trait::async_trait;
use thiserror::Error;

use crate::models::{CalculationRequest, CalculationResult, ReportDocument};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Service responded with status {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Status {
        status: u16,
        /// The `error` field of the response body, when it had one.
        message: Option<String>,
    },

    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl ServiceError {
    /// Message the service itself attached to a failure, if any.
    pub fn service_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// The two remote operations the calculator depends on.
///
/// Futures are not required to be `Send`: the controller runs on a single
/// cooperative thread, the way a page's event loop does.
#[async_trait(?Send)]
pub trait ShareService {
    /// Computes the heirs' shares for `request`.
    async fn calculate(
        &self,
        request: &CalculationRequest,
    ) -> Result<CalculationResult, ServiceError>;

    /// Produces the downloadable report for `request`.
    async fn export_report(
        &self,
        request: &CalculationRequest,
    ) -> Result<ReportDocument, ServiceError>;
}
