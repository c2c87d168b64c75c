use thiserror::Error;

use crate::{
    calculations::SummaryError,
    form::ValidationError,
    presentation::{DownloadError, Notification, NotificationKind},
    service::ServiceError,
};

pub const CALCULATION_FAILED_MESSAGE: &str = "حدث خطأ في الحساب. يرجى التحقق من البيانات المدخلة.";
pub const EXPORT_FAILED_MESSAGE: &str = "حدث خطأ في تحميل التقرير";
pub const NO_SESSION_MESSAGE: &str = "يرجى إجراء الحساب أولاً";
pub const DATA_INCONSISTENCY_MESSAGE: &str = "البيانات المستلمة غير متسقة";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("Calculation failed: {0}")]
    Calculation(#[source] ServiceError),

    #[error("Export failed: {0}")]
    Export(#[source] ServiceError),

    #[error("No calculation has been submitted yet")]
    NoSession,

    #[error("Inconsistent calculation result: {0}")]
    DataInconsistency(#[from] SummaryError),

    #[error(transparent)]
    Download(#[from] DownloadError),
}

impl SessionError {
    /// The message delivered to the user for this failure.
    pub fn notification(&self) -> Notification {
        match self {
            Self::Validation(e) => {
                Notification::new(NotificationKind::Validation, e.user_message())
                    .with_detail(e.to_string())
            }
            Self::Calculation(e) => with_service_detail(
                Notification::new(NotificationKind::CalculationFailed, CALCULATION_FAILED_MESSAGE),
                e,
            ),
            Self::Export(e) => with_service_detail(
                Notification::new(NotificationKind::ExportFailed, EXPORT_FAILED_MESSAGE),
                e,
            ),
            Self::NoSession => Notification::new(NotificationKind::NoSession, NO_SESSION_MESSAGE),
            Self::DataInconsistency(e) => {
                Notification::new(NotificationKind::DataInconsistency, DATA_INCONSISTENCY_MESSAGE)
                    .with_detail(e.to_string())
            }
            Self::Download(e) => {
                Notification::new(NotificationKind::ExportFailed, EXPORT_FAILED_MESSAGE)
                    .with_detail(e.reason.clone())
            }
        }
    }
}

/// Prefers the service's own wording; falls back to the error text.
fn with_service_detail(
    notification: Notification,
    error: &ServiceError,
) -> Notification {
    match error.service_message() {
        Some(message) => notification.with_detail(message),
        None => notification.with_detail(error.to_string()),
    }
}
