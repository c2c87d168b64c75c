//! What the controller needs from the page it runs in.
//!
//! Every method takes `&self`: the page is shared by the controller and the
//! host's own event handlers, so implementations keep their own interior
//! state.

use thiserror::Error;

use crate::{
    calculations::SummaryView,
    models::ReportDocument,
    render::{ChartHandle, ChartSpec},
};

/// The host could not hand the exported document to the user.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("could not offer '{filename}' for download: {reason}")]
pub struct DownloadError {
    pub filename: String,
    pub reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Validation,
    CalculationFailed,
    ExportFailed,
    NoSession,
    DataInconsistency,
}

/// A single user-facing failure message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    /// Extra text from the service or the underlying error, when there is any.
    pub detail: Option<String>,
}

impl Notification {
    pub fn new(
        kind: NotificationKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            detail: None,
        }
    }

    pub fn with_detail(
        mut self,
        detail: impl Into<String>,
    ) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

pub trait Presentation {
    /// Shows or hides the whole results container.
    fn show_results(
        &self,
        visible: bool,
    );

    fn scroll_results_into_view(&self);

    /// Replaces the explanation region with `statements`, in order.
    fn set_explanation(
        &self,
        statements: &[String],
    );

    fn set_chart_visible(
        &self,
        visible: bool,
    );

    /// Paints a new chart and returns the handle that owns it.
    ///
    /// Only the result renderer calls this, after releasing any previous handle.
    fn paint_chart(
        &self,
        spec: &ChartSpec,
    ) -> Box<dyn ChartHandle>;

    fn set_summary(
        &self,
        summary: &SummaryView,
    );

    /// Non-blocking failure channel.
    fn notify(
        &self,
        notification: &Notification,
    );

    /// Spinner on while at least one network call is pending.
    fn set_busy(
        &self,
        busy: bool,
    );

    /// Hands an exported document to the user under `filename`.
    fn offer_download(
        &self,
        filename: &str,
        document: &ReportDocument,
    ) -> Result<(), DownloadError>;
}
