//! Fakes shared by the controller and renderer tests.

use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    rc::Rc,
};

use async_trait::async_trait;
use rust_decimal::Decimal;
use tokio::sync::oneshot;

use crate::{
    calculations::SummaryView,
    form::{ControlId, InMemoryForm},
    models::{CalculationRequest, CalculationResult, ReportDocument},
    presentation::{DownloadError, Notification, Presentation},
    render::{ChartHandle, ChartSpec},
    service::{ServiceError, ShareService},
};

// ── presentation ─────────────────────────────────────────────────────────

struct TestChart {
    live: Rc<Cell<usize>>,
}

impl ChartHandle for TestChart {
    fn release(self: Box<Self>) {
        self.live.set(self.live.get() - 1);
    }
}

/// Records everything the controller asks of the page.
#[derive(Default)]
pub struct RecordingPresentation {
    pub results_visible: Cell<bool>,
    pub scrolls: Cell<usize>,
    pub explanation: RefCell<Vec<String>>,
    pub chart_visible: Cell<Option<bool>>,
    pub painted: RefCell<Vec<ChartSpec>>,
    pub live_charts: Rc<Cell<usize>>,
    pub summary: RefCell<Option<SummaryView>>,
    pub notifications: RefCell<Vec<Notification>>,
    pub busy: RefCell<Vec<bool>>,
    pub downloads: RefCell<Vec<(String, ReportDocument)>>,
    pub refuse_downloads: Cell<bool>,
}

impl Presentation for RecordingPresentation {
    fn show_results(
        &self,
        visible: bool,
    ) {
        self.results_visible.set(visible);
    }

    fn scroll_results_into_view(&self) {
        self.scrolls.set(self.scrolls.get() + 1);
    }

    fn set_explanation(
        &self,
        statements: &[String],
    ) {
        *self.explanation.borrow_mut() = statements.to_vec();
    }

    fn set_chart_visible(
        &self,
        visible: bool,
    ) {
        self.chart_visible.set(Some(visible));
    }

    fn paint_chart(
        &self,
        spec: &ChartSpec,
    ) -> Box<dyn ChartHandle> {
        self.painted.borrow_mut().push(spec.clone());
        self.live_charts.set(self.live_charts.get() + 1);
        Box::new(TestChart {
            live: self.live_charts.clone(),
        })
    }

    fn set_summary(
        &self,
        summary: &SummaryView,
    ) {
        *self.summary.borrow_mut() = Some(summary.clone());
    }

    fn notify(
        &self,
        notification: &Notification,
    ) {
        self.notifications.borrow_mut().push(notification.clone());
    }

    fn set_busy(
        &self,
        busy: bool,
    ) {
        self.busy.borrow_mut().push(busy);
    }

    fn offer_download(
        &self,
        filename: &str,
        document: &ReportDocument,
    ) -> Result<(), DownloadError> {
        if self.refuse_downloads.get() {
            return Err(DownloadError {
                filename: filename.to_string(),
                reason: "disk full".to_string(),
            });
        }
        self.downloads
            .borrow_mut()
            .push((filename.to_string(), document.clone()));
        Ok(())
    }
}

// ── service ──────────────────────────────────────────────────────────────

enum Reply<T> {
    Ready(Result<T, ServiceError>),
    Deferred(oneshot::Receiver<Result<T, ServiceError>>),
}

impl<T> Reply<T> {
    async fn resolve(self) -> Result<T, ServiceError> {
        match self {
            Self::Ready(result) => result,
            Self::Deferred(rx) => rx
                .await
                .unwrap_or_else(|_| Err(ServiceError::Transport("reply dropped".to_string()))),
        }
    }
}

/// Replies queued by a test, plus every request the service received.
#[derive(Default)]
pub struct Script {
    calculate_replies: RefCell<VecDeque<Reply<CalculationResult>>>,
    export_replies: RefCell<VecDeque<Reply<ReportDocument>>>,
    pub calculate_calls: RefCell<Vec<CalculationRequest>>,
    pub export_calls: RefCell<Vec<CalculationRequest>>,
}

impl Script {
    pub fn reply_calculate(
        &self,
        result: Result<CalculationResult, ServiceError>,
    ) {
        self.calculate_replies
            .borrow_mut()
            .push_back(Reply::Ready(result));
    }

    pub fn defer_calculate(&self) -> oneshot::Sender<Result<CalculationResult, ServiceError>> {
        let (tx, rx) = oneshot::channel();
        self.calculate_replies
            .borrow_mut()
            .push_back(Reply::Deferred(rx));
        tx
    }

    pub fn reply_export(
        &self,
        result: Result<ReportDocument, ServiceError>,
    ) {
        self.export_replies.borrow_mut().push_back(Reply::Ready(result));
    }

    pub fn defer_export(&self) -> oneshot::Sender<Result<ReportDocument, ServiceError>> {
        let (tx, rx) = oneshot::channel();
        self.export_replies.borrow_mut().push_back(Reply::Deferred(rx));
        tx
    }
}

/// Service that answers from a [`Script`], in call order.
pub struct ScriptedService {
    script: Rc<Script>,
}

impl ScriptedService {
    pub fn new() -> (Self, Rc<Script>) {
        let script = Rc::new(Script::default());
        (
            Self {
                script: script.clone(),
            },
            script,
        )
    }
}

#[async_trait(?Send)]
impl ShareService for ScriptedService {
    async fn calculate(
        &self,
        request: &CalculationRequest,
    ) -> Result<CalculationResult, ServiceError> {
        self.script.calculate_calls.borrow_mut().push(request.clone());
        let reply = self
            .script
            .calculate_replies
            .borrow_mut()
            .pop_front()
            .expect("unexpected calculate call");
        reply.resolve().await
    }

    async fn export_report(
        &self,
        request: &CalculationRequest,
    ) -> Result<ReportDocument, ServiceError> {
        self.script.export_calls.borrow_mut().push(request.clone());
        let reply = self
            .script
            .export_replies
            .borrow_mut()
            .pop_front()
            .expect("unexpected export call");
        reply.resolve().await
    }
}

// ── fixtures ─────────────────────────────────────────────────────────────

pub fn form(
    estate: &str,
    gender: &str,
) -> InMemoryForm {
    InMemoryForm::new()
        .with_value(ControlId::Estate, estate)
        .with_value(ControlId::DeceasedGender, gender)
}

pub fn shares(pairs: &[(&str, Decimal)]) -> CalculationResult {
    CalculationResult {
        explanation: pairs.iter().map(|(l, _)| format!("نصيب {l}")).collect(),
        labels: pairs.iter().map(|(l, _)| l.to_string()).collect(),
        values: pairs.iter().map(|(_, v)| *v).collect(),
    }
}
