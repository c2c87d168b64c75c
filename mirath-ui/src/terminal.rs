use std::{
    cell::{Cell, RefCell},
    fs,
    io::Write,
    path::PathBuf,
    rc::Rc,
};

use mirath_core::{
    Notification, Presentation, ReportDocument,
    calculations::SummaryView,
    presentation::DownloadError,
    render::{ChartHandle, ChartSpec},
};
use rust_decimal::{Decimal, prelude::ToPrimitive};
use tracing::{debug, warn};

/// Width of a bar covering the whole estate.
const BAR_WIDTH: usize = 40;

struct TextChart {
    live: Rc<Cell<usize>>,
}

impl ChartHandle for TextChart {
    fn release(self: Box<Self>) {
        self.live.set(self.live.get().saturating_sub(1));
    }
}

/// Renders the page as plain text on `W` and saves downloads to disk.
pub struct TerminalPresentation<W: Write> {
    out: RefCell<W>,
    download_dir: PathBuf,
    live_charts: Rc<Cell<usize>>,
    saved: RefCell<Vec<PathBuf>>,
}

impl<W: Write> TerminalPresentation<W> {
    pub fn new(
        out: W,
        download_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            out: RefCell::new(out),
            download_dir: download_dir.into(),
            live_charts: Rc::new(Cell::new(0)),
            saved: RefCell::new(Vec::new()),
        }
    }

    /// Charts painted and not yet released.
    pub fn live_charts(&self) -> usize {
        self.live_charts.get()
    }

    /// Paths of every document written by [`Presentation::offer_download`].
    pub fn saved_files(&self) -> Vec<PathBuf> {
        self.saved.borrow().clone()
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn emit(
        &self,
        text: &str,
    ) {
        if let Err(e) = writeln!(self.out.borrow_mut(), "{text}") {
            warn!(error = %e, "terminal write failed");
        }
    }
}

fn bar(
    value: Decimal,
    total: Option<Decimal>,
) -> String {
    let Some(total) = total.filter(|t| *t > Decimal::ZERO) else {
        return String::new();
    };
    let cells = value
        .checked_div(total)
        .and_then(|ratio| ratio.checked_mul(Decimal::from(BAR_WIDTH)))
        .and_then(|cells| cells.round().to_usize())
        .unwrap_or(0)
        .min(BAR_WIDTH);
    "█".repeat(cells)
}

impl<W: Write> Presentation for TerminalPresentation<W> {
    fn show_results(
        &self,
        visible: bool,
    ) {
        if visible {
            self.emit("══════ نتائج الحساب ══════");
        } else {
            debug!("results hidden");
        }
    }

    fn scroll_results_into_view(&self) {}

    fn set_explanation(
        &self,
        statements: &[String],
    ) {
        for statement in statements {
            self.emit(&format!("• {statement}"));
        }
        self.emit("");
    }

    fn set_chart_visible(
        &self,
        visible: bool,
    ) {
        debug!(visible, "chart area");
    }

    fn paint_chart(
        &self,
        spec: &ChartSpec,
    ) -> Box<dyn ChartHandle> {
        let total = spec.total();
        for segment in &spec.segments {
            self.emit(&format!(
                "{:<7} {:<40} {}",
                segment.color,
                bar(segment.value, total),
                segment.label
            ));
        }
        self.emit("");

        self.live_charts.set(self.live_charts.get() + 1);
        Box::new(TextChart {
            live: self.live_charts.clone(),
        })
    }

    fn set_summary(
        &self,
        summary: &SummaryView,
    ) {
        match summary {
            SummaryView::NoResults => {
                if let Some(message) = summary.no_results_message() {
                    self.emit(message);
                }
            }
            SummaryView::Table(table) => {
                for row in &table.rows {
                    self.emit(&format!(
                        "{:<24} {:>16} {:>8}",
                        row.label,
                        row.amount_text(),
                        row.percentage_text()
                    ));
                }
                self.emit(&format!(
                    "{:<24} {:>16} {:>8}",
                    table.total_label(),
                    table.total_amount_text(),
                    table.total_percentage_text()
                ));
            }
        }
    }

    fn notify(
        &self,
        notification: &Notification,
    ) {
        match &notification.detail {
            Some(detail) => self.emit(&format!("⚠ {}: {detail}", notification.message)),
            None => self.emit(&format!("⚠ {}", notification.message)),
        }
    }

    fn set_busy(
        &self,
        busy: bool,
    ) {
        debug!(busy, "busy indicator");
    }

    fn offer_download(
        &self,
        filename: &str,
        document: &ReportDocument,
    ) -> Result<(), DownloadError> {
        let path = self.download_dir.join(filename);
        fs::create_dir_all(&self.download_dir)
            .and_then(|()| fs::write(&path, &document.bytes))
            .map_err(|e| DownloadError {
                filename: filename.to_string(),
                reason: e.to_string(),
            })?;

        self.emit(&format!("تم حفظ التقرير: {}", path.display()));
        self.saved.borrow_mut().push(path);
        Ok(())
    }
}
