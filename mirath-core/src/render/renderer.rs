use rust_decimal::Decimal;
use tracing::debug;

use super::chart::{ChartHandle, ChartSpec};
use crate::{
    calculations::{SummaryError, SummaryTable, SummaryView},
    models::CalculationResult,
    presentation::Presentation,
};

/// Shown in place of the explanation when the service returned none.
pub const NO_HEIRS_MESSAGE: &str = "لم يتم تحديد أي وارثين.";

/// Paints explanation, chart and summary for one calculation result.
///
/// The renderer is the only code that creates or releases chart handles. The
/// controller lends it the slot holding the live handle, so there is never
/// more than one.
pub struct ResultRenderer;

impl ResultRenderer {
    /// Renders `result` against the `estate` it was computed for.
    ///
    /// The response is checked before anything is painted: on error the
    /// page, and the chart in `chart_slot`, are left as they were.
    ///
    /// # Errors
    ///
    /// * [`SummaryError::LengthMismatch`] when labels and values do not pair up.
    /// * [`SummaryError::NonPositiveEstate`] when there are values to show and
    ///   `estate <= 0`.
    /// * [`SummaryError::NegativeValue`] or [`SummaryError::Overflow`] when the
    ///   shares cannot be tabulated.
    pub fn render(
        result: &CalculationResult,
        estate: Decimal,
        presentation: &dyn Presentation,
        chart_slot: &mut Option<Box<dyn ChartHandle>>,
    ) -> Result<(), SummaryError> {
        if !result.is_consistent() {
            return Err(SummaryError::LengthMismatch {
                labels: result.labels.len(),
                values: result.values.len(),
            });
        }

        let summary = if result.is_empty() {
            SummaryView::NoResults
        } else {
            SummaryView::Table(SummaryTable::build(&result.labels, &result.values, estate)?)
        };

        presentation.show_results(true);
        presentation.scroll_results_into_view();

        if result.explanation.is_empty() {
            presentation.set_explanation(&[NO_HEIRS_MESSAGE.to_string()]);
        } else {
            presentation.set_explanation(&result.explanation);
        }

        if let Some(previous) = chart_slot.take() {
            debug!("releasing previous chart");
            previous.release();
        }

        if result.is_empty() {
            presentation.set_chart_visible(false);
        } else {
            let spec = ChartSpec::from_pairs(&result.labels, &result.values);
            presentation.set_chart_visible(true);
            *chart_slot = Some(presentation.paint_chart(&spec));
            debug!(segments = spec.segments.len(), "chart painted");
        }

        presentation.set_summary(&summary);
        Ok(())
    }
}
