use rust_decimal::Decimal;

use crate::calculations::common::two_places;

/// Segment colors, assigned by position.
pub const PALETTE: [&str; 16] = [
    "#667eea", "#764ba2", "#ec4899", "#f59e0b", "#10b981", "#06b6d4", "#8b5cf6", "#f97316",
    "#6366f1", "#a855f7", "#d946ef", "#db2777", "#06b6d4", "#14b8a6", "#84cc16", "#eab308",
];

/// Color of the segment at `index`; wraps around past the end of [`PALETTE`].
pub fn color_for(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartKind {
    #[default]
    Doughnut,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSegment {
    /// Heir label decorated with its amount, e.g. `"الأم: 16666.67"`.
    pub label: String,
    pub value: Decimal,
    pub color: &'static str,
}

/// Everything a host needs to paint the proportional chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub segments: Vec<ChartSegment>,
    pub border_color: &'static str,
    pub border_width: u32,
}

impl ChartSpec {
    /// Builds one segment per `(label, value)` pair, in order.
    ///
    /// Callers check that both slices have the same length; extra entries on
    /// either side are ignored.
    pub fn from_pairs(
        labels: &[String],
        values: &[Decimal],
    ) -> Self {
        let segments = labels
            .iter()
            .zip(values)
            .enumerate()
            .map(|(i, (label, &value))| ChartSegment {
                label: format!("{label}: {}", two_places(value)),
                value,
                color: color_for(i),
            })
            .collect();

        Self {
            kind: ChartKind::Doughnut,
            segments,
            border_color: "#fff",
            border_width: 3,
        }
    }

    /// Sum of the segment values, or `None` if it does not fit in a [`Decimal`].
    pub fn total(&self) -> Option<Decimal> {
        self.segments
            .iter()
            .try_fold(Decimal::ZERO, |sum, s| sum.checked_add(s.value))
    }
}

/// Owned reference to a painted chart.
///
/// Releasing consumes the handle so a released chart cannot be touched again.
pub trait ChartHandle {
    fn release(self: Box<Self>);
}
