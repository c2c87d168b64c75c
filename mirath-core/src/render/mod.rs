//! Painting a calculation result onto the page.

pub mod chart;
pub mod renderer;

pub use chart::{ChartHandle, ChartKind, ChartSegment, ChartSpec, PALETTE, color_for};
pub use renderer::{NO_HEIRS_MESSAGE, ResultRenderer};
