//! Figures derived on the client from a calculation response.
//!
//! The shares themselves come from the service; this module only turns them
//! into the rounded amounts and percentages shown in the summary table.

pub mod common;
pub mod summary;

pub use summary::{SummaryError, SummaryRow, SummaryTable, SummaryView, TOTAL_LABEL};
