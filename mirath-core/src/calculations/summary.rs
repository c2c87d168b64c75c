//! Summary table shown under the chart.
//!
//! | column     | source                                     |
//! |------------|--------------------------------------------|
//! | percentage | `value / estate * 100`, half-up, 2 places   |
//! | amount     | `value`, 2 places                          |
//! | heir       | `label`                                    |
//!
//! The total row sums the amounts but its percentage is fixed at `100.00`:
//! the service is expected to distribute the whole estate, so the column is
//! not recomputed from the sum.

use rust_decimal::Decimal;
use thiserror::Error;

use super::common::{percentage_of, two_places};

/// Label of the closing row.
pub const TOTAL_LABEL: &str = "الإجمالي";

/// Text of the single row shown when the service returned no shares.
pub const NO_RESULTS_MESSAGE: &str = "لا توجد نتائج للعرض";

/// Percentage printed on the total row.
pub const TOTAL_PERCENTAGE: &str = "100.00%";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SummaryError {
    #[error("response pairs {labels} labels with {values} values")]
    LengthMismatch { labels: usize, values: usize },

    #[error("estate must be positive to compute percentages, got {0}")]
    NonPositiveEstate(Decimal),

    #[error("share of '{label}' is negative: {value}")]
    NegativeValue { label: String, value: Decimal },

    #[error("shares are too large to total")]
    Overflow,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub label: String,
    pub amount: Decimal,
    /// Already rounded to two places.
    pub percentage: Decimal,
}

impl SummaryRow {
    pub fn amount_text(&self) -> String {
        two_places(self.amount)
    }

    pub fn percentage_text(&self) -> String {
        format!("{}%", two_places(self.percentage))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryTable {
    pub rows: Vec<SummaryRow>,
    pub total_amount: Decimal,
}

impl SummaryTable {
    /// Pairs `labels` with `values` in order and derives each row's percentage.
    ///
    /// # Errors
    ///
    /// * [`SummaryError::LengthMismatch`] when the sequences differ in length.
    /// * [`SummaryError::NonPositiveEstate`] when `estate <= 0`.
    /// * [`SummaryError::NegativeValue`] when a share is below zero.
    /// * [`SummaryError::Overflow`] when the shares or a percentage do not fit
    ///   in a [`Decimal`].
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use mirath_core::calculations::SummaryTable;
    ///
    /// let labels = vec!["الزوج".to_string(), "الأم".to_string()];
    /// let values = vec![dec!(50000), dec!(50000)];
    /// let table = SummaryTable::build(&labels, &values, dec!(100000)).unwrap();
    ///
    /// assert_eq!(table.rows[0].percentage_text(), "50.00%");
    /// assert_eq!(table.total_amount_text(), "100000.00");
    /// ```
    pub fn build(
        labels: &[String],
        values: &[Decimal],
        estate: Decimal,
    ) -> Result<Self, SummaryError> {
        if labels.len() != values.len() {
            return Err(SummaryError::LengthMismatch {
                labels: labels.len(),
                values: values.len(),
            });
        }

        if estate <= Decimal::ZERO {
            return Err(SummaryError::NonPositiveEstate(estate));
        }

        let mut rows = Vec::with_capacity(values.len());
        let mut total_amount = Decimal::ZERO;
        for (label, &amount) in labels.iter().zip(values) {
            if amount.is_sign_negative() && !amount.is_zero() {
                return Err(SummaryError::NegativeValue {
                    label: label.clone(),
                    value: amount,
                });
            }
            let percentage = percentage_of(amount, estate).ok_or(SummaryError::Overflow)?;
            total_amount = total_amount
                .checked_add(amount)
                .ok_or(SummaryError::Overflow)?;
            rows.push(SummaryRow {
                label: label.clone(),
                amount,
                percentage,
            });
        }

        Ok(Self { rows, total_amount })
    }

    pub fn total_label(&self) -> &'static str {
        TOTAL_LABEL
    }

    pub fn total_amount_text(&self) -> String {
        two_places(self.total_amount)
    }

    pub fn total_percentage_text(&self) -> &'static str {
        TOTAL_PERCENTAGE
    }
}

/// What the summary region shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryView {
    /// One row reading [`NO_RESULTS_MESSAGE`].
    NoResults,
    Table(SummaryTable),
}

impl SummaryView {
    pub fn no_results_message(&self) -> Option<&'static str> {
        match self {
            Self::NoResults => Some(NO_RESULTS_MESSAGE),
            Self::Table(_) => None,
        }
    }
}
