use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Response of the calculation endpoint.
///
/// `labels[i]` names the heir category that receives `values[i]`. The pairing
/// is checked by the renderer, not here, so a malformed response still
/// deserializes and can be reported as an inconsistency.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CalculationResult {
    #[serde(default)]
    pub explanation: Vec<String>,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub values: Vec<Decimal>,
}

impl CalculationResult {
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn is_consistent(&self) -> bool {
        self.labels.len() == self.values.len()
    }
}
