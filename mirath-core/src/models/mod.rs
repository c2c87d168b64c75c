mod calculation_request;
mod calculation_result;
mod gender;
mod report;

pub use calculation_request::{CalculationRequest, MAX_WIVES};
pub use calculation_result::CalculationResult;
pub use gender::Gender;
pub use report::{REPORT_FILENAME, ReportDocument};
