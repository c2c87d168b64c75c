//! The page's session: the last submitted request, the live chart, and the
//! controller that drives calculate / export / reset.

mod controller;
mod error;
mod state;

pub use controller::{CalculateOutcome, SessionController};
pub use error::{
    CALCULATION_FAILED_MESSAGE, DATA_INCONSISTENCY_MESSAGE, EXPORT_FAILED_MESSAGE,
    NO_SESSION_MESSAGE, SessionError,
};
pub use state::{Session, SessionStatus, Ticket};
