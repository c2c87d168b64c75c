//! The calculator's input form: control identifiers, reading a request out
//! of the controls, and restoring defaults.

pub mod controls;
pub mod parse;
pub mod reader;
pub mod reset;

pub use controls::{ControlId, ControlKind, FieldGroup, FormControls, InMemoryForm, apply_visibility};
pub use reader::{ValidationError, read_request};
pub use reset::{DEFAULT_ESTATE, restore_defaults};
