pub mod visibility;

pub use visibility::{SpouseVisibility, visibility_for, visibility_for_value};
