//! Which spouse group of the form applies to the deceased.
//!
//! A deceased woman may leave a husband; a deceased man may leave up to four
//! wives. Only one of the two groups is ever relevant.

use crate::models::Gender;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpouseVisibility {
    pub show_husband_group: bool,
    pub show_wives_group: bool,
}

impl SpouseVisibility {
    /// Both groups hidden; used when the gender control holds no known value.
    pub const NONE: Self = Self {
        show_husband_group: false,
        show_wives_group: false,
    };
}

pub fn visibility_for(gender: Gender) -> SpouseVisibility {
    SpouseVisibility {
        show_husband_group: gender == Gender::Female,
        show_wives_group: gender == Gender::Male,
    }
}

/// Like [`visibility_for`], for a raw gender control value.
pub fn visibility_for_value(raw: Option<&str>) -> SpouseVisibility {
    raw.and_then(Gender::parse)
        .map(visibility_for)
        .unwrap_or(SpouseVisibility::NONE)
}
