use serde::{Deserialize, Serialize};

/// Gender of the deceased. Decides which spouse fields are meaningful.
///
/// The calculation service speaks Arabic on the wire, so the serialized
/// form is `"ذكر"` / `"أنثى"` rather than the variant names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    #[serde(rename = "ذكر")]
    Male,
    #[serde(rename = "أنثى")]
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "ذكر",
            Self::Female => "أنثى",
        }
    }

    /// Accepts the wire spelling or the English name (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        match s {
            "ذكر" => Some(Self::Male),
            "أنثى" => Some(Self::Female),
            _ if s.eq_ignore_ascii_case("male") => Some(Self::Male),
            _ if s.eq_ignore_ascii_case("female") => Some(Self::Female),
            _ => None,
        }
    }
}
