use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Gender;

/// Upper bound for `wives_count`.
pub const MAX_WIVES: u8 = 4;

/// Snapshot of the form sent to the calculation and export endpoints.
///
/// Serialization always goes through [`CalculationRequest::gated`], so the
/// spouse field that does not apply to `deceased_gender` reaches the wire as
/// its neutral value no matter what the struct holds.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "WireRequest", from = "WireRequest")]
pub struct CalculationRequest {
    pub estate: Decimal,
    pub deceased_gender: Gender,

    // Spouse (gated by gender)
    pub husband_present: bool,
    pub wives_count: u8,

    // Ascendants
    pub father_present: bool,
    pub mother_present: bool,
    pub grandfather_present: bool,
    pub grandmother_present: bool,

    // Descendants and siblings
    pub sons_count: u32,
    pub daughters_count: u32,
    pub brothers_count: u32,
    pub sisters_count: u32,
    pub half_brothers_father_count: u32,
    pub half_sisters_father_count: u32,
}

impl CalculationRequest {
    /// Forces the inactive spouse field to its neutral value.
    pub fn gated(mut self) -> Self {
        match self.deceased_gender {
            Gender::Male => self.husband_present = false,
            Gender::Female => self.wives_count = 0,
        }
        self.wives_count = self.wives_count.min(MAX_WIVES);
        self
    }
}

/// Field names the service expects.
#[derive(Serialize, Deserialize)]
struct WireRequest {
    #[serde(with = "rust_decimal::serde::float")]
    estate: Decimal,
    deceased_gender: Gender,
    #[serde(default)]
    husband: bool,
    #[serde(default)]
    wives: u8,
    #[serde(default)]
    father: bool,
    #[serde(default)]
    mother: bool,
    #[serde(default)]
    sons: u32,
    #[serde(default)]
    daughters: u32,
    #[serde(default)]
    brothers: u32,
    #[serde(default)]
    sisters: u32,
    #[serde(default)]
    grandfather: bool,
    #[serde(default)]
    grandmother: bool,
    #[serde(default)]
    halfbrothers_father: u32,
    #[serde(default)]
    halfsisters_father: u32,
}

impl From<CalculationRequest> for WireRequest {
    fn from(request: CalculationRequest) -> Self {
        let r = request.gated();
        Self {
            estate: r.estate,
            deceased_gender: r.deceased_gender,
            husband: r.husband_present,
            wives: r.wives_count,
            father: r.father_present,
            mother: r.mother_present,
            sons: r.sons_count,
            daughters: r.daughters_count,
            brothers: r.brothers_count,
            sisters: r.sisters_count,
            grandfather: r.grandfather_present,
            grandmother: r.grandmother_present,
            halfbrothers_father: r.half_brothers_father_count,
            halfsisters_father: r.half_sisters_father_count,
        }
    }
}

impl From<WireRequest> for CalculationRequest {
    fn from(w: WireRequest) -> Self {
        Self {
            estate: w.estate,
            deceased_gender: w.deceased_gender,
            husband_present: w.husband,
            wives_count: w.wives,
            father_present: w.father,
            mother_present: w.mother,
            grandfather_present: w.grandfather,
            grandmother_present: w.grandmother,
            sons_count: w.sons,
            daughters_count: w.daughters,
            brothers_count: w.brothers,
            sisters_count: w.sisters,
            half_brothers_father_count: w.halfbrothers_father,
            half_sisters_father_count: w.halfsisters_father,
        }
        .gated()
    }
}
