//! Builds a [`CalculationRequest`] from the form's controls.
//!
//! Only the estate and the gender can make a read fail. Head counts parse
//! permissively (see [`parse_count`]) and the spouse field that does not
//! apply to the selected gender is neutralised whatever its control holds.

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::warn;

use super::{
    controls::{ControlId, FormControls},
    parse::{parse_count, parse_optional_decimal},
};
use crate::models::{CalculationRequest, Gender, MAX_WIVES};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("estate is required")]
    MissingEstate,

    #[error("estate '{0}' is not a number")]
    InvalidEstate(String),

    #[error("estate must be greater than zero, got {0}")]
    NonPositiveEstate(Decimal),

    #[error("deceased gender is required")]
    MissingGender,

    #[error("unknown deceased gender '{0}'")]
    UnknownGender(String),
}

impl ValidationError {
    /// Text shown to the user.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::MissingEstate => "قيمة التركة مطلوبة",
            Self::InvalidEstate(_) => "قيمة التركة غير صحيحة",
            Self::NonPositiveEstate(_) => "قيمة التركة يجب أن تكون أكبر من صفر",
            Self::MissingGender | Self::UnknownGender(_) => "يرجى اختيار جنس المتوفى",
        }
    }
}

/// Reads the current control values into a request.
///
/// # Errors
///
/// Returns [`ValidationError`] when the estate is missing, not a number or
/// not positive, or when no known gender is selected.
pub fn read_request(form: &dyn FormControls) -> Result<CalculationRequest, ValidationError> {
    let estate = read_estate(form)?;
    let deceased_gender = read_gender(form)?;

    let wives = parse_count(form.value(ControlId::Wives).as_deref());
    let wives_count = if wives > u32::from(MAX_WIVES) {
        warn!(wives, max = MAX_WIVES, "wives count above maximum, clamping");
        MAX_WIVES
    } else {
        // Bounded by MAX_WIVES above.
        wives as u8
    };

    let count = |id: ControlId| parse_count(form.value(id).as_deref());

    let request = CalculationRequest {
        estate,
        deceased_gender,
        husband_present: form.is_checked(ControlId::Husband),
        wives_count,
        father_present: form.is_checked(ControlId::Father),
        mother_present: form.is_checked(ControlId::Mother),
        grandfather_present: form.is_checked(ControlId::Grandfather),
        grandmother_present: form.is_checked(ControlId::Grandmother),
        sons_count: count(ControlId::Sons),
        daughters_count: count(ControlId::Daughters),
        brothers_count: count(ControlId::Brothers),
        sisters_count: count(ControlId::Sisters),
        half_brothers_father_count: count(ControlId::HalfBrothersFather),
        half_sisters_father_count: count(ControlId::HalfSistersFather),
    };

    Ok(request.gated())
}

fn read_estate(form: &dyn FormControls) -> Result<Decimal, ValidationError> {
    let raw = form.value(ControlId::Estate).unwrap_or_default();
    let estate = parse_optional_decimal(&raw)
        .map_err(|_| ValidationError::InvalidEstate(raw.trim().to_string()))?
        .ok_or(ValidationError::MissingEstate)?;

    if estate <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveEstate(estate));
    }
    Ok(estate)
}

fn read_gender(form: &dyn FormControls) -> Result<Gender, ValidationError> {
    let raw = form
        .value(ControlId::DeceasedGender)
        .filter(|v| !v.trim().is_empty())
        .ok_or(ValidationError::MissingGender)?;

    Gender::parse(&raw).ok_or(ValidationError::UnknownGender(raw))
}
