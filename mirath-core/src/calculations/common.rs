//! Rounding and formatting shared by the summary table and chart labels.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use mirath_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(33.334)), dec!(33.33));
/// assert_eq!(round_half_up(dec!(33.335)), dec!(33.34));
/// assert_eq!(round_half_up(dec!(-33.335)), dec!(-33.34)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Formats a value with exactly two fraction digits (`50` → `"50.00"`).
///
/// ```
/// use rust_decimal_macros::dec;
/// use mirath_core::calculations::common::two_places;
///
/// assert_eq!(two_places(dec!(50)), "50.00");
/// assert_eq!(two_places(dec!(12.345)), "12.35");
/// ```
pub fn two_places(value: Decimal) -> String {
    format!("{:.2}", round_half_up(value))
}

/// Share of `amount` in `estate`, in percent, rounded to two places.
///
/// Returns `None` when `estate` is not positive.
pub fn percentage_of(
    amount: Decimal,
    estate: Decimal,
) -> Option<Decimal> {
    if estate <= Decimal::ZERO {
        return None;
    }
    amount
        .checked_div(estate)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .map(round_half_up)
}
