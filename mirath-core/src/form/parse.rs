use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a string cannot be parsed as a [`Decimal`].
#[derive(Debug, Error)]
#[error("invalid decimal '{input}': {source}")]
pub struct ParseDecimalError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Normalizes input for decimal parsing: trims whitespace and removes commas (thousands separator).
fn normalize_decimal_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a string into an optional [`Decimal`].
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`) and exponent
/// notation (e.g. `"1e5"`).
/// Empty or whitespace-only input is `Ok(None)`; anything else that does not
/// parse is an error.
pub fn parse_optional_decimal(s: &str) -> Result<Option<Decimal>, ParseDecimalError> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return Ok(None);
    }
    let parsed = normalized.parse::<Decimal>().or_else(|e| {
        if normalized.contains(['e', 'E']) {
            Decimal::from_scientific(&normalized)
        } else {
            Err(e)
        }
    });
    parsed.map(Some).map_err(|e| {
        tracing::debug!(input = %s, "invalid decimal: {}", e);
        ParseDecimalError {
            input: s.to_string(),
            source: e,
        }
    })
}

/// Parses a head-count control permissively.
///
/// Reads an optional `+` followed by the leading run of ASCII digits, so
/// `"3"`, `" 3 "`, `"3 sons"` and `"3.7"` all give 3. Input with no leading
/// digits (empty, negative, text) gives 0, as does a number too large for
/// `u32`. Never fails.
pub fn parse_count(s: Option<&str>) -> u32 {
    let Some(s) = s else {
        return 0;
    };
    let s = s.trim();
    let s = s.strip_prefix('+').unwrap_or(s);
    let digits_end = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(s.len(), |(i, _)| i);

    s[..digits_end].parse().unwrap_or_else(|_| {
        if digits_end > 0 {
            tracing::warn!(input = %s, "count out of range, using 0");
        }
        0
    })
}
