//! Fallible text-to-number conversions used by handlers.

use std::num::IntErrorKind;

use crate::core::error::{CollectionError, Result};

/// Parse an integer, ignoring surrounding whitespace.
///
/// Well-formed integers beyond `i64` saturate to `i64::MAX` / `i64::MIN`, so
/// callers see them as out of range rather than as malformed input.
pub fn parse_integer(raw: &str) -> Result<i64> {
    let trimmed = raw.trim();
    match trimmed.parse::<i64>() {
        Ok(value) => Ok(value),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(CollectionError::InputFormat {
                input: trimmed.to_string(),
            }),
        },
    }
}

/// Parse a (1-based) list position. Sign and range are checked by the store,
/// not here.
pub fn parse_position(raw: &str) -> Result<i64> {
    parse_integer(raw)
}

/// Parse a floating point operand for the calculator.
pub fn parse_number(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    trimmed
        .parse::<f64>()
        .map_err(|_| CollectionError::InputFormat {
            input: trimmed.to_string(),
        })
}
