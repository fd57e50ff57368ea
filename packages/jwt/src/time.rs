//! Unix-second clock and numeric date handling for `iat` / `exp`

use crate::error::{JwtError, JwtResult};
use chrono::Utc;
use serde_json::Value;

/// Current Unix time in whole seconds
#[inline]
#[must_use]
pub fn now_unix() -> i64 {
    Utc::now().timestamp()
}

/// Coerce a decoded JSON number into whole Unix seconds.
///
/// Integers are taken as-is, unsigned values past `i64::MAX` saturate and
/// floating-point values are floored, so a fractional `exp` expires at the
/// earlier whole second.
pub(crate) fn numeric_date(claim: &str, value: &Value) -> JwtResult<i64> {
    let Value::Number(number) = value else {
        return Err(JwtError::InvalidClaims(format!("{claim} must be a number")));
    };

    if let Some(seconds) = number.as_i64() {
        return Ok(seconds);
    }
    if number.as_u64().is_some() {
        return Ok(i64::MAX);
    }
    match number.as_f64() {
        // `as` saturates at the i64 bounds
        Some(seconds) if seconds.is_finite() => Ok(seconds.floor() as i64),
        _ => Err(JwtError::InvalidClaims(format!(
            "{claim} is not a representable number"
        ))),
    }
}
