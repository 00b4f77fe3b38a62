//! Decimal-degree text parsing.
//!
//! A degree token is an optionally signed run of digits with at most one
//! fractional separator, which may be either `.` or `,`:
//!
//! ```text
//! 40.601203     -8,668173     -24     " 31 "
//! ```
//!
//! Surrounding whitespace is ignored. Interior whitespace, exponents, and
//! spelled-out values such as `NaN` or `inf` are rejected. The separator
//! never depends on the process locale: `"100,8173"` and `"100.8173"` parse to
//! the same value.

use crate::error::{CoordinateError, Result};

/// Parse degree text with `.method()` syntax.
///
/// ```
/// use geodd::parsing::ParseDegree;
///
/// assert_eq!("-8,668173".to_dd_point().unwrap(), -8.668173);
/// assert!("1.2.1".to_dd_point().is_err());
/// ```
pub trait ParseDegree {
    fn to_dd_point(&self) -> Result<f64>;
}

impl ParseDegree for str {
    fn to_dd_point(&self) -> Result<f64> {
        to_dd_point(self)
    }
}

/// Parses one decimal-degree token.
///
/// Fails with [`CoordinateError::InvalidCoordinate`] carrying the original
/// text whenever the token does not follow the grammar above.
pub fn to_dd_point(text: &str) -> Result<f64> {
    let invalid = || CoordinateError::invalid(text);

    let trimmed = text.trim();
    let (sign, body) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let mut parts = body.split(['.', ',']);
    let integer = parts.next().unwrap_or("");
    let fraction = parts.next();
    if parts.next().is_some() {
        return Err(invalid());
    }

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(integer) || !fraction.is_none_or(all_digits) {
        return Err(invalid());
    }
    if integer.is_empty() && fraction.is_none_or(str::is_empty) {
        return Err(invalid());
    }

    let normalized = match fraction {
        Some(fraction) => format!("{sign}{integer}.{fraction}"),
        None => format!("{sign}{integer}"),
    };
    normalized.parse::<f64>().map_err(|_| invalid())
}

/// Unwraps an optional text argument, reporting its absence by name.
pub fn required<'a>(value: Option<&'a str>, param: &'static str) -> Result<&'a str> {
    value.ok_or(CoordinateError::NullInput { param })
}

/// [`to_dd_point`] for a possibly absent argument.
pub fn to_dd_point_opt(text: Option<&str>) -> Result<f64> {
    to_dd_point(required(text, "ddPoint")?)
}
