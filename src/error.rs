//! Error family shared by every coordinate operation.

use crate::constants::{MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoordinateError>;

/// Errors raised while parsing or validating a coordinate.
///
/// All variants are caller input errors; none of them is worth retrying.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoordinateError {
    /// A required text argument was absent.
    #[error("The value cannot be null (Parameter '{param}')")]
    NullInput { param: &'static str },

    /// Text did not follow the decimal-degree grammar.
    #[error("Coordinate '{0}' is not formatted correctly")]
    InvalidCoordinate(String),

    #[error("The minimum latitude is {bound}. Value '{0}'", bound = MIN_LATITUDE)]
    MinLatitude(f64),

    #[error("The maximum latitude is {bound}. Value '{0}'", bound = MAX_LATITUDE)]
    MaxLatitude(f64),

    #[error("The minimum longitude is {bound}. Value '{0}'", bound = MIN_LONGITUDE)]
    MinLongitude(f64),

    #[error("The maximum longitude is {bound}. Value '{0}'", bound = MAX_LONGITUDE)]
    MaxLongitude(f64),
}

impl CoordinateError {
    pub(crate) fn invalid(text: impl Into<String>) -> Self {
        Self::InvalidCoordinate(text.into())
    }

    /// True for the four variants raised by the range guard.
    pub fn is_bound_violation(&self) -> bool {
        matches!(
            self,
            Self::MinLatitude(_)
                | Self::MaxLatitude(_)
                | Self::MinLongitude(_)
                | Self::MaxLongitude(_)
        )
    }

    /// The offending numeric value of a bound violation.
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::MinLatitude(v)
            | Self::MaxLatitude(v)
            | Self::MinLongitude(v)
            | Self::MaxLongitude(v) => Some(*v),
            _ => None,
        }
    }
}
