//! Range guard for latitude and longitude values.

use crate::constants::{MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE};
use crate::error::{CoordinateError, Result};

/// Returns `degree` unchanged when it lies in `[-90, 90]`.
///
/// NaN is not inside the range and is reported against the minimum bound.
pub fn check_latitude(degree: f64) -> Result<f64> {
    if !(degree >= MIN_LATITUDE) {
        return Err(CoordinateError::MinLatitude(degree));
    }
    if degree > MAX_LATITUDE {
        return Err(CoordinateError::MaxLatitude(degree));
    }
    Ok(degree)
}

/// Returns `degree` unchanged when it lies in `[-180, 180]`.
pub fn check_longitude(degree: f64) -> Result<f64> {
    if !(degree >= MIN_LONGITUDE) {
        return Err(CoordinateError::MinLongitude(degree));
    }
    if degree > MAX_LONGITUDE {
        return Err(CoordinateError::MaxLongitude(degree));
    }
    Ok(degree)
}
