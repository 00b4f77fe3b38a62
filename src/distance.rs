//! Great-circle distance on a spherical Earth (Haversine).
//!
//! Inputs are raw degrees and are not validated here; NaN and infinite
//! values simply propagate into the result. Go through
//! [`GeoDDCoordinate`](crate::GeoDDCoordinate) when validated input is needed.

use crate::constants::{EARTH_RADIUS_METERS, MAX_DECIMALS};
use std::f64::consts::PI;

pub fn to_radian(degree: f64) -> f64 {
    degree * (PI / 180.0)
}

pub fn to_degree(radian: f64) -> f64 {
    radian * (180.0 / PI)
}

/// Unrounded distance in meters between two points given in degrees.
pub fn precise_distance(latitude1: f64, longitude1: f64, latitude2: f64, longitude2: f64) -> f64 {
    let latitude1 = to_radian(latitude1);
    let longitude1 = to_radian(longitude1);
    let latitude2 = to_radian(latitude2);
    let longitude2 = to_radian(longitude2);

    let delta_latitude = latitude2 - latitude1;
    let delta_longitude = longitude2 - longitude1;

    let a = (delta_latitude / 2.0).sin().powi(2)
        + latitude1.cos() * latitude2.cos() * (delta_longitude / 2.0).sin().powi(2);

    // central angle in radians
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_METERS * c
}

/// Distance in meters rounded to `decimals` places, ties to even.
pub fn distance(
    latitude1: f64,
    longitude1: f64,
    latitude2: f64,
    longitude2: f64,
    decimals: u32,
) -> f64 {
    round_half_even(
        precise_distance(latitude1, longitude1, latitude2, longitude2),
        decimals,
    )
}

/// Rounds to `decimals` places with banker's rounding.
///
/// Precisions beyond [`MAX_DECIMALS`] leave the value untouched.
pub fn round_half_even(value: f64, decimals: u32) -> f64 {
    if decimals > MAX_DECIMALS || !value.is_finite() {
        return value;
    }
    if decimals == 0 {
        return value.round_ties_even();
    }

    let scale = 10f64.powi(decimals as i32);
    (value * scale).round_ties_even() / scale
}
