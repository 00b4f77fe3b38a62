//! Decimal-degree coordinate value type.
//!
//! A [`GeoDDCoordinate`] can only be obtained through the range guard, so every
//! instance holds a latitude in `[-90, 90]` and a longitude in `[-180, 180]`.
//! Instances are immutable `Copy` values.
//!
//! # Text form
//!
//! The combined form is `"<lat>, <lon>"`. Each half accepts `.` or `,` as its
//! fractional separator when parsed on its own ([`GeoDDCoordinate::parse_pair`]),
//! but inside the combined form the comma separates the two axes, so only `.`
//! can be used there.
//!
//! ```
//! use geodd::GeoDDCoordinate;
//!
//! let c: GeoDDCoordinate = "81.54  , -54.1272".parse()?;
//! assert_eq!(c.latitude(), 81.54);
//! assert_eq!(c.to_string(), "81.54, -54.1272");
//!
//! let same = GeoDDCoordinate::parse_pair("81,54", "-54,1272")?;
//! assert_eq!(c, same);
//! # Ok::<(), geodd::CoordinateError>(())
//! ```
//!
//! # Equality
//!
//! Two coordinates are equal when both axes differ by strictly less than
//! [`TOLERANCE`]. Hashing quantizes each axis to [`HASH_TOLERANCE`] buckets
//! first so that values within the tolerance land in the same bucket.

use crate::constants::{HASH_TOLERANCE, TOLERANCE};
use crate::distance;
use crate::error::{CoordinateError, Result};
use crate::guard::{check_latitude, check_longitude};
use crate::parsing::{required, to_dd_point};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "CoordinateDocument")]
pub struct GeoDDCoordinate {
    latitude: f64,
    longitude: f64,
}

#[derive(Deserialize)]
struct CoordinateDocument {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<CoordinateDocument> for GeoDDCoordinate {
    type Error = CoordinateError;

    fn try_from(doc: CoordinateDocument) -> Result<Self> {
        Self::new(doc.latitude, doc.longitude)
    }
}

impl GeoDDCoordinate {
    /// Validates latitude, then longitude, and builds the coordinate.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        Ok(Self {
            latitude: check_latitude(latitude)?,
            longitude: check_longitude(longitude)?,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// `[latitude, longitude]`.
    pub fn coordinate(&self) -> [f64; 2] {
        [self.latitude, self.longitude]
    }

    pub fn into_parts(self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }

    /// Parses each axis separately. Bound violations are reported as such.
    pub fn parse_pair(latitude: &str, longitude: &str) -> Result<Self> {
        let latitude = check_latitude(to_dd_point(latitude)?)?;
        let longitude = check_longitude(to_dd_point(longitude)?)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// [`parse_pair`](Self::parse_pair) for fields that may be missing.
    pub fn parse_fields(latitude: Option<&str>, longitude: Option<&str>) -> Result<Self> {
        let latitude = required(latitude, "latitude")?;
        let longitude = required(longitude, "longitude")?;
        Self::parse_pair(latitude, longitude)
    }

    /// Parses the combined `"<lat>, <lon>"` form.
    ///
    /// Any failure, out-of-range values included, is reported as
    /// [`CoordinateError::InvalidCoordinate`] carrying the whole input.
    pub fn parse(coordinate: &str) -> Result<Self> {
        let invalid = || CoordinateError::invalid(coordinate);

        let mut segments = coordinate.split(',');
        match (segments.next(), segments.next(), segments.next()) {
            (Some(latitude), Some(longitude), None) => {
                Self::parse_pair(latitude, longitude).map_err(|_| invalid())
            }
            _ => Err(invalid()),
        }
    }

    /// [`parse`](Self::parse) for an argument that may be missing.
    pub fn parse_opt(coordinate: Option<&str>) -> Result<Self> {
        Self::parse(required(coordinate, "coordinate")?)
    }

    pub fn try_parse(coordinate: &str) -> Option<Self> {
        Self::parse(coordinate).ok()
    }

    pub fn try_parse_pair(latitude: &str, longitude: &str) -> Option<Self> {
        Self::parse_pair(latitude, longitude).ok()
    }

    /// Same text as `Display`: `"<lat>, <lon>"` with `.` decimals.
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }

    /// Great-circle distance in meters, rounded to `decimals` places.
    pub fn distance_to(&self, other: &Self, decimals: u32) -> f64 {
        distance::distance(
            self.latitude,
            self.longitude,
            other.latitude,
            other.longitude,
            decimals,
        )
    }

    pub fn precise_distance_to(&self, other: &Self) -> f64 {
        distance::precise_distance(self.latitude, self.longitude, other.latitude, other.longitude)
    }

    /// Hash combining both quantized axes, stable across runs.
    pub fn hash_code(&self) -> i64 {
        let mut hash: i64 = 17;
        hash = hash
            .wrapping_mul(23)
            .wrapping_add(component_hash(self.latitude));
        hash = hash
            .wrapping_mul(23)
            .wrapping_add(component_hash(self.longitude));
        hash
    }
}

fn quantize(value: f64, bucket: f64) -> f64 {
    (value / bucket).round() * bucket
}

fn component_hash(value: f64) -> i64 {
    // + 0.0 folds -0.0 into 0.0
    let bits = (quantize(value, HASH_TOLERANCE) + 0.0).to_bits();
    (bits ^ (bits >> 32)) as i64
}

impl PartialEq for GeoDDCoordinate {
    fn eq(&self, other: &Self) -> bool {
        (self.latitude - other.latitude).abs() < TOLERANCE
            && (self.longitude - other.longitude).abs() < TOLERANCE
    }
}

// The guard keeps NaN out, so equality is reflexive.
impl Eq for GeoDDCoordinate {}

/// Tolerance equality is not transitive, so two equal values sitting on
/// either side of a bucket midpoint can still hash apart.
impl Hash for GeoDDCoordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i64(self.hash_code());
    }
}

impl fmt::Display for GeoDDCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

impl FromStr for GeoDDCoordinate {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<GeoDDCoordinate> for (f64, f64) {
    fn from(coordinate: GeoDDCoordinate) -> Self {
        coordinate.into_parts()
    }
}

impl TryFrom<(f64, f64)> for GeoDDCoordinate {
    type Error = CoordinateError;

    fn try_from(pair: (f64, f64)) -> Result<Self> {
        Self::new(pair.0, pair.1)
    }
}
