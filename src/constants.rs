//! Fixed geographic bounds and numeric constants.

pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LATITUDE: f64 = -MAX_LATITUDE;

pub const MAX_LONGITUDE: f64 = 180.0;
pub const MIN_LONGITUDE: f64 = -MAX_LONGITUDE;

/// Radius of a spherical Earth, in kilometers.
pub const EARTH_RADIUS_KILOMETERS: f64 = 6371.071;
/// Radius of a spherical Earth, in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_071.0;

/// Two coordinates are equal when both axes differ by strictly less than this.
pub const TOLERANCE: f64 = 1e-12;

/// Bucket size used to quantize coordinates before hashing. Must not be
/// smaller than [`TOLERANCE`].
pub const HASH_TOLERANCE: f64 = 1e-10;

/// Default number of decimal places kept by the rounded distance.
pub const DEFAULT_DECIMALS: u32 = 0;

/// Largest rounding precision honored; a double carries no more.
pub const MAX_DECIMALS: u32 = 15;
