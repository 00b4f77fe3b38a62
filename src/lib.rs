//! Validated decimal-degree coordinates and great-circle distances.
//!
//! ```
//! use geodd::{DistanceUnit, GeoDDCoordinate};
//!
//! let faro = GeoDDCoordinate::parse("37.165611, -8.545786")?;
//! let lisbon = GeoDDCoordinate::parse_pair("38,737545", "-9,370047")?;
//!
//! let meters = faro.distance_to(&lisbon, 0);
//! assert_eq!(meters, 189_143.0);
//! assert!((DistanceUnit::Meter.convert(meters, DistanceUnit::Kilometer) - 189.143).abs() < 1e-9);
//! # Ok::<(), geodd::CoordinateError>(())
//! ```

pub mod constants;
pub mod coordinate;
pub mod direction;
pub mod distance;
pub mod error;
pub mod geojson;
pub mod guard;
pub mod parsing;
pub mod units;

pub use coordinate::GeoDDCoordinate;
pub use direction::{CardinalDirection, GeographicalOrientation};
pub use distance::{distance, precise_distance, to_degree, to_radian};
pub use error::{CoordinateError, Result};
pub use geojson::GeoJson;
pub use units::DistanceUnit;
