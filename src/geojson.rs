//! GeoJSON `Point` adapter.
//!
//! GeoJSON orders positions as `[longitude, latitude]`, the reverse of
//! [`GeoDDCoordinate`]. Converting back re-runs the range guard.

use crate::coordinate::GeoDDCoordinate;
use crate::error::CoordinateError;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoJson {
    #[serde(rename = "type")]
    kind: &'static str,
    coordinates: [f64; 2],
}

impl GeoJson {
    pub const TYPE: &'static str = "Point";

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// `[longitude, latitude]`.
    pub fn coordinates(&self) -> [f64; 2] {
        self.coordinates
    }
}

impl From<GeoDDCoordinate> for GeoJson {
    fn from(coordinate: GeoDDCoordinate) -> Self {
        Self {
            kind: Self::TYPE,
            coordinates: [coordinate.longitude(), coordinate.latitude()],
        }
    }
}

impl TryFrom<GeoJson> for GeoDDCoordinate {
    type Error = CoordinateError;

    fn try_from(point: GeoJson) -> Result<Self, Self::Error> {
        let [longitude, latitude] = point.coordinates;
        GeoDDCoordinate::new(latitude, longitude)
    }
}

#[derive(Deserialize)]
struct PointDocument {
    #[serde(rename = "type")]
    kind: String,
    coordinates: [f64; 2],
}

impl<'de> Deserialize<'de> for GeoJson {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let doc = PointDocument::deserialize(deserializer)?;
        if doc.kind != Self::TYPE {
            return Err(de::Error::custom(format!(
                "unsupported geometry type '{}', expected '{}'",
                doc.kind,
                Self::TYPE
            )));
        }
        Ok(Self {
            kind: Self::TYPE,
            coordinates: doc.coordinates,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swaps_axis_order() {
        let c = GeoDDCoordinate::new(38.737545, -9.370047).unwrap();
        let point = GeoJson::from(c);
        assert_eq!(point.kind(), "Point");
        assert_eq!(point.coordinates(), [-9.370047, 38.737545]);

        let back = GeoDDCoordinate::try_from(point).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn serializes_as_geojson_point() {
        let c = GeoDDCoordinate::new(12.152, -8.12).unwrap();
        let json = serde_json::to_string(&GeoJson::from(c)).unwrap();
        assert_eq!(json, r#"{"type":"Point","coordinates":[-8.12,12.152]}"#);
    }

    #[test]
    fn deserializes_and_validates() {
        let point: GeoJson =
            serde_json::from_str(r#"{"type":"Point","coordinates":[170.5,-45.25]}"#).unwrap();
        let c = GeoDDCoordinate::try_from(point).unwrap();
        assert_eq!(c.latitude(), -45.25);
        assert_eq!(c.longitude(), 170.5);

        let out_of_range: GeoJson =
            serde_json::from_str(r#"{"type":"Point","coordinates":[10.0,95.0]}"#).unwrap();
        assert_eq!(
            GeoDDCoordinate::try_from(out_of_range),
            Err(CoordinateError::MaxLatitude(95.0))
        );
    }

    #[test]
    fn rejects_other_geometry_types() {
        let err =
            serde_json::from_str::<GeoJson>(r#"{"type":"LineString","coordinates":[1.0,2.0]}"#)
                .unwrap_err();
        assert!(err.to_string().contains("unsupported geometry type 'LineString'"));
    }
}
