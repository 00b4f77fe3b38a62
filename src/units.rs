//! Length units and conversions between them.

use std::fmt;
use std::str::FromStr;

const METERS_PER_KILOMETER: f64 = 1_000.0;
const MILES_PER_KILOMETER: f64 = 0.621_371;
const MILES_PER_METER: f64 = 0.000_621_371;
const KILOMETERS_PER_MILE: f64 = 1.609_34;
const METERS_PER_MILE: f64 = 1_609.34;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DistanceUnit {
    Kilometer,
    #[default]
    Meter,
    Mile,
}

impl DistanceUnit {
    pub fn all() -> [&'static str; 3] {
        ["m", "km", "mi"]
    }

    pub fn symbol(self) -> &'static str {
        match self {
            DistanceUnit::Kilometer => "km",
            DistanceUnit::Meter => "m",
            DistanceUnit::Mile => "mi",
        }
    }

    /// Converts `value`, expressed in `self`, into `target`.
    pub fn convert(self, value: f64, target: DistanceUnit) -> f64 {
        match self {
            DistanceUnit::Kilometer => from_kilometer_to(value, target),
            DistanceUnit::Meter => from_meter_to(value, target),
            DistanceUnit::Mile => from_mile_to(value, target),
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for DistanceUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "m" | "meter" | "meters" => Ok(DistanceUnit::Meter),
            "km" | "kilometer" | "kilometers" => Ok(DistanceUnit::Kilometer),
            "mi" | "mile" | "miles" => Ok(DistanceUnit::Mile),
            _ => Err(format!(
                "Invalid unit: {} (expected one of: {})",
                s,
                DistanceUnit::all().join(", ")
            )),
        }
    }
}

pub fn km_to_m(length: f64) -> f64 {
    length * METERS_PER_KILOMETER
}

pub fn km_to_mi(length: f64) -> f64 {
    length * MILES_PER_KILOMETER
}

pub fn m_to_km(length: f64) -> f64 {
    length / METERS_PER_KILOMETER
}

pub fn m_to_mi(length: f64) -> f64 {
    length * MILES_PER_METER
}

pub fn mi_to_km(length: f64) -> f64 {
    length * KILOMETERS_PER_MILE
}

pub fn mi_to_m(length: f64) -> f64 {
    length * METERS_PER_MILE
}

pub fn from_kilometer_to(length: f64, unit: DistanceUnit) -> f64 {
    match unit {
        DistanceUnit::Meter => km_to_m(length),
        DistanceUnit::Mile => km_to_mi(length),
        DistanceUnit::Kilometer => length,
    }
}

pub fn from_meter_to(length: f64, unit: DistanceUnit) -> f64 {
    match unit {
        DistanceUnit::Kilometer => m_to_km(length),
        DistanceUnit::Mile => m_to_mi(length),
        DistanceUnit::Meter => length,
    }
}

pub fn from_mile_to(length: f64, unit: DistanceUnit) -> f64 {
    match unit {
        DistanceUnit::Kilometer => mi_to_km(length),
        DistanceUnit::Meter => mi_to_m(length),
        DistanceUnit::Mile => length,
    }
}
