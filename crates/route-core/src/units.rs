//! Distance units and conversions.

use crate::error::LocatorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const METERS_PER_NM: f64 = 1852.0;
pub const METERS_PER_KM: f64 = 1000.0;
pub const METERS_PER_STATUTE_MILE: f64 = 1609.344;
pub const METERS_PER_FOOT: f64 = 0.3048;

/// Unit used for distances handed back to callers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistanceUnit {
    #[default]
    #[serde(rename = "nm")]
    NauticalMiles,
    #[serde(rename = "km")]
    Kilometers,
    #[serde(rename = "m")]
    Meters,
    #[serde(rename = "mi")]
    StatuteMiles,
    #[serde(rename = "ft")]
    Feet,
}

impl DistanceUnit {
    fn meters_per_unit(self) -> f64 {
        match self {
            DistanceUnit::NauticalMiles => METERS_PER_NM,
            DistanceUnit::Kilometers => METERS_PER_KM,
            DistanceUnit::Meters => 1.0,
            DistanceUnit::StatuteMiles => METERS_PER_STATUTE_MILE,
            DistanceUnit::Feet => METERS_PER_FOOT,
        }
    }

    /// Convert a distance in meters into this unit.
    pub fn convert_meters(self, meters: f64) -> f64 {
        meters / self.meters_per_unit()
    }

    /// Short symbol, also accepted by [`FromStr`].
    pub fn symbol(self) -> &'static str {
        match self {
            DistanceUnit::NauticalMiles => "nm",
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Meters => "m",
            DistanceUnit::StatuteMiles => "mi",
            DistanceUnit::Feet => "ft",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for DistanceUnit {
    type Err = LocatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nm" | "nmi" | "nautical" => Ok(DistanceUnit::NauticalMiles),
            "km" | "kilometers" => Ok(DistanceUnit::Kilometers),
            "m" | "meters" => Ok(DistanceUnit::Meters),
            "mi" | "miles" => Ok(DistanceUnit::StatuteMiles),
            "ft" | "feet" => Ok(DistanceUnit::Feet),
            other => Err(LocatorError::UnknownUnit(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_meters_into_each_unit() {
        assert_eq!(DistanceUnit::NauticalMiles.convert_meters(3704.0), 2.0);
        assert_eq!(DistanceUnit::NauticalMiles.convert_meters(111_120.0), 60.0);
        assert_eq!(DistanceUnit::Kilometers.convert_meters(2500.0), 2.5);
        assert_eq!(DistanceUnit::Meters.convert_meters(42.0), 42.0);
        assert!((DistanceUnit::StatuteMiles.convert_meters(1609.344) - 1.0).abs() < 1e-12);
        assert!((DistanceUnit::Feet.convert_meters(304.8) - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn parses_symbols_and_rejects_unknown() {
        assert_eq!("NM".parse::<DistanceUnit>().unwrap(), DistanceUnit::NauticalMiles);
        assert_eq!(" km ".parse::<DistanceUnit>().unwrap(), DistanceUnit::Kilometers);
        assert_eq!("ft".parse::<DistanceUnit>().unwrap(), DistanceUnit::Feet);
        assert!(matches!(
            "furlong".parse::<DistanceUnit>(),
            Err(LocatorError::UnknownUnit(u)) if u == "furlong"
        ));
    }

    #[test]
    fn serde_uses_symbols() {
        let json = serde_json::to_string(&DistanceUnit::StatuteMiles).unwrap();
        assert_eq!(json, "\"mi\"");
        let unit: DistanceUnit = serde_json::from_str("\"m\"").unwrap();
        assert_eq!(unit, DistanceUnit::Meters);
    }
}
