//! Locator configuration.

use crate::units::DistanceUnit;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocatorConfig {
    /// Unit for every distance the locator hands back
    pub unit: DistanceUnit,
    /// Slack in meters at both segment ends when deciding whether a
    /// perpendicular projection falls on the segment
    pub along_track_tolerance_m: f64,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            unit: DistanceUnit::NauticalMiles,
            along_track_tolerance_m: 0.01,
        }
    }
}

impl LocatorConfig {
    /// Read `ROUTE_DISTANCE_UNIT` and `ROUTE_ALONG_TRACK_TOLERANCE_M`.
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build from a variable lookup; absent or unparsable values fall back to defaults.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            unit: lookup("ROUTE_DISTANCE_UNIT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.unit),
            along_track_tolerance_m: lookup("ROUTE_ALONG_TRACK_TOLERANCE_M")
                .and_then(|s| s.parse::<f64>().ok())
                .filter(|t| t.is_finite() && *t >= 0.0)
                .unwrap_or(defaults.along_track_tolerance_m),
        }
    }

    pub fn with_unit(self, unit: DistanceUnit) -> Self {
        Self { unit, ..self }
    }
}
