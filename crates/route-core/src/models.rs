//! Core data models for flight routes.

use crate::config::LocatorConfig;
use crate::error::LocatorError;
use crate::geo::{self, CrossTrack};
use crate::locator::RouteLegSequenceLocator;
use serde::{Deserialize, Serialize};

/// A geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pos {
    pub lat: f64,
    pub lon: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altitude_ft: Option<f64>,
}

impl Pos {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            altitude_ft: None,
        }
    }

    /// Position `distance_m` away along the great circle leaving on `course_rad`.
    /// Altitude is carried over.
    pub fn offset(&self, distance_m: f64, course_rad: f64) -> Pos {
        let (lat, lon) = geo::destination_point(self.lat, self.lon, distance_m, course_rad);
        Pos { lat, lon, ..*self }
    }

    /// True if both coordinates are finite and within their ranges.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }

    /// Great-circle distance to `other` in meters. Altitude is ignored.
    pub fn distance_meter_to(&self, other: &Pos) -> f64 {
        geo::haversine_distance(self.lat, self.lon, other.lat, other.lon)
    }

    /// Initial course to `other` in radians, 0 = north.
    pub fn course_rad_to(&self, other: &Pos) -> f64 {
        geo::bearing(self.lat, self.lon, other.lat, other.lon)
    }

    /// Cross-track projection of this position onto the segment `from` -> `to`.
    pub fn distance_meter_to_line(&self, from: &Pos, to: &Pos, tolerance_m: f64) -> CrossTrack {
        geo::cross_track_distance(
            self.lat,
            self.lon,
            from.lat,
            from.lon,
            to.lat,
            to.lon,
            tolerance_m,
        )
    }
}

/// Input record for building a route from bare positions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Waypoint {
    #[serde(default)]
    pub ident: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default, alias = "alt")]
    pub altitude_ft: Option<f64>,
}

impl Waypoint {
    pub fn position(&self) -> Pos {
        Pos {
            lat: self.lat,
            lon: self.lon,
            altitude_ft: self.altitude_ft,
        }
    }
}

/// One leg of a route: its end position and the distance flown to get there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg {
    #[serde(default)]
    pub ident: String,
    pub position: Pos,
    /// Distance in meters from the previous leg's position. Zero for the first leg.
    #[serde(default, alias = "distance_to")]
    pub distance_to_m: f64,
}

impl RouteLeg {
    pub fn new(ident: impl Into<String>, position: Pos, distance_to_m: f64) -> Self {
        Self {
            ident: ident.into(),
            position,
            distance_to_m,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RouteFile {
    Legs(Vec<RouteLeg>),
    Waypoints { waypoints: Vec<Waypoint> },
}

/// Ordered sequence of legs from departure to destination.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route {
    legs: Vec<RouteLeg>,
}

impl Route {
    pub fn new(legs: Vec<RouteLeg>) -> Self {
        for (i, leg) in legs.iter().enumerate() {
            if !leg.distance_to_m.is_finite() {
                tracing::warn!(index = i, ident = %leg.ident, "Route leg has non-finite distance");
            }
        }
        Self { legs }
    }

    /// Build legs from waypoints, computing each leg distance from the previous waypoint.
    pub fn from_waypoints(waypoints: &[Waypoint]) -> Self {
        let mut legs: Vec<RouteLeg> = Vec::with_capacity(waypoints.len());
        for wp in waypoints {
            let position = wp.position();
            let distance_to_m = legs
                .last()
                .map(|prev| prev.position.distance_meter_to(&position))
                .unwrap_or(0.0);
            legs.push(RouteLeg::new(wp.ident.clone(), position, distance_to_m));
        }
        Self::new(legs)
    }

    /// Parse a route from JSON.
    ///
    /// Accepts either a list of legs with explicit `distance_to_m`, or an
    /// object `{ "waypoints": [...] }` whose leg distances are computed.
    pub fn from_json(json: &str) -> Result<Self, LocatorError> {
        match serde_json::from_str::<RouteFile>(json)? {
            RouteFile::Legs(legs) => Ok(Self::new(legs)),
            RouteFile::Waypoints { waypoints } => Ok(Self::from_waypoints(&waypoints)),
        }
    }

    pub fn legs(&self) -> &[RouteLeg] {
        &self.legs
    }

    pub fn get(&self, index: usize) -> Option<&RouteLeg> {
        self.legs.get(index)
    }

    pub fn len(&self) -> usize {
        self.legs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RouteLeg> {
        self.legs.iter()
    }

    /// Sum of all leg distances in meters.
    pub fn total_distance_m(&self) -> f64 {
        self.legs.iter().map(|leg| leg.distance_to_m).sum()
    }

    /// Locator over this route using the default configuration.
    pub fn locator(&self) -> RouteLegSequenceLocator<'_> {
        RouteLegSequenceLocator::new(self, LocatorConfig::default())
    }

    pub fn locator_with(&self, config: LocatorConfig) -> RouteLegSequenceLocator<'_> {
        RouteLegSequenceLocator::new(self, config)
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = &'a RouteLeg;
    type IntoIter = std::slice::Iter<'a, RouteLeg>;

    fn into_iter(self) -> Self::IntoIter {
        self.legs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pos_validity() {
        assert!(Pos::new(33.6846, -117.8265).is_valid());
        assert!(Pos::new(90.0, 180.0).is_valid());
        assert!(!Pos::new(91.0, 0.0).is_valid());
        assert!(!Pos::new(0.0, -180.5).is_valid());
        assert!(!Pos::new(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn from_waypoints_computes_leg_distances() {
        let waypoints = vec![
            Waypoint {
                ident: "A".into(),
                lat: 0.0,
                lon: 0.0,
                altitude_ft: None,
            },
            Waypoint {
                ident: "B".into(),
                lat: 0.0,
                lon: 1.0,
                altitude_ft: Some(5000.0),
            },
            Waypoint {
                ident: "C".into(),
                lat: 1.0,
                lon: 1.0,
                altitude_ft: None,
            },
        ];
        let route = Route::from_waypoints(&waypoints);

        assert_eq!(route.len(), 3);
        assert_eq!(route.legs()[0].distance_to_m, 0.0);
        assert!((route.legs()[1].distance_to_m - 111_195.0).abs() < 1.0);
        assert!((route.legs()[2].distance_to_m - 111_195.0).abs() < 1.0);
        assert_eq!(route.legs()[1].position.altitude_ft, Some(5000.0));
        assert!((route.total_distance_m() - 222_390.0).abs() < 2.0);
    }

    #[test]
    fn offset_keeps_altitude() {
        let start = Pos {
            lat: 50.0,
            lon: 8.0,
            altitude_ft: Some(12_000.0),
        };
        let moved = start.offset(10_000.0, std::f64::consts::FRAC_PI_2);

        assert_eq!(moved.altitude_ft, Some(12_000.0));
        assert!((start.distance_meter_to(&moved) - 10_000.0).abs() < 0.01);
        assert!((start.course_rad_to(&moved) - std::f64::consts::FRAC_PI_2).abs() < 1e-9);
    }

    #[test]
    fn from_json_accepts_leg_list() {
        let json = r#"[
            {"ident": "EDDF", "position": {"lat": 50.03, "lon": 8.57}},
            {"ident": "EDDM", "position": {"lat": 48.35, "lon": 11.78}, "distance_to_m": 304000.0}
        ]"#;
        let route = Route::from_json(json).unwrap();

        assert_eq!(route.len(), 2);
        assert_eq!(route.legs()[0].distance_to_m, 0.0);
        assert_eq!(route.legs()[1].ident, "EDDM");
        assert_eq!(route.total_distance_m(), 304_000.0);
    }

    #[test]
    fn from_json_accepts_waypoint_object() {
        let json = r#"{"waypoints": [
            {"ident": "A", "lat": 0.0, "lon": 0.0},
            {"ident": "B", "lat": 0.0, "lon": 2.0, "alt": 3500.0}
        ]}"#;
        let route = Route::from_json(json).unwrap();

        assert_eq!(route.len(), 2);
        assert!((route.legs()[1].distance_to_m - 222_390.0).abs() < 2.0);
        assert_eq!(route.legs()[1].position.altitude_ft, Some(3500.0));
    }

    #[test]
    fn from_json_rejects_garbage() {
        let err = Route::from_json("{\"legs\": 3}").unwrap_err();
        assert!(matches!(err, LocatorError::Parse(_)));
    }

    #[test]
    fn route_serializes_as_leg_list() {
        let route = Route::new(vec![RouteLeg::new("A", Pos::new(1.0, 2.0), 0.0)]);
        let json = serde_json::to_string(&route).unwrap();
        assert!(json.starts_with('['));
        assert_eq!(Route::from_json(&json).unwrap(), route);
    }
}
