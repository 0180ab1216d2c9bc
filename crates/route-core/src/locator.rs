//! Nearest-leg search and along-route distances.
//!
//! Given a route and an arbitrary position, finds the leg the position is
//! closest to and derives how far along the route it is.

use crate::config::LocatorConfig;
use crate::error::LocatorError;
use crate::models::{Pos, Route};
use serde::{Deserialize, Serialize};

/// Result of a nearest-leg search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NearestLeg {
    /// Index of the leg being approached. A vertex match at leg `i` reports
    /// `i + 1`, so this can equal the route length.
    pub index: usize,
    /// Signed cross-track distance in the configured unit, positive right of
    /// course. `None` when a leg vertex was closer than any segment.
    pub cross_track: Option<f64>,
}

/// Distances of a position relative to the route, in the configured unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteDistances {
    pub dist_from_start: f64,
    pub dist_to_dest: f64,
    /// Direct distance to the leg at `nearest_leg_index`
    pub nearest_leg_distance: f64,
    pub cross_track: Option<f64>,
    /// Nearest leg index clamped to the last leg
    pub nearest_leg_index: usize,
}

/// Read-only queries over a borrowed route.
#[derive(Debug, Clone, Copy)]
pub struct RouteLegSequenceLocator<'a> {
    route: &'a Route,
    config: LocatorConfig,
}

impl<'a> RouteLegSequenceLocator<'a> {
    pub fn new(route: &'a Route, config: LocatorConfig) -> Self {
        Self { route, config }
    }

    pub fn config(&self) -> &LocatorConfig {
        &self.config
    }

    pub fn route(&self) -> &'a Route {
        self.route
    }

    /// Find the leg nearest to `pos`.
    ///
    /// Segments whose perpendicular foot lies on them compete by absolute
    /// cross-track distance. Every leg vertex then competes by direct
    /// distance and wins only when strictly closer, reporting index `i + 1`.
    ///
    /// Returns `None` for an empty route.
    pub fn nearest_leg(&self, pos: &Pos) -> Option<NearestLeg> {
        let legs = self.route.legs();
        let tolerance_m = self.config.along_track_tolerance_m;

        let mut nearest: Option<usize> = None;
        let mut min_distance = f64::MAX;
        let mut min_cross_track: Option<f64> = None;

        for (i, pair) in legs.windows(2).enumerate() {
            let xt = pos.distance_meter_to_line(&pair[0].position, &pair[1].position, tolerance_m);
            let distance = xt.distance_m.abs();

            if xt.valid && distance < min_distance {
                tracing::trace!(index = i + 1, cross_track_m = xt.distance_m, "Segment candidate");
                min_distance = distance;
                min_cross_track = Some(xt.distance_m);
                nearest = Some(i + 1);
            }
        }

        for (i, leg) in legs.iter().enumerate() {
            let distance = leg.position.distance_meter_to(pos);
            if distance < min_distance {
                tracing::trace!(index = i + 1, distance_m = distance, "Vertex candidate");
                min_distance = distance;
                min_cross_track = None;
                nearest = Some(i + 1);
            }
        }

        let index = nearest?;
        Some(NearestLeg {
            index,
            cross_track: min_cross_track.map(|m| self.config.unit.convert_meters(m)),
        })
    }

    /// Distances from start and to destination for `pos`.
    ///
    /// The cumulative leg distance up to the nearest leg is corrected by the
    /// direct distance to that leg. This is exact only for positions on the
    /// route short of the nearest vertex.
    pub fn route_distances(&self, pos: &Pos) -> Result<RouteDistances, LocatorError> {
        let nearest = self.nearest_leg(pos).ok_or(LocatorError::NotFound)?;
        let legs = self.route.legs();
        let unit = self.config.unit;

        let index = nearest.index.min(legs.len() - 1);
        let nearest_leg_distance = unit.convert_meters(legs[index].position.distance_meter_to(pos));

        let before_m: f64 = legs[..=index].iter().map(|leg| leg.distance_to_m).sum();
        let after_m: f64 = legs[index + 1..].iter().map(|leg| leg.distance_to_m).sum();

        let distances = RouteDistances {
            dist_from_start: (unit.convert_meters(before_m) - nearest_leg_distance).abs(),
            dist_to_dest: (unit.convert_meters(after_m) + nearest_leg_distance).abs(),
            nearest_leg_distance,
            cross_track: nearest.cross_track,
            nearest_leg_index: index,
        };

        tracing::debug!(
            index,
            from_start = distances.dist_from_start,
            to_dest = distances.dist_to_dest,
            unit = %unit,
            "Route distances"
        );
        Ok(distances)
    }

    /// Like [`route_distances`](Self::route_distances), rejecting out-of-range positions first.
    pub fn route_distances_checked(&self, pos: &Pos) -> Result<RouteDistances, LocatorError> {
        if !pos.is_valid() {
            return Err(LocatorError::InvalidPosition {
                lat: pos.lat,
                lon: pos.lon,
            });
        }
        self.route_distances(pos)
    }
}
