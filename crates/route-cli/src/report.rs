//! Query result presentation.

use route_core::{DistanceUnit, LocatorConfig, LocatorError, Pos, Route, RouteDistances};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Serialize)]
pub struct LocateReport {
    pub unit: DistanceUnit,
    pub route_legs: usize,
    pub route_length: f64,
    /// Ident of the leg at the clamped nearest index
    pub nearest_ident: Option<String>,
    /// `None` when the route has no legs
    pub distances: Option<RouteDistances>,
}

/// Run the checked route distance query and collect everything worth printing.
///
/// An empty route still yields a report; an out-of-range position is an error.
pub fn locate(
    route: &Route,
    pos: &Pos,
    config: LocatorConfig,
) -> Result<LocateReport, LocatorError> {
    let locator = route.locator_with(config);
    let distances = match locator.route_distances_checked(pos) {
        Ok(distances) => Some(distances),
        Err(LocatorError::NotFound) => {
            tracing::info!(lat = pos.lat, lon = pos.lon, "{}", LocatorError::NotFound);
            None
        }
        Err(e) => return Err(e),
    };

    Ok(LocateReport {
        unit: config.unit,
        route_legs: route.len(),
        route_length: config.unit.convert_meters(route.total_distance_m()),
        nearest_ident: distances
            .and_then(|d| route.get(d.nearest_leg_index))
            .map(|leg| leg.ident.clone()),
        distances,
    })
}

impl fmt::Display for LocateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = self.unit;
        writeln!(
            f,
            "Route: {} legs, {:.1} {unit}",
            self.route_legs, self.route_length
        )?;

        let Some(d) = self.distances else {
            return write!(f, "No nearest leg found");
        };

        match self.nearest_ident.as_deref() {
            Some(ident) if !ident.is_empty() => {
                writeln!(f, "Nearest leg: {} ({ident})", d.nearest_leg_index)?
            }
            _ => writeln!(f, "Nearest leg: {}", d.nearest_leg_index)?,
        }
        writeln!(f, "Distance from start: {:.1} {unit}", d.dist_from_start)?;
        writeln!(f, "Distance to destination: {:.1} {unit}", d.dist_to_dest)?;
        writeln!(f, "Distance to nearest leg: {:.1} {unit}", d.nearest_leg_distance)?;
        match d.cross_track {
            Some(xt) if xt < 0.0 => write!(f, "Cross track: {:.1} {unit} left", xt.abs()),
            Some(xt) => write!(f, "Cross track: {:.1} {unit} right", xt),
            None => write!(f, "Cross track: n/a"),
        }
    }
}
