//! Route geometry for flight planning.
//!
//! Locates an arbitrary position relative to an ordered sequence of route
//! legs: nearest leg, cross-track distance, distance flown and distance
//! remaining.

pub mod config;
pub mod error;
pub mod geo;
pub mod locator;
pub mod models;
pub mod units;

pub use config::LocatorConfig;
pub use error::LocatorError;
pub use geo::{haversine_distance, CrossTrack};
pub use locator::{NearestLeg, RouteDistances, RouteLegSequenceLocator};
pub use models::{Pos, Route, RouteLeg, Waypoint};
pub use units::DistanceUnit;
