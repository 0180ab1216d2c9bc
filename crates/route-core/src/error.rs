//! Error types for route queries.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocatorError {
    /// The route has no legs, so there is nothing to be near.
    #[error("no nearest leg found")]
    NotFound,
    #[error("invalid position: lat {lat}, lon {lon}")]
    InvalidPosition { lat: f64, lon: f64 },
    #[error("failed to parse route: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown distance unit '{0}'")]
    UnknownUnit(String),
}
