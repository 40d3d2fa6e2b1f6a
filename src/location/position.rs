use crate::domain::Coordinate;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// A single reading of the host's location service.
#[derive(Clone, PartialEq, Debug)]
pub struct Position {
    pub coordinate: Coordinate,
    /// Radius of uncertainty in meters, when the service reports one.
    pub accuracy: Option<f64>,
    pub timestamp: DateTime<Utc>,
}

impl Position {
    pub fn now(coordinate: Coordinate) -> Self {
        Position {
            coordinate,
            accuracy: None,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(default)]
pub struct LocationOptions {
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,
    /// How old a cached reading may be. Zero asks for a fresh reading.
    #[serde(with = "humantime_serde")]
    pub maximum_age: Duration,
    pub high_accuracy: bool,
}

impl Default for LocationOptions {
    fn default() -> Self {
        LocationOptions {
            timeout: Duration::from_millis(5000),
            maximum_age: Duration::ZERO,
            high_accuracy: false,
        }
    }
}

#[derive(Error, Clone, PartialEq, Debug)]
pub enum LocationError {
    #[error("location is not supported on this host")]
    Unsupported,
    #[error("location permission denied")]
    PermissionDenied,
    #[error("location request timed out after {0:?}")]
    Timeout(Duration),
    #[error("location unavailable: {0}")]
    Unavailable(String),
}
