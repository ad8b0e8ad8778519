//! User position acquisition boundary.
//!
//! The platform's location service is an input to this crate, not part
//! of it. This module fixes the request hints and the error taxonomy an
//! implementation must map onto; an absent position is a state the rest
//! of the system renders, never a crash.

use std::time::Duration;

use thiserror::Error;

use crate::models::Coordinate;

/// Hints passed to the platform location request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationRequest {
    pub high_accuracy: bool,
    /// Give up after this long.
    pub timeout: Duration,
    /// A cached fix no older than this is acceptable.
    pub max_age: Duration,
}

impl Default for LocationRequest {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: Duration::from_secs(15),
            max_age: Duration::from_secs(60),
        }
    }
}

/// Why a position could not be obtained. The display strings match what
/// the dashboard shows next to the retry control.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Location unavailable")]
    Unavailable,
    #[error("Location request timed out")]
    TimedOut,
    #[error("Could not get location: {0}")]
    Other(String),
}

/// Source of the user's current position.
pub trait LocationProvider {
    fn current_position(&self, request: &LocationRequest) -> Result<Coordinate, LocationError>;
}

/// Provider pinned to a known coordinate (CLI flags, tests).
pub struct FixedPosition(pub Coordinate);

impl LocationProvider for FixedPosition {
    fn current_position(&self, _request: &LocationRequest) -> Result<Coordinate, LocationError> {
        Ok(self.0)
    }
}
