//! Deodar - disaster-awareness client for a simulation backend.
//!
//! Typed API access plus a client-side geospatial layer that answers
//! "am I safe, and where is my nearest shelter" without a server
//! round-trip.

pub mod api;
pub mod config;
pub mod districts;
pub mod location;
pub mod models;
pub mod poll;
pub mod risk;
pub mod spatial;

pub use models::{Coordinate, District, Severity, SimulationOutcome};
