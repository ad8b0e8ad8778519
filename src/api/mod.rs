//! HTTP access to the simulation backend.
//!
//! The backend owns all heavy computation; this module owns the typed
//! surface over it and the liveness probing the UI relies on.

mod client;
mod error;
mod health;

pub use client::ApiClient;
pub use error::ApiError;
pub use health::wait_until_online;
