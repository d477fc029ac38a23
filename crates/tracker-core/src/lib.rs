//! # tracker-core
//!
//! Foundation crate for the page telemetry agent.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{ConfigOverlay, TrackerConfig};
pub use errors::{TrackerError, TrackerResult};
pub use models::{
    Beacon, DeferredElement, EnvironmentSnapshot, FingerprintRecord, Resolution, ScreenInfo,
};
