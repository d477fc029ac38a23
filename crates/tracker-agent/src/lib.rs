//! # tracker-agent
//!
//! The page telemetry agent. On init it resolves the effective configuration,
//! captures an environment snapshot, resolves the visitor fingerprint, and
//! seeds the beacon queue — in that order, populating one [`TrackerState`].
//! Actual beacon delivery belongs to an external transport; this crate hands
//! it staged state through narrow interfaces.

pub mod codec;
pub mod config_resolver;
pub mod fingerprint;
pub mod logging;
pub mod probe;
pub mod queue;
pub mod serializer;
pub mod state;
pub mod tracker;

pub use codec::{Base64Codec, IdentityCodec};
pub use config_resolver::{ConfigResolver, LoadedConfig};
pub use fingerprint::FingerprintResolver;
pub use probe::EnvironmentProbe;
pub use queue::BeaconQueue;
pub use serializer::JsonSerializer;
pub use state::TrackerState;
pub use tracker::EventTracker;
