use tracker_core::models::{EnvironmentSnapshot, FingerprintRecord};

use crate::queue::BeaconQueue;

/// Root aggregate, one instance per page load, owned by the agent for the
/// page's lifetime. `environment` and `fingerprint` are written once at
/// init; only `beacons` grows afterwards.
#[derive(Debug)]
pub struct TrackerState {
    pub environment: EnvironmentSnapshot,
    pub fingerprint: FingerprintRecord,
    pub beacons: BeaconQueue,
}
