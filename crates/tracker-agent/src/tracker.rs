//! EventTracker — init orchestration and the page-facing staging surface.

use tracing::{debug, info};

use tracker_core::config::TrackerConfig;
use tracker_core::constants::{LOG_TARGET, VERSION};
use tracker_core::models::{Beacon, DeferredElement};
use tracker_core::traits::IBrowserEnvironment;

use crate::config_resolver::{ConfigResolver, LoadedConfig};
use crate::fingerprint::FingerprintResolver;
use crate::probe::EnvironmentProbe;
use crate::queue::BeaconQueue;
use crate::state::TrackerState;

/// The agent instance, one per page load.
pub struct EventTracker {
    config: TrackerConfig,
    deferred: DeferredElement,
    state: TrackerState,
}

impl EventTracker {
    /// Initialize against the injected browser environment.
    ///
    /// Ordering is fixed and sequential: configuration first, then the
    /// environment snapshot, then fingerprint resolution (it needs the
    /// resolved storage backend and codec), then queue seeding. Never fails
    /// and never panics — every fault on the way degrades to inert defaults.
    pub fn init(env: &dyn IBrowserEnvironment, override_config: Option<TrackerConfig>) -> Self {
        let LoadedConfig {
            config,
            deferred,
            async_queue,
        } = ConfigResolver::new(env).load(override_config);

        let environment = EnvironmentProbe::gather(env);
        let fingerprint = FingerprintResolver::resolve(&config, env);
        let beacons = BeaconQueue::with_seed(async_queue);

        info!(
            target: LOG_TARGET,
            version = VERSION,
            key = %config.identifier_key,
            seeded = beacons.pending().len(),
            "initialized"
        );
        if config.debug {
            debug!(target: LOG_TARGET, ?environment, ?fingerprint, "gathered state");
        }

        Self {
            config,
            deferred,
            state: TrackerState {
                environment,
                fingerprint,
                beacons,
            },
        }
    }

    /// Stage a tracking event for delivery; returns the new beacon's id.
    pub fn track(&mut self, event: impl Into<String>, params: serde_json::Value) -> String {
        let beacon = Beacon::new(event, params);
        let id = beacon.id.clone();
        debug!(target: LOG_TARGET, event = %beacon.event, id = %beacon.id, "staged beacon");
        self.state.beacons.enqueue(beacon);
        id
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn deferred(&self) -> &DeferredElement {
        &self.deferred
    }

    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    /// Mutable queue access for the delivery collaborator.
    pub fn beacons_mut(&mut self) -> &mut BeaconQueue {
        &mut self.state.beacons
    }
}
