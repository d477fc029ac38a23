//! ConfigResolver — effective configuration from override, page blob, or
//! baseline defaults, plus the deferred element and the host async queue.

use std::sync::Arc;

use tracing::debug;

use tracker_core::config::{ConfigOverlay, TrackerConfig};
use tracker_core::constants::LOG_TARGET;
use tracker_core::errors::TrackerError;
use tracker_core::models::{Beacon, DeferredElement};
use tracker_core::traits::IBrowserEnvironment;

use crate::codec::{Base64Codec, IdentityCodec};
use crate::serializer::JsonSerializer;

/// Everything `load` resolves in one pass.
pub struct LoadedConfig {
    /// The effective configuration.
    pub config: TrackerConfig,
    /// Deferred-action container, looked up eagerly.
    pub deferred: DeferredElement,
    /// Events the host page queued before the agent existed.
    pub async_queue: Vec<Beacon>,
}

pub struct ConfigResolver<'a> {
    env: &'a dyn IBrowserEnvironment,
}

impl<'a> ConfigResolver<'a> {
    pub fn new(env: &'a dyn IBrowserEnvironment) -> Self {
        Self { env }
    }

    /// Baseline configuration: default data fields around the environment's
    /// storage, a JSON serializer, and the identity codec.
    pub fn baseline(&self) -> TrackerConfig {
        TrackerConfig::new(
            Arc::new(JsonSerializer),
            Arc::new(IdentityCodec),
            self.env.local_storage(),
        )
    }

    /// Resolve the effective configuration. A supplied override wins
    /// unconditionally over any page-embedded blob. Idempotent apart from
    /// re-reading the DOM.
    pub fn load(&self, override_config: Option<TrackerConfig>) -> LoadedConfig {
        let config = match override_config {
            Some(cfg) => cfg,
            None => self.from_page(),
        };

        let deferred = if self.env.document().has_element(&config.deferred_element_id) {
            DeferredElement::Found {
                id: config.deferred_element_id.clone(),
            }
        } else {
            DeferredElement::NotFound
        };

        let async_queue = self.env.queued_events();

        LoadedConfig {
            config,
            deferred,
            async_queue,
        }
    }

    /// Baseline overlaid with the page-embedded blob, when one exists and
    /// parses. A malformed blob must not escape page-load instrumentation:
    /// it degrades to the baseline.
    fn from_page(&self) -> TrackerConfig {
        let mut config = self.baseline();

        let Some(text) = self.env.document().element_text(&config.config_element_id) else {
            return config;
        };

        let parsed = config.serializer.decode(&text).and_then(|value| {
            serde_json::from_value::<ConfigOverlay>(value).map_err(|e| {
                TrackerError::Serialization {
                    message: e.to_string(),
                }
            })
        });

        match parsed {
            Ok(overlay) => apply_overlay(&mut config, overlay),
            Err(err) => {
                debug!(target: LOG_TARGET, %err, "malformed page config blob, using baseline");
            }
        }

        config
    }
}

/// Structural merge: fields the page supplied replace baseline values,
/// everything else stays.
fn apply_overlay(config: &mut TrackerConfig, overlay: ConfigOverlay) {
    if let Some(key) = overlay.identifier_key {
        config.identifier_key = key;
    }
    if let Some(debug_on) = overlay.debug {
        config.debug = debug_on;
    }
    if let Some(enabled) = overlay.codec_enabled {
        config.codec = if enabled {
            Arc::new(Base64Codec)
        } else {
            Arc::new(IdentityCodec)
        };
    }
}
