//! FingerprintResolver — tri-state persistent and ephemeral identifier
//! resolution against the configured storage backend and codec.

use tracing::debug;

use tracker_core::config::TrackerConfig;
use tracker_core::constants::LOG_TARGET;
use tracker_core::errors::TrackerResult;
use tracker_core::models::{FingerprintRecord, Resolution};
use tracker_core::traits::IBrowserEnvironment;

pub struct FingerprintResolver;

impl FingerprintResolver {
    /// Resolve both identifiers. Depends on the already-resolved
    /// configuration for the storage backend, codec, and key; never fails —
    /// malformed data degrades to `Missing` and missing mechanisms to
    /// `Unsupported`.
    pub fn resolve(config: &TrackerConfig, env: &dyn IBrowserEnvironment) -> FingerprintRecord {
        FingerprintRecord {
            persistent: Self::resolve_persistent(config),
            ephemeral: Self::resolve_ephemeral(config, env),
        }
    }

    /// Durable-storage identifier: stored under the codec-encoded key,
    /// decoded then deserialized on the way out.
    fn resolve_persistent(config: &TrackerConfig) -> Resolution<serde_json::Value> {
        let Some(storage) = &config.storage else {
            return Resolution::Unsupported;
        };

        let Some(blob) = storage.get(&config.codec.encode(&config.identifier_key)) else {
            return Resolution::Missing;
        };

        let decoded = config
            .codec
            .decode(&blob)
            .and_then(|raw| config.serializer.decode(&raw));

        match decoded {
            Ok(value) => Resolution::Present(value),
            Err(err) => {
                debug!(target: LOG_TARGET, %err, "stored identifier is malformed, treating as absent");
                Resolution::Missing
            }
        }
    }

    /// Cookie identifier: scanned out of the `name=value;` cookie string.
    fn resolve_ephemeral(config: &TrackerConfig, env: &dyn IBrowserEnvironment) -> Resolution<String> {
        if !env.navigator().cookies_enabled() {
            return Resolution::Unsupported;
        }

        let cookies = env.document().cookie_string();
        if cookies.is_empty() {
            return Resolution::Missing;
        }

        match find_cookie_value(&cookies, &config.identifier_key) {
            // The extracted cookie value is re-encoded here, where the
            // persistent path decodes what it reads. Identical under the
            // identity codec, observable under base64.
            // TODO: decide whether ephemeral reads should decode instead,
            // mirroring the persistent path.
            Some(value) => Resolution::Present(config.codec.encode(value)),
            None => Resolution::Missing,
        }
    }

    /// Write the persistent identifier: serialized, codec-encoded, stored
    /// under the codec-encoded key. `Ok(false)` when the browser provides no
    /// durable storage — a missing mechanism is not an error.
    pub fn persist(config: &TrackerConfig, value: &serde_json::Value) -> TrackerResult<bool> {
        let Some(storage) = &config.storage else {
            return Ok(false);
        };

        let raw = config.serializer.encode(value)?;
        storage.set(
            &config.codec.encode(&config.identifier_key),
            &config.codec.encode(&raw),
        )?;
        Ok(true)
    }
}

/// Find `key` in a `name=value;` cookie string and return its raw value,
/// trimmed of surrounding whitespace. The value runs to the next delimiter
/// or the end of the string.
fn find_cookie_value<'a>(cookies: &'a str, key: &str) -> Option<&'a str> {
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|pair| {
            let (name, value) = pair.split_once('=')?;
            (name == key).then_some(value)
        })
}
