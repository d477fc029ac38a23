use tracker_core::errors::{TrackerError, TrackerResult};
use tracker_core::traits::ISerializer;

/// serde_json-backed serializer, the default pair.
pub struct JsonSerializer;

impl ISerializer for JsonSerializer {
    fn encode(&self, value: &serde_json::Value) -> TrackerResult<String> {
        serde_json::to_string(value).map_err(|e| TrackerError::Serialization {
            message: e.to_string(),
        })
    }

    fn decode(&self, raw: &str) -> TrackerResult<serde_json::Value> {
        serde_json::from_str(raw).map_err(|e| TrackerError::Serialization {
            message: e.to_string(),
        })
    }
}
