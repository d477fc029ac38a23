use crate::errors::TrackerResult;

/// Object <-> string serializer pair.
///
/// Contract: `decode(encode(v)) == v` for every JSON-representable value.
/// Same caveat as [`crate::traits::ICodec`]: a violated pair garbles
/// identifiers without any runtime signal.
pub trait ISerializer: Send + Sync {
    fn encode(&self, value: &serde_json::Value) -> TrackerResult<String>;

    fn decode(&self, raw: &str) -> TrackerResult<serde_json::Value>;
}
