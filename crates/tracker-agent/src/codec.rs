//! Obfuscation codecs: identity (the default) and standard-alphabet base64.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use tracker_core::errors::{TrackerError, TrackerResult};
use tracker_core::traits::ICodec;

/// Pass-through codec used when obfuscation is disabled.
pub struct IdentityCodec;

impl ICodec for IdentityCodec {
    fn encode(&self, raw: &str) -> String {
        raw.to_string()
    }

    fn decode(&self, encoded: &str) -> TrackerResult<String> {
        Ok(encoded.to_string())
    }

    fn name(&self) -> &str {
        "identity"
    }
}

/// Base64 over UTF-8 bytes, matching what btoa/atob produce in the page.
pub struct Base64Codec;

impl ICodec for Base64Codec {
    fn encode(&self, raw: &str) -> String {
        STANDARD.encode(raw.as_bytes())
    }

    fn decode(&self, encoded: &str) -> TrackerResult<String> {
        let bytes = STANDARD
            .decode(encoded)
            .map_err(|e| TrackerError::Codec {
                message: e.to_string(),
            })?;
        String::from_utf8(bytes).map_err(|e| TrackerError::Codec {
            message: e.to_string(),
        })
    }

    fn name(&self) -> &str {
        "base64"
    }
}
