use serde::{Deserialize, Serialize};

/// The serde shape of the page-embedded configuration blob.
///
/// Every field is optional; fields the page omits keep their baseline
/// values. This is a structural merge only — values are not validated or
/// sanitized here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigOverlay {
    /// Storage key / cookie name override.
    pub identifier_key: Option<String>,
    /// Debug mode override.
    pub debug: Option<bool>,
    /// Switch value obfuscation on or off.
    pub codec_enabled: Option<bool>,
}
