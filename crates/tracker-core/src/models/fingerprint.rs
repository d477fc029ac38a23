use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::resolution::Resolution;

/// The resolved visitor identifiers, immutable once resolved.
///
/// The two fields are independent: a page can have a persistent identifier
/// with cookies disabled, or an ephemeral cookie with no durable storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FingerprintRecord {
    /// Durable-storage-based identifier, deserialized from the stored blob.
    pub persistent: Resolution<serde_json::Value>,
    /// Cookie-based identifier, codec-encoded on read.
    pub ephemeral: Resolution<String>,
}

/// Presence of the deferred-action container element, looked up eagerly at
/// init. The delivery collaborator stages DOM actions inside it; this core
/// only records whether it exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DeferredElement {
    Found { id: String },
    NotFound,
}

impl DeferredElement {
    pub fn is_found(&self) -> bool {
        matches!(self, DeferredElement::Found { .. })
    }
}
