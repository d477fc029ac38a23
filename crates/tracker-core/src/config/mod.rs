pub mod defaults;
pub mod overlay;

pub use overlay::ConfigOverlay;

use std::fmt;
use std::sync::Arc;

use crate::traits::{ICodec, IKeyValueStorage, ISerializer};

/// The effective agent configuration, resolved once at init.
///
/// An override supplied by the embedding caller replaces this wholesale; a
/// page-embedded blob only overlays the data fields. The serializer and
/// codec pairs must each be mutual inverses over their domains (see the
/// trait contracts).
#[derive(Clone)]
pub struct TrackerConfig {
    /// Name used both as the storage key and the cookie name.
    pub identifier_key: String,
    /// Gates verbose logging.
    pub debug: bool,
    /// DOM id of the page configuration blob.
    pub config_element_id: String,
    /// DOM id of the deferred-action container.
    pub deferred_element_id: String,
    /// Object enserializer/deserializer pair.
    pub serializer: Arc<dyn ISerializer>,
    /// Durable storage engine, `None` when the browser provides none.
    pub storage: Option<Arc<dyn IKeyValueStorage>>,
    /// Obfuscation encoder/decoder pair.
    pub codec: Arc<dyn ICodec>,
}

impl TrackerConfig {
    /// Build a configuration with default data fields around the given
    /// backends.
    pub fn new(
        serializer: Arc<dyn ISerializer>,
        codec: Arc<dyn ICodec>,
        storage: Option<Arc<dyn IKeyValueStorage>>,
    ) -> Self {
        Self {
            identifier_key: defaults::DEFAULT_IDENTIFIER_KEY.to_string(),
            debug: defaults::DEFAULT_DEBUG,
            config_element_id: defaults::DEFAULT_CONFIG_ELEMENT_ID.to_string(),
            deferred_element_id: defaults::DEFAULT_DEFERRED_ELEMENT_ID.to_string(),
            serializer,
            storage,
            codec,
        }
    }

    pub fn with_identifier_key(mut self, key: impl Into<String>) -> Self {
        self.identifier_key = key.into();
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_codec(mut self, codec: Arc<dyn ICodec>) -> Self {
        self.codec = codec;
        self
    }

    pub fn with_storage(mut self, storage: Option<Arc<dyn IKeyValueStorage>>) -> Self {
        self.storage = storage;
        self
    }
}

impl fmt::Debug for TrackerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrackerConfig")
            .field("identifier_key", &self.identifier_key)
            .field("debug", &self.debug)
            .field("config_element_id", &self.config_element_id)
            .field("deferred_element_id", &self.deferred_element_id)
            .field("storage", &self.storage.is_some())
            .field("codec", &self.codec.name())
            .finish()
    }
}
