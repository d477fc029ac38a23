//! Default configuration values, applied wherever the page supplies nothing.

/// Name used both as the durable-storage key and the cookie name.
pub const DEFAULT_IDENTIFIER_KEY: &str = "_amp";

/// DOM id of the page-embedded JSON configuration blob.
pub const DEFAULT_CONFIG_ELEMENT_ID: &str = "amp-tracker";

/// DOM id of the container for deferred script/img actions.
pub const DEFAULT_DEFERRED_ELEMENT_ID: &str = "amp-deferred";

/// Debug mode toggle.
pub const DEFAULT_DEBUG: bool = false;
