/// Agent version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Target used for every tracing event the agent emits.
pub const LOG_TARGET: &str = "tracker";
