use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Display descriptor, absent when the browser exposes no screen object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreenInfo {
    pub width: u32,
    pub height: u32,
    pub color_depth: u32,
    /// Device pixel ratio (2 on high-density displays, 1 elsewhere).
    pub pixel_density: f64,
}

/// Immutable snapshot of browser capability and display signals, captured
/// once per page load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EnvironmentSnapshot {
    /// Whether cookies are enabled.
    pub cookies: bool,
    /// Current browser language tag.
    pub language: String,
    /// Browser vendor string.
    pub vendor: String,
    /// User-agent string.
    pub user_agent: String,
    /// System architecture / platform string.
    pub platform: String,
    /// Whether the do-not-track header is enabled.
    pub do_not_track: bool,
    /// Support for Java.
    pub java: bool,
    /// Support for WebSockets.
    pub websocket: bool,
    /// Support for background workers.
    pub worker: bool,
    /// Support for offline application caching.
    pub app_cache: bool,
    /// Screen descriptor, when a screen object is exposed.
    pub screen: Option<ScreenInfo>,
}
