use crate::models::ScreenInfo;

/// Browser capability and identification reads (navigator-equivalent).
///
/// Implementations must answer `false`/`None` for APIs the browser does not
/// provide rather than panic; "supported but false" and "unsupported" are
/// conflated only where the underlying platform already conflates them.
pub trait INavigator: Send + Sync {
    /// Whether cookies are enabled.
    fn cookies_enabled(&self) -> bool;

    /// Current browser language tag.
    fn language(&self) -> String;

    /// Browser vendor string.
    fn vendor(&self) -> String;

    /// User-agent string.
    fn user_agent(&self) -> String;

    /// Platform / architecture string.
    fn platform(&self) -> String;

    /// Whether the do-not-track header is set.
    fn do_not_track(&self) -> bool;

    /// Java support.
    fn java_enabled(&self) -> bool;

    /// WebSocket support.
    fn has_websocket(&self) -> bool;

    /// Background worker support.
    fn has_worker(&self) -> bool;

    /// Offline application cache support.
    fn has_app_cache(&self) -> bool;

    /// Screen descriptor, `None` when no screen object is exposed.
    fn screen(&self) -> Option<ScreenInfo>;
}
