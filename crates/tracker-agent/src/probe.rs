//! EnvironmentProbe — one synchronous read of the navigator surface.

use tracker_core::models::EnvironmentSnapshot;
use tracker_core::traits::IBrowserEnvironment;

/// Samples browser capability and display signals into an immutable
/// snapshot. Pure read, no dependency on configuration; runs once per agent
/// lifetime and is cached on the state object.
pub struct EnvironmentProbe;

impl EnvironmentProbe {
    pub fn gather(env: &dyn IBrowserEnvironment) -> EnvironmentSnapshot {
        let nav = env.navigator();
        EnvironmentSnapshot {
            cookies: nav.cookies_enabled(),
            language: nav.language(),
            vendor: nav.vendor(),
            user_agent: nav.user_agent(),
            platform: nav.platform(),
            do_not_track: nav.do_not_track(),
            java: nav.java_enabled(),
            websocket: nav.has_websocket(),
            worker: nav.has_worker(),
            app_cache: nav.has_app_cache(),
            screen: nav.screen(),
        }
    }
}
