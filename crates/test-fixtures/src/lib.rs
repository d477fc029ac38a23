//! In-memory browser-environment doubles shared by the workspace's tests.
//!
//! `FakeBrowserEnvironment` stands in for a real browser behind
//! `IBrowserEnvironment`: a HashMap document, a cookie string, an optional
//! in-memory storage engine, and a pre-queued event list, all settable
//! through builder-style `with_*` methods.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracker_core::errors::{TrackerError, TrackerResult};
use tracker_core::models::{Beacon, ScreenInfo};
use tracker_core::traits::{IBrowserEnvironment, IDocument, IKeyValueStorage, INavigator};

/// HashMap-backed durable storage.
#[derive(Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IKeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> TrackerResult<()> {
        let mut values = self.values.lock().map_err(|_| TrackerError::Storage {
            message: "storage lock poisoned".to_string(),
        })?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Navigator double with every field settable.
#[derive(Clone)]
pub struct FakeNavigator {
    pub cookies_enabled: bool,
    pub language: String,
    pub vendor: String,
    pub user_agent: String,
    pub platform: String,
    pub do_not_track: bool,
    pub java: bool,
    pub websocket: bool,
    pub worker: bool,
    pub app_cache: bool,
    pub screen: Option<ScreenInfo>,
}

impl Default for FakeNavigator {
    fn default() -> Self {
        Self {
            cookies_enabled: true,
            language: "en-US".to_string(),
            vendor: "Example Inc.".to_string(),
            user_agent: "Mozilla/5.0 (X11; Linux x86_64)".to_string(),
            platform: "Linux x86_64".to_string(),
            do_not_track: false,
            java: false,
            websocket: true,
            worker: true,
            app_cache: true,
            screen: Some(ScreenInfo {
                width: 1920,
                height: 1080,
                color_depth: 24,
                pixel_density: 1.0,
            }),
        }
    }
}

impl INavigator for FakeNavigator {
    fn cookies_enabled(&self) -> bool {
        self.cookies_enabled
    }

    fn language(&self) -> String {
        self.language.clone()
    }

    fn vendor(&self) -> String {
        self.vendor.clone()
    }

    fn user_agent(&self) -> String {
        self.user_agent.clone()
    }

    fn platform(&self) -> String {
        self.platform.clone()
    }

    fn do_not_track(&self) -> bool {
        self.do_not_track
    }

    fn java_enabled(&self) -> bool {
        self.java
    }

    fn has_websocket(&self) -> bool {
        self.websocket
    }

    fn has_worker(&self) -> bool {
        self.worker
    }

    fn has_app_cache(&self) -> bool {
        self.app_cache
    }

    fn screen(&self) -> Option<ScreenInfo> {
        self.screen.clone()
    }
}

/// Document double: an id -> text-content map plus the cookie string.
#[derive(Default)]
pub struct FakeDocument {
    pub elements: HashMap<String, String>,
    pub cookie_string: String,
}

impl IDocument for FakeDocument {
    fn element_text(&self, id: &str) -> Option<String> {
        self.elements.get(id).cloned()
    }

    fn has_element(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn cookie_string(&self) -> String {
        self.cookie_string.clone()
    }
}

/// The full environment double. Defaults to a cooperative browser: storage
/// present, cookies enabled, no elements, nothing pre-queued.
pub struct FakeBrowserEnvironment {
    pub navigator: FakeNavigator,
    pub document: FakeDocument,
    storage: Option<Arc<MemoryStorage>>,
    queued: Vec<Beacon>,
}

impl Default for FakeBrowserEnvironment {
    fn default() -> Self {
        Self {
            navigator: FakeNavigator::default(),
            document: FakeDocument::default(),
            storage: Some(Arc::new(MemoryStorage::new())),
            queued: Vec::new(),
        }
    }
}

impl FakeBrowserEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// A browser with no durable storage engine at all.
    pub fn without_storage(mut self) -> Self {
        self.storage = None;
        self
    }

    pub fn with_cookies_disabled(mut self) -> Self {
        self.navigator.cookies_enabled = false;
        self
    }

    pub fn with_cookie_string(mut self, cookies: impl Into<String>) -> Self {
        self.document.cookie_string = cookies.into();
        self
    }

    /// Add a DOM element with the given id and text content.
    pub fn with_element(mut self, id: impl Into<String>, text: impl Into<String>) -> Self {
        self.document.elements.insert(id.into(), text.into());
        self
    }

    pub fn with_screen(mut self, screen: Option<ScreenInfo>) -> Self {
        self.navigator.screen = screen;
        self
    }

    /// Pre-queue an event, as a page populating the async interface before
    /// the agent loads would.
    pub fn with_queued_event(mut self, beacon: Beacon) -> Self {
        self.queued.push(beacon);
        self
    }

    /// Direct handle on the storage double, for seeding and asserting.
    pub fn storage(&self) -> Option<Arc<MemoryStorage>> {
        self.storage.clone()
    }

    /// Seed a raw value into storage. Panics when storage is absent.
    pub fn seed_storage(&self, key: &str, value: &str) {
        let storage = self
            .storage
            .as_ref()
            .expect("seed_storage on an environment without storage");
        storage
            .set(key, value)
            .expect("MemoryStorage::set cannot fail");
    }
}

impl IBrowserEnvironment for FakeBrowserEnvironment {
    fn document(&self) -> &dyn IDocument {
        &self.document
    }

    fn navigator(&self) -> &dyn INavigator {
        &self.navigator
    }

    fn local_storage(&self) -> Option<Arc<dyn IKeyValueStorage>> {
        self.storage
            .clone()
            .map(|s| s as Arc<dyn IKeyValueStorage>)
    }

    fn queued_events(&self) -> Vec<Beacon> {
        self.queued.clone()
    }
}
