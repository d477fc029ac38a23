use std::sync::Arc;

use crate::models::Beacon;

use super::document::IDocument;
use super::navigator::INavigator;
use super::storage::IKeyValueStorage;

/// The injected browser capability surface.
///
/// The agent never reads ambient globals; everything it knows about the host
/// page comes through this trait, so a test double can stand in for a real
/// browser.
pub trait IBrowserEnvironment: Send + Sync {
    fn document(&self) -> &dyn IDocument;

    fn navigator(&self) -> &dyn INavigator;

    /// Durable storage, `None` when the browser provides none.
    fn local_storage(&self) -> Option<Arc<dyn IKeyValueStorage>>;

    /// Events the host page queued before the agent initialized
    /// (array-like async interface). Empty when the interface is absent.
    /// The agent consumes this exactly once, at init.
    fn queued_events(&self) -> Vec<Beacon>;
}
