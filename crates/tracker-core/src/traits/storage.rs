use crate::errors::TrackerResult;

/// Durable key-value store addressed under the page's origin
/// (localStorage-equivalent). Keys are codec-encoded identifier keys.
pub trait IKeyValueStorage: Send + Sync {
    /// Read a value. `None` when nothing is stored under the key.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value. Fails when the store rejects the write (quota).
    fn set(&self, key: &str, value: &str) -> TrackerResult<()>;
}
