use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A discrete tracked event staged for delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Beacon {
    /// Unique beacon identifier.
    pub id: String,
    /// Event name.
    pub event: String,
    /// Event payload as handed over by the page.
    pub params: serde_json::Value,
    /// When this beacon was staged.
    pub queued_at: DateTime<Utc>,
}

impl Beacon {
    /// Stage a new beacon with a fresh id.
    pub fn new(event: impl Into<String>, params: serde_json::Value) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            event: event.into(),
            params,
            queued_at: Utc::now(),
        }
    }
}
