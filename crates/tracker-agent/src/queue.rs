//! BeaconQueue — sent / pending / current staging for tracking events.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use tracker_core::errors::{TrackerError, TrackerResult};
use tracker_core::models::Beacon;

/// Staged tracking events for one page load.
///
/// `sent` is append-only and chronological; `pending` preserves arrival
/// order; at most one beacon is in flight at a time. Nothing is ever
/// evicted — the queue's lifetime is bounded by the page's.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BeaconQueue {
    sent: Vec<Beacon>,
    pending: VecDeque<Beacon>,
    current: Option<Beacon>,
}

impl BeaconQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct seeded with host-page events, preserving arrival order.
    pub fn with_seed(events: impl IntoIterator<Item = Beacon>) -> Self {
        let mut queue = Self::new();
        queue.seed(events);
        queue
    }

    /// Append a single event.
    pub fn enqueue(&mut self, beacon: Beacon) {
        self.pending.push_back(beacon);
    }

    /// Bulk-append externally-queued events in arrival order.
    pub fn seed(&mut self, events: impl IntoIterator<Item = Beacon>) {
        self.pending.extend(events);
    }

    /// Move the oldest pending beacon into the in-flight slot and return it.
    /// `Ok(None)` when nothing is pending; an error while a beacon is
    /// already in flight.
    pub fn promote(&mut self) -> TrackerResult<Option<&Beacon>> {
        if let Some(current) = &self.current {
            return Err(TrackerError::BeaconInFlight {
                id: current.id.clone(),
            });
        }
        self.current = self.pending.pop_front();
        Ok(self.current.as_ref())
    }

    /// Record external delivery confirmation: the in-flight beacon moves to
    /// `sent`. `None` when nothing is in flight. Delivery itself happens
    /// outside this core.
    pub fn confirm(&mut self) -> Option<&Beacon> {
        let delivered = self.current.take()?;
        self.sent.push(delivered);
        self.sent.last()
    }

    /// Delivered beacons, oldest first.
    pub fn sent(&self) -> &[Beacon] {
        &self.sent
    }

    /// Beacons waiting for delivery, oldest first.
    pub fn pending(&self) -> &VecDeque<Beacon> {
        &self.pending
    }

    /// The beacon currently in flight, if any.
    pub fn current(&self) -> Option<&Beacon> {
        self.current.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.sent.is_empty() && self.pending.is_empty() && self.current.is_none()
    }
}
