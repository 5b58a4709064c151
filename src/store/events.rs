//! Append-only log of stream events

use chrono::{DateTime, Utc};

use crate::types::{StreamEvent, TrackId};

#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<StreamEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, track_id: TrackId, timestamp: DateTime<Utc>) {
        self.events.push(StreamEvent { track_id, timestamp });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events in append order
    pub fn iter(&self) -> impl Iterator<Item = &StreamEvent> {
        self.events.iter()
    }
}
