//! Bounded, most-recent-first log of discrete simulation events.

use std::collections::VecDeque;

use nbody::SimEvent;
use serde::Serialize;

/// Default number of entries retained.
pub const DEFAULT_CAPACITY: usize = 256;

/// A logged event stamped with the simulation time it occurred at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub timestamp: f64,
    pub event: SimEvent,
}

/// Append-only event history, newest entry first.
///
/// Once the capacity is reached, recording a new entry drops the oldest.
#[derive(Debug)]
pub struct EventLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl EventLog {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        debug_assert!(capacity > 0, "event log capacity must be positive");
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn record(&mut self, timestamp: f64, event: SimEvent) {
        if self.entries.len() == self.capacity {
            self.entries.pop_back();
        }
        self.entries.push_front(LogEntry { timestamp, event });
    }

    /// Entries from most recent to oldest.
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nbody::BodyId;
    use stellar::Archetype;

    fn birth(id: u32) -> SimEvent {
        SimEvent::Birth {
            id: BodyId(id),
            archetype: Archetype::RedDwarf,
        }
    }

    #[test]
    fn newest_entry_comes_first() {
        let mut log = EventLog::new();
        log.record(1.0, birth(0));
        log.record(2.0, birth(1));

        let timestamps: Vec<f64> = log.entries().map(|e| e.timestamp).collect();
        assert_eq!(timestamps, vec![2.0, 1.0]);
        assert_eq!(log.latest().map(|e| e.timestamp), Some(2.0));
    }

    #[test]
    fn capacity_drops_the_oldest() {
        let mut log = EventLog::with_capacity(2);
        log.record(1.0, birth(0));
        log.record(2.0, birth(1));
        log.record(3.0, birth(2));

        assert_eq!(log.len(), 2);
        let timestamps: Vec<f64> = log.entries().map(|e| e.timestamp).collect();
        assert_eq!(timestamps, vec![3.0, 2.0]);
    }

    #[test]
    fn entries_serialize_with_event_payload() {
        let mut log = EventLog::new();
        log.record(1.5, birth(7));

        let json = serde_json::to_value(log.latest().unwrap()).unwrap();
        assert_eq!(json["timestamp"], 1.5);
        assert_eq!(json["event"]["type"], "birth");
    }
}
