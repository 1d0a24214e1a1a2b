//! Append-only event log.
//!
//! The session records a [`Watermark`] before processing each action and
//! returns everything appended after it. The log is backed by a persistent
//! vector, so `snapshot` is O(1) and a snapshot is unaffected by later
//! appends.

use im::Vector;

use super::event::GameEvent;

/// Length of the log at a point in time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Watermark(usize);

impl Watermark {
    /// Number of events recorded before this mark.
    #[must_use]
    pub const fn position(self) -> usize {
        self.0
    }
}

/// Ordered record of every emitted event.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vector<GameEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Mark the current end of the log.
    #[must_use]
    pub fn watermark(&self) -> Watermark {
        Watermark(self.events.len())
    }

    /// Append an event.
    pub fn push(&mut self, event: GameEvent) {
        self.events.push_back(event);
    }

    /// Append events in order.
    pub fn extend(&mut self, events: impl IntoIterator<Item = GameEvent>) {
        for event in events {
            self.events.push_back(event);
        }
    }

    /// Events appended strictly after `mark`.
    /// O(log n) in the length of the log, plus the size of the tail.
    #[must_use]
    pub fn since(&self, mark: Watermark) -> Vec<GameEvent> {
        if mark.0 >= self.events.len() {
            return Vec::new();
        }
        self.events.skip(mark.0).into_iter().collect()
    }

    /// Get the event at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&GameEvent> {
        self.events.get(index)
    }

    /// Iterate over every event, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.events.iter()
    }

    /// Cheap copy of the full history.
    #[must_use]
    pub fn snapshot(&self) -> Vector<GameEvent> {
        self.events.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn event(n: i64) -> GameEvent {
        GameEvent::custom("n", json!(n))
    }

    #[test]
    fn test_since_watermark() {
        let mut log = EventLog::new();
        log.push(event(1));
        let mark = log.watermark();
        log.push(event(2));
        log.push(event(3));

        assert_eq!(mark.position(), 1);
        assert_eq!(log.since(mark), vec![event(2), event(3)]);
        assert!(log.since(log.watermark()).is_empty());
    }

    #[test]
    fn test_since_deep_in_long_log() {
        let mut log = EventLog::new();
        log.extend((0..5000).map(event));
        let mark = log.watermark();
        log.extend([event(-1), event(-2)]);

        assert_eq!(log.since(mark), vec![event(-1), event(-2)]);
        assert_eq!(log.len(), 5002);
        assert_eq!(log.get(0), Some(&event(0)));
        assert_eq!(log.since(Watermark(4999)).len(), 3);
    }

    #[test]
    fn test_extend_keeps_order() {
        let mut log = EventLog::new();
        log.extend([event(1), event(2)]);
        log.push(event(3));

        let all: Vec<_> = log.iter().cloned().collect();
        assert_eq!(all, vec![event(1), event(2), event(3)]);
        assert_eq!(log.get(1), Some(&event(2)));
    }

    #[test]
    fn test_snapshot_is_isolated() {
        let mut log = EventLog::new();
        log.push(event(1));
        let snapshot = log.snapshot();
        log.push(event(2));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(log.len(), 2);
    }
}
