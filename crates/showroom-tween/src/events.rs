//! Tween lifecycle events.
//!
//! The engine queues an event whenever a tween changes state. Hosts drain the
//! queue after each [`TweenEngine::tick`](crate::TweenEngine::tick).
//!
//! ```ignore
//! engine.tick(now);
//! for event in engine.drain_events() {
//!     if let TweenEvent::Looped { id, iteration, .. } = event {
//!         log::debug!("{id} started loop {iteration}");
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::types::TweenId;

/// Event emitted when a tween changes state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TweenEvent {
    /// First frame that wrote values.
    Started {
        id: TweenId,
        label: Option<String>,
    },
    /// A looping tween reached full progress and restarted.
    Looped {
        id: TweenId,
        label: Option<String>,
        /// Loop that is starting now (1 for the first restart).
        iteration: u32,
    },
    /// A non-looping tween reached full progress.
    Completed {
        id: TweenId,
        label: Option<String>,
    },
    /// The tween was cancelled before completing.
    Cancelled {
        id: TweenId,
        label: Option<String>,
    },
}

impl TweenEvent {
    pub fn id(&self) -> TweenId {
        match self {
            Self::Started { id, .. }
            | Self::Looped { id, .. }
            | Self::Completed { id, .. }
            | Self::Cancelled { id, .. } => *id,
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Started { label, .. }
            | Self::Looped { label, .. }
            | Self::Completed { label, .. }
            | Self::Cancelled { label, .. } => label.as_deref(),
        }
    }

    /// True for events after which the tween is gone.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed { .. } | Self::Cancelled { .. })
    }
}

/// Queue for collecting events during ticks.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<TweenEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: TweenEvent) {
        self.events.push_back(event);
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn pop(&mut self) -> Option<TweenEvent> {
        self.events.pop_front()
    }

    /// Drain all events in the order they were queued.
    pub fn drain(&mut self) -> impl Iterator<Item = TweenEvent> + '_ {
        self.events.drain(..)
    }

    pub fn peek(&self) -> Option<&TweenEvent> {
        self.events.front()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Pending events for one tween.
    pub fn events_for(&self, id: TweenId) -> Vec<&TweenEvent> {
        self.events.iter().filter(|e| e.id() == id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_accessors() {
        let event = TweenEvent::Looped {
            id: TweenId(7),
            label: Some("spin".to_string()),
            iteration: 2,
        };
        assert_eq!(event.id(), TweenId(7));
        assert_eq!(event.label(), Some("spin"));
        assert!(!event.is_terminal());
        assert!(TweenEvent::Cancelled { id: TweenId(7), label: None }.is_terminal());
    }

    #[test]
    fn test_event_queue_order() {
        let mut queue = EventQueue::new();
        queue.push(TweenEvent::Started { id: TweenId(1), label: None });
        queue.push(TweenEvent::Completed { id: TweenId(1), label: None });
        queue.push(TweenEvent::Started { id: TweenId(2), label: None });

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.events_for(TweenId(1)).len(), 2);
        assert!(matches!(queue.peek(), Some(TweenEvent::Started { .. })));

        let events: Vec<_> = queue.drain().collect();
        assert!(matches!(events[1], TweenEvent::Completed { .. }));
        assert!(queue.is_empty());
        assert!(queue.pop().is_none());
    }

    #[test]
    fn test_event_serialization() {
        let event = TweenEvent::Looped {
            id: TweenId(42),
            label: Some("drift".to_string()),
            iteration: 3,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"looped\""));
        let parsed: TweenEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event);
    }
}
