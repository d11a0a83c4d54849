//! Identifiers and lifecycle states shared across the tween engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identifier for a submitted tween.
///
/// Identifiers increase monotonically, so ordering by id is submission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TweenId(pub u64);

impl TweenId {
    /// Generate a new unique tween ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for TweenId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TweenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tween#{}", self.0)
    }
}

/// Lifecycle state of a tween.
///
/// `Pending → Running → {Completed | Cancelled}`. A looping tween stays in
/// `Running` across restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TweenState {
    /// Submitted, no frame has written values yet (or still inside the delay).
    #[default]
    Pending,
    /// Writing values every frame.
    Running,
    /// Reached full progress without looping.
    Completed,
    /// Stopped through its handle or the engine.
    Cancelled,
}

impl TweenState {
    /// Terminal states never schedule another frame.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}
