//! Cancellation handles returned by the engine.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::types::TweenId;

/// Token for stopping one submitted tween.
///
/// Cancelling sets a flag that the engine checks at the top of the next tick;
/// a frame that is already executing is allowed to finish. Cloned handles
/// share the same flag.
#[derive(Debug, Clone)]
pub struct TweenHandle {
    id: TweenId,
    cancelled: Arc<AtomicBool>,
}

impl TweenHandle {
    pub(crate) fn new(id: TweenId) -> Self {
        Self {
            id,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn id(&self) -> TweenId {
        self.id
    }

    /// Stop scheduling frames for this tween. Idempotent.
    pub fn cancel(&self) {
        if !self.cancelled.swap(true, Ordering::AcqRel) {
            log::debug!("{} cancel requested", self.id);
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_is_idempotent_and_shared() {
        let handle = TweenHandle::new(TweenId::new());
        let clone = handle.clone();
        assert!(!clone.is_cancelled());
        handle.cancel();
        handle.cancel();
        assert!(clone.is_cancelled());
        assert_eq!(handle.id(), clone.id());
    }

    #[test]
    fn handles_are_independent() {
        let a = TweenHandle::new(TweenId::new());
        let b = TweenHandle::new(TweenId::new());
        a.cancel();
        assert!(!b.is_cancelled());
    }
}
