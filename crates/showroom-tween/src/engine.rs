//! The tween engine: one shared scheduler tick for every live tween.
//!
//! The `TweenEngine` replaces per-request frame callbacks with a single
//! `tick(now_ms)` that the host calls once per display refresh. It handles:
//! - Validating and starting requests
//! - Advancing every live tween by one frame, in submission order
//! - Looping, completion and cancellation
//! - Queuing lifecycle events for the host
//!
//! # Usage
//!
//! ```
//! use showroom_tween::{EasingFunction, Targets, TweenEngine, TweenEvent, TweenRequest};
//!
//! let mut engine = TweenEngine::new();
//! let handle = engine
//!     .submit(
//!         TweenRequest::new(Targets::new().with("opacity", 0.0))
//!             .to("opacity", 1.0)
//!             .duration_ms(300.0)
//!             .easing(EasingFunction::EaseOutQuad),
//!         0.0,
//!     )
//!     .unwrap();
//!
//! engine.tick(16.0);
//! engine.tick(320.0);
//! assert!(!engine.is_active(handle.id()));
//! assert!(engine.drain_events().any(|e| matches!(e, TweenEvent::Completed { .. })));
//! ```

use std::collections::BTreeMap;

use super::error::Result;
use super::events::{EventQueue, TweenEvent};
use super::handle::TweenHandle;
use super::request::{Targets, TweenRequest};
use super::tween::{ActiveTween, StepOutcome};
use super::types::{TweenId, TweenState};

/// Scheduler for all live tweens.
#[derive(Debug, Default)]
pub struct TweenEngine {
    /// Live tweens keyed by id; ids grow with submission order.
    tweens: BTreeMap<TweenId, ActiveTween>,

    /// Events emitted during submissions and ticks.
    event_queue: EventQueue,

    /// Timestamp of the last tick, if any.
    last_tick_ms: Option<f64>,
}

impl TweenEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit a request whose clock starts at `now_ms`.
    ///
    /// Fails with [`TweenError::Configuration`](crate::TweenError::Configuration)
    /// for a non-positive duration or a negative delay; nothing is scheduled
    /// in that case.
    pub fn submit(&mut self, request: TweenRequest, now_ms: f64) -> Result<TweenHandle> {
        let tween = ActiveTween::new(request, now_ms)?;
        let handle = tween.handle();
        log::debug!(
            "{} submitted{}: {} track(s), looping={}",
            tween.id,
            tween
                .label
                .as_deref()
                .map(|l| format!(" ({l})"))
                .unwrap_or_default(),
            tween.tracks().count(),
            tween.is_looping(),
        );
        self.tweens.insert(tween.id, tween);
        Ok(handle)
    }

    /// Advance every live tween by one frame at host time `now_ms`.
    ///
    /// Cancellation requested since the previous tick is honoured first, so a
    /// cancelled tween never writes again. Completed and cancelled tweens are
    /// dropped at the end of the tick.
    pub fn tick(&mut self, now_ms: f64) {
        self.last_tick_ms = Some(now_ms);
        if self.tweens.is_empty() {
            return;
        }

        let mut finished = Vec::new();
        for (id, tween) in self.tweens.iter_mut() {
            if tween.cancel_requested() {
                tween.cancel();
                finished.push(*id);
                continue;
            }

            match tween.step(now_ms) {
                StepOutcome::Pending => {}
                StepOutcome::Running { started } => {
                    if started {
                        self.event_queue.push(TweenEvent::Started {
                            id: *id,
                            label: tween.label.clone(),
                        });
                    }
                }
                StepOutcome::Looped { iteration } => {
                    log::trace!("{id} looped, iteration {iteration}");
                    self.event_queue.push(TweenEvent::Looped {
                        id: *id,
                        label: tween.label.clone(),
                        iteration,
                    });
                }
                StepOutcome::Completed => finished.push(*id),
            }
        }

        for id in finished {
            if let Some(tween) = self.tweens.remove(&id) {
                let event = if tween.state == TweenState::Cancelled {
                    log::debug!("{id} cancelled");
                    TweenEvent::Cancelled {
                        id,
                        label: tween.label,
                    }
                } else {
                    log::debug!("{id} completed");
                    TweenEvent::Completed {
                        id,
                        label: tween.label,
                    }
                };
                self.event_queue.push(event);
            }
        }
    }

    /// Request cancellation of a tween by id.
    ///
    /// Same effect as [`TweenHandle::cancel`]. Returns false if no such tween
    /// is live.
    pub fn cancel(&mut self, id: TweenId) -> bool {
        match self.tweens.get(&id) {
            Some(tween) => {
                tween.handle().cancel();
                true
            }
            None => false,
        }
    }

    /// Request cancellation of every live tween.
    pub fn cancel_all(&mut self) {
        for tween in self.tweens.values() {
            tween.handle().cancel();
        }
    }

    /// Drop every tween immediately, emitting `Cancelled` for each.
    pub fn clear(&mut self) {
        for (id, mut tween) in std::mem::take(&mut self.tweens) {
            tween.cancel();
            self.event_queue.push(TweenEvent::Cancelled {
                id,
                label: tween.label,
            });
        }
    }

    /// Current values of a live tween.
    pub fn targets(&self, id: TweenId) -> Option<&Targets> {
        self.tweens.get(&id).map(ActiveTween::targets)
    }

    /// Mutable access to a live tween's values (host-side edits).
    pub fn targets_mut(&mut self, id: TweenId) -> Option<&mut Targets> {
        self.tweens.get_mut(&id).map(ActiveTween::targets_mut)
    }

    pub fn get(&self, id: TweenId) -> Option<&ActiveTween> {
        self.tweens.get(&id)
    }

    /// State of a live tween. `None` once it completed or was cancelled.
    pub fn state(&self, id: TweenId) -> Option<TweenState> {
        self.tweens.get(&id).map(|t| t.state)
    }

    pub fn is_active(&self, id: TweenId) -> bool {
        self.tweens.get(&id).is_some_and(ActiveTween::is_active)
    }

    pub fn active_count(&self) -> usize {
        self.tweens.values().filter(|t| t.is_active()).count()
    }

    pub fn has_active(&self) -> bool {
        self.tweens.values().any(ActiveTween::is_active)
    }

    pub fn last_tick_ms(&self) -> Option<f64> {
        self.last_tick_ms
    }

    // ========================================================================
    // Event Methods
    // ========================================================================

    /// Drain all pending events in the order they occurred.
    pub fn drain_events(&mut self) -> impl Iterator<Item = TweenEvent> + '_ {
        self.event_queue.drain()
    }

    pub fn has_pending_events(&self) -> bool {
        !self.event_queue.is_empty()
    }

    pub fn pending_event_count(&self) -> usize {
        self.event_queue.len()
    }

    pub fn events_for(&self, id: TweenId) -> Vec<&TweenEvent> {
        self.event_queue.events_for(id)
    }

    pub fn clear_events(&mut self) {
        self.event_queue.clear();
    }
}

static_assertions::assert_impl_all!(TweenEngine: Send);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::EasingFunction;
    use std::sync::{Arc, Mutex};

    fn request(end: f64) -> TweenRequest {
        TweenRequest::new(Targets::new().with("x", 0.0))
            .to("x", end)
            .duration_ms(100.0)
            .easing(EasingFunction::Linear)
    }

    #[test]
    fn test_submit_and_tick() {
        let mut engine = TweenEngine::new();
        let handle = engine.submit(request(1.0), 0.0).unwrap();
        assert_eq!(engine.state(handle.id()), Some(TweenState::Pending));
        assert!(engine.has_active());

        engine.tick(50.0);
        assert_eq!(engine.state(handle.id()), Some(TweenState::Running));
        assert_eq!(engine.targets(handle.id()).unwrap().scalar("x"), Some(0.5));
        assert_eq!(engine.last_tick_ms(), Some(50.0));
    }

    #[test]
    fn test_completion_removes_and_emits() {
        let mut engine = TweenEngine::new();
        let handle = engine.submit(request(1.0), 0.0).unwrap();
        engine.tick(10.0);
        engine.tick(150.0);

        assert!(!engine.is_active(handle.id()));
        assert_eq!(engine.state(handle.id()), None);
        let events: Vec<_> = engine.drain_events().collect();
        assert!(matches!(events[0], TweenEvent::Started { .. }));
        assert!(matches!(events[1], TweenEvent::Completed { .. }));
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn test_cancel_by_id() {
        let mut engine = TweenEngine::new();
        let handle = engine.submit(request(1.0), 0.0).unwrap();
        assert!(engine.cancel(handle.id()));
        assert!(handle.is_cancelled());

        engine.tick(50.0);
        assert_eq!(engine.active_count(), 0);
        let events: Vec<_> = engine.drain_events().collect();
        assert_eq!(events, vec![TweenEvent::Cancelled { id: handle.id(), label: None }]);
        assert!(!engine.cancel(handle.id()));
    }

    #[test]
    fn test_independent_tweens() {
        let mut engine = TweenEngine::new();
        let a = engine.submit(request(1.0), 0.0).unwrap();
        let b = engine.submit(request(2.0), 0.0).unwrap();
        a.cancel();

        engine.tick(50.0);
        assert!(engine.targets(a.id()).is_none());
        assert_eq!(engine.targets(b.id()).unwrap().scalar("x"), Some(1.0));
        assert_eq!(engine.active_count(), 1);
    }

    #[test]
    fn test_callbacks_run_in_submission_order() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let mut engine = TweenEngine::new();
        for name in ["first", "second", "third"] {
            let order = Arc::clone(&order);
            engine
                .submit(
                    request(1.0).on_update(move |_| order.lock().unwrap().push(name)),
                    0.0,
                )
                .unwrap();
        }
        engine.tick(10.0);
        assert_eq!(*order.lock().unwrap(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_clear_cancels_everything() {
        let mut engine = TweenEngine::new();
        engine.submit(request(1.0), 0.0).unwrap();
        engine.submit(request(1.0), 0.0).unwrap();
        engine.clear();
        assert!(!engine.has_active());
        assert_eq!(engine.pending_event_count(), 2);
        assert!(engine.drain_events().all(|e| matches!(e, TweenEvent::Cancelled { .. })));
    }

    #[test]
    fn test_rejected_request_is_not_scheduled() {
        let mut engine = TweenEngine::new();
        assert!(engine.submit(request(1.0).duration_ms(0.0), 0.0).is_err());
        assert_eq!(engine.active_count(), 0);
        engine.tick(10.0);
        assert!(!engine.has_pending_events());
    }
}
