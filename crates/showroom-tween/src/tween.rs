//! Runtime state of a submitted tween.

use std::fmt;

use super::easing::Easing;
use super::error::{Result, TweenError};
use super::handle::TweenHandle;
use super::request::{Targets, TweenRequest, UpdateCallback};
use super::track::PropertyTrack;
use super::types::{TweenId, TweenState};

/// Raw progress for an elapsed time: `min(elapsed / duration, 1)`.
///
/// Never exceeds 1.0 no matter how far past the duration `elapsed` is.
/// Negative elapsed times report 0.0.
pub fn raw_progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

/// What a single frame did to a tween.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Still inside its delay; nothing written.
    Pending,
    /// Values written, more frames needed. `started` is set on the first one.
    Running { started: bool },
    /// Values written at full progress, restarted for loop `iteration`.
    Looped { iteration: u32 },
    /// Values written at full progress, no further frames.
    Completed,
}

/// A tween in flight.
pub struct ActiveTween {
    pub id: TweenId,
    pub label: Option<String>,
    pub state: TweenState,
    /// Start values are captured here at submission; loops replay from them.
    tracks: Vec<(String, PropertyTrack)>,
    /// Live values. Only animated keys are rewritten each frame.
    targets: Targets,
    start_ms: f64,
    delay_ms: f64,
    duration_ms: f64,
    easing: Easing,
    looping: bool,
    iteration: u32,
    on_update: Option<UpdateCallback>,
    handle: TweenHandle,
}

impl ActiveTween {
    /// Validate a request and capture its start values at `now_ms`.
    pub fn new(request: TweenRequest, now_ms: f64) -> Result<Self> {
        let TweenRequest {
            targets,
            end_values,
            duration_ms,
            delay_ms,
            easing,
            looping,
            on_update,
            label,
        } = request;

        if !(duration_ms > 0.0) {
            return Err(TweenError::Configuration(format!(
                "duration must be positive, got {duration_ms}ms"
            )));
        }
        if !(delay_ms >= 0.0) {
            return Err(TweenError::Configuration(format!(
                "delay must be zero or positive, got {delay_ms}ms"
            )));
        }

        let id = TweenId::new();
        let mut tracks = Vec::with_capacity(end_values.len());
        for (key, end) in &end_values {
            let Some(start) = targets.get(key) else {
                log::debug!("{id}: `{key}` has an end value but no target, ignoring");
                continue;
            };
            match PropertyTrack::resolve(start, end) {
                Some(track) => tracks.push((key.clone(), track)),
                None => log::debug!("{id}: `{key}` has no keyframes, ignoring"),
            }
        }

        Ok(Self {
            id,
            label,
            state: TweenState::Pending,
            tracks,
            targets,
            start_ms: now_ms,
            delay_ms,
            duration_ms,
            easing,
            looping,
            iteration: 0,
            on_update,
            handle: TweenHandle::new(id),
        })
    }

    /// Advance one frame at host time `now_ms`.
    ///
    /// Terminal tweens are left untouched and report `Completed`.
    pub fn step(&mut self, now_ms: f64) -> StepOutcome {
        if self.state.is_terminal() {
            return StepOutcome::Completed;
        }

        let elapsed = now_ms - self.start_ms - self.delay_ms;
        if elapsed < 0.0 {
            return StepOutcome::Pending;
        }

        let started = self.state == TweenState::Pending;
        self.state = TweenState::Running;

        let progress = raw_progress(elapsed, self.duration_ms);
        let eased = self.easing.evaluate(progress);
        for (key, track) in &self.tracks {
            let value = track.sample(eased);
            if value.is_nan() {
                log::trace!("{}: `{key}` sampled NaN, skipping write", self.id);
                continue;
            }
            self.targets.insert(key.as_str(), value);
        }
        log::trace!(
            "{} frame: progress={progress:.4} eased={eased:.4}",
            self.id
        );

        if let Some(on_update) = self.on_update.as_mut() {
            on_update(&self.targets);
        }

        if progress < 1.0 {
            return StepOutcome::Running { started };
        }

        if self.looping {
            // Restart the clock; the next frame samples from the captured starts.
            // Live values keep what this frame wrote.
            self.start_ms = now_ms;
            self.delay_ms = 0.0;
            self.iteration += 1;
            StepOutcome::Looped {
                iteration: self.iteration,
            }
        } else {
            self.state = TweenState::Completed;
            StepOutcome::Completed
        }
    }

    /// Mark as cancelled; no further frames will write.
    pub fn cancel(&mut self) {
        self.handle.cancel();
        if !self.state.is_terminal() {
            self.state = TweenState::Cancelled;
        }
    }

    /// True once the handle (or the engine) requested cancellation.
    pub fn cancel_requested(&self) -> bool {
        self.handle.is_cancelled()
    }

    pub fn handle(&self) -> TweenHandle {
        self.handle.clone()
    }

    pub fn targets(&self) -> &Targets {
        &self.targets
    }

    /// Host-side access to the live values.
    ///
    /// Edits are visible until the next frame overwrites the animated keys.
    /// Interpolation never reads them back; it uses the start values captured
    /// at submission. Keys the tween does not animate are never touched.
    pub fn targets_mut(&mut self) -> &mut Targets {
        &mut self.targets
    }

    pub fn tracks(&self) -> impl Iterator<Item = (&str, &PropertyTrack)> {
        self.tracks.iter().map(|(k, t)| (k.as_str(), t))
    }

    /// Completed loops so far.
    pub fn iteration(&self) -> u32 {
        self.iteration
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn is_active(&self) -> bool {
        !self.state.is_terminal()
    }
}

impl fmt::Debug for ActiveTween {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActiveTween")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("state", &self.state)
            .field("targets", &self.targets)
            .field("start_ms", &self.start_ms)
            .field("duration_ms", &self.duration_ms)
            .field("easing", &self.easing)
            .field("looping", &self.looping)
            .field("iteration", &self.iteration)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::EasingFunction;

    fn linear_request() -> TweenRequest {
        TweenRequest::new(Targets::new().with("x", 0.0))
            .to("x", 10.0)
            .duration_ms(1000.0)
            .easing(EasingFunction::Linear)
    }

    #[test]
    fn test_raw_progress_clamps() {
        assert_eq!(raw_progress(500.0, 1000.0), 0.5);
        assert_eq!(raw_progress(1000.0, 1000.0), 1.0);
        assert_eq!(raw_progress(25_000.0, 1000.0), 1.0);
        assert_eq!(raw_progress(-5.0, 1000.0), 0.0);
    }

    #[test]
    fn test_rejects_non_positive_duration() {
        for duration in [0.0, -5.0, f64::NAN] {
            let err = ActiveTween::new(linear_request().duration_ms(duration), 0.0).unwrap_err();
            assert!(matches!(err, TweenError::Configuration(_)));
        }
    }

    #[test]
    fn test_rejects_negative_delay() {
        assert!(ActiveTween::new(linear_request().delay_ms(-1.0), 0.0).is_err());
    }

    #[test]
    fn test_step_lifecycle() {
        let mut tween = ActiveTween::new(linear_request(), 100.0).unwrap();
        assert_eq!(tween.state, TweenState::Pending);

        assert_eq!(tween.step(100.0), StepOutcome::Running { started: true });
        assert_eq!(tween.state, TweenState::Running);
        assert_eq!(tween.step(600.0), StepOutcome::Running { started: false });
        assert_eq!(tween.targets().scalar("x"), Some(5.0));

        assert_eq!(tween.step(1200.0), StepOutcome::Completed);
        assert_eq!(tween.state, TweenState::Completed);
        assert_eq!(tween.targets().scalar("x"), Some(10.0));
    }

    #[test]
    fn test_delay_keeps_pending() {
        let mut tween = ActiveTween::new(linear_request().delay_ms(200.0), 0.0).unwrap();
        assert_eq!(tween.step(100.0), StepOutcome::Pending);
        assert_eq!(tween.state, TweenState::Pending);
        assert_eq!(tween.targets().scalar("x"), Some(0.0));

        tween.step(700.0);
        assert_eq!(tween.targets().scalar("x"), Some(5.0));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let request = TweenRequest::new(Targets::new().with("x", 0.0).with("y", 3.0))
            .to("x", 1.0)
            .to("z", 1.0);
        let tween = ActiveTween::new(request, 0.0).unwrap();
        let keys: Vec<_> = tween.tracks().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["x"]);
        assert_eq!(tween.targets().scalar("y"), Some(3.0));
        assert!(!tween.targets().contains_key("z"));
    }

    #[test]
    fn test_loop_replays_from_start_values() {
        let mut tween = ActiveTween::new(linear_request().looping(true), 0.0).unwrap();
        tween.step(0.0);
        assert_eq!(tween.step(1000.0), StepOutcome::Looped { iteration: 1 });
        // The completing frame's value stays visible until the next frame.
        assert_eq!(tween.targets().scalar("x"), Some(10.0));
        assert_eq!(tween.state, TweenState::Running);
        assert_eq!(tween.iteration(), 1);

        tween.step(1250.0);
        assert_eq!(tween.targets().scalar("x"), Some(2.5));
    }

    #[test]
    fn test_loop_keeps_host_edits_to_unanimated_keys() {
        let request = TweenRequest::new(Targets::new().with("x", 0.0).with("y", 1.0))
            .to("x", 10.0)
            .duration_ms(1000.0)
            .easing(EasingFunction::Linear)
            .looping(true);
        let mut tween = ActiveTween::new(request, 0.0).unwrap();
        tween.targets_mut().insert("y", 5.0);

        tween.step(900.0);
        assert_eq!(tween.targets().scalar("y"), Some(5.0));
        assert_eq!(tween.step(1000.0), StepOutcome::Looped { iteration: 1 });
        assert_eq!(tween.targets().scalar("x"), Some(10.0));
        assert_eq!(tween.targets().scalar("y"), Some(5.0));

        tween.step(1500.0);
        assert_eq!(tween.targets().scalar("x"), Some(5.0));
        assert_eq!(tween.targets().scalar("y"), Some(5.0));
    }

    #[test]
    fn test_cancel_marks_terminal() {
        let mut tween = ActiveTween::new(linear_request(), 0.0).unwrap();
        tween.cancel();
        assert!(tween.cancel_requested());
        assert_eq!(tween.state, TweenState::Cancelled);
        assert_eq!(tween.step(500.0), StepOutcome::Completed);
        assert_eq!(tween.targets().scalar("x"), Some(0.0));
    }
}
