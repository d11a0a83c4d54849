//! Per-car showcase animations.
//!
//! Each car plays one looping turntable animation while on display. The
//! controller owns the handle of the running one and cancels it before
//! starting the next, so exactly one showcase is live per car switch.

use std::f64::consts::TAU;
use std::sync::{Arc, Mutex};

use showroom_config::{ShowcaseAnimation, ShowcaseTiming};
use showroom_tween::{Targets, TweenEngine, TweenHandle, TweenRequest};

use crate::error::Result;

pub const ROTATION_Y: &str = "rotationY";
pub const POSITION_Y: &str = "positionY";
pub const POSITION_X: &str = "positionX";
pub const ROTATION_Z: &str = "rotationZ";

/// Resting height of a car on the turntable.
pub const REST_HEIGHT: f64 = 0.4;

/// Position and Euler rotation of the displayed car.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarPose {
    pub position: [f64; 3],
    pub rotation: [f64; 3],
}

impl Default for CarPose {
    fn default() -> Self {
        Self {
            position: [0.0, REST_HEIGHT, 0.0],
            rotation: [0.0; 3],
        }
    }
}

impl CarPose {
    /// Copy the animated properties present in `targets`.
    pub fn apply(&mut self, targets: &Targets) {
        if let Some(y) = targets.scalar(ROTATION_Y) {
            self.rotation[1] = y;
        }
        if let Some(z) = targets.scalar(ROTATION_Z) {
            self.rotation[2] = z;
        }
        if let Some(x) = targets.scalar(POSITION_X) {
            self.position[0] = x;
        }
        if let Some(y) = targets.scalar(POSITION_Y) {
            self.position[1] = y;
        }
    }
}

/// Pose shared between the showroom and the running showcase callback.
pub type SharedPose = Arc<Mutex<CarPose>>;

/// Starting values every showcase animates from.
pub fn initial_targets() -> Targets {
    Targets::new()
        .with(ROTATION_Y, 0.0)
        .with(POSITION_Y, REST_HEIGHT)
        .with(POSITION_X, 0.0)
        .with(ROTATION_Z, 0.0)
}

/// Build the looping request for `animation`.
pub fn showcase_request(animation: ShowcaseAnimation, timing: ShowcaseTiming) -> TweenRequest {
    let request = TweenRequest::new(initial_targets())
        .to(ROTATION_Y, TAU)
        .duration_ms(timing.duration_ms)
        .easing(timing.easing)
        .looping(true);

    match animation {
        ShowcaseAnimation::Rev => request
            .keyframes(POSITION_Y, [REST_HEIGHT, REST_HEIGHT + 0.05, REST_HEIGHT])
            .label("rev"),
        ShowcaseAnimation::Drift => request
            .keyframes(POSITION_X, [0.0, 0.5, -0.5, 0.0])
            .keyframes(ROTATION_Z, [0.0, 0.05, -0.05, 0.0])
            .label("drift"),
        ShowcaseAnimation::Spin => request.label("spin"),
    }
}

/// Drives the showcase of the displayed car.
#[derive(Debug, Default)]
pub struct ShowcaseController {
    pose: SharedPose,
    active: Option<(ShowcaseAnimation, TweenHandle)>,
}

impl ShowcaseController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel the running showcase, reset the pose and start `animation`.
    pub fn play(
        &mut self,
        engine: &mut TweenEngine,
        animation: ShowcaseAnimation,
        timing: ShowcaseTiming,
        now_ms: f64,
    ) -> Result<TweenHandle> {
        self.stop();
        self.reset_pose();

        let pose = Arc::clone(&self.pose);
        let request = showcase_request(animation, timing).on_update(move |targets| {
            if let Ok(mut pose) = pose.lock() {
                pose.apply(targets);
            }
        });
        let handle = engine.submit(request, now_ms)?;
        log::debug!("showcase `{animation:?}` playing as {}", handle.id());
        self.active = Some((animation, handle.clone()));
        Ok(handle)
    }

    /// Cancel the running showcase, if any. The pose keeps its last value.
    pub fn stop(&mut self) {
        if let Some((animation, handle)) = self.active.take() {
            log::debug!("stopping showcase `{animation:?}` ({})", handle.id());
            handle.cancel();
        }
    }

    pub fn reset_pose(&self) {
        if let Ok(mut pose) = self.pose.lock() {
            *pose = CarPose::default();
        }
    }

    pub fn pose(&self) -> CarPose {
        self.pose.lock().map(|pose| *pose).unwrap_or_default()
    }

    pub fn active(&self) -> Option<&TweenHandle> {
        self.active.as_ref().map(|(_, handle)| handle)
    }

    pub fn animation(&self) -> Option<ShowcaseAnimation> {
        self.active.as_ref().map(|(animation, _)| *animation)
    }
}

impl Drop for ShowcaseController {
    fn drop(&mut self) {
        self.stop();
    }
}
