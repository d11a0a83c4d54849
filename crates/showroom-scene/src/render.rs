//! The renderer seam.
//!
//! The showroom hands a [`SceneView`] to its [`Renderer`] exactly once per
//! frame, after every tween of that frame has written its values.

use showroom_config::CarKind;

use crate::loading::LoadingPhase;
use crate::menu::Menu;
use crate::models::CarModel;
use crate::showcase::CarPose;

/// Everything visible in one frame.
#[derive(Debug, Clone, Copy)]
pub struct SceneView<'a> {
    pub frame: u64,
    pub now_ms: f64,
    pub car: Option<&'a CarModel>,
    pub current_car: CarKind,
    pub pose: CarPose,
    pub menu: Menu,
    pub loading: LoadingPhase,
}

pub trait Renderer {
    fn render(&mut self, view: &SceneView<'_>);

    /// Viewport changed; the camera aspect follows it.
    fn resize(&mut self, _width: u32, _height: u32) {}
}

/// Renderer that only logs what it would draw.
#[derive(Debug, Default)]
pub struct LogRenderer {
    frames: u64,
    aspect: Option<f32>,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn aspect(&self) -> Option<f32> {
        self.aspect
    }
}

impl Renderer for LogRenderer {
    fn render(&mut self, view: &SceneView<'_>) {
        self.frames += 1;
        log::trace!(
            "frame {} @ {:.1}ms: {} pos={:?} rot={:?} menu={} parts={}",
            view.frame,
            view.now_ms,
            view.current_car,
            view.pose.position,
            view.pose.rotation,
            view.menu,
            view.car.map_or(0, |car| car.parts.len()),
        );
    }

    fn resize(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = Some(width as f32 / height as f32);
        }
    }
}
