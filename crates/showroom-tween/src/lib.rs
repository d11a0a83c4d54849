//! Tween scheduler for the showroom.
//!
//! A small run-loop-driven interpolation engine. The host submits
//! [`TweenRequest`]s and calls [`TweenEngine::tick`] once per display
//! refresh; every live tween advances by one frame on each tick.
//!
//! # Architecture
//!
//! ```text
//! TweenEngine
//!   ├── ActiveTween (one per submitted request, submission order)
//!   │     ├── PropertyTrack::To        (start value → end value)  
//!   │     └── PropertyTrack::Keyframes (N equal segments)
//!   └── EventQueue (started / looped / completed / cancelled)
//! ```
//!
//! # Usage
//!
//! ```
//! use showroom_tween::{EasingFunction, Targets, TweenEngine, TweenRequest};
//!
//! let mut engine = TweenEngine::new();
//! let request = TweenRequest::new(Targets::new().with("x", 0.0))
//!     .to("x", 10.0)
//!     .duration_ms(1000.0)
//!     .easing(EasingFunction::Linear);
//! let handle = engine.submit(request, 0.0).unwrap();
//!
//! engine.tick(500.0);
//! let x = engine.targets(handle.id()).and_then(|t| t.scalar("x")).unwrap();
//! assert!((x - 5.0).abs() < 1e-9);
//! ```

pub mod easing;
pub mod engine;
pub mod error;
pub mod events;
pub mod handle;
pub mod request;
pub mod track;
pub mod tween;
pub mod types;
pub mod value;

pub use easing::{Easing, EasingFunction};
pub use engine::TweenEngine;
pub use error::{Result, TweenError};
pub use events::{EventQueue, TweenEvent};
pub use handle::TweenHandle;
pub use request::{Targets, TweenRequest, UpdateCallback};
pub use track::{EndValue, PropertyTrack, resolve_segment};
pub use tween::{ActiveTween, StepOutcome, raw_progress};
pub use types::{TweenId, TweenState};
pub use value::{Interpolate, TweenValue};
