//! Showroom application layer.
//!
//! Ties the tween engine to the garage: three cars built by a
//! [`ModelFactory`], one looping showcase per displayed car, paint colors,
//! menus and a simulated loading screen. Rendering goes through the
//! [`Renderer`] trait once per frame.
//!
//! ```
//! use showroom_config::{CarKind, ShowroomConfig};
//! use showroom_scene::{LogRenderer, ProceduralModelFactory, Showroom};
//!
//! let mut room = Showroom::new(
//!     ShowroomConfig::default(),
//!     LogRenderer::new(),
//!     ProceduralModelFactory,
//!     0.0,
//! )
//! .unwrap();
//! room.show_car(CarKind::Super, 0.0).unwrap();
//! room.change_color("#00ffff").unwrap();
//! room.frame(16.0);
//! assert_eq!(room.renderer().frames(), 1);
//! ```

pub mod app;
pub mod error;
pub mod loading;
pub mod menu;
pub mod models;
pub mod paint;
pub mod render;
pub mod showcase;

pub use app::{ExitHook, Showroom};
pub use error::{Result, ShowroomError};
pub use loading::{LoadingPhase, LoadingScreen};
pub use menu::{Key, Menu, MenuState, MenuTransition};
pub use models::{CarModel, Material, MaterialSlot, ModelFactory, Part, ProceduralModelFactory, Shape};
pub use paint::PaintColor;
pub use render::{LogRenderer, Renderer, SceneView};
pub use showcase::{CarPose, ShowcaseController, SharedPose, initial_targets, showcase_request};

static_assertions::assert_impl_all!(Showroom<LogRenderer, ProceduralModelFactory>: Send);
