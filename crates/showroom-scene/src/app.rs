//! Showroom application state.
//!
//! [`Showroom`] owns everything the demo needs between frames: the tween
//! engine, the car registry, the displayed car and its showcase, menus and
//! the loading screen. The host drives it with [`Showroom::frame`] once per
//! display refresh and forwards UI input to the `select`/`switch` methods.

use std::collections::BTreeMap;
use std::fmt;

use showroom_config::{CarKind, ShowroomConfig};
use showroom_tween::{TweenEngine, TweenEvent, TweenHandle};

use crate::error::{Result, ShowroomError};
use crate::loading::LoadingScreen;
use crate::menu::{Key, Menu, MenuState, MenuTransition};
use crate::models::{CarModel, ModelFactory};
use crate::paint::PaintColor;
use crate::render::{Renderer, SceneView};
use crate::showcase::{CarPose, ShowcaseController};

/// Asked before quitting; returns true to quit.
pub type ExitHook = Box<dyn FnMut() -> bool + Send>;

pub struct Showroom<R, F> {
    config: ShowroomConfig,
    engine: TweenEngine,
    renderer: R,
    factory: F,
    /// Pristine model per car; displayed cars are clones.
    models: BTreeMap<CarKind, CarModel>,
    displayed: Option<CarModel>,
    current_car: CarKind,
    menu: MenuState,
    showcase: ShowcaseController,
    loading: LoadingScreen,
    confirm_exit: ExitHook,
    exit_requested: bool,
    frame: u64,
}

impl<R: Renderer, F: ModelFactory> Showroom<R, F> {
    /// Build every car and put the configured initial car on display.
    pub fn new(config: ShowroomConfig, renderer: R, mut factory: F, now_ms: f64) -> Result<Self> {
        let models = CarKind::ALL
            .into_iter()
            .map(|kind| (kind, factory.build(kind)))
            .collect();
        let loading = LoadingScreen::new(&config.loading, now_ms);
        let initial = config.game.initial_car;

        let mut showroom = Self {
            config,
            engine: TweenEngine::new(),
            renderer,
            factory,
            models,
            displayed: None,
            current_car: initial,
            menu: MenuState::new(),
            showcase: ShowcaseController::new(),
            loading,
            confirm_exit: Box::new(|| false),
            exit_requested: false,
            frame: 0,
        };
        showroom.show_car(initial, now_ms)?;
        log::info!(
            "{} v{} ready",
            showroom.config.game.title,
            showroom.config.game.version
        );
        Ok(showroom)
    }

    /// Replace the loading screen (e.g. with a seeded one).
    pub fn with_loading(mut self, loading: LoadingScreen) -> Self {
        self.loading = loading;
        self
    }

    /// Hook consulted when the exit menu is chosen. Defaults to declining.
    pub fn on_exit<H>(mut self, hook: H) -> Self
    where
        H: FnMut() -> bool + Send + 'static,
    {
        self.confirm_exit = Box::new(hook);
        self
    }

    /// Put `kind` on the turntable.
    ///
    /// Resets the pose, clones the car's model (paint included), and starts
    /// its showcase after cancelling the previous one. If the showcase is
    /// rejected the previous car stays displayed, motionless.
    pub fn show_car(&mut self, kind: CarKind, now_ms: f64) -> Result<TweenHandle> {
        let factory = &mut self.factory;
        let model = self
            .models
            .entry(kind)
            .or_insert_with(|| factory.build(kind))
            .clone();
        self.attach_physics(kind);

        let car = self.config.cars.get(kind);
        let animation = car.showcase_animation;
        let timing = self.config.showcase.timing(animation);
        let handle = self
            .showcase
            .play(&mut self.engine, animation, timing, now_ms)?;

        log::info!("showing {} ({kind})", car.name);
        self.displayed = Some(model);
        self.current_car = kind;
        Ok(handle)
    }

    /// [`show_car`](Self::show_car) by car name, as UI buttons carry it.
    pub fn select_car(&mut self, name: &str, now_ms: f64) -> Result<TweenHandle> {
        let kind = name
            .parse::<CarKind>()
            .map_err(|_| ShowroomError::UnknownCar(name.to_string()))?;
        self.show_car(kind, now_ms)
    }

    /// Repaint the displayed car. Invalid colors leave the paint unchanged.
    pub fn change_color(&mut self, hex: &str) -> Result<PaintColor> {
        let color = PaintColor::from_hex(hex)?;
        if let Some(car) = self.displayed.as_mut() {
            car.repaint(color);
            log::info!("{} painted {color}", self.current_car);
        }
        Ok(color)
    }

    /// Swatches offered for the displayed car.
    pub fn color_options(&self) -> &[String] {
        &self.config.cars.get(self.current_car).colors
    }

    pub fn switch_menu(&mut self, menu: Menu) -> MenuTransition {
        let transition = self.menu.switch_menu(menu);
        if transition == MenuTransition::ExitRequested {
            if (self.confirm_exit)() {
                log::info!("exit confirmed");
                self.exit_requested = true;
            } else {
                log::debug!("exit declined");
            }
        }
        transition
    }

    /// A key press. While the loading screen is up it only serves to skip it.
    pub fn handle_key(&mut self, key: Key) -> MenuTransition {
        if !self.loading.is_dismissed() {
            self.loading.skip();
            return MenuTransition::Unchanged;
        }
        self.menu.handle_key(key)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        log::debug!("viewport resized to {width}x{height}");
        self.renderer.resize(width, height);
    }

    /// Advance one frame: loading screen, tweens, then a single render.
    pub fn frame(&mut self, now_ms: f64) {
        let loading = self.loading.update(now_ms);
        self.engine.tick(now_ms);
        for event in self.engine.drain_events() {
            log_event(&event);
        }

        let view = SceneView {
            frame: self.frame,
            now_ms,
            car: self.displayed.as_ref(),
            current_car: self.current_car,
            pose: self.showcase.pose(),
            menu: self.menu.current(),
            loading,
        };
        self.renderer.render(&view);
        self.frame += 1;
    }

    /// Vehicle physics is not simulated; only the hook point exists.
    fn attach_physics(&self, kind: CarKind) {
        log::debug!(
            "physics disabled, {kind} would weigh {}kg",
            self.config.physics.vehicle_mass
        );
    }

    pub fn current_car(&self) -> CarKind {
        self.current_car
    }

    pub fn displayed_car(&self) -> Option<&CarModel> {
        self.displayed.as_ref()
    }

    /// Registry copy of a car, never repainted.
    pub fn model(&self, kind: CarKind) -> Option<&CarModel> {
        self.models.get(&kind)
    }

    pub fn paint(&self) -> Option<PaintColor> {
        self.displayed.as_ref().map(CarModel::paint)
    }

    pub fn pose(&self) -> CarPose {
        self.showcase.pose()
    }

    pub fn showcase(&self) -> &ShowcaseController {
        &self.showcase
    }

    pub fn menu(&self) -> Menu {
        self.menu.current()
    }

    pub fn loading(&self) -> &LoadingScreen {
        &self.loading
    }

    pub fn engine(&self) -> &TweenEngine {
        &self.engine
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn config(&self) -> &ShowroomConfig {
        &self.config
    }

    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }
}

fn log_event(event: &TweenEvent) {
    let label = event.label().unwrap_or("tween");
    match event {
        TweenEvent::Looped { iteration, .. } => {
            log::trace!("{label} ({}) loop {iteration}", event.id())
        }
        _ => log::debug!("{label} ({}) {event:?}", event.id()),
    }
}

impl<R: fmt::Debug, F> fmt::Debug for Showroom<R, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Showroom")
            .field("current_car", &self.current_car)
            .field("menu", &self.menu)
            .field("showcase", &self.showcase)
            .field("loading", &self.loading.phase())
            .field("renderer", &self.renderer)
            .field("frame", &self.frame)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProceduralModelFactory;
    use crate::render::LogRenderer;

    fn showroom() -> Showroom<LogRenderer, ProceduralModelFactory> {
        Showroom::new(
            ShowroomConfig::default(),
            LogRenderer::new(),
            ProceduralModelFactory,
            0.0,
        )
        .unwrap()
    }

    #[test]
    fn test_initial_car_is_displayed() {
        let room = showroom();
        assert_eq!(room.current_car(), CarKind::Muscle);
        assert_eq!(room.displayed_car().map(|c| c.kind), Some(CarKind::Muscle));
        assert_eq!(room.engine().active_count(), 1);
        assert_eq!(room.pose(), CarPose::default());
        assert_eq!(room.menu(), Menu::Main);
    }

    #[test]
    fn test_invalid_color_keeps_paint() {
        let mut room = showroom();
        let before = room.paint();
        let err = room.change_color("chartreuse-ish").unwrap_err();
        assert_eq!(err, ShowroomError::InvalidColor("chartreuse-ish".to_string()));
        assert_eq!(room.paint(), before);
    }

    #[test]
    fn test_unknown_car_name() {
        let mut room = showroom();
        assert_eq!(
            room.select_car("hatchback", 0.0).unwrap_err(),
            ShowroomError::UnknownCar("hatchback".to_string())
        );
        assert!(room.select_car("Sport", 0.0).is_ok());
        assert_eq!(room.current_car(), CarKind::Sport);
    }

    #[test]
    fn test_keys_skip_loading_before_menu() {
        let mut room = showroom();
        room.switch_menu(Menu::Garage);
        assert_eq!(room.handle_key(Key::Escape), MenuTransition::Unchanged);
        assert_eq!(room.menu(), Menu::Garage);
    }

    #[test]
    fn test_any_key_skips_fade_once_loaded() {
        let patient = showroom_config::LoadingConfig {
            fade_delay_ms: 1.0e9,
            ..Default::default()
        };
        let mut room = showroom().with_loading(LoadingScreen::with_seed(&patient, 0.0, 9));
        room.frame(1.0e6);
        assert!(room.loading().is_complete());
        assert!(!room.loading().is_dismissed());

        assert_eq!(room.handle_key(Key::Char(' ')), MenuTransition::Unchanged);
        assert!(room.loading().is_dismissed());
        room.switch_menu(Menu::Settings);
        assert_eq!(room.handle_key(Key::Escape), MenuTransition::Shown(Menu::Main));
    }

    #[test]
    fn test_exit_hook() {
        let mut room = showroom();
        assert_eq!(room.switch_menu(Menu::Exit), MenuTransition::ExitRequested);
        assert!(!room.exit_requested());

        let mut room = showroom().on_exit(|| true);
        room.switch_menu(Menu::Exit);
        assert!(room.exit_requested());
    }
}
