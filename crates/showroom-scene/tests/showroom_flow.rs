use std::f64::consts::TAU;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use showroom_config::{CarKind, LoadingConfig, ShowcaseAnimation, ShowroomConfig};
use showroom_scene::{
    CarModel, CarPose, Key, LoadingPhase, LoadingScreen, Menu, MenuTransition, ModelFactory,
    PaintColor, ProceduralModelFactory, Renderer, SceneView, Showroom, ShowroomError,
};
use showroom_tween::EasingFunction;

/// Records what each frame showed.
#[derive(Debug, Default, Clone)]
struct RecordingRenderer {
    frames: Arc<Mutex<Vec<(f64, CarKind, CarPose)>>>,
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, view: &SceneView<'_>) {
        self.frames
            .lock()
            .unwrap()
            .push((view.now_ms, view.current_car, view.pose));
    }
}

/// Counts builds so registry reuse can be checked.
#[derive(Debug, Default)]
struct CountingFactory {
    builds: usize,
}

impl ModelFactory for CountingFactory {
    fn build(&mut self, kind: CarKind) -> CarModel {
        self.builds += 1;
        ProceduralModelFactory.build(kind)
    }
}

fn linear_config() -> ShowroomConfig {
    let mut config = ShowroomConfig::default();
    for timing in [
        &mut config.showcase.rev,
        &mut config.showcase.drift,
        &mut config.showcase.spin,
    ] {
        timing.easing = EasingFunction::Linear;
    }
    config
}

#[test]
fn frames_render_after_tweens() -> Result<()> {
    let renderer = RecordingRenderer::default();
    let frames = Arc::clone(&renderer.frames);
    let mut room = Showroom::new(linear_config(), renderer, ProceduralModelFactory, 0.0)?;
    room.show_car(CarKind::Super, 0.0)?;

    room.frame(1000.0);
    room.frame(2000.0);

    let frames = frames.lock().unwrap();
    assert_eq!(frames.len(), 2);
    let (now, car, pose) = frames[0];
    assert_eq!((now, car), (1000.0, CarKind::Super));
    // Spin: 4000 ms per turn.
    assert!((pose.rotation[1] - TAU / 4.0).abs() < 1e-9);
    assert!((frames[1].2.rotation[1] - TAU / 2.0).abs() < 1e-9);
    Ok(())
}

#[test]
fn switching_cars_cancels_previous_showcase() -> Result<()> {
    let mut room = Showroom::new(
        linear_config(),
        RecordingRenderer::default(),
        CountingFactory::default(),
        0.0,
    )?;
    let muscle = room.showcase().active().cloned().expect("initial showcase");
    assert_eq!(room.showcase().animation(), Some(ShowcaseAnimation::Rev));

    room.frame(1250.0);
    assert_ne!(room.pose(), CarPose::default());

    let drift = room.show_car(CarKind::Sport, 1250.0)?;
    assert!(muscle.is_cancelled());
    assert_eq!(room.pose(), CarPose::default());

    room.frame(2750.0);
    assert_eq!(room.engine().active_count(), 1);
    assert!(room.engine().is_active(drift.id()));
    // Drift at a quarter: positionX keyframes [0, 0.5, -0.5, 0] at 0.25.
    assert!((room.pose().position[0] - 0.375).abs() < 1e-9);
    Ok(())
}

#[test]
fn models_are_built_once_and_cloned_for_display() -> Result<()> {
    let mut room = Showroom::new(
        ShowroomConfig::default(),
        RecordingRenderer::default(),
        CountingFactory::default(),
        0.0,
    )?;
    room.change_color("#ffffff")?;
    room.show_car(CarKind::Sport, 0.0)?;
    room.show_car(CarKind::Muscle, 0.0)?;
    assert_eq!(room.factory().builds, 3);

    // Paint does not survive a switch; the registry copy was never touched.
    assert_eq!(room.paint(), Some(PaintColor::from_rgb(255, 0, 0)));
    assert_eq!(
        room.model(CarKind::Muscle).map(CarModel::paint),
        Some(PaintColor::from_rgb(255, 0, 0))
    );
    Ok(())
}

#[test]
fn paint_changes_displayed_car_only() -> Result<()> {
    let mut room = Showroom::new(
        ShowroomConfig::default(),
        RecordingRenderer::default(),
        ProceduralModelFactory,
        0.0,
    )?;
    let options = room.color_options().to_vec();
    assert_eq!(options[1], "#0000ff");

    let blue = room.change_color(&options[1])?;
    assert_eq!(room.paint(), Some(blue));
    let car = room.displayed_car().expect("car on display");
    assert_eq!(car.top.color, blue);

    let err = room.change_color("#12345").unwrap_err();
    assert!(matches!(err, ShowroomError::InvalidColor(_)));
    assert_eq!(room.paint(), Some(blue));
    Ok(())
}

#[test]
fn rejected_showcase_keeps_current_car() -> Result<()> {
    let mut config = ShowroomConfig::default();
    config.showcase.drift.duration_ms = 0.0;
    let mut room = Showroom::new(config, RecordingRenderer::default(), ProceduralModelFactory, 0.0)?;

    let err = room.show_car(CarKind::Sport, 0.0).unwrap_err();
    assert!(matches!(err, ShowroomError::Tween(_)));
    assert_eq!(room.current_car(), CarKind::Muscle);
    assert!(room.showcase().active().is_none());

    room.frame(16.0);
    assert!(!room.engine().has_active());
    Ok(())
}

#[test]
fn menus_after_loading() -> Result<()> {
    let loading = LoadingConfig {
        max_increment: 1000.0,
        ..LoadingConfig::default()
    };
    let config = ShowroomConfig::default();
    let mut room = Showroom::new(
        config,
        RecordingRenderer::default(),
        ProceduralModelFactory,
        0.0,
    )?
    .with_loading(LoadingScreen::with_seed(&loading, 0.0, 3));

    let mut now = 0.0;
    while room.loading().phase() != LoadingPhase::Dismissed {
        now += 500.0;
        room.frame(now);
        assert!(now < 60_000.0, "loading screen never went away");
    }

    assert_eq!(room.switch_menu(Menu::Garage), MenuTransition::Shown(Menu::Garage));
    assert_eq!(room.handle_key(Key::Escape), MenuTransition::Shown(Menu::Main));
    assert_eq!(room.menu(), Menu::Main);
    Ok(())
}
