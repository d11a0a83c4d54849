use anyhow::Result;
use showroom_config::{CarKind, ShowroomConfig};
use showroom_scene::{Key, LogRenderer, Menu, ProceduralModelFactory, Showroom};

fn main() -> Result<()> {
    let _ = env_logger::try_init();

    let mut config = ShowroomConfig::load();
    // `--car=sport` overrides the configured initial car.
    if let Some(car) = std::env::args().find_map(|a| a.strip_prefix("--car=").map(str::to_string)) {
        config.game.initial_car = car
            .parse::<CarKind>()
            .map_err(anyhow::Error::msg)?;
    }
    let frames = config.run.frames;
    let interval = config.run.frame_interval_ms;
    let (width, height) = config.graphics.default_resolution.size();

    let mut room = Showroom::new(config, LogRenderer::new(), ProceduralModelFactory, 0.0)?;
    room.resize(width, height);

    // Headless tour: once the loading screen is gone, visit the garage and
    // show every car for an equal share of the remaining frames.
    let mut tour = CarKind::ALL.into_iter().cycle();
    let per_car = (frames / CarKind::ALL.len() as u32).max(1);
    let mut toured = false;
    for frame in 0..frames {
        let now = f64::from(frame) * interval;
        room.frame(now);

        if !room.loading().is_dismissed() {
            continue;
        }
        if !toured {
            room.switch_menu(Menu::Garage);
            toured = true;
        }
        if frame % per_car == 0 {
            if let Some(kind) = tour.next() {
                room.show_car(kind, now)?;
                if let Some(color) = room.color_options().last().cloned() {
                    room.change_color(&color)?;
                }
            }
        }
        if room.exit_requested() {
            break;
        }
    }
    room.handle_key(Key::Escape);

    log::info!(
        "rendered {} frames, last car {} at {:?}",
        room.renderer().frames(),
        room.current_car(),
        room.pose()
    );
    Ok(())
}
