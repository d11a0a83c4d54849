/// Example program to print the loaded configuration
///
/// Run with: cargo run -p showroom-config --example print_config

fn main() {
    let config = showroom_config::ShowroomConfig::load();

    println!("=== {} v{} ===\n", config.game.title, config.game.version);

    println!("Game Settings:");
    println!("  Initial Car: {}", config.game.initial_car);
    println!();

    println!("Graphics Settings:");
    println!("  Quality: {:?}", config.graphics.default_quality);
    println!("  Resolution: {:?}", config.graphics.default_resolution.size());
    println!("  Shadows: {}", config.graphics.shadows_enabled);
    println!();

    println!("Cars:");
    for kind in showroom_config::CarKind::ALL {
        let car = config.cars.get(kind);
        let timing = config.showcase.timing(car.showcase_animation);
        println!(
            "  {kind}: {} ({:?}, {}ms {})",
            car.name, car.showcase_animation, timing.duration_ms, timing.easing
        );
    }
    println!();

    match toml::to_string_pretty(&config) {
        Ok(toml_str) => {
            println!("=== Serialized Configuration ===");
            println!("{}", toml_str);
        }
        Err(e) => {
            eprintln!("Failed to serialize config: {}", e);
        }
    }
}
