//! Showroom configuration system
//!
//! Centralized configuration for the showroom, loaded from `showroom.toml`
//! with environment variable overrides. Every section has defaults, so a
//! missing file or a partial file is fine.

use serde::{Deserialize, Serialize};
use showroom_tween::EasingFunction;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "showroom.toml";

/// Errors raised while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for this schema.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ShowroomConfig {
    pub game: GameConfig,
    pub loading: LoadingConfig,
    pub graphics: GraphicsConfig,
    pub audio: AudioConfig,
    pub cars: CarsConfig,
    pub showcase: ShowcaseConfig,
    pub environment: EnvironmentConfig,
    pub camera: CameraConfig,
    pub physics: PhysicsConfig,
    /// Headless runner settings
    pub run: RunConfig,
}

/// The three showroom cars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CarKind {
    Muscle,
    Sport,
    Super,
}

impl CarKind {
    pub const ALL: [CarKind; 3] = [Self::Muscle, Self::Sport, Self::Super];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Muscle => "muscle",
            Self::Sport => "sport",
            Self::Super => "super",
        }
    }
}

impl fmt::Display for CarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CarKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown car `{s}`"))
    }
}

/// Which showcase animation a car plays in the garage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShowcaseAnimation {
    /// Vertical bob with a full turn.
    Rev,
    /// Full turn with a lateral slide and body tilt.
    Drift,
    /// Plain turntable.
    Spin,
}

/// Render quality preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Low,
    Medium,
    High,
    Ultra,
}

impl FromStr for Quality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "ultra" => Ok(Self::Ultra),
            other => Err(format!("unknown quality `{other}`")),
        }
    }
}

/// Output resolution preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    #[serde(rename = "720p")]
    Hd,
    #[serde(rename = "1080p")]
    FullHd,
    #[serde(rename = "1440p")]
    Qhd,
    #[serde(rename = "4k")]
    Uhd,
}

impl Resolution {
    /// Pixel dimensions (width, height).
    pub fn size(&self) -> (u32, u32) {
        match self {
            Self::Hd => (1280, 720),
            Self::FullHd => (1920, 1080),
            Self::Qhd => (2560, 1440),
            Self::Uhd => (3840, 2160),
        }
    }
}

/// Game-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub title: String,
    pub version: String,
    /// Car shown when the showroom opens
    pub initial_car: CarKind,
}

/// Simulated loading screen settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadingConfig {
    /// Time between progress updates in milliseconds
    pub tick_interval_ms: f64,
    /// Upper bound (exclusive) of each random progress increment, in percent
    pub max_increment: f64,
    /// Delay before the menu fades in once loading finished
    pub fade_delay_ms: f64,
}

/// Graphics settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphicsConfig {
    pub default_quality: Quality,
    pub default_resolution: Resolution,
    pub shadows_enabled: bool,
    pub reflections_enabled: bool,
    pub antialiasing: bool,
    /// 0.0 to 1.0
    pub motion_blur_strength: f32,
}

/// Audio settings, all volumes in 0.0 to 1.0
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub master_volume: f32,
    pub music_volume: f32,
    pub sfx_volume: f32,
    pub engine_sound_intensity: f32,
}

/// Per-car settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CarConfig {
    pub name: String,
    pub max_speed: u32,
    pub acceleration: f32,
    pub handling: f32,
    pub braking: f32,
    /// Paint swatches as `#rrggbb`
    pub colors: Vec<String>,
    pub showcase_animation: ShowcaseAnimation,
}

impl Default for CarConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            max_speed: 200,
            acceleration: 0.5,
            handling: 0.5,
            braking: 0.5,
            colors: vec!["#ffffff".to_string()],
            showcase_animation: ShowcaseAnimation::Spin,
        }
    }
}

/// Settings for all three cars
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CarsConfig {
    pub muscle: CarConfig,
    pub sport: CarConfig,
    #[serde(rename = "super")]
    pub supercar: CarConfig,
}

impl CarsConfig {
    pub fn get(&self, kind: CarKind) -> &CarConfig {
        match kind {
            CarKind::Muscle => &self.muscle,
            CarKind::Sport => &self.sport,
            CarKind::Super => &self.supercar,
        }
    }
}

/// Timing of one showcase animation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShowcaseTiming {
    pub duration_ms: f64,
    pub easing: EasingFunction,
}

/// Timings of the three showcase animations
///
/// A table may set only some fields; the rest keep that animation's stock
/// timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "ShowcaseOverrides")]
pub struct ShowcaseConfig {
    pub rev: ShowcaseTiming,
    pub drift: ShowcaseTiming,
    pub spin: ShowcaseTiming,
}

/// One `[showcase.*]` table as written in the file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TimingOverride {
    duration_ms: Option<f64>,
    easing: Option<EasingFunction>,
}

impl TimingOverride {
    fn over(self, stock: ShowcaseTiming) -> ShowcaseTiming {
        ShowcaseTiming {
            duration_ms: self.duration_ms.unwrap_or(stock.duration_ms),
            easing: self.easing.unwrap_or(stock.easing),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ShowcaseOverrides {
    rev: TimingOverride,
    drift: TimingOverride,
    spin: TimingOverride,
}

impl From<ShowcaseOverrides> for ShowcaseConfig {
    fn from(overrides: ShowcaseOverrides) -> Self {
        let stock = Self::default();
        Self {
            rev: overrides.rev.over(stock.rev),
            drift: overrides.drift.over(stock.drift),
            spin: overrides.spin.over(stock.spin),
        }
    }
}

impl ShowcaseConfig {
    pub fn timing(&self, animation: ShowcaseAnimation) -> ShowcaseTiming {
        match animation {
            ShowcaseAnimation::Rev => self.rev,
            ShowcaseAnimation::Drift => self.drift,
            ShowcaseAnimation::Spin => self.spin,
        }
    }
}

/// A colored garage spotlight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotlightConfig {
    pub color: String,
    pub intensity: f32,
    pub position: [f32; 3],
}

/// Garage environment settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    pub garage_ambient_light: f32,
    pub garage_spotlights: Vec<SpotlightConfig>,
    pub fog_density: f32,
    pub reflective_floor: bool,
}

/// Camera settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees
    pub fov: f32,
    pub rotation_speed: f32,
    pub initial_position: [f32; 3],
    pub look_at: [f32; 3],
}

/// Vehicle physics constants (read by the physics hook only)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity: f32,
    pub friction: f32,
    pub restitution: f32,
    pub vehicle_mass: f32,
    pub suspension_stiffness: f32,
    pub suspension_damping: f32,
    pub suspension_travel: f32,
}

/// Headless runner settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Number of frames to simulate
    pub frames: u32,
    /// Simulated time between frames in milliseconds
    pub frame_interval_ms: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: "Velocity Rush: Street Legends".to_string(),
            version: "1.0.0".to_string(),
            initial_car: CarKind::Muscle,
        }
    }
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 500.0,
            max_increment: 15.0,
            fade_delay_ms: 1000.0,
        }
    }
}

impl Default for GraphicsConfig {
    fn default() -> Self {
        Self {
            default_quality: Quality::Medium,
            default_resolution: Resolution::FullHd,
            shadows_enabled: true,
            reflections_enabled: true,
            antialiasing: true,
            motion_blur_strength: 0.5,
        }
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            music_volume: 0.7,
            sfx_volume: 0.9,
            engine_sound_intensity: 0.8,
        }
    }
}

fn swatches(colors: &[&str]) -> Vec<String> {
    colors.iter().map(|c| c.to_string()).collect()
}

impl Default for CarsConfig {
    fn default() -> Self {
        Self {
            muscle: CarConfig {
                name: "Thunder GT".to_string(),
                max_speed: 200,
                acceleration: 0.7,
                handling: 0.5,
                braking: 0.6,
                colors: swatches(&["#ff0000", "#0000ff", "#333333", "#ffffff", "#ffff00"]),
                showcase_animation: ShowcaseAnimation::Rev,
            },
            sport: CarConfig {
                name: "Velocity Z".to_string(),
                max_speed: 220,
                acceleration: 0.8,
                handling: 0.8,
                braking: 0.7,
                colors: swatches(&["#00ff00", "#ff00ff", "#000000", "#0066cc", "#ff6600"]),
                showcase_animation: ShowcaseAnimation::Drift,
            },
            supercar: CarConfig {
                name: "Phantom X".to_string(),
                max_speed: 250,
                acceleration: 0.9,
                handling: 0.7,
                braking: 0.9,
                colors: swatches(&["#ff00ff", "#ffff00", "#00ffff", "#ffffff", "#ff0000"]),
                showcase_animation: ShowcaseAnimation::Spin,
            },
        }
    }
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            rev: ShowcaseTiming {
                duration_ms: 5000.0,
                easing: EasingFunction::EaseInOutQuad,
            },
            drift: ShowcaseTiming {
                duration_ms: 6000.0,
                easing: EasingFunction::EaseInOutSine,
            },
            spin: ShowcaseTiming {
                duration_ms: 4000.0,
                easing: EasingFunction::Linear,
            },
        }
    }
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            garage_ambient_light: 0.7,
            garage_spotlights: vec![
                SpotlightConfig {
                    color: "#00ffff".to_string(),
                    intensity: 1.5,
                    position: [5.0, 5.0, 5.0],
                },
                SpotlightConfig {
                    color: "#ff00ff".to_string(),
                    intensity: 1.2,
                    position: [-5.0, 5.0, -5.0],
                },
                SpotlightConfig {
                    color: "#ffff00".to_string(),
                    intensity: 0.8,
                    position: [0.0, 6.0, 0.0],
                },
            ],
            fog_density: 0.02,
            reflective_floor: true,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: 75.0,
            rotation_speed: 0.01,
            initial_position: [0.0, 2.0, 7.0],
            look_at: [0.0, 0.0, 0.0],
        }
    }
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: -9.8,
            friction: 0.3,
            restitution: 0.4,
            vehicle_mass: 1500.0,
            suspension_stiffness: 30.0,
            suspension_damping: 2.3,
            suspension_travel: 0.3,
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            frames: 600,
            frame_interval_ms: 1000.0 / 60.0,
        }
    }
}

fn env_flag(val: &str) -> bool {
    val == "1" || val.eq_ignore_ascii_case("true")
}

/// Parse an environment variable, warning when it is set but malformed.
fn env_parse<T>(name: &str) -> Option<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let val = std::env::var(name).ok()?;
    match val.parse() {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            log::warn!("{name}: ignoring `{val}`: {err}");
            None
        }
    }
}

impl ShowroomConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from `showroom.toml` in the current directory,
    /// or return the default configuration if it is missing or invalid
    pub fn load_or_default() -> Self {
        match Self::load_from_file(DEFAULT_CONFIG_FILE) {
            Ok(config) => config,
            Err(ConfigError::Read { .. }) => Self::default(),
            Err(err) => {
                log::warn!("{err}; using default configuration");
                Self::default()
            }
        }
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    /// Unparseable values are ignored with a warning.
    pub fn merge_with_env(&mut self) {
        if let Ok(car) = std::env::var("SHOWROOM_CAR") {
            match car.parse() {
                Ok(kind) => self.game.initial_car = kind,
                Err(err) => log::warn!("SHOWROOM_CAR: {err}"),
            }
        }
        if let Ok(quality) = std::env::var("SHOWROOM_QUALITY") {
            match quality.parse() {
                Ok(quality) => self.graphics.default_quality = quality,
                Err(err) => log::warn!("SHOWROOM_QUALITY: {err}"),
            }
        }
        if let Ok(val) = std::env::var("SHOWROOM_SHADOWS") {
            self.graphics.shadows_enabled = env_flag(&val);
        }
        if let Some(interval) = env_parse::<f64>("SHOWROOM_LOADING_MS") {
            self.loading.tick_interval_ms = interval;
        }
        if let Some(frames) = env_parse::<u32>("SHOWROOM_FRAMES") {
            self.run.frames = frames;
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// 1. Load from showroom.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}
