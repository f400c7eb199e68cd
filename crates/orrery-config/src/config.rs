//! Configuration sections with defaults and RON persistence.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.ron";

/// `<platform config dir>/orrery`, or `./orrery` when the platform has none.
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("orrery")
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub clock: ClockConfig,
    pub camera: CameraConfig,
    pub hud: HudConfig,
    pub surface: SurfaceConfig,
    pub scene: SceneConfig,
    pub input: InputConfig,
    pub debug: DebugConfig,
}

/// Initial viewport.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

/// Animation speed range and tick rate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClockConfig {
    /// Speed on startup and after reset.
    pub default_speed: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    /// Interval between clock ticks in milliseconds.
    pub tick_interval_ms: u64,
}

/// Orbit camera pose, limits and projection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Distance from the pivot on startup and after reset.
    pub distance: f32,
    /// Closest the camera may zoom. Must be positive.
    pub min_distance: f32,
    pub zoom_step: f32,
    /// Degrees of rotation per pixel dragged.
    pub drag_sensitivity: f32,
    pub pan_step: f32,
    pub default_pitch: f32,
    pub default_yaw: f32,
    pub fov_y_deg: f32,
    pub near: f32,
    pub far: f32,
}

/// HUD widget metrics in pixels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HudConfig {
    pub margin: f32,
    pub button_width: f32,
    pub button_height: f32,
    pub button_spacing: f32,
    pub slider_width: f32,
    pub slider_height: f32,
    /// Extra hit area above the slider track.
    pub slider_hit_margin: f32,
}

/// Procedural surface detail.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SurfaceConfig {
    pub sphere_slices: u32,
    pub sphere_stacks: u32,
    pub crater_count: u32,
    /// Crater radius bounds as fractions of the body radius.
    pub crater_size_min: f32,
    pub crater_size_max: f32,
    pub band_stacks: u32,
    pub band_slices: u32,
    /// Bake Lambertian shading into banded vertex colors.
    pub manual_lighting: bool,
    pub ambient_floor: f32,
}

/// What the scene draws besides the bodies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    pub show_orbits: bool,
    pub show_labels: bool,
    /// Orbit rasterizer grid cells per world unit.
    pub orbit_scale: f32,
    pub star_count: usize,
    pub star_seed: u64,
    pub star_radius: f32,
}

/// Input configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Scroll wheel zoom multiplier.
    pub scroll_zoom_factor: f32,
    /// Keybinding overrides (key name -> command name).
    pub keybindings: HashMap<String, String>,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Write a JSON log file next to the config in debug builds.
    pub log_to_file: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            title: "Orrery".to_string(),
        }
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            default_speed: 1.0,
            min_speed: 0.0,
            max_speed: 3.0,
            tick_interval_ms: 16,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            distance: 25.0,
            min_distance: 1.0,
            zoom_step: 1.0,
            drag_sensitivity: 0.5,
            pan_step: 0.5,
            default_pitch: 20.0,
            default_yaw: 0.0,
            fov_y_deg: 45.0,
            near: 1.0,
            far: 200.0,
        }
    }
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            margin: 10.0,
            button_width: 100.0,
            button_height: 30.0,
            button_spacing: 8.0,
            slider_width: 200.0,
            slider_height: 8.0,
            slider_hit_margin: 8.0,
        }
    }
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            sphere_slices: 20,
            sphere_stacks: 20,
            crater_count: 12,
            crater_size_min: 0.15,
            crater_size_max: 0.25,
            band_stacks: 40,
            band_slices: 40,
            manual_lighting: true,
            ambient_floor: 0.2,
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            show_orbits: true,
            show_labels: true,
            orbit_scale: 100.0,
            star_count: 200,
            star_seed: 7,
            star_radius: 80.0,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            scroll_zoom_factor: 1.0,
            keybindings: HashMap::new(),
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_to_file: true,
        }
    }
}

fn read(config_path: &Path) -> Result<Config, ConfigError> {
    let contents =
        std::fs::read_to_string(config_path).map_err(|source| ConfigError::ReadError {
            path: config_path.to_path_buf(),
            source,
        })?;
    ron::from_str(&contents).map_err(|source| ConfigError::ParseError {
        path: config_path.to_path_buf(),
        source,
    })
}

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let config = read(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        let write_error = |source| ConfigError::WriteError {
            path: config_dir.join(CONFIG_FILE),
            source,
        };
        std::fs::create_dir_all(config_dir).map_err(write_error)?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);
        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(config_dir.join(CONFIG_FILE), serialized).map_err(write_error)?;
        Ok(())
    }
}
