//! Configuration for the orrery.
//!
//! Settings persist to disk as `config.ron`. Every section falls back to its
//! defaults when missing, unknown fields are ignored, and CLI flags override
//! whatever was loaded.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CameraConfig, ClockConfig, Config, DebugConfig, HudConfig, InputConfig, SceneConfig,
    SurfaceConfig, WindowConfig, default_config_dir,
};
pub use error::ConfigError;
