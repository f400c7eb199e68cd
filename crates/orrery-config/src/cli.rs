//! Command-line arguments for the `orrery` driver.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Orrery command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "orrery", about = "Animated solar-system orrery")]
pub struct CliArgs {
    /// Viewport width.
    #[arg(long)]
    pub width: Option<u32>,

    /// Viewport height.
    #[arg(long)]
    pub height: Option<u32>,

    /// Number of frames to simulate before exiting (headless runs only).
    #[arg(long)]
    pub frames: Option<u64>,

    /// Open a window and feed its events to the simulation instead of
    /// running headless.
    #[arg(long)]
    pub windowed: bool,

    /// Initial animation speed multiplier.
    #[arg(long)]
    pub speed: Option<f32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Hide orbit guides.
    #[arg(long)]
    pub no_orbits: bool,

    /// Hide planet labels.
    #[arg(long)]
    pub no_labels: bool,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.window.width = w;
        }
        if let Some(h) = args.height {
            self.window.height = h;
        }
        if let Some(speed) = args.speed {
            self.clock.default_speed = speed;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
        if args.no_orbits {
            self.scene.show_orbits = false;
        }
        if args.no_labels {
            self.scene.show_labels = false;
        }
    }
}
