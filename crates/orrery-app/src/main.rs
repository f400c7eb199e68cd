//! Orrery driver.
//!
//! Loads `config.ron` and applies CLI overrides. By default it runs the
//! simulation headless for a fixed number of frames against the recording
//! backend. With `--windowed` it opens a winit window and feeds the same
//! [`SimulationContext`] from real window events until the window closes.
//!
//! Run with: `cargo run -p orrery-app -- --frames 300`

use std::collections::BTreeMap;
use std::time::Duration;

use clap::Parser;
use orrery_app::{FrameTimer, HostEvent, SimulationContext, window};
use orrery_config::{CliArgs, Config, default_config_dir};
use orrery_render::RecordingBackend;
use tracing::{error, info};

const DEFAULT_FRAMES: u64 = 600;

fn main() {
    let args = CliArgs::parse();
    let config_dir = args.config.clone().unwrap_or_else(default_config_dir);

    let (mut config, load_error) = match Config::load_or_create(&config_dir) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    config.apply_cli_overrides(&args);

    orrery_log::init_logging(
        Some(&config_dir.join("logs")),
        cfg!(debug_assertions),
        Some(&config),
    );
    if let Some(e) = load_error {
        error!("{e}; continuing with default configuration");
    }

    info!(
        "Viewport: {}x{} | Config: {}",
        config.window.width,
        config.window.height,
        config_dir.display()
    );

    if args.windowed {
        info!(title = %config.window.title, "Starting windowed run");
        match window::run(&config) {
            Ok(host) => log_summary(host.context(), host.timer(), host.backend()),
            Err(e) => error!("Event loop failed: {e}"),
        }
        return;
    }

    let mut ctx = SimulationContext::new(&config);
    let interval = Duration::from_millis(config.clock.tick_interval_ms);
    let mut timer = FrameTimer::new(interval);
    let frame_time = timer.interval().as_secs_f64();
    let frames = args.frames.unwrap_or(DEFAULT_FRAMES);

    info!(
        planets = ctx.scene().system().planets.len(),
        frames,
        speed = ctx.clock().speed(),
        "Starting headless run"
    );

    let mut backend = RecordingBackend::new();
    for _ in 0..frames {
        timer.advance(frame_time, || ctx.handle_event(HostEvent::Timer));
        backend.clear();
        ctx.render(&mut backend);
        if ctx.quit_requested() {
            break;
        }
    }

    log_summary(&ctx, &timer, &backend);
}

/// Logs clock state plus the primitive counts of the last frame.
fn log_summary(ctx: &SimulationContext, timer: &FrameTimer, backend: &RecordingBackend) {
    let mut by_kind: BTreeMap<&'static str, usize> = BTreeMap::new();
    for draw in backend.draws() {
        *by_kind.entry(draw.primitive.kind()).or_default() += 1;
    }
    info!(
        frames = ctx.frames_rendered(),
        ticks = timer.tick_count(),
        elapsed = ctx.clock().elapsed(),
        paused = ctx.clock().is_paused(),
        max_depth = backend.max_depth(),
        balanced = backend.is_balanced(),
        "Run complete"
    );
    for (kind, count) in by_kind {
        info!("  {kind}: {count}");
    }
}
