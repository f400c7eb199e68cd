//! Logging setup for the orrery.
//!
//! Console output with uptime timestamps, plus a JSON log file in debug
//! builds. `RUST_LOG` always wins over the configured level.

use std::path::{Path, PathBuf};

use orrery_config::Config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither `RUST_LOG` nor the config sets a level.
pub const DEFAULT_FILTER: &str = "info,winit=warn";

/// Name of the JSON log written in debug builds.
pub const LOG_FILE_NAME: &str = "orrery.log";

/// Filter directives for `config`, falling back to [`DEFAULT_FILTER`].
pub fn filter_directives(config: Option<&Config>) -> String {
    match config {
        Some(config) if !config.debug.log_level.trim().is_empty() => {
            config.debug.log_level.trim().to_string()
        }
        _ => DEFAULT_FILTER.to_string(),
    }
}

/// Where the JSON log goes, if file logging applies at all.
pub fn log_file_path(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) -> Option<PathBuf> {
    let enabled = config.is_none_or(|c| c.debug.log_to_file);
    if !debug_build || !enabled {
        return None;
    }
    log_dir.map(|dir| dir.join(LOG_FILE_NAME))
}

/// Installs the global tracing subscriber.
///
/// * `log_dir` - directory for `orrery.log`
/// * `debug_build` - the file layer is only added in debug builds
/// * `config` - supplies `debug.log_level` and `debug.log_to_file`
///
/// ```no_run
/// use orrery_config::Config;
/// use orrery_log::init_logging;
///
/// let config = Config::default();
/// init_logging(Some(std::path::Path::new("./logs")), cfg!(debug_assertions), Some(&config));
/// ```
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| config_filter(config));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if let Some(path) = log_file_path(log_dir, debug_build, config)
        && let Some(dir) = path.parent()
        && std::fs::create_dir_all(dir).is_ok()
        && let Ok(log_file) = std::fs::File::create(&path)
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).init();
        return;
    }

    subscriber.init();
}

/// An `EnvFilter` built from [`DEFAULT_FILTER`].
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}

/// The filter for `config`. Directives that do not parse fall back to
/// [`default_env_filter`].
pub fn config_filter(config: Option<&Config>) -> EnvFilter {
    let directives = filter_directives(config);
    EnvFilter::try_new(&directives).unwrap_or_else(|e| {
        eprintln!("Invalid log level {directives:?} ({e}), using {DEFAULT_FILTER:?}");
        default_env_filter()
    })
}
