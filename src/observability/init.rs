//! Subscriber setup.

use super::file_writer::FileWriter;
use crate::Config;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log file name inside the data directory.
pub const LOG_FILE_NAME: &str = "spacex-explorer.log";

/// Installs the global tracing subscriber.
///
/// Events are written as JSON lines to `<data_dir>/spacex-explorer.log`,
/// rotated at 10 MB with three backups kept. The filter is taken from
/// `RUST_LOG` when set, otherwise from `config.trace_level`, otherwise `info`.
///
/// Logging is optional: if the data directory cannot be created, or a
/// subscriber is already installed, this silently does nothing. Returns the
/// log file path when a subscriber was installed.
///
/// # Examples
///
/// ```no_run
/// use spacex_explorer::observability::init_tracing;
/// use spacex_explorer::Config;
///
/// let config = Config { trace_level: Some("debug".to_string()), ..Config::default() };
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) -> Option<PathBuf> {
    let data_dir = config.data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return None;
    }

    let log_file = data_dir.join(LOG_FILE_NAME);
    let writer = FileWriter::new(log_file.clone());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_ansi(false)
        .with_target(true)
        .with_writer(move || writer.clone());

    tracing_subscriber::registry()
        .with(filter_for(config))
        .with(fmt_layer)
        .try_init()
        .ok()
        .map(|()| log_file)
}

fn filter_for(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = config.trace_level.as_deref().unwrap_or("info");
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
    })
}
