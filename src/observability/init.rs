//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber with a JSON fmt layer
//! writing to a rotating log file, setting up the complete pipeline from
//! `tracing` macros to disk.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::log_writer::LogWriter;
use crate::Config;

/// Initializes the tracing subscriber with file-based JSON output.
///
/// Sets up a subscriber pipeline that:
/// 1. Filters events based on the configured trace level
/// 2. Serializes events and spans as JSON lines
/// 3. Writes to a rotating file with backup retention
///
/// # Trace Level Resolution
///
/// 1. `RUST_LOG` environment variable (highest priority)
/// 2. `config.trace_level` if set
/// 3. Default: `"info"`
///
/// # File Location
///
/// Logs are written to `daybook.log` in the application data directory
/// (typically `~/.local/share/daybook/`).
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently does nothing if directory creation fails (observability is
///   optional; the UI must come up regardless)
/// - Idempotent: safe to call multiple times (only the first call takes
///   effect)
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = crate::infrastructure::paths::data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let log_file = data_dir.join("daybook.log");
    let writer = LogWriter::new(log_file);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_ansi(false)
        .with_writer(writer);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry().with(filter).with(fmt_layer);

    let _ = subscriber.try_init();
}
