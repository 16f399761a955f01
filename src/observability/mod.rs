//! Structured logging with file-based JSON output.
//!
//! This module provides the observability infrastructure for the application:
//! `tracing` events and spans are serialized as JSON lines and written to a
//! rotating log file for offline analysis and debugging. Nothing is ever
//! printed to the terminal, which the UI owns exclusively.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → EnvFilter → fmt JSON layer → LogWriter → log file
//! ```
//!
//! # Features
//!
//! - **File-Based Output**: Logs written to `~/.local/share/daybook/daybook.log`
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//! - **JSON Lines Format**: One structured event per line
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - [`log_writer`]: Rotating file writer with size-based rotation

mod init;
mod log_writer;

pub use init::init_tracing;
pub use log_writer::LogWriter;
