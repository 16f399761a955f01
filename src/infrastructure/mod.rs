//! Infrastructure layer for filesystem and environment interactions.
//!
//! This module provides utilities for locating the application's
//! configuration and data directories following the XDG Base Directory
//! convention.

pub mod paths;

pub use paths::{config_dir, data_dir};
