//! Error types for the Daybook application.
//!
//! This module defines the centralized error type [`DaybookError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for Daybook operations.
///
/// This enum consolidates all error conditions that can occur during application
/// execution, from terminal I/O to configuration and theme loading. Most variants
/// wrap underlying errors from external crates using `#[from]` for automatic
/// conversion.
#[derive(Debug, Error)]
pub enum DaybookError {
    /// Terminal or filesystem I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is invalid or malformed.
    ///
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme parsing or loading failed.
    ///
    /// Occurs when a theme file cannot be read or its TOML content cannot
    /// be parsed. The string contains a description of what went wrong.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the session provider failed.
    ///
    /// Occurs when the auth subscription channel is unusable or a login
    /// request cannot be delivered.
    #[error("Session error: {0}")]
    Session(String),

    /// A journal entry violated a model invariant.
    ///
    /// Occurs when an entry is assembled or merged from a draft that does
    /// not satisfy the data model (for example, empty content).
    #[error("Entry error: {0}")]
    Entry(String),
}

/// A specialized `Result` type for Daybook operations.
///
/// This is a type alias for `std::result::Result<T, DaybookError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, DaybookError>;
