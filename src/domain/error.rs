//! Error types for the zprofile plugin.
//!
//! This module defines the centralized error type [`ZprofileError`] and a type
//! alias [`Result`] for convenient error handling throughout the plugin. All
//! errors are implemented using the `thiserror` crate for automatic `Error`
//! trait implementation.

use thiserror::Error;

/// The main error type for zprofile plugin operations.
///
/// This enum consolidates all error conditions that can occur during plugin
/// execution, from profile storage operations to I/O failures and locale
/// loading issues. I/O errors convert automatically via `#[from]`.
#[derive(Debug, Error)]
pub enum ZprofileError {
    /// Profile storage operation failed.
    ///
    /// Occurs when reading from or writing to the personal-details store
    /// fails. The string contains a description of what went wrong.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Locale bundle loading or parsing failed.
    ///
    /// Occurs when a locale override file cannot be read or contains
    /// invalid TOML.
    #[error("Locale error: {0}")]
    Locale(String),

    /// Communication with the background worker failed.
    ///
    /// Occurs when the plugin cannot reach its worker thread, typically
    /// during store loads or pronoun updates.
    #[error("Worker communication error: {0}")]
    Worker(String),
}

/// A specialized `Result` type for zprofile operations.
///
/// Type alias for `std::result::Result<T, ZprofileError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, ZprofileError>;
