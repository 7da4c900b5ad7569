//! Error types for the launch explorer.
//!
//! This module defines the centralized error type [`ExplorerError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for launch explorer operations.
///
/// Most failure paths in the core degrade to an empty or partial result rather
/// than surfacing one of these; the variants cover the places where a caller
/// genuinely needs to know something went wrong (persisting favorites, talking
/// to the launch API, loading configuration).
///
/// # Examples
///
/// ```
/// use spacex_explorer::ExplorerError;
///
/// fn read_favorites() -> Result<(), ExplorerError> {
///     Err(ExplorerError::Storage("Failed to read file".to_string()))
/// }
/// assert!(read_favorites().is_err());
/// ```
#[derive(Debug, Error)]
pub enum ExplorerError {
    /// Storage operation failed.
    ///
    /// Occurs when reading from or writing to the key-value backend fails.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The launch data source could not deliver a response.
    ///
    /// Covers transport failures, non-success HTTP statuses and undecodable
    /// bodies. Callers treat this as "no data available" and do not retry.
    #[error("Data source error: {0}")]
    Source(String),

    /// A value could not be parsed into the expected shape.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background fetch worker failed.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for launch explorer operations.
pub type Result<T> = std::result::Result<T, ExplorerError>;
