//! Error types and Result aliases for crtterm

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for crtterm operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for crtterm
#[derive(Debug, Error)]
pub enum Error {
    // === Configuration errors ===
    /// Failed to load configuration file
    #[error("Failed to load config from '{}': {reason}", .path.display())]
    ConfigLoadFailed { path: PathBuf, reason: String },

    /// Configuration validation failed
    #[error("Configuration validation failed for '{field}': {reason}")]
    ConfigValidationFailed { field: String, reason: String },

    // === Settings errors ===
    /// Settings file could not be read or written
    #[error("Settings store at '{}' failed: {reason}", .path.display())]
    SettingsFailed { path: PathBuf, reason: String },

    /// No platform directory available for settings
    #[error("Could not determine a data directory for settings")]
    NoDataDirectory,

    // === Theme errors ===
    /// Theme not found
    #[error("Theme '{theme_name}' not found")]
    ThemeNotFound { theme_name: String },

    // === Directory errors ===
    /// Granted directory is missing or not a directory
    #[error("'{}' is not a directory", .path.display())]
    NotADirectory { path: PathBuf },

    // === Serialization errors ===
    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
