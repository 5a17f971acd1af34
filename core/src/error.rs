//! Error types for MediPredict.
//!
//! One enum per concern:
//!
//! - [`UploadError`] - Rejected or missing report files
//! - [`ScheduleError`] - Invalid processing schedules
//! - [`ConfigError`] - Bad dev-server configuration
//! - [`ServerError`] - Top-level dev-server errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Upload Errors
// =============================================================================

/// Errors raised by the upload flow before the (simulated) transfer starts.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UploadError {
    /// The analyze action was triggered without a selected file.
    #[error("No file selected")]
    NoFileSelected,

    /// File extension is not one of the accepted report formats.
    #[error("Unsupported file format: .{extension}")]
    UnsupportedFormat { extension: String },

    /// File exceeds the upload size limit.
    #[error("File is {size} bytes, limit is {limit} bytes")]
    TooLarge { size: u64, limit: u64 },
}

// =============================================================================
// Schedule Errors
// =============================================================================

/// Errors when building a processing schedule.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// No stages were given.
    #[error("Processing schedule has no stages")]
    Empty,

    /// All stages have a zero duration, so progress cannot be interpolated.
    #[error("Processing schedule has zero total duration")]
    ZeroDuration,
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors while resolving the dev-server configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Port value from the environment is not a valid u16.
    #[error("Invalid port: {0}")]
    InvalidPort(String),

    /// The static asset directory does not exist.
    #[error("Frontend dist directory not found: {}", .0.display())]
    MissingDistDir(PathBuf),
}

// =============================================================================
// Server Errors (top-level)
// =============================================================================

/// Dev-server errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Configuration error.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Socket or filesystem error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for upload operations.
pub type UploadResult<T> = Result<T, UploadError>;

/// Result type for schedule construction.
pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Result type for configuration.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        let config_err = ConfigError::InvalidPort("abc".into());
        let server_err: ServerError = config_err.into();
        assert!(server_err.to_string().contains("abc"));

        let io_err = std::io::Error::new(std::io::ErrorKind::AddrInUse, "busy");
        let server_err: ServerError = io_err.into();
        assert!(server_err.to_string().contains("busy"));
    }

    #[test]
    fn test_upload_error_format() {
        let err = UploadError::UnsupportedFormat {
            extension: "exe".into(),
        };
        assert_eq!(err.to_string(), "Unsupported file format: .exe");

        let err = UploadError::TooLarge { size: 30, limit: 25 };
        let msg = err.to_string();
        assert!(msg.contains("30"));
        assert!(msg.contains("25"));
    }
}
