//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Greeting** - Time-of-day salutation on the dashboard
//! - **Error Types** - Frontend error handling

use medipredict::UploadError;
use std::fmt;

// =============================================================================
// Greeting
// =============================================================================

/// Salutation for the dashboard header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Greeting {
    Morning,
    Afternoon,
    Evening,
}

impl Greeting {
    /// Pick a greeting for a local hour (0-23).
    pub fn for_hour(hour: u32) -> Self {
        match hour {
            5..=11 => Greeting::Morning,
            12..=17 => Greeting::Afternoon,
            _ => Greeting::Evening,
        }
    }

    /// Greeting for the browser's local time.
    pub fn now() -> Self {
        use chrono::Timelike;
        Self::for_hour(chrono::Local::now().hour())
    }

    pub fn text(&self) -> &'static str {
        match self {
            Greeting::Morning => "Good morning",
            Greeting::Afternoon => "Good afternoon",
            Greeting::Evening => "Good evening",
        }
    }
}

/// "Sarah Johnson" -> "Sarah"
pub fn first_name(full_name: &str) -> &str {
    full_name.split_whitespace().next().unwrap_or(full_name)
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for messages shown in the UI.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// File selection or upload rejected.
    Upload(UploadError),
    /// Browser API unavailable or failed.
    Browser(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Upload(err) => match err {
                UploadError::NoFileSelected => write!(f, "Please choose a report first."),
                UploadError::UnsupportedFormat { extension } if extension.is_empty() => {
                    write!(f, "This file has no extension. Use PDF, JPG, PNG or DICOM.")
                }
                UploadError::UnsupportedFormat { extension } => {
                    write!(f, ".{} files are not supported. Use PDF, JPG, PNG or DICOM.", extension)
                }
                UploadError::TooLarge { .. } => {
                    write!(f, "This file is larger than 25MB.")
                }
            },
            AppError::Browser(msg) => write!(f, "Browser error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<UploadError> for AppError {
    fn from(err: UploadError) -> Self {
        AppError::Upload(err)
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_for_hour() {
        assert_eq!(Greeting::for_hour(8), Greeting::Morning);
        assert_eq!(Greeting::for_hour(12), Greeting::Afternoon);
        assert_eq!(Greeting::for_hour(23), Greeting::Evening);
        assert_eq!(Greeting::for_hour(3), Greeting::Evening);
        assert_eq!(Greeting::Morning.text(), "Good morning");
    }

    #[test]
    fn test_first_name() {
        assert_eq!(first_name("Sarah Johnson"), "Sarah");
        assert_eq!(first_name(""), "");
    }

    #[test]
    fn test_upload_error_messages() {
        let err: AppError = UploadError::UnsupportedFormat {
            extension: "txt".into(),
        }
        .into();
        assert!(err.to_string().starts_with(".txt files"));

        let err = AppError::from(UploadError::TooLarge { size: 1, limit: 0 });
        assert!(err.to_string().contains("25MB"));
    }
}
