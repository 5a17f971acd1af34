//! Application configuration.
//!
//! Timing and upload limits are compile-time constants shared by the
//! browser app and the native tools. The dev server additionally reads
//! `MEDIPREDICT_PORT` and `MEDIPREDICT_DIST_DIR` from the environment
//! (a `.env` file is loaded first by the binary).

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{ConfigError, ConfigResult};

/// Application name shown in the header and the CLI.
pub const APP_NAME: &str = "MediPredict";

/// Interval between two progress recomputations of the sequencer.
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Pause between the last completed stage and the hand-off to results.
pub const SETTLE_DELAY: Duration = Duration::from_millis(500);

/// Artificial "upload" delay before the processing view opens.
pub const UPLOAD_DELAY: Duration = Duration::from_millis(1500);

/// Artificial delay of the login/signup forms.
pub const AUTH_DELAY: Duration = Duration::from_millis(1000);

/// Maximum report size (in bytes).
///
/// 25 MB limit.
pub const MAX_UPLOAD_BYTES: u64 = 25 * 1024 * 1024;

/// Accepted report extensions, lowercase and without the dot.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["pdf", "jpg", "jpeg", "png", "dicom"];

/// Default dev-server port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default location of the built frontend (trunk output).
pub const DEFAULT_DIST_DIR: &str = "frontend/dist";

/// Value for the `accept` attribute of the file input.
pub fn accept_attribute() -> String {
    ACCEPTED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{}", ext))
        .collect::<Vec<_>>()
        .join(",")
}

/// Resolved dev-server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServeConfig {
    pub port: u16,
    pub dist_dir: PathBuf,
}

impl ServeConfig {
    /// Read settings from the process environment, falling back to defaults.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_vars(
            std::env::var("MEDIPREDICT_PORT").ok().as_deref(),
            std::env::var("MEDIPREDICT_DIST_DIR").ok().as_deref(),
        )
    }

    /// Build settings from raw variable values.
    pub fn from_vars(port: Option<&str>, dist_dir: Option<&str>) -> ConfigResult<Self> {
        let port = match port {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.to_string()))?,
            None => DEFAULT_PORT,
        };
        let dist_dir = PathBuf::from(dist_dir.unwrap_or(DEFAULT_DIST_DIR));
        Ok(Self { port, dist_dir })
    }

    /// Apply CLI overrides.
    pub fn with_overrides(mut self, port: Option<u16>, dist_dir: Option<PathBuf>) -> Self {
        if let Some(port) = port {
            self.port = port;
        }
        if let Some(dir) = dist_dir {
            self.dist_dir = dir;
        }
        self
    }

    /// Fail early when the asset directory is missing.
    pub fn validate(&self) -> ConfigResult<()> {
        if is_dir(&self.dist_dir) {
            Ok(())
        } else {
            Err(ConfigError::MissingDistDir(self.dist_dir.clone()))
        }
    }

    /// Path of the SPA entry document.
    pub fn index_file(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }
}

fn is_dir(path: &Path) -> bool {
    path.metadata().map(|m| m.is_dir()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServeConfig::from_vars(None, None).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.dist_dir, PathBuf::from(DEFAULT_DIST_DIR));
    }

    #[test]
    fn test_invalid_port() {
        let err = ServeConfig::from_vars(Some("eighty"), None).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(ref p) if p == "eighty"));
    }

    #[test]
    fn test_overrides_win() {
        let config = ServeConfig::from_vars(Some("3000"), Some("a"))
            .unwrap()
            .with_overrides(Some(4000), Some(PathBuf::from("b")));
        assert_eq!(config.port, 4000);
        assert_eq!(config.dist_dir, PathBuf::from("b"));
    }

    #[test]
    fn test_validate_dist_dir() {
        let dir = tempfile::tempdir().unwrap();
        let ok = ServeConfig::from_vars(None, dir.path().to_str()).unwrap();
        assert!(ok.validate().is_ok());
        assert_eq!(ok.index_file(), dir.path().join("index.html"));

        let missing = ServeConfig::from_vars(None, Some("/definitely/not/here")).unwrap();
        assert!(matches!(
            missing.validate(),
            Err(ConfigError::MissingDistDir(_))
        ));
    }

    #[test]
    fn test_accept_attribute() {
        assert_eq!(accept_attribute(), ".pdf,.jpg,.jpeg,.png,.dicom");
    }
}
