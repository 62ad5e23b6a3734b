use std::path::PathBuf;

use thiserror::Error;

/// Errors that may occur while loading or saving settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to create the config directory.
    #[error("Unable to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to read the settings file.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to write the settings file.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The settings file is not valid TOML for [`super::AppSettings`].
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// Settings could not be serialized.
    #[error("Failed to serialize config to TOML at {path}: {source}")]
    SerializeToml {
        path: PathBuf,
        source: toml::ser::Error,
    },
    /// The configured service URL is not an absolute http(s) URL.
    #[error("Invalid service URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    /// No usable config directory found.
    #[error("No suitable config directory found")]
    NoConfigDir,
}

impl From<crate::app_dirs::AppDirError> for ConfigError {
    fn from(error: crate::app_dirs::AppDirError) -> Self {
        match error {
            crate::app_dirs::AppDirError::NoBaseDir => Self::NoConfigDir,
            crate::app_dirs::AppDirError::CreateDir { path, source } => {
                Self::CreateDir { path, source }
            }
        }
    }
}
