use serde::{Deserialize, Serialize};
use url::Url;

use super::ConfigError;

/// Service address used when nothing is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Top-level persisted settings.
///
/// Config sections: `[service]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub service: ServiceSettings,
}

impl AppSettings {
    /// Trim user-entered values so the rest of the app sees canonical data.
    pub fn normalized(mut self) -> Self {
        let trimmed = self.service.base_url.trim().trim_end_matches('/');
        self.service.base_url = if trimmed.is_empty() {
            DEFAULT_BASE_URL.to_string()
        } else {
            trimmed.to_string()
        };
        self
    }
}

/// Where the pipeline-execution service lives.
///
/// Config keys: `base_url`, `check_on_startup`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Probe the service health endpoint when the app starts.
    #[serde(default = "default_true")]
    pub check_on_startup: bool,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            check_on_startup: true,
        }
    }
}

impl ServiceSettings {
    /// Parse the base URL, guaranteeing a trailing `/` so endpoint joins append.
    pub fn parsed_base_url(&self) -> Result<Url, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason,
        };
        let mut url = Url::parse(self.base_url.trim()).map_err(|err| invalid(err.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {}", url.scheme())));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_true() -> bool {
    true
}
