//! Persisted application settings (`config.toml` in the app root).

mod errors;
mod io;
mod types;

pub use errors::ConfigError;
pub use io::{config_path, ensure_config_file, load_from_path, load_or_default, save, save_to_path};
pub use types::{AppSettings, DEFAULT_BASE_URL, ServiceSettings};

/// Default filename used to store the settings.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Environment variable that overrides `service.base_url` at load time.
pub const API_URL_ENV: &str = "MLWIZARD_API_URL";
