use std::io::Write;
use std::path::{Path, PathBuf};

use crate::app_dirs;

use super::{API_URL_ENV, AppSettings, CONFIG_FILE_NAME, ConfigError};

const TEMP_NAME_ATTEMPTS: usize = 5;

/// Resolve the settings file path, ensuring the parent directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(app_dirs::app_root_dir()?.join(CONFIG_FILE_NAME))
}

/// Load settings from the app root, returning defaults if the file is missing.
///
/// `MLWIZARD_API_URL` wins over the file's `service.base_url`.
pub fn load_or_default() -> Result<AppSettings, ConfigError> {
    let mut settings = load_from_path(&config_path()?)?;
    if let Ok(url) = std::env::var(API_URL_ENV)
        && !url.trim().is_empty()
    {
        settings.service.base_url = url;
        settings = settings.normalized();
    }
    settings.service.parsed_base_url()?;
    Ok(settings)
}

/// Load settings from a specific file, returning defaults if it does not exist.
pub fn load_from_path(path: &Path) -> Result<AppSettings, ConfigError> {
    if !path.exists() {
        return Ok(AppSettings::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str::<AppSettings>(&text)
        .map(AppSettings::normalized)
        .map_err(|source| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source,
        })
}

/// Persist settings to the app root, overwriting any previous contents.
pub fn save(settings: &AppSettings) -> Result<(), ConfigError> {
    save_to_path(settings, &config_path()?)
}

/// Write the default settings file on first launch so it can be edited by hand.
pub fn ensure_config_file() -> Result<PathBuf, ConfigError> {
    let path = config_path()?;
    if !path.exists() {
        save(&AppSettings::default())?;
        tracing::info!("Wrote default settings to {}", path.display());
    }
    Ok(path)
}

/// Write settings to `path` atomically so a crash never leaves a partial file.
pub fn save_to_path(settings: &AppSettings, path: &Path) -> Result<(), ConfigError> {
    let dir = path.parent().ok_or_else(|| ConfigError::Write {
        path: path.to_path_buf(),
        source: std::io::Error::other("config path has no parent directory"),
    })?;
    std::fs::create_dir_all(dir).map_err(|source| ConfigError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    let data = toml::to_string_pretty(settings).map_err(|source| ConfigError::SerializeToml {
        path: path.to_path_buf(),
        source,
    })?;

    let tmp_path = create_temp_file(dir, path, data.as_bytes())?;
    std::fs::rename(&tmp_path, path).map_err(|source| {
        let _ = std::fs::remove_file(&tmp_path);
        ConfigError::Write {
            path: path.to_path_buf(),
            source,
        }
    })
}

fn create_temp_file(dir: &Path, target: &Path, data: &[u8]) -> Result<PathBuf, ConfigError> {
    use rand::TryRngCore;

    let file_name = target
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| CONFIG_FILE_NAME.to_string());
    let mut last_err = None;
    for _ in 0..TEMP_NAME_ATTEMPTS {
        let mut suffix = [0u8; 6];
        rand::rngs::OsRng
            .try_fill_bytes(&mut suffix)
            .map_err(|err| ConfigError::Write {
                path: target.to_path_buf(),
                source: std::io::Error::other(format!(
                    "failed to generate temporary file suffix: {err}"
                )),
            })?;
        let suffix: String = suffix.iter().map(|byte| format!("{byte:02x}")).collect();
        let tmp_path = dir.join(format!("{file_name}.tmp-{suffix}"));
        let mut file = match std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&tmp_path)
        {
            Ok(file) => file,
            Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => {
                last_err = Some(err);
                continue;
            }
            Err(source) => {
                return Err(ConfigError::Write {
                    path: tmp_path,
                    source,
                });
            }
        };
        if let Err(source) = file.write_all(data).and_then(|()| file.sync_all()) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(ConfigError::Write {
                path: tmp_path,
                source,
            });
        }
        return Ok(tmp_path);
    }
    Err(ConfigError::Write {
        path: target.to_path_buf(),
        source: last_err.unwrap_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::AlreadyExists, "no free temporary name")
        }),
    })
}
