use std::{
    ffi::OsString,
    path::PathBuf,
    sync::{Mutex, OnceLock},
};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

const CONFIG_HOME_ENV: &str = "MLWIZARD_CONFIG_HOME";
const API_URL_ENV: &str = "MLWIZARD_API_URL";

/// Serializes env mutation and restores the previous values on drop.
pub struct MlwizardEnvGuard {
    previous: Vec<(&'static str, Option<OsString>)>,
    _lock: std::sync::MutexGuard<'static, ()>,
}

impl MlwizardEnvGuard {
    pub fn set_config_home(path: PathBuf) -> Self {
        let mut guard = Self::locked();
        guard.set(CONFIG_HOME_ENV, Some(path.into_os_string()));
        guard.set(API_URL_ENV, None);
        guard
    }

    pub fn with_api_url(mut self, url: &str) -> Self {
        self.set(API_URL_ENV, Some(url.into()));
        self
    }

    fn locked() -> Self {
        let lock = ENV_LOCK
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|err| err.into_inner());
        Self {
            previous: Vec::new(),
            _lock: lock,
        }
    }

    fn set(&mut self, key: &'static str, value: Option<OsString>) {
        if !self.previous.iter().any(|(name, _)| *name == key) {
            self.previous.push((key, std::env::var_os(key)));
        }
        // SAFETY: tests run under a global lock to prevent concurrent env mutations.
        unsafe {
            match value {
                Some(value) => std::env::set_var(key, value),
                None => std::env::remove_var(key),
            }
        }
    }
}

impl Drop for MlwizardEnvGuard {
    fn drop(&mut self) {
        for (key, value) in self.previous.drain(..) {
            // SAFETY: tests run under a global lock to prevent concurrent env mutations.
            unsafe {
                match value {
                    Some(value) => std::env::set_var(key, value),
                    None => std::env::remove_var(key),
                }
            }
        }
    }
}
