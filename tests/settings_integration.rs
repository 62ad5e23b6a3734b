mod support;

use mlwizard::settings::{self, AppSettings};
use support::mlwizard_env::MlwizardEnvGuard;

#[test]
fn ensure_config_file_writes_defaults_under_config_home() {
    let dir = tempfile::tempdir().unwrap();
    let _env = MlwizardEnvGuard::set_config_home(dir.path().to_path_buf());

    let path = settings::ensure_config_file().unwrap();
    assert!(path.starts_with(dir.path()));
    assert!(path.is_file());
    assert_eq!(settings::load_or_default().unwrap(), AppSettings::default());
}

#[test]
fn saved_service_url_is_loaded_back() {
    let dir = tempfile::tempdir().unwrap();
    let _env = MlwizardEnvGuard::set_config_home(dir.path().to_path_buf());

    let mut saved = AppSettings::default();
    saved.service.base_url = "http://ml.internal:9000/".into();
    saved.service.check_on_startup = false;
    settings::save(&saved).unwrap();

    let loaded = settings::load_or_default().unwrap();
    assert_eq!(loaded.service.base_url, "http://ml.internal:9000");
    assert!(!loaded.service.check_on_startup);
}

#[test]
fn api_url_env_overrides_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let _env = MlwizardEnvGuard::set_config_home(dir.path().to_path_buf())
        .with_api_url("https://pipeline.example.com/api/");
    settings::ensure_config_file().unwrap();

    let loaded = settings::load_or_default().unwrap();
    assert_eq!(loaded.service.base_url, "https://pipeline.example.com/api");
    assert_eq!(
        loaded.service.parsed_base_url().unwrap().as_str(),
        "https://pipeline.example.com/api/"
    );
}
