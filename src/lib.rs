//! Library exports for the wizard binary and integration tests.
/// Application directory resolution.
pub mod app_dirs;
/// Shared egui UI modules.
pub mod egui_app;
pub(crate) mod http_client;
/// Tracing setup.
pub mod logging;
/// Wizard domain and the pipeline-service contract.
pub mod pipeline;
/// Persisted settings.
pub mod settings;
