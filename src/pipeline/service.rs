//! Contract with the external pipeline-execution service.

use std::path::PathBuf;

use serde::Deserialize;

use super::model::{PreprocessResult, SplitSummary, TrainingResult, UploadOutcome};
use super::requests::{PreprocessRequest, SplitRequest, TrainRequest, UploadRequest};

/// Failure of one service call. Every variant leaves the wizard where it was.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The service answered with `success: false` or an error status.
    #[error("{0}")]
    Rejected(String),
    /// The request never produced a response.
    #[error("{0}")]
    Transport(String),
    /// The response did not match the contract.
    #[error("Unexpected response from service: {0}")]
    InvalidResponse(String),
    /// The file chosen for upload could not be read.
    #[error("Failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Body of the service root endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceHealth {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl ServiceHealth {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

/// Operations the wizard needs from the service, one per step.
///
/// Implementations are called from worker threads.
pub trait PipelineService: Send + Sync {
    fn health(&self) -> Result<ServiceHealth, ServiceError>;

    fn upload(&self, request: &UploadRequest) -> Result<UploadOutcome, ServiceError>;

    fn preprocess(&self, request: &PreprocessRequest) -> Result<PreprocessResult, ServiceError>;

    fn split(&self, request: &SplitRequest) -> Result<SplitSummary, ServiceError>;

    fn train(&self, request: &TrainRequest) -> Result<TrainingResult, ServiceError>;
}
