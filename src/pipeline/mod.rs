//! Wizard domain: the data each step produces, the stage machine that holds
//! it, and the contract with the remote pipeline-execution service.

pub mod catalog;
pub mod http;
pub mod model;
pub mod report;
pub mod requests;
pub mod service;
pub mod wizard;
mod wire;

pub use catalog::{MODEL_CATALOG, ModelInfo};
pub use http::HttpPipelineService;
pub use model::{
    ConfusionMatrix, DatasetSummary, ModelKind, PredictionLabel, PreprocessMethod,
    PreprocessOutcome, PreprocessResult, PreviewRow, SplitOutcome, SplitSummary, TestFraction,
    TrainingResult, UploadOutcome,
};
pub use report::{ClassMetrics, ClassificationReport};
pub use requests::{
    PreprocessRequest, SplitRequest, TrainRequest, UploadFormat, UploadRequest, ValidationError,
};
pub use service::{PipelineService, ServiceError, ServiceHealth};
pub use wizard::{PipelineState, StepOutput, WizardError, WizardStage, WizardStep};
