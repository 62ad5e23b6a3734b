use mlwizard::pipeline::{
    DatasetSummary, PipelineService, PreprocessRequest, PreprocessResult,
    ServiceError, ServiceHealth, SplitRequest, SplitSummary, TrainRequest, TrainingResult,
    UploadOutcome, UploadRequest,
};
use serde_json::json;
use std::sync::Mutex;

/// In-memory service returning canned responses and recording every request.
pub struct ScriptedService {
    pub upload: Mutex<Result<UploadOutcome, String>>,
    pub training: Mutex<Result<TrainingResult, String>>,
    pub requests: Mutex<Vec<String>>,
}

impl Default for ScriptedService {
    fn default() -> Self {
        Self {
            upload: Mutex::new(Ok(iris_upload())),
            training: Mutex::new(Ok(training_result(0.95))),
            requests: Mutex::new(Vec::new()),
        }
    }
}

impl ScriptedService {
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn log(&self, entry: String) {
        self.requests.lock().unwrap().push(entry);
    }
}

/// Upload response for a 100 row, 3 column dataset.
pub fn iris_upload() -> UploadOutcome {
    let dataset: DatasetSummary = serde_json::from_value(json!({
        "rows": 100,
        "columns": 3,
        "column_names": ["a", "b", "c"],
        "preview": [
            {"a": 5.1, "b": 3.5, "c": 0},
            {"a": 4.9, "b": 3.0, "c": 1}
        ],
        "dtypes": {"a": "float64", "b": "float64", "c": "int64"}
    }))
    .unwrap();
    UploadOutcome {
        filepath: "uploads/iris.csv".into(),
        dataset,
    }
}

pub fn training_result(accuracy: f64) -> TrainingResult {
    serde_json::from_value(json!({
        "model_name": "logistic_regression",
        "accuracy": accuracy,
        "classification_report": {
            "0": {"precision": 0.9, "recall": 1.0, "f1-score": 0.947, "support": 9},
            "1": {"precision": 1.0, "recall": 0.9, "f1-score": 0.947, "support": 11},
            "accuracy": accuracy,
            "macro avg": {"precision": 0.95, "recall": 0.95, "f1-score": 0.947, "support": 20},
            "weighted avg": {"precision": 0.95, "recall": 0.95, "f1-score": 0.947, "support": 20}
        },
        "feature_importance": {"a": 0.7, "b": 0.3},
        "predictions_sample": [0, 1, 1, 0]
    }))
    .unwrap()
}

impl PipelineService for ScriptedService {
    fn health(&self) -> Result<ServiceHealth, ServiceError> {
        self.log("health".into());
        Ok(ServiceHealth {
            status: "ok".into(),
            message: Some("Backend is running".into()),
        })
    }

    fn upload(&self, request: &UploadRequest) -> Result<UploadOutcome, ServiceError> {
        self.log(format!("upload {}", request.file_name()));
        self.upload
            .lock()
            .unwrap()
            .clone()
            .map_err(ServiceError::Rejected)
    }

    fn preprocess(&self, request: &PreprocessRequest) -> Result<PreprocessResult, ServiceError> {
        self.log(format!(
            "preprocess {} {} [{}]",
            request.filepath,
            request.method.as_str(),
            request.columns.join(",")
        ));
        Ok(PreprocessResult {
            method: request.method,
            columns: request.columns.clone(),
            processed_path: Some("uploads/processed_iris.csv".into()),
            preview_rows: Vec::new(),
            payload: json!({"success": true}),
        })
    }

    fn split(&self, request: &SplitRequest) -> Result<SplitSummary, ServiceError> {
        self.log(format!(
            "split {} {} {}",
            request.filepath, request.test_size, request.target_column
        ));
        Ok(SplitSummary {
            train_size: 80,
            test_size: 20,
            train_path: "uploads/train_split.csv".into(),
            test_path: "uploads/test_split.csv".into(),
        })
    }

    fn train(&self, request: &TrainRequest) -> Result<TrainingResult, ServiceError> {
        self.log(format!(
            "train {} {}",
            request.model_name.as_str(),
            request.target_column
        ));
        self.training
            .lock()
            .unwrap()
            .clone()
            .map_err(ServiceError::Rejected)
    }
}
