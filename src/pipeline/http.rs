//! [`PipelineService`] over JSON/HTTP using the shared `ureq` agent.

use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::http_client::{self, MultipartBody};
use crate::settings::{ConfigError, ServiceSettings};

use super::model::{PreprocessResult, PreviewRow, SplitSummary, TrainingResult, UploadOutcome};
use super::requests::{PreprocessRequest, SplitRequest, TrainRequest, UploadRequest};
use super::service::{PipelineService, ServiceError, ServiceHealth};
use super::wire;

const MAX_HEALTH_RESPONSE_BYTES: usize = 64 * 1024;
const MAX_RESPONSE_BYTES: usize = 16 * 1024 * 1024;

/// Client for a pipeline service rooted at one base URL.
#[derive(Debug, Clone)]
pub struct HttpPipelineService {
    base_url: Url,
}

impl HttpPipelineService {
    pub fn new(settings: &ServiceSettings) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: settings.parsed_base_url()?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, name: &str) -> Result<Url, ServiceError> {
        self.base_url
            .join(name)
            .map_err(|err| ServiceError::Transport(format!("Invalid endpoint {name}: {err}")))
    }

    fn post_json<T: Serialize>(&self, name: &str, body: &T) -> Result<Value, ServiceError> {
        let url = self.endpoint(name)?;
        tracing::info!("POST {url}");
        let result = http_client::agent()
            .post(url.as_str())
            .set("Accept", "application/json")
            .send_json(body);
        finish(name, result)
    }
}

fn finish(
    name: &str,
    result: Result<ureq::Response, ureq::Error>,
) -> Result<Value, ServiceError> {
    let outcome = match result {
        Ok(response) => read_body(response, MAX_RESPONSE_BYTES).and_then(|body| wire::parse_success(&body)),
        Err(ureq::Error::Status(code, response)) => {
            let body = http_client::read_response_text(response, MAX_RESPONSE_BYTES)
                .unwrap_or_else(|err| err.to_string());
            Err(wire::status_error(code, &body))
        }
        Err(ureq::Error::Transport(err)) => Err(ServiceError::Transport(err.to_string())),
    };
    if let Err(err) = &outcome {
        tracing::warn!("{name} request failed: {err}");
    }
    outcome
}

fn read_body(response: ureq::Response, max_bytes: usize) -> Result<String, ServiceError> {
    http_client::read_response_text(response, max_bytes)
        .map_err(|err| ServiceError::InvalidResponse(err.to_string()))
}

impl PipelineService for HttpPipelineService {
    fn health(&self) -> Result<ServiceHealth, ServiceError> {
        let url = self.base_url.clone();
        let response = match http_client::agent().get(url.as_str()).call() {
            Ok(response) => response,
            Err(ureq::Error::Status(code, _)) => {
                return Err(ServiceError::Rejected(format!("HTTP {code}")));
            }
            Err(ureq::Error::Transport(err)) => return Err(ServiceError::Transport(err.to_string())),
        };
        let body = read_body(response, MAX_HEALTH_RESPONSE_BYTES)?;
        serde_json::from_str(body.trim())
            .map_err(|err| ServiceError::InvalidResponse(err.to_string()))
    }

    fn upload(&self, request: &UploadRequest) -> Result<UploadOutcome, ServiceError> {
        let contents = std::fs::read(&request.path).map_err(|source| ServiceError::ReadFile {
            path: request.path.clone(),
            source,
        })?;
        let body = MultipartBody::new().file(
            "file",
            &request.file_name(),
            request.format.mime_type(),
            &contents,
        );
        let url = self.endpoint("upload")?;
        tracing::info!("POST {url} ({} bytes from {})", contents.len(), request.path.display());
        let result = http_client::agent()
            .post(url.as_str())
            .set("Accept", "application/json")
            .set("Content-Type", &body.content_type())
            .send_bytes(&body.finish());
        let envelope = finish("upload", result)?;
        Ok(UploadOutcome {
            filepath: wire::field(&envelope, "filepath")?,
            dataset: wire::field(&envelope, "data")?,
        })
    }

    fn preprocess(&self, request: &PreprocessRequest) -> Result<PreprocessResult, ServiceError> {
        let envelope = self.post_json("preprocess", request)?;
        Ok(PreprocessResult {
            method: request.method,
            columns: request.columns.clone(),
            processed_path: wire::optional_field(&envelope, "processed_path")?,
            preview_rows: wire::optional_field::<Vec<PreviewRow>>(&envelope, "preview")?
                .unwrap_or_default(),
            payload: envelope,
        })
    }

    fn split(&self, request: &SplitRequest) -> Result<SplitSummary, ServiceError> {
        let envelope = self.post_json("split", request)?;
        wire::field(&envelope, "split")
    }

    fn train(&self, request: &TrainRequest) -> Result<TrainingResult, ServiceError> {
        let envelope = self.post_json("train", request)?;
        wire::field(&envelope, "results")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_client::test_server::{json_response, serve_once};
    use crate::pipeline::model::{ModelKind, PreprocessMethod, SplitOutcome, TestFraction};
    use crate::pipeline::requests::UploadRequest;
    use std::time::Duration;

    fn service_at(url: &str) -> HttpPipelineService {
        HttpPipelineService::new(&ServiceSettings {
            base_url: url.to_string(),
            check_on_startup: false,
        })
        .unwrap()
    }

    fn request_text(rx: std::sync::mpsc::Receiver<Vec<u8>>) -> String {
        String::from_utf8_lossy(&rx.recv_timeout(Duration::from_secs(5)).unwrap()).into_owned()
    }

    #[test]
    fn upload_posts_multipart_and_decodes_summary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("iris.csv");
        std::fs::write(&path, "a,b,c\n1,2,3\n").unwrap();
        let (url, rx) = serve_once(json_response(
            "200 OK",
            r#"{"success": true, "filepath": "/tmp/uploads/iris.csv", "data": {"rows": 100, "columns": 3, "column_names": ["a", "b", "c"], "preview": [{"a": 1, "b": 2, "c": 3}], "dtypes": {"a": "int64"}}}"#,
        ));
        let outcome = service_at(&url)
            .upload(&UploadRequest::for_path(&path).unwrap())
            .unwrap();
        assert_eq!(outcome.filepath, "/tmp/uploads/iris.csv");
        assert_eq!(outcome.dataset.column_names, vec!["a", "b", "c"]);
        assert_eq!(outcome.dataset.row_count, 100);

        let request = request_text(rx);
        assert!(request.starts_with("POST /upload "));
        assert!(request.contains("multipart/form-data; boundary="));
        assert!(request.contains("name=\"file\"; filename=\"iris.csv\""));
        assert!(request.contains("Content-Type: text/csv"));
        assert!(request.contains("a,b,c\n1,2,3\n"));
    }

    #[test]
    fn upload_error_status_surfaces_server_message() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        std::fs::write(&path, "x").unwrap();
        let (url, _rx) = serve_once(json_response(
            "400 BAD REQUEST",
            r#"{"error": "Invalid file type"}"#,
        ));
        let err = service_at(&url)
            .upload(&UploadRequest::for_path(&path).unwrap())
            .unwrap_err();
        assert!(matches!(err, ServiceError::Rejected(_)));
        assert_eq!(err.to_string(), "Invalid file type");
    }

    #[test]
    fn upload_of_missing_file_sends_nothing() {
        let service = service_at("http://127.0.0.1:9");
        let err = service
            .upload(&UploadRequest::for_path("/definitely/not/here.csv").unwrap())
            .unwrap_err();
        assert!(matches!(err, ServiceError::ReadFile { .. }));
    }

    #[test]
    fn preprocess_passes_payload_through() {
        let body = r#"{"success": true, "processed_path": "/tmp/uploads/iris_processed.csv", "preview": [{"a": -1.2}]}"#;
        let (url, rx) = serve_once(json_response("200 OK", body));
        let request = PreprocessRequest::build(
            "/tmp/uploads/iris.csv",
            Some(PreprocessMethod::Standardization),
            &["a".to_string()],
        )
        .unwrap();
        let result = service_at(&url).preprocess(&request).unwrap();
        assert_eq!(
            result.processed_path.as_deref(),
            Some("/tmp/uploads/iris_processed.csv")
        );
        assert_eq!(result.preview_rows.len(), 1);
        assert_eq!(result.payload, serde_json::from_str::<Value>(body).unwrap());

        let request = request_text(rx);
        assert!(request.starts_with("POST /preprocess "));
        assert!(request.contains(r#""method":"standardization""#));
        assert!(request.contains(r#""columns":["a"]"#));
    }

    #[test]
    fn split_failure_envelope_is_rejected() {
        let (url, _rx) = serve_once(json_response(
            "500 INTERNAL SERVER ERROR",
            r#"{"error": "\"['label'] not found in axis\""}"#,
        ));
        let request = SplitRequest {
            filepath: "f.csv".into(),
            test_size: 0.2,
            target_column: "label".into(),
        };
        let err = service_at(&url).split(&request).unwrap_err();
        assert_eq!(err.to_string(), "\"['label'] not found in axis\"");
    }

    #[test]
    fn oversized_error_body_keeps_read_failure_reason() {
        let (url, _rx) = serve_once(
            "HTTP/1.1 500 Internal Server Error\r\nContent-Length: 99999999\r\nConnection: close\r\n\r\n{}"
                .to_string(),
        );
        let request = SplitRequest {
            filepath: "f.csv".into(),
            test_size: 0.2,
            target_column: "label".into(),
        };
        let err = service_at(&url).split(&request).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("HTTP 500: "), "{message}");
        assert!(message.contains("Response too large"), "{message}");
    }

    #[test]
    fn train_decodes_results() {
        let (url, rx) = serve_once(json_response(
            "200 OK",
            r#"{"success": true, "results": {"model_name": "decision_tree", "accuracy": 0.95, "classification_report": {"0": {"precision": 1.0, "recall": 0.9, "f1-score": 0.95, "support": 10}, "accuracy": 0.95}, "feature_importance": {"a": 0.7, "b": 0.3}, "predictions_sample": [0, 1, 1]}}"#,
        ));
        let split = SplitOutcome {
            summary: SplitSummary {
                train_size: 80,
                test_size: 20,
                train_path: "train_split.csv".into(),
                test_path: "test_split.csv".into(),
            },
            target_column: "c".into(),
            test_fraction: TestFraction::default(),
        };
        let request = TrainRequest::build(Some(ModelKind::DecisionTree), &split).unwrap();
        let result = service_at(&url).train(&request).unwrap();
        assert_eq!(result.model_name, ModelKind::DecisionTree);
        assert_eq!(result.accuracy, 0.95);
        assert_eq!(result.classification_report.classes().len(), 1);
        assert_eq!(result.predictions_sample.len(), 3);
        assert!(result.confusion_matrix.is_none());
        assert!(request_text(rx).contains(r#""target_column":"c""#));
    }

    #[test]
    fn health_reads_status() {
        let (url, _rx) = serve_once(json_response(
            "200 OK",
            r#"{"status": "ok", "message": "Backend is running"}"#,
        ));
        let health = service_at(&url).health().unwrap();
        assert!(health.is_ok());
        assert_eq!(health.message.as_deref(), Some("Backend is running"));
    }

    #[test]
    fn unreachable_service_is_a_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let err = service_at(&format!("http://{addr}"))
            .split(&SplitRequest {
                filepath: "f.csv".into(),
                test_size: 0.2,
                target_column: "c".into(),
            })
            .unwrap_err();
        assert!(matches!(err, ServiceError::Transport(_)));
    }
}
