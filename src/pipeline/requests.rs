//! Request bodies for each endpoint and the client-side checks that gate them.

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use super::model::{DatasetSummary, ModelKind, PreprocessMethod, SplitOutcome, TestFraction};

/// A step cannot be submitted yet. Nothing was sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Unsupported file type: {0}. Choose a .csv, .xls or .xlsx file")]
    UnsupportedFile(String),
    #[error("Please select a preprocessing method")]
    MissingMethod,
    #[error("Please select at least one column")]
    NoColumns,
    #[error("Please select a target column")]
    MissingTarget,
    #[error("Column {0:?} is not part of the dataset")]
    UnknownColumn(String),
    #[error("Please select a model")]
    MissingModel,
}

/// Spreadsheet formats the upload step accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UploadFormat {
    Csv,
    Xls,
    Xlsx,
}

impl UploadFormat {
    pub const ALL: [Self; 3] = [Self::Csv, Self::Xls, Self::Xlsx];

    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Xls => "xls",
            Self::Xlsx => "xlsx",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Csv => "text/csv",
            Self::Xls => "application/vnd.ms-excel",
            Self::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        }
    }

    /// Match a path by its extension, ignoring case.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        Self::ALL
            .into_iter()
            .find(|format| format.extension().eq_ignore_ascii_case(extension))
    }

    /// Extensions for a native file dialog filter.
    pub fn dialog_extensions() -> [&'static str; 3] {
        Self::ALL.map(Self::extension)
    }
}

/// A local file accepted for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub path: PathBuf,
    pub format: UploadFormat,
}

impl UploadRequest {
    pub fn for_path(path: impl Into<PathBuf>) -> Result<Self, ValidationError> {
        let path = path.into();
        let format = UploadFormat::from_path(&path)
            .ok_or_else(|| ValidationError::UnsupportedFile(display_name(&path)))?;
        Ok(Self { path, format })
    }

    /// File name sent in the multipart part.
    pub fn file_name(&self) -> String {
        display_name(&self.path)
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Body of `POST /preprocess`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreprocessRequest {
    pub filepath: String,
    pub method: PreprocessMethod,
    pub columns: Vec<String>,
}

impl PreprocessRequest {
    pub fn build(
        filepath: &str,
        method: Option<PreprocessMethod>,
        columns: &[String],
    ) -> Result<Self, ValidationError> {
        let method = method.ok_or(ValidationError::MissingMethod)?;
        if columns.is_empty() {
            return Err(ValidationError::NoColumns);
        }
        Ok(Self {
            filepath: filepath.to_string(),
            method,
            columns: columns.to_vec(),
        })
    }
}

/// Body of `POST /split`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SplitRequest {
    pub filepath: String,
    pub test_size: f64,
    pub target_column: String,
}

impl SplitRequest {
    pub fn build(
        filepath: &str,
        test_fraction: TestFraction,
        target_column: Option<&str>,
        dataset: &DatasetSummary,
    ) -> Result<Self, ValidationError> {
        let target = target_column
            .filter(|name| !name.is_empty())
            .ok_or(ValidationError::MissingTarget)?;
        if !dataset.has_column(target) {
            return Err(ValidationError::UnknownColumn(target.to_string()));
        }
        Ok(Self {
            filepath: filepath.to_string(),
            test_size: test_fraction.fraction(),
            target_column: target.to_string(),
        })
    }
}

/// Body of `POST /train`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrainRequest {
    pub model_name: ModelKind,
    pub train_path: String,
    pub test_path: String,
    pub target_column: String,
}

impl TrainRequest {
    /// The target column comes from the split outcome, never from a side channel.
    pub fn build(model: Option<ModelKind>, split: &SplitOutcome) -> Result<Self, ValidationError> {
        let model_name = model.ok_or(ValidationError::MissingModel)?;
        Ok(Self {
            model_name,
            train_path: split.summary.train_path.clone(),
            test_path: split.summary.test_path.clone(),
            target_column: split.target_column.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::model::SplitSummary;
    use serde_json::json;

    fn dataset() -> DatasetSummary {
        DatasetSummary {
            row_count: 100,
            column_count: 3,
            column_names: vec!["a".into(), "b".into(), "c".into()],
            preview_rows: Vec::new(),
            dtypes: Default::default(),
        }
    }

    #[test]
    fn upload_accepts_declared_extensions_only() {
        assert_eq!(
            UploadRequest::for_path("/data/iris.CSV").unwrap().format,
            UploadFormat::Csv
        );
        assert_eq!(
            UploadRequest::for_path("book.xlsx").unwrap().format.mime_type(),
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        );
        assert_eq!(
            UploadRequest::for_path("notes.txt"),
            Err(ValidationError::UnsupportedFile("notes.txt".into()))
        );
        assert!(UploadRequest::for_path("no_extension").is_err());
    }

    #[test]
    fn preprocess_requires_method_and_columns() {
        let columns = vec!["a".to_string()];
        assert_eq!(
            PreprocessRequest::build("f.csv", None, &columns),
            Err(ValidationError::MissingMethod)
        );
        assert_eq!(
            PreprocessRequest::build("f.csv", Some(PreprocessMethod::Normalization), &[]),
            Err(ValidationError::NoColumns)
        );
        let request =
            PreprocessRequest::build("f.csv", Some(PreprocessMethod::Normalization), &columns)
                .unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"filepath": "f.csv", "method": "normalization", "columns": ["a"]})
        );
    }

    #[test]
    fn split_requires_known_target() {
        let data = dataset();
        assert_eq!(
            SplitRequest::build("f.csv", TestFraction::default(), None, &data),
            Err(ValidationError::MissingTarget)
        );
        assert_eq!(
            SplitRequest::build("f.csv", TestFraction::default(), Some(""), &data),
            Err(ValidationError::MissingTarget)
        );
        assert_eq!(
            SplitRequest::build("f.csv", TestFraction::default(), Some("z"), &data),
            Err(ValidationError::UnknownColumn("z".into()))
        );
        let request =
            SplitRequest::build("f.csv", TestFraction::from_percent(30), Some("c"), &data).unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"filepath": "f.csv", "test_size": 0.3, "target_column": "c"})
        );
    }

    #[test]
    fn train_request_carries_split_target() {
        let split = SplitOutcome {
            summary: SplitSummary {
                train_size: 80,
                test_size: 20,
                train_path: "train.csv".into(),
                test_path: "test.csv".into(),
            },
            target_column: "label".into(),
            test_fraction: TestFraction::default(),
        };
        assert_eq!(
            TrainRequest::build(None, &split),
            Err(ValidationError::MissingModel)
        );
        let request = TrainRequest::build(Some(ModelKind::DecisionTree), &split).unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "model_name": "decision_tree",
                "train_path": "train.csv",
                "test_path": "test.csv",
                "target_column": "label"
            })
        );
    }
}
