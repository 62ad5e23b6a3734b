//! Payloads returned by the pipeline service and carried between steps.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::report::ClassificationReport;

/// One preview row as sent by the service: column name to cell value.
pub type PreviewRow = serde_json::Map<String, Value>;

/// Shape and sample of an uploaded dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    #[serde(rename = "rows")]
    pub row_count: u64,
    #[serde(rename = "columns")]
    pub column_count: u64,
    pub column_names: Vec<String>,
    #[serde(default, rename = "preview")]
    pub preview_rows: Vec<PreviewRow>,
    /// Backend dtype per column, when reported.
    #[serde(default)]
    pub dtypes: BTreeMap<String, String>,
}

impl DatasetSummary {
    /// Display text for one preview cell; missing cells render empty.
    pub fn cell_text(row: &PreviewRow, column: &str) -> String {
        row.get(column).map(value_text).unwrap_or_default()
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.column_names.iter().any(|name| name == column)
    }
}

/// Render a JSON scalar the way a table cell shows it.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Result of the upload step: server-side handle plus dataset summary.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadOutcome {
    pub filepath: String,
    pub dataset: DatasetSummary,
}

/// Scaling applied by the preprocess endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreprocessMethod {
    Standardization,
    Normalization,
}

impl PreprocessMethod {
    pub const ALL: [Self; 2] = [Self::Standardization, Self::Normalization];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standardization => "standardization",
            Self::Normalization => "normalization",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Standardization => "Standardization (Z-score)",
            Self::Normalization => "Normalization (Min-Max)",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Standardization => "Transforms data to have mean=0 and std=1",
            Self::Normalization => "Scales data to range [0, 1]",
        }
    }
}

/// What the preprocess step reported upward.
#[derive(Debug, Clone, PartialEq)]
pub enum PreprocessOutcome {
    Applied(PreprocessResult),
    /// The user chose to skip preprocessing.
    Skipped,
}

impl PreprocessOutcome {
    /// Processed file produced by the service, if preprocessing ran and reported one.
    pub fn processed_path(&self) -> Option<&str> {
        match self {
            Self::Applied(result) => result.processed_path.as_deref(),
            Self::Skipped => None,
        }
    }
}

/// Successful preprocess response, kept whole.
#[derive(Debug, Clone, PartialEq)]
pub struct PreprocessResult {
    pub method: PreprocessMethod,
    pub columns: Vec<String>,
    pub processed_path: Option<String>,
    pub preview_rows: Vec<PreviewRow>,
    /// The full response body, passed through unchanged.
    pub payload: Value,
}

/// Test share of the dataset, constrained to 10–50% in 5% steps.
///
/// Stored as whole percent so train and test shares always add to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TestFraction(u8);

impl TestFraction {
    pub const MIN_PERCENT: u8 = 10;
    pub const MAX_PERCENT: u8 = 50;
    pub const STEP_PERCENT: u8 = 5;

    /// Snap to the nearest 5% step inside the allowed range.
    pub fn from_percent(percent: u8) -> Self {
        let clamped = percent.clamp(Self::MIN_PERCENT, Self::MAX_PERCENT);
        let step = Self::STEP_PERCENT;
        let snapped = (clamped + step / 2) / step * step;
        Self(snapped.min(Self::MAX_PERCENT))
    }

    pub fn from_fraction(fraction: f64) -> Self {
        if !fraction.is_finite() {
            return Self::default();
        }
        let percent = (fraction * 100.0).round().clamp(0.0, 100.0) as u8;
        Self::from_percent(percent)
    }

    pub fn test_percent(self) -> u8 {
        self.0
    }

    pub fn train_percent(self) -> u8 {
        100 - self.0
    }

    pub fn fraction(self) -> f64 {
        f64::from(self.0) / 100.0
    }

    pub fn train_fraction(self) -> f64 {
        1.0 - self.fraction()
    }

    /// Every selectable value, smallest first.
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::MIN_PERCENT..=Self::MAX_PERCENT)
            .step_by(usize::from(Self::STEP_PERCENT))
            .map(Self)
    }
}

impl Default for TestFraction {
    fn default() -> Self {
        Self(20)
    }
}

/// Split summary reported by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitSummary {
    pub train_size: u64,
    pub test_size: u64,
    pub train_path: String,
    pub test_path: String,
}

/// Result of the split step, including the choices that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitOutcome {
    pub summary: SplitSummary,
    pub target_column: String,
    pub test_fraction: TestFraction,
}

/// Classifiers the service can train.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    LogisticRegression,
    DecisionTree,
}

impl ModelKind {
    pub const ALL: [Self; 2] = [Self::LogisticRegression, Self::DecisionTree];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::LogisticRegression => "logistic_regression",
            Self::DecisionTree => "decision_tree",
        }
    }
}

/// A predicted label; the service may send numbers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PredictionLabel(pub String);

impl<'de> Deserialize<'de> for PredictionLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(|value| Self(value_text(&value)))
    }
}

impl std::fmt::Display for PredictionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Real confusion-matrix counts, rows are actual labels, columns predicted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    pub labels: Vec<String>,
    pub matrix: Vec<Vec<u64>>,
}

impl ConfusionMatrix {
    /// True when the matrix is square and matches the label count.
    pub fn is_consistent(&self) -> bool {
        !self.labels.is_empty()
            && self.matrix.len() == self.labels.len()
            && self.matrix.iter().all(|row| row.len() == self.labels.len())
    }
}

/// Evaluation of a trained model.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrainingResult {
    pub model_name: ModelKind,
    pub accuracy: f64,
    #[serde(default)]
    pub classification_report: ClassificationReport,
    #[serde(default)]
    pub feature_importance: BTreeMap<String, f64>,
    #[serde(default)]
    pub predictions_sample: Vec<PredictionLabel>,
    #[serde(default)]
    pub confusion_matrix: Option<ConfusionMatrix>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fraction_defaults_to_twenty_percent() {
        let fraction = TestFraction::default();
        assert_eq!(fraction.test_percent(), 20);
        assert_eq!(fraction.train_percent(), 80);
        assert_eq!(fraction.fraction(), 0.2);
    }

    #[test]
    fn test_fraction_snaps_and_clamps() {
        assert_eq!(TestFraction::from_percent(3).test_percent(), 10);
        assert_eq!(TestFraction::from_percent(90).test_percent(), 50);
        assert_eq!(TestFraction::from_percent(23).test_percent(), 25);
        assert_eq!(TestFraction::from_percent(22).test_percent(), 20);
        assert_eq!(TestFraction::from_fraction(0.35).test_percent(), 35);
        assert_eq!(TestFraction::from_fraction(f64::NAN), TestFraction::default());
    }

    #[test]
    fn train_share_complements_test_share_for_every_step() {
        let all: Vec<_> = TestFraction::all().collect();
        assert_eq!(all.len(), 9);
        for fraction in all {
            assert_eq!(fraction.train_fraction(), 1.0 - fraction.fraction());
            assert_eq!(
                u16::from(fraction.train_percent()) + u16::from(fraction.test_percent()),
                100
            );
        }
    }

    #[test]
    fn prediction_labels_accept_numbers_and_strings() {
        let labels: Vec<PredictionLabel> = serde_json::from_value(json!([0, "yes", 1.5])).unwrap();
        let texts: Vec<_> = labels.iter().map(ToString::to_string).collect();
        assert_eq!(texts, vec!["0", "yes", "1.5"]);
    }

    #[test]
    fn dataset_summary_decodes_service_names() {
        let summary: DatasetSummary = serde_json::from_value(json!({
            "rows": 2,
            "columns": 2,
            "column_names": ["a", "b"],
            "preview": [{"a": 1, "b": null}, {"a": "x"}],
            "dtypes": {"a": "int64", "b": "float64"}
        }))
        .unwrap();
        assert_eq!(summary.row_count, 2);
        assert!(summary.has_column("b"));
        assert_eq!(DatasetSummary::cell_text(&summary.preview_rows[0], "a"), "1");
        assert_eq!(DatasetSummary::cell_text(&summary.preview_rows[0], "b"), "");
        assert_eq!(DatasetSummary::cell_text(&summary.preview_rows[1], "b"), "");
        assert_eq!(summary.dtypes["b"], "float64");
    }

    #[test]
    fn confusion_matrix_consistency() {
        let good = ConfusionMatrix {
            labels: vec!["0".into(), "1".into()],
            matrix: vec![vec![5, 1], vec![2, 7]],
        };
        assert!(good.is_consistent());
        let ragged = ConfusionMatrix {
            labels: vec!["0".into(), "1".into()],
            matrix: vec![vec![5, 1], vec![2]],
        };
        assert!(!ragged.is_consistent());
    }
}
