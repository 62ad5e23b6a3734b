//! Classification report as produced by the service (scikit-learn layout).

use std::cmp::Ordering;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Report keys that summarize the whole test set rather than one class.
pub const AGGREGATE_KEYS: [&str; 5] = [
    "accuracy",
    "macro avg",
    "weighted avg",
    "micro avg",
    "samples avg",
];

pub fn is_aggregate_key(key: &str) -> bool {
    AGGREGATE_KEYS.contains(&key)
}

/// Precision/recall/F1/support for one class or one average.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ClassMetrics {
    #[serde(default)]
    pub precision: Option<f64>,
    #[serde(default)]
    pub recall: Option<f64>,
    #[serde(default, rename = "f1-score")]
    pub f1_score: Option<f64>,
    #[serde(default)]
    pub support: Option<f64>,
}

/// Per-class rows plus the aggregate rows, split apart on decode.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassificationReport {
    classes: Vec<(String, ClassMetrics)>,
    accuracy: Option<f64>,
    aggregates: Vec<(String, ClassMetrics)>,
}

impl ClassificationReport {
    /// Per-class rows in label order; aggregate keys never appear here.
    pub fn classes(&self) -> &[(String, ClassMetrics)] {
        &self.classes
    }

    #[cfg(test)]
    fn class(&self, label: &str) -> Option<&ClassMetrics> {
        self.classes
            .iter()
            .find(|(name, _)| name == label)
            .map(|(_, metrics)| metrics)
    }

    /// Overall accuracy row, when the service included it.
    pub fn accuracy(&self) -> Option<f64> {
        self.accuracy
    }

    /// Average rows such as `macro avg` and `weighted avg`.
    pub fn aggregates(&self) -> &[(String, ClassMetrics)] {
        &self.aggregates
    }

    fn from_map(map: serde_json::Map<String, Value>) -> Result<Self, serde_json::Error> {
        let mut report = Self::default();
        for (key, value) in map {
            if key == "accuracy" {
                report.accuracy = value.as_f64();
                continue;
            }
            // Entries that are not metric objects carry no class data.
            if !value.is_object() {
                continue;
            }
            let metrics: ClassMetrics = serde_json::from_value(value)?;
            if is_aggregate_key(&key) {
                report.aggregates.push((key, metrics));
            } else {
                report.classes.push((key, metrics));
            }
        }
        report
            .classes
            .sort_by(|(left, _), (right, _)| compare_labels(left, right));
        Ok(report)
    }
}

impl<'de> Deserialize<'de> for ClassificationReport {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = serde_json::Map::<String, Value>::deserialize(deserializer)?;
        Self::from_map(map).map_err(serde::de::Error::custom)
    }
}

/// Numeric labels sort by value ("2" before "10"), others lexically.
fn compare_labels(left: &str, right: &str) -> Ordering {
    match (left.parse::<f64>(), right.parse::<f64>()) {
        (Ok(a), Ok(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => left.cmp(right),
    }
}
