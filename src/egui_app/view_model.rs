//! Helpers to convert domain data into egui-facing view structs.

use std::collections::BTreeMap;

use crate::egui_app::state::PreprocessForm;
use crate::pipeline::{
    ClassMetrics, ClassificationReport, ConfusionMatrix, DatasetSummary, PredictionLabel,
    PreviewRow, TestFraction, TrainingResult, WizardStep,
};

/// Format a 0..1 fraction as a percentage with two decimals ("95.00%").
pub fn format_percent(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}

/// Qualitative verdict shown under the accuracy.
pub fn accuracy_remark(accuracy: f64) -> &'static str {
    if accuracy > 0.8 {
        "This is an excellent result!"
    } else if accuracy > 0.6 {
        "This is a good result."
    } else {
        "Consider trying different preprocessing or model options."
    }
}

pub fn conclusion(accuracy: f64) -> String {
    format!(
        "The model achieved an accuracy of {} on the test set. {}",
        format_percent(accuracy),
        accuracy_remark(accuracy)
    )
}

/// Display labels for the train/test shares of a split.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitLabels {
    pub training: String,
    pub test: String,
}

pub fn split_labels(fraction: TestFraction) -> SplitLabels {
    SplitLabels {
        training: format!("Training set: {}%", fraction.train_percent()),
        test: format!("Test set: {}%", fraction.test_percent()),
    }
}

/// One row of the classification-report table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassRow {
    pub label: String,
    pub precision: String,
    pub recall: String,
    pub f1_score: String,
    pub support: String,
}

/// Per-class rows only; aggregate entries never become rows.
pub fn class_rows(report: &ClassificationReport) -> Vec<ClassRow> {
    report
        .classes()
        .iter()
        .map(|(label, metrics)| metrics_row(label, metrics))
        .collect()
}

/// Average rows (`macro avg`, `weighted avg`) shown beneath the class table.
pub fn average_rows(report: &ClassificationReport) -> Vec<ClassRow> {
    report
        .aggregates()
        .iter()
        .map(|(label, metrics)| metrics_row(label, metrics))
        .collect()
}

fn metrics_row(label: &str, metrics: &ClassMetrics) -> ClassRow {
    ClassRow {
        label: label.to_string(),
        precision: metric_text(metrics.precision),
        recall: metric_text(metrics.recall),
        f1_score: metric_text(metrics.f1_score),
        support: metrics
            .support
            .map(|support| format!("{support:.0}"))
            .unwrap_or_else(|| "N/A".to_string()),
    }
}

fn metric_text(value: Option<f64>) -> String {
    value
        .map(|value| format!("{value:.3}"))
        .unwrap_or_else(|| "N/A".to_string())
}

/// Preview grid as display text: one header cell per dataset column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

pub fn preview_table(columns: &[String], rows: &[PreviewRow]) -> PreviewTable {
    PreviewTable {
        header: columns.to_vec(),
        rows: rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|column| DatasetSummary::cell_text(row, column))
                    .collect()
            })
            .collect(),
    }
}

/// A feature importance bar, scaled against the largest importance.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureBar {
    pub name: String,
    pub importance: f64,
    /// Bar length in 0..=1.
    pub scale: f32,
}

/// Bars sorted from most to least important.
pub fn feature_bars(importance: &BTreeMap<String, f64>) -> Vec<FeatureBar> {
    let max = importance
        .values()
        .copied()
        .filter(|value| value.is_finite())
        .fold(0.0_f64, |max, value| max.max(value.abs()));
    let mut bars: Vec<FeatureBar> = importance
        .iter()
        .map(|(name, &value)| FeatureBar {
            name: name.clone(),
            importance: value,
            scale: if max > 0.0 && value.is_finite() {
                (value.abs() / max) as f32
            } else {
                0.0
            },
        })
        .collect();
    bars.sort_by(|a, b| {
        b.importance
            .abs()
            .partial_cmp(&a.importance.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    bars
}

/// Numbered prediction lines ("#1  Predicted: 0").
pub fn prediction_lines(predictions: &[PredictionLabel]) -> Vec<String> {
    predictions
        .iter()
        .enumerate()
        .map(|(index, label)| format!("#{}  Predicted: {label}", index + 1))
        .collect()
}

/// Confusion matrix worth drawing; inconsistent shapes are hidden.
pub fn confusion_matrix(result: &TrainingResult) -> Option<&ConfusionMatrix> {
    result
        .confusion_matrix
        .as_ref()
        .filter(|matrix| matrix.is_consistent())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerState {
    Completed,
    Active,
    Pending,
}

/// One circle of the step indicator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepMarker {
    pub number: usize,
    pub label: &'static str,
    pub state: MarkerState,
}

pub fn step_markers(current: WizardStep) -> Vec<StepMarker> {
    WizardStep::ALL
        .iter()
        .map(|&step| StepMarker {
            number: step.index() + 1,
            label: step.label(),
            state: match step.cmp(&current) {
                std::cmp::Ordering::Less => MarkerState::Completed,
                std::cmp::Ordering::Equal => MarkerState::Active,
                std::cmp::Ordering::Greater => MarkerState::Pending,
            },
        })
        .collect()
}

/// Lines summarizing the pending preprocessing choice, once a method is set.
pub fn preprocess_summary(form: &PreprocessForm, dataset_columns: &[String]) -> Option<[String; 2]> {
    let method = form.method?;
    let columns = form.ordered_columns(dataset_columns);
    let columns = if columns.is_empty() {
        "None selected".to_string()
    } else {
        columns.join(", ")
    };
    Some([
        format!("Method: {}", method.label()),
        format!("Columns to process: {columns}"),
    ])
}
