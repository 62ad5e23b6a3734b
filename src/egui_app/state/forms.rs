use std::collections::BTreeSet;

use crate::pipeline::{
    ModelKind, PipelineState, PreprocessMethod, PreprocessOutcome, TestFraction, WizardStage,
    WizardStep,
};

/// Interactive state of the step on screen.
///
/// Built fresh whenever a step is entered and dropped when it is left, so
/// nothing typed on one step leaks into another.
#[derive(Clone, Debug, PartialEq)]
pub enum StepForm {
    Upload(UploadForm),
    Preprocess(PreprocessForm),
    Split(SplitForm),
    ModelSelect(ModelForm),
    Results(ResultsForm),
}

impl Default for StepForm {
    fn default() -> Self {
        Self::Upload(UploadForm::default())
    }
}

impl StepForm {
    /// Form for the stage `state` is on, prefilled from any output that stage kept.
    pub fn for_state(state: &PipelineState) -> Self {
        match state.stage() {
            WizardStage::Upload { previous } => Self::Upload(UploadForm {
                current_file: previous.as_ref().map(|upload| upload.filepath.clone()),
                error: None,
            }),
            WizardStage::Preprocess { previous, .. } => {
                Self::Preprocess(PreprocessForm::prefilled(previous.as_ref()))
            }
            WizardStage::Split { previous, .. } => Self::Split(match previous {
                Some(split) => SplitForm {
                    test_fraction: split.test_fraction,
                    target_column: Some(split.target_column.clone()),
                    error: None,
                },
                None => SplitForm::default(),
            }),
            WizardStage::ModelSelect { .. } => Self::ModelSelect(ModelForm::default()),
            WizardStage::Results { .. } => Self::Results(ResultsForm::default()),
        }
    }

    pub fn step(&self) -> WizardStep {
        match self {
            Self::Upload(_) => WizardStep::Upload,
            Self::Preprocess(_) => WizardStep::Preprocess,
            Self::Split(_) => WizardStep::Split,
            Self::ModelSelect(_) => WizardStep::ModelSelect,
            Self::Results(_) => WizardStep::Results,
        }
    }

    /// Inline error shown on the step, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Upload(form) => form.error.as_deref(),
            Self::Preprocess(form) => form.error.as_deref(),
            Self::Split(form) => form.error.as_deref(),
            Self::ModelSelect(form) => form.error.as_deref(),
            Self::Results(_) => None,
        }
    }

    pub fn set_error(&mut self, error: Option<String>) {
        match self {
            Self::Upload(form) => form.error = error,
            Self::Preprocess(form) => form.error = error,
            Self::Split(form) => form.error = error,
            Self::ModelSelect(form) => form.error = error,
            Self::Results(_) => {}
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadForm {
    /// Server-side path of the dataset kept from an earlier upload.
    pub current_file: Option<String>,
    pub error: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PreprocessForm {
    pub method: Option<PreprocessMethod>,
    pub columns: BTreeSet<String>,
    pub error: Option<String>,
}

impl PreprocessForm {
    fn prefilled(previous: Option<&PreprocessOutcome>) -> Self {
        match previous {
            Some(PreprocessOutcome::Applied(result)) => Self {
                method: Some(result.method),
                columns: result.columns.iter().cloned().collect(),
                error: None,
            },
            Some(PreprocessOutcome::Skipped) | None => Self::default(),
        }
    }

    pub fn toggle_column(&mut self, column: &str) {
        if !self.columns.remove(column) {
            self.columns.insert(column.to_string());
        }
    }

    /// Selected columns in dataset order.
    pub fn ordered_columns(&self, dataset_columns: &[String]) -> Vec<String> {
        dataset_columns
            .iter()
            .filter(|name| self.columns.contains(name.as_str()))
            .cloned()
            .collect()
    }

    pub fn is_ready(&self) -> bool {
        self.method.is_some() && !self.columns.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SplitForm {
    pub test_fraction: TestFraction,
    pub target_column: Option<String>,
    pub error: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModelForm {
    pub model: Option<ModelKind>,
    pub error: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultsForm {
    /// Informational notice from the last results action.
    pub notice: Option<String>,
}
