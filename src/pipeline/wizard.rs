//! Five-step linear wizard state.
//!
//! Each [`WizardStage`] variant carries exactly the data that is legal at
//! that step: outputs of every earlier step, plus the stage's own previous
//! output when the user navigated back to it. Results cannot exist without a
//! [`TrainingResult`], and nothing past the current step is ever stored.

use thiserror::Error;

use super::model::{
    DatasetSummary, PreprocessOutcome, SplitOutcome, TrainingResult, UploadOutcome,
};

/// Position in the wizard, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WizardStep {
    Upload,
    Preprocess,
    Split,
    ModelSelect,
    Results,
}

impl WizardStep {
    pub const ALL: [Self; 5] = [
        Self::Upload,
        Self::Preprocess,
        Self::Split,
        Self::ModelSelect,
        Self::Results,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Short label used by the step indicator.
    pub fn label(self) -> &'static str {
        match self {
            Self::Upload => "Upload",
            Self::Preprocess => "Preprocess",
            Self::Split => "Split",
            Self::ModelSelect => "Model",
            Self::Results => "Results",
        }
    }

    /// Heading shown above the step view.
    pub fn title(self) -> &'static str {
        match self {
            Self::Upload => "Step 1: Upload Dataset",
            Self::Preprocess => "Step 2: Data Preprocessing",
            Self::Split => "Step 3: Train-Test Split",
            Self::ModelSelect => "Step 4: Model Selection & Training",
            Self::Results => "Step 5: Results & Evaluation",
        }
    }

    /// Whether "Previous" is offered from this step.
    pub fn can_go_back(self) -> bool {
        matches!(self, Self::Preprocess | Self::Split | Self::ModelSelect)
    }
}

/// Successful output reported by the active step.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutput {
    Uploaded(UploadOutcome),
    Preprocessed(PreprocessOutcome),
    Split(SplitOutcome),
    Trained(TrainingResult),
}

impl StepOutput {
    /// Step that produces this kind of output.
    pub fn step(&self) -> WizardStep {
        match self {
            Self::Uploaded(_) => WizardStep::Upload,
            Self::Preprocessed(_) => WizardStep::Preprocess,
            Self::Split(_) => WizardStep::Split,
            Self::Trained(_) => WizardStep::ModelSelect,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    /// The output came from a different step than the active one.
    #[error("{output:?} output cannot complete the {current:?} step")]
    StepMismatch {
        current: WizardStep,
        output: WizardStep,
    },
    /// Results is the last step.
    #[error("The wizard is already on its last step")]
    AlreadyComplete,
    /// "Previous" is only offered on the middle steps.
    #[error("Cannot go back from the {0:?} step")]
    CannotGoBack(WizardStep),
}

/// Data held at each step.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardStage {
    Upload {
        previous: Option<UploadOutcome>,
    },
    Preprocess {
        upload: UploadOutcome,
        previous: Option<PreprocessOutcome>,
    },
    Split {
        upload: UploadOutcome,
        preprocess: PreprocessOutcome,
        previous: Option<SplitOutcome>,
    },
    ModelSelect {
        upload: UploadOutcome,
        preprocess: PreprocessOutcome,
        split: SplitOutcome,
    },
    Results {
        upload: UploadOutcome,
        preprocess: PreprocessOutcome,
        split: SplitOutcome,
        training: TrainingResult,
    },
}

impl Default for WizardStage {
    fn default() -> Self {
        Self::Upload { previous: None }
    }
}

impl WizardStage {
    pub fn step(&self) -> WizardStep {
        match self {
            Self::Upload { .. } => WizardStep::Upload,
            Self::Preprocess { .. } => WizardStep::Preprocess,
            Self::Split { .. } => WizardStep::Split,
            Self::ModelSelect { .. } => WizardStep::ModelSelect,
            Self::Results { .. } => WizardStep::Results,
        }
    }
}

/// Owner of the wizard stage; the only way to move between steps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineState {
    stage: WizardStage,
}

impl PipelineState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> &WizardStage {
        &self.stage
    }

    pub fn current_step(&self) -> WizardStep {
        self.stage.step()
    }

    /// Record the active step's output and move one step forward.
    ///
    /// The output is trusted as-is; on a mismatch nothing changes.
    pub fn advance(&mut self, output: StepOutput) -> Result<(), WizardError> {
        let current = self.current_step();
        let produced = output.step();
        let stage = std::mem::take(&mut self.stage);
        self.stage = match (stage, output) {
            (WizardStage::Upload { .. }, StepOutput::Uploaded(upload)) => WizardStage::Preprocess {
                upload,
                previous: None,
            },
            (WizardStage::Preprocess { upload, .. }, StepOutput::Preprocessed(preprocess)) => {
                WizardStage::Split {
                    upload,
                    preprocess,
                    previous: None,
                }
            }
            (
                WizardStage::Split {
                    upload, preprocess, ..
                },
                StepOutput::Split(split),
            ) => WizardStage::ModelSelect {
                upload,
                preprocess,
                split,
            },
            (
                WizardStage::ModelSelect {
                    upload,
                    preprocess,
                    split,
                },
                StepOutput::Trained(training),
            ) => WizardStage::Results {
                upload,
                preprocess,
                split,
                training,
            },
            (stage, _) => {
                self.stage = stage;
                return Err(if current == WizardStep::Results {
                    WizardError::AlreadyComplete
                } else {
                    WizardError::StepMismatch {
                        current,
                        output: produced,
                    }
                });
            }
        };
        tracing::debug!("Wizard advanced from {current:?} to {:?}", self.current_step());
        Ok(())
    }

    /// Show the previous step again. Nothing is discarded or re-fetched.
    pub fn go_back(&mut self) -> Result<(), WizardError> {
        let current = self.current_step();
        let stage = std::mem::take(&mut self.stage);
        self.stage = match stage {
            WizardStage::Preprocess { upload, .. } => WizardStage::Upload {
                previous: Some(upload),
            },
            WizardStage::Split {
                upload, preprocess, ..
            } => WizardStage::Preprocess {
                upload,
                previous: Some(preprocess),
            },
            WizardStage::ModelSelect {
                upload,
                preprocess,
                split,
            } => WizardStage::Split {
                upload,
                preprocess,
                previous: Some(split),
            },
            other @ (WizardStage::Upload { .. } | WizardStage::Results { .. }) => {
                self.stage = other;
                return Err(WizardError::CannotGoBack(current));
            }
        };
        tracing::debug!("Wizard went back from {current:?} to {:?}", self.current_step());
        Ok(())
    }

    /// Return to the first step with no data.
    pub fn reset(&mut self) {
        self.stage = WizardStage::default();
    }

    /// Upload result the current step builds on, or the one retained on Upload.
    pub fn upload(&self) -> Option<&UploadOutcome> {
        match &self.stage {
            WizardStage::Upload { previous } => previous.as_ref(),
            WizardStage::Preprocess { upload, .. }
            | WizardStage::Split { upload, .. }
            | WizardStage::ModelSelect { upload, .. }
            | WizardStage::Results { upload, .. } => Some(upload),
        }
    }

    pub fn dataset(&self) -> Option<&DatasetSummary> {
        self.upload().map(|upload| &upload.dataset)
    }

    pub fn preprocess(&self) -> Option<&PreprocessOutcome> {
        match &self.stage {
            WizardStage::Upload { .. } => None,
            WizardStage::Preprocess { previous, .. } => previous.as_ref(),
            WizardStage::Split { preprocess, .. }
            | WizardStage::ModelSelect { preprocess, .. }
            | WizardStage::Results { preprocess, .. } => Some(preprocess),
        }
    }

    pub fn split(&self) -> Option<&SplitOutcome> {
        match &self.stage {
            WizardStage::Upload { .. } | WizardStage::Preprocess { .. } => None,
            WizardStage::Split { previous, .. } => previous.as_ref(),
            WizardStage::ModelSelect { split, .. } | WizardStage::Results { split, .. } => {
                Some(split)
            }
        }
    }

    pub fn training(&self) -> Option<&TrainingResult> {
        match &self.stage {
            WizardStage::Results { training, .. } => Some(training),
            _ => None,
        }
    }

    /// File the split step should read: the processed file when preprocessing
    /// produced one, otherwise the uploaded file.
    pub fn source_path(&self) -> Option<&str> {
        let upload = self.upload()?;
        let processed = match &self.stage {
            WizardStage::Split { preprocess, .. }
            | WizardStage::ModelSelect { preprocess, .. }
            | WizardStage::Results { preprocess, .. } => preprocess.processed_path(),
            _ => None,
        };
        Some(processed.unwrap_or(&upload.filepath))
    }

    /// Output the current step kept from an earlier visit, as if it were just produced.
    pub fn retained_output(&self) -> Option<StepOutput> {
        match &self.stage {
            WizardStage::Upload { previous } => previous.clone().map(StepOutput::Uploaded),
            WizardStage::Preprocess { previous, .. } => {
                previous.clone().map(StepOutput::Preprocessed)
            }
            WizardStage::Split { previous, .. } => previous.clone().map(StepOutput::Split),
            WizardStage::ModelSelect { .. } | WizardStage::Results { .. } => None,
        }
    }

    /// Target column chosen on the split step.
    pub fn target_column(&self) -> Option<&str> {
        self.split().map(|split| split.target_column.as_str())
    }
}
