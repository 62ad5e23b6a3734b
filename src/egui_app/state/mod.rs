//! Shared state types for the egui UI.

mod forms;
mod status;

pub use forms::*;
pub use status::*;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    pub status: StatusBarState,
    /// Interactive state of the step currently on screen.
    pub form: StepForm,
    /// Description of the request in flight, if any.
    pub busy: Option<String>,
    pub health: ServiceHealthState,
    /// Whether a file is being dragged over the window.
    pub drop_hover: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status: StatusBarState::idle(),
            form: StepForm::default(),
            busy: None,
            health: ServiceHealthState::default(),
            drop_hover: false,
        }
    }
}
