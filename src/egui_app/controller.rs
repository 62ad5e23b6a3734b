//! Controller owning the wizard state and dispatching service calls.

use crate::egui_app::state::*;
use crate::egui_app::ui::style::StatusTone;
use crate::pipeline::{
    HttpPipelineService, PipelineService, PipelineState, ServiceError, StepOutput, WizardStep,
};
use crate::settings::{AppSettings, ConfigError};
use std::sync::Arc;

mod background_jobs;
mod jobs;
mod model_training;
mod navigation;
mod preprocess;
mod service_health;
mod split;
mod upload;


use jobs::ControllerJobs;

/// Maintains app state and bridges the pipeline wizard to the egui UI.
pub struct EguiController {
    pub ui: UiState,
    wizard: PipelineState,
    service: Arc<dyn PipelineService>,
    jobs: ControllerJobs,
    settings: AppSettings,
}

impl EguiController {
    pub fn new(service: Arc<dyn PipelineService>, settings: AppSettings) -> Self {
        Self {
            ui: UiState::default(),
            wizard: PipelineState::new(),
            service,
            jobs: ControllerJobs::new(),
            settings,
        }
    }

    /// Build a controller talking to the service configured in `settings`.
    pub fn with_http_service(settings: AppSettings) -> Result<Self, ConfigError> {
        let service = HttpPipelineService::new(&settings.service)?;
        tracing::info!("Pipeline service at {}", service.base_url());
        Ok(Self::new(Arc::new(service), settings))
    }

    /// Kick off startup work such as the service health probe.
    pub fn start(&mut self) {
        if self.settings.service.check_on_startup {
            self.check_service_health();
        }
    }

    /// Apply finished background work. Call once per frame.
    pub fn tick(&mut self) {
        self.poll_background_jobs();
    }

    pub fn wizard(&self) -> &PipelineState {
        &self.wizard
    }

    pub fn current_step(&self) -> WizardStep {
        self.wizard.current_step()
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// True while a step request is outstanding.
    pub fn is_busy(&self) -> bool {
        self.jobs.step_pending()
    }

    pub(crate) fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status.set(text, tone);
    }

    /// Rebuild the step form from the wizard stage.
    fn enter_current_step(&mut self) {
        self.ui.form = StepForm::for_state(&self.wizard);
    }

    /// Record a step output and move to the next step.
    fn complete_step(&mut self, output: StepOutput) -> bool {
        match self.wizard.advance(output) {
            Ok(()) => {
                tracing::info!("Entered {:?} step", self.wizard.current_step());
                self.enter_current_step();
                true
            }
            Err(err) => {
                tracing::error!("Wizard rejected step output: {err}");
                self.set_status(err.to_string(), StatusTone::Error);
                false
            }
        }
    }

    /// Send the current step's request on a worker thread.
    fn run_step<F>(&mut self, busy: String, work: F)
    where
        F: FnOnce(&dyn PipelineService) -> Result<StepOutput, ServiceError> + Send + 'static,
    {
        let step = self.current_step();
        if self
            .jobs
            .begin_step(step, Arc::clone(&self.service), work)
            .is_none()
        {
            return;
        }
        self.ui.form.set_error(None);
        self.set_status(busy.clone(), StatusTone::Busy);
        self.ui.busy = Some(busy);
    }

    /// Show a client-side or service error on the current step.
    fn show_step_error(&mut self, message: String, status: String) {
        self.ui.form.set_error(Some(message));
        self.set_status(status, StatusTone::Error);
    }
}
