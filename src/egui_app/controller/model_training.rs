use super::*;
use crate::pipeline::{ModelKind, TrainRequest};

impl EguiController {
    pub fn select_model(&mut self, model: ModelKind) {
        if let StepForm::ModelSelect(form) = &mut self.ui.form {
            form.model = Some(model);
            form.error = None;
        }
    }

    /// Train the chosen model on the stored split.
    pub fn train_model(&mut self) {
        if self.is_busy() {
            return;
        }
        let StepForm::ModelSelect(form) = &self.ui.form else {
            return;
        };
        let Some(split) = self.wizard.split() else {
            return;
        };
        let request = match TrainRequest::build(form.model, split) {
            Ok(request) => request,
            Err(err) => {
                let message = err.to_string();
                self.ui.form.set_error(Some(message.clone()));
                self.set_status(message, StatusTone::Warning);
                return;
            }
        };
        let busy = format!("Training {}…", request.model_name.display_name());
        self.run_step(busy, move |service| {
            service.train(&request).map(StepOutput::Trained)
        });
    }
}
