use super::*;
use crate::pipeline::{PreprocessMethod, PreprocessOutcome, PreprocessRequest};

impl EguiController {
    pub fn select_preprocess_method(&mut self, method: PreprocessMethod) {
        if let StepForm::Preprocess(form) = &mut self.ui.form {
            form.method = Some(method);
            form.error = None;
        }
    }

    pub fn toggle_preprocess_column(&mut self, column: &str) {
        if let StepForm::Preprocess(form) = &mut self.ui.form {
            form.toggle_column(column);
            form.error = None;
        }
    }

    /// Whether "Apply Preprocessing" can be pressed.
    pub fn can_apply_preprocessing(&self) -> bool {
        !self.is_busy() && matches!(&self.ui.form, StepForm::Preprocess(form) if form.is_ready())
    }

    /// Validate the choice and send it to the service. Nothing is sent when invalid.
    pub fn apply_preprocessing(&mut self) {
        if self.is_busy() {
            return;
        }
        let StepForm::Preprocess(form) = &self.ui.form else {
            return;
        };
        let Some(upload) = self.wizard.upload() else {
            return;
        };
        let columns = form.ordered_columns(&upload.dataset.column_names);
        let request = match PreprocessRequest::build(&upload.filepath, form.method, &columns) {
            Ok(request) => request,
            Err(err) => {
                let message = err.to_string();
                self.ui.form.set_error(Some(message.clone()));
                self.set_status(message, StatusTone::Warning);
                return;
            }
        };
        let busy = format!(
            "Applying {} to {} column(s)…",
            request.method.as_str(),
            request.columns.len()
        );
        self.run_step(busy, move |service| {
            service
                .preprocess(&request)
                .map(|result| StepOutput::Preprocessed(PreprocessOutcome::Applied(result)))
        });
    }

    /// Move on without preprocessing. No request is made.
    pub fn skip_preprocessing(&mut self) {
        if self.is_busy() || self.current_step() != WizardStep::Preprocess {
            return;
        }
        if self.complete_step(StepOutput::Preprocessed(PreprocessOutcome::Skipped)) {
            self.set_status("Preprocessing skipped", StatusTone::Info);
        }
    }
}
