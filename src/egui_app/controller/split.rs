use super::*;
use crate::pipeline::{SplitOutcome, SplitRequest, TestFraction};

impl EguiController {
    pub fn set_test_fraction(&mut self, fraction: TestFraction) {
        if let StepForm::Split(form) = &mut self.ui.form {
            form.test_fraction = fraction;
        }
    }

    pub fn select_target_column(&mut self, column: Option<String>) {
        if let StepForm::Split(form) = &mut self.ui.form {
            form.target_column = column;
            form.error = None;
        }
    }

    /// Validate the target and request the split of the current source file.
    pub fn split_dataset(&mut self) {
        if self.is_busy() {
            return;
        }
        let StepForm::Split(form) = &self.ui.form else {
            return;
        };
        let (Some(dataset), Some(filepath)) = (self.wizard.dataset(), self.wizard.source_path())
        else {
            return;
        };
        let test_fraction = form.test_fraction;
        let request = match SplitRequest::build(
            filepath,
            test_fraction,
            form.target_column.as_deref(),
            dataset,
        ) {
            Ok(request) => request,
            Err(err) => {
                let message = err.to_string();
                self.ui.form.set_error(Some(message.clone()));
                self.set_status(message, StatusTone::Warning);
                return;
            }
        };
        let busy = format!(
            "Splitting data ({}% test, target {})…",
            test_fraction.test_percent(),
            request.target_column
        );
        self.run_step(busy, move |service| {
            let summary = service.split(&request)?;
            Ok(StepOutput::Split(SplitOutcome {
                summary,
                target_column: request.target_column,
                test_fraction,
            }))
        });
    }
}
