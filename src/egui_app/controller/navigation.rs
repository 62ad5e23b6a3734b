use super::*;

const EXPORT_PLACEHOLDER: &str = "Export feature coming soon!";

impl EguiController {
    pub fn can_go_back(&self) -> bool {
        !self.is_busy() && self.current_step().can_go_back()
    }

    /// Re-enter the previous step with its earlier output intact.
    pub fn go_back(&mut self) {
        if self.is_busy() {
            return;
        }
        match self.wizard.go_back() {
            Ok(()) => {
                self.enter_current_step();
                let step = self.current_step();
                self.set_status(format!("Back to {}", step.title()), StatusTone::Info);
            }
            Err(err) => tracing::debug!("Ignored back navigation: {err}"),
        }
    }

    /// Whether the current step can move on with the output it kept.
    pub fn can_resume(&self) -> bool {
        !self.is_busy() && self.wizard.retained_output().is_some()
    }

    /// Move forward again with the output kept from an earlier visit. No request is made.
    pub fn resume_previous(&mut self) {
        if self.is_busy() {
            return;
        }
        let Some(output) = self.wizard.retained_output() else {
            return;
        };
        if self.complete_step(output) {
            let step = self.current_step();
            self.set_status(format!("Continued to {}", step.title()), StatusTone::Info);
        }
    }

    /// Drop every step output and return to Upload.
    pub fn start_new_pipeline(&mut self) {
        if self.is_busy() {
            return;
        }
        self.wizard.reset();
        self.enter_current_step();
        tracing::info!("Pipeline reset");
        self.set_status("Started a new pipeline", StatusTone::Idle);
    }

    /// Results export is not available yet; only a notice is shown.
    pub fn export_results(&mut self) {
        if let StepForm::Results(form) = &mut self.ui.form {
            form.notice = Some(EXPORT_PLACEHOLDER.to_string());
            self.set_status(EXPORT_PLACEHOLDER, StatusTone::Info);
        }
    }

    /// Open the log folder in the system file browser.
    pub fn open_logs_folder(&mut self) {
        let path = match crate::app_dirs::logs_dir() {
            Ok(path) => path,
            Err(err) => {
                self.set_status(format!("Logs unavailable: {err}"), StatusTone::Error);
                return;
            }
        };
        if let Err(err) = open::that(&path) {
            self.set_status(
                format!("Could not open {}: {err}", path.display()),
                StatusTone::Error,
            );
        }
    }
}
