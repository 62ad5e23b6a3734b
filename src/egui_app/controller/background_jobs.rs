use super::jobs::{HealthCheckResult, JobMessage, StepJobResult};
use super::*;

impl EguiController {
    pub(in crate::egui_app::controller) fn poll_background_jobs(&mut self) {
        loop {
            let message = match self.jobs.try_recv_message() {
                Ok(message) => message,
                Err(
                    std::sync::mpsc::TryRecvError::Empty
                    | std::sync::mpsc::TryRecvError::Disconnected,
                ) => {
                    break;
                }
            };

            match message {
                JobMessage::StepFinished(message) => self.handle_step_finished(message),
                JobMessage::HealthChecked(message) => self.handle_health_checked(message),
            }
        }
    }

    fn handle_step_finished(&mut self, message: StepJobResult) {
        let Some(pending) = self.jobs.pending_step() else {
            tracing::debug!("Dropping result of request {} with nothing pending", message.request_id);
            return;
        };
        if pending.request_id != message.request_id || pending.step != message.step {
            tracing::debug!(
                "Dropping stale result of request {} (pending {})",
                message.request_id,
                pending.request_id
            );
            return;
        }
        self.jobs.clear_pending_step();
        self.ui.busy = None;
        match message.result {
            Ok(output) => {
                let status = success_status(&output);
                if self.complete_step(output) {
                    self.set_status(status, StatusTone::Info);
                }
            }
            Err(err) => {
                let status = format!("{} failed: {err}", failure_prefix(message.step));
                self.show_step_error(err.to_string(), status);
            }
        }
    }

    fn handle_health_checked(&mut self, message: HealthCheckResult) {
        self.jobs.clear_health_check();
        self.ui.health = match message.result {
            Ok(health) if health.is_ok() => {
                tracing::info!("Pipeline service is online");
                ServiceHealthState::Online(health.message)
            }
            Ok(health) => {
                tracing::warn!("Pipeline service reported status {:?}", health.status);
                ServiceHealthState::Unreachable(format!("Service status: {}", health.status))
            }
            Err(err) => {
                tracing::warn!("Pipeline service health check failed: {err}");
                ServiceHealthState::Unreachable(err.to_string())
            }
        };
    }
}

fn success_status(output: &StepOutput) -> String {
    match output {
        StepOutput::Uploaded(upload) => format!(
            "Dataset uploaded: {} rows, {} columns",
            upload.dataset.row_count, upload.dataset.column_count
        ),
        StepOutput::Preprocessed(_) => "Preprocessing applied successfully!".to_string(),
        StepOutput::Split(split) => format!(
            "Data split successfully! Training: {} samples, Testing: {} samples",
            split.summary.train_size, split.summary.test_size
        ),
        StepOutput::Trained(_) => "Model trained successfully!".to_string(),
    }
}

fn failure_prefix(step: WizardStep) -> &'static str {
    match step {
        WizardStep::Upload => "Upload",
        WizardStep::Preprocess => "Preprocessing",
        WizardStep::Split => "Split",
        WizardStep::ModelSelect | WizardStep::Results => "Training",
    }
}
