use super::*;
use crate::pipeline::{UploadFormat, UploadRequest};
use rfd::FileDialog;
use std::path::PathBuf;

impl EguiController {
    /// Pick a dataset with the native file dialog and upload it.
    pub fn upload_via_dialog(&mut self) {
        if !self.can_upload() {
            return;
        }
        let Some(path) = FileDialog::new()
            .set_title("Choose a dataset")
            .add_filter("Datasets", &UploadFormat::dialog_extensions())
            .pick_file()
        else {
            return;
        };
        self.upload_file(path);
    }

    /// Upload the first of the files dropped onto the window.
    pub fn upload_dropped_files(&mut self, paths: Vec<PathBuf>) {
        let Some(first) = paths.into_iter().next() else {
            return;
        };
        self.upload_file(first);
    }

    /// Validate `path` and send it to the service in one request.
    pub fn upload_file(&mut self, path: PathBuf) {
        if !self.can_upload() {
            return;
        }
        let request = match UploadRequest::for_path(path) {
            Ok(request) => request,
            Err(err) => {
                tracing::info!("Rejected upload: {err}");
                let message = err.to_string();
                self.ui.form.set_error(Some(message.clone()));
                self.set_status(message, StatusTone::Warning);
                return;
            }
        };
        let busy = format!("Uploading {}…", request.file_name());
        self.run_step(busy, move |service| {
            service.upload(&request).map(StepOutput::Uploaded)
        });
    }

    pub fn can_upload(&self) -> bool {
        self.current_step() == WizardStep::Upload && !self.is_busy()
    }
}
