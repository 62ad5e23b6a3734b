use super::*;

impl EguiController {
    /// Probe the service root in the background.
    pub fn check_service_health(&mut self) {
        if self.jobs.health_check_in_progress() {
            return;
        }
        self.ui.health = ServiceHealthState::Checking;
        self.jobs.begin_health_check(Arc::clone(&self.service));
    }
}
