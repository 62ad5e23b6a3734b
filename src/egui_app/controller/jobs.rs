use crate::pipeline::{PipelineService, ServiceError, ServiceHealth, StepOutput, WizardStep};
use std::{
    sync::{
        Arc,
        mpsc::{Receiver, Sender},
    },
    thread,
};

type TryRecvError = std::sync::mpsc::TryRecvError;

pub(crate) enum JobMessage {
    StepFinished(StepJobResult),
    HealthChecked(HealthCheckResult),
}

#[derive(Debug)]
pub(crate) struct StepJobResult {
    pub(crate) request_id: u64,
    pub(crate) step: WizardStep,
    pub(crate) result: Result<StepOutput, ServiceError>,
}

#[derive(Debug)]
pub(crate) struct HealthCheckResult {
    pub(crate) result: Result<ServiceHealth, ServiceError>,
}

/// The one step request allowed in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PendingStep {
    pub(crate) request_id: u64,
    pub(crate) step: WizardStep,
}

pub(crate) struct ControllerJobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    pending_step: Option<PendingStep>,
    next_request_id: u64,
    health_check_in_progress: bool,
}

impl ControllerJobs {
    pub(super) fn new() -> Self {
        let (message_tx, message_rx) = std::sync::mpsc::channel::<JobMessage>();
        Self {
            message_tx,
            message_rx,
            pending_step: None,
            next_request_id: 1,
            health_check_in_progress: false,
        }
    }

    pub(super) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    #[cfg(test)]
    pub(super) fn message_sender(&self) -> Sender<JobMessage> {
        self.message_tx.clone()
    }

    pub(super) fn step_pending(&self) -> bool {
        self.pending_step.is_some()
    }

    pub(super) fn pending_step(&self) -> Option<PendingStep> {
        self.pending_step
    }

    pub(super) fn clear_pending_step(&mut self) {
        self.pending_step = None;
    }

    fn next_request_id(&mut self) -> u64 {
        let request_id = self.next_request_id;
        self.next_request_id = self.next_request_id.wrapping_add(1).max(1);
        request_id
    }

    /// Run `work` on a worker thread. Returns `None` if a step is already running.
    pub(super) fn begin_step<F>(
        &mut self,
        step: WizardStep,
        service: Arc<dyn PipelineService>,
        work: F,
    ) -> Option<u64>
    where
        F: FnOnce(&dyn PipelineService) -> Result<StepOutput, ServiceError> + Send + 'static,
    {
        if self.pending_step.is_some() {
            return None;
        }
        let request_id = self.next_request_id();
        self.pending_step = Some(PendingStep { request_id, step });
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = work(service.as_ref());
            let _ = tx.send(JobMessage::StepFinished(StepJobResult {
                request_id,
                step,
                result,
            }));
        });
        Some(request_id)
    }

    pub(super) fn health_check_in_progress(&self) -> bool {
        self.health_check_in_progress
    }

    pub(super) fn begin_health_check(&mut self, service: Arc<dyn PipelineService>) {
        if self.health_check_in_progress {
            return;
        }
        self.health_check_in_progress = true;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = service.health();
            let _ = tx.send(JobMessage::HealthChecked(HealthCheckResult { result }));
        });
    }

    pub(super) fn clear_health_check(&mut self) {
        self.health_check_in_progress = false;
    }
}
