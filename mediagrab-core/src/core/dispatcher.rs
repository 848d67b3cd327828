use std::sync::Arc;
use std::time::Duration;

use crate::core::events::{Notice, UiSurface};
use crate::core::services::JobService;
use crate::error::ServiceError;
use crate::models::jobs::{DownloadJobRef, JobAction, JobActionRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The user said no; nothing was sent.
    Declined,
    Succeeded(String),
    Failed(String),
}

/// Confirm-then-send for job actions. One attempt per confirmed action,
/// bounded by `timeout`.
pub struct ActionDispatcher {
    service: Arc<dyn JobService>,
    timeout: Duration,
}

impl ActionDispatcher {
    pub fn new(service: Arc<dyn JobService>, timeout: Duration) -> Self {
        Self { service, timeout }
    }

    pub async fn cancel<U: UiSurface>(&self, job: &DownloadJobRef, ui: &U) -> DispatchOutcome {
        self.dispatch(JobAction::Cancel, job, ui).await
    }

    pub async fn retry<U: UiSurface>(&self, job: &DownloadJobRef, ui: &U) -> DispatchOutcome {
        self.dispatch(JobAction::Retry, job, ui).await
    }

    pub async fn delete<U: UiSurface>(&self, job: &DownloadJobRef, ui: &U) -> DispatchOutcome {
        self.dispatch(JobAction::Delete, job, ui).await
    }

    pub async fn dispatch<U: UiSurface>(
        &self,
        action: JobAction,
        job: &DownloadJobRef,
        ui: &U,
    ) -> DispatchOutcome {
        if !ui.confirm(action.confirm_prompt()) {
            tracing::info!("{} of job {} declined by user", action, job);
            return DispatchOutcome::Declined;
        }

        let request = JobActionRequest {
            action,
            job: job.clone(),
        };
        tracing::info!("Sending {} for job {}", action, job);

        let outcome = match tokio::time::timeout(self.timeout, self.service.submit(&request)).await {
            Ok(Ok(response)) if response.success => DispatchOutcome::Succeeded(
                response
                    .message
                    .unwrap_or_else(|| action.success_message().to_string()),
            ),
            Ok(Ok(response)) => DispatchOutcome::Failed(
                response
                    .message
                    .unwrap_or_else(|| format!("Could not {} download {}", action, job)),
            ),
            Ok(Err(e)) => DispatchOutcome::Failed(format!("Could not {} download {}: {}", action, job, e)),
            Err(_) => DispatchOutcome::Failed(format!(
                "Could not {} download {}: {}",
                action,
                job,
                ServiceError::Timeout(self.timeout)
            )),
        };

        match &outcome {
            DispatchOutcome::Succeeded(message) => ui.alert(&Notice::success(message.clone())),
            DispatchOutcome::Failed(message) => {
                tracing::error!("{} failed for job {}: {}", action, job, message);
                ui.alert(&Notice::error(message.clone()));
            }
            DispatchOutcome::Declined => {}
        }
        outcome
    }
}
