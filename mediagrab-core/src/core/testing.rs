use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::core::events::{Notice, UiSurface};
use crate::core::services::{DownloadInfoService, JobService};
use crate::core::store::KeyValueStore;
use crate::error::{ServiceError, StoreError};
use crate::models::jobs::{DownloadJobRef, JobAction, JobActionRequest, JobActionResponse};
use crate::models::quality::QualityOption;
use crate::models::theme::ThemePreference;
use crate::platforms::Detection;

#[derive(Debug, Default)]
pub struct Recorded {
    pub detections: Vec<Detection>,
    pub quality_lists: Vec<Vec<String>>,
    pub clears: usize,
    pub notices: Vec<Notice>,
    pub themes: Vec<ThemePreference>,
    pub prompts: Vec<String>,
    pub alerts: Vec<Notice>,
}

#[derive(Clone)]
pub struct RecordingSurface {
    pub recorded: Arc<Mutex<Recorded>>,
    answer: bool,
}

impl RecordingSurface {
    pub fn confirming(answer: bool) -> Self {
        Self {
            recorded: Arc::new(Mutex::new(Recorded::default())),
            answer,
        }
    }

    pub fn snapshot<T>(&self, f: impl FnOnce(&Recorded) -> T) -> T {
        f(&self.recorded.lock().unwrap())
    }

    pub fn widget(&self) -> Option<Vec<String>> {
        self.snapshot(|r| r.quality_lists.last().cloned())
    }
}

impl UiSurface for RecordingSurface {
    fn show_detection(&self, detection: Detection) {
        self.recorded.lock().unwrap().detections.push(detection);
    }

    fn show_qualities(&self, options: &[QualityOption]) {
        let labels = options.iter().map(|o| o.label.clone()).collect();
        self.recorded.lock().unwrap().quality_lists.push(labels);
    }

    fn clear_qualities(&self) {
        self.recorded.lock().unwrap().clears += 1;
    }

    fn notify(&self, notice: &Notice) {
        self.recorded.lock().unwrap().notices.push(notice.clone());
    }

    fn apply_theme(&self, theme: ThemePreference) {
        self.recorded.lock().unwrap().themes.push(theme);
    }

    fn confirm(&self, prompt: &str) -> bool {
        self.recorded.lock().unwrap().prompts.push(prompt.to_string());
        self.answer
    }

    fn alert(&self, notice: &Notice) {
        self.recorded.lock().unwrap().alerts.push(notice.clone());
    }
}

pub fn labels(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Returns the same answer for every URL.
pub struct StaticInfoService {
    answer: Result<Vec<String>, ServiceError>,
    delay: Option<Duration>,
}

impl StaticInfoService {
    pub fn ok(list: &[&str]) -> Self {
        Self {
            answer: Ok(labels(list)),
            delay: None,
        }
    }

    pub fn failing(err: ServiceError) -> Self {
        Self {
            answer: Err(err),
            delay: None,
        }
    }

    pub fn slow(list: &[&str], delay: Duration) -> Self {
        Self {
            answer: Ok(labels(list)),
            delay: Some(delay),
        }
    }
}

#[async_trait]
impl DownloadInfoService for StaticInfoService {
    async fn qualities(&self, _url: &str) -> Result<Vec<String>, ServiceError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.answer.clone()
    }
}

/// Each URL waits until the test releases its answer.
#[derive(Default)]
pub struct GatedInfoService {
    gates: Mutex<HashMap<String, oneshot::Receiver<Vec<String>>>>,
}

impl GatedInfoService {
    pub fn gate(&self, url: &str) -> oneshot::Sender<Vec<String>> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(url.to_string(), rx);
        tx
    }
}

#[async_trait]
impl DownloadInfoService for GatedInfoService {
    async fn qualities(&self, url: &str) -> Result<Vec<String>, ServiceError> {
        let gate = self.gates.lock().unwrap().remove(url);
        match gate {
            Some(rx) => rx
                .await
                .map_err(|_| ServiceError::Unreachable("gate dropped".into())),
            None => Err(ServiceError::Malformed(format!("no gate for {}", url))),
        }
    }
}

/// Job service that keeps per-job state so repeated actions can be observed.
#[derive(Default)]
pub struct RecordingJobService {
    pub requests: Mutex<Vec<JobActionRequest>>,
    pub cancelled: Mutex<HashSet<DownloadJobRef>>,
    pub side_effects: Mutex<usize>,
    pub reject_with: Option<String>,
    pub hang: bool,
}

impl RecordingJobService {
    pub fn rejecting(message: &str) -> Self {
        Self {
            reject_with: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn hanging() -> Self {
        Self {
            hang: true,
            ..Self::default()
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn side_effect_count(&self) -> usize {
        *self.side_effects.lock().unwrap()
    }
}

#[async_trait]
impl JobService for RecordingJobService {
    async fn submit(&self, request: &JobActionRequest) -> Result<JobActionResponse, ServiceError> {
        self.requests.lock().unwrap().push(request.clone());
        if self.hang {
            std::future::pending::<()>().await;
        }
        if let Some(message) = &self.reject_with {
            return Ok(JobActionResponse::failed(message.clone()));
        }
        if request.action == JobAction::Cancel
            && self.cancelled.lock().unwrap().insert(request.job.clone())
        {
            *self.side_effects.lock().unwrap() += 1;
        }
        Ok(JobActionResponse::ok())
    }
}

pub struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable("disk on fire".into()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("disk on fire".into()))
    }
}
