use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::core::events::{Notice, UiSurface};
use crate::core::services::DownloadInfoService;
use crate::error::ServiceError;
use crate::models::quality::{self, QualityOption};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Ready(Vec<QualityOption>),
    Degraded {
        options: Vec<QualityOption>,
        reason: String,
    },
    /// A newer classification arrived before this lookup finished.
    Superseded,
}

/// Looks up qualities for video-sharing URLs. Results are applied only if no
/// newer request was issued in the meantime; stale lookups run to completion
/// and are then dropped.
///
/// `latest` is held while a result is painted, so a newer `begin` or
/// `invalidate` cannot slip in between the currency check and the UI update.
pub struct QualityResolver {
    service: Arc<dyn DownloadInfoService>,
    latest: Mutex<u64>,
    timeout: Duration,
}

impl QualityResolver {
    pub fn new(service: Arc<dyn DownloadInfoService>, timeout: Duration) -> Self {
        Self {
            service,
            latest: Mutex::new(0),
            timeout,
        }
    }

    /// Takes the next request token. Must be called at input time, before the
    /// lookup is spawned, so ordering follows the user's input.
    pub fn begin(&self) -> u64 {
        let mut latest = self.lock_latest();
        *latest += 1;
        *latest
    }

    /// Supersedes every pending lookup without starting a new one.
    pub fn invalidate(&self) {
        *self.lock_latest() += 1;
    }

    /// Supersedes pending lookups and empties the selector as one step.
    pub fn invalidate_into<U: UiSurface>(&self, ui: &U) {
        let mut latest = self.lock_latest();
        *latest += 1;
        ui.clear_qualities();
    }

    pub fn is_current(&self, token: u64) -> bool {
        *self.lock_latest() == token
    }

    fn lock_latest(&self) -> MutexGuard<'_, u64> {
        self.latest.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub async fn resolve(&self, token: u64, url: &str) -> Resolution {
        let fetched = tokio::time::timeout(self.timeout, self.service.qualities(url)).await;

        if !self.is_current(token) {
            tracing::debug!("Discarding stale quality lookup #{} for {}", token, url);
            return Resolution::Superseded;
        }

        let labels = match fetched {
            Ok(Ok(labels)) => labels,
            Ok(Err(e)) => return degraded(url, e),
            Err(_) => return degraded(url, ServiceError::Timeout(self.timeout)),
        };

        let options = quality::options_from_labels(labels);
        if options.is_empty() {
            return degraded(url, ServiceError::Malformed("empty quality list".into()));
        }

        tracing::debug!("Resolved {} qualities for {}", options.len(), url);
        Resolution::Ready(options)
    }

    pub async fn resolve_into<U: UiSurface>(&self, token: u64, url: &str, ui: &U) -> Resolution {
        let resolution = self.resolve(token, url).await;
        let latest = self.lock_latest();
        if *latest != token {
            tracing::debug!("Quality lookup #{} superseded before display", token);
            return Resolution::Superseded;
        }

        match &resolution {
            Resolution::Ready(options) => ui.show_qualities(options),
            Resolution::Degraded { options, reason } => {
                ui.show_qualities(options);
                ui.notify(&Notice::warning(format!(
                    "Could not load qualities ({}); using defaults",
                    reason
                )));
            }
            Resolution::Superseded => {}
        }
        drop(latest);
        resolution
    }
}

fn degraded(url: &str, err: ServiceError) -> Resolution {
    tracing::warn!("Quality lookup failed for {}: {}", url, err);
    Resolution::Degraded {
        options: quality::fallback_options(),
        reason: err.to_string(),
    }
}
