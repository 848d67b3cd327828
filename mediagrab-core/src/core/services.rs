use async_trait::async_trait;

use crate::error::ServiceError;
use crate::models::jobs::{JobActionRequest, JobActionResponse};

#[async_trait]
pub trait DownloadInfoService: Send + Sync {
    /// Quality labels available for `url`, best first.
    async fn qualities(&self, url: &str) -> Result<Vec<String>, ServiceError>;
}

#[async_trait]
pub trait JobService: Send + Sync {
    async fn submit(&self, request: &JobActionRequest) -> Result<JobActionResponse, ServiceError>;
}
