use std::time::Duration;

use async_trait::async_trait;
use mediagrab_core::core::services::DownloadInfoService;
use mediagrab_core::error::ServiceError;
use mediagrab_core::models::quality;
use serde::Deserialize;
use url::Url;

use super::{endpoint, map_transport_error, rejection, StatusEnvelope};

/// `GET {base}/api/qualities?url=<media url>`
pub struct HttpDownloadInfoService {
    client: reqwest::Client,
    base: Url,
    timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct QualitiesResponse {
    #[serde(flatten)]
    envelope: StatusEnvelope,
    #[serde(default)]
    qualities: Option<Vec<String>>,
    #[serde(default)]
    resolutions: Option<Vec<u32>>,
}

impl HttpDownloadInfoService {
    pub fn new(client: reqwest::Client, base: Url, timeout: Duration) -> Self {
        Self {
            client,
            base,
            timeout,
        }
    }

    fn lookup_url(&self, media_url: &str) -> Result<Url, ServiceError> {
        let mut url = endpoint(&self.base, &["api", "qualities"])?;
        url.query_pairs_mut().append_pair("url", media_url);
        Ok(url)
    }
}

/// Accepts either ready-made labels or raw stream heights; labels win when
/// both are present.
pub(crate) fn parse_qualities_response(status: u16, body: &str) -> Result<Vec<String>, ServiceError> {
    if !(200..300).contains(&status) {
        return Err(rejection(status, body));
    }

    let parsed: QualitiesResponse =
        serde_json::from_str(body).map_err(|e| ServiceError::Malformed(e.to_string()))?;

    if parsed.envelope.is_error() {
        return Err(ServiceError::Rejected {
            status,
            message: parsed
                .envelope
                .message
                .unwrap_or_else(|| "lookup failed".to_string()),
        });
    }

    match (parsed.qualities, parsed.resolutions) {
        (Some(labels), _) => Ok(labels),
        (None, Some(heights)) => Ok(quality::labels_from_heights(&heights)),
        (None, None) => Err(ServiceError::Malformed(
            "response has neither qualities nor resolutions".to_string(),
        )),
    }
}

#[async_trait]
impl DownloadInfoService for HttpDownloadInfoService {
    async fn qualities(&self, url: &str) -> Result<Vec<String>, ServiceError> {
        let lookup = self.lookup_url(url)?;
        tracing::debug!("GET {}", lookup);

        let response = self
            .client
            .get(lookup)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| map_transport_error(e, self.timeout))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| map_transport_error(e, self.timeout))?;

        parse_qualities_response(status, &body)
    }
}
