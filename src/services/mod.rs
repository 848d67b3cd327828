//! HTTP bindings for the download-info and job-management services.

pub mod download_info;
pub mod jobs;

use std::time::Duration;

use mediagrab_core::error::ServiceError;
use serde::Deserialize;
use url::Url;

pub use download_info::HttpDownloadInfoService;
pub use jobs::HttpJobService;

/// `{"status": "error", "message": "..."}` as returned by the backend's API
/// error handlers.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct StatusEnvelope {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl StatusEnvelope {
    pub fn is_error(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case("error"))
    }
}

pub fn parse_base_url(raw: &str) -> anyhow::Result<Url> {
    let mut url = Url::parse(raw.trim())?;
    if url.cannot_be_a_base() {
        anyhow::bail!("'{}' cannot be used as a service base URL", raw);
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

pub(crate) fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, ServiceError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| ServiceError::Malformed(format!("bad base URL {}", base)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

pub(crate) fn map_transport_error(err: reqwest::Error, timeout: Duration) -> ServiceError {
    if err.is_timeout() {
        ServiceError::Timeout(timeout)
    } else {
        ServiceError::Unreachable(err.to_string())
    }
}

/// Message for a non-2xx reply: the envelope's message if the body has one,
/// else the trimmed body, else a generic line.
pub(crate) fn rejection(status: u16, body: &str) -> ServiceError {
    let message = serde_json::from_str::<StatusEnvelope>(body)
        .ok()
        .and_then(|e| e.message)
        .or_else(|| {
            let trimmed = body.trim();
            (!trimmed.is_empty() && trimmed.len() <= 200).then(|| trimmed.to_string())
        })
        .unwrap_or_else(|| "request failed".to_string());
    ServiceError::Rejected { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gets_trailing_slash() {
        let base = parse_base_url("http://media.local:5000/app").unwrap();
        assert_eq!(base.as_str(), "http://media.local:5000/app/");
        assert!(parse_base_url("mailto:someone@example.com").is_err());
        assert!(parse_base_url("not a url").is_err());
    }

    #[test]
    fn endpoint_appends_encoded_segments() {
        let base = parse_base_url("http://media.local/app/").unwrap();
        let url = endpoint(&base, &["cancel_download", "a b/c"]).unwrap();
        assert_eq!(url.as_str(), "http://media.local/app/cancel_download/a%20b%2Fc");
    }

    #[test]
    fn rejection_prefers_envelope_message() {
        match rejection(403, r#"{"status": "error", "message": "Access denied"}"#) {
            ServiceError::Rejected { status, message } => {
                assert_eq!(status, 403);
                assert_eq!(message, "Access denied");
            }
            other => panic!("unexpected {:?}", other),
        }
        match rejection(502, "") {
            ServiceError::Rejected { message, .. } => assert_eq!(message, "request failed"),
            other => panic!("unexpected {:?}", other),
        }
    }
}
