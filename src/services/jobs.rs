use std::time::Duration;

use async_trait::async_trait;
use mediagrab_core::core::services::JobService;
use mediagrab_core::error::ServiceError;
use mediagrab_core::models::jobs::{JobActionRequest, JobActionResponse};
use url::Url;

use super::{endpoint, map_transport_error, rejection, StatusEnvelope};

/// `POST {base}/{action}_download/{job}`
pub struct HttpJobService {
    client: reqwest::Client,
    base: Url,
    timeout: Duration,
}

impl HttpJobService {
    pub fn new(client: reqwest::Client, base: Url, timeout: Duration) -> Self {
        Self {
            client,
            base,
            timeout,
        }
    }

    fn action_url(&self, request: &JobActionRequest) -> Result<Url, ServiceError> {
        let route = format!("{}_download", request.action.as_str());
        endpoint(&self.base, &[route.as_str(), request.job.as_str()])
    }
}

/// A 3xx reply means the action was accepted by a form-style backend that
/// redirects back to its download list; the outcome text lives in that page.
pub(crate) fn parse_action_response(status: u16, body: &str) -> Result<JobActionResponse, ServiceError> {
    if (300..400).contains(&status) {
        return Ok(JobActionResponse::ok());
    }
    if !(200..300).contains(&status) {
        return Err(rejection(status, body));
    }
    if body.trim().is_empty() {
        return Ok(JobActionResponse::ok());
    }

    let envelope: StatusEnvelope =
        serde_json::from_str(body).map_err(|e| ServiceError::Malformed(e.to_string()))?;
    Ok(JobActionResponse {
        success: !envelope.is_error(),
        message: envelope.message,
    })
}

#[async_trait]
impl JobService for HttpJobService {
    async fn submit(&self, request: &JobActionRequest) -> Result<JobActionResponse, ServiceError> {
        let url = self.action_url(request)?;
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| map_transport_error(e, self.timeout))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| map_transport_error(e, self.timeout))?;

        parse_action_response(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use mediagrab_core::models::jobs::{DownloadJobRef, JobAction};

    use super::*;
    use crate::services::parse_base_url;

    #[test]
    fn routes_follow_action_names() {
        let service = HttpJobService::new(
            reqwest::Client::new(),
            parse_base_url("http://media.local/").unwrap(),
            Duration::from_secs(5),
        );
        let cases = [
            (JobAction::Cancel, "http://media.local/cancel_download/12"),
            (JobAction::Retry, "http://media.local/retry_download/12"),
            (JobAction::Delete, "http://media.local/delete_download/12"),
        ];
        for (action, expected) in cases {
            let request = JobActionRequest {
                action,
                job: DownloadJobRef::from(12),
            };
            assert_eq!(service.action_url(&request).unwrap().as_str(), expected);
        }
    }

    #[test]
    fn success_envelope_carries_message() {
        let response =
            parse_action_response(200, r#"{"status": "success", "message": "Download cancelled"}"#)
                .unwrap();
        assert!(response.success);
        assert_eq!(response.message.as_deref(), Some("Download cancelled"));
        assert_eq!(parse_action_response(204, "").unwrap(), JobActionResponse::ok());
    }

    #[test]
    fn redirect_counts_as_accepted() {
        assert_eq!(parse_action_response(302, "").unwrap(), JobActionResponse::ok());
        assert_eq!(
            parse_action_response(303, "<a href=\"/downloads\">/downloads</a>").unwrap(),
            JobActionResponse::ok()
        );
    }

    #[test]
    fn error_envelope_is_a_failed_response() {
        let response = parse_action_response(
            200,
            r#"{"status": "error", "message": "Download is not in progress"}"#,
        )
        .unwrap();
        assert!(!response.success);
        assert_eq!(response.message.as_deref(), Some("Download is not in progress"));
    }

    #[test]
    fn non_success_status_is_rejected() {
        match parse_action_response(404, r#"{"status": "error", "message": "The requested resource was not found."}"#) {
            Err(ServiceError::Rejected { status, message }) => {
                assert_eq!(status, 404);
                assert_eq!(message, "The requested resource was not found.");
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(
            parse_action_response(200, "<html>redirect</html>"),
            Err(ServiceError::Malformed(_))
        ));
    }
}
