use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-side download job identifier. Opaque to the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DownloadJobRef(String);

impl DownloadJobRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DownloadJobRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for DownloadJobRef {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobAction {
    Cancel,
    Retry,
    Delete,
}

impl JobAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobAction::Cancel => "cancel",
            JobAction::Retry => "retry",
            JobAction::Delete => "delete",
        }
    }

    pub fn confirm_prompt(&self) -> &'static str {
        match self {
            JobAction::Cancel => "Are you sure you want to cancel this download?",
            JobAction::Retry => "Retry this download?",
            JobAction::Delete => {
                "Are you sure you want to delete this download? This cannot be undone."
            }
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            JobAction::Cancel => "Download cancelled",
            JobAction::Retry => "Download restarted",
            JobAction::Delete => "Download deleted",
        }
    }
}

impl fmt::Display for JobAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobActionRequest {
    pub action: JobAction,
    pub job: DownloadJobRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JobActionResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl JobActionResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}
