use serde::Serialize;

use crate::models::quality::QualityOption;
use crate::models::theme::ThemePreference;
use crate::platforms::Detection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }
}

/// Presentation side of the application. Implementations own their widgets;
/// the core only tells them what to show.
pub trait UiSurface: Send + Sync + Clone + 'static {
    fn show_detection(&self, detection: Detection);

    /// Replaces the whole quality selector with `options`, in order.
    fn show_qualities(&self, options: &[QualityOption]);

    fn clear_qualities(&self);

    /// Non-blocking status message.
    fn notify(&self, notice: &Notice);

    fn apply_theme(&self, theme: ThemePreference);

    /// Blocking yes/no prompt.
    fn confirm(&self, prompt: &str) -> bool;

    /// Blocking message the user has to acknowledge.
    fn alert(&self, notice: &Notice);
}
