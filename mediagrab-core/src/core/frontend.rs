use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::core::dispatcher::{ActionDispatcher, DispatchOutcome};
use crate::core::events::{Notice, UiSurface};
use crate::core::preferences::PreferenceStore;
use crate::core::resolver::{QualityResolver, Resolution};
use crate::models::jobs::{DownloadJobRef, JobAction};
use crate::models::theme::ThemePreference;
use crate::platforms::{classify_with, MatchMode};

/// Routes UI events to the classifier, resolver, preference store and
/// dispatcher. Holds no widget state of its own.
pub struct Frontend<U: UiSurface> {
    ui: U,
    resolver: Arc<QualityResolver>,
    dispatcher: ActionDispatcher,
    preferences: Arc<PreferenceStore>,
    match_mode: MatchMode,
}

impl<U: UiSurface> Frontend<U> {
    pub fn new(
        ui: U,
        resolver: QualityResolver,
        dispatcher: ActionDispatcher,
        preferences: Arc<PreferenceStore>,
        match_mode: MatchMode,
    ) -> Self {
        Self {
            ui,
            resolver: Arc::new(resolver),
            dispatcher,
            preferences,
            match_mode,
        }
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    /// Applies the stored theme. Call once when the surface is ready.
    pub fn start(&self) -> ThemePreference {
        let theme = self.preferences.theme();
        self.ui.apply_theme(theme);
        theme
    }

    /// Classifies `raw` and, for video-sharing URLs, starts a quality lookup in
    /// the background. Returns the lookup handle; dropping it does not stop the
    /// lookup.
    pub fn on_url_input(&self, raw: &str) -> Option<JoinHandle<Resolution>> {
        let detection = classify_with(raw, self.match_mode);
        self.ui.show_detection(detection);

        match detection.platform() {
            Some(platform) if platform.supports_quality_selection() => {
                let token = self.resolver.begin();
                let resolver = self.resolver.clone();
                let ui = self.ui.clone();
                let url = raw.trim().to_string();
                tracing::debug!("Quality lookup #{} started for {} ({})", token, url, platform);
                Some(tokio::spawn(async move {
                    resolver.resolve_into(token, &url, &ui).await
                }))
            }
            _ => {
                self.resolver.invalidate_into(&self.ui);
                None
            }
        }
    }

    pub fn theme(&self) -> ThemePreference {
        self.preferences.theme()
    }

    pub fn on_theme_selected(&self, theme: ThemePreference) {
        if let Err(e) = self.preferences.set_theme(theme) {
            self.ui.notify(&Notice::warning(format!(
                "Theme applied for this session only: {}",
                e
            )));
        }
        self.ui.apply_theme(theme);
    }

    pub async fn on_job_action(&self, action: JobAction, job: &DownloadJobRef) -> DispatchOutcome {
        self.dispatcher.dispatch(action, job, &self.ui).await
    }
}
