use std::sync::{Arc, RwLock};

use crate::core::store::KeyValueStore;
use crate::error::StoreError;
use crate::models::theme::ThemePreference;

pub const THEME_KEY: &str = "theme";

/// Owns the persisted theme. The value is read from the backing store on first
/// access and cached; writes go to both.
pub struct PreferenceStore {
    store: Arc<dyn KeyValueStore>,
    theme: RwLock<Option<ThemePreference>>,
}

impl PreferenceStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            theme: RwLock::new(None),
        }
    }

    pub fn theme(&self) -> ThemePreference {
        if let Some(theme) = self.theme.read().ok().and_then(|g| *g) {
            return theme;
        }

        let loaded = self.load_theme();
        match self.theme.write() {
            Ok(mut guard) => *guard.get_or_insert(loaded),
            Err(_) => loaded,
        }
    }

    /// The in-memory value always changes; the error only reports that it
    /// will not survive a restart.
    pub fn set_theme(&self, theme: ThemePreference) -> Result<(), StoreError> {
        if let Ok(mut guard) = self.theme.write() {
            *guard = Some(theme);
        }

        self.store.set(THEME_KEY, theme.as_str()).map_err(|e| {
            tracing::warn!("Failed to persist theme '{}': {}", theme, e);
            e
        })
    }

    fn load_theme(&self) -> ThemePreference {
        match self.store.get(THEME_KEY) {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!("Ignoring stored theme: {}", e);
                ThemePreference::default()
            }),
            Ok(None) => ThemePreference::default(),
            Err(e) => {
                tracing::warn!("Preference store unavailable, using default theme: {}", e);
                ThemePreference::default()
            }
        }
    }
}
