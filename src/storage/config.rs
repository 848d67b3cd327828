use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use mediagrab_core::fs_paths::AppPaths;
use mediagrab_core::models::settings::ClientSettings;

const SETTINGS_FILE: &str = "settings.json";

pub fn settings_path(paths: &dyn AppPaths) -> PathBuf {
    paths.config_dir().join(SETTINGS_FILE)
}

/// Missing or unreadable files fall back to defaults.
pub fn load_settings(path: &Path) -> ClientSettings {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => return ClientSettings::default(),
        Err(e) => {
            tracing::warn!("Could not read {}: {}", path.display(), e);
            return ClientSettings::default();
        }
    };

    serde_json::from_str(&raw).unwrap_or_else(|e| {
        tracing::warn!("Invalid settings in {}: {}", path.display(), e);
        ClientSettings::default()
    })
}

pub fn save_settings(path: &Path, settings: &ClientSettings) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}
