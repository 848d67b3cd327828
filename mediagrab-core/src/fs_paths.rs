use std::path::PathBuf;

pub trait AppPaths: Send + Sync {
    fn config_dir(&self) -> PathBuf;
}

pub struct DesktopPaths;

impl AppPaths for DesktopPaths {
    fn config_dir(&self) -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("mediagrab"))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Pinned to an explicit directory, e.g. from `--config-dir`.
pub struct FixedPaths(pub PathBuf);

impl AppPaths for FixedPaths {
    fn config_dir(&self) -> PathBuf {
        self.0.clone()
    }
}
