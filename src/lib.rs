use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use mediagrab_core::fs_paths::{AppPaths, DesktopPaths, FixedPaths};
use mediagrab_core::models::settings::ClientSettings;
use mediagrab_core::{ActionDispatcher, Frontend, PreferenceStore, QualityResolver};
use tokio_util::sync::CancellationToken;

pub mod cli;
pub mod core;
pub mod logging;
pub mod services;
pub mod storage;
pub mod terminal;

use services::{parse_base_url, HttpDownloadInfoService, HttpJobService};
use storage::JsonFileStore;
use terminal::{LineSource, TerminalSurface};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

fn resolve_paths(cli: &cli::Cli) -> Box<dyn AppPaths> {
    match &cli.config_dir {
        Some(dir) => Box::new(FixedPaths(dir.clone())),
        None => Box::new(DesktopPaths),
    }
}

fn load_or_init_settings(paths: &dyn AppPaths) -> ClientSettings {
    let path = storage::config::settings_path(paths);
    if path.exists() {
        return storage::config::load_settings(&path);
    }
    let settings = ClientSettings::default();
    match storage::config::save_settings(&path, &settings) {
        Ok(()) => tracing::info!("Wrote default settings to {}", path.display()),
        Err(e) => tracing::warn!("Could not write default settings to {}: {}", path.display(), e),
    }
    settings
}

/// Wires the HTTP services, the preference file and the terminal surface
/// into a [`Frontend`].
pub fn build_frontend(
    settings: &ClientSettings,
    paths: &dyn AppPaths,
    input: LineSource,
) -> anyhow::Result<Frontend<TerminalSurface>> {
    let client = core::http_client::build_client(&settings.proxy, CONNECT_TIMEOUT)?;
    let services = &settings.services;

    let info = HttpDownloadInfoService::new(
        client,
        parse_base_url(&services.info_base_url)?,
        services.info_timeout(),
    );
    let jobs = HttpJobService::new(
        core::http_client::build_action_client(&settings.proxy, CONNECT_TIMEOUT)?,
        parse_base_url(&services.jobs_base_url)?,
        services.action_timeout(),
    );

    let store = JsonFileStore::in_config_dir(paths);
    tracing::debug!("Preferences stored in {}", store.path().display());

    Ok(Frontend::new(
        TerminalSurface::stdout(input),
        QualityResolver::new(Arc::new(info), services.info_timeout()),
        ActionDispatcher::new(Arc::new(jobs), services.action_timeout()),
        Arc::new(PreferenceStore::new(Arc::new(store))),
        settings.classifier.match_mode,
    ))
}

pub fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    logging::init_logging(cli.verbose);

    let paths = resolve_paths(&cli);
    let mut settings = load_or_init_settings(paths.as_ref());
    cli.apply(&mut settings);
    tracing::debug!(
        "info service {}, job service {}",
        settings.services.info_base_url,
        settings.services.jobs_base_url
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async move {
        let input = LineSource::stdin();
        let frontend = build_frontend(&settings, paths.as_ref(), input.clone())?;

        let shutdown = CancellationToken::new();
        let on_ctrl_c = shutdown.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Interrupted");
                on_ctrl_c.cancel();
            }
        });

        tokio::spawn(terminal::run_loop(frontend, input, shutdown)).await?
    })?;

    // The stdin reader may still be parked on a read.
    runtime.shutdown_timeout(Duration::from_millis(100));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_run_writes_default_settings() {
        let dir = tempfile::tempdir().unwrap();
        let paths = FixedPaths(dir.path().to_path_buf());

        let settings = load_or_init_settings(&paths);
        assert_eq!(settings.services.action_timeout_secs, 15);
        assert!(storage::config::settings_path(&paths).exists());
    }

    #[test]
    fn frontend_builds_from_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let paths = FixedPaths(dir.path().to_path_buf());
        let (_tx, input) = LineSource::channel();

        assert!(build_frontend(&ClientSettings::default(), &paths, input).is_ok());
    }

    #[test]
    fn bad_service_url_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let paths = FixedPaths(dir.path().to_path_buf());
        let (_tx, input) = LineSource::channel();
        let mut settings = ClientSettings::default();
        settings.services.jobs_base_url = "not a url".into();

        assert!(build_frontend(&settings, &paths, input).is_err());
    }
}
