use tracing_subscriber::EnvFilter;

fn default_directives(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "info,mediagrab=debug",
        1 => "debug",
        _ => "trace",
    }
}

/// Logs go to stderr so they never interleave with prompts on stdout.
/// `RUST_LOG` overrides the verbosity flags.
pub fn init_logging(verbosity: u8) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if installed.is_ok() {
        tracing::debug!("logging initialized");
    }
}
