//! Terminal front end: reads lines, turns them into form events and renders
//! the results.

pub mod command;
pub mod input;
pub mod surface;

use mediagrab_core::core::events::{Notice, NoticeLevel, UiSurface};
use mediagrab_core::Frontend;
use tokio_util::sync::CancellationToken;

use command::Command;
pub use input::LineSource;
pub use surface::TerminalSurface;

/// Runs until `:quit`, end of input or `shutdown`.
pub async fn run_loop(
    frontend: Frontend<TerminalSurface>,
    input: LineSource,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let ui = frontend.ui().clone();
    frontend.start();
    ui.write_line("Paste a media link, or :help for commands");

    loop {
        ui.prompt();
        let line = tokio::select! {
            _ = shutdown.cancelled() => {
                tracing::debug!("shutdown requested");
                break;
            }
            line = input.next_line() => line,
        };
        let Some(line) = line else {
            tracing::debug!("input closed");
            break;
        };

        match command::parse(&line) {
            Ok(Command::Url(url)) => {
                // The lookup reports back through the surface on its own.
                let _ = frontend.on_url_input(&url);
            }
            Ok(Command::ShowTheme) => ui.write_line(&format!(
                "Theme: {} (choose light, dark or system)",
                frontend.theme().label()
            )),
            Ok(Command::SetTheme(theme)) => frontend.on_theme_selected(theme),
            Ok(Command::Job(action, job)) => {
                let outcome = frontend.on_job_action(action, &job).await;
                tracing::debug!("{} {}: {:?}", action, job, outcome);
            }
            Ok(Command::Help) => ui.write_line(command::HELP),
            Ok(Command::Quit) => break,
            Err(e) => ui.notify(&Notice::new(NoticeLevel::Warning, e.to_string())),
        }
    }

    ui.write_line("Bye");
    Ok(())
}
