use mediagrab_core::models::jobs::{DownloadJobRef, JobAction};
use mediagrab_core::models::theme::{ThemePreference, UnknownTheme};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Anything that is not a `:` command is the contents of the URL field.
    Url(String),
    ShowTheme,
    SetTheme(ThemePreference),
    Job(JobAction, DownloadJobRef),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command ':{0}', try :help")]
    Unknown(String),
    #[error(":{0} needs a download id")]
    MissingJob(&'static str),
    #[error(transparent)]
    Theme(#[from] UnknownTheme),
}

pub const HELP: &str = "\
  <url>                      detect the platform and list qualities
  :theme [light|dark|system] show or change the theme
  :cancel <id>               cancel a download
  :retry <id>                retry a download
  :delete <id>               delete a download
  :help                      show this help
  :quit                      exit";

pub fn parse(line: &str) -> Result<Command, CommandError> {
    let trimmed = line.trim();
    let Some(rest) = trimmed.strip_prefix(':') else {
        return Ok(Command::Url(trimmed.to_string()));
    };

    let mut parts = rest.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let arg = parts.next();

    let action = match name {
        "theme" => {
            return match arg {
                None => Ok(Command::ShowTheme),
                Some(value) => Ok(Command::SetTheme(value.parse()?)),
            }
        }
        "help" | "h" | "?" => return Ok(Command::Help),
        "quit" | "q" | "exit" => return Ok(Command::Quit),
        "cancel" => JobAction::Cancel,
        "retry" => JobAction::Retry,
        "delete" => JobAction::Delete,
        other => return Err(CommandError::Unknown(other.to_string())),
    };

    let job = arg.ok_or(CommandError::MissingJob(action.as_str()))?;
    Ok(Command::Job(action, DownloadJobRef::new(job)))
}
