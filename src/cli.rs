use std::path::PathBuf;

use clap::Parser;
use mediagrab_core::models::settings::ClientSettings;
use mediagrab_core::platforms::MatchMode;

/// Detect media platforms, pick a download quality and manage download jobs
/// from the terminal.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory holding settings.json and preferences.json
    #[arg(long)]
    pub config_dir: Option<PathBuf>,

    /// Base URL of the download-info service
    #[arg(long)]
    pub info_url: Option<String>,

    /// Base URL of the job-management service
    #[arg(long)]
    pub jobs_url: Option<String>,

    /// Match platform markers regardless of letter case
    #[arg(long)]
    pub ignore_case: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Flags given on the command line win over the settings file.
    pub fn apply(&self, settings: &mut ClientSettings) {
        if let Some(url) = &self.info_url {
            settings.services.info_base_url = url.clone();
        }
        if let Some(url) = &self.jobs_url {
            settings.services.jobs_base_url = url.clone();
        }
        if self.ignore_case {
            settings.classifier.match_mode = MatchMode::IgnoreAsciiCase;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_keep_settings() {
        let cli = Cli::try_parse_from(["mediagrab"]).unwrap();
        let mut settings = ClientSettings::default();
        cli.apply(&mut settings);

        assert_eq!(settings.services.info_base_url, ClientSettings::default().services.info_base_url);
        assert_eq!(settings.classifier.match_mode, MatchMode::CaseSensitive);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn flags_override_settings() {
        let cli = Cli::try_parse_from([
            "mediagrab",
            "--config-dir",
            "/tmp/mg",
            "--info-url",
            "http://info.local/",
            "--jobs-url",
            "http://jobs.local/",
            "--ignore-case",
            "-vv",
        ])
        .unwrap();
        let mut settings = ClientSettings::default();
        cli.apply(&mut settings);

        assert_eq!(cli.config_dir, Some(PathBuf::from("/tmp/mg")));
        assert_eq!(settings.services.info_base_url, "http://info.local/");
        assert_eq!(settings.services.jobs_base_url, "http://jobs.local/");
        assert_eq!(settings.classifier.match_mode, MatchMode::IgnoreAsciiCase);
        assert_eq!(cli.verbose, 2);
    }
}
