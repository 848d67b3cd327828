use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::platforms::MatchMode;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientSettings {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    #[serde(default)]
    pub services: ServiceSettings,
    #[serde(default)]
    pub classifier: ClassifierSettings,
    #[serde(default)]
    pub proxy: ProxySettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceSettings {
    #[serde(default = "default_base_url")]
    pub info_base_url: String,
    #[serde(default = "default_base_url")]
    pub jobs_base_url: String,
    #[serde(default = "default_info_timeout_secs")]
    pub info_timeout_secs: u64,
    #[serde(default = "default_action_timeout_secs")]
    pub action_timeout_secs: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassifierSettings {
    #[serde(default)]
    pub match_mode: MatchMode,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProxySettings {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_proxy_type")]
    pub proxy_type: String,
    #[serde(default)]
    pub host: String,
    #[serde(default = "default_proxy_port")]
    pub port: u16,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000/".into()
}

fn default_info_timeout_secs() -> u64 {
    20
}

fn default_action_timeout_secs() -> u64 {
    15
}

fn default_proxy_type() -> String {
    "http".into()
}

fn default_proxy_port() -> u16 {
    8080
}

impl ServiceSettings {
    pub fn info_timeout(&self) -> Duration {
        Duration::from_secs(self.info_timeout_secs.max(1))
    }

    pub fn action_timeout(&self) -> Duration {
        Duration::from_secs(self.action_timeout_secs.max(1))
    }
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            info_base_url: default_base_url(),
            jobs_base_url: default_base_url(),
            info_timeout_secs: default_info_timeout_secs(),
            action_timeout_secs: default_action_timeout_secs(),
        }
    }
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            services: ServiceSettings::default(),
            classifier: ClassifierSettings::default(),
            proxy: ProxySettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let json = r#"{"services": {"info_base_url": "http://media.local/"}}"#;
        let settings: ClientSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.services.info_base_url, "http://media.local/");
        assert_eq!(settings.services.jobs_base_url, "http://127.0.0.1:5000/");
        assert_eq!(settings.services.info_timeout(), Duration::from_secs(20));
        assert_eq!(settings.classifier.match_mode, MatchMode::CaseSensitive);
        assert!(!settings.proxy.enabled);
    }

    #[test]
    fn match_mode_reads_snake_case() {
        let json = r#"{"classifier": {"match_mode": "ignore_ascii_case"}}"#;
        let settings: ClientSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.classifier.match_mode, MatchMode::IgnoreAsciiCase);
    }

    #[test]
    fn zero_timeouts_are_clamped() {
        let services = ServiceSettings {
            action_timeout_secs: 0,
            ..ServiceSettings::default()
        };
        assert_eq!(services.action_timeout(), Duration::from_secs(1));
    }
}
