//! Site configuration, read once at startup from a RON file.
//!
//! The file is `./cleo.ron` unless `CLEO_CONFIG` points elsewhere. A missing
//! file yields the defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use cleo_relay::{RelaySettings, DEFAULT_ENDPOINT, DEFAULT_RECIPIENT_NAME};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::logging::{LogDestination, DEFAULT_LOG_FILE};

const CONFIG_FILENAME: &str = "cleo.ron";
const CONFIG_ENV: &str = "CLEO_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub relay: RelayConfig,
    pub notification_auto_hide_ms: u64,
    pub log_destination: LogDestination,
    pub log_file: PathBuf,
    pub start_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            relay: RelayConfig::default(),
            notification_auto_hide_ms: 6_000,
            log_destination: LogDestination::File,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            start_path: "/".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn notification_auto_hide(&self) -> Duration {
        Duration::from_millis(self.notification_auto_hide_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub to_name: String,
    pub connect_timeout_ms: u64,
    pub request_timeout_ms: u64,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
            to_name: DEFAULT_RECIPIENT_NAME.to_string(),
            connect_timeout_ms: 10_000,
            request_timeout_ms: 30_000,
        }
    }
}

impl RelayConfig {
    pub fn to_settings(&self) -> RelaySettings {
        RelaySettings {
            endpoint: self.endpoint.clone(),
            service_id: self.service_id.clone(),
            template_id: self.template_id.clone(),
            public_key: self.public_key.clone(),
            connect_timeout: Duration::from_millis(self.connect_timeout_ms),
            request_timeout: Duration::from_millis(self.request_timeout_ms),
        }
    }
}

pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME))
}

pub fn load_config() -> Result<SiteConfig, ConfigError> {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &Path) -> Result<SiteConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(SiteConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    ron::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_config_from(&temp.path().join("absent.ron")).unwrap();

        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.notification_auto_hide(), Duration::from_secs(6));
        assert_eq!(config.relay.to_name, "CLEO Initiative");
        assert_eq!(config.log_file, PathBuf::from("site.log"));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("cleo.ron");
        fs::write(
            &path,
            r#"(
                relay: (service_id: "service_abc", template_id: "template_xyz", public_key: "pk"),
                log_destination: Both,
                log_file: "logs/cleo.log",
                start_path: "/news",
            )"#,
        )
        .unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.relay.service_id, "service_abc");
        assert_eq!(config.relay.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.log_destination, LogDestination::Both);
        assert_eq!(config.log_file, PathBuf::from("logs/cleo.log"));
        assert_eq!(config.start_path, "/news");
        assert_eq!(config.notification_auto_hide_ms, 6_000);

        let settings = config.relay.to_settings();
        assert_eq!(settings.template_id, "template_xyz");
        assert_eq!(settings.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("cleo.ron");
        fs::write(&path, "(relay: [").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn defaults_round_trip_through_ron() {
        let text =
            ron::ser::to_string_pretty(&SiteConfig::default(), ron::ser::PrettyConfig::new())
                .unwrap();
        let parsed: SiteConfig = ron::from_str(&text).unwrap();
        assert_eq!(parsed, SiteConfig::default());
    }
}
