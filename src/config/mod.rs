//! Configuration loading and management

mod io;
mod settings;

pub use settings::{QuerySettings, ServerSettings};

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Lookout API connection settings
    #[serde(default)]
    pub server: ServerSettings,

    /// Query defaults for the CLI
    #[serde(default)]
    pub query: QuerySettings,
}

impl Config {
    /// The configured backend, treating an empty string as unset
    pub fn backend(&self) -> Option<&str> {
        self.server
            .backend
            .as_deref()
            .map(str::trim)
            .filter(|b| !b.is_empty())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let url = self.server.url.trim();
        if url.is_empty() {
            bail!("server.url must not be empty");
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            bail!("server.url must start with http:// or https://, got '{url}'");
        }
        if self.server.connect_timeout_ms == 0 {
            bail!("server.connect_timeout_ms must be > 0");
        }
        if self.server.read_timeout_ms == 0 {
            bail!("server.read_timeout_ms must be > 0");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::JobOrder;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert_eq!(config.server.url, "http://localhost:10000");
        assert_eq!(config.query.take, 100);
        assert_eq!(config.query.order, JobOrder::desc("jobId"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn parses_partial_config() {
        let config: Config = toml::from_str(
            r#"
            [server]
            url = "https://lookout.example.com"
            backend = "jsonb"

            [query]
            take = 500
            active_job_sets = true

            [query.order]
            field = "submitted"
            direction = "ASC"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.url, "https://lookout.example.com");
        assert_eq!(config.backend(), Some("jsonb"));
        assert_eq!(config.server.read_timeout_ms, 30_000);
        assert_eq!(config.query.take, 500);
        assert!(config.query.active_job_sets);
        assert_eq!(config.query.order, JobOrder::asc("submitted"));
    }

    #[test]
    fn empty_backend_counts_as_unset() {
        let mut config = Config::default();
        config.server.backend = Some("  ".to_string());
        assert_eq!(config.backend(), None);
    }

    #[test]
    fn validate_rejects_bad_url() {
        let mut config = Config::default();
        config.server.url = String::new();
        assert!(config.validate().unwrap_err().to_string().contains("must not be empty"));

        config.server.url = "localhost:10000".to_string();
        assert!(config.validate().unwrap_err().to_string().contains("http://"));
    }

    #[test]
    fn validate_rejects_zero_timeouts() {
        let mut config = Config::default();
        config.server.connect_timeout_ms = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.server.read_timeout_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn from_file_reports_parse_errors() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server\nurl = ")?;

        let err = Config::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
        Ok(())
    }
}
