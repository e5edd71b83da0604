//! Runtime configuration.
//!
//! Defaults cover everything; an optional `kinofetch.toml` (working
//! directory or the user config dir) overrides them. The upstream API key
//! is deliberately NOT part of the configuration — it arrives with each
//! fetch request and is never persisted.

use std::path::{Path, PathBuf};

use config::{
    Config, ConfigError, File,
    builder::{ConfigBuilder, DefaultState},
};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the Kinopoisk Unofficial API.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub directory: String,
    pub level: String,
}

impl AppConfig {
    /// Load configuration from defaults plus optional TOML files.
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::base_builder()?;

        if let Some(path) = Self::user_config_path() {
            builder = builder.add_source(File::from(path).required(false));
        }
        builder = builder.add_source(File::with_name("kinofetch").required(false));

        builder.build()?.try_deserialize()
    }

    /// Load configuration from defaults plus one explicit TOML file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::base_builder()?
            .add_source(File::from(path.to_path_buf()).required(true))
            .build()?
            .try_deserialize()
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    fn base_builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8650_i64)?
            .set_default("upstream.base_url", "https://kinopoiskapiunofficial.tech/api")?
            .set_default("upstream.timeout_secs", 10_i64)?
            .set_default("logging.directory", "logs")?
            .set_default("logging.level", "info")
    }

    fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("kinofetch").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_complete() {
        let config: AppConfig = AppConfig::base_builder()
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.server.port, 8650);
        assert_eq!(config.upstream.timeout_secs, 10);
        assert!(config.upstream.base_url.starts_with("https://"));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kinofetch.toml");
        std::fs::write(
            &path,
            "[server]\nhost = \"0.0.0.0\"\nport = 9000\n\n[logging]\nlevel = \"debug\"\n",
        )
        .unwrap();

        let config = AppConfig::load_from(&path).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.logging.level, "debug");
        // Untouched sections keep their defaults.
        assert_eq!(config.upstream.timeout_secs, 10);
        assert_eq!(config.bind_addr(), "0.0.0.0:9000");
    }
}
