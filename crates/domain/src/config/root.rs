use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::purge::PurgeConfig;
use super::server::ServerConfig;

/// Main configuration structure for rdpurge
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Rundeck connection settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Retention policy
    #[serde(default)]
    pub purge: PurgeConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. rdpurge.toml in current directory
    /// 3. /etc/rdpurge/config.toml
    /// 4. Default configuration
    ///
    /// Command-line overrides are applied on top and the result is validated.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("rdpurge.toml").exists() {
            Self::from_file("rdpurge.toml")?
        } else if std::path::Path::new("/etc/rdpurge/config.toml").exists() {
            Self::from_file("/etc/rdpurge/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(host) = overrides.host {
            self.server.host = host;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(token) = overrides.access_token {
            self.server.access_token = Some(token);
        }
        if let Some(project) = overrides.project {
            self.purge.project = Some(project);
        }
        if let Some(filter) = overrides.job_filter {
            self.purge.job_filter = Some(filter);
        }
        if let Some(keep) = overrides.keep {
            self.purge.keep = keep;
        }
        if let Some(max) = overrides.max_delete {
            self.purge.max_delete = Some(max);
        }
        if let Some(chunk_size) = overrides.chunk_size {
            self.purge.chunk_size = chunk_size;
        }
        if overrides.dry_run {
            self.purge.dry_run = true;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::Validation("Host cannot be empty".to_string()));
        }

        if self.server.api_version == 0 {
            return Err(ConfigError::Validation(
                "API version must be at least 1".to_string(),
            ));
        }

        match self.server.access_token.as_deref() {
            Some(token) if !token.trim().is_empty() => {}
            _ => {
                return Err(ConfigError::Validation(
                    "An access token is required".to_string(),
                ))
            }
        }

        if self.purge.chunk_size == 0 {
            return Err(ConfigError::Validation(
                "Chunk size must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub access_token: Option<String>,
    pub project: Option<String>,
    pub job_filter: Option<String>,
    pub keep: Option<u64>,
    pub max_delete: Option<u64>,
    pub chunk_size: Option<u64>,
    pub dry_run: bool,
    pub log_level: Option<String>,
}
