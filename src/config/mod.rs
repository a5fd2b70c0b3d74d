// Required external crates for configuration management and serialization
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use ::config::{Config, ConfigError, Environment, File};

use crate::output::OutputSink;

/// Registry endpoint used when nothing else is configured
pub const DEFAULT_SOURCE_URL: &str = "http://localhost:12434/models";

/// Default registry timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = crate::fetch::DEFAULT_TIMEOUT.as_secs();

/// Prefix of environment overrides, e.g. `MODELBRIDGE_SOURCE_URL`
const ENV_PREFIX: &str = "MODELBRIDGE";

/// Configuration for the source registry
#[derive(Debug, Deserialize, Clone)]
pub struct SourceConfig {
    /// URL of the registry's model list
    pub url: String,
    /// Request timeout in seconds
    pub timeout: u64,
}

/// Configuration for the converted output
#[derive(Debug, Deserialize, Clone, Default)]
pub struct OutputConfig {
    /// File to write; standard output when absent
    pub path: Option<PathBuf>,
}

/// Configuration for application logging
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Log level (debug, info, warn, error)
    pub level: String,
    /// Optional directory for daily rolling log files; stderr when absent
    pub file: Option<PathBuf>,
}

/// Main settings struct that contains all configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// Registry-related settings
    pub source: SourceConfig,
    /// Output-related settings
    #[serde(default)]
    pub output: OutputConfig,
    /// Logging-related settings
    pub logging: LoggingConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source: SourceConfig {
                url: DEFAULT_SOURCE_URL.to_string(),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
            output: OutputConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                file: None,
            },
        }
    }
}

/// Implementation for loading and parsing configuration
impl Settings {
    /// Creates a new Settings instance by loading config from multiple sources
    /// in the following order of precedence (highest to lowest):
    /// 1. Environment variables prefixed with MODELBRIDGE_
    /// 2. `config_file` if given, otherwise `config/local.toml` then
    ///    `config/default.toml` under the current directory (both optional)
    /// 3. Built-in defaults
    ///
    /// Values are not validated here: command-line flags may still override
    /// them, so call [`Settings::validate`] once every layer is applied.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("source.url", DEFAULT_SOURCE_URL)?
            .set_default("source.timeout", DEFAULT_TIMEOUT_SECS)?
            .set_default("logging.level", "info")?;

        match config_file {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::Message(format!(
                        "Configuration file not found at: {}",
                        path.display()
                    )));
                }
                builder = builder.add_source(File::from(path));
            }
            None => {
                let config_dir = std::env::current_dir()
                    .map_err(|e| ConfigError::Message(
                        format!("Failed to get current directory: {}", e)
                    ))?
                    .join("config");

                builder = builder
                    .add_source(File::from(config_dir.join("default.toml")).required(false))
                    .add_source(File::from(config_dir.join("local.toml")).required(false));
            }
        }

        builder
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("_"))
            .build()?
            .try_deserialize::<Settings>()
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Validate the registry URL
        let url = reqwest::Url::parse(&self.source.url).map_err(|e| {
            ConfigError::Message(format!("Invalid source URL {}: {}", self.source.url, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Message(format!(
                "Source URL must use http or https, got: {}",
                url.scheme()
            )));
        }

        // Validate timeout
        if self.source.timeout == 0 {
            return Err(ConfigError::Message(
                "source timeout must be greater than 0".to_string()
            ));
        }

        // Validate logging level
        match self.logging.level.to_lowercase().as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => Ok(()),
            _ => Err(ConfigError::Message(
                format!("Invalid logging level: {}. Must be one of: error, warn, info, debug, trace",
                    self.logging.level)
            )),
        }
    }

    /// Registry request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.source.timeout)
    }

    /// Sink selected by the output settings
    pub fn sink(&self) -> OutputSink {
        OutputSink::from_path(self.output.path.clone())
    }
}
