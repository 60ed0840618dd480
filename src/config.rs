//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub analysis: AnalysisConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,

    #[serde(default = "default_session_idle_timeout")]
    pub session_idle_timeout_secs: u64,

    #[serde(default = "default_session_reap_interval")]
    pub session_reap_interval_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8501
}

fn default_max_upload_bytes() -> usize {
    200 * 1024 * 1024 // 200 MB
}

fn default_session_idle_timeout() -> u64 {
    3600 // 1 hour
}

fn default_session_reap_interval() -> u64 {
    60
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_upload_bytes: default_max_upload_bytes(),
            session_idle_timeout_secs: default_session_idle_timeout(),
            session_reap_interval_secs: default_session_reap_interval(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn session_idle_timeout(&self) -> Duration {
        Duration::from_secs(self.session_idle_timeout_secs)
    }

    pub fn session_reap_interval(&self) -> Duration {
        Duration::from_secs(self.session_reap_interval_secs.max(1))
    }
}

/// Mock analysis configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Simulated processing time
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

fn default_delay_ms() -> u64 {
    2500
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
        }
    }
}

impl AnalysisConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment.
    ///
    /// Nothing is logged here since this runs before the subscriber is
    /// installed; call [`LoadedConfig::log`] afterwards.
    pub fn load_default() -> LoadedConfig {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("predictraforge").join("config.toml")),
            Some(PathBuf::from("/etc/predictraforge/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths)
    }

    /// Load the first candidate that exists and parses
    pub fn load_first(paths: &[PathBuf]) -> LoadedConfig {
        let mut failures = Vec::new();

        for path in paths {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        return LoadedConfig {
                            config,
                            source: Some(path.clone()),
                            failures,
                        };
                    }
                    Err(e) => failures.push(e),
                }
            }
        }

        LoadedConfig {
            config: Self::from_env(),
            source: None,
            failures,
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply `PREDICTRAFORGE_*` overrides from `lookup`. Unparseable numbers
    /// are ignored.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(host) = lookup("PREDICTRAFORGE_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PREDICTRAFORGE_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        if let Some(delay) = lookup("PREDICTRAFORGE_ANALYSIS_DELAY_MS") {
            if let Ok(d) = delay.parse() {
                self.analysis.delay_ms = d;
            }
        }

        if let Some(level) = lookup("PREDICTRAFORGE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("PREDICTRAFORGE_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Result of a default-location lookup
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config came from, `None` for defaults
    pub source: Option<PathBuf>,
    /// Candidates that exist but failed to load
    pub failures: Vec<ConfigError>,
}

impl LoadedConfig {
    /// Report where the config came from
    pub fn log(&self) {
        for failure in &self.failures {
            tracing::warn!("Skipping config: {}", failure);
        }
        match &self.source {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::info!("Using default config with environment overrides"),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Predictraforge Configuration
#
# Environment variables override these settings:
# - PREDICTRAFORGE_HOST
# - PREDICTRAFORGE_PORT
# - PREDICTRAFORGE_ANALYSIS_DELAY_MS
# - PREDICTRAFORGE_LOG_LEVEL
# - PREDICTRAFORGE_LOG_FORMAT

[server]
# Server host
host = "0.0.0.0"

# Server port
port = 8501

# Maximum CSV upload size (bytes)
max_upload_bytes = 209715200

# Sessions idle longer than this are discarded (seconds)
session_idle_timeout_secs = 3600

# How often idle sessions are evicted (seconds)
session_reap_interval_secs = 60

[analysis]
# Simulated processing time of the mock analysis (ms)
delay_ms = 2500

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
