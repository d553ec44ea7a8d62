//! Configuration loading from a TOML file with environment variable overrides.
//!
//! Looks for `sensorhub.toml` in the working directory. Every field has a
//! default so the file is optional. Environment variables take precedence
//! over file values.

use std::time::Duration;

use serde::Deserialize;

use sensorhub_app::config::{DelayRange, SimulationConfig};

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Where the sensor document is persisted.
    pub storage: StorageConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Simulation cadence.
    pub simulation: SimulationSettings,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// JSON document storage configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path of the JSON document.
    pub path: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Tick cadence and motion cycle bounds.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    pub tick_interval_secs: u64,
    pub motion_idle_min_secs: u64,
    pub motion_idle_max_secs: u64,
    pub motion_active_min_ms: u64,
    pub motion_active_max_ms: u64,
    /// Seed for deterministic runs. Random when absent.
    pub seed: Option<u64>,
}

impl Config {
    /// Load configuration from `sensorhub.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting values are inconsistent.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("sensorhub.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        // plain PORT is what most hosting platforms inject
        if let Some(port) = env_parse("PORT") {
            self.server.port = port;
        }
        if let Ok(val) = std::env::var("SENSORHUB_HOST") {
            self.server.host = val;
        }
        if let Some(port) = env_parse("SENSORHUB_PORT") {
            self.server.port = port;
        }
        let bind = std::env::var("SENSORHUB_BIND").ok();
        if let Some((host, port)) = bind.as_deref().and_then(|val| val.rsplit_once(':')) {
            self.server.host = host.to_string();
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("SENSORHUB_DATA_FILE") {
            self.storage.path = val;
        }
        if let Some(seed) = env_parse("SENSORHUB_SEED") {
            self.simulation.seed = Some(seed);
        }
        if let Ok(val) = std::env::var("SENSORHUB_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.simulation.tick_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "tick interval must be non-zero".to_string(),
            ));
        }
        let simulation = self.simulation();
        if !simulation.motion_idle.is_valid() {
            return Err(ConfigError::Validation(
                "motion idle delay range is empty".to_string(),
            ));
        }
        if !simulation.motion_active.is_valid() {
            return Err(ConfigError::Validation(
                "motion active delay range is empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Timing parameters handed to the simulation engine.
    #[must_use]
    pub fn simulation(&self) -> SimulationConfig {
        let s = &self.simulation;
        SimulationConfig {
            tick_interval: Duration::from_secs(s.tick_interval_secs),
            motion_idle: DelayRange::new(
                Duration::from_secs(s.motion_idle_min_secs),
                Duration::from_secs(s.motion_idle_max_secs),
            ),
            motion_active: DelayRange::new(
                Duration::from_millis(s.motion_active_min_ms),
                Duration::from_millis(s.motion_active_max_ms),
            ),
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|val| val.parse().ok())
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: "data.json".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "sensorhubd=info,sensorhub=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            tick_interval_secs: 180,
            motion_idle_min_secs: 180,
            motion_idle_max_secs: 300,
            motion_active_min_ms: 1000,
            motion_active_max_ms: 5000,
            seed: None,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.storage.path, "data.json");
        assert!(config.simulation.seed.is_none());
    }

    #[test]
    fn should_match_default_simulation_timing() {
        let config = Config::default();
        assert_eq!(config.simulation(), SimulationConfig::default());
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [server]
            host = '127.0.0.1'
            port = 9090

            [storage]
            path = '/var/lib/sensorhub/data.json'

            [logging]
            filter = 'debug'

            [simulation]
            tick_interval_secs = 10
            motion_idle_min_secs = 5
            motion_idle_max_secs = 8
            motion_active_min_ms = 200
            motion_active_max_ms = 400
            seed = 42
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.storage.path, "/var/lib/sensorhub/data.json");
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.simulation.seed, Some(42));

        let simulation = config.simulation();
        assert_eq!(simulation.tick_interval, Duration::from_secs(10));
        assert_eq!(simulation.motion_idle.min, Duration::from_secs(5));
        assert_eq!(simulation.motion_idle.max, Duration::from_secs(8));
        assert_eq!(simulation.motion_active.min, Duration::from_millis(200));
        assert_eq!(simulation.motion_active.max, Duration::from_millis(400));
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [server]
            port = 8080
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.storage.path, "data.json");
        assert_eq!(config.simulation.tick_interval_secs, 180);
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }

    #[test]
    fn should_accept_defaults() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_reject_zero_tick_interval() {
        let mut config = Config::default();
        config.simulation.tick_interval_secs = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_reject_inverted_idle_range() {
        let mut config = Config::default();
        config.simulation.motion_idle_min_secs = 300;
        config.simulation.motion_idle_max_secs = 180;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_reject_empty_active_range() {
        let mut config = Config::default();
        config.simulation.motion_active_max_ms = 1000;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_format_bind_addr() {
        let mut config = Config::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 9090;
        assert_eq!(config.bind_addr(), "127.0.0.1:9090");
    }
}
