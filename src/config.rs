//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use datapulse_console::ConnectionStatus;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub console: ConsoleConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Console host configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the built UI bundle (index.html + wasm)
    #[serde(default = "default_dist_dir")]
    pub dist_dir: PathBuf,

    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8084
}

fn default_dist_dir() -> PathBuf {
    PathBuf::from("datapulse-ui/dist")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            dist_dir: default_dist_dir(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Path of the SPA entry point
    pub fn index_file(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }
}

/// Console behaviour outside the browser (CLI previews)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConsoleConfig {
    /// Connection status assumed when none is given on the command line
    #[serde(default)]
    pub connection_status: ConnectionStatus,
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

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<(Self, LoadReport), ConfigError> {
        let mut config = Self::load(path)?;
        let warnings = config.apply_env_overrides();
        Ok((
            config,
            LoadReport {
                source: Some(path.to_path_buf()),
                warnings,
            },
        ))
    }

    /// Load from default locations, then apply environment overrides
    pub fn load_default() -> (Self, LoadReport) {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("datapulse").join("config.toml")),
            Some(PathBuf::from("/etc/datapulse/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::discover(&config_paths, |key| std::env::var(key).ok())
    }

    /// Load the first readable file among `paths` and apply overrides from
    /// `lookup`. Files that fail to load are skipped and reported.
    pub fn discover(
        paths: &[PathBuf],
        lookup: impl Fn(&str) -> Option<String>,
    ) -> (Self, LoadReport) {
        let mut report = LoadReport::default();
        let mut config = Config::default();

        for path in paths.iter().filter(|path| path.exists()) {
            match Self::load(path) {
                Ok(loaded) => {
                    config = loaded;
                    report.source = Some(path.clone());
                    break;
                }
                Err(e) => report.warnings.push(e.to_string()),
            }
        }

        report.warnings.extend(config.apply_overrides(lookup));
        (config, report)
    }

    /// Apply environment variable overrides to an existing config
    pub fn apply_env_overrides(&mut self) -> Vec<String> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup (`DATAPULSE_*` names).
    ///
    /// Unparseable values leave the setting unchanged and are returned as
    /// warnings.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Vec<String> {
        let mut warnings = Vec::new();

        // Server overrides
        if let Some(host) = lookup("DATAPULSE_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("DATAPULSE_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => warnings.push(format!("Ignoring invalid DATAPULSE_PORT: {}", port)),
            }
        }
        if let Some(dist_dir) = lookup("DATAPULSE_DIST_DIR") {
            self.server.dist_dir = PathBuf::from(dist_dir);
        }

        // Console overrides
        if let Some(status) = lookup("DATAPULSE_CONNECTION_STATUS") {
            match status.parse() {
                Ok(s) => self.console.connection_status = s,
                Err(e) => warnings.push(format!("Ignoring DATAPULSE_CONNECTION_STATUS: {}", e)),
            }
        }

        // Logging overrides
        if let Some(level) = lookup("DATAPULSE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("DATAPULSE_LOG_FORMAT") {
            self.logging.format = format;
        }

        warnings
    }
}

/// Where the configuration came from and what was skipped while loading it
#[derive(Debug, Default)]
pub struct LoadReport {
    /// File the configuration was read from, `None` for built-in defaults
    pub source: Option<PathBuf>,
    pub warnings: Vec<String>,
}

impl LoadReport {
    /// Emit the report through `tracing`; call once logging is initialized
    pub fn log(&self) {
        match &self.source {
            Some(path) => tracing::debug!("Loaded config from {:?}", path),
            None => tracing::debug!("Using default config with environment overrides"),
        }
        for warning in &self.warnings {
            tracing::warn!("{}", warning);
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
    r#"# Datapulse Console Configuration
#
# Environment variables override these settings:
# - DATAPULSE_HOST
# - DATAPULSE_PORT
# - DATAPULSE_DIST_DIR
# - DATAPULSE_CONNECTION_STATUS
# - DATAPULSE_LOG_LEVEL
# - DATAPULSE_LOG_FORMAT

[server]
# Host to bind to
host = "0.0.0.0"

# Port to listen on
port = 8084

# Directory with the built UI bundle (trunk build output)
dist_dir = "datapulse-ui/dist"

# Allowed CORS origins
cors_origins = []

[console]
# Connection status used by `datapulse resolve`: connected or not_connected
connection_status = "not_connected"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.addr(), "0.0.0.0:8084");
        assert_eq!(
            config.server.index_file(),
            PathBuf::from("datapulse-ui/dist/index.html")
        );
        assert_eq!(config.console.connection_status, ConnectionStatus::NotConnected);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.server.port, 8084);
        assert!(config.server.cors_origins.is_empty());
        assert_eq!(config.console.connection_status, ConnectionStatus::NotConnected);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 9000\n\n[console]\nconnection_status = \"connected\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.console.connection_status, ConnectionStatus::Connected);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load(Path::new("/nonexistent/datapulse.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server\nport = ").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("DATAPULSE_HOST", "127.0.0.1"),
            ("DATAPULSE_PORT", "9100"),
            ("DATAPULSE_DIST_DIR", "/srv/datapulse"),
            ("DATAPULSE_CONNECTION_STATUS", "connected"),
            ("DATAPULSE_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        let warnings = config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert!(warnings.is_empty());
        assert_eq!(config.server.addr(), "127.0.0.1:9100");
        assert_eq!(config.server.dist_dir, PathBuf::from("/srv/datapulse"));
        assert_eq!(config.console.connection_status, ConnectionStatus::Connected);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_overrides_are_reported() {
        let mut config = Config::default();
        let warnings = config.apply_overrides(|key| match key {
            "DATAPULSE_PORT" => Some("not-a-port".to_string()),
            "DATAPULSE_CONNECTION_STATUS" => Some("conected".to_string()),
            _ => None,
        });

        assert_eq!(config.server.port, 8084);
        assert_eq!(config.console.connection_status, ConnectionStatus::NotConnected);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("DATAPULSE_PORT"));
        assert!(warnings[1].contains("DATAPULSE_CONNECTION_STATUS"));
        assert!(warnings[1].contains("conected"));
    }

    #[test]
    fn test_discover_reports_broken_file() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "[server\nport = ").unwrap();
        let missing = dir.path().join("missing.toml");

        let (config, report) = Config::discover(&[missing, broken.clone()], |key| {
            (key == "DATAPULSE_CONNECTION_STATUS").then(|| "conected".to_string())
        });

        assert_eq!(report.source, None);
        assert_eq!(config.server.port, 8084);
        assert_eq!(config.console.connection_status, ConnectionStatus::NotConnected);
        assert_eq!(report.warnings.len(), 2);
        assert!(report.warnings[0].contains("broken.toml"));
        assert!(report.warnings[1].contains("DATAPULSE_CONNECTION_STATUS"));
    }

    #[test]
    fn test_discover_falls_through_to_next_file() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "[server\nport = ").unwrap();
        let valid = dir.path().join("config.toml");
        std::fs::write(&valid, "[server]\nport = 9200\n").unwrap();

        let (config, report) = Config::discover(&[broken, valid.clone()], |_| None);

        assert_eq!(config.server.port, 9200);
        assert_eq!(report.source, Some(valid));
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn test_load_with_env_reports_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nlevel = \"debug\"").unwrap();

        let (config, report) = Config::load_with_env(file.path()).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(report.source.as_deref(), Some(file.path()));
    }
}
