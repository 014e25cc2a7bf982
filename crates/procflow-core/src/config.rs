//! Configuration for the procflow engine
//!
//! Values come from defaults, an optional YAML file and environment overrides.

use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

/// Environment variable naming a YAML config file
pub const ENV_CONFIG_PATH: &str = "PROCFLOW_CONFIG";
pub const ENV_LOG_LEVEL: &str = "PROCFLOW_LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "PROCFLOW_LOG_FORMAT";
pub const ENV_SCHEMA_PATHS: &str = "PROCFLOW_SCHEMA_PATHS";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Full,
    Compact,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(LogFormat::Full),
            "compact" => Ok(LogFormat::Compact),
            other => Err(format!("unknown log format: {}", other)),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Full => f.write_str("full"),
            LogFormat::Compact => f.write_str("compact"),
        }
    }
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Log level, or any `EnvFilter` directive
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub log_format: LogFormat,

    /// Schema documents registered by `FlowParser::from_config`
    #[serde(default)]
    pub schema_paths: Vec<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
            schema_paths: Vec::new(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from the file named by `PROCFLOW_CONFIG`, if any,
    /// then apply environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match env::var(ENV_CONFIG_PATH) {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::default(),
        };

        config.apply_overrides(|key| env::var(key).ok());

        info!(
            log_level = %config.log_level,
            log_format = %config.log_format,
            schema_paths = config.schema_paths.len(),
            "Engine configuration loaded"
        );
        Ok(config)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Apply overrides from `lookup`, keyed by the `PROCFLOW_*` variable names
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(log_level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = log_level;
        }

        if let Some(log_format) = lookup(ENV_LOG_FORMAT) {
            match log_format.parse::<LogFormat>() {
                Ok(format) => self.log_format = format,
                Err(_) => warn!("Invalid {} value: {}", ENV_LOG_FORMAT, log_format),
            }
        }

        if let Some(paths) = lookup(ENV_SCHEMA_PATHS) {
            self.schema_paths = env::split_paths(&paths)
                .filter(|path| !path.as_os_str().is_empty())
                .collect();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Full);
        assert!(config.schema_paths.is_empty());
    }

    #[test]
    fn test_from_yaml_fills_defaults() {
        let config = EngineConfig::from_yaml_str("log_format: compact\n").unwrap();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Compact);

        let config = EngineConfig::from_yaml_str(
            "log_level: debug\nschema_paths:\n  - schemas/stake.yaml\n",
        )
        .unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.schema_paths, vec![PathBuf::from("schemas/stake.yaml")]);
    }

    #[test]
    fn test_invalid_yaml() {
        let err = EngineConfig::from_yaml_str("log_format: loud\n").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_level: trace").unwrap();

        let config = EngineConfig::from_file(file.path()).unwrap();
        assert_eq!(config.log_level, "trace");

        let err = EngineConfig::from_file("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.yaml"));
    }

    #[test]
    fn test_overrides() {
        let mut config = EngineConfig::default();
        config.apply_overrides(lookup_from(&[
            (ENV_LOG_LEVEL, "procflow_core=debug"),
            (ENV_LOG_FORMAT, "Compact"),
        ]));

        assert_eq!(config.log_level, "procflow_core=debug");
        assert_eq!(config.log_format, LogFormat::Compact);
    }

    #[test]
    fn test_invalid_format_override_is_ignored() {
        let mut config = EngineConfig::default();
        config.apply_overrides(lookup_from(&[(ENV_LOG_FORMAT, "json")]));
        assert_eq!(config.log_format, LogFormat::Full);
    }

    #[test]
    fn test_schema_paths_override() {
        let joined = env::join_paths(["a.yaml", "b.yaml"]).unwrap();
        let mut config = EngineConfig::default();
        config.apply_overrides(lookup_from(&[(ENV_SCHEMA_PATHS, joined.to_str().unwrap())]));
        assert_eq!(
            config.schema_paths,
            vec![PathBuf::from("a.yaml"), PathBuf::from("b.yaml")]
        );
    }
}
