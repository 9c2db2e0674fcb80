//! CLI configuration

use crate::error::{CliError, CliResult};
use eslm_engine::{EngineConfig, SubmissionPolicy, DEFAULT_GENERATION_DELAY};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// CLI configuration, read from `~/.config/eslm/config.toml` by default.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Backend endpoint
    pub endpoint: Option<String>,

    /// Simulated generation delay in milliseconds
    pub generation_delay_ms: Option<u64>,

    /// Refuse a new generation while one is running
    pub single_flight: Option<bool>,
}

impl CliConfig {
    /// Load configuration from file. A missing file yields defaults.
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_config_path()?,
        };

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            toml::from_str(&contents).map_err(|e| {
                CliError::Config(format!("{}: {}", config_path.display(), e))
            })
        } else {
            Ok(CliConfig::default())
        }
    }

    /// Get the default configuration file path
    pub fn default_config_path() -> CliResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CliError::Config("Cannot find config directory".into()))?;
        Ok(config_dir.join("eslm").join("config.toml"))
    }

    /// Engine settings with file values layered over the defaults.
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            delay: self
                .generation_delay_ms
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_GENERATION_DELAY),
            policy: if self.single_flight.unwrap_or(false) {
                SubmissionPolicy::SingleFlight
            } else {
                SubmissionPolicy::Concurrent
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert!(config.endpoint.is_none());
        assert_eq!(config.engine_config().delay, DEFAULT_GENERATION_DELAY);
        assert_eq!(config.engine_config().policy, SubmissionPolicy::Concurrent);
    }

    #[test]
    fn test_load_missing_config() {
        let config = CliConfig::load(Some(Path::new("/nonexistent/path/config.toml"))).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_load_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "endpoint = \"http://eslm.internal:9000\"\ngeneration_delay_ms = 250\nsingle_flight = true"
        )
        .unwrap();

        let config = CliConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.endpoint.as_deref(), Some("http://eslm.internal:9000"));

        let engine = config.engine_config();
        assert_eq!(engine.delay, Duration::from_millis(250));
        assert_eq!(engine.policy, SubmissionPolicy::SingleFlight);
    }

    #[test]
    fn test_malformed_config_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "generation_delay_ms = \"soon\"").unwrap();

        let err = CliConfig::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "timeout_seconds = 5").unwrap();

        assert!(CliConfig::load(Some(file.path())).is_err());
    }
}
