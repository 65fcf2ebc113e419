//! Runner configuration.

use anyhow::{Context, Result};
use jumpsim_core::SimulationConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming a JSON config file
pub const CONFIG_ENV: &str = "JUMPSIM_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Parameters handed to the engine
    pub simulation: SimulationConfig,
    /// Number of creatures to initialize
    pub creature_count: i64,
    /// Record position statistics after every iteration
    pub record_trajectory: bool,
    /// Where to write the result; stdout when unset
    pub output_path: Option<PathBuf>,
    /// Emit logs as JSON lines
    pub json_logs: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig::default(),
            creature_count: 5,
            record_trajectory: false,
            output_path: None,
            json_logs: false,
        }
    }
}

impl RunnerConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("parsing config file {}", path.display()))
    }

    /// Load from the first CLI argument, then `JUMPSIM_CONFIG`, else defaults
    pub fn load(arg: Option<String>) -> Result<Self> {
        let path = arg.or_else(|| std::env::var(CONFIG_ENV).ok());
        match path {
            Some(path) => Self::from_file(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_runner_config() {
        let config = RunnerConfig::default();
        assert_eq!(config.creature_count, 5);
        assert_eq!(config.simulation.max_iterations, 200);
        assert!(config.output_path.is_none());
    }

    #[test]
    fn test_partial_json() {
        let config: RunnerConfig = serde_json::from_str(
            r#"{"creature_count": 12, "simulation": {"horizon_size": 25.0}}"#,
        )
        .unwrap();

        assert_eq!(config.creature_count, 12);
        assert_eq!(config.simulation.horizon_size, 25.0);
        assert_eq!(config.simulation.max_iterations, 200);
        assert!(!config.json_logs);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = RunnerConfig::from_file(Path::new("/nonexistent/jumpsim.json")).unwrap_err();
        assert!(err.to_string().contains("reading config file"));
    }
}
