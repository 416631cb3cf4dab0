//! Configuration module for Barkyard
//!
//! Implements the configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (BARKYARD_*)
//! 3. Facility config (barkyard.toml in the working directory)
//! 4. Built-in defaults (lowest priority)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::DEFAULT_ACTIVITIES;
use crate::error::{BarkyardError, BarkyardResult};

/// Facility identity and reference data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacilityConfig {
    #[serde(default = "default_facility_name")]
    pub name: String,

    #[serde(default = "default_facility_address")]
    pub address: String,

    #[serde(default = "default_activities")]
    pub activities: Vec<String>,
}

impl Default for FacilityConfig {
    fn default() -> Self {
        Self {
            name: default_facility_name(),
            address: default_facility_address(),
            activities: default_activities(),
        }
    }
}

fn default_facility_name() -> String {
    "Paws & Play".to_string()
}

fn default_facility_address() -> String {
    "456 Park Ave, Dogtown".to_string()
}

fn default_activities() -> Vec<String> {
    DEFAULT_ACTIVITIES.iter().map(|s| s.to_string()).collect()
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub facility: FacilityConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> BarkyardResult<Self> {
        let (config, _warnings) = Self::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (unknown keys).
    pub fn load_with_warnings(path: &Path) -> BarkyardResult<(Self, Vec<ConfigWarning>)> {
        let content = fs::read_to_string(path)?;

        let mut unknown_paths: Vec<String> = Vec::new();
        let deserializer = toml::de::Deserializer::new(&content);

        let config: Self = serde_ignored::deserialize(deserializer, |path| {
            unknown_paths.push(path.to_string());
        })
        .map_err(|e| BarkyardError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let warnings = unknown_paths
            .into_iter()
            .map(|key| ConfigWarning {
                key,
                file: path.to_path_buf(),
            })
            .collect();

        Ok((config, warnings))
    }

    /// Load from `barkyard.toml` under `root`, or fall back to defaults
    pub fn load_or_default(root: Option<&Path>) -> Self {
        if let Some(root) = root {
            let path = root.join("barkyard.toml");
            if path.exists() {
                if let Ok(config) = Self::load(&path) {
                    return config.with_env_overrides();
                }
            }
        }

        Self::default().with_env_overrides()
    }

    /// Apply environment variable overrides (BARKYARD_* prefix)
    pub fn with_env_overrides(mut self) -> Self {
        // BARKYARD_VERBOSITY
        if let Ok(verbosity) = std::env::var("BARKYARD_VERBOSITY") {
            self.output.verbosity = match verbosity.to_lowercase().as_str() {
                "quiet" => Verbosity::Quiet,
                "verbose" => Verbosity::Verbose,
                "debug" => Verbosity::Debug,
                _ => Verbosity::Normal,
            };
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_when_no_file_exists() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(Some(dir.path()));
        assert_eq!(config.facility.name, "Paws & Play");
        assert_eq!(config.facility.address, "456 Park Ave, Dogtown");
        assert_eq!(config.facility.activities.len(), 5);
    }

    #[test]
    fn parses_facility_table() {
        let file = write_config(
            r#"
[facility]
name = "Happy Hounds"
address = "12 Kennel Row"
activities = ["Napping"]
"#,
        );

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.facility.name, "Happy Hounds");
        assert_eq!(config.facility.address, "12 Kennel Row");
        assert_eq!(config.facility.activities, vec!["Napping"]);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let file = write_config("[facility]\nname = \"Happy Hounds\"\n");

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.facility.name, "Happy Hounds");
        assert_eq!(config.facility.address, "456 Park Ave, Dogtown");
    }

    #[test]
    fn unknown_keys_become_warnings() {
        let file = write_config("[facility]\nname = \"Happy Hounds\"\nmascot = \"Rex\"\n");

        let (config, warnings) = Config::load_with_warnings(file.path()).unwrap();
        assert_eq!(config.facility.name, "Happy Hounds");
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].key, "facility.mascot");
    }

    #[test]
    fn malformed_toml_is_invalid_config() {
        let file = write_config("[facility\nname = ");

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, BarkyardError::InvalidConfig { .. }));
    }

    #[test]
    fn env_override_sets_verbosity() {
        std::env::set_var("BARKYARD_VERBOSITY", "debug");
        let config = Config::default().with_env_overrides();
        std::env::remove_var("BARKYARD_VERBOSITY");

        assert_eq!(config.output.verbosity, Verbosity::Debug);
    }
}
