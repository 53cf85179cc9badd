//! Configuration management and validation.
//!
//! Settings are layered: built-in defaults, then an optional JSON config
//! file, then environment variables. Command line flags are applied on top
//! by the CLI.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_CITY_STATE_MAP_PATH, DEFAULT_DATASET_PATH,
    DEFAULT_TOP_AIRLINES_LIMIT, env_vars,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Runtime configuration for loading and querying flight statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Flight dataset CSV
    pub dataset_path: PathBuf,

    /// State-to-cities JSON reference table
    pub city_state_map_path: PathBuf,

    /// Number of airlines returned when a top-airlines query gives no limit
    pub default_top_airlines: usize,

    /// Refuse datasets without source and destination columns
    pub strict_header: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            city_state_map_path: PathBuf::from(DEFAULT_CITY_STATE_MAP_PATH),
            default_top_airlines: DEFAULT_TOP_AIRLINES_LIMIT,
            strict_header: false,
        }
    }
}

impl Config {
    /// Set the dataset path
    pub fn with_dataset_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dataset_path = path.into();
        self
    }

    /// Set the city-state map path
    pub fn with_city_state_map_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.city_state_map_path = path.into();
        self
    }

    /// Set the default top-airlines limit
    pub fn with_default_top_airlines(mut self, limit: usize) -> Self {
        self.default_top_airlines = limit;
        self
    }

    /// Require source and destination columns in the dataset header
    pub fn with_strict_header(mut self, strict: bool) -> Self {
        self.strict_header = strict;
        self
    }

    /// Location of the per-user config file
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            Error::configuration("Could not determine user configuration directory")
        })?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Read a JSON config file; missing keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read config file {}", path.display()), e)
        })?;
        serde_json::from_str(&content).map_err(|e| {
            Error::json(format!("Invalid config file {}", path.display()), e)
        })
    }

    /// Defaults, then `config_file` if given, then process environment
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// Apply environment overrides read through `lookup`
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(path) = non_empty(lookup(env_vars::DATASET_PATH)) {
            debug!("{} overrides dataset path: {}", env_vars::DATASET_PATH, path);
            self.dataset_path = PathBuf::from(path);
        }

        if let Some(path) = non_empty(lookup(env_vars::CITY_STATE_MAP_PATH)) {
            debug!(
                "{} overrides city-state map path: {}",
                env_vars::CITY_STATE_MAP_PATH,
                path
            );
            self.city_state_map_path = PathBuf::from(path);
        }

        if let Some(limit) = non_empty(lookup(env_vars::TOP_AIRLINES)) {
            self.default_top_airlines = limit.trim().parse().map_err(|_| {
                Error::configuration(format!(
                    "{} must be a positive integer, got '{}'",
                    env_vars::TOP_AIRLINES,
                    limit
                ))
            })?;
        }

        Ok(())
    }

    /// Check that the settings are usable
    pub fn validate(&self) -> Result<()> {
        if self.dataset_path.as_os_str().is_empty() {
            return Err(Error::configuration("Dataset path cannot be empty"));
        }

        if self.city_state_map_path.as_os_str().is_empty() {
            return Err(Error::configuration("City-state map path cannot be empty"));
        }

        if self.default_top_airlines == 0 {
            return Err(Error::configuration(
                "Default top airlines limit must be greater than 0",
            ));
        }

        Ok(())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert_eq!(config.dataset_path, PathBuf::from("data/dataset.csv"));
        assert_eq!(config.default_top_airlines, 10);
        assert!(!config.strict_header);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = Config::default()
            .with_dataset_path("/tmp/flights.csv")
            .with_city_state_map_path("/tmp/map.json")
            .with_default_top_airlines(3)
            .with_strict_header(true);

        assert_eq!(config.dataset_path, PathBuf::from("/tmp/flights.csv"));
        assert_eq!(config.city_state_map_path, PathBuf::from("/tmp/map.json"));
        assert_eq!(config.default_top_airlines, 3);
        assert!(config.strict_header);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"dataset_path": "/srv/flights.csv"}}"#).unwrap();

        let config = Config::from_file(file.path()).unwrap();

        assert_eq!(config.dataset_path, PathBuf::from("/srv/flights.csv"));
        assert_eq!(
            config.city_state_map_path,
            PathBuf::from(DEFAULT_CITY_STATE_MAP_PATH)
        );
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        assert!(matches!(
            Config::from_file(file.path()),
            Err(Error::Json { .. })
        ));
        assert!(matches!(
            Config::from_file(Path::new("/nonexistent/config.json")),
            Err(Error::Io { .. })
        ));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config
            .apply_env_overrides(lookup_from(&[
                (env_vars::DATASET_PATH, "/data/a.csv"),
                (env_vars::CITY_STATE_MAP_PATH, " "),
                (env_vars::TOP_AIRLINES, "25"),
            ]))
            .unwrap();

        assert_eq!(config.dataset_path, PathBuf::from("/data/a.csv"));
        assert_eq!(
            config.city_state_map_path,
            PathBuf::from(DEFAULT_CITY_STATE_MAP_PATH)
        );
        assert_eq!(config.default_top_airlines, 25);
    }

    #[test]
    fn test_invalid_env_limit() {
        let mut config = Config::default();
        let result = config.apply_env_overrides(lookup_from(&[(env_vars::TOP_AIRLINES, "many")]));
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_validation_rejects_zero_limit() {
        let config = Config::default().with_default_top_airlines(0);
        assert!(config.validate().is_err());

        let config = Config::default().with_dataset_path("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_config_path_location() {
        if let Ok(path) = Config::default_config_path() {
            assert!(path.ends_with("state-flight-stats/config.json"));
        }
    }
}
