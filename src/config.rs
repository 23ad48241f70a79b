use crate::core::data_dir;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "fiat-balance.config.json";

#[derive(Debug)]
pub enum ConfigError {
    InvalidConfig,
    IoError(io::Error),
    SerdeError(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig => write!(f, "Config file is invalid"),
            Self::IoError(e) => write!(f, "IO error: {e}"),
            Self::SerdeError(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl Error for ConfigError {}

impl From<io::Error> for ConfigError {
    fn from(error: io::Error) -> Self {
        Self::IoError(error)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(error: serde_json::Error) -> Self {
        Self::SerdeError(error)
    }
}

/// Which flavour of the app we're running as.
///
/// The desktop app keeps the wallet locally, so it tells the user whether a
/// backup is synced. The web build never shows that notice.
#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BuildTarget {
    #[default]
    App,
    Web,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub target: BuildTarget,
    pub currency: String,
    pub credit_symbol: String,
    pub locale_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target: BuildTarget::App,
            currency: "USD".to_string(),
            credit_symbol: "LBC".to_string(),
            locale_file: None,
        }
    }
}

impl Config {
    pub fn shows_sync_notice(&self) -> bool {
        self.target == BuildTarget::App
    }
}

pub fn read_config() -> Result<Config, ConfigError> {
    read_config_from(&data_dir())
}

pub fn write_config(config: &Config) -> Result<(), ConfigError> {
    write_config_to(&data_dir(), config)
}

pub fn read_config_from(root: &Path) -> Result<Config, ConfigError> {
    std::fs::create_dir_all(root)?;

    let config_path = root.join(CONFIG_FILE_NAME);

    // if no config file, return default config
    if !config_path.exists() {
        let config = Config::default();
        // create default config file if we don't have one
        let json_string = serde_json::to_string_pretty(&config)?;
        std::fs::write(config_path, json_string)?;
        return Ok(config);
    } else if !config_path.is_file() {
        return Err(ConfigError::InvalidConfig);
    }

    let data = std::fs::read_to_string(config_path)?;
    Ok(serde_json::from_str(&data)?)
}

pub fn write_config_to(root: &Path, config: &Config) -> Result<(), ConfigError> {
    std::fs::create_dir_all(root)?;
    let json_string = serde_json::to_string_pretty(config)?;
    std::fs::write(root.join(CONFIG_FILE_NAME), json_string)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn test_creates_default_config() {
        let tmp_dir = TempDir::new("fiat-balance").expect("Could not create temp dir");

        let config = read_config_from(tmp_dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.shows_sync_notice());
        assert!(tmp_dir.path().join(CONFIG_FILE_NAME).is_file());
    }

    #[test]
    fn test_write_then_read() {
        let tmp_dir = TempDir::new("fiat-balance").expect("Could not create temp dir");

        let config = Config {
            target: BuildTarget::Web,
            currency: "EUR".to_string(),
            ..Default::default()
        };
        write_config_to(tmp_dir.path(), &config).unwrap();

        let read = read_config_from(tmp_dir.path()).unwrap();
        assert_eq!(read, config);
        assert!(!read.shows_sync_notice());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let tmp_dir = TempDir::new("fiat-balance").expect("Could not create temp dir");
        std::fs::write(
            tmp_dir.path().join(CONFIG_FILE_NAME),
            r#"{ "target": "web" }"#,
        )
        .unwrap();

        let config = read_config_from(tmp_dir.path()).unwrap();
        assert_eq!(config.target, BuildTarget::Web);
        assert_eq!(config.currency, "USD");
        assert_eq!(config.credit_symbol, "LBC");
    }

    #[test]
    fn test_directory_in_place_of_config_is_invalid() {
        let tmp_dir = TempDir::new("fiat-balance").expect("Could not create temp dir");
        std::fs::create_dir_all(tmp_dir.path().join(CONFIG_FILE_NAME)).unwrap();

        let err = read_config_from(tmp_dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfig));
    }

    #[test]
    fn test_garbage_config_is_a_serde_error() {
        let tmp_dir = TempDir::new("fiat-balance").expect("Could not create temp dir");
        std::fs::write(tmp_dir.path().join(CONFIG_FILE_NAME), "not json").unwrap();

        let err = read_config_from(tmp_dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::SerdeError(_)));
        assert!(err.to_string().starts_with("JSON error"));
    }
}
