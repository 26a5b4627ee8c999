//! Configuration management for staffdir.
//!
//! Configuration is loaded with figment from defaults, an optional TOML
//! file and environment variables.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::render::OutputFormat;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "staffdir";

/// Prefix for environment variable overrides.
const ENV_PREFIX: &str = "STAFFDIR_";

/// Largest accepted number of salary decimal places.
const MAX_SALARY_DECIMALS: usize = 6;

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `STAFFDIR_`, sections split on
///    `__`, e.g. `STAFFDIR_DISPLAY__FORMAT=json`)
/// 2. TOML config file at `~/.config/staffdir/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initial directory contents.
    pub directory: DirectoryConfig,
    /// Output settings.
    pub display: DisplayConfig,
}

/// Where the initial directory contents come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    /// Load the built-in sample employees.
    pub sample_data: bool,
    /// JSON seed file to import at startup.
    pub seed_path: Option<PathBuf>,
}

/// Output-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Default output format.
    pub format: OutputFormat,
    /// Decimal places shown for salaries in plain and table output.
    pub salary_decimals: usize,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            sample_data: true,
            seed_path: None,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            salary_decimals: 2,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation
    /// fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// A missing file is not an error; defaults apply.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation
    /// fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.display.salary_decimals > MAX_SALARY_DECIMALS {
            return Err(Error::ConfigValidation {
                message: format!(
                    "salary_decimals ({}) cannot be greater than {MAX_SALARY_DECIMALS}",
                    self.display.salary_decimals
                ),
            });
        }

        if let Some(path) = &self.directory.seed_path {
            if !path.is_file() {
                return Err(Error::ConfigValidation {
                    message: format!("seed_path {} is not a file", path.display()),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert!(config.directory.sample_data);
        assert!(config.directory.seed_path.is_none());
        assert_eq!(config.display.format, OutputFormat::Table);
        assert_eq!(config.display.salary_decimals, 2);
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_too_many_decimals() {
        let mut config = Config::default();
        config.display.salary_decimals = 7;

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("salary_decimals"));
    }

    #[test]
    fn test_validate_missing_seed_file() {
        let mut config = Config::default();
        config.directory.seed_path = Some(PathBuf::from("/nonexistent/seed.json"));

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("seed_path"));
    }

    #[test]
    fn test_validate_existing_seed_file() {
        let seed = tempfile::NamedTempFile::new().unwrap();
        let mut config = Config::default();
        config.directory.seed_path = Some(seed.path().to_path_buf());

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("staffdir"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        let config = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml"))).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[directory]\nsample_data = false\n\n[display]\nformat = \"json\"\nsalary_decimals = 0"
        )
        .unwrap();

        let config = Config::load_from(Some(file.path().to_path_buf())).unwrap();
        assert!(!config.directory.sample_data);
        assert_eq!(config.display.format, OutputFormat::Json);
        assert_eq!(config.display.salary_decimals, 0);
    }

    #[test]
    fn test_load_from_invalid_toml_value() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[display]\nformat = \"spreadsheet\"").unwrap();

        let err = Config::load_from(Some(file.path().to_path_buf())).unwrap_err();
        assert!(matches!(err, Error::ConfigLoad(_)));
    }

    #[test]
    fn test_config_serialize() {
        let json = serde_json::to_string(&Config::default()).unwrap();
        assert!(json.contains("sample_data"));
        assert!(json.contains("\"format\":\"table\""));
    }

    #[test]
    fn test_display_config_deserialize_partial() {
        let display: DisplayConfig = serde_json::from_str(r#"{"salary_decimals": 4}"#).unwrap();
        assert_eq!(display.salary_decimals, 4);
        assert_eq!(display.format, OutputFormat::Table);
    }
}
