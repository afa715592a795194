use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{AddressingConfig, ConfigError, LoggingConfig, RegionsConfig};

/// Main configuration, loaded from `dualstack.toml` and adjusted by CLI
/// overrides. Built once in the entry point and threaded through
/// constructors; nothing here lives in process-wide state.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub regions: RegionsConfig,

    #[serde(default)]
    pub addressing: AddressingConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values the CLI may override on top of the file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub regions: Option<Vec<String>>,
    pub all_regions: bool,
    pub log_level: Option<String>,
}

impl Config {
    pub const DEFAULT_PATH: &'static str = "dualstack.toml";

    /// Load from `path` (or `DEFAULT_PATH` when present), then apply CLI
    /// overrides. A missing default file is not an error.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(Self::DEFAULT_PATH).exists() => Self::from_file(Self::DEFAULT_PATH)?,
            None => Self::default(),
        };

        if let Some(regions) = overrides.regions {
            config.regions.names = regions;
        }
        if overrides.all_regions {
            config.regions.discover_all = true;
        }
        if let Some(level) = overrides.log_level {
            config.logging.level = level;
        }

        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.regions.names.is_empty() && !self.regions.discover_all {
            return Err(ConfigError::Invalid(
                "no regions configured; set [regions].names or opt into discover_all".to_string(),
            ));
        }

        let step = self.addressing.subnet_prefix_step;
        if step == 0 || step > 64 {
            return Err(ConfigError::Invalid(format!(
                "subnet_prefix_step must be between 1 and 64, got {step}"
            )));
        }

        Ok(())
    }
}
