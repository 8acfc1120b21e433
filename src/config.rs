use crate::error::ConfigError;
use log::Level;
use serde::Deserialize;

const BUNDLED: &str = include_str!("../Function.toml");

#[derive(Deserialize, Debug)]
#[serde(default)]
struct RawConfig {
    service_name: String,
    log_level: String,
}

impl Default for RawConfig {
    fn default() -> Self {
        RawConfig {
            service_name: "PayloadLogger".to_owned(),
            log_level: "info".to_owned(),
        }
    }
}

/// Function settings shipped inside the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionConfig {
    pub service_name: String,
    pub log_level: Level,
}

impl FunctionConfig {
    /// Settings from the `Function.toml` compiled into this crate.
    pub fn bundled() -> Result<Self, ConfigError> {
        Self::from_toml(BUNDLED)
    }

    pub fn from_toml(src: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(src)?;
        let log_level = raw
            .log_level
            .parse()
            .map_err(|_| ConfigError::LogLevel(raw.log_level.clone()))?;

        Ok(FunctionConfig {
            service_name: raw.service_name,
            log_level,
        })
    }
}
