use thiserror::Error;

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("Failed to log payload: {0}")]
    Serialization(#[source] serde_json::Error),
}

impl PayloadError {
    pub const RESPONSE: &'static str = "Failed to log payload";

    /// The text handed back to the caller alongside this error.
    pub fn response(&self) -> &'static str {
        Self::RESPONSE
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed Function.toml: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unknown log level {0:?}")]
    LogLevel(String),
}
