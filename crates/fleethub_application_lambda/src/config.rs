//! Runtime configuration read from the Lambda environment.
//!
//! | Variable                | Default | Meaning                              |
//! |-------------------------|---------|--------------------------------------|
//! | `FLEETHUB_ENDPOINT_URL` | unset   | Endpoint override for the SDK client |
//! | `RUST_LOG`              | `info`  | Log filter directives                |
//! | `LOG_FORMAT`            | `json`  | `json` or `text`                     |
//!
//! Region and credentials come from the default AWS provider chain.

use thiserror::Error;

pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub endpoint_url: Option<String>,
    pub log_filter: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unsupported LOG_FORMAT '{0}', expected 'json' or 'text'")]
    UnsupportedLogFormat(String),
}

impl ProviderConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let log_format = match non_empty("LOG_FORMAT") {
            None => LogFormat::Json,
            Some(value) => match value.trim().to_ascii_lowercase().as_str() {
                "json" => LogFormat::Json,
                "text" => LogFormat::Text,
                _ => return Err(ConfigError::UnsupportedLogFormat(value)),
            },
        };

        Ok(Self {
            endpoint_url: non_empty("FLEETHUB_ENDPOINT_URL"),
            log_filter: non_empty("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            log_format,
        })
    }
}
