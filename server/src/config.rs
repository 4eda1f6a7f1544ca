//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid boolean for {key}: {value}")]
    InvalidFlag { key: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Reported by `GET /cdnflag`; enables the footer's CDN attribution line.
    pub cdn_flag: bool,
    /// Exposed to the client as the `rss` config key.
    pub rss_enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT, cdn_flag: false, rss_enabled: false }
    }
}

impl ServerConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `CDN_FLAG`: `1`/`true`/`yes`/`on` enables the CDN note, default off
    /// - `RSS_ENABLED`: same syntax, default off
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to something unparsable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };
        Ok(Self { port, cdn_flag: env_flag("CDN_FLAG")?, rss_enabled: env_flag("RSS_ENABLED")? })
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

fn env_flag(key: &str) -> Result<bool, ConfigError> {
    match std::env::var(key) {
        Ok(value) => parse_bool(&value).ok_or_else(|| ConfigError::InvalidFlag { key: key.to_owned(), value }),
        Err(_) => Ok(false),
    }
}
