//! Site-wide client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root component fetches `/api/config/client` once and provides the
//! result as `RwSignal<ClientConfig>`. Components only read from it, using
//! `get_or_default` so an unloaded or partial config never breaks rendering.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key of the boolean flag that enables the footer's feed popup.
pub const RSS_KEY: &str = "rss";

/// Read-only key/value view over the server-provided client config.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientConfig {
    values: Map<String, Value>,
}

impl ClientConfig {
    pub fn new(values: Map<String, Value>) -> Self {
        Self { values }
    }

    /// Parse a JSON object. Non-object documents yield an empty config.
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(values)) => Self { values },
            _ => Self::default(),
        }
    }

    /// Typed lookup returning `default` when the key is missing or has the wrong shape.
    pub fn get_or_default<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.values
            .get(key)
            .and_then(|v| T::deserialize(v).ok())
            .unwrap_or(default)
    }

    pub fn rss_enabled(&self) -> bool {
        self.get_or_default(RSS_KEY, false)
    }
}
