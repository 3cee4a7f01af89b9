use crate::constants::{DEBOUNCE_DELAY_MS, DEFAULT_BASE_URL};
use crate::error::Result;
use serde::Deserialize;
use std::fs;
use tracing::debug;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Base URL of the bucket holding candidates.json and donations/
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Quiet period for search input coalescing, in milliseconds
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_debounce_ms() -> u64 {
    DEBOUNCE_DELAY_MS
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl AppConfig {
    /// Loads `config.toml` from the working directory, falling back to
    /// defaults when the file is absent. `KYL_BASE_URL` overrides the
    /// configured base URL either way.
    pub fn load() -> Result<Self> {
        let mut config = match fs::read_to_string("config.toml") {
            Ok(content) => toml::from_str(&content)?,
            Err(_) => {
                debug!("no config.toml found, using defaults");
                Self::default()
            }
        };

        if let Ok(base_url) = std::env::var("KYL_BASE_URL") {
            config.base_url = base_url;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.debounce_ms, DEBOUNCE_DELAY_MS);
    }

    #[test]
    fn explicit_fields_win() {
        let config: AppConfig =
            toml::from_str("base_url = \"http://localhost:9000\"\ndebounce_ms = 50\n").unwrap();
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.debounce_ms, 50);
    }
}
