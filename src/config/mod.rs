#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{validate_header, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Environment variable holding the API base URL.
pub const BASE_URL_ENV: &str = "API_BASE_URL";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Origin prefixed to every request path. Empty means relative paths.
    #[serde(default)]
    pub base_url: String,

    /// Extra headers sent with every request, applied over the JSON defaults.
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            headers: HashMap::new(),
        }
    }

    /// Reads the base URL from `API_BASE_URL`; unset means empty.
    pub fn from_env() -> Self {
        Self::from_env_var(BASE_URL_ENV)
    }

    pub fn from_env_var(var: &str) -> Self {
        let base_url = std::env::var(var).unwrap_or_default();
        tracing::debug!("Base URL from ${}: {:?}", var, base_url);
        Self::new(base_url)
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        if !self.base_url.is_empty() {
            validate_url("base_url", &self.base_url)?;
        }

        for (name, value) in &self.headers {
            validate_header(name, value)?;
        }

        Ok(())
    }
}
