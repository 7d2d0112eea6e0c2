//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the config file. They are
//! deserialized directly and carry defaults so a missing file or section
//! still yields a usable configuration.

use serde::{Deserialize, Serialize};
use std::env;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Inference provider settings
    pub provider: ProviderConfig,
}

/// Settings for the inference provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Bearer credential. Usually supplied through the environment rather
    /// than the file; see [`ProviderConfig::resolve_api_key`].
    pub api_key: Option<String>,
    /// Model identifier sent with each request.
    pub model: String,
    /// API base URL, without the `/chat/completions` suffix.
    pub base_url: String,
    /// Outbound request timeout ceiling.
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "deepseek-chat".to_string(),
            base_url: "https://api.deepseek.com".to_string(),
            timeout_secs: 30,
        }
    }
}

impl ProviderConfig {
    /// Fill in the API key from the environment when the file left it unset.
    ///
    /// Precedence: file value, then `SURVEYFORGE_API_KEY`, then
    /// `DEEPSEEK_API_KEY`.
    pub fn resolve_api_key(mut self) -> Self {
        if self.api_key.is_none() {
            self.api_key = env::var("SURVEYFORGE_API_KEY")
                .or_else(|_| env::var("DEEPSEEK_API_KEY"))
                .ok()
                .filter(|key| !key.is_empty());
        }
        self
    }
}
