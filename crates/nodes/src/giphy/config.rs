//! Connection settings for the Giphy search endpoint.

use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "https://api.giphy.com/v1/gifs/search";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GiphyConfig {
    /// Search endpoint URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Value of the `lang` query parameter.
    #[serde(default = "default_lang")]
    pub lang: String,
    /// Name of the API key in the secret store.
    #[serde(default = "default_secret_name")]
    pub secret_name: String,
    /// Optional request timeout. Unset means the call may block indefinitely.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_lang() -> String {
    "en".to_string()
}

fn default_secret_name() -> String {
    "GIPHY".to_string()
}

impl Default for GiphyConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            lang: default_lang(),
            secret_name: default_secret_name(),
            timeout_secs: None,
        }
    }
}
