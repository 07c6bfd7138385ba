use std::env;

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000/api/lookup";

fn default_url() -> String {
    DEFAULT_API_URL.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Lookup endpoint, receives the PUT with the characters to resolve
    #[serde(default = "default_url")]
    pub url: String,
}

impl ApiConfig {
    pub fn new() -> Self {
        Self::from_var(env::var("ZIDIAN_API_URL").ok())
    }

    /// Build from a raw `ZIDIAN_API_URL` value
    pub fn from_var(url: Option<String>) -> Self {
        Self {
            url: url.unwrap_or_else(default_url),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { url: default_url() }
    }
}
