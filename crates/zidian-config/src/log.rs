use std::env;

use serde::{Deserialize, Serialize};

fn default_filter() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directive used when RUST_LOG is unset
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Emit JSON lines instead of the human format
    #[serde(default)]
    pub json: bool,
}

impl LogConfig {
    pub fn new() -> Self {
        Self::from_vars(env::var("ZIDIAN_LOG").ok(), env::var("ZIDIAN_LOG_JSON").ok())
    }

    /// Build from raw `ZIDIAN_LOG` / `ZIDIAN_LOG_JSON` values
    pub fn from_vars(filter: Option<String>, json: Option<String>) -> Self {
        let json = match json.as_deref() {
            None => false,
            Some(value) => parse_flag(value).unwrap_or_else(|| {
                // Logging is not set up yet, so this goes straight to stderr
                eprintln!("warning: ignoring ZIDIAN_LOG_JSON={value:?}, expected true/false");
                false
            }),
        };

        Self {
            filter: filter.unwrap_or_else(default_filter),
            json,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

/// Boolean env flag: 1/true/yes/on and 0/false/no/off, any case
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
