use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use zidian_config::Config;

/// Look up Chinese characters in the dictionary API
#[derive(Debug, Parser)]
#[command(name = "zidian", version)]
pub struct Cli {
    /// Characters to look up. Starts an interactive session when omitted.
    pub query: Option<String>,

    /// JSON config file, replaces environment configuration
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Lookup endpoint URL
    #[arg(long)]
    pub api_url: Option<String>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Write decoded thumbnails into this directory
    #[arg(long)]
    pub thumbnail_dir: Option<PathBuf>,
}

impl Cli {
    /// Config file (or environment), then command line overrides
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => Config::new(),
        };

        if let Some(url) = &self.api_url {
            config.api.url = url.clone();
        }

        Ok(config)
    }
}
