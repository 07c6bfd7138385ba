use std::sync::Arc;

use zidian_config::Config;
use zidian_core::LookupService;

use crate::render::Renderer;

pub struct AppState {
    pub service: Arc<LookupService>,
    pub renderer: Renderer,
}

impl AppState {
    pub fn new(config: &Config, renderer: Renderer) -> Self {
        tracing::info!("Using lookup API at {}", config.api.url);

        Self {
            service: Arc::new(LookupService::with_http(config.api.url.clone())),
            renderer,
        }
    }
}
