use std::sync::Arc;

use crate::config::Config;
use crate::packing::EngineSettings;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only: every request builds its packing from scratch.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Geometry, coordinate file location and loader expectations for the engine.
    pub engine: Arc<EngineSettings>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let engine = Arc::new(config.engine_settings());
        Self { config, engine }
    }
}
