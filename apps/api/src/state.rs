use std::sync::Arc;

use crate::config::Config;
use crate::trends::SkillTrendsService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Owns the process-wide trends cache; one instance per process.
    pub trends: Arc<SkillTrendsService>,
}
