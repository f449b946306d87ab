pub mod health;

use axum::{http::Uri, routing::get, Router};

use crate::errors::AppError;
use crate::state::AppState;
use crate::trends::handlers;

async fn not_found(uri: Uri) -> Result<(), AppError> {
    Err(AppError::NotFound(format!("No route for {uri}")))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Skill Trends API
        .route("/api/skills", get(handlers::handle_get_skills))
        .fallback(not_found)
        .with_state(state)
}
