//! Axum route handlers for the Skill Trends API.

use axum::{extract::State, Json};

use crate::state::AppState;
use crate::trends::models::SkillTrendsResponse;

/// GET /api/skills
///
/// Always 200. Provenance is reported through `source` ("cache" | "fresh" |
/// "stale-cache" | "fallback") and an optional `error`.
pub async fn handle_get_skills(State(state): State<AppState>) -> Json<SkillTrendsResponse> {
    Json(state.trends.get_skill_trends().await)
}
