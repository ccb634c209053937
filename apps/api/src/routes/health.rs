use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status, version, and what was loaded at startup.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "placement-api",
        "companies": state.catalog.companies().len(),
        "curriculum_years": state.catalog.curriculum().len(),
        "llm_enabled": state.llm.is_some(),
        "interview_sessions": state.sessions.len().await
    }))
}
