pub mod health;
pub mod home;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::catalog::handlers as catalog;
use crate::guidance::handlers as guidance;
use crate::interview::handlers as interview;
use crate::placement::handlers as placement;
use crate::resume::handlers as resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/home", get(home::home_handler))
        // Companies directory
        .route("/api/v1/companies", get(catalog::handle_list_companies))
        // Placement readiness
        .route(
            "/api/v1/placement/evaluate",
            post(placement::handle_evaluate),
        )
        // Resume checker
        .route(
            "/api/v1/resume/analyze",
            post(resume::handle_analyze).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/api/v1/resume/feedback", post(resume::handle_feedback))
        // Study guidance
        .route("/api/v1/study/roadmap", get(guidance::handle_roadmap))
        .route(
            "/api/v1/study/roadmap/personalized",
            post(guidance::handle_personalized_roadmap),
        )
        // HR round
        .route(
            "/api/v1/interview/quiz",
            get(interview::handle_quiz_questions).post(interview::handle_quiz_submit),
        )
        .route(
            "/api/v1/interview/sessions",
            post(interview::handle_create_session),
        )
        .route(
            "/api/v1/interview/sessions/:id",
            get(interview::handle_get_session),
        )
        .route(
            "/api/v1/interview/sessions/:id/messages",
            post(interview::handle_send_message),
        )
        .with_state(state)
}
