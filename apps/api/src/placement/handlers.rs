//! Axum route handlers for the Placement API.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::extract::AppJson;
use crate::models::{Student, StudentProfile};
use crate::placement::fit_scoring::EvaluationResult;
use crate::placement::ranking::{evaluate_all, rank_eligible, summarize, PlacementSummary};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PlacementResponse {
    pub summary: PlacementSummary,
    /// Eligible companies only, best fit first.
    pub results: Vec<EvaluationResult>,
    pub companies_evaluated: usize,
}

/// POST /api/v1/placement/evaluate
///
/// Scores the profile against every company, then ranks the eligible ones.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    AppJson(profile): AppJson<StudentProfile>,
) -> Result<Json<PlacementResponse>, AppError> {
    let student = Student::try_from(profile).map_err(|e| AppError::Validation(e.to_string()))?;

    let results = evaluate_all(state.fit_scorer.as_ref(), &student, &state.catalog);
    let companies_evaluated = results.len();
    let ranked = rank_eligible(results);
    let summary = summarize(&ranked);

    info!(
        "Placement evaluation: year={}, eligible={}/{}",
        student.year, summary.eligible_companies, companies_evaluated
    );

    Ok(Json(PlacementResponse {
        summary,
        results: ranked,
        companies_evaluated,
    }))
}
