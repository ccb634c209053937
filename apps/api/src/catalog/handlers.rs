//! Axum route handlers for the Companies directory.

use axum::{
    extract::State,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extract::AppQuery;
use crate::models::student::MAX_CGPA;
use crate::models::Company;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DirectoryQuery {
    /// Only list companies whose CGPA cutoff this value clears.
    pub cgpa: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct DirectoryResponse {
    pub count: usize,
    pub companies: Vec<Company>,
}

/// GET /api/v1/companies
pub async fn handle_list_companies(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<DirectoryQuery>,
) -> Result<Json<DirectoryResponse>, AppError> {
    if let Some(cgpa) = query.cgpa {
        if !cgpa.is_finite() || !(0.0..=MAX_CGPA).contains(&cgpa) {
            return Err(AppError::Validation(format!(
                "cgpa must be between 0.0 and 10.0, got {cgpa}"
            )));
        }
    }

    let companies: Vec<Company> = state
        .catalog
        .companies()
        .iter()
        .filter(|c| query.cgpa.map_or(true, |cgpa| cgpa >= c.min_cgpa))
        .cloned()
        .collect();

    Ok(Json(DirectoryResponse {
        count: companies.len(),
        companies,
    }))
}
