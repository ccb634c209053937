use axum::{
    extract::State,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extract::AppQuery;
use crate::models::student::parse_selected_year;
use crate::models::AcademicYear;
use crate::state::AppState;

const HIGHLIGHTS: [&str; 3] = [
    "where they stand today",
    "what companies expect",
    "what to study next (without violating curriculum flow)",
];

#[derive(Debug, Deserialize)]
pub struct HomeQuery {
    pub year: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub title: &'static str,
    pub tagline: &'static str,
    pub personalized: bool,
    pub year: Option<AcademicYear>,
    pub message: String,
    pub highlights: [&'static str; 3],
    pub companies_on_campus: usize,
}

/// GET /api/v1/home?year=
pub async fn home_handler(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<HomeQuery>,
) -> Result<Json<HomeResponse>, AppError> {
    let year = parse_selected_year(query.year.as_deref())
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let message = match year {
        Some(year) => format!("Personalized mode active for {year} students."),
        None => "Select your academic year to activate personalization.".to_string(),
    };

    Ok(Json(HomeResponse {
        title: "Placement Guidance System",
        tagline: "Curriculum-aware career guidance for students",
        personalized: year.is_some(),
        year,
        message,
        highlights: HIGHLIGHTS,
        companies_on_campus: state.catalog.companies().len(),
    }))
}
