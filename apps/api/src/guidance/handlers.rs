//! Axum route handlers for the Study Guidance API.

use axum::{
    extract::State,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extract::{AppJson, AppQuery};
use crate::guidance::prompts::ROADMAP_PROMPT;
use crate::guidance::roadmap::{build_roadmap, Roadmap};
use crate::llm_client::prompts::{
    render, CURRICULUM_INSTRUCTION, MENTOR_PERSONA, PLAIN_TEXT_INSTRUCTION,
};
use crate::models::student::parse_selected_year;
use crate::models::{Student, StudentProfile};
use crate::placement::ranking::{evaluate_all, rank_eligible};
use crate::state::AppState;

/// How many top-ranked companies feed skill recommendations when no target is given.
const TOP_COMPANIES_FOR_RECOMMENDATIONS: usize = 3;

#[derive(Debug, Deserialize)]
pub struct YearQuery {
    pub year: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PersonalizedRoadmapRequest {
    #[serde(flatten)]
    pub profile: StudentProfile,
    pub company: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PersonalizedRoadmapResponse {
    pub roadmap: Roadmap,
    pub recommended_skills: Vec<String>,
    pub plan: String,
}

/// GET /api/v1/study/roadmap?year=3rd%20Year
pub async fn handle_roadmap(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<YearQuery>,
) -> Result<Json<Roadmap>, AppError> {
    let year = parse_selected_year(query.year.as_deref())
        .map_err(|e| AppError::Validation(e.to_string()))?
        .ok_or_else(|| {
            AppError::Validation("Select your academic year to view roadmap.".to_string())
        })?;

    Ok(Json(build_roadmap(state.catalog.curriculum(), year)))
}

/// POST /api/v1/study/roadmap/personalized
///
/// LLM-written plan that only recommends skills the curriculum allows at the student's stage.
pub async fn handle_personalized_roadmap(
    State(state): State<AppState>,
    AppJson(request): AppJson<PersonalizedRoadmapRequest>,
) -> Result<Json<PersonalizedRoadmapResponse>, AppError> {
    let student =
        Student::try_from(request.profile).map_err(|e| AppError::Validation(e.to_string()))?;
    let llm = state.llm()?;
    let curriculum = state.catalog.curriculum();

    let (target, recommended_skills) = match request.company.as_deref() {
        Some(name) if !name.trim().is_empty() => {
            let company = state
                .catalog
                .find_company(name)
                .ok_or_else(|| AppError::NotFound(format!("Company '{name}' not found")))?;
            let result = state.fit_scorer.evaluate(&student, company, curriculum);
            (company.name.clone(), result.recommended_skills)
        }
        _ => {
            let ranked = rank_eligible(evaluate_all(
                state.fit_scorer.as_ref(),
                &student,
                &state.catalog,
            ));
            let mut skills: Vec<String> = Vec::new();
            for result in ranked.iter().take(TOP_COMPANIES_FOR_RECOMMENDATIONS) {
                for skill in &result.recommended_skills {
                    if !skills.contains(skill) {
                        skills.push(skill.clone());
                    }
                }
            }
            let target = if ranked.is_empty() {
                "No company is currently within reach on CGPA; focus on fundamentals.".to_string()
            } else {
                let names: Vec<&str> = ranked
                    .iter()
                    .take(TOP_COMPANIES_FOR_RECOMMENDATIONS)
                    .map(|r| r.company.as_str())
                    .collect();
                format!("Best-fit companies: {}", names.join(", "))
            };
            (target, skills)
        }
    };

    let roadmap = build_roadmap(curriculum, student.year);
    let prompt = build_roadmap_prompt(&student, &roadmap, &recommended_skills, &target);

    let plan = llm
        .complete(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Roadmap generation failed: {e}")))?;

    Ok(Json(PersonalizedRoadmapResponse {
        roadmap,
        recommended_skills,
        plan,
    }))
}

fn build_roadmap_prompt(
    student: &Student,
    roadmap: &Roadmap,
    recommended_skills: &[String],
    target: &str,
) -> String {
    let skills: Vec<&str> = student.skills.iter().map(String::as_str).collect();
    let recommended = if recommended_skills.is_empty() {
        "none beyond the curriculum focus".to_string()
    } else {
        recommended_skills.join(", ")
    };

    let body = render(
        ROADMAP_PROMPT,
        &[
            ("year", student.year.label()),
            ("cgpa", format!("{:.2}", student.cgpa).as_str()),
            ("skills", skills.join(", ").as_str()),
            ("experience", student.experience_months.to_string().as_str()),
            ("focus_areas", roadmap.focus_areas.join("\n").as_str()),
            ("recommended_skills", recommended.as_str()),
            ("target", target),
        ],
    );
    format!("{MENTOR_PERSONA}\n{CURRICULUM_INSTRUCTION}\n{PLAIN_TEXT_INSTRUCTION}\n\n{body}")
}
