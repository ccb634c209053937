//! Axum route handlers for the Resume Checker API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::info;

use crate::errors::AppError;
use crate::extract::AppJson;
use crate::llm_client::prompts::{render, MENTOR_PERSONA, PLAIN_TEXT_INSTRUCTION};
use crate::models::Company;
use crate::resume::matcher::{analyze_resume, match_resume_to_company, ResumeAnalysis};
use crate::resume::pdf::{extract_pdf_text_blocking, ResumeError};
use crate::resume::prompts::{GENERAL_TARGET, RESUME_FEEDBACK_PROMPT};
use crate::resume::skills::extract_skills;
use crate::state::AppState;

/// Multipart field that carries the PDF.
const RESUME_FIELD: &str = "resume";

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub resume_text: String,
    pub company: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub found_skills: BTreeSet<String>,
    pub feedback: String,
}

impl From<ResumeError> for AppError {
    fn from(e: ResumeError) -> Self {
        match e {
            ResumeError::NotPdf => AppError::Validation(e.user_message().to_string()),
            ResumeError::Extraction(_) | ResumeError::NoText => {
                info!("Resume rejected: {e}");
                AppError::UnprocessableEntity(e.user_message().to_string())
            }
        }
    }
}

/// POST /api/v1/resume/analyze
///
/// Multipart upload with a `resume` PDF field. Returns detected skills and the
/// skill match against every company.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeAnalysis>, AppError> {
    let mut upload: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid upload: {e}")))?
    {
        if field.name() == Some(RESUME_FIELD) {
            upload = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Invalid upload: {e}")))?,
            );
        }
    }

    let bytes = upload.ok_or_else(|| {
        AppError::Validation(format!("Upload your resume as a PDF in the '{RESUME_FIELD}' field"))
    })?;

    let text = extract_pdf_text_blocking(bytes).await?;
    let analysis = analyze_resume(&text, &state.skill_vocabulary, &state.catalog);

    info!(
        "Resume analyzed: {} words, {} skills found",
        analysis.word_count,
        analysis.found_skills.len()
    );
    Ok(Json(analysis))
}

/// POST /api/v1/resume/feedback
///
/// Free-form LLM review of resume text, optionally against one company.
pub async fn handle_feedback(
    State(state): State<AppState>,
    AppJson(request): AppJson<FeedbackRequest>,
) -> Result<Json<FeedbackResponse>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation("resume_text cannot be empty".to_string()));
    }
    let llm = state.llm()?;

    let company = match request.company.as_deref() {
        Some(name) if !name.trim().is_empty() => Some(
            state
                .catalog
                .find_company(name)
                .ok_or_else(|| AppError::NotFound(format!("Company '{name}' not found")))?,
        ),
        _ => None,
    };

    let found_skills = extract_skills(
        &request.resume_text,
        state.skill_vocabulary.iter().map(String::as_str),
    );
    let prompt = build_feedback_prompt(&request.resume_text, &found_skills, company);

    let feedback = llm
        .complete(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Resume feedback failed: {e}")))?;

    Ok(Json(FeedbackResponse {
        found_skills,
        feedback,
    }))
}

fn build_feedback_prompt(
    resume_text: &str,
    found_skills: &BTreeSet<String>,
    company: Option<&Company>,
) -> String {
    let target = match company {
        Some(company) => {
            let matched = match_resume_to_company(found_skills, company);
            format!(
                "{} (min CGPA {:.1}). Required skills: {}. Missing from resume: {}.",
                company.name,
                company.min_cgpa,
                join_or_none(&company.required_skills),
                join_or_none(&matched.missing_skills),
            )
        }
        None => GENERAL_TARGET.to_string(),
    };
    let skills: Vec<String> = found_skills.iter().cloned().collect();

    let body = render(
        RESUME_FEEDBACK_PROMPT,
        &[
            ("target", target.as_str()),
            ("found_skills", join_or_none(&skills).as_str()),
            ("resume_text", resume_text),
        ],
    );
    format!("{MENTOR_PERSONA}\n{PLAIN_TEXT_INSTRUCTION}\n\n{body}")
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}
