//! Axum route handlers for the Interview API (knowledge quiz and mock HR chat).

use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::AppJson;
use crate::interview::prompts::{EMPTY_TRANSCRIPT, INTERVIEWER_PROMPT};
use crate::interview::quiz::{grade, QuizQuestion, QuizResult, QUESTIONS};
use crate::interview::session::{ChatRole, InterviewSession, SessionError};
use crate::llm_client::prompts::{render, MENTOR_PERSONA, PLAIN_TEXT_INSTRUCTION};
use crate::models::student::parse_selected_year;
use crate::state::AppState;

/// Older messages are dropped from the prompt, not from the session.
const MAX_REPLAYED_MESSAGES: usize = 20;
const MAX_MESSAGE_CHARS: usize = 4000;

#[derive(Debug, Deserialize)]
pub struct QuizSubmission {
    pub answers: HashMap<String, String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateSessionRequest {
    pub year: Option<String>,
    pub company: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub content: String,
}

impl From<SessionError> for AppError {
    fn from(e: SessionError) -> Self {
        match e {
            SessionError::NotFound(_) => AppError::NotFound(e.to_string()),
            SessionError::Busy | SessionError::Full(_) => AppError::Conflict(e.to_string()),
        }
    }
}

/// GET /api/v1/interview/quiz
pub async fn handle_quiz_questions() -> Json<&'static [QuizQuestion]> {
    Json(QUESTIONS)
}

/// POST /api/v1/interview/quiz
pub async fn handle_quiz_submit(
    AppJson(submission): AppJson<QuizSubmission>,
) -> Result<Json<QuizResult>, AppError> {
    let result = grade(&submission.answers).map_err(|e| AppError::Validation(e.to_string()))?;
    Ok(Json(result))
}

/// POST /api/v1/interview/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateSessionRequest>,
) -> Result<(StatusCode, Json<InterviewSession>), AppError> {
    let year = parse_selected_year(request.year.as_deref())
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let company = match request.company.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => Some(
            state
                .catalog
                .find_company(name)
                .map(|c| c.name.clone())
                .ok_or_else(|| AppError::NotFound(format!("Company '{name}' not found")))?,
        ),
        _ => None,
    };

    let session = state.sessions.create(year, company).await;
    info!("Interview session {} created", session.id);
    Ok((StatusCode::CREATED, Json(session)))
}

/// GET /api/v1/interview/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<InterviewSession>, AppError> {
    state
        .sessions
        .get(id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Interview session {id} not found")))
}

/// POST /api/v1/interview/sessions/:id/messages
///
/// Sends the candidate's message and appends it with the interviewer's reply.
/// If the model call fails nothing is appended, so the student can simply retry.
/// A second message sent while a reply is pending gets 409.
pub async fn handle_send_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    AppJson(request): AppJson<ChatRequest>,
) -> Result<Json<InterviewSession>, AppError> {
    let content = request.content.trim().to_string();
    if content.is_empty() {
        return Err(AppError::Validation("content cannot be empty".to_string()));
    }
    if content.chars().count() > MAX_MESSAGE_CHARS {
        return Err(AppError::Validation(format!(
            "content must be at most {MAX_MESSAGE_CHARS} characters"
        )));
    }

    let turn = state.sessions.begin_turn(id).await?;
    let llm = state.llm()?;

    let prompt = build_interview_prompt(turn.session(), &content);
    let reply = llm
        .complete(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Interview reply failed: {e}")))?;

    let updated = state.sessions.append_exchange(turn, content, reply).await?;
    Ok(Json(updated))
}

fn build_interview_prompt(session: &InterviewSession, message: &str) -> String {
    let candidate = match (&session.year, &session.company) {
        (Some(year), Some(company)) => format!("{year} student interviewing for {company}"),
        (Some(year), None) => format!("{year} student"),
        (None, Some(company)) => format!("Student interviewing for {company}"),
        (None, None) => "Engineering student".to_string(),
    };

    let recent = session.recent(MAX_REPLAYED_MESSAGES);
    let transcript = if recent.is_empty() {
        EMPTY_TRANSCRIPT.to_string()
    } else {
        recent
            .iter()
            .map(|m| {
                let speaker = match m.role {
                    ChatRole::User => "Candidate",
                    ChatRole::Assistant => "Interviewer",
                };
                format!("{speaker}: {}", m.content)
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    let body = render(
        INTERVIEWER_PROMPT,
        &[
            ("candidate", candidate.as_str()),
            ("transcript", transcript.as_str()),
            ("message", message),
        ],
    );
    format!("{MENTOR_PERSONA}\n{PLAIN_TEXT_INSTRUCTION}\n\n{body}")
}
