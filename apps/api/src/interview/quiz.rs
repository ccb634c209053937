use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;

/// Answer value the quiz form sends for an untouched question.
const UNANSWERED: &str = "Select";

#[derive(Debug, Clone, Serialize)]
pub struct QuizQuestion {
    pub id: &'static str,
    pub prompt: &'static str,
    pub options: &'static [&'static str],
    #[serde(skip_serializing)]
    answer: &'static str,
}

pub const QUESTIONS: &[QuizQuestion] = &[
    QuizQuestion {
        id: "binary-search-complexity",
        prompt: "What is the time complexity of binary search?",
        options: &["O(n)", "O(log n)", "O(n log n)", "O(1)"],
        answer: "O(log n)",
    },
    QuizQuestion {
        id: "fifo-structure",
        prompt: "Which data structure uses FIFO order?",
        options: &["Stack", "Queue", "Linked List", "Tree"],
        answer: "Queue",
    },
];

#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuizError {
    #[error("Answer every question before submitting (missing: {0})")]
    Unanswered(String),

    #[error("Unknown question '{0}'")]
    UnknownQuestion(String),

    #[error("'{option}' is not an option for question '{question}'")]
    InvalidOption { question: String, option: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct AnswerFeedback {
    pub id: &'static str,
    pub correct: bool,
    pub correct_answer: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizResult {
    /// Percentage, each question worth an equal share.
    pub score: u32,
    pub correct: usize,
    pub total: usize,
    pub answers: Vec<AnswerFeedback>,
}

pub fn grade(answers: &HashMap<String, String>) -> Result<QuizResult, QuizError> {
    grade_against(QUESTIONS, answers)
}

fn grade_against(
    questions: &[QuizQuestion],
    answers: &HashMap<String, String>,
) -> Result<QuizResult, QuizError> {
    if let Some(unknown) = answers
        .keys()
        .find(|id| !questions.iter().any(|q| q.id == id.as_str()))
    {
        return Err(QuizError::UnknownQuestion(unknown.clone()));
    }

    let mut feedback = Vec::with_capacity(questions.len());
    for question in questions {
        let given = answers
            .get(question.id)
            .map(|a| a.trim())
            .filter(|a| !a.is_empty() && *a != UNANSWERED)
            .ok_or_else(|| QuizError::Unanswered(question.id.to_string()))?;

        if !question.options.iter().any(|option| *option == given) {
            return Err(QuizError::InvalidOption {
                question: question.id.to_string(),
                option: given.to_string(),
            });
        }

        feedback.push(AnswerFeedback {
            id: question.id,
            correct: given == question.answer,
            correct_answer: question.answer,
        });
    }

    let total = questions.len();
    let correct = feedback.iter().filter(|f| f.correct).count();
    let score = if total == 0 {
        0
    } else {
        (correct * 100 / total) as u32
    };

    Ok(QuizResult {
        score,
        correct,
        total,
        answers: feedback,
    })
}
