//! Fit Scoring: eligibility gate plus weighted fit score of a student against one company.
//!
//! Default: `WeightedFitScorer` (pure, deterministic, no I/O).
//! `AppState` holds an `Arc<dyn FitScorer>` so the weighting can be swapped at startup.

use serde::{Deserialize, Serialize};

use crate::models::{AcademicYear, Company, Curriculum, Student};

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

/// Verdict for one (student, company) pair. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationResult {
    pub company: String,
    pub eligible: bool,
    pub fit_score: u32, // 0 – 100, always 0 when not eligible
    pub matched_skills: Vec<String>,
    /// Required skills the student lacks, in the company's order.
    pub missing_skills: Vec<String>,
    /// Missing skills worth studying now. Excludes skills the curriculum introduces later.
    pub recommended_skills: Vec<String>,
    pub reasons: Vec<String>,
    pub package: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Weights
// ────────────────────────────────────────────────────────────────────────────

/// Points each factor can contribute. Defaults sum to 100.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitWeights {
    pub skills: f64,
    pub experience: f64,
    pub curriculum: f64,
    /// Experience at or beyond this many months earns the full experience weight.
    pub experience_cap_months: u32,
}

impl Default for FitWeights {
    fn default() -> Self {
        Self {
            skills: 70.0,
            experience: 20.0,
            curriculum: 10.0,
            experience_cap_months: 24,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Scores a student against one company. Implementations must be pure.
pub trait FitScorer: Send + Sync {
    fn evaluate(
        &self,
        student: &Student,
        company: &Company,
        curriculum: &Curriculum,
    ) -> EvaluationResult;
}

#[derive(Debug, Clone, Default)]
pub struct WeightedFitScorer {
    pub weights: FitWeights,
}

impl FitScorer for WeightedFitScorer {
    fn evaluate(
        &self,
        student: &Student,
        company: &Company,
        curriculum: &Curriculum,
    ) -> EvaluationResult {
        evaluate_company(student, company, curriculum, &self.weights)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core algorithm
// ────────────────────────────────────────────────────────────────────────────

/// Where a missing skill sits relative to the student's year.
enum CurriculumStage {
    /// Should already be covered: counts against curriculum alignment.
    Behind,
    /// Introduced in a later year: not recommended yet.
    Ahead(AcademicYear),
    /// Not part of the curriculum at all: self-study.
    Outside,
}

pub fn evaluate_company(
    student: &Student,
    company: &Company,
    curriculum: &Curriculum,
    weights: &FitWeights,
) -> EvaluationResult {
    let (matched, missing): (Vec<String>, Vec<String>) = company
        .required_skills
        .iter()
        .cloned()
        .partition(|skill| student.has_skill(skill));

    let mut skill_reasons = Vec::new();
    let mut recommended = Vec::new();
    let mut behind = 0usize;

    for skill in &missing {
        let stage = match curriculum.introduced_in(skill) {
            Some(year) if year > student.year => CurriculumStage::Ahead(year),
            Some(_) => CurriculumStage::Behind,
            None => CurriculumStage::Outside,
        };
        match stage {
            CurriculumStage::Behind => {
                behind += 1;
                recommended.push(skill.clone());
                skill_reasons.push(format!(
                    "Missing required skill: {skill} (already part of your curriculum, revise it)"
                ));
            }
            CurriculumStage::Ahead(year) => skill_reasons.push(format!(
                "Missing required skill: {skill} (introduced in {year}, not expected yet)"
            )),
            CurriculumStage::Outside => {
                recommended.push(skill.clone());
                skill_reasons.push(format!("Missing required skill: {skill}"));
            }
        }
    }

    // Eligibility gate
    if student.cgpa < company.min_cgpa {
        return EvaluationResult {
            company: company.name.clone(),
            eligible: false,
            fit_score: 0,
            matched_skills: matched,
            missing_skills: missing,
            recommended_skills: recommended,
            reasons: vec![format!(
                "CGPA below threshold: {:.2} is less than the {:.2} required by {}",
                student.cgpa, company.min_cgpa, company.name
            )],
            package: company.package.clone(),
        };
    }

    let required = company.required_skills.len();
    let (skill_ratio, alignment) = if required == 0 {
        (1.0, 1.0)
    } else {
        (
            matched.len() as f64 / required as f64,
            1.0 - behind as f64 / required as f64,
        )
    };

    let cap = weights.experience_cap_months.max(1);
    let experience_ratio = student.experience_months.min(cap) as f64 / cap as f64;

    let raw = weights.skills * skill_ratio
        + weights.experience * experience_ratio
        + weights.curriculum * alignment;
    let fit_score = raw.round().clamp(0.0, 100.0) as u32;

    let mut reasons = skill_reasons;
    if student.experience_months == 0 {
        reasons.push("No internship or work experience yet".to_string());
    } else if student.experience_months < cap {
        reasons.push(format!(
            "Experience of {} months is below the {cap} months that earns full credit",
            student.experience_months
        ));
    }

    EvaluationResult {
        company: company.name.clone(),
        eligible: true,
        fit_score,
        matched_skills: matched,
        missing_skills: missing,
        recommended_skills: recommended,
        reasons,
        package: company.package.clone(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
