use std::collections::BTreeSet;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::models::Company;
use crate::resume::skills::extract_skills;

/// How much of one company's skill list a resume covers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumeMatch {
    pub company: String,
    pub match_percent: u32,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

/// Full output of the resume checker.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeAnalysis {
    pub found_skills: BTreeSet<String>,
    pub word_count: usize,
    pub company_matches: Vec<ResumeMatch>,
    /// Extracted text, so the client can request feedback without re-uploading.
    pub text: String,
}

/// A company that lists no skills counts as fully matched.
pub fn match_resume_to_company(found_skills: &BTreeSet<String>, company: &Company) -> ResumeMatch {
    let (matched, missing): (Vec<String>, Vec<String>) = company
        .required_skills
        .iter()
        .cloned()
        .partition(|skill| found_skills.contains(skill));

    let match_percent = if company.required_skills.is_empty() {
        100
    } else {
        (matched.len() as f64 / company.required_skills.len() as f64 * 100.0).round() as u32
    };

    ResumeMatch {
        company: company.name.clone(),
        match_percent,
        matched_skills: matched,
        missing_skills: missing,
    }
}

pub fn analyze_resume(text: &str, vocabulary: &BTreeSet<String>, catalog: &Catalog) -> ResumeAnalysis {
    let found_skills = extract_skills(text, vocabulary.iter().map(String::as_str));
    let company_matches = catalog
        .companies()
        .iter()
        .map(|company| match_resume_to_company(&found_skills, company))
        .collect();

    ResumeAnalysis {
        found_skills,
        word_count: text.split_whitespace().count(),
        company_matches,
        text: text.to_string(),
    }
}
