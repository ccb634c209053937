use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::year::{AcademicYear, UnknownYear};

pub const MAX_CGPA: f64 = 10.0;
pub const MAX_EXPERIENCE_MONTHS: u32 = 60;

/// Placeholder the profile form sends before a year is chosen.
const YEAR_PLACEHOLDER: &str = "Select";

#[derive(Debug, Error, PartialEq)]
pub enum ProfileError {
    #[error("Please select academic year and enter skills.")]
    Incomplete,

    #[error(transparent)]
    UnknownYear(#[from] UnknownYear),

    #[error("CGPA must be between 0.0 and {MAX_CGPA}, got {0}")]
    CgpaOutOfRange(f64),

    #[error("Experience must be between 0 and {MAX_EXPERIENCE_MONTHS} months, got {0}")]
    ExperienceOutOfRange(u32),
}

/// Skills as typed into the profile form ("Python, SQL") or as a JSON list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SkillsInput {
    Csv(String),
    List(Vec<String>),
}

impl SkillsInput {
    fn into_normalized(self) -> BTreeSet<String> {
        let raw: Vec<String> = match self {
            SkillsInput::Csv(s) => s.split(',').map(str::to_string).collect(),
            SkillsInput::List(list) => list,
        };
        raw.iter()
            .map(|s| normalize_skill(s))
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// Raw profile as submitted by the client. Validated into a [`Student`].
#[derive(Debug, Clone, Deserialize)]
pub struct StudentProfile {
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub cgpa: f64,
    #[serde(default)]
    pub skills: Option<SkillsInput>,
    #[serde(default)]
    pub experience_months: u32,
}

/// A validated student, immutable for the duration of an evaluation pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Student {
    pub year: AcademicYear,
    pub cgpa: f64,
    pub skills: BTreeSet<String>,
    pub experience_months: u32,
    /// Not collected yet; always 0.
    pub projects: u32,
}

impl Student {
    pub fn new<I, S>(
        year: AcademicYear,
        cgpa: f64,
        skills: I,
        experience_months: u32,
    ) -> Result<Self, ProfileError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if !cgpa.is_finite() || !(0.0..=MAX_CGPA).contains(&cgpa) {
            return Err(ProfileError::CgpaOutOfRange(cgpa));
        }
        if experience_months > MAX_EXPERIENCE_MONTHS {
            return Err(ProfileError::ExperienceOutOfRange(experience_months));
        }
        Ok(Self {
            year,
            cgpa,
            skills: skills
                .into_iter()
                .map(|s| normalize_skill(s.as_ref()))
                .filter(|s| !s.is_empty())
                .collect(),
            experience_months,
            projects: 0,
        })
    }

    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.contains(skill)
    }
}

impl TryFrom<StudentProfile> for Student {
    type Error = ProfileError;

    fn try_from(profile: StudentProfile) -> Result<Self, Self::Error> {
        let year = parse_selected_year(profile.year.as_deref())?.ok_or(ProfileError::Incomplete)?;
        let skills = profile
            .skills
            .map(SkillsInput::into_normalized)
            .unwrap_or_default();
        if skills.is_empty() {
            return Err(ProfileError::Incomplete);
        }
        Student::new(year, profile.cgpa, skills, profile.experience_months)
    }
}

/// `None` when no year was chosen (absent, blank, or the form placeholder).
pub fn parse_selected_year(raw: Option<&str>) -> Result<Option<AcademicYear>, UnknownYear> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) if s.eq_ignore_ascii_case(YEAR_PLACEHOLDER) => Ok(None),
        Some(s) => s.parse().map(Some),
    }
}

/// Lowercases and collapses internal whitespace so "Data  Structures" == "data structures".
pub fn normalize_skill(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(year: Option<&str>, skills: Option<SkillsInput>) -> StudentProfile {
        StudentProfile {
            year: year.map(String::from),
            cgpa: 7.2,
            skills,
            experience_months: 6,
        }
    }

    #[test]
    fn test_csv_skills_are_trimmed_and_lowercased() {
        let p = profile(
            Some("3rd Year"),
            Some(SkillsInput::Csv(" Python, SQL ,, Data  Structures".to_string())),
        );
        let student = Student::try_from(p).unwrap();
        let skills: Vec<&str> = student.skills.iter().map(String::as_str).collect();
        assert_eq!(skills, vec!["data structures", "python", "sql"]);
        assert_eq!(student.projects, 0);
    }

    #[test]
    fn test_list_skills_accepted() {
        let p = profile(
            Some("2nd Year"),
            Some(SkillsInput::List(vec!["Java".to_string(), "java".to_string()])),
        );
        let student = Student::try_from(p).unwrap();
        assert_eq!(student.skills.len(), 1);
        assert!(student.has_skill("java"));
    }

    #[test]
    fn test_placeholder_year_is_incomplete() {
        let p = profile(Some("Select"), Some(SkillsInput::Csv("python".to_string())));
        assert_eq!(Student::try_from(p), Err(ProfileError::Incomplete));
    }

    #[test]
    fn test_missing_skills_is_incomplete() {
        let p = profile(Some("1st Year"), Some(SkillsInput::Csv(" , ".to_string())));
        assert_eq!(Student::try_from(p), Err(ProfileError::Incomplete));
        let p = profile(Some("1st Year"), None);
        assert_eq!(Student::try_from(p), Err(ProfileError::Incomplete));
    }

    #[test]
    fn test_unknown_year_is_reported() {
        let p = profile(Some("7th Year"), Some(SkillsInput::Csv("c".to_string())));
        assert!(matches!(Student::try_from(p), Err(ProfileError::UnknownYear(_))));
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        assert_eq!(
            Student::new(AcademicYear::First, 10.5, ["c"], 0),
            Err(ProfileError::CgpaOutOfRange(10.5))
        );
        assert_eq!(
            Student::new(AcademicYear::First, 8.0, ["c"], 61),
            Err(ProfileError::ExperienceOutOfRange(61))
        );
        assert!(Student::new(AcademicYear::First, f64::NAN, ["c"], 0).is_err());
    }

    #[test]
    fn test_profile_deserializes_from_form_json() {
        let json = r#"{"year": "3rd Year", "cgpa": 6.8, "skills": "python, sql", "experience_months": 3}"#;
        let p: StudentProfile = serde_json::from_str(json).unwrap();
        let student = Student::try_from(p).unwrap();
        assert_eq!(student.year, AcademicYear::Third);
        assert!(student.has_skill("sql"));
    }
}
