use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::student::{normalize_skill, MAX_CGPA};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompanyError {
    #[error("company name is empty")]
    EmptyName,

    #[error("company '{name}' has invalid min_cgpa {min_cgpa}")]
    InvalidMinCgpa { name: String, min_cgpa: f64 },
}

/// A recruiting company and its published hiring criteria.
///
/// Deserialization validates through [`Company::new`], so every `Company` in memory
/// has a non-empty name, a min CGPA within 0–10, and normalized, de-duplicated skills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCompany")]
pub struct Company {
    pub name: String,
    pub min_cgpa: f64,
    pub required_skills: Vec<String>,
    /// Display-only package / stipend text, e.g. "4.25 LPA".
    pub package: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawCompany {
    #[serde(alias = "company")]
    name: String,
    min_cgpa: f64,
    #[serde(default, alias = "skills")]
    required_skills: Vec<String>,
    #[serde(default)]
    package: Option<String>,
}

impl TryFrom<RawCompany> for Company {
    type Error = CompanyError;

    fn try_from(raw: RawCompany) -> Result<Self, Self::Error> {
        Company::new(raw.name, raw.min_cgpa, raw.required_skills, raw.package)
    }
}

impl Company {
    pub fn new<I, S>(
        name: impl Into<String>,
        min_cgpa: f64,
        required_skills: I,
        package: Option<String>,
    ) -> Result<Self, CompanyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(CompanyError::EmptyName);
        }
        if !min_cgpa.is_finite() || !(0.0..=MAX_CGPA).contains(&min_cgpa) {
            return Err(CompanyError::InvalidMinCgpa { name, min_cgpa });
        }

        // Keep first-seen order: it is the order missing skills are reported in.
        let mut skills: Vec<String> = Vec::new();
        for skill in required_skills {
            let skill = normalize_skill(skill.as_ref());
            if !skill.is_empty() && !skills.contains(&skill) {
                skills.push(skill);
            }
        }

        Ok(Self {
            name,
            min_cgpa,
            required_skills: skills,
            package: package.map(|p| p.trim().to_string()).filter(|p| !p.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_alias_field_names() {
        let json = r#"{"company": "Juspay", "min_cgpa": 7.0, "skills": ["Python", "DSA", "python"], "package": "21 – 27 LPA"}"#;
        let company: Company = serde_json::from_str(json).unwrap();
        assert_eq!(company.name, "Juspay");
        assert_eq!(company.required_skills, vec!["python", "dsa"]);
        assert_eq!(company.package.as_deref(), Some("21 – 27 LPA"));
    }

    #[test]
    fn test_deserialize_canonical_field_names() {
        let json = r#"{"name": "TCS", "min_cgpa": 6.0, "required_skills": ["java"]}"#;
        let company: Company = serde_json::from_str(json).unwrap();
        assert_eq!(company.name, "TCS");
        assert!(company.package.is_none());
    }

    #[test]
    fn test_missing_min_cgpa_rejected() {
        let json = r#"{"company": "NoCutoff", "skills": ["java"]}"#;
        assert!(serde_json::from_str::<Company>(json).is_err());
    }

    #[test]
    fn test_invalid_min_cgpa_rejected() {
        let json = r#"{"company": "Broken", "min_cgpa": 12.5, "skills": []}"#;
        assert!(serde_json::from_str::<Company>(json).is_err());
    }

    #[test]
    fn test_blank_name_rejected() {
        assert_eq!(
            Company::new("  ", 6.0, ["c"], None),
            Err(CompanyError::EmptyName)
        );
    }
}
