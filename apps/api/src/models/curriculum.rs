use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

use crate::models::student::normalize_skill;
use crate::models::year::AcademicYear;

/// What a given year of the programme is expected to cover.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "RawYearPlan")]
pub struct YearPlan {
    pub competencies: Vec<String>,
    pub focus_areas: Vec<String>,
}

/// A year is either a bare list of competencies or a detailed object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawYearPlan {
    Topics(Vec<String>),
    Detailed {
        #[serde(default, alias = "topics")]
        competencies: Vec<String>,
        #[serde(default, alias = "focus")]
        focus_areas: Vec<String>,
    },
}

impl From<RawYearPlan> for YearPlan {
    fn from(raw: RawYearPlan) -> Self {
        let (competencies, focus_areas) = match raw {
            RawYearPlan::Topics(topics) => (topics, Vec::new()),
            RawYearPlan::Detailed {
                competencies,
                focus_areas,
            } => (competencies, focus_areas),
        };
        YearPlan {
            competencies: competencies
                .iter()
                .map(|c| normalize_skill(c))
                .filter(|c| !c.is_empty())
                .collect(),
            focus_areas,
        }
    }
}

/// Year → expected competencies. Read-only once loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Curriculum {
    years: BTreeMap<AcademicYear, YearPlan>,
}

impl Curriculum {
    pub fn new(years: BTreeMap<AcademicYear, YearPlan>) -> Self {
        Self { years }
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn plan(&self, year: AcademicYear) -> Option<&YearPlan> {
        self.years.get(&year)
    }

    /// Every competency the curriculum expects to have been covered by the end of `year`.
    pub fn covered_through(&self, year: AcademicYear) -> BTreeSet<&str> {
        self.years
            .range(..=year)
            .flat_map(|(_, plan)| plan.competencies.iter().map(String::as_str))
            .collect()
    }

    /// The first year whose plan lists `skill`, if any.
    pub fn introduced_in(&self, skill: &str) -> Option<AcademicYear> {
        self.years
            .iter()
            .find(|(_, plan)| plan.competencies.iter().any(|c| c == skill))
            .map(|(year, _)| *year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Curriculum {
        let mut years = BTreeMap::new();
        years.insert(
            AcademicYear::First,
            YearPlan {
                competencies: vec!["c".to_string(), "python".to_string()],
                focus_areas: vec![],
            },
        );
        years.insert(
            AcademicYear::Third,
            YearPlan {
                competencies: vec!["dbms".to_string(), "sql".to_string()],
                focus_areas: vec!["OS, CN".to_string()],
            },
        );
        Curriculum::new(years)
    }

    #[test]
    fn test_covered_through_is_cumulative() {
        let curriculum = sample();
        let covered = curriculum.covered_through(AcademicYear::Second);
        assert!(covered.contains("python"));
        assert!(!covered.contains("dbms"));
        assert!(curriculum
            .covered_through(AcademicYear::Fourth)
            .contains("dbms"));
    }

    #[test]
    fn test_introduced_in_returns_first_year() {
        let curriculum = sample();
        assert_eq!(curriculum.introduced_in("sql"), Some(AcademicYear::Third));
        assert_eq!(curriculum.introduced_in("rust"), None);
    }

    #[test]
    fn test_year_plan_accepts_list_or_object() {
        let plan: YearPlan = serde_json::from_str(r#"["C", " Python "]"#).unwrap();
        assert_eq!(plan.competencies, vec!["c", "python"]);
        assert!(plan.focus_areas.is_empty());

        let plan: YearPlan = serde_json::from_str(
            r#"{"competencies": ["DBMS"], "focus_areas": ["Internships"]}"#,
        )
        .unwrap();
        assert_eq!(plan.competencies, vec!["dbms"]);
        assert_eq!(plan.focus_areas, vec!["Internships"]);
    }
}
