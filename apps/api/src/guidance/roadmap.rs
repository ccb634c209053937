use serde::Serialize;

use crate::models::{AcademicYear, Curriculum};

/// Built-in focus areas, used when the curriculum file does not provide any for a year.
pub fn default_focus_areas(year: AcademicYear) -> &'static [&'static str] {
    match year {
        AcademicYear::First => &["Programming fundamentals", "Math & logic", "Exploration"],
        AcademicYear::Second => &["DSA", "OOPS", "Mini projects"],
        AcademicYear::Third => &["OS, CN", "Internships", "Resume building"],
        AcademicYear::Fourth => &["SQL & system design", "Interview prep", "Company targeting"],
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Roadmap {
    pub year: AcademicYear,
    pub focus_areas: Vec<String>,
    /// Everything the curriculum expects to be covered by the end of this year.
    pub expected_competencies: Vec<String>,
    /// What the next year introduces. Empty in the final year.
    pub upcoming_competencies: Vec<String>,
}

pub fn build_roadmap(curriculum: &Curriculum, year: AcademicYear) -> Roadmap {
    let focus_areas = curriculum
        .plan(year)
        .map(|plan| plan.focus_areas.clone())
        .filter(|areas| !areas.is_empty())
        .unwrap_or_else(|| {
            default_focus_areas(year)
                .iter()
                .map(|s| s.to_string())
                .collect()
        });

    let upcoming_competencies = AcademicYear::ALL
        .into_iter()
        .find(|next| *next > year)
        .and_then(|next| curriculum.plan(next))
        .map(|plan| plan.competencies.clone())
        .unwrap_or_default();

    Roadmap {
        year,
        focus_areas,
        expected_competencies: curriculum
            .covered_through(year)
            .into_iter()
            .map(String::from)
            .collect(),
        upcoming_competencies,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::curriculum::YearPlan;
    use std::collections::BTreeMap;

    fn curriculum() -> Curriculum {
        let mut years = BTreeMap::new();
        years.insert(
            AcademicYear::Second,
            YearPlan {
                competencies: vec!["java".to_string(), "oops".to_string()],
                focus_areas: vec!["Competitive programming".to_string()],
            },
        );
        years.insert(
            AcademicYear::Third,
            YearPlan {
                competencies: vec!["dbms".to_string()],
                focus_areas: vec![],
            },
        );
        Curriculum::new(years)
    }

    #[test]
    fn test_curriculum_focus_areas_take_precedence() {
        let roadmap = build_roadmap(&curriculum(), AcademicYear::Second);
        assert_eq!(roadmap.focus_areas, vec!["Competitive programming"]);
        assert_eq!(roadmap.upcoming_competencies, vec!["dbms"]);
    }

    #[test]
    fn test_falls_back_to_builtin_focus_areas() {
        let roadmap = build_roadmap(&curriculum(), AcademicYear::Third);
        assert_eq!(roadmap.focus_areas, vec!["OS, CN", "Internships", "Resume building"]);
        assert_eq!(roadmap.expected_competencies, vec!["dbms", "java", "oops"]);
    }

    #[test]
    fn test_empty_curriculum_still_has_focus() {
        let roadmap = build_roadmap(&Curriculum::default(), AcademicYear::Fourth);
        assert_eq!(roadmap.focus_areas.len(), 3);
        assert!(roadmap.expected_competencies.is_empty());
        assert!(roadmap.upcoming_competencies.is_empty());
    }
}
