use serde::Serialize;

use crate::catalog::Catalog;
use crate::models::Student;
use crate::placement::fit_scoring::{EvaluationResult, FitScorer};

/// Headline numbers for the placement view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacementSummary {
    pub best_fit_score: u32,
    pub eligible_companies: usize,
    pub top_company: Option<String>,
    pub status: String,
}

/// Evaluates every company independently, in catalog order.
pub fn evaluate_all(
    scorer: &dyn FitScorer,
    student: &Student,
    catalog: &Catalog,
) -> Vec<EvaluationResult> {
    catalog
        .companies()
        .iter()
        .map(|company| scorer.evaluate(student, company, catalog.curriculum()))
        .collect()
}

/// Drops ineligible results and sorts by fit score, highest first.
/// `sort_by` is stable, so equal scores keep catalog order.
pub fn rank_eligible(results: Vec<EvaluationResult>) -> Vec<EvaluationResult> {
    let mut eligible: Vec<EvaluationResult> =
        results.into_iter().filter(|r| r.eligible).collect();
    eligible.sort_by(|a, b| b.fit_score.cmp(&a.fit_score));
    eligible
}

/// Expects the output of [`rank_eligible`].
pub fn summarize(ranked: &[EvaluationResult]) -> PlacementSummary {
    match ranked.first() {
        Some(best) => PlacementSummary {
            best_fit_score: best.fit_score,
            eligible_companies: ranked.len(),
            top_company: Some(best.company.clone()),
            status: "Eligible".to_string(),
        },
        None => PlacementSummary {
            best_fit_score: 0,
            eligible_companies: 0,
            top_company: None,
            status: "Not Eligible".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AcademicYear, Company, Curriculum};
    use crate::placement::fit_scoring::WeightedFitScorer;

    fn result(company: &str, eligible: bool, fit_score: u32) -> EvaluationResult {
        EvaluationResult {
            company: company.to_string(),
            eligible,
            fit_score,
            matched_skills: vec![],
            missing_skills: vec![],
            recommended_skills: vec![],
            reasons: vec![],
            package: None,
        }
    }

    fn scores(ranked: &[EvaluationResult]) -> Vec<u32> {
        ranked.iter().map(|r| r.fit_score).collect()
    }

    #[test]
    fn test_rank_sorts_descending() {
        let ranked = rank_eligible(vec![
            result("A", true, 80),
            result("B", true, 40),
            result("C", true, 90),
        ]);
        assert_eq!(scores(&ranked), vec![90, 80, 40]);
    }

    #[test]
    fn test_rank_filters_ineligible() {
        let ranked = rank_eligible(vec![
            result("A", false, 0),
            result("B", true, 40),
            result("C", false, 0),
        ]);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].company, "B");
    }

    #[test]
    fn test_ties_keep_input_order() {
        let ranked = rank_eligible(vec![
            result("First", true, 50),
            result("Top", true, 70),
            result("Second", true, 50),
            result("Third", true, 50),
        ]);
        let names: Vec<&str> = ranked.iter().map(|r| r.company.as_str()).collect();
        assert_eq!(names, vec!["Top", "First", "Second", "Third"]);
    }

    #[test]
    fn test_summary_for_best_result() {
        let ranked = rank_eligible(vec![result("A", true, 62), result("B", true, 75)]);
        let summary = summarize(&ranked);
        assert_eq!(summary.best_fit_score, 75);
        assert_eq!(summary.eligible_companies, 2);
        assert_eq!(summary.top_company.as_deref(), Some("B"));
    }

    #[test]
    fn test_summary_when_nothing_eligible() {
        let summary = summarize(&[]);
        assert_eq!(summary.best_fit_score, 0);
        assert_eq!(summary.eligible_companies, 0);
        assert_eq!(summary.status, "Not Eligible");
        assert!(summary.top_company.is_none());
    }

    #[test]
    fn test_evaluate_all_covers_every_company() {
        let catalog = Catalog::new(
            vec![
                Company::new("Strict", 9.0, ["python"], None).unwrap(),
                Company::new("Open", 6.0, ["python"], None).unwrap(),
            ],
            Curriculum::default(),
        );
        let student = Student::new(AcademicYear::Fourth, 7.5, ["python"], 12).unwrap();
        let results = evaluate_all(&WeightedFitScorer::default(), &student, &catalog);

        assert_eq!(results.len(), 2);
        assert!(!results[0].eligible);
        assert!(results[1].eligible);
        assert_eq!(rank_eligible(results)[0].company, "Open");
    }
}
