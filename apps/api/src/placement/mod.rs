// Placement readiness: per-company eligibility and fit scoring, then ranking.
// The scorer is pure; handlers only validate the profile and shape the response.

pub mod fit_scoring;
pub mod handlers;
pub mod ranking;
