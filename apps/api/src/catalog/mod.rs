// Static reference data: the on-campus company list and the curriculum.
// Loaded once at startup and shared read-only through `AppState`.

pub mod handlers;
pub mod loader;

use crate::models::{Company, Curriculum};

pub use loader::load_catalog;

/// Immutable in-memory view of the company list and curriculum.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    companies: Vec<Company>,
    curriculum: Curriculum,
}

impl Catalog {
    pub fn new(companies: Vec<Company>, curriculum: Curriculum) -> Self {
        Self {
            companies,
            curriculum,
        }
    }

    /// Companies in file order. Ranking ties fall back to this order.
    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn curriculum(&self) -> &Curriculum {
        &self.curriculum
    }

    pub fn find_company(&self, name: &str) -> Option<&Company> {
        let name = name.trim();
        self.companies
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Every skill some company asks for.
    pub fn required_skills(&self) -> impl Iterator<Item = &str> {
        self.companies
            .iter()
            .flat_map(|c| c.required_skills.iter().map(String::as_str))
    }
}
