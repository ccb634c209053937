//! Data Loader: reads the company list and curriculum JSON documents.
//!
//! Never fails the process: a missing or unparseable document degrades to an
//! empty collection, and a single malformed company or curriculum year is
//! skipped with a warning while the rest of the document still loads.

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value;
use tracing::{error, info, warn};

use crate::catalog::Catalog;
use crate::models::curriculum::YearPlan;
use crate::models::{AcademicYear, Company, Curriculum};

pub async fn load_catalog(companies_path: &Path, curriculum_path: &Path) -> Catalog {
    let companies = read_document(companies_path)
        .await
        .map(parse_companies)
        .unwrap_or_default();
    let curriculum = read_document(curriculum_path)
        .await
        .map(parse_curriculum)
        .unwrap_or_default();

    if curriculum.is_empty() {
        warn!("No curriculum loaded; every missing skill will be treated as outside the curriculum");
    }
    info!(
        "Catalog loaded: {} companies, {} curriculum years",
        companies.len(),
        curriculum.len()
    );
    Catalog::new(companies, curriculum)
}

async fn read_document(path: &Path) -> Option<Value> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!("Data file {} not found; continuing with no data", path.display());
            return None;
        }
        Err(e) => {
            error!("Failed to read {}: {e}", path.display());
            return None;
        }
    };

    match serde_json::from_slice(&bytes) {
        Ok(doc) => Some(doc),
        Err(e) => {
            error!("Failed to parse {} as JSON: {e}", path.display());
            None
        }
    }
}

/// Accepts `{"companies": [...]}` or a bare array.
pub fn parse_companies(doc: Value) -> Vec<Company> {
    let items = match doc {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("companies") {
            Some(Value::Array(items)) => items,
            _ => {
                error!("Company document has no \"companies\" array");
                return Vec::new();
            }
        },
        _ => {
            error!("Company document must be an object or an array");
            return Vec::new();
        }
    };

    items
        .into_iter()
        .enumerate()
        .filter_map(|(idx, item)| match serde_json::from_value::<Company>(item) {
            Ok(company) => Some(company),
            Err(e) => {
                warn!("Skipping company #{idx}: {e}");
                None
            }
        })
        .collect()
}

/// Accepts an object keyed by year label.
pub fn parse_curriculum(doc: Value) -> Curriculum {
    let Value::Object(map) = doc else {
        error!("Curriculum document must be an object keyed by academic year");
        return Curriculum::default();
    };

    let mut years = BTreeMap::new();
    for (key, value) in map {
        let year = match key.parse::<AcademicYear>() {
            Ok(year) => year,
            Err(e) => {
                warn!("Skipping curriculum entry: {e}");
                continue;
            }
        };
        match serde_json::from_value::<YearPlan>(value) {
            Ok(plan) => {
                years.insert(year, plan);
            }
            Err(e) => warn!("Skipping curriculum for {year}: {e}"),
        }
    }
    Curriculum::new(years)
}
