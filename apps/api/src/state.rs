use std::collections::BTreeSet;
use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::errors::AppError;
use crate::interview::session::SessionStore;
use crate::llm_client::LanguageModel;
use crate::placement::fit_scoring::FitScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Company list and curriculum, loaded once at startup.
    pub catalog: Arc<Catalog>,
    /// Skills the resume checker scans for (defaults plus every company's requirements).
    pub skill_vocabulary: Arc<BTreeSet<String>>,
    /// `None` when no API key is configured; LLM endpoints then answer 503.
    pub llm: Option<Arc<dyn LanguageModel>>,
    pub config: Config,
    /// Pluggable fit scorer. Default: WeightedFitScorer.
    pub fit_scorer: Arc<dyn FitScorer>,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn llm(&self) -> Result<&dyn LanguageModel, AppError> {
        self.llm.as_deref().ok_or(AppError::LlmUnavailable)
    }
}
