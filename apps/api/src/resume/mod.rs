// Resume Checker: PDF text extraction, keyword skill detection, per-company skill match,
// and LLM feedback. All LLM calls go through llm_client.

pub mod handlers;
pub mod matcher;
pub mod pdf;
pub mod prompts;
pub mod skills;
