// Study guidance: curriculum-stage roadmap per academic year, plus an LLM-personalised plan.

pub mod handlers;
pub mod prompts;
pub mod roadmap;
