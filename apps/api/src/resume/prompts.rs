// Resume checker LLM prompt templates.

pub const RESUME_FEEDBACK_PROMPT: &str = r#"Review the resume below for a student applying through campus placements.

TARGET:
{target}

SKILLS DETECTED BY KEYWORD SCAN:
{found_skills}

RESUME TEXT:
{resume_text}

Give feedback in three parts:
1. Strengths (what already works)
2. Gaps (missing skills or weak sections, most important first)
3. Concrete edits (rewrite up to three weak lines with measurable impact)"#;

/// Used in `{target}` when the student did not pick a company.
pub const GENERAL_TARGET: &str = "General software roles at campus recruiters.";
