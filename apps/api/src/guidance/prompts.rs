// Study guidance LLM prompt templates.

pub const ROADMAP_PROMPT: &str = r#"Create a study roadmap for the next 8 weeks.

STUDENT:
- Academic year: {year}
- CGPA: {cgpa}
- Skills: {skills}
- Experience: {experience} months

CURRICULUM FOCUS THIS YEAR:
{focus_areas}

SKILLS TO BUILD FOR TARGET COMPANIES:
{recommended_skills}

TARGET:
{target}

Produce a week-by-week plan. For each week give one goal, two or three concrete tasks,
and one checkpoint the student can use to confirm progress."#;
