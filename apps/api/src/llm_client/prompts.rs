// Shared prompt constants.
// Each module that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Persona prepended to every guidance prompt.
pub const MENTOR_PERSONA: &str = "\
    You are a placement mentor at an Indian engineering college. \
    You give honest, specific, encouraging advice to students preparing for campus placements. \
    Keep answers practical and grounded in the student's stated profile.";

/// Keeps model output renderable as plain text in the client.
pub const PLAIN_TEXT_INSTRUCTION: &str = "\
    Respond in plain text with short paragraphs or hyphen bullet points. \
    Do NOT use tables or HTML.";

/// Stops the model from pushing topics the student has not reached yet.
pub const CURRICULUM_INSTRUCTION: &str = "\
    Respect the student's curriculum stage: do not recommend topics that are \
    introduced in a later academic year than the student's current one.";

/// Fills `{name}` placeholders in one left-to-right pass.
///
/// Substituted values are never rescanned, so user text that happens to contain
/// `{message}` or similar stays literal. Unknown placeholders are left as-is.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        let substitution = tail[1..].find('}').and_then(|close| {
            let name = &tail[1..1 + close];
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close + 2))
        });
        match substitution {
            Some((value, consumed)) => {
                out.push_str(value);
                rest = &tail[consumed..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_fills_every_placeholder() {
        let out = render("Hi {name}, you are in {year}.", &[("name", "Asha"), ("year", "3rd Year")]);
        assert_eq!(out, "Hi Asha, you are in 3rd Year.");
    }

    #[test]
    fn test_render_does_not_rescan_values() {
        let out = render(
            "{transcript}\n{message}",
            &[("transcript", "I typed {message} here"), ("message", "NEW")],
        );
        assert_eq!(out, "I typed {message} here\nNEW");
    }

    #[test]
    fn test_render_keeps_unknown_and_unclosed_braces() {
        assert_eq!(render("{unknown} {x", &[("x", "1")]), "{unknown} {x");
        assert_eq!(render("set {} and {{x}}", &[("x", "1")]), "set {} and {1}");
    }
}
