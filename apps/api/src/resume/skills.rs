use std::collections::BTreeSet;

use crate::catalog::Catalog;
use crate::models::student::normalize_skill;

/// Skills the resume checker always looks for, before company-specific ones are added.
pub const DEFAULT_SKILL_VOCABULARY: &[&str] = &[
    "c",
    "python",
    "java",
    "sql",
    "dbms",
    "data structures",
    "algorithms",
    "html",
    "css",
    "javascript",
];

/// Default vocabulary plus every skill a loaded company requires.
pub fn build_vocabulary(catalog: &Catalog) -> BTreeSet<String> {
    DEFAULT_SKILL_VOCABULARY
        .iter()
        .map(|s| normalize_skill(s))
        .chain(catalog.required_skills().map(normalize_skill))
        .filter(|s| !s.is_empty())
        .collect()
}

/// Returns the vocabulary entries that occur in `text`, case-insensitively.
///
/// An entry must sit on token boundaries, so `c` matches "C, C++" but not "circuit".
/// Whitespace runs (including PDF line breaks) count as a single space.
pub fn extract_skills<'a, I>(text: &str, vocabulary: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let haystack = normalize_skill(text);
    if haystack.is_empty() {
        return BTreeSet::new();
    }

    vocabulary
        .into_iter()
        .map(normalize_skill)
        .filter(|token| !token.is_empty() && contains_token(&haystack, token))
        .collect()
}

fn contains_token(haystack: &str, token: &str) -> bool {
    haystack.match_indices(token).any(|(start, _)| {
        let end = start + token.len();
        let before = haystack[..start].chars().next_back();
        let after = haystack[end..].chars().next();
        before.map_or(true, |c| !c.is_alphanumeric()) && after.map_or(true, |c| !c.is_alphanumeric())
    })
}
