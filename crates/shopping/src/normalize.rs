use regex::Regex;
use std::sync::LazyLock;

static RE_PARENTHESIZED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\([^)]*\)").unwrap());
static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Canonical merge key for an ingredient name.
///
/// Lowercases, drops every `(...)` group, collapses whitespace runs to one space and trims.
/// Plural and singular forms stay distinct: `"tomatoes"` and `"tomato"` are different keys.
pub fn normalize(raw: &str) -> String {
    let lower = raw.to_lowercase();
    let stripped = RE_PARENTHESIZED.replace_all(&lower, "");

    RE_WHITESPACE.replace_all(&stripped, " ").trim().to_owned()
}

/// Display form of a normalized name: first character uppercased, the rest untouched.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
