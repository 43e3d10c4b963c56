use once_cell::sync::Lazy;
use regex::Regex;

// Start of a capitalised word that has a lowercase continuation
static WORD_START_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(.)([A-Z][a-z]+)").expect("word start pattern is valid")
});

// Lowercase letter or digit directly followed by a capital
static CAMEL_HUMP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([a-z0-9])([A-Z])").expect("camel hump pattern is valid")
});

/// Convert a CamelCase identifier into a lowercase, underscore separated stem.
///
/// Acronyms keep together until the capital that starts the next word, so
/// `HTTPServer` becomes `http_server` and `myClassV2` becomes `my_class_v2`.
pub fn camel_to_snake(name: &str) -> String {
    let split_words = WORD_START_RE.replace_all(name, "${1}_${2}");
    CAMEL_HUMP_RE.replace_all(&split_words, "${1}_${2}").to_lowercase()
}
