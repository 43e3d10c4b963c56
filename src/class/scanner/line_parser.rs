use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

/// Literal prefix marking the first line of a class
pub const CLASS_PREFIX: &str = "class ";

// Only the word characters directly after the prefix make up the name
static CLASS_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^class (\w*)").expect("class name pattern is valid")
});

/// Check whether a line starts a new class.
///
/// This is a plain prefix test: indentation, decorators, or a missing space
/// after `class` mean the line is not a boundary.
pub fn is_class_start(line: &str) -> bool {
    line.starts_with(CLASS_PREFIX)
}

/// Extract the class name from a class-start line.
///
/// Returns `None` when the line is not a class-start or when no word
/// characters follow the prefix (e.g. `"class :"`).
pub fn extract_class_name(line: &str) -> Option<String> {
    let name = CLASS_NAME_RE.captures(line)?.get(1)?.as_str();
    if name.is_empty() {
        return None;
    }

    trace!("Extracted class name {} from {:?}", name, line);
    Some(name.to_string())
}
