//! String utilities for the domain layer.

/// Uppercase the first character, leaving the rest untouched (UTF-8 safe)
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
