//! Text sanitizer trait
//!
//! The question bank escapes HTML entities in every text field
//! (`&quot;`, `&#039;`, `&amp;`, ...). A [`TextSanitizer`] turns those back
//! into literal characters while a [`Question`](super::entities::Question)
//! is being built. Implementations live in the infrastructure layer.

/// Decodes provider escaping in a text field
pub trait TextSanitizer: Send + Sync {
    fn sanitize(&self, raw: &str) -> String;
}

/// Sanitizer that leaves text untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct VerbatimText;

impl TextSanitizer for VerbatimText {
    fn sanitize(&self, raw: &str) -> String {
        raw.to_string()
    }
}
