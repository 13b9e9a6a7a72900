//! HTML entity decoding for question bank text
//!
//! Open Trivia DB escapes its strings (`&quot;`, `&#039;`, `&amp;`, ...).
//! They are decoded by letting the HTML parser read them as a text fragment.

use scraper::Html;
use trivia_domain::TextSanitizer;

/// [`TextSanitizer`] that decodes HTML character references
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlEntitySanitizer;

impl HtmlEntitySanitizer {
    pub fn new() -> Self {
        Self
    }
}

impl TextSanitizer for HtmlEntitySanitizer {
    fn sanitize(&self, raw: &str) -> String {
        decode_entities(raw)
    }
}

/// Decode HTML character references in `raw`, leaving everything else untouched
pub fn decode_entities(raw: &str) -> String {
    if !raw.contains('&') {
        return raw.to_string();
    }

    // A literal '<' must not start a tag
    let escaped = raw.replace('<', "&lt;");
    let fragment = Html::parse_fragment(&escaped);
    fragment.root_element().text().collect()
}
