//! Tier-2 recovery: pattern extraction from malformed completions.
//!
//! When a completion fails strict parsing (prose around the object, truncated
//! output, stray fences), each required field is located independently. Array
//! fragments are re-parsed as JSON; anything that still cannot be located is
//! replaced with a fixed default literal, never left empty.

use std::sync::LazyLock;

use regex::Regex;
use tubepost_models::ArticleRecord;

pub(crate) const DEFAULT_TITLE: &str = "Default Title";
pub(crate) const DEFAULT_CONTENT: &str = "Default Content";

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));
static TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""title"\s*:\s*"([^"]+)""#).expect("valid title pattern"));
static CONTENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""content"\s*:\s*"([^"]+)""#).expect("valid content pattern"));
static KEYWORDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""keywords"\s*:\s*\[(.*?)\]"#).expect("valid keywords pattern"));
static IMAGE_DESCRIPTIONS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""imageDescriptions"\s*:\s*\[(.*?)\]"#).expect("valid descriptions pattern")
});

pub(crate) fn default_keywords() -> Vec<String> {
    (1..=5).map(|i| format!("keyword{i}")).collect()
}

pub(crate) fn default_image_descriptions() -> Vec<String> {
    (1..=5).map(|i| format!("image {i}")).collect()
}

/// Recover an article record from a completion that failed strict parsing.
pub(crate) fn recover_article(raw: &str) -> ArticleRecord {
    // Collapse whitespace so field patterns work across line breaks.
    let cleaned = WHITESPACE.replace_all(raw.trim(), " ");

    let title = extract_string(&TITLE, &cleaned).unwrap_or_else(|| DEFAULT_TITLE.to_string());
    let content = extract_string(&CONTENT, &cleaned).unwrap_or_else(|| DEFAULT_CONTENT.to_string());
    let keywords = extract_array(&KEYWORDS, &cleaned).unwrap_or_else(default_keywords);
    let image_descriptions =
        extract_array(&IMAGE_DESCRIPTIONS, &cleaned).unwrap_or_else(default_image_descriptions);

    ArticleRecord::basic(title, content, keywords, image_descriptions)
}

fn extract_string(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .map(|c| c[1].replace("\\\"", "\""))
}

fn extract_array(pattern: &Regex, text: &str) -> Option<Vec<String>> {
    let inner = pattern.captures(text)?;
    serde_json::from_str(&format!("[{}]", &inner[1])).ok()
}
