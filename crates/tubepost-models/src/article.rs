//! The canonical article record.
//!
//! One versioned schema covers both generation modes: the four required
//! fields are always present, the extended fields are populated only when
//! extended generation ran. Wire names are camelCase.

use serde::{Deserialize, Serialize};

/// Version of the canonical article schema, serialized on every record.
pub const ARTICLE_SCHEMA_VERSION: u32 = 2;

fn schema_version() -> u32 {
    ARTICLE_SCHEMA_VERSION
}

/// A synthesized blog article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRecord {
    /// Schema version; defaults to the current version when absent on the wire
    #[serde(default = "schema_version")]
    pub schema_version: u32,

    /// SEO-optimized title
    pub title: String,

    /// Full article body as an HTML string
    pub content: String,

    /// Ordered keyword list (5 entries in standard generation)
    pub keywords: Vec<String>,

    /// Ordered image descriptions, one per desired article image
    pub image_descriptions: Vec<String>,

    // Extended fields, present only after extended generation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_metrics: Option<ContentMetrics>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_keywords: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_linking_suggestions: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_resources: Option<Vec<ExternalResource>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faqs: Option<Vec<Faq>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta: Option<String>,
}

impl ArticleRecord {
    /// Build a record carrying only the four required fields.
    pub fn basic(
        title: impl Into<String>,
        content: impl Into<String>,
        keywords: Vec<String>,
        image_descriptions: Vec<String>,
    ) -> Self {
        Self {
            schema_version: ARTICLE_SCHEMA_VERSION,
            title: title.into(),
            content: content.into(),
            keywords,
            image_descriptions,
            meta_description: None,
            content_metrics: None,
            top_keywords: None,
            internal_linking_suggestions: None,
            external_resources: None,
            faqs: None,
            cta: None,
        }
    }
}

/// Model-estimated SEO characteristics of the generated content
/// (extended generation only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentMetrics {
    /// Estimated search traffic potential (low/medium/high)
    pub traffic_potential: String,
    /// Keyword difficulty (easy/medium/hard)
    pub keyword_difficulty: String,
    /// Estimated click-through rate
    #[serde(rename = "estimatedCTR")]
    pub estimated_ctr: String,
    /// Estimated revenue per mille
    #[serde(rename = "estimatedRPM")]
    pub estimated_rpm: String,
}

/// An external resource worth linking from the article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalResource {
    pub title: String,
    pub url: String,
}

/// A frequently-asked question with its answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

/// Which tier of the synthesis recovery strategy produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecoveryTier {
    /// The completion parsed as JSON with all required keys
    Strict,
    /// Fields were recovered from a malformed completion by pattern extraction
    Extracted,
    /// The completion call itself failed; the record was synthesized from the
    /// request inputs
    Synthesized,
}

impl std::fmt::Display for RecoveryTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecoveryTier::Strict => write!(f, "strict"),
            RecoveryTier::Extracted => write!(f, "extracted"),
            RecoveryTier::Synthesized => write!(f, "synthesized"),
        }
    }
}
