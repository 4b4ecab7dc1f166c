//! Keyword metrics with an explicit origin tag.
//!
//! Every field is always present. The `origin` tag records whether the values
//! came from the metrics provider or were synthesized after a provider
//! failure, so consumers can tell the two apart.

use serde::{Deserialize, Serialize};

/// Where a [`SeoAnalysis`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricsOrigin {
    /// The metrics provider returned a usable response
    Measured,
    /// The provider call failed; values are synthetic placeholders
    Estimated,
}

/// Keyword difficulty label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

/// SEO metrics for a single representative keyword.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoAnalysis {
    /// Content score, 0-100 (synthetic values fall in [70, 100))
    pub score: u32,
    /// Keyword difficulty label
    pub difficulty: Difficulty,
    /// Monthly search volume, e.g. "4200 monthly searches"
    pub volume: String,
    /// Cost per click, e.g. "$1.37"
    pub cpc: String,
    /// Competition ratio in [0, 1), two decimals, e.g. "0.42"
    pub competition: String,
    /// Trend points, empty when the provider supplies none
    pub trends: Vec<f64>,
    /// Related keywords, empty when the provider supplies none
    pub related_keywords: Vec<String>,
    /// Measured vs. estimated origin of the values above
    pub origin: MetricsOrigin,
}
