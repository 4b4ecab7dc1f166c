//! Synthetic metric substitution.
//!
//! Value ranges and formats mirror what the metrics provider would return,
//! so a substituted record stays shape-compatible with a measured one.

use tubepost_models::{Difficulty, MetricsOrigin, SeoAnalysis};

pub(crate) fn synthetic_score() -> u32 {
    rand::random_range(70..100)
}

pub(crate) fn synthetic_difficulty() -> Difficulty {
    match rand::random_range(0..3) {
        0 => Difficulty::Easy,
        1 => Difficulty::Medium,
        _ => Difficulty::Hard,
    }
}

pub(crate) fn synthetic_volume() -> String {
    format!("{} monthly searches", rand::random_range(0..10000))
}

pub(crate) fn synthetic_cpc() -> String {
    format!("${:.2}", rand::random::<f64>() * 2.0 + 0.5)
}

pub(crate) fn synthetic_competition() -> String {
    format!("{:.2}", rand::random::<f64>())
}

/// A fully synthetic analysis, used when the provider call fails outright.
pub(crate) fn synthetic_analysis() -> SeoAnalysis {
    SeoAnalysis {
        score: synthetic_score(),
        difficulty: synthetic_difficulty(),
        volume: synthetic_volume(),
        cpc: synthetic_cpc(),
        competition: synthetic_competition(),
        trends: Vec::new(),
        related_keywords: Vec::new(),
        origin: MetricsOrigin::Estimated,
    }
}
