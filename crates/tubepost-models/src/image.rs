//! Image assets attached to an article.

use serde::{Deserialize, Serialize};

/// A single article image.
///
/// The url is a provider-hosted image, a stock-photo URL, or a local
/// placeholder reference; `alt` always equals the originating description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAsset {
    pub url: String,
    pub alt: String,
}

impl ImageAsset {
    pub fn new(url: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt: alt.into(),
        }
    }
}
