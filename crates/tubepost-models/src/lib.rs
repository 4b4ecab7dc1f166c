//! Shared data models for the TubePost backend.
//!
//! This crate provides Serde-serializable types for:
//! - Resolved video metadata and transcripts
//! - The canonical article record produced by synthesis
//! - Keyword metrics with a measured/estimated origin tag
//! - Image assets
//! - YouTube video-id extraction utilities

pub mod article;
pub mod image;
pub mod seo;
pub mod utils;
pub mod video;

// Re-export common types
pub use article::{
    ArticleRecord, ContentMetrics, ExternalResource, Faq, RecoveryTier, ARTICLE_SCHEMA_VERSION,
};
pub use image::ImageAsset;
pub use seo::{Difficulty, MetricsOrigin, SeoAnalysis};
pub use utils::{extract_video_id, is_valid_video_id, VideoIdError, VideoIdResult};
pub use video::VideoMetadata;
