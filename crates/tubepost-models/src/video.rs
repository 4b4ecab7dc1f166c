//! Resolved video metadata.

use serde::{Deserialize, Serialize};

/// Metadata and transcript for a single video, resolved per request.
///
/// The transcript is the flattened caption text joined with single spaces;
/// timing information is not retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoMetadata {
    /// 11-character video id
    pub id: String,
    /// Video title from the platform snippet
    pub title: String,
    /// Video description from the platform snippet
    pub description: String,
    /// Flattened caption transcript
    pub transcript: String,
}
