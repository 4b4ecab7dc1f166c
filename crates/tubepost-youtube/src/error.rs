//! Resolver error types.
//!
//! The taxonomy is finer than the HTTP surface exposes: not-found, upstream
//! status, and network failures are distinguished here (and in logs) but all
//! collapse to a generic fetch failure at the API boundary.

use thiserror::Error;
use tubepost_models::VideoIdError;

pub type YoutubeResult<T> = Result<T, YoutubeError>;

#[derive(Debug, Error)]
pub enum YoutubeError {
    #[error("Invalid YouTube URL: {0}")]
    InvalidUrl(#[from] VideoIdError),

    #[error("No video data found for {0}")]
    VideoNotFound(String),

    #[error("No captions available for {0}")]
    CaptionsUnavailable(String),

    #[error("YouTube API returned {status}: {body}")]
    RequestFailed { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed caption payload: {0}")]
    Xml(#[from] quick_xml::Error),
}

impl YoutubeError {
    /// Whether the error is caused by the caller's input rather than an
    /// upstream failure.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, YoutubeError::InvalidUrl(_))
    }
}
