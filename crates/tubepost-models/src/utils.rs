//! YouTube video-id extraction.
//!
//! URLs are treated as untrusted input: only YouTube domains are accepted and
//! ids must be exactly 11 characters of `[A-Za-z0-9_-]`.

/// Errors that can occur during video-id extraction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VideoIdError {
    #[error("URL is not a valid YouTube URL")]
    InvalidYoutubeUrl,

    #[error("Video ID has invalid format")]
    InvalidVideoId,

    #[error("Video ID not found in URL")]
    VideoIdNotFound,
}

/// Result type for video-id extraction.
pub type VideoIdResult<T> = Result<T, VideoIdError>;

/// URL markers that precede a video id, tried in order.
const ID_MARKERS: [&str; 6] = ["?v=", "&v=", "youtu.be/", "/embed/", "/v/", "/shorts/"];

/// Extract the 11-character video id from a YouTube URL.
///
/// Recognized shapes:
/// - `https://youtube.com/watch?v=VIDEO_ID` (also `&v=`)
/// - `https://youtu.be/VIDEO_ID`
/// - `https://youtube.com/embed/VIDEO_ID`
/// - `https://youtube.com/v/VIDEO_ID`
/// - `https://youtube.com/shorts/VIDEO_ID`
///
/// Trailing query parameters and fragments are ignored.
pub fn extract_video_id(url: &str) -> VideoIdResult<String> {
    let url = url.trim();

    if !is_youtube_domain(url) {
        return Err(VideoIdError::InvalidYoutubeUrl);
    }

    for marker in ID_MARKERS {
        if let Some(pos) = url.find(marker) {
            let candidate = id_segment(&url[pos + marker.len()..]);
            if candidate.is_empty() && marker != "?v=" && marker != "&v=" {
                // Bare "youtu.be/" style URL with nothing after the marker.
                continue;
            }
            return validate_video_id(candidate);
        }
    }

    Err(VideoIdError::VideoIdNotFound)
}

fn is_youtube_domain(url: &str) -> bool {
    let url = url.to_ascii_lowercase();
    url.contains("youtube.com") || url.contains("youtu.be") || url.contains("youtube-nocookie.com")
}

/// Take the id portion of a path/query remainder, stopping at delimiters.
fn id_segment(remaining: &str) -> &str {
    let end = remaining
        .find(|c| matches!(c, '&' | '#' | '?' | '/'))
        .unwrap_or(remaining.len());
    remaining[..end].trim()
}

/// Whether a string is a well-formed 11-character video id.
pub fn is_valid_video_id(id: &str) -> bool {
    validate_video_id(id).is_ok()
}

fn validate_video_id(id: &str) -> VideoIdResult<String> {
    // YouTube video ids are exactly 11 characters
    if id.len() != 11 {
        return Err(VideoIdError::InvalidVideoId);
    }

    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(VideoIdError::InvalidVideoId);
    }

    Ok(id.to_string())
}
