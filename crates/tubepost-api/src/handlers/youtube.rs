//! Video resolution handlers.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use tubepost_models::is_valid_video_id;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct VideoQuery {
    pub url: Option<String>,
}

/// Resolved video response.
#[derive(Serialize)]
pub struct VideoResponse {
    pub title: String,
    pub description: String,
    pub transcript: String,
}

/// Resolve a YouTube URL into metadata plus transcript.
pub async fn get_video(
    State(state): State<AppState>,
    Query(query): Query<VideoQuery>,
) -> ApiResult<Json<VideoResponse>> {
    let url = query
        .url
        .ok_or_else(|| ApiError::bad_request("URL is required"))?;

    let meta = state.youtube.resolve(&url).await?;

    info!(video_id = %meta.id, "Video resolved");

    Ok(Json(VideoResponse {
        title: meta.title,
        description: meta.description,
        transcript: meta.transcript,
    }))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptQuery {
    pub video_id: Option<String>,
}

#[derive(Serialize)]
pub struct TranscriptResponse {
    pub transcript: String,
}

/// Fetch the caption transcript for a known video id.
pub async fn get_transcript(
    State(state): State<AppState>,
    Query(query): Query<TranscriptQuery>,
) -> ApiResult<Json<TranscriptResponse>> {
    let video_id = query
        .video_id
        .ok_or_else(|| ApiError::bad_request("Video ID is required"))?;

    if !is_valid_video_id(&video_id) {
        return Err(ApiError::bad_request("Invalid video ID format"));
    }

    let transcript = state.youtube.fetch_transcript(&video_id, None).await?;

    Ok(Json(TranscriptResponse { transcript }))
}
