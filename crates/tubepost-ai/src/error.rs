//! Synthesis error types.

use thiserror::Error;

pub type AiResult<T> = Result<T, AiError>;

#[derive(Debug, Error)]
pub enum AiError {
    #[error("Completion provider returned {status}: {body}")]
    RequestFailed { status: u16, body: String },

    #[error("No content in completion response")]
    EmptyCompletion,

    #[error("Completion was not a valid article object: {0}")]
    MalformedCompletion(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
