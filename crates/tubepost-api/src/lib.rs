//! Axum HTTP API server.
//!
//! This crate provides:
//! - The article-generation pipeline endpoints
//! - Video metadata and transcript endpoints
//! - Request logging, request ids, CORS and security headers

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
