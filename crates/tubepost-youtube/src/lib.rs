//! Video Resolver: turns a YouTube URL into metadata plus a transcript.
//!
//! Two upstream calls per resolution, run concurrently:
//! - snippet metadata (title, description) from the Data API
//! - caption text from the timedtext endpoint, flattened to a single string

pub mod client;
pub mod error;
mod transcript;

pub use client::{YoutubeClient, YoutubeConfig};
pub use error::{YoutubeError, YoutubeResult};
