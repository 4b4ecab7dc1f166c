//! Content Synthesizer: turns video text into a structured article.
//!
//! The completion provider does not reliably emit valid JSON, so parsing is
//! an explicit ordered recovery strategy: strict parse, then pattern
//! extraction, then a record synthesized from the request inputs. The tier
//! that produced the record travels with it.

pub mod client;
pub mod error;
pub mod prompt;
mod recover;
pub mod synthesizer;

pub use client::{AiClient, AiConfig};
pub use error::{AiError, AiResult};
pub use synthesizer::{GenerationMode, SynthesizedArticle};
