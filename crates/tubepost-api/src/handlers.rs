//! API handlers.

pub mod generate;
pub mod health;
pub mod youtube;

pub use generate::generate;
pub use health::health;
pub use youtube::{get_transcript, get_video};
