//! Metric Enricher: keyword metrics with synthetic fallback.
//!
//! Enrichment is best-effort and never a hard dependency: any provider
//! failure or omitted field is substituted with a synthetic value, and the
//! result carries a measured/estimated origin tag.

pub mod client;
mod synthetic;

pub use client::{SeoClient, SeoConfig};
