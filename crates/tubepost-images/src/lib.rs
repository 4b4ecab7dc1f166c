//! Image Provisioner: one asset per description, never fewer.
//!
//! Each description resolves independently and concurrently through a
//! fallback cascade (generated, stock, placeholder). A description's failure
//! never fails the batch; order and one-to-one correspondence are preserved.

pub mod client;

pub use client::{ImageClient, ImageStrategy, ImagesConfig};
