//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the two operations every backend must
//! support: identify and resize.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend) — pure Rust, zero
//! external dependencies. Everything is statically linked into the binary.

use super::params::ResizeParams;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Trait for image processing backends.
///
/// Both operations are required so the rest of the codebase stays
/// backend-agnostic; `Sync` lets rayon drive targets in parallel against
/// a shared backend reference.
pub trait ImageBackend: Sync {
    /// Get image dimensions without decoding the full image.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Execute a resize-and-encode operation.
    fn resize(&self, params: &ResizeParams) -> Result<(), BackendError>;
}
