//! High-level image operations.
//!
//! These functions combine calculations with backend execution.
//! They take configuration, compute parameters, and call the backend.

use super::backend::{BackendError, ImageBackend};
use super::calculations::calculate_variant_dimensions;
use super::params::{Quality, ResizeParams};
use std::path::Path;

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Get image dimensions using the backend.
pub fn get_dimensions(backend: &impl ImageBackend, path: &Path) -> Result<(u32, u32)> {
    let dims = backend.identify(path)?;
    Ok((dims.width, dims.height))
}

/// Generated variant set for one target width: AVIF, WebP, and PNG.
#[derive(Debug, Clone)]
pub struct GeneratedVariant {
    /// The width the caller asked for (used in file names).
    pub requested_width: u32,
    /// Actual encoded dimensions (clamped to the source width).
    pub width: u32,
    pub height: u32,
    pub avif_path: String,
    pub webp_path: String,
    pub png_path: String,
}

impl GeneratedVariant {
    /// The three output file names, in encode order.
    pub fn files(&self) -> [&str; 3] {
        [&self.avif_path, &self.webp_path, &self.png_path]
    }
}

/// Create AVIF + WebP + PNG variants for each requested width.
///
/// Output files are named `<stem>-w<width>.<ext>` in `output_dir`; the
/// name carries the requested width even when the encode is clamped to
/// the source width, so every `(width, format)` pair yields one file.
pub fn create_width_variants(
    backend: &impl ImageBackend,
    source: &Path,
    output_dir: &Path,
    filename_stem: &str,
    original_dims: (u32, u32),
    widths: &[u32],
    quality: Quality,
) -> Result<Vec<GeneratedVariant>> {
    let mut variants = Vec::new();

    for &target in widths {
        let (width, height) = calculate_variant_dimensions(original_dims, target);

        let base = format!("{}-w{}", filename_stem, target);
        let avif_name = format!("{}.avif", base);
        let webp_name = format!("{}.webp", base);
        let png_name = format!("{}.png", base);

        for name in [&avif_name, &webp_name, &png_name] {
            backend.resize(&ResizeParams {
                source: source.to_path_buf(),
                output: output_dir.join(name),
                width,
                height,
                quality,
            })?;
        }

        variants.push(GeneratedVariant {
            requested_width: target,
            width,
            height,
            avif_path: avif_name,
            webp_path: webp_name,
            png_path: png_name,
        });
    }

    Ok(variants)
}
