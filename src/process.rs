//! Image optimization.
//!
//! Drives the `images` subcommand: takes the `[[images.targets]]` table
//! from site config and pre-generates optimized variants for each listed
//! image.
//!
//! ## Output Formats
//!
//! For each target width, three variants are written:
//! - **AVIF**: lossy at the configured quality, good compression
//! - **WebP**: lossless, broad support
//! - **PNG**: lossless fallback, non-progressive
//!
//! ## Output Structure
//!
//! ```text
//! content/assets/optimized/
//! ├── logo-w320.avif
//! ├── logo-w320.webp
//! ├── logo-w320.png
//! ├── logo-w480.avif
//! └── ...
//! ```
//!
//! ## Failure Handling
//!
//! Missing source files are skipped with a warning and processing
//! continues; the run still succeeds. Decode or encode failures are
//! errors — they mean a listed source is broken, not absent.
//!
//! ## Parallel Processing
//!
//! Targets are processed in parallel using [rayon](https://docs.rs/rayon).

use crate::config::ImagesConfig;
use crate::imaging::{
    BackendError, ImageBackend, Quality, RustBackend, create_width_variants, get_dimensions,
};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image processing failed: {0}")]
    Imaging(#[from] BackendError),
}

/// Outcome of one optimization run.
#[derive(Debug)]
pub struct ProcessSummary {
    /// One outcome per configured target, in config order.
    pub outcomes: Vec<TargetOutcome>,
    /// Where variants were written.
    pub output_dir: PathBuf,
}

impl ProcessSummary {
    /// Total number of files written.
    pub fn file_count(&self) -> usize {
        self.outcomes
            .iter()
            .map(|o| match &o.status {
                TargetStatus::Processed { files, .. } => files.len(),
                TargetStatus::SkippedMissing => 0,
            })
            .sum()
    }
}

/// Outcome for a single configured target.
#[derive(Debug)]
pub struct TargetOutcome {
    /// The configured source file (assets-relative).
    pub file: String,
    pub status: TargetStatus,
}

#[derive(Debug)]
pub enum TargetStatus {
    /// Variants were generated.
    Processed { widths: Vec<u32>, files: Vec<String> },
    /// The source file does not exist; nothing was written.
    SkippedMissing,
}

/// Optimize all configured targets with the production backend.
///
/// Sources are resolved under `<content_root>/assets/`; variants are
/// written to `<content_root>/<images.output_dir>`.
pub fn process(config: &ImagesConfig, content_root: &Path) -> Result<ProcessSummary, ProcessError> {
    let backend = RustBackend::new();
    process_with_backend(&backend, config, content_root)
}

/// Optimize using a specific backend (allows testing with a mock).
pub fn process_with_backend(
    backend: &impl ImageBackend,
    config: &ImagesConfig,
    content_root: &Path,
) -> Result<ProcessSummary, ProcessError> {
    let assets_root = content_root.join("assets");
    let output_dir = content_root.join(&config.output_dir);
    std::fs::create_dir_all(&output_dir)?;

    let quality = Quality::new(config.quality);

    let outcomes: Vec<TargetOutcome> = config
        .targets
        .par_iter()
        .map(|target| -> Result<TargetOutcome, ProcessError> {
            let source = assets_root.join(&target.file);
            if !source.exists() {
                return Ok(TargetOutcome {
                    file: target.file.clone(),
                    status: TargetStatus::SkippedMissing,
                });
            }

            let dims = get_dimensions(backend, &source)?;
            let stem = source
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| target.file.clone());

            let variants = create_width_variants(
                backend,
                &source,
                &output_dir,
                &stem,
                dims,
                &target.widths,
                quality,
            )?;

            let files = variants
                .iter()
                .flat_map(|v| v.files().map(String::from))
                .collect();

            Ok(TargetOutcome {
                file: target.file.clone(),
                status: TargetStatus::Processed {
                    widths: target.widths.clone(),
                    files,
                },
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ProcessSummary {
        outcomes,
        output_dir,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ImageTarget;
    use crate::imaging::Dimensions;
    use crate::imaging::backend::tests::MockBackend;
    use std::fs;
    use tempfile::TempDir;

    fn images_config(targets: Vec<ImageTarget>) -> ImagesConfig {
        ImagesConfig {
            targets,
            ..ImagesConfig::default()
        }
    }

    fn target(file: &str, widths: &[u32]) -> ImageTarget {
        ImageTarget {
            file: file.to_string(),
            widths: widths.to_vec(),
        }
    }

    fn write_dummy_asset(root: &std::path::Path, rel: &str) {
        let path = root.join("assets").join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        // The mock backend never decodes, content is irrelevant
        fs::write(path, "").unwrap();
    }

    #[test]
    fn present_source_two_widths_yields_six_files() {
        let tmp = TempDir::new().unwrap();
        write_dummy_asset(tmp.path(), "logo.png");

        let backend = MockBackend::with_dimensions(vec![Dimensions {
            width: 1000,
            height: 800,
        }]);
        let config = images_config(vec![target("logo.png", &[320, 480])]);

        let summary = process_with_backend(&backend, &config, tmp.path()).unwrap();

        assert_eq!(summary.outcomes.len(), 1);
        assert_eq!(summary.file_count(), 6);
        match &summary.outcomes[0].status {
            TargetStatus::Processed { widths, files } => {
                assert_eq!(widths, &[320, 480]);
                assert!(files.contains(&"logo-w320.avif".to_string()));
                assert!(files.contains(&"logo-w480.png".to_string()));
            }
            TargetStatus::SkippedMissing => panic!("expected processed outcome"),
        }
    }

    #[test]
    fn missing_source_skipped_without_output() {
        let tmp = TempDir::new().unwrap();

        let backend = MockBackend::new();
        let config = images_config(vec![target("absent.png", &[320, 480])]);

        let summary = process_with_backend(&backend, &config, tmp.path()).unwrap();

        assert_eq!(summary.outcomes.len(), 1);
        assert!(matches!(
            summary.outcomes[0].status,
            TargetStatus::SkippedMissing
        ));
        assert_eq!(summary.file_count(), 0);
        // No backend work at all for the missing entry
        assert!(backend.get_operations().is_empty());
    }

    #[test]
    fn missing_source_does_not_stop_remaining_targets() {
        let tmp = TempDir::new().unwrap();
        write_dummy_asset(tmp.path(), "present.png");

        let backend = MockBackend::with_dimensions(vec![Dimensions {
            width: 640,
            height: 480,
        }]);
        let config = images_config(vec![
            target("absent.png", &[320]),
            target("present.png", &[320]),
        ]);

        let summary = process_with_backend(&backend, &config, tmp.path()).unwrap();

        assert!(matches!(
            summary.outcomes[0].status,
            TargetStatus::SkippedMissing
        ));
        assert!(matches!(
            summary.outcomes[1].status,
            TargetStatus::Processed { .. }
        ));
        assert_eq!(summary.file_count(), 3);
    }

    #[test]
    fn outcomes_keep_config_order() {
        let tmp = TempDir::new().unwrap();
        write_dummy_asset(tmp.path(), "a.png");
        write_dummy_asset(tmp.path(), "b.png");

        let backend = MockBackend::with_dimensions(vec![
            Dimensions {
                width: 100,
                height: 100,
            },
            Dimensions {
                width: 100,
                height: 100,
            },
        ]);
        let config = images_config(vec![target("b.png", &[50]), target("a.png", &[50])]);

        let summary = process_with_backend(&backend, &config, tmp.path()).unwrap();
        let files: Vec<&str> = summary.outcomes.iter().map(|o| o.file.as_str()).collect();
        assert_eq!(files, vec!["b.png", "a.png"]);
    }

    #[test]
    fn nested_target_uses_basename_stem() {
        let tmp = TempDir::new().unwrap();
        write_dummy_asset(tmp.path(), "timeline/note-2.png");

        let backend = MockBackend::with_dimensions(vec![Dimensions {
            width: 900,
            height: 600,
        }]);
        let config = images_config(vec![target("timeline/note-2.png", &[320])]);

        let summary = process_with_backend(&backend, &config, tmp.path()).unwrap();
        match &summary.outcomes[0].status {
            TargetStatus::Processed { files, .. } => {
                assert!(files.contains(&"note-2-w320.avif".to_string()));
            }
            TargetStatus::SkippedMissing => panic!("expected processed outcome"),
        }
    }

    // =========================================================================
    // Production backend round trip
    // =========================================================================

    #[test]
    fn real_backend_writes_all_variants() {
        let tmp = TempDir::new().unwrap();
        let asset = tmp.path().join("assets/logo.png");
        fs::create_dir_all(asset.parent().unwrap()).unwrap();
        let img = image::RgbImage::from_fn(64, 48, |x, y| {
            image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
        });
        img.save(&asset).unwrap();

        let config = images_config(vec![target("logo.png", &[32, 48])]);
        let summary = process(&config, tmp.path()).unwrap();

        assert_eq!(summary.file_count(), 6);
        for name in [
            "logo-w32.avif",
            "logo-w32.webp",
            "logo-w32.png",
            "logo-w48.avif",
            "logo-w48.webp",
            "logo-w48.png",
        ] {
            assert!(summary.output_dir.join(name).exists(), "missing {name}");
        }
    }
}
