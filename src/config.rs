//! Site configuration module.
//!
//! Handles loading, validating, and merging the `config.toml` at the
//! content root. Stock defaults are overridden by whatever keys the user
//! config provides; unknown keys are rejected to catch typos early.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! title = "Documentation"
//! author = ""
//! description = ""
//! website = ""              # Base URL, used for sitemap.xml
//! repo = ""                 # Repository URL, shown in the header
//!
//! # Top-level navigation order. Slugs listed here sort first, in this
//! # order; anything unlisted sorts after, in scan order.
//! menu_order = []
//!
//! [toggles]
//! hide_search = false
//! hide_breadcrumbs = false
//! hide_toc = false
//! hide_datetime = false
//! hide_repo_button = false
//!
//! [search]
//! threshold = 0.5           # Max score still counted as a match (0-1)
//! location = 0              # Expected match position
//! distance = 100            # Positional decay divisor
//! min_match_length = 2      # Shorter queries return nothing
//!
//! [images]
//! quality = 80              # AVIF encoding quality (1-100)
//! output_dir = "assets/optimized"
//!
//! [[images.targets]]
//! file = "logo.png"
//! widths = [320, 480, 640]
//!
//! [processing]
//! max_processes = 4         # Max parallel workers (omit for auto = CPU cores)
//!
//! [[socials]]
//! name = "Github"
//! href = "https://github.com/example"
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want:
//!
//! ```toml
//! [site]
//! title = "Sharenote"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site identity: title, author, base URL.
    pub site: SiteMeta,
    /// Top-level navigation order (slugs, highest priority first).
    pub menu_order: Vec<String>,
    /// UI visibility toggles consumed by the page shell.
    pub toggles: Toggles,
    /// Fuzzy search tuning.
    pub search: SearchConfig,
    /// Image optimization targets and quality.
    pub images: ImagesConfig,
    /// Parallel processing settings.
    pub processing: ProcessingConfig,
    /// Footer social links.
    pub socials: Vec<Social>,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.search.threshold) {
            return Err(ConfigError::Validation(
                "search.threshold must be 0.0-1.0".into(),
            ));
        }
        if self.images.quality == 0 || self.images.quality > 100 {
            return Err(ConfigError::Validation(
                "images.quality must be 1-100".into(),
            ));
        }
        for target in &self.images.targets {
            if target.widths.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "images.targets entry '{}' has no widths",
                    target.file
                )));
            }
        }
        Ok(())
    }
}

/// Site identity shown in the page shell and sitemap.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteMeta {
    /// Site title, shown in the header and page `<title>`.
    pub title: String,
    /// Author name.
    pub author: String,
    /// Site description, shown on the home page.
    pub description: String,
    /// Base URL (e.g. `https://docs.example.com`), used for sitemap.xml.
    /// Sitemap generation is skipped when empty.
    pub website: String,
    /// Repository URL for the header repo button.
    pub repo: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: "Documentation".to_string(),
            author: String::new(),
            description: String::new(),
            website: String::new(),
            repo: String::new(),
        }
    }
}

/// UI visibility toggles.
///
/// Consumed as booleans by the page shell; they never alter what gets
/// scanned or indexed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Toggles {
    /// Hide the search trigger and skip emitting `search.json`.
    pub hide_search: bool,
    /// Hide the breadcrumb trail on document pages.
    pub hide_breadcrumbs: bool,
    /// Hide the in-page table of contents.
    pub hide_toc: bool,
    /// Hide the build datetime in the footer.
    pub hide_datetime: bool,
    /// Hide the repository button in the header.
    pub hide_repo_button: bool,
}

/// Fuzzy search tuning parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Maximum match score still counted as a hit (0 = exact matches
    /// only, 1 = match anything).
    pub threshold: f64,
    /// Expected position of a match within a field.
    pub location: usize,
    /// Positional decay divisor: how far from `location` a match may sit
    /// before its score degrades past the threshold.
    pub distance: usize,
    /// Queries shorter than this (after trimming) return no results.
    pub min_match_length: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            location: 0,
            distance: 100,
            min_match_length: 2,
        }
    }
}

/// Image optimization settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImagesConfig {
    /// AVIF encoding quality (1 = worst, 100 = best). WebP and PNG
    /// variants are lossless.
    pub quality: u32,
    /// Output directory for optimized variants, relative to the content
    /// root.
    pub output_dir: String,
    /// Images to optimize and their target widths.
    pub targets: Vec<ImageTarget>,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            quality: 80,
            output_dir: "assets/optimized".to_string(),
            targets: Vec::new(),
        }
    }
}

/// A single image optimization target.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageTarget {
    /// Source file, relative to the content root's `assets/` directory.
    pub file: String,
    /// Pixel widths to generate. Widths larger than the source are
    /// encoded at the source width (no enlargement).
    pub widths: Vec<u32>,
}

/// Parallel processing settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of parallel image-processing workers.
    /// When absent or null, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_processes: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config.max_processes.map(|n| n.min(cores)).unwrap_or(cores)
}

/// A footer social link.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Social {
    /// Display name (e.g. `"Github"`).
    pub name: String,
    /// Link target.
    pub href: String,
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let merged = match load_raw_config(root)? {
        Some(overlay) => merge_toml(base, overlay),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Simple Docs Configuration
# =========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Place this file at the root of your content directory.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Site identity
# ---------------------------------------------------------------------------
[site]
title = "Documentation"
author = ""
description = ""

# Base URL, e.g. "https://docs.example.com". Needed for sitemap.xml;
# leave empty to skip sitemap generation.
website = ""

# Repository URL for the header repo button.
repo = ""

# ---------------------------------------------------------------------------
# Navigation
# ---------------------------------------------------------------------------
# Top-level slugs in the order they should appear in the sidebar.
# Anything unlisted sorts after, in scan order. Nested slugs
# (e.g. "guide/setup") may be listed to order entries within a section.
menu_order = []

# ---------------------------------------------------------------------------
# Page shell toggles
# ---------------------------------------------------------------------------
[toggles]
hide_search = false
hide_breadcrumbs = false
hide_toc = false
hide_datetime = false
hide_repo_button = false

# ---------------------------------------------------------------------------
# Search
# ---------------------------------------------------------------------------
[search]
# Maximum match score still counted as a hit (0 = exact matches only,
# 1 = match anything).
threshold = 0.5

# Expected match position within a field, and how far from it a match
# may sit before its score degrades past the threshold.
location = 0
distance = 100

# Queries shorter than this return no results.
min_match_length = 2

# ---------------------------------------------------------------------------
# Image optimization (the `images` subcommand)
# ---------------------------------------------------------------------------
[images]
# AVIF encoding quality (1 = worst, 100 = best). WebP/PNG are lossless.
quality = 80

# Output directory for variants, relative to the content root.
output_dir = "assets/optimized"

# One entry per image. `file` is relative to <content>/assets/.
# [[images.targets]]
# file = "logo.png"
# widths = [320, 480, 640]

# ---------------------------------------------------------------------------
# Processing
# ---------------------------------------------------------------------------
[processing]
# Maximum parallel image-processing workers.
# Omit or comment out to auto-detect (= number of CPU cores).
# max_processes = 4

# ---------------------------------------------------------------------------
# Footer social links
# ---------------------------------------------------------------------------
# [[socials]]
# name = "Github"
# href = "https://github.com/example"
"##
}
