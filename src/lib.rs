//! # Simple Docs
//!
//! A minimal static site generator for Markdown documentation.
//! Your filesystem is the data source: the directory tree becomes the
//! navigation tree, file paths become URL slugs, and YAML frontmatter
//! carries titles, tags, and draft flags.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! Content is processed in two independent stages with a JSON manifest
//! between them:
//!
//! ```text
//! 1. Scan      content/  →  manifest.json    (filesystem → documents + config)
//! 2. Generate  manifest  →  dist/            (menu tree + HTML + search records)
//! ```
//!
//! This separation exists for three reasons:
//!
//! - **Debuggability**: the manifest is human-readable JSON you can inspect.
//! - **Testability**: the menu builder and search index are pure functions
//!   over the manifest's document collection, so unit tests never touch
//!   the filesystem.
//! - **Reproducibility**: generate has no hidden inputs; the same manifest
//!   always produces the same site.
//!
//! An independent `images` subcommand pre-generates optimized AVIF/WebP/PNG
//! variants for images listed in config, and a `search` subcommand runs the
//! build-time fuzzy matcher from the terminal.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1 — walks the content tree, parses frontmatter, produces the scan manifest |
//! | [`generate`] | Stage 2 — renders the final HTML site from the manifest using Maud |
//! | [`menu`] | Orders the flat document collection into the sidebar navigation tree |
//! | [`search`] | Weighted fuzzy index over document fields, with a bitap matcher |
//! | [`process`] | Image optimization driven by the `[[images.targets]]` config table |
//! | [`imaging`] | Pure-Rust image operations behind a swappable backend trait |
//! | [`config`] | `config.toml` loading, validation, and merging |
//! | [`slug`] | Slug normalization and display-title rules shared by all stages |
//! | [`types`] | Shared types serialized between stages (`Document`) |
//! | [`output`] | CLI output formatting — tree-based display of pipeline results |
//!
//! # Design Decisions
//!
//! ## Explicit Collections, No Global State
//!
//! The document collection is always a parameter. Menu tree and search
//! index are rebuilt from the current collection on every run — nothing is
//! cached, persisted, or initialized at import time, so there is no
//! initialization-order dependency to trip over.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system, rather than Handlebars or Tera. Malformed HTML is a
//! build error, template variables are Rust expressions, all interpolation
//! is auto-escaped, and there is no template directory to ship or get out
//! of sync.
//!
//! ## Build-Time Search Scoring
//!
//! The fuzzy matcher is a bitap implementation living in this crate, not a
//! service and not a JavaScript dependency. Field weights, the match
//! threshold, and the positional decay are plain config values, and the
//! whole scoring path is unit-testable. The generated site ships the
//! indexed records as `search.json` for its dialog.
//!
//! ## Pure-Rust Imaging (No ImageMagick, No FFmpeg)
//!
//! The [`imaging`] module uses the `image` crate (Lanczos3 resampling,
//! rav1e AVIF encoding) — pure Rust, no system dependencies. The binary is
//! fully self-contained: download it and it works, on any machine.
//!
//! ## Forever Output
//!
//! The generated site is plain HTML, one embedded stylesheet, and a small
//! progressive-enhancement script for the search dialog. It can be dropped
//! on any file server — no Node, no build step on the serving side, no
//! database.

pub mod config;
pub mod generate;
pub mod imaging;
pub mod menu;
pub mod output;
pub mod process;
pub mod scan;
pub mod search;
pub mod slug;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
