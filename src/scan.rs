//! Content scanning and manifest generation.
//!
//! Stage 1 of the build pipeline. Walks the content directory to discover
//! markdown documents, producing a structured manifest that the generate
//! stage consumes.
//!
//! ## Directory Structure
//!
//! ```text
//! content/                         # Content root
//! ├── config.toml                  # Site configuration (optional)
//! ├── assets/                      # Static assets → copied to output root
//! ├── introduction.md              # Top-level document (slug: introduction)
//! ├── faqs.mdx                     # MDX is scanned like markdown
//! └── guide/
//!     ├── index.md                 # Section page (slug: guide)
//!     ├── setup.md                 # Nested document (slug: guide/setup)
//!     └── advanced/
//!         └── tuning.md            # slug: guide/advanced/tuning
//! ```
//!
//! ## Slugs
//!
//! A document's slug is its path relative to the content root, extension
//! removed and separators normalized. A final `index` segment maps the
//! file to its directory (`guide/index.md` → `guide`). A root `index.md`
//! would produce an empty slug; it is skipped and reported — the home
//! page is generated, not authored.
//!
//! ## Frontmatter
//!
//! An optional YAML block between `---` fences:
//!
//! ```text
//! ---
//! title: Getting started
//! description: First steps
//! tags: [intro, setup]
//! draft: false
//! ---
//! ```
//!
//! Missing frontmatter or missing fields degrade to defaults; invalid
//! YAML in a present block is a scan error naming the file.

use crate::config::{self, SiteConfig};
use crate::slug::normalize_slug;
use crate::types::Document;
use gray_matter::Matter;
use gray_matter::engine::YAML;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Frontmatter error in {}: {message}", .path.display())]
    Frontmatter { path: PathBuf, message: String },
}

/// Manifest output from the scan stage.
#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    pub documents: Vec<Document>,
    /// Files found but not included in the collection (currently only a
    /// root `index.md`, whose slug would be empty).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<String>,
    pub config: SiteConfig,
}

/// Frontmatter fields recognized in document headers.
#[derive(Debug, Default, Deserialize)]
struct Frontmatter {
    title: Option<String>,
    description: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    date: Option<String>,
    #[serde(default)]
    draft: bool,
}

const MARKDOWN_EXTENSIONS: &[&str] = &["md", "mdx"];

pub fn scan(root: &Path) -> Result<Manifest, ScanError> {
    let mut md_files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        // depth 0 is the root itself, which may legitimately be hidden
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|p| is_markdown(p))
        .collect();

    // Deterministic encounter order: unlisted menu entries and duplicate
    // slugs both resolve by this ordering.
    md_files.sort();

    let matter = Matter::<YAML>::new();
    let mut documents = Vec::new();
    let mut skipped = Vec::new();

    for path in &md_files {
        let rel = path.strip_prefix(root).unwrap_or(path);
        let slug = slug_for(rel);
        let source_path = rel.to_string_lossy().replace('\\', "/");

        if slug.is_empty() {
            skipped.push(source_path);
            continue;
        }

        let content = fs::read_to_string(path)?;
        let parsed = matter.parse(&content);

        let frontmatter = match parsed.data {
            Some(data) => {
                data.deserialize::<Frontmatter>()
                    .map_err(|e| ScanError::Frontmatter {
                        path: path.clone(),
                        message: e.to_string(),
                    })?
            }
            None => Frontmatter::default(),
        };

        documents.push(Document {
            slug,
            title: frontmatter.title,
            description: frontmatter.description,
            tags: frontmatter.tags,
            date: frontmatter.date,
            draft: frontmatter.draft,
            body: parsed.content,
            source_path,
        });
    }

    // Load site config (uses defaults if config.toml doesn't exist)
    let config = config::load_config(root)?;

    Ok(Manifest {
        documents,
        skipped,
        config,
    })
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'))
}

fn is_markdown(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| MARKDOWN_EXTENSIONS.iter().any(|m| e.eq_ignore_ascii_case(m)))
}

/// Derive a document slug from a content-relative file path.
///
/// Extension removed, separators normalized, and a final `index` segment
/// dropped so `guide/index.md` addresses the `guide` section itself.
fn slug_for(rel_path: &Path) -> String {
    let stem_path = rel_path.with_extension("");
    let raw = stem_path.to_string_lossy();
    let slug = normalize_slug(&raw);

    match slug.rsplit_once('/') {
        Some((parent, "index")) => parent.to_string(),
        None if slug == "index" => String::new(),
        _ => slug,
    }
}
