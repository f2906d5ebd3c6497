//! Shared types used across pipeline stages.
//!
//! These types are serialized to JSON between stages (scan → generate)
//! and must be identical across both modules.

use serde::{Deserialize, Serialize};

/// A documentation page sourced from a markdown file in the content tree.
///
/// The slug is derived from the file path relative to the content root,
/// extension removed and separators normalized (`guide/setup.md` →
/// `guide/setup`). An `index.md` takes its directory's slug.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Path-like identifier, `/`-separated segments, unique per file.
    pub slug: String,
    /// Title from frontmatter, if declared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Description from frontmatter, if declared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Tags from frontmatter.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Publication date from frontmatter, shown as-is when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Draft flag from frontmatter. Drafts are built and indexed but
    /// annotated in navigation and kept out of the sitemap.
    #[serde(default)]
    pub draft: bool,
    /// Markdown source after the frontmatter block.
    pub body: String,
    /// Source file path relative to the content root.
    pub source_path: String,
}

impl Document {
    /// Display title: declared frontmatter title, or the capitalized final
    /// slug segment.
    pub fn display_title(&self) -> String {
        crate::slug::display_title(self.title.as_deref(), &self.slug)
    }
}
