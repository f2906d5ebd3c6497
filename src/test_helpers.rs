//! Shared test utilities for the simple-docs test suite.
//!
//! Provides document builders for menu/search tests and a content-tree
//! writer for scan/generate tests.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let docs = vec![titled_doc("guide/setup", "Setup"), doc("faqs")];
//! let menu = crate::menu::build_menu(&docs, &[]);
//! assert_eq!(
//!     menu_shape(&menu),
//!     vec![
//!         ("guide".to_string(), 0),
//!         ("guide/setup".to_string(), 1),
//!         ("faqs".to_string(), 0),
//!     ]
//! );
//! ```

use crate::menu::{self, MenuItem};
use crate::types::Document;
use std::path::Path;

// =========================================================================
// Document builders
// =========================================================================

/// A bare document: slug only, no frontmatter fields, empty body.
pub fn doc(slug: &str) -> Document {
    Document {
        slug: slug.to_string(),
        title: None,
        description: None,
        tags: Vec::new(),
        date: None,
        draft: false,
        body: String::new(),
        source_path: format!("{}.md", slug),
    }
}

/// A document with a declared title.
pub fn titled_doc(slug: &str, title: &str) -> Document {
    Document {
        title: Some(title.to_string()),
        ..doc(slug)
    }
}

/// A draft document.
pub fn draft_doc(slug: &str) -> Document {
    Document {
        draft: true,
        ..doc(slug)
    }
}

/// A fully-populated document for search tests.
pub fn full_doc(
    slug: &str,
    title: &str,
    description: &str,
    tags: &[&str],
    body: &str,
) -> Document {
    Document {
        title: Some(title.to_string()),
        description: (!description.is_empty()).then(|| description.to_string()),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        body: body.to_string(),
        ..doc(slug)
    }
}

// =========================================================================
// Content tree fixtures
// =========================================================================

/// Write a file under `root`, creating parent directories.
pub fn write_doc_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

// =========================================================================
// Menu assertions
// =========================================================================

/// Flatten a menu tree to `(slug, depth)` pairs in render order.
pub fn menu_shape(tree: &[MenuItem]) -> Vec<(String, usize)> {
    let mut shape = Vec::new();
    menu::walk(tree, &mut |item, depth| {
        shape.push((item.slug.clone(), depth));
    });
    shape
}
