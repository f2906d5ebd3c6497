//! CLI output formatting for all pipeline stages.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. The primary display
//! for every entity is its semantic identity — title and positional index —
//! with filesystem paths shown as secondary context via indented `Source:`
//! lines.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Documents
//! 001 Introduction
//!     Source: introduction.md
//! 002 Guide
//!     001 Setup
//!         Source: guide/setup.md
//!
//! Config
//!     config.toml
//! ```
//!
//! ## Images
//!
//! ```text
//! [ok] logo.png -> widths 320, 480
//! [skip] pcb.png not found
//! Optimized images written to assets/optimized
//! ```
//!
//! ## Generate
//!
//! ```text
//! Home -> index.html
//! 001 Introduction -> introduction/index.html
//! ...
//! Generated 5 pages
//! ```
//!
//! # Architecture
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::menu::{self, MenuItem};
use crate::process::{ProcessSummary, TargetStatus};
use crate::scan::Manifest;
use crate::search::SearchHit;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// A flattened node from walking the menu tree, with its sibling position.
struct TreeLine<'a> {
    depth: usize,
    position: usize,
    item: &'a MenuItem,
}

fn walk_tree<'a>(items: &'a [MenuItem]) -> Vec<TreeLine<'a>> {
    fn inner<'a>(items: &'a [MenuItem], depth: usize, out: &mut Vec<TreeLine<'a>>) {
        for (i, item) in items.iter().enumerate() {
            out.push(TreeLine {
                depth,
                position: i + 1,
                item,
            });
            inner(&item.children, depth + 1, out);
        }
    }
    let mut out = Vec::new();
    inner(items, 0, &mut out);
    out
}

// ============================================================================
// Stage 1: Scan output
// ============================================================================

/// Format scan stage output showing the discovered document tree.
pub fn format_scan_output(manifest: &Manifest, source_root: &Path) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Documents".to_string());

    let tree = menu::build_menu(&manifest.documents, &manifest.config.menu_order);
    for line in walk_tree(&tree) {
        let base = indent(line.depth);
        let draft_marker = if line.item.draft { " (draft)" } else { "" };
        lines.push(format!(
            "{}{} {}{}",
            base,
            format_index(line.position),
            line.item.title,
            draft_marker
        ));
        if let Some(doc) = manifest
            .documents
            .iter()
            .find(|d| d.slug == line.item.slug)
        {
            lines.push(format!("{}    Source: {}", base, doc.source_path));
        }
    }

    if !manifest.skipped.is_empty() {
        lines.push(String::new());
        lines.push("Skipped".to_string());
        for path in &manifest.skipped {
            lines.push(format!("    {} (empty slug)", path));
        }
    }

    lines.push(String::new());
    lines.push("Config".to_string());
    if source_root.join("config.toml").exists() {
        lines.push("    config.toml".to_string());
    } else {
        lines.push("    (defaults)".to_string());
    }
    if source_root.join("assets").is_dir() {
        lines.push("    assets/".to_string());
    }

    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(manifest: &Manifest, source_root: &Path) {
    for line in format_scan_output(manifest, source_root) {
        println!("{}", line);
    }
}

// ============================================================================
// Images output
// ============================================================================

/// Format the image optimization summary: one line per target, then the
/// destination directory.
pub fn format_process_summary(summary: &ProcessSummary) -> Vec<String> {
    let mut lines = Vec::new();
    for outcome in &summary.outcomes {
        match &outcome.status {
            TargetStatus::Processed { widths, .. } => {
                let widths: Vec<String> = widths.iter().map(|w| w.to_string()).collect();
                lines.push(format!(
                    "[ok] {} -> widths {}",
                    outcome.file,
                    widths.join(", ")
                ));
            }
            TargetStatus::SkippedMissing => {
                lines.push(format!("[skip] {} not found", outcome.file));
            }
        }
    }
    lines.push(format!(
        "Optimized images written to {}",
        summary.output_dir.display()
    ));
    lines
}

/// Print the image optimization summary to stdout.
pub fn print_process_summary(summary: &ProcessSummary) {
    for line in format_process_summary(summary) {
        println!("{}", line);
    }
}

// ============================================================================
// Stage 2: Generate output
// ============================================================================

/// Format generate stage output showing generated HTML files.
pub fn format_generate_output(manifest: &Manifest) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push("Home \u{2192} index.html".to_string());

    let tree = menu::build_menu(&manifest.documents, &manifest.config.menu_order);
    let mut pages = 0usize;
    for line in walk_tree(&tree) {
        let base = indent(line.depth);
        if line.item.has_page {
            pages += 1;
            lines.push(format!(
                "{}{} {} \u{2192} {}/index.html",
                base,
                format_index(line.position),
                line.item.title,
                line.item.slug
            ));
        } else {
            lines.push(format!(
                "{}{} {}",
                base,
                format_index(line.position),
                line.item.title
            ));
        }
    }

    lines.push(String::new());
    let mut extras = Vec::new();
    if !manifest.config.toggles.hide_search {
        extras.push("search.json");
    }
    if !manifest.config.site.website.is_empty() {
        extras.push("sitemap.xml");
    }
    if extras.is_empty() {
        lines.push(format!("Generated {} pages", pages + 1));
    } else {
        lines.push(format!(
            "Generated {} pages + {}",
            pages + 1,
            extras.join(" + ")
        ));
    }

    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(manifest: &Manifest) {
    for line in format_generate_output(manifest) {
        println!("{}", line);
    }
}

// ============================================================================
// Search output
// ============================================================================

/// Format ranked search results, best first.
pub fn format_search_results(hits: &[SearchHit]) -> Vec<String> {
    if hits.is_empty() {
        return vec!["No results".to_string()];
    }
    hits.iter()
        .enumerate()
        .map(|(i, hit)| {
            format!(
                "{} {} \u{2192} /{}/  (score {:.3}, {})",
                format_index(i + 1),
                hit.title,
                hit.slug,
                hit.score,
                hit.best_match.field
            )
        })
        .collect()
}

/// Print search results to stdout.
pub fn print_search_results(hits: &[SearchHit]) {
    for line in format_search_results(hits) {
        println!("{}", line);
    }
}
