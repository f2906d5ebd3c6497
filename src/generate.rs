//! HTML site generation.
//!
//! Stage 2 of the build pipeline. Takes the scan manifest and generates
//! the final static site: one page per document, the home page, the
//! serialized search records, and a sitemap.
//!
//! ## Generated Output
//!
//! ```text
//! dist/
//! ├── index.html                 # Home page (site title + section list)
//! ├── search.json                # Search records for the client dialog
//! ├── sitemap.xml                # One <url> per non-draft document
//! ├── assets/                    # Copied verbatim from content/assets/
//! ├── introduction/
//! │   └── index.html
//! └── guide/
//!     ├── index.html
//!     └── setup/
//!         └── index.html
//! ```
//!
//! ## Page Shell
//!
//! Every page carries the sidebar navigation tree (current item
//! highlighted, drafts dimmed), breadcrumbs, an optional table of
//! contents, the search dialog, and a footer with social links. The
//! `[toggles]` config section switches individual pieces off.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating
//! and pulldown-cmark for markdown. External links open in a new tab;
//! headings get stable ids so the table of contents can link to them.
//!
//! CSS and the search dialog script are embedded at compile time from
//! `static/` — generated sites have no loose runtime files beyond their
//! own content.

use crate::config::SiteConfig;
use crate::menu::{self, MenuItem};
use crate::scan::Manifest;
use crate::search::SearchIndex;
use crate::slug::{capitalize_first, segments};
use crate::types::Document;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

const CSS: &str = include_str!("../static/style.css");
const SEARCH_JS: &str = include_str!("../static/search.js");

pub fn generate(
    manifest_path: &Path,
    source_root: &Path,
    output_dir: &Path,
) -> Result<(), GenerateError> {
    let manifest_content = fs::read_to_string(manifest_path)?;
    let manifest: Manifest = serde_json::from_str(&manifest_content)?;
    generate_from_manifest(&manifest, source_root, output_dir)
}

pub fn generate_from_manifest(
    manifest: &Manifest,
    source_root: &Path,
    output_dir: &Path,
) -> Result<(), GenerateError> {
    let config = &manifest.config;
    let tree = menu::build_menu(&manifest.documents, &config.menu_order);
    let titles = title_lookup(&tree);

    fs::create_dir_all(output_dir)?;

    // Static assets are copied verbatim to the output root
    let assets_src = source_root.join("assets");
    if assets_src.is_dir() {
        copy_dir_recursive(&assets_src, &output_dir.join("assets"))?;
    }

    // Home page
    let home = render_home(&tree, config);
    fs::write(output_dir.join("index.html"), home.into_string())?;

    // Document pages
    for doc in &manifest.documents {
        let page = render_doc_page(doc, &tree, &titles, config);
        let page_dir = output_dir.join(&doc.slug);
        fs::create_dir_all(&page_dir)?;
        fs::write(page_dir.join("index.html"), page.into_string())?;
    }

    // Search records for the client dialog
    if !config.toggles.hide_search {
        let index = SearchIndex::build(&manifest.documents, &config.search);
        let records: Vec<SearchRecordOut> = index
            .records()
            .map(|r| SearchRecordOut {
                slug: &r.slug,
                title: &r.display_title,
                fields: r.fields().collect(),
            })
            .collect();
        let json = serde_json::to_string_pretty(&records)?;
        fs::write(output_dir.join("search.json"), json)?;
    }

    // Sitemap (needs a configured base URL)
    if !config.site.website.is_empty() {
        let xml = sitemap_xml(&config.site.website, &manifest.documents);
        fs::write(output_dir.join("sitemap.xml"), xml)?;
    }

    Ok(())
}

/// Serialized search record, one per document.
#[derive(Serialize)]
struct SearchRecordOut<'a> {
    slug: &'a str,
    title: &'a str,
    fields: BTreeMap<&'static str, &'a str>,
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dst)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Map every menu slug to its display title, for breadcrumb labels.
fn title_lookup(tree: &[MenuItem]) -> HashMap<String, String> {
    let mut titles = HashMap::new();
    menu::walk(tree, &mut |item, _| {
        titles.insert(item.slug.clone(), item.title.clone());
    });
    titles
}

// ============================================================================
// Markdown rendering
// ============================================================================

/// A heading collected during markdown rendering, for the table of contents.
#[derive(Debug, Clone, PartialEq)]
pub struct TocEntry {
    pub level: u8,
    pub text: String,
    pub anchor: String,
}

fn heading_number(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

fn is_external(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Anchor id for a heading: lowercased, alphanumerics kept, runs of
/// anything else collapsed to a single dash.
fn slugify_anchor(text: &str) -> String {
    let mut anchor = String::with_capacity(text.len());
    let mut pending_dash = false;
    for c in text.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !anchor.is_empty() {
                anchor.push('-');
            }
            pending_dash = false;
            anchor.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    if anchor.is_empty() {
        "section".to_string()
    } else {
        anchor
    }
}

fn unique_anchor(text: &str, seen: &mut HashMap<String, usize>) -> String {
    let base = slugify_anchor(text);
    let count = seen.entry(base.clone()).or_insert(0);
    *count += 1;
    if *count == 1 {
        base
    } else {
        format!("{}-{}", base, count)
    }
}

/// Render a markdown body to HTML.
///
/// - GFM-ish extension set: tables, strikethrough, task lists, footnotes,
///   smart punctuation.
/// - External links open in a new tab (`target="_blank" rel="noopener"`).
/// - Headings get stable ids; the collected entries feed the table of
///   contents.
pub fn render_markdown(body: &str) -> (String, Vec<TocEntry>) {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_SMART_PUNCTUATION);

    let parser = Parser::new_ext(body, options);

    let mut events: Vec<Event> = Vec::new();
    let mut toc: Vec<TocEntry> = Vec::new();
    let mut anchors: HashMap<String, usize> = HashMap::new();
    // (level, buffered inner events, plain text) of the open heading
    let mut heading: Option<(u8, Vec<Event>, String)> = None;
    let mut in_external_link = false;

    for event in parser {
        match event {
            Event::Start(Tag::Heading { level, .. }) if heading.is_none() => {
                heading = Some((heading_number(level), Vec::new(), String::new()));
            }
            Event::End(TagEnd::Heading(_)) if heading.is_some() => {
                let (level, inner, text) = heading.take().unwrap();
                let anchor = unique_anchor(&text, &mut anchors);
                toc.push(TocEntry {
                    level,
                    text,
                    anchor: anchor.clone(),
                });
                events.push(Event::Html(
                    format!("<h{} id=\"{}\">", level, anchor).into(),
                ));
                events.extend(inner);
                events.push(Event::Html(format!("</h{}>", level).into()));
            }
            other => {
                // Markdown links never nest, so a single flag suffices.
                let rewritten = match other {
                    Event::Start(Tag::Link {
                        link_type,
                        dest_url,
                        title,
                        id,
                    }) => {
                        if is_external(&dest_url) {
                            in_external_link = true;
                            let title_attr = if title.is_empty() {
                                String::new()
                            } else {
                                format!(" title=\"{}\"", escape_attr(&title))
                            };
                            Event::Html(
                                format!(
                                    "<a href=\"{}\"{} target=\"_blank\" rel=\"noopener\">",
                                    escape_attr(&dest_url),
                                    title_attr
                                )
                                .into(),
                            )
                        } else {
                            Event::Start(Tag::Link {
                                link_type,
                                dest_url,
                                title,
                                id,
                            })
                        }
                    }
                    Event::End(TagEnd::Link) if in_external_link => {
                        in_external_link = false;
                        Event::Html("</a>".into())
                    }
                    e => e,
                };

                match &mut heading {
                    Some((_, inner, text)) => {
                        if let Event::Text(t) | Event::Code(t) = &rewritten {
                            text.push_str(t);
                        }
                        inner.push(rewritten);
                    }
                    None => events.push(rewritten),
                }
            }
        }
    }

    let mut html_out = String::new();
    pulldown_cmark::html::push_html(&mut html_out, events.into_iter());
    (html_out, toc)
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure.
fn base_document(title: &str, description: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                @if let Some(desc) = description {
                    meta name="description" content=(desc);
                }
                title { (title) }
                style { (PreEscaped(CSS)) }
            }
            body {
                (content)
            }
        }
    }
}

/// Renders the site header: title, repo button, search trigger.
fn site_header(config: &SiteConfig) -> Markup {
    html! {
        header.site-header {
            a.site-title href="/" { (config.site.title) }
            @if !config.site.repo.is_empty() && !config.toggles.hide_repo_button {
                a.repo-button href=(config.site.repo) target="_blank" rel="noopener" { "Source" }
            }
            @if !config.toggles.hide_search {
                button.search-trigger id="search-trigger" aria-label="Search" { "Search ⌘K" }
            }
        }
    }
}

/// Renders the sidebar navigation tree.
fn render_nav(items: &[MenuItem], current_slug: &str) -> Markup {
    html! {
        nav {
            ul {
                @for item in items {
                    (render_nav_item(item, current_slug))
                }
            }
        }
    }
}

/// Renders a single navigation item (may have children).
fn render_nav_item(item: &MenuItem, current_slug: &str) -> Markup {
    let is_current =
        item.slug == current_slug || current_slug.starts_with(&format!("{}/", item.slug));
    let classes = match (is_current, item.draft) {
        (true, true) => Some("current draft"),
        (true, false) => Some("current"),
        (false, true) => Some("draft"),
        (false, false) => None,
    };

    html! {
        li class=[classes] {
            @if item.has_page {
                a href={ "/" (item.slug) "/" } { (item.title) }
            } @else {
                span.nav-group { (item.title) }
            }
            @if !item.children.is_empty() {
                ul {
                    @for child in &item.children {
                        (render_nav_item(child, current_slug))
                    }
                }
            }
        }
    }
}

/// Renders the breadcrumb trail for a document slug.
fn render_breadcrumbs(slug: &str, titles: &HashMap<String, String>) -> Markup {
    let parts = segments(slug);
    html! {
        nav.breadcrumbs {
            a href="/" { "Home" }
            @for (i, part) in parts.iter().enumerate() {
                @let prefix = parts[..=i].join("/");
                @let label = titles
                    .get(&prefix)
                    .cloned()
                    .unwrap_or_else(|| capitalize_first(part));
                " / "
                @if i + 1 == parts.len() {
                    span { (label) }
                } @else {
                    a href={ "/" (prefix) "/" } { (label) }
                }
            }
        }
    }
}

/// Renders the in-page table of contents. Skipped for fewer than two
/// headings — a one-entry TOC is noise.
fn render_toc(toc: &[TocEntry]) -> Option<Markup> {
    if toc.len() < 2 {
        return None;
    }
    Some(html! {
        aside.toc {
            strong { "On this page" }
            ul {
                @for entry in toc {
                    li { a href={ "#" (entry.anchor) } { (entry.text) } }
                }
            }
        }
    })
}

/// Renders the site footer with social links.
fn site_footer(config: &SiteConfig) -> Markup {
    html! {
        footer.site-footer {
            @if !config.site.author.is_empty() {
                span { (config.site.author) }
            }
            @for social in &config.socials {
                a href=(social.href) target="_blank" rel="noopener" { (social.name) }
            }
        }
    }
}

/// Renders the search dialog and its inline script.
fn search_dialog() -> Markup {
    html! {
        dialog id="search-dialog" {
            input id="search-input" type="search" placeholder="Search ..." autocomplete="off";
            ul id="search-results" {}
        }
        script { (PreEscaped(SEARCH_JS)) }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders the home page: site description plus the top-level sections.
fn render_home(tree: &[MenuItem], config: &SiteConfig) -> Markup {
    let content = html! {
        (site_header(config))
        div.layout {
            aside.sidebar { (render_nav(tree, "")) }
            main {
                h1 { (config.site.title) }
                @if !config.site.description.is_empty() {
                    p { (config.site.description) }
                }
                ul.section-list {
                    @for item in tree {
                        li {
                            @if item.has_page {
                                a href={ "/" (item.slug) "/" } { (item.title) }
                            } @else {
                                span.nav-group { (item.title) }
                            }
                        }
                    }
                }
            }
        }
        (site_footer(config))
        @if !config.toggles.hide_search { (search_dialog()) }
    };
    base_document(
        &config.site.title,
        (!config.site.description.is_empty()).then_some(config.site.description.as_str()),
        content,
    )
}

/// Renders a single document page.
fn render_doc_page(
    doc: &Document,
    tree: &[MenuItem],
    titles: &HashMap<String, String>,
    config: &SiteConfig,
) -> Markup {
    let (body_html, toc) = render_markdown(&doc.body);
    let display_title = doc.display_title();
    let page_title = format!("{} — {}", display_title, config.site.title);

    let content = html! {
        (site_header(config))
        div.layout {
            aside.sidebar { (render_nav(tree, &doc.slug)) }
            main {
                @if !config.toggles.hide_breadcrumbs {
                    (render_breadcrumbs(&doc.slug, titles))
                }
                @if !config.toggles.hide_toc {
                    @if let Some(toc_markup) = render_toc(&toc) {
                        (toc_markup)
                    }
                }
                @if let Some(date) = doc.date.as_deref() {
                    @if !config.toggles.hide_datetime {
                        p.doc-meta { (date) }
                    }
                }
                article { (PreEscaped(body_html)) }
            }
        }
        (site_footer(config))
        @if !config.toggles.hide_search { (search_dialog()) }
    };
    base_document(&page_title, doc.description.as_deref(), content)
}

// ============================================================================
// Sitemap
// ============================================================================

/// Render sitemap.xml: the home page plus every non-draft document.
pub fn sitemap_xml(website: &str, documents: &[Document]) -> String {
    let base = website.trim_end_matches('/');
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    xml.push_str(&format!("  <url><loc>{}/</loc></url>\n", base));
    for doc in documents.iter().filter(|d| !d.draft) {
        xml.push_str(&format!(
            "  <url><loc>{}/{}/</loc></url>\n",
            base, doc.slug
        ));
    }
    xml.push_str("</urlset>\n");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{draft_doc, titled_doc, write_doc_file};
    use tempfile::TempDir;

    // =========================================================================
    // Markdown rendering
    // =========================================================================

    #[test]
    fn markdown_renders_basic_html() {
        let (html, _) = render_markdown("Some *emphasis* here.");
        assert!(html.contains("<em>emphasis</em>"));
    }

    #[test]
    fn external_links_open_in_new_tab() {
        let (html, _) = render_markdown("[site](https://example.com)");
        assert!(html.contains("target=\"_blank\""));
        assert!(html.contains("rel=\"noopener\""));
        assert!(html.contains("href=\"https://example.com\""));
    }

    #[test]
    fn internal_links_untouched() {
        let (html, _) = render_markdown("[setup](/guide/setup/)");
        assert!(html.contains("href=\"/guide/setup/\""));
        assert!(!html.contains("target=\"_blank\""));
    }

    #[test]
    fn headings_get_ids() {
        let (html, _) = render_markdown("## Threshold Tuning");
        assert!(html.contains("<h2 id=\"threshold-tuning\">"));
        assert!(html.contains("</h2>"));
    }

    #[test]
    fn toc_collects_headings_in_order() {
        let (_, toc) = render_markdown("# Title\n\nSome text\n## Sub");
        let entries: Vec<(u8, &str)> = toc.iter().map(|t| (t.level, t.text.as_str())).collect();
        assert_eq!(entries, vec![(1, "Title"), (2, "Sub")]);
    }

    #[test]
    fn duplicate_headings_get_unique_anchors() {
        let (_, toc) = render_markdown("## Usage\n\n## Usage");
        assert_eq!(toc[0].anchor, "usage");
        assert_eq!(toc[1].anchor, "usage-2");
    }

    #[test]
    fn anchor_slugification() {
        assert_eq!(slugify_anchor("Threshold Tuning"), "threshold-tuning");
        assert_eq!(slugify_anchor("What's new?"), "what-s-new");
        assert_eq!(slugify_anchor("???"), "section");
    }

    // =========================================================================
    // Sitemap
    // =========================================================================

    #[test]
    fn sitemap_lists_home_and_documents() {
        let docs = vec![titled_doc("intro", "Intro"), titled_doc("faqs", "FAQs")];
        let xml = sitemap_xml("https://docs.example.com", &docs);
        assert!(xml.contains("<loc>https://docs.example.com/</loc>"));
        assert!(xml.contains("<loc>https://docs.example.com/intro/</loc>"));
        assert!(xml.contains("<loc>https://docs.example.com/faqs/</loc>"));
    }

    #[test]
    fn sitemap_excludes_drafts() {
        let docs = vec![titled_doc("intro", "Intro"), draft_doc("wip")];
        let xml = sitemap_xml("https://docs.example.com/", &docs);
        assert!(xml.contains("/intro/"));
        assert!(!xml.contains("/wip/"));
    }

    // =========================================================================
    // Full generation
    // =========================================================================

    fn build_site(config_toml: &str) -> (TempDir, TempDir) {
        let source = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();

        write_doc_file(
            source.path(),
            "introduction.md",
            "---\ntitle: Introduction\n---\n# Introduction\n\nWelcome. See [the project site](https://example.com).\n",
        );
        write_doc_file(
            source.path(),
            "guide/setup.md",
            "---\ntitle: Setup\ntags: [setup]\n---\n## Install\n\ntext\n\n## Configure\n\ntext\n",
        );
        if !config_toml.is_empty() {
            std::fs::write(source.path().join("config.toml"), config_toml).unwrap();
        }

        let manifest = crate::scan::scan(source.path()).unwrap();
        generate_from_manifest(&manifest, source.path(), output.path()).unwrap();
        (source, output)
    }

    #[test]
    fn generates_page_per_document() {
        let (_src, out) = build_site("");
        assert!(out.path().join("index.html").exists());
        assert!(out.path().join("introduction/index.html").exists());
        assert!(out.path().join("guide/setup/index.html").exists());
    }

    #[test]
    fn doc_page_contains_nav_and_breadcrumbs() {
        let (_src, out) = build_site("");
        let page = std::fs::read_to_string(out.path().join("guide/setup/index.html")).unwrap();
        assert!(page.contains("class=\"breadcrumbs\""));
        assert!(page.contains("href=\"/introduction/\""));
        // Current item highlighted
        assert!(page.contains("current"));
    }

    #[test]
    fn hide_breadcrumbs_toggle_respected() {
        let (_src, out) = build_site("[toggles]\nhide_breadcrumbs = true\n");
        let page = std::fs::read_to_string(out.path().join("guide/setup/index.html")).unwrap();
        assert!(!page.contains("class=\"breadcrumbs\""));
    }

    #[test]
    fn search_json_written_and_parses() {
        let (_src, out) = build_site("");
        let json = std::fs::read_to_string(out.path().join("search.json")).unwrap();
        let records: serde_json::Value = serde_json::from_str(&json).unwrap();
        let slugs: Vec<&str> = records
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["slug"].as_str().unwrap())
            .collect();
        assert!(slugs.contains(&"introduction"));
        assert!(slugs.contains(&"guide/setup"));
    }

    #[test]
    fn hide_search_skips_records_and_trigger() {
        let (_src, out) = build_site("[toggles]\nhide_search = true\n");
        assert!(!out.path().join("search.json").exists());
        let page = std::fs::read_to_string(out.path().join("index.html")).unwrap();
        assert!(!page.contains("search-trigger"));
    }

    #[test]
    fn sitemap_only_with_website_configured() {
        let (_src, out) = build_site("");
        assert!(!out.path().join("sitemap.xml").exists());

        let (_src, out) = build_site("[site]\nwebsite = \"https://docs.example.com\"\n");
        let xml = std::fs::read_to_string(out.path().join("sitemap.xml")).unwrap();
        assert!(xml.contains("https://docs.example.com/guide/setup/"));
    }

    #[test]
    fn assets_copied_to_output() {
        let source = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        write_doc_file(source.path(), "intro.md", "# Intro");
        write_doc_file(source.path(), "assets/logo.png", "png bytes");

        let manifest = crate::scan::scan(source.path()).unwrap();
        generate_from_manifest(&manifest, source.path(), output.path()).unwrap();

        assert!(output.path().join("assets/logo.png").exists());
    }

    #[test]
    fn menu_order_shapes_home_section_list() {
        let (_src, out) = build_site("menu_order = [\"guide\", \"introduction\"]\n");
        let home = std::fs::read_to_string(out.path().join("index.html")).unwrap();
        let guide_pos = home.find("Guide").unwrap();
        let intro_pos = home.find("Introduction").unwrap();
        assert!(guide_pos < intro_pos);
    }

    #[test]
    fn draft_pages_render_but_marked() {
        let source = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        write_doc_file(
            source.path(),
            "wip.md",
            "---\ntitle: WIP\ndraft: true\n---\nnot done\n",
        );

        let manifest = crate::scan::scan(source.path()).unwrap();
        generate_from_manifest(&manifest, source.path(), output.path()).unwrap();

        assert!(output.path().join("wip/index.html").exists());
        let home = std::fs::read_to_string(output.path().join("index.html")).unwrap();
        assert!(home.contains("draft"));
    }

    #[test]
    fn doc_date_shown_unless_hidden() {
        let source = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        write_doc_file(
            source.path(),
            "intro.md",
            "---\ntitle: Intro\ndate: 2026-01-15\n---\nbody\n",
        );

        let manifest = crate::scan::scan(source.path()).unwrap();
        generate_from_manifest(&manifest, source.path(), output.path()).unwrap();
        let page = std::fs::read_to_string(output.path().join("intro/index.html")).unwrap();
        assert!(page.contains("2026-01-15"));
    }

    #[test]
    fn folder_nodes_render_as_groups_not_links() {
        let source = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        write_doc_file(source.path(), "guide/setup.md", "---\ntitle: Setup\n---\nx\n");

        let manifest = crate::scan::scan(source.path()).unwrap();
        generate_from_manifest(&manifest, source.path(), output.path()).unwrap();
        let home = std::fs::read_to_string(output.path().join("index.html")).unwrap();
        // The implicit "guide" folder is a group label, not a page link
        assert!(home.contains("nav-group"));
        assert!(!home.contains("href=\"/guide/\""));
    }
}
