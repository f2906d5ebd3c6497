//! Weighted fuzzy search over the document collection.
//!
//! The index is a flat list of per-document records, each holding the
//! values of a fixed set of named extraction rules — no runtime field
//! dispatch. Queries run the bitap matcher (see [`bitap`]) against every
//! field of every record and combine per-field scores by weight.
//!
//! ## Fields and weights
//!
//! | field       | weight | extraction |
//! |-------------|--------|------------|
//! | id          | 2.5    | slug (document identity) |
//! | slug        | 2.5    | slug |
//! | body        | 1.0    | raw markdown body |
//! | title       | 2.0    | frontmatter title |
//! | description | 1.75   | frontmatter description |
//! | tags        | 1.5    | tags joined with spaces |
//! | headers     | 2.0    | markdown heading text joined with spaces |
//!
//! Scores are ascending (lower = better); there is no exact-match tier —
//! an exact hit simply scores near zero and sorts first. The index is
//! ephemeral: rebuilt in memory whenever the collection changes, never
//! persisted.

pub mod bitap;

use crate::config::SearchConfig;
use crate::types::Document;
use bitap::{BitapConfig, BitapMatch};
use std::sync::LazyLock;

/// The named field extraction rules, evaluated once per document at
/// index-build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    Slug,
    Body,
    Title,
    Description,
    Tags,
    Headers,
}

/// All fields, in indexing order.
pub const FIELDS: [Field; 7] = [
    Field::Id,
    Field::Slug,
    Field::Body,
    Field::Title,
    Field::Description,
    Field::Tags,
    Field::Headers,
];

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Slug => "slug",
            Field::Body => "body",
            Field::Title => "title",
            Field::Description => "description",
            Field::Tags => "tags",
            Field::Headers => "headers",
        }
    }

    pub fn weight(self) -> f64 {
        match self {
            Field::Id | Field::Slug => 2.5,
            Field::Body => 1.0,
            Field::Title => 2.0,
            Field::Description => 1.75,
            Field::Tags => 1.5,
            Field::Headers => 2.0,
        }
    }

    /// Extract this field's searchable text from a document.
    ///
    /// Empty extractions return `None`; the field is simply absent from
    /// the record and can never match.
    pub fn extract(self, doc: &Document) -> Option<String> {
        let value = match self {
            Field::Id | Field::Slug => doc.slug.clone(),
            Field::Body => doc.body.clone(),
            Field::Title => doc.title.clone().unwrap_or_default(),
            Field::Description => doc.description.clone().unwrap_or_default(),
            Field::Tags => doc.tags.join(" "),
            Field::Headers => extract_headers(&doc.body).join(" "),
        };
        if value.is_empty() { None } else { Some(value) }
    }
}

static HEADER_RE: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"(?m)^#{1,6}[ \t]+(.*)$").expect("header regex"));

/// Extract markdown heading text from a body: every line starting with
/// 1-6 `#` characters followed by whitespace.
pub fn extract_headers(body: &str) -> Vec<String> {
    HEADER_RE
        .captures_iter(body)
        .map(|cap| cap[1].trim_end().to_string())
        .collect()
}

/// One indexed field of one document: lowercased text ready for matching.
#[derive(Debug, Clone)]
struct IndexedField {
    field: Field,
    text: String,
}

/// The indexed view of a single document.
#[derive(Debug, Clone)]
pub struct SearchRecord {
    pub slug: String,
    pub display_title: String,
    fields: Vec<IndexedField>,
}

/// A ranked query result.
#[derive(Debug, Clone)]
pub struct SearchHit {
    /// Slug of the matched document, rendered as a link to `/<slug>/`.
    pub slug: String,
    /// Display title (declared title or capitalized last slug segment).
    pub title: String,
    /// Combined relevance score, lower is better.
    pub score: f64,
    /// Where the strongest field match landed.
    pub best_match: MatchSpan,
}

/// Span metadata for the best-scoring field match of a hit.
#[derive(Debug, Clone)]
pub struct MatchSpan {
    pub field: &'static str,
    /// Char range within the (lowercased) field text.
    pub start: usize,
    pub end: usize,
}

/// In-memory weighted fuzzy index over a document collection.
pub struct SearchIndex {
    records: Vec<SearchRecord>,
    matcher: BitapConfig,
    min_match_length: usize,
    total_weight: f64,
}

impl SearchIndex {
    /// Build the index. Evaluates every extraction rule per document and
    /// lowercases field text once, so queries only lowercase the pattern.
    pub fn build(documents: &[Document], config: &SearchConfig) -> Self {
        let records = documents
            .iter()
            .map(|doc| SearchRecord {
                slug: doc.slug.clone(),
                display_title: doc.display_title(),
                fields: FIELDS
                    .iter()
                    .filter_map(|&field| {
                        field.extract(doc).map(|text| IndexedField {
                            field,
                            text: text.to_lowercase(),
                        })
                    })
                    .collect(),
            })
            .collect();

        Self {
            records,
            matcher: BitapConfig {
                threshold: config.threshold,
                location: config.location,
                distance: config.distance,
            },
            min_match_length: config.min_match_length,
            total_weight: FIELDS.iter().map(|f| f.weight()).sum(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Run a query, returning hits ranked best-first (ascending score).
    ///
    /// Queries shorter than the configured minimum (after trimming)
    /// return no results. Matching is case-insensitive.
    pub fn query(&self, text: &str) -> Vec<SearchHit> {
        let pattern = text.trim().to_lowercase();
        if pattern.chars().count() < self.min_match_length {
            return Vec::new();
        }

        let mut hits: Vec<SearchHit> = self
            .records
            .iter()
            .filter_map(|record| self.score_record(record, &pattern))
            .collect();

        hits.sort_by(|a, b| a.score.total_cmp(&b.score));
        hits
    }

    /// Score one record against the pattern: weight-normalized geometric
    /// mean of the matched fields' bitap scores. Fields that miss
    /// contribute nothing; a record with no matching field is no hit.
    fn score_record(&self, record: &SearchRecord, pattern: &str) -> Option<SearchHit> {
        let mut log_sum = 0.0;
        let mut best: Option<(f64, Field, BitapMatch)> = None;

        for indexed in &record.fields {
            let Some(m) = bitap::search(&indexed.text, pattern, &self.matcher) else {
                continue;
            };
            log_sum += indexed.field.weight() * m.score.ln();
            let better = match &best {
                Some((score, _, _)) => m.score < *score,
                None => true,
            };
            if better {
                best = Some((m.score, indexed.field, m));
            }
        }

        let (_, field, m) = best?;
        Some(SearchHit {
            slug: record.slug.clone(),
            title: record.display_title.clone(),
            score: (log_sum / self.total_weight).exp(),
            best_match: MatchSpan {
                field: field.name(),
                start: m.start,
                end: m.end,
            },
        })
    }

    /// The indexed records, in document order. Serialized into the site
    /// output for the client-side dialog.
    pub fn records(&self) -> impl Iterator<Item = &SearchRecord> {
        self.records.iter()
    }
}

impl SearchRecord {
    /// Field values of this record, in indexing order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields.iter().map(|f| (f.field.name(), f.text.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{doc, full_doc, titled_doc};

    fn index(docs: &[Document]) -> SearchIndex {
        SearchIndex::build(docs, &SearchConfig::default())
    }

    // =========================================================================
    // Header extraction
    // =========================================================================

    #[test]
    fn headers_extracted_from_body() {
        let headers = extract_headers("# Title\n\nSome text\n## Sub");
        assert_eq!(headers, vec!["Title", "Sub"]);
    }

    #[test]
    fn headers_require_whitespace_after_hashes() {
        let headers = extract_headers("#NoSpace\n### Spaced");
        assert_eq!(headers, vec!["Spaced"]);
    }

    #[test]
    fn headers_ignore_seven_hashes() {
        let headers = extract_headers("####### too deep\n###### just right");
        assert_eq!(headers, vec!["just right"]);
    }

    #[test]
    fn headers_empty_body() {
        assert!(extract_headers("").is_empty());
    }

    #[test]
    fn headers_only_at_line_start() {
        let headers = extract_headers("text # not a header\n# Real");
        assert_eq!(headers, vec!["Real"]);
    }

    // =========================================================================
    // Field extraction
    // =========================================================================

    #[test]
    fn fields_skip_empty_values() {
        let d = doc("bare");
        let indexed: Vec<&'static str> = FIELDS
            .iter()
            .filter_map(|&f| f.extract(&d).map(|_| f.name()))
            .collect();
        // No title/description/tags/headers, empty body
        assert_eq!(indexed, vec!["id", "slug"]);
    }

    #[test]
    fn tags_joined_with_spaces() {
        let d = full_doc("intro", "Intro", "First steps", &["mining", "payout"], "body");
        assert_eq!(Field::Tags.extract(&d).unwrap(), "mining payout");
    }

    #[test]
    fn headers_field_joins_heading_text() {
        let mut d = doc("page");
        d.body = "# Alpha\ntext\n## Beta\n".to_string();
        assert_eq!(Field::Headers.extract(&d).unwrap(), "Alpha Beta");
    }

    // =========================================================================
    // Querying
    // =========================================================================

    #[test]
    fn exact_title_ranks_first() {
        let docs = vec![
            full_doc("architecture", "Architecture", "", &[], "All about the design."),
            full_doc("workflow", "Workflow", "", &[], "Stages and architecture notes."),
            full_doc("faqs", "FAQs", "", &[], "Common questions."),
        ];
        let hits = index(&docs).query("architecture");
        assert!(!hits.is_empty());
        assert_eq!(hits[0].slug, "architecture");
    }

    #[test]
    fn empty_query_returns_nothing() {
        let docs = vec![titled_doc("intro", "Intro")];
        assert!(index(&docs).query("").is_empty());
    }

    #[test]
    fn whitespace_query_returns_nothing() {
        let docs = vec![titled_doc("intro", "Intro")];
        assert!(index(&docs).query("   \t ").is_empty());
    }

    #[test]
    fn single_char_query_below_min_length() {
        let docs = vec![titled_doc("intro", "Intro")];
        assert!(index(&docs).query("i").is_empty());
    }

    #[test]
    fn unmatched_query_returns_empty() {
        let docs = vec![full_doc("intro", "Intro", "", &[], "Some body text.")];
        assert!(index(&docs).query("qqqqzzzz").is_empty());
    }

    #[test]
    fn matching_is_case_insensitive() {
        let docs = vec![titled_doc("guide", "Getting Started")];
        let hits = index(&docs).query("GETTING");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].slug, "guide");
    }

    #[test]
    fn scores_ascend_through_ranking() {
        let docs = vec![
            full_doc("mining", "Mining", "", &[], "How shares are mined."),
            full_doc("notes", "Notes", "", &[], "A note that mentions mining late in the text."),
        ];
        let hits = index(&docs).query("mining");
        assert!(hits.len() >= 2);
        assert!(hits[0].score <= hits[1].score);
        assert_eq!(hits[0].slug, "mining");
    }

    #[test]
    fn title_match_outranks_body_match() {
        let docs = vec![
            full_doc("a", "Payouts", "", &[], "Unrelated content."),
            full_doc("b", "Other", "", &[], "payouts appear in the body only"),
        ];
        let hits = index(&docs).query("payouts");
        assert_eq!(hits[0].slug, "a");
    }

    #[test]
    fn tags_are_searchable() {
        let docs = vec![
            full_doc("intro", "Intro", "", &["consensus"], "Body."),
            full_doc("faqs", "FAQs", "", &[], "Body."),
        ];
        let hits = index(&docs).query("consensus");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].slug, "intro");
    }

    #[test]
    fn header_text_is_searchable() {
        let docs = vec![full_doc(
            "deep",
            "Deep",
            "",
            &[],
            "intro\n\n## Threshold tuning\n\ndetails",
        )];
        let hits = index(&docs).query("threshold tuning");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].slug, "deep");
    }

    #[test]
    fn hit_reports_best_match_span() {
        let docs = vec![titled_doc("guide", "Setup")];
        let hits = index(&docs).query("setup");
        let span = &hits[0].best_match;
        // slug/id and title all match exactly; the span points at one of them
        assert_eq!(span.start, 0);
        assert!(span.end >= 5);
    }

    #[test]
    fn hit_title_falls_back_to_slug_segment() {
        let docs = vec![doc("guide/setup")];
        let hits = index(&docs).query("setup");
        assert_eq!(hits[0].title, "Setup");
    }

    #[test]
    fn typo_still_matches() {
        let docs = vec![titled_doc("workflow", "Workflow")];
        let hits = index(&docs).query("workflaw");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].slug, "workflow");
    }

    #[test]
    fn min_match_length_respects_config() {
        let docs = vec![titled_doc("intro", "Intro")];
        let config = SearchConfig {
            min_match_length: 5,
            ..SearchConfig::default()
        };
        let idx = SearchIndex::build(&docs, &config);
        assert!(idx.query("intr").is_empty());
        assert!(!idx.query("intro").is_empty());
    }

    #[test]
    fn index_rebuilds_from_scratch() {
        let docs = vec![titled_doc("old", "Old page")];
        let idx = index(&docs);
        assert_eq!(idx.len(), 1);

        let docs = vec![titled_doc("new", "New page"), titled_doc("other", "Other")];
        let idx = index(&docs);
        assert_eq!(idx.len(), 2);
        assert!(idx.query("old page").is_empty());
    }
}
