//! Centralized slug handling.
//!
//! Slugs are path-like strings with `/`-separated segments, derived from a
//! document's location in the content tree (`guide/setup.md` → `guide/setup`).
//! Every consumer — the scanner, the menu builder, the page generator — goes
//! through this module so normalization and display rules stay consistent.
//!
//! ## Display Titles
//!
//! A segment becomes a display title by capitalizing its first letter:
//! - `guide` → "Guide"
//! - `faqs` → "Faqs"
//!
//! Dashes are preserved; documentation slugs like `getting-started` are
//! shown as written, only capitalized.

/// Normalize a raw slug-like string.
///
/// - Backslashes become `/` (Windows-derived paths).
/// - Leading and trailing slashes are trimmed.
/// - Empty segments (from `//` runs) are dropped.
///
/// Handles these patterns:
/// - `"guide/setup"` → `"guide/setup"`
/// - `"/guide//setup/"` → `"guide/setup"`
/// - `"guide\\setup"` → `"guide/setup"`
/// - `"///"` → `""`
pub fn normalize_slug(raw: &str) -> String {
    raw.replace('\\', "/")
        .split('/')
        .filter(|seg| !seg.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Split a slug into its segments. Empty slugs yield no segments.
pub fn segments(slug: &str) -> Vec<&str> {
    slug.split('/').filter(|seg| !seg.is_empty()).collect()
}

/// The final segment of a slug, or the slug itself when it has no `/`.
pub fn last_segment(slug: &str) -> &str {
    slug.rsplit('/').next().unwrap_or(slug)
}

/// Capitalize the first letter of a string.
///
/// Multi-byte first letters are handled per `char::to_uppercase` (a single
/// lowercase char may uppercase to more than one).
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Display title for a document: the declared title when present,
/// otherwise the final slug segment — capitalized either way.
pub fn display_title(declared: Option<&str>, slug: &str) -> String {
    match declared {
        Some(t) if !t.is_empty() => capitalize_first(t),
        _ => capitalize_first(last_segment(slug)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_passes_clean_slug_through() {
        assert_eq!(normalize_slug("guide/setup"), "guide/setup");
    }

    #[test]
    fn normalize_trims_leading_and_trailing_slashes() {
        assert_eq!(normalize_slug("/guide/setup/"), "guide/setup");
    }

    #[test]
    fn normalize_drops_empty_segments() {
        assert_eq!(normalize_slug("guide//setup"), "guide/setup");
    }

    #[test]
    fn normalize_converts_backslashes() {
        assert_eq!(normalize_slug("guide\\setup"), "guide/setup");
    }

    #[test]
    fn normalize_all_slashes_is_empty() {
        assert_eq!(normalize_slug("///"), "");
    }

    #[test]
    fn segments_of_nested_slug() {
        assert_eq!(segments("a/b/c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn segments_of_empty_slug() {
        assert!(segments("").is_empty());
    }

    #[test]
    fn last_segment_of_nested_slug() {
        assert_eq!(last_segment("guide/setup"), "setup");
    }

    #[test]
    fn last_segment_of_single_segment() {
        assert_eq!(last_segment("faqs"), "faqs");
    }

    #[test]
    fn capitalize_ascii() {
        assert_eq!(capitalize_first("guide"), "Guide");
    }

    #[test]
    fn capitalize_already_capitalized() {
        assert_eq!(capitalize_first("Guide"), "Guide");
    }

    #[test]
    fn capitalize_empty() {
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn capitalize_only_first_word() {
        assert_eq!(capitalize_first("getting started"), "Getting started");
    }

    #[test]
    fn display_title_prefers_declared() {
        assert_eq!(
            display_title(Some("How it works"), "how-sharenote-works"),
            "How it works"
        );
    }

    #[test]
    fn display_title_falls_back_to_segment() {
        assert_eq!(display_title(None, "guide/setup"), "Setup");
    }

    #[test]
    fn display_title_ignores_empty_declared() {
        assert_eq!(display_title(Some(""), "guide/setup"), "Setup");
    }
}
