//! Bitap approximate string matching.
//!
//! Pure scoring functions with no I/O. Scores are in `0.0..=1.0`, lower is
//! better: 0 means an exact match at the expected location, 1 means no
//! useful match. A score is built from two parts:
//!
//! - **accuracy**: edit errors divided by pattern length
//! - **proximity**: distance of the match from the expected `location`,
//!   divided by `distance`
//!
//! A candidate is accepted only while its score stays within `threshold`.
//! The bit-parallel machinery limits patterns to one machine word (32
//! positions); longer patterns are split into chunks whose scores are
//! averaged, with a match in any chunk counting.

use std::collections::HashMap;

/// Matcher tuning. Mirrors the search section of the site config.
#[derive(Debug, Clone, Copy)]
pub struct BitapConfig {
    /// Maximum score still counted as a match.
    pub threshold: f64,
    /// Expected match position within the text.
    pub location: usize,
    /// Positional decay divisor. Zero makes any off-location match score 1.
    pub distance: usize,
}

impl Default for BitapConfig {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            location: 0,
            distance: 100,
        }
    }
}

/// A scored match within a text.
#[derive(Debug, Clone, PartialEq)]
pub struct BitapMatch {
    /// Relevance score, lower is better. Never exactly zero: exact
    /// matches are floored at [`SCORE_FLOOR`] so ranking stays continuous.
    pub score: f64,
    /// Char index where the best match starts.
    pub start: usize,
    /// Char index one past the end of the matched span (clamped to the
    /// text length).
    pub end: usize,
}

/// Floor for match scores; keeps exact matches from collapsing to zero.
pub const SCORE_FLOOR: f64 = 0.001;

/// Patterns longer than this are searched in chunks.
const MAX_PATTERN_BITS: usize = 32;

/// Search `text` for an approximate occurrence of `pattern`.
///
/// Both inputs are compared as given; callers that want case-insensitive
/// matching lowercase both sides first. Returns `None` for empty inputs
/// or when no candidate scores within the threshold.
pub fn search(text: &str, pattern: &str, config: &BitapConfig) -> Option<BitapMatch> {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();
    if text.is_empty() || pattern.is_empty() {
        return None;
    }

    if pattern.len() <= MAX_PATTERN_BITS {
        let (score, start) = search_chunk(&text, &pattern, config.location, config)?;
        return Some(BitapMatch {
            score: score.max(SCORE_FLOOR),
            start,
            end: (start + pattern.len()).min(text.len()),
        });
    }

    // Long pattern: search each chunk at its shifted expected location.
    // Chunks that miss contribute a score of 1; the chunk average must
    // still clear the threshold for the whole pattern to count.
    let mut total_score = 0.0;
    let mut chunk_count = 0usize;
    let mut first_hit: Option<(usize, usize)> = None;

    for (i, chunk) in pattern.chunks(MAX_PATTERN_BITS).enumerate() {
        chunk_count += 1;
        let expected = config.location + i * MAX_PATTERN_BITS;
        match search_chunk(&text, chunk, expected, config) {
            Some((score, start)) => {
                total_score += score;
                if first_hit.is_none() {
                    first_hit = Some((start, (start + chunk.len()).min(text.len())));
                }
            }
            None => total_score += 1.0,
        }
    }

    let (start, end) = first_hit?;
    let score = total_score / chunk_count as f64;
    if score > config.threshold {
        return None;
    }
    Some(BitapMatch {
        score: score.max(SCORE_FLOOR),
        start,
        end,
    })
}

/// Combined accuracy + proximity score for a candidate location.
fn compute_score(
    errors: usize,
    current_location: usize,
    expected_location: usize,
    pattern_len: usize,
    distance: usize,
) -> f64 {
    let accuracy = errors as f64 / pattern_len as f64;
    let proximity = expected_location.abs_diff(current_location) as f64;
    if distance == 0 {
        return if proximity > 0.0 { 1.0 } else { accuracy };
    }
    accuracy + proximity / distance as f64
}

/// Bit-parallel search of a single ≤32-char pattern chunk.
///
/// Returns the best (score, start) within the threshold, or `None`.
fn search_chunk(
    text: &[char],
    pattern: &[char],
    expected_location: usize,
    config: &BitapConfig,
) -> Option<(f64, usize)> {
    let text_len = text.len();
    let pattern_len = pattern.len();
    let expected = expected_location.min(text_len);

    // Per-char bitmask of pattern positions.
    let mut alphabet: HashMap<char, u64> = HashMap::new();
    for (i, &ch) in pattern.iter().enumerate() {
        *alphabet.entry(ch).or_insert(0) |= 1 << (pattern_len - i - 1);
    }
    let mask_full: u64 = 1 << (pattern_len - 1);

    let mut current_threshold = config.threshold;
    let mut best_location: Option<usize> = None;
    let mut best_score = 1.0;

    // Exact-occurrence pre-pass: tightens the threshold so the error
    // rounds below only chase improvements.
    let mut from = 0;
    while let Some(offset) = find_subsequence(&text[from..], pattern) {
        let at = from + offset;
        let score = compute_score(0, at, expected, pattern_len, config.distance);
        if score <= current_threshold {
            current_threshold = score;
            best_location = Some(at);
            best_score = score;
        }
        from = at + 1;
    }

    let mut bin_max = pattern_len + text_len;
    let mut last_bit_arr: Vec<u64> = Vec::new();

    for errors in 0..pattern_len {
        // Binary search for the widest window around the expected
        // location where this error count can still beat the threshold.
        let mut bin_min = 0;
        let mut bin_mid = bin_max;
        while bin_min < bin_mid {
            let score = compute_score(
                errors,
                expected + bin_mid,
                expected,
                pattern_len,
                config.distance,
            );
            if score <= current_threshold {
                bin_min = bin_mid;
            } else {
                bin_max = bin_mid;
            }
            bin_mid = (bin_max - bin_min) / 2 + bin_min;
        }
        bin_max = bin_mid;

        let mut start = 1.max(expected as isize - bin_mid as isize + 1) as usize;
        let finish = (expected + bin_mid).min(text_len) + pattern_len;

        let mut bit_arr = vec![0u64; finish + 2];
        bit_arr[finish + 1] = (1 << errors) - 1;

        let mut j = finish;
        while j >= start {
            let current_location = j - 1;
            let char_match = if current_location < text_len {
                alphabet.get(&text[current_location]).copied().unwrap_or(0)
            } else {
                0
            };

            if errors == 0 {
                bit_arr[j] = ((bit_arr[j + 1] << 1) | 1) & char_match;
            } else {
                // Substitutions and insertions come from the previous
                // error round; deletions from its shifted state.
                bit_arr[j] = (((bit_arr[j + 1] << 1) | 1) & char_match)
                    | (((last_bit_arr[j + 1] | last_bit_arr[j]) << 1) | 1)
                    | last_bit_arr[j + 1];
            }

            if bit_arr[j] & mask_full != 0 {
                let score = compute_score(
                    errors,
                    current_location,
                    expected,
                    pattern_len,
                    config.distance,
                );
                if score <= current_threshold {
                    current_threshold = score;
                    best_location = Some(current_location);
                    best_score = score;
                    if current_location <= expected {
                        // Nothing earlier can score better; stop this round.
                        break;
                    }
                    // Narrow the window toward the expected location.
                    start = 1.max(2 * expected as isize - current_location as isize) as usize;
                }
            }
            j -= 1;
        }

        // One more error everywhere would already exceed the threshold.
        let floor = compute_score(errors + 1, expected, expected, pattern_len, config.distance);
        if floor > current_threshold {
            break;
        }
        last_bit_arr = bit_arr;
    }

    best_location.map(|loc| (best_score, loc))
}

/// First index of `needle` within `haystack`, by chars.
fn find_subsequence(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.len() > haystack.len() {
        return None;
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
