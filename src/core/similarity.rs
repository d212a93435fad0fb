use std::sync::OnceLock;

use regex::Regex;
use similar::TextDiff;

/// Minimum company-name similarity for two postings to be the same
pub const COMPANY_MATCH_THRESHOLD: f64 = 0.80;

/// Minimum title similarity for two postings to be the same
pub const TITLE_MATCH_THRESHOLD: f64 = 0.75;

/// Legal-entity suffixes stripped from company names, checked in order
const COMPANY_SUFFIXES: &[&str] = &[
    " inc",
    " inc.",
    " llc",
    " ltd",
    " ltd.",
    " gmbh",
    " pty",
    " co.",
    " corp",
    " corporation",
    " limited",
];

fn parenthesized() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\([^)]*\)").expect("parenthesized pattern is valid"))
}

fn work_arrangement_words() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b(remote|hybrid|onsite|full.?time|part.?time|contract)\b")
            .expect("work arrangement pattern is valid")
    })
}

fn whitespace_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern is valid"))
}

/// Reduce a company name to a comparison key
///
/// "Acme, Inc." and "ACME" both become "acme".
pub fn normalize_company(name: &str) -> String {
    let mut key = name.to_lowercase().trim().to_string();

    for suffix in COMPANY_SUFFIXES {
        if let Some(stripped) = key.strip_suffix(suffix) {
            key = stripped.to_string();
        }
    }

    key.chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Reduce a job title to a comparison key
///
/// Drops parenthesized annotations (usually locations) and work-arrangement
/// words, so "Senior Engineer (Berlin) - Remote" compares as "senior engineer -".
pub fn normalize_title(title: &str) -> String {
    let lowered = title.to_lowercase();
    let key = parenthesized().replace_all(lowered.trim(), "");
    let key = work_arrangement_words().replace_all(&key, "");
    whitespace_run().replace_all(&key, " ").trim().to_string()
}

/// Similarity ratio in [0, 1] between two strings
///
/// Computed as `2 * M / T` over a character diff, where `M` is the number of
/// matched characters and `T` the combined length.
#[inline]
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    f64::from(TextDiff::from_chars(a, b).ratio())
}

/// Check whether two keys are similar enough to denote the same entity
///
/// Empty keys never match.
#[inline]
pub fn fuzzy_match(a: &str, b: &str, threshold: f64) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    similarity_ratio(a, b) >= threshold
}
