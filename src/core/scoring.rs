use crate::models::NormalizedJob;

/// Score given to every record when the profile has no keywords
pub const NEUTRAL_SCORE: f64 = 50.0;

/// Sentinel score for a record whose title hits an exclude keyword
pub const EXCLUDED_SCORE: f64 = -1.0;

/// Upper bound of a keyword score
pub const MAX_SCORE: f64 = 100.0;

/// A title hit counts this many times a description hit
const TITLE_WEIGHT: f64 = 3.0;

/// Calculate a relevance score (0-100) for a job against the profile keywords
///
/// Scoring formula:
/// score = min(100, round(
///     (title_hits * 3 + description_hits) / (keyword_count * 3) * 100, 1
/// ))
///
/// A keyword found in the title counts as a title hit only; otherwise it is a
/// description hit if it appears anywhere in the searchable corpus. The
/// denominator uses every supplied keyword, so partial coverage scores lower.
///
/// Returns `NEUTRAL_SCORE` when no keywords are given and `EXCLUDED_SCORE` when
/// an exclude keyword appears in the title. Exclusions never look past the
/// title.
pub fn keyword_score(
    job: &NormalizedJob,
    keywords: &[String],
    exclude_keywords: &[String],
) -> (f64, Vec<String>) {
    if keywords.is_empty() {
        return (NEUTRAL_SCORE, Vec::new());
    }

    let title = job.title.to_lowercase();

    if exclude_keywords
        .iter()
        .map(|kw| kw.trim().to_lowercase())
        .any(|kw| !kw.is_empty() && title.contains(&kw))
    {
        return (EXCLUDED_SCORE, Vec::new());
    }

    let corpus = build_corpus(job);
    let mut matched = Vec::new();
    let mut title_hits = 0usize;
    let mut description_hits = 0usize;

    for keyword in keywords {
        let trimmed = keyword.trim();
        if trimmed.is_empty() {
            continue;
        }
        let needle = trimmed.to_lowercase();

        if title.contains(&needle) {
            title_hits += 1;
            matched.push(trimmed.to_string());
        } else if corpus.contains(&needle) {
            description_hits += 1;
            matched.push(trimmed.to_string());
        }
    }

    if matched.is_empty() {
        return (0.0, matched);
    }

    let weighted = title_hits as f64 * TITLE_WEIGHT + description_hits as f64;
    let possible = keywords.len() as f64 * TITLE_WEIGHT;
    let score = round_to_tenth(weighted / possible * 100.0).min(MAX_SCORE);

    (score, matched)
}

/// Lowercased searchable text: title, description, company, departments, tags
pub fn build_corpus(job: &NormalizedJob) -> String {
    format!(
        "{} {} {} {} {}",
        job.title,
        job.description_text,
        job.company,
        job.departments.join(" "),
        job.tags.join(" "),
    )
    .to_lowercase()
}

/// One decimal place, ties to even (6.25 -> 6.2, 6.35 -> 6.4)
#[inline]
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}
