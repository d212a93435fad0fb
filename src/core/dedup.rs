use std::cmp::Ordering;
use std::collections::HashSet;

use crate::core::similarity::{fuzzy_match, normalize_company, normalize_title};
use crate::models::{DedupOptions, DedupOutcome, DedupStats, NormalizedJob};

/// Priority given to a source tag that is not in the table
pub const UNKNOWN_SOURCE_PRIORITY: u8 = 99;

/// Source trust ranking, lower is preferred
///
/// ATS boards come straight from the employer, aggregator APIs republish them,
/// and RSS feeds are unverified scrapes.
const SOURCE_PRIORITY: &[(&str, u8)] = &[
    ("greenhouse", 1),
    ("lever", 1),
    ("workable", 1),
    ("ashby", 1),
    ("remotive", 2),
    ("remoteok", 2),
    ("jobicy", 2),
    ("himalayas", 2),
    ("themuse", 2),
    ("rss", 3),
];

/// Deduplication priority of a source tag
#[inline]
pub fn source_priority(source: &str) -> u8 {
    SOURCE_PRIORITY
        .iter()
        .find(|(name, _)| *name == source)
        .map(|(_, priority)| *priority)
        .unwrap_or(UNKNOWN_SOURCE_PRIORITY)
}

/// Check whether two records describe the same posting, using the default thresholds
pub fn is_duplicate(a: &NormalizedJob, b: &NormalizedJob) -> bool {
    DuplicateResolver::default().is_duplicate(a, b)
}

/// Merge two duplicate records, keeping `preferred` as the base
///
/// Missing salary, date and employment type are backfilled from `other`,
/// `other`'s new tags are appended, and `other` is recorded in
/// `alternate_sources`.
pub fn merge_jobs(preferred: NormalizedJob, other: NormalizedJob) -> NormalizedJob {
    let mut merged = preferred;

    backfill(&mut merged.salary_min, &other.salary_min);
    backfill(&mut merged.salary_max, &other.salary_max);
    backfill(&mut merged.salary_currency, &other.salary_currency);
    backfill(&mut merged.posted_date, &other.posted_date);
    backfill(&mut merged.employment_type, &other.employment_type);

    let mut seen: HashSet<String> = merged.tags.iter().cloned().collect();
    for tag in &other.tags {
        if seen.insert(tag.clone()) {
            merged.tags.push(tag.clone());
        }
    }

    let alternates = merged.alternate_sources.get_or_insert_with(Vec::new);
    alternates.push(other.as_alternate_source());
    if let Some(carried) = other.alternate_sources {
        alternates.extend(carried);
    }

    merged
}

/// A field that can be missing without being absent
trait Backfill {
    fn is_present(&self) -> bool;
}

impl Backfill for String {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Backfill for Option<String> {
    fn is_present(&self) -> bool {
        self.as_deref().is_some_and(|s| !s.is_empty())
    }
}

impl Backfill for Option<i64> {
    fn is_present(&self) -> bool {
        self.is_some_and(|v| v != 0)
    }
}

#[inline]
fn backfill<T: Backfill + Clone>(target: &mut T, source: &T) {
    if !target.is_present() && source.is_present() {
        *target = source.clone();
    }
}

/// A cluster representative with its comparison keys cached
struct Representative {
    job: NormalizedJob,
    priority: u8,
    company_key: String,
    title_key: String,
}

impl Representative {
    fn new(job: NormalizedJob) -> Self {
        Self {
            priority: source_priority(&job.source),
            company_key: normalize_company(&job.company),
            title_key: normalize_title(&job.title),
            job,
        }
    }
}

/// Cross-source duplicate resolver
///
/// Greedy single pass: records are visited best source first, each one either
/// folds into the first matching representative or becomes a new one.
#[derive(Debug, Clone, Copy, Default)]
pub struct DuplicateResolver {
    options: DedupOptions,
}

impl DuplicateResolver {
    pub fn new(options: DedupOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> DedupOptions {
        self.options
    }

    /// Check whether two records describe the same posting
    ///
    /// Both the normalized company names and the normalized titles must be
    /// fuzzy-similar.
    pub fn is_duplicate(&self, a: &NormalizedJob, b: &NormalizedJob) -> bool {
        self.keys_match(
            &normalize_company(&a.company),
            &normalize_title(&a.title),
            &normalize_company(&b.company),
            &normalize_title(&b.title),
        )
    }

    #[inline]
    fn keys_match(&self, company_a: &str, title_a: &str, company_b: &str, title_b: &str) -> bool {
        fuzzy_match(company_a, company_b, self.options.company_threshold)
            && fuzzy_match(title_a, title_b, self.options.title_threshold)
    }

    /// Collapse duplicates and rank the survivors
    ///
    /// # Arguments
    /// * `jobs` - Normalized records, scored or not
    ///
    /// # Returns
    /// DedupOutcome with survivors sorted by score (descending) then source
    /// priority (ascending), and the run counters
    pub fn resolve(&self, mut jobs: Vec<NormalizedJob>) -> DedupOutcome {
        let total_input = jobs.len();

        // Stable, so equal priorities keep input order
        jobs.sort_by_key(|job| source_priority(&job.source));

        let mut unique: Vec<Representative> = Vec::new();

        for job in jobs {
            let incoming = Representative::new(job);

            let position = unique.iter().position(|existing| {
                self.keys_match(
                    &incoming.company_key,
                    &incoming.title_key,
                    &existing.company_key,
                    &existing.title_key,
                )
            });

            match position {
                Some(i) => {
                    let existing = &mut unique[i];
                    tracing::trace!(
                        kept = %existing.job.source,
                        merged = %incoming.job.source,
                        title = %existing.job.title,
                        "Merging duplicate posting"
                    );

                    if incoming.priority < existing.priority {
                        let displaced = std::mem::take(&mut existing.job);
                        *existing = Representative::new(merge_jobs(incoming.job, displaced));
                    } else {
                        let kept = std::mem::take(&mut existing.job);
                        existing.job = merge_jobs(kept, incoming.job);
                    }
                }
                None => unique.push(incoming),
            }
        }

        let mut ranked: Vec<(u8, NormalizedJob)> = unique
            .into_iter()
            .map(|rep| (rep.priority, rep.job))
            .collect();

        ranked.sort_by(|(pa, a), (pb, b)| {
            b.score()
                .partial_cmp(&a.score())
                .unwrap_or(Ordering::Equal)
                .then_with(|| pa.cmp(pb))
        });

        let jobs: Vec<NormalizedJob> = ranked.into_iter().map(|(_, job)| job).collect();
        let stats = DedupStats::new(total_input, jobs.len());

        tracing::debug!(
            total_input = stats.total_input,
            total_output = stats.total_output,
            duplicates_removed = stats.duplicates_removed,
            "Deduplication finished"
        );

        DedupOutcome { jobs, stats }
    }
}
