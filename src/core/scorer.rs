use std::cmp::Ordering;

use crate::core::{
    filters::{passes_remote_filter, passes_seniority_filter},
    scoring::keyword_score,
};
use crate::models::{InterestProfile, NormalizedJob, ScoreOutcome, ScoreStats};

/// Relevance scoring orchestrator - implements the filter-then-score pipeline
///
/// # Pipeline Stages
/// 1. Remote-only filter
/// 2. Seniority filter
/// 3. Keyword scoring, dropping excluded and low-scoring records
/// 4. Ranking by score
#[derive(Debug, Clone, Default)]
pub struct RelevanceScorer {
    profile: InterestProfile,
}

impl RelevanceScorer {
    pub fn new(profile: InterestProfile) -> Self {
        Self {
            profile: profile.normalized(),
        }
    }

    pub fn profile(&self) -> &InterestProfile {
        &self.profile
    }

    /// Score and filter a batch of jobs
    ///
    /// Survivors gain `preliminary_relevance_score` and `matched_keywords` and
    /// come back sorted by score, highest first. Equal scores keep their input
    /// order.
    pub fn score_jobs(&self, jobs: Vec<NormalizedJob>) -> ScoreOutcome {
        let profile = &self.profile;
        let mut stats = ScoreStats {
            total_input: jobs.len(),
            ..Default::default()
        };

        let mut scored: Vec<NormalizedJob> = Vec::with_capacity(jobs.len());

        for mut job in jobs {
            // Stage 1
            if !passes_remote_filter(&job, profile.remote_only) {
                stats.dropped_remote += 1;
                continue;
            }

            // Stage 2
            if !passes_seniority_filter(&job, &profile.seniority) {
                stats.dropped_seniority += 1;
                continue;
            }

            // Stage 3
            let (score, matched) =
                keyword_score(&job, &profile.keywords, &profile.exclude_keywords);

            if score < 0.0 {
                stats.dropped_excluded += 1;
                continue;
            }
            if score < profile.min_score {
                stats.dropped_below_min_score += 1;
                continue;
            }

            job.preliminary_relevance_score = Some(score);
            job.matched_keywords = Some(matched);
            scored.push(job);
        }

        // Stage 4: stable, so ties keep encounter order
        scored.sort_by(|a, b| b.score().partial_cmp(&a.score()).unwrap_or(Ordering::Equal));

        stats.total_output = scored.len();

        tracing::debug!(
            total_input = stats.total_input,
            total_output = stats.total_output,
            dropped_remote = stats.dropped_remote,
            dropped_seniority = stats.dropped_seniority,
            dropped_excluded = stats.dropped_excluded,
            dropped_below_min_score = stats.dropped_below_min_score,
            "Scoring finished"
        );

        ScoreOutcome {
            jobs: scored,
            stats,
        }
    }
}
