use crate::core::{DuplicateResolver, RelevanceScorer};
use crate::models::{NormalizedJob, PipelineOutcome};

/// Chains the scorer and the resolver over one batch
///
/// Either stage may be absent. When both are present, scoring runs first so
/// excluded and filtered records never take part in deduplication.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    scorer: Option<RelevanceScorer>,
    resolver: Option<DuplicateResolver>,
}

impl Pipeline {
    pub fn new(scorer: Option<RelevanceScorer>, resolver: Option<DuplicateResolver>) -> Self {
        Self { scorer, resolver }
    }

    pub fn scoring(scorer: RelevanceScorer) -> Self {
        Self::new(Some(scorer), None)
    }

    pub fn dedup(resolver: DuplicateResolver) -> Self {
        Self::new(None, Some(resolver))
    }

    pub fn run(&self, jobs: Vec<NormalizedJob>) -> PipelineOutcome {
        let mut outcome = PipelineOutcome {
            jobs,
            ..Default::default()
        };

        if let Some(scorer) = &self.scorer {
            let scored = scorer.score_jobs(outcome.jobs);
            tracing::info!(
                total_input = scored.stats.total_input,
                total_output = scored.stats.total_output,
                "Scoring complete"
            );
            outcome.score_stats = Some(scored.stats);
            outcome.jobs = scored.jobs;
        }

        if let Some(resolver) = &self.resolver {
            let resolved = resolver.resolve(outcome.jobs);
            tracing::info!(
                total_input = resolved.stats.total_input,
                total_output = resolved.stats.total_output,
                duplicates_removed = resolved.stats.duplicates_removed,
                "Dedup complete"
            );
            outcome.dedup_stats = Some(resolved.stats);
            outcome.jobs = resolved.jobs;
        }

        outcome
    }
}
