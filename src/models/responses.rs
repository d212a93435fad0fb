use serde::{Deserialize, Serialize};
use crate::models::domain::NormalizedJob;

/// Counters describing one scoring run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreStats {
    pub total_input: usize,
    pub total_output: usize,
    pub dropped_remote: usize,
    pub dropped_seniority: usize,
    pub dropped_excluded: usize,
    pub dropped_below_min_score: usize,
}

/// Surviving records of a scoring run, best first
#[derive(Debug, Clone)]
pub struct ScoreOutcome {
    pub jobs: Vec<NormalizedJob>,
    pub stats: ScoreStats,
}

/// Counters describing one deduplication run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DedupStats {
    pub total_input: usize,
    pub total_output: usize,
    pub duplicates_removed: usize,
}

impl DedupStats {
    pub fn new(total_input: usize, total_output: usize) -> Self {
        Self {
            total_input,
            total_output,
            duplicates_removed: total_input.saturating_sub(total_output),
        }
    }
}

/// Deduplicated records, ranked
#[derive(Debug, Clone)]
pub struct DedupOutcome {
    pub jobs: Vec<NormalizedJob>,
    pub stats: DedupStats,
}

/// Records left after every configured stage, plus the stats of each stage
/// that ran
#[derive(Debug, Clone, Default)]
pub struct PipelineOutcome {
    pub jobs: Vec<NormalizedJob>,
    pub score_stats: Option<ScoreStats>,
    pub dedup_stats: Option<DedupStats>,
}
