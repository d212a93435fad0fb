//! Jobsift - relevance scoring and cross-source deduplication for job postings
//!
//! Records arrive already normalized to one schema. The relevance scorer
//! filters and ranks them against an interest profile; the duplicate resolver
//! merges postings that were picked up from several sources, keeping the most
//! trusted source's copy.

pub mod codec;
pub mod config;
pub mod core;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use crate::core::{is_duplicate, keyword_score, merge_jobs, DuplicateResolver, Pipeline, RelevanceScorer};
pub use error::PipelineError;
pub use models::{DedupOptions, DedupStats, InterestProfile, NormalizedJob, PipelineOutcome, ScoreStats};
