// Core algorithm exports
pub mod dedup;
pub mod filters;
pub mod pipeline;
pub mod scorer;
pub mod scoring;
pub mod similarity;

pub use dedup::{is_duplicate, merge_jobs, source_priority, DuplicateResolver};
pub use filters::{passes_remote_filter, passes_seniority_filter};
pub use pipeline::Pipeline;
pub use scorer::RelevanceScorer;
pub use scoring::{build_corpus, keyword_score};
pub use similarity::{fuzzy_match, normalize_company, normalize_title, similarity_ratio};
