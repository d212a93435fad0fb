// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{AlternateSource, NormalizedJob};
pub use requests::{DedupOptions, InterestProfile};
pub use responses::{DedupOutcome, DedupStats, PipelineOutcome, ScoreOutcome, ScoreStats};
