use thiserror::Error;

/// Errors that abort a pipeline run
///
/// Per-record problems never show up here; they are recovered while decoding.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Malformed input: expected a JSON array of job records: {0}")]
    MalformedInput(#[source] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid options: {0}")]
    InvalidOptions(#[from] validator::ValidationErrors),

    #[error("Failed to encode output: {0}")]
    Serialize(#[source] serde_json::Error),
}
