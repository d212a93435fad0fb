use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::PipelineError;
use crate::models::{NormalizedJob, PipelineOutcome};

/// Decode a JSON array of records
///
/// Blank input is an empty collection. Anything that is not an array of
/// objects fails with `MalformedInput` before any record is processed.
pub fn parse_jobs(raw: &str) -> Result<Vec<NormalizedJob>, PipelineError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(raw).map_err(PipelineError::MalformedInput)
}

/// Read records from a file, or stdin when no path is given
pub fn read_jobs(path: Option<&Path>) -> Result<Vec<NormalizedJob>, PipelineError> {
    let raw = match path {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().lock().read_to_string(&mut buf)?;
            buf
        }
    };

    let jobs = parse_jobs(&raw)?;
    tracing::debug!("Read {} job records", jobs.len());
    Ok(jobs)
}

/// Pretty-print a value as JSON followed by a newline
pub fn write_json<W: Write, T: Serialize + ?Sized>(
    mut writer: W,
    value: &T,
) -> Result<(), PipelineError> {
    serde_json::to_writer_pretty(&mut writer, value).map_err(PipelineError::Serialize)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Write records to a file, or stdout when no path is given
pub fn write_jobs(path: Option<&Path>, jobs: &[NormalizedJob]) -> Result<(), PipelineError> {
    match path {
        Some(path) => write_json(io::BufWriter::new(fs::File::create(path)?), jobs),
        None => write_json(io::stdout().lock(), jobs),
    }
}

/// One `<Stage> stats: {json}` line per stage that ran
pub fn write_stats<W: Write>(mut writer: W, outcome: &PipelineOutcome) -> Result<(), PipelineError> {
    if let Some(stats) = &outcome.score_stats {
        write_stats_line(&mut writer, "Score", stats)?;
    }
    if let Some(stats) = &outcome.dedup_stats {
        write_stats_line(&mut writer, "Dedup", stats)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_stats_line<W: Write, T: Serialize>(
    writer: &mut W,
    label: &str,
    stats: &T,
) -> Result<(), PipelineError> {
    let line = serde_json::to_string(stats).map_err(PipelineError::Serialize)?;
    writeln!(writer, "{label} stats: {line}")?;
    Ok(())
}
