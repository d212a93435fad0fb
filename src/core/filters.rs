use crate::models::NormalizedJob;

/// Check the record against the remote-only constraint
///
/// This is Stage 1 of the scoring pipeline.
#[inline]
pub fn passes_remote_filter(job: &NormalizedJob, remote_only: bool) -> bool {
    !remote_only || job.remote
}

/// Check the record's seniority against the wanted levels
///
/// This is Stage 2 of the scoring pipeline. Comparison is case-insensitive and
/// an empty filter lets everything through.
#[inline]
pub fn passes_seniority_filter(job: &NormalizedJob, seniority: &[String]) -> bool {
    if seniority.is_empty() {
        return true;
    }

    let level = job.seniority.to_lowercase();
    seniority.iter().any(|wanted| wanted.to_lowercase() == level)
}
