use serde::{Deserialize, Serialize};
use validator::Validate;

/// What the caller is looking for
///
/// Every part is optional; the default profile keeps every record and gives
/// each a neutral score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct InterestProfile {
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub exclude_keywords: Vec<String>,
    #[serde(default)]
    pub seniority: Vec<String>,
    #[serde(default)]
    pub remote_only: bool,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 100.0))]
    pub min_score: f64,
}

impl InterestProfile {
    /// Trim every entry and drop the empty ones
    pub fn normalized(mut self) -> Self {
        self.keywords = clean_terms(self.keywords);
        self.exclude_keywords = clean_terms(self.exclude_keywords);
        self.seniority = clean_terms(self.seniority);
        self
    }
}

fn clean_terms(terms: Vec<String>) -> Vec<String> {
    terms
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Fuzzy thresholds for the duplicate identity test
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct DedupOptions {
    #[validate(range(min = 0.0, max = 1.0))]
    pub company_threshold: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub title_threshold: f64,
}

impl Default for DedupOptions {
    fn default() -> Self {
        Self {
            company_threshold: crate::core::similarity::COMPANY_MATCH_THRESHOLD,
            title_threshold: crate::core::similarity::TITLE_MATCH_THRESHOLD,
        }
    }
}
