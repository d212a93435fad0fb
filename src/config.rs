use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::similarity::{COMPANY_MATCH_THRESHOLD, TITLE_MATCH_THRESHOLD};
use crate::models::{DedupOptions, InterestProfile};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub dedup: DedupSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Default interest profile, used when the command line does not override it
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub exclude_keywords: Vec<String>,
    #[serde(default)]
    pub seniority: Vec<String>,
    #[serde(default)]
    pub remote_only: bool,
    #[serde(default)]
    pub min_score: f64,
}

impl ScoringSettings {
    pub fn to_profile(&self) -> InterestProfile {
        InterestProfile {
            keywords: self.keywords.clone(),
            exclude_keywords: self.exclude_keywords.clone(),
            seniority: self.seniority.clone(),
            remote_only: self.remote_only,
            min_score: self.min_score,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DedupSettings {
    #[serde(default = "default_company_threshold")]
    pub company_threshold: f64,
    #[serde(default = "default_title_threshold")]
    pub title_threshold: f64,
}

impl Default for DedupSettings {
    fn default() -> Self {
        Self {
            company_threshold: default_company_threshold(),
            title_threshold: default_title_threshold(),
        }
    }
}

impl DedupSettings {
    pub fn to_options(&self) -> DedupOptions {
        DedupOptions {
            company_threshold: self.company_threshold,
            title_threshold: self.title_threshold,
        }
    }
}

fn default_company_threshold() -> f64 { COMPANY_MATCH_THRESHOLD }
fn default_title_threshold() -> f64 { TITLE_MATCH_THRESHOLD }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "warn".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with JOBSIFT__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }
}

/// Environment overrides, e.g. JOBSIFT__SCORING__KEYWORDS=rust,go -> scoring.keywords
fn environment() -> Environment {
    Environment::with_prefix("JOBSIFT")
        .prefix_separator("__")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("scoring.keywords")
        .with_list_parse_key("scoring.exclude_keywords")
        .with_list_parse_key("scoring.seniority")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_thresholds() {
        let dedup = DedupSettings::default();
        assert_eq!(dedup.company_threshold, 0.80);
        assert_eq!(dedup.title_threshold, 0.75);
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "warn");
        assert_eq!(logging.format, "compact");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[scoring]
keywords = ["rust", "distributed systems"]
exclude_keywords = ["intern"]
remote_only = true
min_score = 20.0

[dedup]
title_threshold = 0.9
"#
        )
        .unwrap();

        let settings = Settings::load_from(file.path()).unwrap();

        assert_eq!(settings.scoring.keywords, vec!["rust", "distributed systems"]);
        assert!(settings.scoring.remote_only);
        assert_eq!(settings.scoring.min_score, 20.0);
        assert_eq!(settings.dedup.title_threshold, 0.9);
        assert_eq!(settings.dedup.company_threshold, 0.80);
        assert_eq!(settings.logging.level, "warn");

        let profile = settings.scoring.to_profile();
        assert_eq!(profile.exclude_keywords, vec!["intern"]);
    }
}
