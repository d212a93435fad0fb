// Unit tests for Jobsift

use jobsift::core::{
    dedup::{is_duplicate, merge_jobs, source_priority},
    filters::{passes_remote_filter, passes_seniority_filter},
    scoring::{keyword_score, EXCLUDED_SCORE, NEUTRAL_SCORE},
    similarity::{fuzzy_match, normalize_company, normalize_title},
};
use jobsift::models::NormalizedJob;

fn terms(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_remote_python_intern_is_excluded() {
    let job = NormalizedJob {
        title: "Remote Python Intern".to_string(),
        remote: true,
        ..Default::default()
    };

    let (score, matched) = keyword_score(&job, &terms(&["python", "remote"]), &terms(&["intern"]));

    assert_eq!(score, EXCLUDED_SCORE);
    assert!(matched.is_empty());
}

#[test]
fn test_partial_score_scenario() {
    let job = NormalizedJob {
        title: "a".to_string(),
        description_text: "b".to_string(),
        ..Default::default()
    };

    let (score, matched) = keyword_score(&job, &terms(&["a", "b", "c", "d"]), &[]);

    assert_eq!(score, 33.3);
    assert_eq!(matched, vec!["a", "b"]);
}

#[test]
fn test_neutral_score_without_keywords() {
    let job = NormalizedJob {
        title: "Anything".to_string(),
        ..Default::default()
    };

    let (score, matched) = keyword_score(&job, &[], &[]);

    assert_eq!(score, NEUTRAL_SCORE);
    assert!(matched.is_empty());
}

#[test]
fn test_title_hit_outscores_description_hit() {
    let keywords = terms(&["kafka", "scala"]);

    let in_title = NormalizedJob {
        title: "Kafka Engineer".to_string(),
        ..Default::default()
    };
    let in_description = NormalizedJob {
        title: "Engineer".to_string(),
        description_text: "Operate Kafka clusters".to_string(),
        ..Default::default()
    };

    let (title_score, _) = keyword_score(&in_title, &keywords, &[]);
    let (description_score, _) = keyword_score(&in_description, &keywords, &[]);

    assert!(title_score > description_score);
}

#[test]
fn test_score_within_bounds() {
    let keywords = terms(&["rust", "go", "senior", "platform"]);
    let titles = [
        "Senior Rust Platform Engineer",
        "Go Developer",
        "Platform Lead",
        "Senior Go/Rust Platform Engineer",
    ];

    for title in titles {
        let job = NormalizedJob {
            title: title.to_string(),
            description_text: "rust go senior platform".to_string(),
            ..Default::default()
        };
        let (score, matched) = keyword_score(&job, &keywords, &[]);

        assert!(!matched.is_empty());
        assert!((0.0..=100.0).contains(&score), "Score {} is out of range [0, 100]", score);
    }
}

#[test]
fn test_filters_on_missing_fields() {
    let job = NormalizedJob::default();

    assert!(!passes_remote_filter(&job, true));
    assert!(passes_remote_filter(&job, false));
    assert!(!passes_seniority_filter(&job, &terms(&["senior"])));
}

#[test]
fn test_company_normalization() {
    assert_eq!(normalize_company("Acme Inc."), normalize_company("ACME"));
    assert_eq!(normalize_company("Globex Corp"), "globex");
    assert_eq!(normalize_company("Wayne Enterprises Ltd."), "wayne enterprises");
}

#[test]
fn test_title_normalization() {
    assert_eq!(normalize_title("Senior Engineer (Remote)"), "senior engineer");
    assert_eq!(normalize_title("  Onsite   QA Lead  "), "qa lead");
}

#[test]
fn test_fuzzy_match_rejects_empty() {
    assert!(!fuzzy_match("", "acme", 0.0));
}

#[test]
fn test_source_priorities() {
    assert!(source_priority("lever") < source_priority("remotive"));
    assert!(source_priority("remotive") < source_priority("rss"));
    assert!(source_priority("rss") < source_priority("some-new-board"));
}

#[test]
fn test_duplicate_detection_scenario() {
    let rss = NormalizedJob {
        source: "rss".to_string(),
        company: "Acme Inc.".to_string(),
        title: "Senior Engineer (Remote)".to_string(),
        ..Default::default()
    };
    let greenhouse = NormalizedJob {
        source: "greenhouse".to_string(),
        company: "Acme".to_string(),
        title: "Senior Engineer".to_string(),
        ..Default::default()
    };

    assert!(is_duplicate(&rss, &greenhouse));
    assert!(is_duplicate(&greenhouse, &rss));
}

#[test]
fn test_backfill_only_when_preferred_missing() {
    let preferred = NormalizedJob {
        source: "greenhouse".to_string(),
        salary_max: Some(200_000),
        posted_date: "".to_string(),
        ..Default::default()
    };
    let other = NormalizedJob {
        source: "himalayas".to_string(),
        salary_min: Some(90_000),
        salary_max: Some(110_000),
        posted_date: "2024-03-02".to_string(),
        ..Default::default()
    };

    let merged = merge_jobs(preferred, other);

    assert_eq!(merged.salary_min, Some(90_000));
    assert_eq!(merged.salary_max, Some(200_000));
    assert_eq!(merged.posted_date, "2024-03-02");
    assert_eq!(merged.salary_currency, None);
}
