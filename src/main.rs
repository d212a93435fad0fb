use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use validator::Validate;

use jobsift::codec::{read_jobs, write_jobs, write_stats};
use jobsift::config::{LoggingSettings, Settings};
use jobsift::core::{DuplicateResolver, Pipeline, RelevanceScorer};
use jobsift::error::PipelineError;
use jobsift::models::{DedupOptions, InterestProfile};

/// Score normalized job postings against an interest profile and merge
/// cross-source duplicates.
///
/// Reads a JSON array of records (stdin by default) and writes the result as a
/// JSON array (stdout by default).
#[derive(Parser)]
#[command(name = "jobsift", version, about)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Read records from this file instead of stdin.
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,

    /// Write records to this file instead of stdout.
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Print one JSON statistics line per stage on stderr.
    #[arg(long, global = true)]
    stats: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Filter and score records by keywords, seniority and work mode.
    Score(ProfileArgs),

    /// Merge records that describe the same posting.
    Dedup(DedupArgs),

    /// Score, then deduplicate.
    Pipeline {
        #[command(flatten)]
        profile: ProfileArgs,

        #[command(flatten)]
        dedup: DedupArgs,
    },
}

#[derive(Args, Debug)]
struct ProfileArgs {
    /// Comma-separated keywords to match (e.g. "product,design,UX").
    #[arg(long, value_delimiter = ',')]
    keywords: Option<Vec<String>>,

    /// Comma-separated keywords that exclude a record when found in its title.
    #[arg(long, value_delimiter = ',')]
    exclude_keywords: Option<Vec<String>>,

    /// Comma-separated seniority levels to keep (e.g. "senior,director").
    #[arg(long, value_delimiter = ',')]
    seniority: Option<Vec<String>>,

    /// Only keep remote positions.
    #[arg(long)]
    remote_only: bool,

    /// Minimum relevance score to keep (0-100).
    #[arg(long)]
    min_score: Option<f64>,
}

impl ProfileArgs {
    fn apply(self, mut profile: InterestProfile) -> InterestProfile {
        if let Some(keywords) = self.keywords {
            profile.keywords = keywords;
        }
        if let Some(exclude_keywords) = self.exclude_keywords {
            profile.exclude_keywords = exclude_keywords;
        }
        if let Some(seniority) = self.seniority {
            profile.seniority = seniority;
        }
        if let Some(min_score) = self.min_score {
            profile.min_score = min_score;
        }
        profile.remote_only |= self.remote_only;
        profile
    }
}

#[derive(Args, Debug)]
struct DedupArgs {
    /// Minimum company-name similarity (0-1).
    #[arg(long)]
    company_threshold: Option<f64>,

    /// Minimum title similarity (0-1).
    #[arg(long)]
    title_threshold: Option<f64>,
}

impl DedupArgs {
    fn apply(self, mut options: DedupOptions) -> DedupOptions {
        if let Some(threshold) = self.company_threshold {
            options.company_threshold = threshold;
        }
        if let Some(threshold) = self.title_threshold {
            options.title_threshold = threshold;
        }
        options
    }
}

fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let settings = match load_settings(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("jobsift: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&settings.logging);

    match run(cli, &settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Pipeline failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_settings(path: Option<&Path>) -> Result<Settings, PipelineError> {
    let settings = match path {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };
    Ok(settings)
}

/// Logs go to stderr; stdout carries the records.
fn init_tracing(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), logging.level))
    });

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    match logging.format.as_str() {
        "json" => subscriber.json().init(),
        "pretty" => subscriber.pretty().init(),
        _ => subscriber.compact().init(),
    }
}

fn build_scorer(args: ProfileArgs, settings: &Settings) -> Result<RelevanceScorer, PipelineError> {
    let profile = args.apply(settings.scoring.to_profile());
    profile.validate()?;

    info!(
        keywords = profile.keywords.len(),
        exclude_keywords = profile.exclude_keywords.len(),
        remote_only = profile.remote_only,
        min_score = profile.min_score,
        "Scorer initialized"
    );

    Ok(RelevanceScorer::new(profile))
}

fn build_resolver(args: DedupArgs, settings: &Settings) -> Result<DuplicateResolver, PipelineError> {
    let options = args.apply(settings.dedup.to_options());
    options.validate()?;

    info!("Resolver initialized with thresholds: {:?}", options);

    Ok(DuplicateResolver::new(options))
}

fn run(cli: Cli, settings: &Settings) -> Result<(), PipelineError> {
    // Options are validated before any input is read
    let pipeline = match cli.command {
        Command::Score(profile) => Pipeline::scoring(build_scorer(profile, settings)?),
        Command::Dedup(dedup) => Pipeline::dedup(build_resolver(dedup, settings)?),
        Command::Pipeline { profile, dedup } => Pipeline::new(
            Some(build_scorer(profile, settings)?),
            Some(build_resolver(dedup, settings)?),
        ),
    };

    let jobs = read_jobs(cli.input.as_deref())?;
    info!("Loaded {} job records", jobs.len());

    let outcome = pipeline.run(jobs);

    if cli.stats {
        write_stats(io::stderr().lock(), &outcome)?;
    }

    write_jobs(cli.output.as_deref(), &outcome.jobs)
}
