//! FaceFeat Command Line
//!
//! Reads one face (landmarks, optional confidences and image size) as JSON,
//! runs the analysis pipeline and writes the result as JSON.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use face_analyzer::{AnalyzerConfig, FaceInput, FeatureAnalyzer};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Classify eye shape, nose width and lip fullness from facial landmarks.
///
/// Environment variables prefixed with FACEFEAT_ override configuration values,
/// e.g. FACEFEAT_QUALITY__MAX_ROTATION_DEGREES=20.
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "facefeat")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Input JSON file with landmarks, `-` for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// Threshold configuration (TOML, JSON or YAML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Run the analysis stages concurrently
    #[arg(long)]
    pub parallel: bool,

    /// Debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Structured JSON logs on stderr
    #[arg(long)]
    pub json_logs: bool,
}

impl Args {
    fn reads_stdin(&self) -> bool {
        self.input == Path::new("-")
    }
}

/// Initialize logging to stderr
pub fn init_logging(verbose: bool, json: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(io::stderr);

    let installed = if json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };
    installed.context("Failed to set tracing subscriber")
}

/// Read the input, analyze it and render the result as JSON
pub fn run(args: &Args) -> Result<String> {
    let config = AnalyzerConfig::load(args.config.as_deref()).context("Invalid configuration")?;
    let analyzer = FeatureAnalyzer::new(config)?;

    let raw = if args.reads_stdin() {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read input from stdin")?;
        buf
    } else {
        fs::read_to_string(&args.input)
            .with_context(|| format!("Failed to read {}", args.input.display()))?
    };
    let input: FaceInput = serde_json::from_str(&raw).context("Failed to parse face input")?;

    let analysis = if args.parallel {
        analyzer.analyze_parallel(&input)?
    } else {
        analyzer.analyze(&input)?
    };

    if analysis.quality.is_acceptable {
        info!(summary = %analysis.summary.description, "Analysis complete");
    } else {
        warn!(warnings = ?analysis.quality.warnings, "Analysis complete with quality warnings");
    }

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&analysis)?
    } else {
        serde_json::to_string(&analysis)?
    };
    Ok(rendered)
}
