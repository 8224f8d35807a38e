use anyhow::{anyhow, Result};
use benchmark_scorer::{compute_reachability_score, ScorerConfig};
use clap::Parser;
use log::*;
use simplelog::{Config, TermLogger, TerminalMode};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "benchmark_scorer",
    about = "Score reachability tests of the manipulation benchmark"
)]
struct Args {
    /// File containing the poses reached during the reachability test
    #[arg(long = "file_reachability_test")]
    reached_poses_file: PathBuf,

    /// Folder containing the grasping test results for one layout
    #[arg(long = "folder_grasping_test")]
    grasping_folder: Option<PathBuf>,

    /// JSON scorer config
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding the reference reachability scenes
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Config file first, then `--data-dir` on top of it.
fn scorer_config(args: &Args) -> Result<ScorerConfig> {
    let mut config = match &args.config {
        Some(path) => ScorerConfig::load(path)?,
        None => ScorerConfig::default(),
    };
    if let Some(data_dir) = &args.data_dir {
        config.data_dir = data_dir.clone();
    }
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    TermLogger::init(
        log_level(args.verbose),
        Config::default(),
        TerminalMode::Stderr,
    )
    .map_err(|error| anyhow!("Failed to initialise logger: {:?}", error))?;

    let config = scorer_config(&args)?;
    let report = compute_reachability_score(&args.reached_poses_file, &config)?;

    if let Some(folder) = &args.grasping_folder {
        warn!(
            "Grasping test results in {} are not scored yet",
            folder.display()
        );
    }

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report);
    }
    Ok(())
}
