//! path_run CLI
//!
//! Decoded replay trace → hero path JSON
//!
//! Usage:
//!   path_run <replay.jsonl> <player_id> <output.json> [--config sampler.yaml] [--verbose]
//!
//! `RUST_LOG` overrides the log filter.

use anyhow::{Context, Result};
use clap::Parser;
use path_core::{extract_path, format_game_time, PathSummary, SamplerConfig, TraceSource};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "path_run")]
#[command(about = "Extract one hero's path and economy from a decoded replay", long_about = None)]
struct Cli {
    /// Decoded replay event trace (JSON Lines)
    replay: PathBuf,

    /// m_iPlayerID of the hero to track (0,2,..,8 Radiant; 10,12,..,18 Dire)
    #[arg(allow_negative_numbers = true)]
    player_id: i64,

    /// Output JSON file path
    output: PathBuf,

    /// Sampler settings (JSON or YAML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "debug" } else { "info" }));
    FmtSubscriber::builder().with_env_filter(filter).with_target(false).compact().init();

    let count = run(&cli)?;
    println!("{}", summary_line(count, &cli.output));
    Ok(())
}

/// Extract, write and log; returns the number of samples written
fn run(cli: &Cli) -> Result<usize> {
    let config = match &cli.config {
        Some(path) => SamplerConfig::load(path)
            .with_context(|| format!("Failed to load sampler config: {}", path.display()))?,
        None => SamplerConfig::default(),
    };

    let mut source = TraceSource::open(&cli.replay)
        .with_context(|| format!("Failed to open replay: {}", cli.replay.display()))?;
    let samples = extract_path(&mut source, cli.player_id, config)
        .with_context(|| format!("Failed to process replay: {}", cli.replay.display()))?;

    samples.write_to(&cli.output)?;

    let summary = PathSummary::from_samples(samples.as_slice());
    info!(
        samples = summary.sample_count,
        until = %format_game_time(summary.duration_secs),
        distance = summary.distance,
        last_hits = summary.last_hits,
        creep_gold = summary.creep_gold,
        neutral_gold = summary.neutral_gold,
        hero_kill_gold = summary.hero_kill_gold,
        "path summary"
    );

    Ok(samples.len())
}

fn summary_line(count: usize, output: &Path) -> String {
    format!("Saved {} samples to {}", count, output.display())
}
