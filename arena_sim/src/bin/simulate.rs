//! Headless ball simulation
//!
//! Usage:
//!   cargo run --bin simulate -- --seed 7 --duration 300
//!   RUST_LOG=ball_core=debug cargo run --bin simulate -- --config arena.toml

use std::path::PathBuf;

use anyhow::Context;
use arena_sim::{run_simulation, ArenaConfig};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Run a headless Pong ball simulation", long_about = None)]
struct Args {
    /// RNG seed for launch directions
    #[arg(long, default_value_t = 12345)]
    seed: u64,
    /// Simulated seconds before giving up on a winner
    #[arg(long, default_value_t = 600.0)]
    duration: f32,
    /// Frame time handed to the arena each step
    #[arg(long, default_value_t = 1.0 / 60.0)]
    frame_dt: f32,
    /// TOML arena config; defaults are used when omitted
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override the configured win score
    #[arg(long)]
    win_score: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ArenaConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => ArenaConfig::default(),
    };
    if let Some(win_score) = args.win_score {
        config.win_score = win_score;
        config.validate().context("invalid --win-score")?;
    }

    tracing::info!(seed = args.seed, duration = args.duration, "Starting simulation");
    let report = run_simulation(config, args.seed, args.duration, args.frame_dt)
        .context("simulation failed")?;

    match report.winner {
        Some(side) => println!("winner: {side:?}"),
        None => println!("no winner after {:.1}s", report.elapsed),
    }
    println!(
        "score {}-{} in {:.1}s | launches {} | paddle hits {} | bounces {}",
        report.score.left,
        report.score.right,
        report.elapsed,
        report.stats.launches,
        report.stats.paddle_hits,
        report.stats.bounces,
    );
    Ok(())
}
