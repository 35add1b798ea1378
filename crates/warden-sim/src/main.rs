//! `warden-sim`: run a guard preset through the demo scene and print what
//! happens each tick.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use warden_agents::presets::Preset;
use warden_agents::BehaviorTuning;
use warden_sim::{SimConfig, Simulation};

#[derive(Parser)]
#[command(name = "warden-sim")]
#[command(about = "Run a behavior tree preset through a small headless scene", version)]
struct Cli {
    /// Preset driving the guard: grunt, sentry, coward or berserker
    #[arg(short, long, default_value = "grunt")]
    preset: Preset,

    /// Number of ticks to simulate
    #[arg(short, long, default_value_t = 300)]
    ticks: u64,

    /// Seconds per tick
    #[arg(long, default_value_t = 0.1)]
    dt: f32,

    /// Tuning file (.yaml/.yml or .json)
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Print one JSON object per tick instead of text
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if !(cli.dt.is_finite() && cli.dt > 0.0) {
        bail!("--dt must be a positive number of seconds, got {}", cli.dt);
    }

    let tuning = match &cli.tuning {
        Some(path) => BehaviorTuning::load(path)
            .with_context(|| format!("loading tuning from {}", path.display()))?,
        None => BehaviorTuning::default(),
    };

    let config = SimConfig {
        preset: cli.preset,
        ticks: cli.ticks,
        dt: cli.dt,
        tuning,
    };

    let mut sim = Simulation::new(&config);
    for _ in 0..config.ticks {
        let record = sim.step();
        if cli.json {
            println!("{}", serde_json::to_string(&record)?);
        } else {
            println!("{record}");
        }
    }

    tracing::info!(ticks = sim.tree().tick_count(), "simulation finished");
    Ok(())
}
