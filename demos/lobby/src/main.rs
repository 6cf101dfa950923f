//! lobby — run one elevator simulation and report wait times.
//!
//! Flags override values from `--config`, which override the built-in
//! defaults (50 floors, 100 ticks, up to 3 people per batch, seed 42).
//!
//! ```text
//! lobby --floors 20 --iterations 2000 --histogram --csv-dir ./out
//! RUST_LOG=debug lobby --config lobby.toml --replications 16
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use lift_core::SimConfig;
use lift_output::{ConsoleSink, CsvSink, ReportSink, RunReport};
use lift_sim::{NoopObserver, Sim, WaitSummary, run_replications};

// ── CLI definition ────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "lobby",
    about = "Simulate a single elevator under random passenger arrivals"
)]
struct Cli {
    /// TOML file with any of: floors, max_new_people, total_ticks, seed, start_floor
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of floors in the building
    #[arg(long)]
    floors: Option<u32>,

    /// Number of ticks to simulate
    #[arg(long)]
    iterations: Option<u64>,

    /// Number of people that can arrive on one floor at the same time
    #[arg(long)]
    max_new_people: Option<u32>,

    /// RNG seed
    #[arg(long, env = "LOBBY_SEED")]
    seed: Option<u64>,

    /// Write wait_samples.csv and floor_trace.csv into this directory
    #[arg(long)]
    csv_dir: Option<PathBuf>,

    /// Print text histograms of both wait times
    #[arg(long)]
    histogram: bool,

    /// Histogram bin count
    #[arg(long, default_value_t = 10)]
    bins: usize,

    /// Also run this many independent replications and report their spread
    #[arg(long, default_value_t = 0)]
    replications: usize,
}

impl Cli {
    fn resolve_config(&self) -> Result<SimConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => SimConfig::default(),
        };
        if let Some(floors) = self.floors {
            config.floors = floors;
        }
        if let Some(ticks) = self.iterations {
            config.total_ticks = ticks;
        }
        if let Some(n) = self.max_new_people {
            config.max_new_people = n;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        config.validate()?;
        Ok(config)
    }
}

fn load_config(path: &Path) -> Result<SimConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    let mut sim = Sim::stochastic(config.clone())?;
    sim.run(&mut NoopObserver)?;

    let report = RunReport::from_stats(&sim.stats);
    let mut console = ConsoleSink::stdout();
    if cli.histogram {
        console = console.with_histograms(cli.bins);
    }
    console.report(&report)?;

    if let Some(dir) = &cli.csv_dir {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        CsvSink::new(dir)?.report(&report)?;
        info!("wrote wait samples and floor trace to {}", dir.display());
    }

    let left = sim.waiting_count() + sim.riding_count();
    if left > 0 {
        info!("{left} passengers were still in the building when the run ended");
    }

    if cli.replications > 0 {
        report_replications(&config, cli.replications);
    }
    Ok(())
}

fn report_replications(config: &SimConfig, count: usize) {
    let results = run_replications(config, count);
    let summaries: Vec<WaitSummary> = results
        .into_iter()
        .filter_map(|r| r.map_err(|e| warn!("replication skipped: {e}")).ok())
        .collect();
    if summaries.is_empty() {
        println!("\nNo replication delivered any passengers.");
        return;
    }

    let totals: Vec<f64> = summaries.iter().map(|s| s.mean_total_wait).collect();
    let mean = totals.iter().sum::<f64>() / totals.len() as f64;
    let min = totals.iter().copied().fold(f64::INFINITY, f64::min);
    let max = totals.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    println!();
    println!("Replications with data       : {} of {count}", summaries.len());
    println!("Mean total wait across runs  : {mean:.3} (min {min:.3}, max {max:.3})");
}
