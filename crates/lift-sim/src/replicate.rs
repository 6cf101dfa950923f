//! Independent replications of one configuration.
//!
//! A single run's mean wait depends heavily on the seed.  Replications repeat
//! the run with seeds derived from `config.seed`, so the whole batch is still
//! reproducible from one number.

use log::debug;

use lift_core::{SimConfig, SimRng};

use crate::{NoopObserver, Sim, SimResult, WaitSummary};

/// Run `count` stochastic simulations of `config`, one per derived seed.
///
/// Results are returned in replication order.  With the `parallel` feature
/// the runs execute on Rayon's thread pool; the results are identical either
/// way, since each run owns its own RNG.
pub fn run_replications(config: &SimConfig, count: usize) -> Vec<SimResult<WaitSummary>> {
    let mut root = SimRng::new(config.seed);
    let seeds: Vec<u64> = (0..count as u64)
        .map(|i| root.child(i).random::<u64>())
        .collect();

    #[cfg(not(feature = "parallel"))]
    {
        seeds.iter().map(|&seed| run_one(config, seed)).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        seeds.par_iter().map(|&seed| run_one(config, seed)).collect()
    }
}

fn run_one(config: &SimConfig, seed: u64) -> SimResult<WaitSummary> {
    let mut sim = Sim::stochastic(SimConfig { seed, ..config.clone() })?;
    sim.run(&mut NoopObserver)?;
    let summary = sim.summarize();
    if let Ok(s) = &summary {
        debug!("replication seed {seed}: mean total wait {:.3} over {} people", s.mean_total_wait, s.samples);
    }
    summary
}
