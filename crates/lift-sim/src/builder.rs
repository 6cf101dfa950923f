//! Fluent builder for constructing a [`Sim`].

use lift_arrivals::ArrivalProcess;
use lift_core::{SimConfig, SimRng, Tick};
use lift_dispatch::Elevator;

use crate::{Sim, SimResult, StatsCollector};

/// Fluent builder for [`Sim<A>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — floors, tick count, seed, start floor, …
/// - `A: ArrivalProcess` — where passengers come from (e.g.
///   [`lift_arrivals::PersonGenerator`] or [`lift_arrivals::ScriptedArrivals`])
///
/// # Optional inputs (have defaults)
///
/// | Method      | Default                         |
/// |-------------|---------------------------------|
/// | `.rng(r)`   | `SimRng::new(config.seed)`      |
///
/// # Example
///
/// ```rust,ignore
/// let arrivals = ScriptedArrivals::new(5).with(Tick(0), Floor(3), Floor(0))?;
/// let mut sim = SimBuilder::new(config, arrivals).build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<A: ArrivalProcess> {
    config:   SimConfig,
    arrivals: A,
    rng:      Option<SimRng>,
}

impl<A: ArrivalProcess> SimBuilder<A> {
    pub fn new(config: SimConfig, arrivals: A) -> Self {
        Self { config, arrivals, rng: None }
    }

    /// Supply the generator the run draws from.
    ///
    /// Use this when the arrival process already consumed draws from a
    /// generator seeded with `config.seed`, so the run continues that stream
    /// instead of restarting it.
    pub fn rng(mut self, rng: SimRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Validate the configuration, park the car, and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<A>> {
        self.config.validate()?;

        let elevator = Elevator::new(self.config.floors, self.config.start_floor)?;
        let floors = self.config.floors as usize;
        let rng = self.rng.unwrap_or_else(|| SimRng::new(self.config.seed));

        Ok(Sim {
            clock:    Tick::ZERO,
            config:   self.config,
            rng,
            elevator,
            arrivals: self.arrivals,
            waiting:  vec![Vec::new(); floors],
            riding:   vec![Vec::new(); floors],
            stats:    StatsCollector::new(),
        })
    }
}
