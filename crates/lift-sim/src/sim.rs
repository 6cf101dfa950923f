//! The `Sim` struct and its tick loop.

use std::mem;

use log::{debug, info};

use lift_arrivals::{ArrivalProcess, Person, PersonGenerator};
use lift_core::{Floor, SimConfig, SimRng, Tick};
use lift_dispatch::{Action, Elevator};

use crate::{Departure, SimBuilder, SimObserver, SimResult, StatsCollector, WaitSummary};

/// The main simulation runner.
///
/// `Sim<A>` owns every piece of mutable state — the car, both per-floor
/// passenger pools, the RNG and the statistics — and drives the four-phase
/// tick loop described in the crate docs.  Each `Person` lives in exactly one
/// pool at a time: `waiting[origin]` until the doors open on their floor,
/// then `riding[desired_floor]` until the doors open there.
///
/// Create via [`SimBuilder`] or [`Sim::stochastic`].
pub struct Sim<A: ArrivalProcess> {
    /// Run configuration (floors, tick count, seed, …).
    pub config: SimConfig,

    /// The next tick to be processed.
    pub clock: Tick,

    /// The run's only source of randomness.
    pub rng: SimRng,

    pub elevator: Elevator,

    pub arrivals: A,

    /// People waiting on floor `i` for the car, in arrival order.
    pub waiting: Vec<Vec<Person>>,

    /// People in the car bound for floor `i`, in boarding order.
    pub riding: Vec<Vec<Person>>,

    pub stats: StatsCollector,
}

impl Sim<PersonGenerator> {
    /// A run with stochastic arrivals, seeded from `config.seed`.
    ///
    /// The generator's initial countdowns and the run share one RNG stream.
    pub fn stochastic(config: SimConfig) -> SimResult<Self> {
        config.validate()?;
        let mut rng = SimRng::new(config.seed);
        let generator = PersonGenerator::new(&config, &mut rng)?;
        SimBuilder::new(config, generator).rng(rng).build()
    }
}

impl<A: ArrivalProcess> Sim<A> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick until `config.total_ticks` have elapsed.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let end = Tick(self.config.total_ticks);
        info!(
            "simulating {} ticks in a {}-floor building (seed {})",
            end.since(self.clock),
            self.config.floors,
            self.config.seed
        );
        while self.clock < end {
            self.step(observer)?;
        }
        observer.on_sim_end(self.clock);
        info!(
            "finished at {}: {} delivered, {} waiting, {} riding",
            self.clock,
            self.stats.departures().len(),
            self.waiting_count(),
            self.riding_count()
        );
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `total_ticks`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Summary of all departures so far.
    pub fn summarize(&self) -> SimResult<WaitSummary> {
        self.stats.summarize()
    }

    /// People still waiting on a floor.
    pub fn waiting_count(&self) -> usize {
        self.waiting.iter().map(Vec::len).sum()
    }

    /// People still inside the car.
    pub fn riding_count(&self) -> usize {
        self.riding.iter().map(Vec::len).sum()
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Action> {
        let now = self.clock;
        observer.on_tick_start(now);

        // ── Phase 1: arrivals become hall calls ───────────────────────────
        //
        // Floors are checked before any pool or the queue is touched.
        let arrivals = self.arrivals.generate(now, &mut self.rng)?;
        for person in &arrivals.people {
            self.config.check_floor(person.origin)?;
            self.config.check_floor(person.desired_floor)?;
        }
        self.elevator.register_requests(arrivals.requests)?;
        for person in arrivals.people {
            self.waiting[person.origin.index()].push(person);
        }

        // ── Phase 2: the car decides and moves ────────────────────────────
        let action = self.elevator.decide_action();
        let floor = self.elevator.current_floor();
        self.stats.record_floor(floor, action);

        // ── Phase 3: doors ────────────────────────────────────────────────
        if action == Action::OpenDoors {
            self.open_doors(floor, now, observer)?;
        }

        // ── Phase 4: everyone still in the building waits one tick ────────
        for person in self.riding.iter_mut().flatten() {
            person.wait(true);
        }
        for person in self.waiting.iter_mut().flatten() {
            person.wait(false);
        }

        observer.on_tick_end(now, action, floor);
        self.clock = now + 1;
        Ok(action)
    }

    /// Drop off riders bound for `floor`, then board everyone waiting there.
    fn open_doors<O: SimObserver>(
        &mut self,
        floor:    Floor,
        now:      Tick,
        observer: &mut O,
    ) -> SimResult<()> {
        let leaving = mem::take(&mut self.riding[floor.index()]);
        for person in &leaving {
            let departure = Departure::new(person, now);
            observer.on_departure(&departure);
            self.stats.record_departure(departure);
        }

        let boarding = mem::take(&mut self.waiting[floor.index()]);
        let destinations: Vec<Floor> = boarding.iter().map(|p| p.desired_floor).collect();
        debug!(
            "{now}: doors open on {floor}, {} off, {} on",
            leaving.len(),
            boarding.len()
        );
        self.elevator.register_requests(destinations)?;
        for person in boarding {
            self.riding[person.desired_floor.index()].push(person);
        }
        Ok(())
    }
}
