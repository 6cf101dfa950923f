//! `lift-sim` — tick loop orchestrator for the single-car elevator simulator.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Arrivals — ArrivalProcess::generate; new people join their floor's
//!                waiting pool; their floors become requests.
//!   ② Decide   — Elevator::decide_action moves the car (or not); the new
//!                floor is appended to the trace.
//!   ③ Doors    — on OpenDoors at floor f: riders bound for f leave and are
//!                recorded; everyone waiting on f boards and presses their
//!                destination.
//!   ④ Wait     — every remaining person advances exactly one counter:
//!                elevator_wait if riding, floor_wait if waiting.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs [`run_replications`] on Rayon's thread pool.      |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::SimConfig;
//! use lift_sim::{NoopObserver, Sim};
//!
//! let mut sim = Sim::stochastic(SimConfig::default())?;
//! sim.run(&mut NoopObserver)?;
//! let summary = sim.summarize()?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod replicate;
pub mod sim;
pub mod stats;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use replicate::run_replications;
pub use sim::Sim;
pub use stats::{ActionCounts, Departure, StatsCollector, WaitSummary};
