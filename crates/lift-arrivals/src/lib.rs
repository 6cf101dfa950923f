//! `lift-arrivals` — who shows up, where, and where they want to go.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`person`]    | `Person` — one passenger and their two wait counters          |
//! | [`sampler`]   | `WeightedTable`, `exponential_countdown`                      |
//! | [`process`]   | `ArrivalProcess` trait, `Arrivals` batch                      |
//! | [`generator`] | `PersonGenerator` — stochastic, lobby-heavy arrivals          |
//! | [`scripted`]  | `ScriptedArrivals` — fixed arrivals for tests and replays     |
//! | [`error`]     | `ArrivalError`, `ArrivalResult<T>`                            |
//!
//! # Traffic model
//!
//! Every floor runs its own countdown to the next batch of arrivals, drawn
//! from an exponential distribution with rate `1 / (f² + 1)`: the lobby sees
//! a batch roughly every tick, floor 10 roughly every hundred.  Destinations
//! are drawn with the same `1 / (d² + 1)` weighting, so most trips end near
//! the lobby.

pub mod error;
pub mod generator;
pub mod person;
pub mod process;
pub mod sampler;
pub mod scripted;

#[cfg(test)]
mod tests;

pub use error::{ArrivalError, ArrivalResult};
pub use generator::{PersonGenerator, floor_weight};
pub use person::Person;
pub use process::{Arrivals, ArrivalProcess};
pub use sampler::{WeightedTable, exponential_countdown};
pub use scripted::ScriptedArrivals;
