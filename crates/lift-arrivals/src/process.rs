//! The `ArrivalProcess` trait — the simulation's source of new passengers.

use lift_core::{Floor, SimRng, Tick};

use crate::{ArrivalResult, Person};

/// New passengers produced during one tick.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Arrivals {
    /// Origin floors that produced at least one passenger, ascending and
    /// distinct.  These become hall calls.
    pub requests: Vec<Floor>,
    /// The passengers themselves, each waiting on its `origin`.
    pub people:   Vec<Person>,
}

impl Arrivals {
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}

/// Pluggable arrival source.
///
/// The simulation calls [`generate`][Self::generate] exactly once per tick,
/// before the car decides its action.  Implementations draw all randomness
/// from the supplied [`SimRng`] so runs are reproducible from the seed.
pub trait ArrivalProcess {
    fn generate(&mut self, now: Tick, rng: &mut SimRng) -> ArrivalResult<Arrivals>;
}
