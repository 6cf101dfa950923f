//! `ScriptedArrivals` — a fixed, replayable arrival schedule.

use std::collections::BTreeMap;

use lift_core::{Floor, LiftError, PersonId, SimRng, Tick};

use crate::{ArrivalProcess, ArrivalResult, Arrivals, Person};

/// Arrivals listed up front as `(tick, origin, destination)`.
///
/// Draws nothing from the RNG, which makes hand-computed scenarios exact.
/// Person IDs are assigned in tick order, then in insertion order within a
/// tick.
#[derive(Debug, Default, Clone)]
pub struct ScriptedArrivals {
    floors:   u32,
    schedule: BTreeMap<Tick, Vec<(Floor, Floor)>>,
    next_id:  PersonId,
}

impl ScriptedArrivals {
    pub fn new(floors: u32) -> Self {
        Self { floors, ..Self::default() }
    }

    /// Schedule one person to appear on `origin` at `tick`, bound for `desired`.
    pub fn push(&mut self, tick: Tick, origin: Floor, desired: Floor) -> ArrivalResult<()> {
        for floor in [origin, desired] {
            if floor.0 >= self.floors {
                return Err(LiftError::FloorOutOfRange { floor, floors: self.floors }.into());
            }
        }
        if origin == desired {
            return Err(LiftError::InvalidConfig(format!(
                "scripted arrival at {tick} wants to ride from {origin} to itself"
            ))
            .into());
        }
        self.schedule.entry(tick).or_default().push((origin, desired));
        Ok(())
    }

    /// Builder form of [`push`][Self::push].
    pub fn with(mut self, tick: Tick, origin: Floor, desired: Floor) -> ArrivalResult<Self> {
        self.push(tick, origin, desired)?;
        Ok(self)
    }

    /// Number of people still to arrive.
    pub fn pending(&self) -> usize {
        self.schedule.values().map(Vec::len).sum()
    }
}

impl ArrivalProcess for ScriptedArrivals {
    fn generate(&mut self, now: Tick, _rng: &mut SimRng) -> ArrivalResult<Arrivals> {
        let Some(batch) = self.schedule.remove(&now) else {
            return Ok(Arrivals::default());
        };

        let mut arrivals = Arrivals::default();
        for (origin, desired) in batch {
            arrivals.people.push(Person::new(self.next_id, origin, desired, now));
            arrivals.requests.push(origin);
            self.next_id = self.next_id.next();
        }
        arrivals.requests.sort_unstable();
        arrivals.requests.dedup();
        Ok(arrivals)
    }
}
