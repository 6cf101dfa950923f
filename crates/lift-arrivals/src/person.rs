//! A single passenger.

use lift_core::{Floor, PersonId, Tick};

/// One passenger, from arrival on their origin floor until drop-off.
///
/// A `Person` is owned by exactly one per-floor pool at a time: the waiting
/// pool of `origin` until the doors open there, then the riding pool of
/// `desired_floor`.  Exactly one of the two counters advances per tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id:            PersonId,
    pub origin:        Floor,
    /// Never equal to `origin`.
    pub desired_floor: Floor,
    pub arrival_tick:  Tick,
    /// Ticks spent on a floor waiting for the car.
    pub floor_wait:    u64,
    /// Ticks spent inside the car.
    pub elevator_wait: u64,
}

impl Person {
    pub fn new(id: PersonId, origin: Floor, desired_floor: Floor, arrival_tick: Tick) -> Self {
        debug_assert_ne!(origin, desired_floor);
        Self {
            id,
            origin,
            desired_floor,
            arrival_tick,
            floor_wait: 0,
            elevator_wait: 0,
        }
    }

    /// Advance the counter matching where the person currently is.
    #[inline]
    pub fn wait(&mut self, riding: bool) {
        if riding {
            self.elevator_wait += 1;
        } else {
            self.floor_wait += 1;
        }
    }

    #[inline]
    pub fn total_wait(&self) -> u64 {
        self.floor_wait + self.elevator_wait
    }
}
