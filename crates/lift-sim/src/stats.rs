//! Append-only wait-time and position records.

use lift_arrivals::Person;
use lift_core::{Floor, PersonId, Tick};
use lift_dispatch::Action;

use crate::{SimError, SimResult};

/// Final record of one passenger, taken the tick they leave the car.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Departure {
    pub person:         PersonId,
    pub origin:         Floor,
    pub destination:    Floor,
    pub arrival_tick:   Tick,
    pub departure_tick: Tick,
    pub floor_wait:     u64,
    pub elevator_wait:  u64,
}

impl Departure {
    /// Close out `person`'s trip at tick `now`.
    pub fn new(person: &Person, now: Tick) -> Self {
        Self {
            person:         person.id,
            origin:         person.origin,
            destination:    person.desired_floor,
            arrival_tick:   person.arrival_tick,
            departure_tick: now,
            floor_wait:     person.floor_wait,
            elevator_wait:  person.elevator_wait,
        }
    }

    #[inline]
    pub fn total_wait(&self) -> u64 {
        self.floor_wait + self.elevator_wait
    }
}

/// Ticks spent on each kind of action.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ActionCounts {
    pub up:   u64,
    pub down: u64,
    pub open: u64,
}

impl ActionCounts {
    pub fn record(&mut self, action: Action) {
        match action {
            Action::MoveUp    => self.up += 1,
            Action::MoveDown  => self.down += 1,
            Action::OpenDoors => self.open += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.up + self.down + self.open
    }
}

/// Aggregate wait times over every recorded departure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaitSummary {
    pub samples:            usize,
    pub mean_floor_wait:    f64,
    pub mean_elevator_wait: f64,
    pub mean_total_wait:    f64,
    pub max_floor_wait:     u64,
    pub max_elevator_wait:  u64,
}

/// Accumulates per-passenger samples and the car's floor trace.
///
/// Everything is append-only: samples are written once, when a passenger is
/// dropped off, and read back only for reporting.
#[derive(Debug, Default, Clone)]
pub struct StatsCollector {
    floor_waits:    Vec<u64>,
    elevator_waits: Vec<u64>,
    departures:     Vec<Departure>,
    floors:         Vec<Floor>,
    actions:        ActionCounts,
}

impl StatsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_departure(&mut self, departure: Departure) {
        self.floor_waits.push(departure.floor_wait);
        self.elevator_waits.push(departure.elevator_wait);
        self.departures.push(departure);
    }

    /// Append the car's floor after one tick, and the action that got it there.
    pub fn record_floor(&mut self, floor: Floor, action: Action) {
        self.floors.push(floor);
        self.actions.record(action);
    }

    /// Ticks each departed passenger spent waiting on a floor, in departure order.
    pub fn floor_waits(&self) -> &[u64] {
        &self.floor_waits
    }

    /// Ticks each departed passenger spent riding, in departure order.
    pub fn elevator_waits(&self) -> &[u64] {
        &self.elevator_waits
    }

    pub fn departures(&self) -> &[Departure] {
        &self.departures
    }

    /// The car's floor at the end of every tick.
    pub fn floor_trace(&self) -> &[Floor] {
        &self.floors
    }

    pub fn action_counts(&self) -> ActionCounts {
        self.actions
    }

    /// Means and maxima over all departures.
    ///
    /// Returns [`SimError::EmptySampleSet`] if nobody has been dropped off.
    pub fn summarize(&self) -> SimResult<WaitSummary> {
        let n = self.departures.len();
        if n == 0 {
            return Err(SimError::EmptySampleSet);
        }
        let floor_sum: u64 = self.floor_waits.iter().sum();
        let ride_sum: u64 = self.elevator_waits.iter().sum();
        let n_f = n as f64;
        Ok(WaitSummary {
            samples:            n,
            mean_floor_wait:    floor_sum as f64 / n_f,
            mean_elevator_wait: ride_sum as f64 / n_f,
            mean_total_wait:    (floor_sum + ride_sum) as f64 / n_f,
            max_floor_wait:     self.floor_waits.iter().copied().max().unwrap_or(0),
            max_elevator_wait:  self.elevator_waits.iter().copied().max().unwrap_or(0),
        })
    }
}
