//! The `Elevator` state machine.

use std::fmt;

use log::trace;

use lift_core::{Floor, LiftError, LiftResult};

use crate::RequestQueue;

/// What the car does during one tick.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    MoveUp,
    MoveDown,
    OpenDoors,
}

impl Action {
    /// Signed floor change caused by this action.
    #[inline]
    pub fn delta(self) -> i32 {
        match self {
            Action::MoveUp    => 1,
            Action::MoveDown  => -1,
            Action::OpenDoors => 0,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::MoveUp    => "up",
            Action::MoveDown  => "down",
            Action::OpenDoors => "open",
        };
        f.write_str(s)
    }
}

/// A single car serving floors `0..floors`.
///
/// [`decide_action`][Self::decide_action] is the only method that moves the
/// car; [`register_requests`][Self::register_requests] is the only one that
/// adds work.
#[derive(Debug, Clone)]
pub struct Elevator {
    floors:  u32,
    current: Floor,
    queue:   RequestQueue,
}

impl Elevator {
    /// A car parked at `start` with an empty queue.
    pub fn new(floors: u32, start: Floor) -> LiftResult<Self> {
        if floors < 2 {
            return Err(LiftError::InvalidConfig(format!(
                "an elevator needs at least 2 floors, got {floors}"
            )));
        }
        if start.0 >= floors {
            return Err(LiftError::FloorOutOfRange { floor: start, floors });
        }
        Ok(Self { floors, current: start, queue: RequestQueue::new() })
    }

    #[inline]
    pub fn current_floor(&self) -> Floor {
        self.current
    }

    #[inline]
    pub fn floors(&self) -> u32 {
        self.floors
    }

    /// Pending requests, oldest first.
    #[inline]
    pub fn queue(&self) -> &RequestQueue {
        &self.queue
    }

    /// Queue every floor in `floors` that is not already pending.
    ///
    /// All floors are range-checked before any is queued, so a bad floor
    /// leaves the queue untouched.  Returns the number newly queued.
    pub fn register_requests<I>(&mut self, floors: I) -> LiftResult<usize>
    where
        I: IntoIterator<Item = Floor>,
    {
        let floors: Vec<Floor> = floors.into_iter().collect();
        if let Some(&bad) = floors.iter().find(|f| f.0 >= self.floors) {
            return Err(LiftError::FloorOutOfRange { floor: bad, floors: self.floors });
        }
        Ok(self.queue.extend(floors))
    }

    /// Choose this tick's action, apply its floor change, and return it.
    pub fn decide_action(&mut self) -> Action {
        let action = match self.queue.head() {
            None => self.toward_middle(),
            // A pending request at the current floor is served before the
            // car keeps heading for the oldest one.
            Some(_) if self.queue.contains(self.current) => {
                self.queue.remove(self.current);
                Action::OpenDoors
            }
            Some(head) if self.current < head => Action::MoveUp,
            Some(_) => Action::MoveDown,
        };

        let from = self.current;
        match self.current.offset(action.delta()) {
            Some(next) if next.0 < self.floors => self.current = next,
            _ => debug_assert!(false, "{action} from {from} leaves the building"),
        }
        trace!("{action}: {from} -> {} ({} pending)", self.current, self.queue.len());
        action
    }

    /// Idle rule: drift toward `floors / 2`, moving down on an exact tie.
    fn toward_middle(&self) -> Action {
        if 2 * u64::from(self.current.0) < u64::from(self.floors) {
            Action::MoveUp
        } else {
            Action::MoveDown
        }
    }
}
