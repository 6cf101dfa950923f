//! `RequestQueue` — floors the car still has to visit.
//!
//! Hall calls and cab destinations share one queue.  Entries are kept in
//! insertion order (the head is the oldest pending request) and a companion
//! set answers membership in O(1), so re-registering an already queued floor
//! is a cheap no-op that never reorders existing entries.

use std::collections::VecDeque;

use lift_core::Floor;

#[cfg(not(feature = "fx-hash"))]
type FloorSet = std::collections::HashSet<Floor>;
#[cfg(feature = "fx-hash")]
type FloorSet = rustc_hash::FxHashSet<Floor>;

/// Insertion-ordered set of floors awaiting a door-open.
#[derive(Debug, Default, Clone)]
pub struct RequestQueue {
    order:  VecDeque<Floor>,
    queued: FloorSet,
}

impl RequestQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `floor` at the tail unless it is already queued.
    ///
    /// Returns `true` if the floor was newly added.
    pub fn push(&mut self, floor: Floor) -> bool {
        if !self.queued.insert(floor) {
            return false;
        }
        self.order.push_back(floor);
        true
    }

    /// Push every floor in `floors`, in iteration order.
    ///
    /// Returns the number of floors newly added.  Calling this twice with the
    /// same floors leaves the queue as if it were called once.
    pub fn extend<I>(&mut self, floors: I) -> usize
    where
        I: IntoIterator<Item = Floor>,
    {
        floors.into_iter().filter(|&f| self.push(f)).count()
    }

    /// Remove `floor` wherever it sits.  Returns `true` if it was queued.
    pub fn remove(&mut self, floor: Floor) -> bool {
        if !self.queued.remove(&floor) {
            return false;
        }
        if let Some(pos) = self.order.iter().position(|&f| f == floor) {
            self.order.remove(pos);
        }
        true
    }

    #[inline]
    pub fn contains(&self, floor: Floor) -> bool {
        self.queued.contains(&floor)
    }

    /// The oldest pending request.
    #[inline]
    pub fn head(&self) -> Option<Floor> {
        self.order.front().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Pending floors, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = Floor> + '_ {
        self.order.iter().copied()
    }
}
