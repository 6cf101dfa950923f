//! `lift-dispatch` — the elevator's request queue and decision rule.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`queue`]    | `RequestQueue` — insertion-ordered, duplicate-free floors   |
//! | [`elevator`] | `Elevator`, `Action` — one decision per tick                |
//!
//! # Decision rule
//!
//! ```text
//! queue empty              → move toward the middle floor (down on a tie)
//! current floor is queued  → dequeue it, open doors
//! otherwise                → move one floor toward the oldest request
//! ```
//!
//! Targeting the oldest request instead of the nearest one bounds the
//! worst-case wait: two busy neighbouring floors cannot starve a distant
//! caller.  Floors passed on the way are still served, because the
//! "current floor is queued" check runs before navigation.

pub mod elevator;
pub mod queue;


pub use elevator::{Action, Elevator};
pub use queue::RequestQueue;
