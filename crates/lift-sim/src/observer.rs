//! Simulation observer trait for progress reporting and data collection.

use lift_core::{Floor, Tick};
use lift_dispatch::Action;

use crate::Departure;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Observers see state; they cannot change it.
///
/// # Example — door counter
///
/// ```rust,ignore
/// struct DoorCounter(usize);
///
/// impl SimObserver for DoorCounter {
///     fn on_tick_end(&mut self, _tick: Tick, action: Action, _floor: Floor) {
///         if action == Action::OpenDoors {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before arrivals are generated.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per passenger dropped at their destination, during the
    /// tick's door phase.
    fn on_departure(&mut self, _departure: &Departure) {}

    /// Called at the end of each tick with the car's action and resulting floor.
    fn on_tick_end(&mut self, _tick: Tick, _action: Action, _floor: Floor) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
