//! Run configuration.

use crate::{Floor, LiftError, LiftResult};

/// Top-level simulation configuration.
///
/// Typically built from command-line flags or loaded from a TOML file by the
/// application crate (with the `serde` feature), then passed to the
/// simulation builder, which calls [`validate`][Self::validate].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct SimConfig {
    /// Number of floors in the building.  Must be at least 2.
    pub floors: u32,

    /// Upper bound on people arriving at one floor in one tick.  Must be at
    /// least 1; each arrival batch is uniform in `1..=max_new_people`.
    pub max_new_people: u32,

    /// Total ticks to simulate.  Zero is valid and records nothing.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Floor the car is parked on at tick 0.
    pub start_floor: Floor,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            floors:         50,
            max_new_people: 3,
            total_ticks:    100,
            seed:           42,
            start_floor:    Floor(1),
        }
    }
}

impl SimConfig {
    /// Config for a building of `floors` floors; other fields keep their defaults.
    pub fn with_floors(floors: u32) -> Self {
        Self { floors, ..Self::default() }
    }

    /// Reject configurations the simulation cannot run.  Nothing is clamped.
    pub fn validate(&self) -> LiftResult<()> {
        if self.floors < 2 {
            return Err(LiftError::InvalidConfig(format!(
                "floors must be at least 2, got {}",
                self.floors
            )));
        }
        if self.max_new_people < 1 {
            return Err(LiftError::InvalidConfig(
                "max_new_people must be at least 1, got 0".into(),
            ));
        }
        self.check_floor(self.start_floor)
    }

    /// `Ok` if `floor` exists in this building.
    pub fn check_floor(&self, floor: Floor) -> LiftResult<()> {
        if floor.0 < self.floors {
            Ok(())
        } else {
            Err(LiftError::FloorOutOfRange { floor, floors: self.floors })
        }
    }

    /// Iterator over every floor, lobby first.
    pub fn all_floors(&self) -> impl Iterator<Item = Floor> + use<> {
        (0..self.floors).map(Floor)
    }
}
