//! `lift-core` — foundational types for the single-car elevator simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `Floor`, `PersonId`                                   |
//! | [`time`]        | `Tick`                                                |
//! | [`rng`]         | `SimRng` (seedable, explicitly threaded)              |
//! | [`config`]      | `SimConfig` and its validation                        |
//! | [`error`]       | `LiftError`, `LiftResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required to load `SimConfig` from a TOML file.             |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{LiftError, LiftResult};
pub use ids::{Floor, PersonId};
pub use rng::SimRng;
pub use time::Tick;
