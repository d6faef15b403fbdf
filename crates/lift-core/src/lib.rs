//! `lift-core` — foundational types for the `rust_lift` building simulation.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                       |
//! |-------------|------------------------------------------------|
//! | [`floor`]   | `Floor`                                        |
//! | [`ids`]     | `CarId`, `PersonId`                            |
//! | [`time`]    | `Tick`                                         |
//! | [`rng`]     | `SimRng`                                       |
//! | [`config`]  | `SimConfig`                                    |
//! | [`error`]   | `LiftError`, `LiftResult`                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod floor;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{LiftError, LiftResult};
pub use floor::Floor;
pub use ids::{CarId, PersonId};
pub use rng::SimRng;
pub use time::Tick;
