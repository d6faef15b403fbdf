//! `lift-sim` — the host simulation around the dispatch decision.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Arrivals  — cars whose arrival tick has come stop at their target.
//!   ② Spawn     — new people join their floor's waiting list and the
//!                 request queue (one call per person).
//!   ③ Service   — for each car at rest, in ascending CarId order:
//!                   riders for this floor leave,
//!                   everyone waiting here boards (their calls are removed),
//!                   DispatchPolicy::dispatch commits the next target,
//!                   a target other than the current floor starts travel
//!                   (a target equal to it is not counted as a dispatch).
//!   ④ Waiting   — wait counters advance for everyone waiting or riding.
//! ```
//!
//! The request queue is shared by all cars.  Because cars are served one at
//! a time in a fixed order, an earlier car always sees older calls first.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`person`]    | `Person`                                                |
//! | [`car`]       | `Car`, `Motion`                                         |
//! | [`building`]  | `Building` — per-floor waiting lists                    |
//! | [`spawn`]     | `Spawner` trait, `NoSpawner`, `RandomSpawner`, `ScriptedSpawner` |
//! | [`loader`]    | `load_arrivals_csv`, `load_arrivals_reader`             |
//! | [`observer`]  | `SimObserver`, `NoopObserver`, `TickStats`              |
//! | [`builder`]   | `SimBuilder`                                            |
//! | [`sim`]       | `Sim`, `SimStats`                                       |
//! | [`error`]     | `SimError`, `SimResult<T>`                              |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::SimConfig;
//! use lift_dispatch::FifoDispatch;
//! use lift_sim::{NoopObserver, RandomSpawner, SimBuilder};
//!
//! let config = SimConfig::default();
//! let mut sim = SimBuilder::new(config.clone(), FifoDispatch)
//!     .spawner(RandomSpawner::new(config.spawn_probability))
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod building;
pub mod car;
pub mod error;
pub mod loader;
pub mod observer;
pub mod person;
pub mod sim;
pub mod spawn;


pub use builder::SimBuilder;
pub use building::Building;
pub use car::{Car, Motion};
pub use error::{SimError, SimResult};
pub use loader::{load_arrivals_csv, load_arrivals_reader};
pub use observer::{NoopObserver, SimObserver, TickStats};
pub use person::Person;
pub use sim::{Sim, SimStats};
pub use spawn::{Arrival, NoSpawner, RandomSpawner, ScriptedSpawner, Spawner};
