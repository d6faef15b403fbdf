//! `lift-dispatch` — the per-car dispatch decision.
//!
//! Once per tick the host asks every car at rest where it should go next.
//! This crate answers that question and nothing else: it owns no building,
//! no clock and no queue storage.  Everything it touches is passed in.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`order`]   | `ascending`, `descending`, `comparator` — stateless orderings |
//! | [`select`]  | `lowest` — minimum floor of a non-empty slice                 |
//! | [`view`]    | `CarView`, `Passenger`, `CallQueue` — host-side seams         |
//! | [`decide`]  | `decide`, `passenger_target`                                  |
//! | [`policy`]  | `DispatchPolicy` trait, `FifoDispatch`, `HoldDispatch`        |
//! | [`error`]   | `DispatchError`, `DispatchResult<T>`                          |
//!
//! # Decision rule
//!
//! ```text
//! car not at rest          → no decision
//! no passengers:
//!     queue empty          → no decision
//!     otherwise            → take the oldest call, commit it
//! passengers on board:
//!     lowest destination above the car → commit the highest destination
//!     otherwise                        → commit the lowest destination
//! ```
//!
//! The loaded rule always sends the car to an *extreme* of its passengers'
//! destinations, never to the one nearest its position.  Hosts relying on
//! this crate get exactly that routing.

pub mod decide;
pub mod error;
pub mod order;
pub mod policy;
pub mod select;
pub mod view;


pub use decide::{decide, passenger_target};
pub use error::{DispatchError, DispatchResult};
pub use order::{FloorOrdering, ascending, comparator, descending};
pub use policy::{DispatchPolicy, FifoDispatch, HoldDispatch};
pub use select::lowest;
pub use view::{CallQueue, CarView, Passenger};
