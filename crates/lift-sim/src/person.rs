//! A simulated person.

use lift_core::{Floor, PersonId, Tick};
use lift_dispatch::Passenger;

/// Someone travelling from `origin` to `destination`.
///
/// `origin != destination` is checked when the person enters the building
/// ([`Sim::admit`][crate::Sim::admit]); the dispatch decision relies on it
/// without checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: PersonId,

    /// Floor where the person called a car.
    pub origin: Floor,

    /// Floor the person wants to reach.  Never changes.
    pub destination: Floor,

    /// Tick at which the person started waiting.
    pub spawned_at: Tick,

    /// Ticks spent waiting on a floor for a car.
    pub wait_ticks_outside: u64,

    /// Ticks spent riding inside a car.
    pub wait_ticks_inside: u64,
}

impl Person {
    pub fn new(id: PersonId, origin: Floor, destination: Floor, now: Tick) -> Self {
        Self {
            id,
            origin,
            destination,
            spawned_at:         now,
            wait_ticks_outside: 0,
            wait_ticks_inside:  0,
        }
    }

    /// `true` if going from `origin` to `destination` means travelling up.
    #[inline]
    pub fn going_up(&self) -> bool {
        self.destination.is_above(self.origin)
    }
}

impl Passenger for Person {
    #[inline]
    fn destination_floor(&self) -> Floor {
        self.destination
    }
}
