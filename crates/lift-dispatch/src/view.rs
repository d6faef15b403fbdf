//! Traits the host implements so the decision can read its state.
//!
//! The host owns cars, people and the request queue for their whole
//! lifetime.  The decision borrows them for one call and writes through
//! exactly two doors: [`CallQueue::take_oldest`] and [`CarView::commit`].

use std::collections::VecDeque;

use lift_core::Floor;

/// Anything riding in a car.  Only the destination matters to dispatch.
pub trait Passenger {
    fn destination_floor(&self) -> Floor;
}

/// A bare floor is its own destination.  Handy for hosts (and tests) that
/// track riders by destination only.
impl Passenger for Floor {
    #[inline]
    fn destination_floor(&self) -> Floor {
        *self
    }
}

/// The host's view of one car.
pub trait CarView {
    type Passenger: Passenger;

    /// The floor the car is stopped at, or `None` while it is moving.
    fn resting_floor(&self) -> Option<Floor>;

    /// Current riders, in boarding order.
    fn passengers(&self) -> &[Self::Passenger];

    /// Set the car's next destination.  Called at most once per decision.
    fn commit(&mut self, floor: Floor);
}

/// The shared, first-in-first-out queue of pending calls.
pub trait CallQueue {
    /// Remove and return the oldest pending call.
    fn take_oldest(&mut self) -> Option<Floor>;
}

impl CallQueue for VecDeque<Floor> {
    #[inline]
    fn take_oldest(&mut self) -> Option<Floor> {
        self.pop_front()
    }
}
