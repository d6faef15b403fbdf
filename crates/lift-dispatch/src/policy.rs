//! The `DispatchPolicy` trait — the seam the host loop calls through.

use lift_core::Floor;

use crate::{CallQueue, CarView, DispatchResult, decide};

/// Pluggable per-car dispatch.
///
/// The host calls [`dispatch`][Self::dispatch] once per at-rest car per tick,
/// sequentially, in a fixed car order.  Implementations must not keep state
/// between calls that changes the outcome: identical inputs yield identical
/// decisions.
pub trait DispatchPolicy {
    /// Decide (and commit) the next target for `car`, possibly taking one
    /// call from `queue`.  `Ok(None)` means "no decision this tick".
    fn dispatch<C, Q>(&self, car: &mut C, queue: &mut Q) -> DispatchResult<Option<Floor>>
    where
        C: CarView + ?Sized,
        Q: CallQueue + ?Sized;
}

/// The standard rule: idle cars fetch the oldest call, loaded cars head for
/// an extreme of their passengers' destinations.  See [`decide`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FifoDispatch;

impl DispatchPolicy for FifoDispatch {
    #[inline]
    fn dispatch<C, Q>(&self, car: &mut C, queue: &mut Q) -> DispatchResult<Option<Floor>>
    where
        C: CarView + ?Sized,
        Q: CallQueue + ?Sized,
    {
        decide(car, queue)
    }
}

/// A policy that never moves a car.
///
/// Useful in tests that exercise the host loop (spawning, boarding,
/// telemetry) without any cars travelling.
#[derive(Debug, Clone, Copy, Default)]
pub struct HoldDispatch;

impl DispatchPolicy for HoldDispatch {
    fn dispatch<C, Q>(&self, _car: &mut C, _queue: &mut Q) -> DispatchResult<Option<Floor>>
    where
        C: CarView + ?Sized,
        Q: CallQueue + ?Sized,
    {
        Ok(None)
    }
}
