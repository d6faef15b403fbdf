//! Simulation observer trait for progress reporting and data collection.

use lift_core::{CarId, Floor, Tick};

use crate::{Car, Person};

/// Counts describing the state at the end of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickStats {
    pub tick: Tick,

    /// People waiting on floors.
    pub waiting: usize,

    /// People inside cars.
    pub riding: usize,

    /// People who reached their destination this tick.
    pub delivered: usize,

    /// Calls still in the request queue.
    pub pending_calls: usize,

    /// Decisions committed this tick.
    pub dispatches: usize,
}

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, stats: &TickStats) {
///         if stats.tick.0 % self.interval == 0 {
///             println!("{}: {} waiting", stats.tick, stats.waiting);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called when a car stops at the end of a trip.
    fn on_arrival(&mut self, _tick: Tick, _car: CarId, _floor: Floor) {}

    /// Called after a car has committed `target`, before it departs.
    ///
    /// `car` is still at rest on its current floor with its passengers
    /// aboard.  Not called when the committed target is the floor
    /// the car is already on.
    fn on_dispatch(&mut self, _tick: Tick, _car: &Car, _target: Floor) {}

    /// Called for each person leaving a car at their destination.
    fn on_delivered(&mut self, _tick: Tick, _car: CarId, _person: &Person) {}

    /// Called at the end of each tick.
    fn on_tick_end(&mut self, _stats: &TickStats) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
