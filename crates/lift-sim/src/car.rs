//! Elevator cars and their motion.
//!
//! Cars use a **teleport-at-arrival** model: a departing car is logically
//! between floors until its arrival tick, then appears at rest on the target
//! floor.  [`Car::position`] interpolates a fractional floor for rendering.

use lift_core::{CarId, Floor, Tick};
use lift_dispatch::CarView;

use crate::Person;

/// Whether a car is stopped or travelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// Stopped at a floor; eligible for a dispatch decision.
    AtRest(Floor),

    /// Travelling from `from` to `to`, arriving at `arrival`.
    Moving {
        from:     Floor,
        to:       Floor,
        departed: Tick,
        arrival:  Tick,
    },
}

/// One elevator car.
#[derive(Debug, Clone)]
pub struct Car {
    pub id: CarId,

    pub motion: Motion,

    /// Riders in boarding order.
    pub passengers: Vec<Person>,

    /// The most recently committed target.  Kept after arrival so telemetry
    /// can report where the car was last sent.
    destination: Option<Floor>,
}

impl Car {
    /// A car at rest on `floor` with nobody aboard.
    pub fn new(id: CarId, floor: Floor) -> Self {
        Self {
            id,
            motion:      Motion::AtRest(floor),
            passengers:  Vec::new(),
            destination: None,
        }
    }

    /// The floor the car is stopped at, or `None` while moving.
    #[inline]
    pub fn at_floor(&self) -> Option<Floor> {
        match self.motion {
            Motion::AtRest(floor) => Some(floor),
            Motion::Moving { .. } => None,
        }
    }

    /// The last committed destination, if any.
    #[inline]
    pub fn destination_floor(&self) -> Option<Floor> {
        self.destination
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        matches!(self.motion, Motion::Moving { .. })
    }

    /// Fraction of the current trip completed at `now`, in `[0.0, 1.0]`.
    ///
    /// Returns `1.0` for a car at rest.
    pub fn progress(&self, now: Tick) -> f32 {
        match self.motion {
            Motion::AtRest(_) => 1.0,
            Motion::Moving { departed, arrival, .. } => {
                if arrival <= departed {
                    return 1.0;
                }
                let elapsed = now.since(departed) as f32;
                let total   = (arrival - departed) as f32;
                (elapsed / total).min(1.0)
            }
        }
    }

    /// Vertical position in floors, fractional while moving.
    pub fn position(&self, now: Tick) -> f32 {
        match self.motion {
            Motion::AtRest(floor) => floor.0 as f32,
            Motion::Moving { from, to, .. } => {
                let (from, to) = (from.0 as f32, to.0 as f32);
                from + (to - from) * self.progress(now)
            }
        }
    }

    /// Start travelling towards the committed destination.
    ///
    /// Travel takes `ticks_per_floor` per floor crossed, and at least one
    /// tick.  Very long trips saturate at `u64::MAX` ticks.  Returns the arrival tick, or `None` if the car is already
    /// moving, has no destination, or is already there.
    pub fn begin_travel(&mut self, now: Tick, ticks_per_floor: u64) -> Option<Tick> {
        let Motion::AtRest(from) = self.motion else {
            return None;
        };
        let to = self.destination?;
        if to == from {
            return None;
        }
        let travel  = ticks_per_floor.saturating_mul(from.distance(to) as u64).max(1);
        let arrival = now + travel;
        self.motion = Motion::Moving { from, to, departed: now, arrival };
        Some(arrival)
    }

    /// Complete the trip if `now` has reached the arrival tick.
    ///
    /// Returns the floor the car stopped at.
    pub fn arrive_if_due(&mut self, now: Tick) -> Option<Floor> {
        match self.motion {
            Motion::Moving { to, arrival, .. } if arrival <= now => {
                self.motion = Motion::AtRest(to);
                Some(to)
            }
            _ => None,
        }
    }

    /// Remove and return every passenger whose destination is `floor`.
    pub fn unload(&mut self, floor: Floor) -> Vec<Person> {
        let (leaving, staying): (Vec<Person>, Vec<Person>) =
            std::mem::take(&mut self.passengers)
                .into_iter()
                .partition(|p| p.destination == floor);
        self.passengers = staying;
        leaving
    }
}

impl CarView for Car {
    type Passenger = Person;

    #[inline]
    fn resting_floor(&self) -> Option<Floor> {
        self.at_floor()
    }

    #[inline]
    fn passengers(&self) -> &[Person] {
        &self.passengers
    }

    fn commit(&mut self, floor: Floor) {
        self.destination = Some(floor);
    }
}
