//! Top-level simulation configuration.

use crate::{Floor, LiftError, LiftResult, Tick};

/// Building and run parameters for one simulation.
///
/// Typically built in code or loaded from a JSON file by the application
/// crate (enable the `serde` feature).  Missing JSON fields fall back to
/// [`SimConfig::default`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Number of floors; valid floors are `0..num_floors`.
    pub num_floors: u32,

    /// Number of elevator cars.
    pub car_count: usize,

    /// Total ticks to simulate.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Probability that a new person appears in any given tick (random
    /// spawner only).
    pub spawn_probability: f64,

    /// Ticks a car needs to travel one floor.
    pub ticks_per_floor: u64,

    /// Write a telemetry summary every N ticks.  1 = every tick.
    pub output_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_floors:            10,
            car_count:             2,
            total_ticks:           1_000,
            seed:                  42,
            spawn_probability:     0.2,
            ticks_per_floor:       1,
            output_interval_ticks: 1,
        }
    }
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// `true` if `floor` exists in this building.
    #[inline]
    pub fn contains(&self, floor: Floor) -> bool {
        floor.0 < self.num_floors
    }

    /// Return `Ok(floor)` if it exists in this building.
    pub fn check_floor(&self, floor: Floor) -> LiftResult<Floor> {
        if self.contains(floor) {
            Ok(floor)
        } else {
            Err(LiftError::FloorOutOfRange { floor, num_floors: self.num_floors })
        }
    }

    /// Check that a trip from `origin` to `destination` fits the building
    /// and actually goes somewhere.
    pub fn check_trip(&self, origin: Floor, destination: Floor) -> LiftResult<()> {
        self.check_floor(origin)?;
        self.check_floor(destination)?;
        if origin == destination {
            return Err(LiftError::SameFloorTrip { floor: origin });
        }
        Ok(())
    }

    /// Reject configurations the simulation cannot run.
    pub fn validate(&self) -> LiftResult<()> {
        if self.num_floors < 2 {
            return Err(LiftError::Config(format!(
                "num_floors must be at least 2, got {}",
                self.num_floors
            )));
        }
        if self.car_count == 0 {
            return Err(LiftError::Config("car_count must be at least 1".into()));
        }
        if !(0.0..=1.0).contains(&self.spawn_probability) {
            return Err(LiftError::Config(format!(
                "spawn_probability must be within [0, 1], got {}",
                self.spawn_probability
            )));
        }
        if self.ticks_per_floor == 0 {
            return Err(LiftError::Config("ticks_per_floor must be at least 1".into()));
        }
        Ok(())
    }
}
