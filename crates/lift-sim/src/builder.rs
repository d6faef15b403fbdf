//! Fluent builder for constructing a [`Sim`].

use std::collections::VecDeque;

use lift_core::{CarId, Floor, SimConfig, SimRng, Tick};
use lift_dispatch::DispatchPolicy;

use crate::{Building, Car, NoSpawner, Sim, SimError, SimResult, SimStats, Spawner};

/// Fluent builder for [`Sim<P, S>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — floors, cars, ticks, seed, …
/// - `P: DispatchPolicy` — usually [`lift_dispatch::FifoDispatch`]
///
/// # Optional inputs (have defaults)
///
/// | Method                | Default                         |
/// |-----------------------|---------------------------------|
/// | `.spawner(s)`         | `NoSpawner`                     |
/// | `.initial_floors(v)`  | Every car on the ground floor   |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, FifoDispatch)
///     .spawner(load_arrivals_csv(path)?)
///     .initial_floors(vec![Floor(0), Floor(5)])
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<P: DispatchPolicy, S: Spawner = NoSpawner> {
    config:         SimConfig,
    policy:         P,
    spawner:        S,
    initial_floors: Option<Vec<Floor>>,
}

impl<P: DispatchPolicy> SimBuilder<P, NoSpawner> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, policy: P) -> Self {
        Self {
            config,
            policy,
            spawner:        NoSpawner,
            initial_floors: None,
        }
    }
}

impl<P: DispatchPolicy, S: Spawner> SimBuilder<P, S> {
    /// Replace the source of new people.
    pub fn spawner<S2: Spawner>(self, spawner: S2) -> SimBuilder<P, S2> {
        SimBuilder {
            config:         self.config,
            policy:         self.policy,
            spawner,
            initial_floors: self.initial_floors,
        }
    }

    /// Starting floor for each car (must be length `car_count`).
    pub fn initial_floors(mut self, floors: Vec<Floor>) -> Self {
        self.initial_floors = Some(floors);
        self
    }

    /// Validate inputs, place the cars and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<P, S>> {
        self.config.validate()?;
        let car_count = self.config.car_count;

        let floors = match self.initial_floors {
            Some(f) => {
                if f.len() != car_count {
                    return Err(SimError::CarCountMismatch {
                        expected: car_count,
                        got:      f.len(),
                        what:     "initial floors",
                    });
                }
                for &floor in &f {
                    self.config.check_floor(floor)?;
                }
                f
            }
            None => vec![Floor::GROUND; car_count],
        };

        self.spawner.validate(&self.config)?;

        let cars: Vec<Car> = floors
            .into_iter()
            .enumerate()
            .map(|(i, floor)| Car::new(CarId(i as u32), floor))
            .collect();

        Ok(Sim {
            building:    Building::new(self.config.num_floors),
            rng:         SimRng::new(self.config.seed),
            clock:       Tick::ZERO,
            config:      self.config,
            cars,
            requests:    VecDeque::new(),
            policy:      self.policy,
            spawner:     self.spawner,
            stats:       SimStats::default(),
            next_person: 0,
        })
    }
}
