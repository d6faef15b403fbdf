//! Sources of new people.
//!
//! A [`Spawner`] is asked once per tick for the people who start waiting in
//! that tick.  Every arrival it yields must have `origin != destination`.

use std::collections::BTreeMap;

use lift_core::{Floor, LiftResult, SimConfig, SimRng, Tick};

/// A person about to appear: where they call from and where they go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arrival {
    pub origin:      Floor,
    pub destination: Floor,
}

impl Arrival {
    pub fn new(origin: Floor, destination: Floor) -> Self {
        Self { origin, destination }
    }
}

/// Produces the people who start waiting each tick.
pub trait Spawner {
    /// Arrivals for tick `now` in a building of `num_floors` floors.
    fn spawn(&mut self, now: Tick, num_floors: u32, rng: &mut SimRng) -> Vec<Arrival>;

    /// Check up front that every arrival this spawner can produce fits the
    /// building and has `origin != destination`.  Called once by [`SimBuilder::build`][crate::SimBuilder::build].
    fn validate(&self, _config: &SimConfig) -> LiftResult<()> {
        Ok(())
    }
}

// ── NoSpawner ─────────────────────────────────────────────────────────────────

/// Nobody ever arrives.  Tests seed the building directly instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSpawner;

impl Spawner for NoSpawner {
    fn spawn(&mut self, _now: Tick, _num_floors: u32, _rng: &mut SimRng) -> Vec<Arrival> {
        vec![]
    }
}

// ── RandomSpawner ─────────────────────────────────────────────────────────────

/// At most one arrival per tick, with probability `probability`.
///
/// Origin is uniform over all floors; destination is uniform over the
/// remaining floors, so it never equals the origin.
#[derive(Debug, Clone, Copy)]
pub struct RandomSpawner {
    pub probability: f64,
}

impl RandomSpawner {
    pub fn new(probability: f64) -> Self {
        Self { probability }
    }
}

impl Spawner for RandomSpawner {
    fn spawn(&mut self, _now: Tick, num_floors: u32, rng: &mut SimRng) -> Vec<Arrival> {
        if num_floors < 2 || !rng.gen_bool(self.probability) {
            return vec![];
        }
        let origin = rng.gen_range(0..num_floors);
        // Draw from the other num_floors - 1 floors, skipping the origin.
        let mut destination = rng.gen_range(0..num_floors - 1);
        if destination >= origin {
            destination += 1;
        }
        vec![Arrival::new(Floor(origin), Floor(destination))]
    }
}

// ── ScriptedSpawner ───────────────────────────────────────────────────────────

/// Replays a fixed list of arrivals, keyed by tick.
///
/// Usually loaded from CSV with [`load_arrivals_csv`][crate::load_arrivals_csv].
/// Arrivals scheduled for the same tick are spawned in insertion order.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSpawner {
    by_tick: BTreeMap<Tick, Vec<Arrival>>,
    total:   usize,
}

impl ScriptedSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `arrival` to appear at `tick`.
    ///
    /// Floors and `origin != destination` are checked by
    /// [`Spawner::validate`] when the sim is built.
    pub fn push(&mut self, tick: Tick, arrival: Arrival) {
        self.by_tick.entry(tick).or_default().push(arrival);
        self.total += 1;
    }

    /// Number of arrivals still to be spawned.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// The earliest tick with a pending arrival.
    pub fn next_tick(&self) -> Option<Tick> {
        self.by_tick.keys().next().copied()
    }
}

impl FromIterator<(Tick, Arrival)> for ScriptedSpawner {
    fn from_iter<I: IntoIterator<Item = (Tick, Arrival)>>(iter: I) -> Self {
        let mut spawner = Self::new();
        for (tick, arrival) in iter {
            spawner.push(tick, arrival);
        }
        spawner
    }
}

impl Spawner for ScriptedSpawner {
    fn spawn(&mut self, now: Tick, _num_floors: u32, _rng: &mut SimRng) -> Vec<Arrival> {
        match self.by_tick.remove(&now) {
            None => vec![],
            Some(arrivals) => {
                self.total -= arrivals.len();
                arrivals
            }
        }
    }

    fn validate(&self, config: &SimConfig) -> LiftResult<()> {
        for arrival in self.by_tick.values().flatten() {
            config.check_trip(arrival.origin, arrival.destination)?;
        }
        Ok(())
    }
}
