//! The `Sim` struct and its tick loop.

use std::collections::VecDeque;

use log::{debug, info, trace, warn};

use lift_core::{Floor, PersonId, SimConfig, SimRng, Tick};
use lift_dispatch::DispatchPolicy;

use crate::{Arrival, Building, Car, Person, SimObserver, SimResult, Spawner, TickStats};

// ── SimStats ──────────────────────────────────────────────────────────────────

/// Cumulative counters over the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimStats {
    pub spawned:    u64,
    pub delivered:  u64,
    pub dispatches: u64,

    /// Decisions abandoned because the host data broke a dispatch
    /// precondition.
    pub skipped_decisions: u64,

    /// Sum of `wait_ticks_outside` over delivered people.
    pub delivered_wait_outside: u64,

    /// Sum of `wait_ticks_inside` over delivered people.
    pub delivered_wait_inside: u64,
}

impl SimStats {
    /// Mean ticks a delivered person waited on their floor.
    pub fn mean_wait_outside(&self) -> f64 {
        if self.delivered == 0 {
            return 0.0;
        }
        self.delivered_wait_outside as f64 / self.delivered as f64
    }

    /// Mean ticks a delivered person spent inside a car.
    pub fn mean_wait_inside(&self) -> f64 {
        if self.delivered == 0 {
            return 0.0;
        }
        self.delivered_wait_inside as f64 / self.delivered as f64
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The host simulation.
///
/// `Sim<P, S>` owns the building, the cars and the shared request queue and
/// drives the four-phase tick loop described in the crate docs.  The
/// dispatch policy `P` only ever sees one car and the queue at a time.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: DispatchPolicy, S: Spawner> {
    pub config: SimConfig,

    /// The current tick, advanced after each processed tick.
    pub clock: Tick,

    pub building: Building,

    /// Cars indexed by `CarId`.  Served in this order every tick.
    pub cars: Vec<Car>,

    /// Shared FIFO of pending call floors, one entry per waiting person.
    pub requests: VecDeque<Floor>,

    pub policy: P,

    pub spawner: S,

    pub rng: SimRng,

    pub stats: SimStats,

    pub(crate) next_person: u32,
}

impl<P: DispatchPolicy, S: Spawner> Sim<P, S> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        info!(
            "running {} car(s) in a {}-floor building until {}",
            self.cars.len(),
            self.building.num_floors(),
            self.config.end_tick()
        );
        while self.clock < self.config.end_tick() {
            self.step(observer)?;
        }
        observer.on_sim_end(self.clock);
        info!(
            "finished at {}: {} spawned, {} delivered, {} dispatches",
            self.clock, self.stats.spawned, self.stats.delivered, self.stats.dispatches
        );
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Put a person in the building now, as if a spawner had produced them.
    ///
    /// Adds them to their floor's waiting list and appends one call for
    /// their origin to the request queue.
    pub fn admit(&mut self, arrival: Arrival) -> SimResult<PersonId> {
        self.config.check_trip(arrival.origin, arrival.destination)?;

        let id = PersonId(self.next_person);
        let person = Person::new(id, arrival.origin, arrival.destination, self.clock);
        self.building.add_waiting(person)?;
        self.requests.push_back(arrival.origin);
        self.next_person += 1;
        self.stats.spawned += 1;

        trace!("{id} waiting at {} for {}", arrival.origin, arrival.destination);
        Ok(id)
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock;
        observer.on_tick_start(now);
        let stats = self.process_tick(now, observer)?;
        observer.on_tick_end(&stats);
        self.clock = now.next();
        Ok(())
    }

    fn process_tick<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> SimResult<TickStats> {
        // ── Phase 0: arrivals ─────────────────────────────────────────────
        for car in &mut self.cars {
            if let Some(floor) = car.arrive_if_due(now) {
                debug!("{} arrived at {floor} at {now}", car.id);
                observer.on_arrival(now, car.id, floor);
            }
        }

        // ── Phase 1: spawn ────────────────────────────────────────────────
        let arrivals = self.spawner.spawn(now, self.building.num_floors(), &mut self.rng);
        for arrival in arrivals {
            self.admit(arrival)?;
        }

        // ── Phase 2: service at-rest cars, in CarId order ─────────────────
        //
        // Each car unloads, boards, then decides.  The queue is shared, so
        // a car served earlier in the tick sees older calls first.
        let mut delivered  = 0;
        let mut dispatches = 0;

        for car in &mut self.cars {
            let Some(floor) = car.at_floor() else {
                continue;
            };

            for person in car.unload(floor) {
                debug!("{} delivered {} to {floor}", car.id, person.id);
                self.stats.delivered              += 1;
                self.stats.delivered_wait_outside += person.wait_ticks_outside;
                self.stats.delivered_wait_inside  += person.wait_ticks_inside;
                delivered += 1;
                observer.on_delivered(now, car.id, &person);
            }

            let boarding = self.building.take_waiting(floor);
            for _ in &boarding {
                // One call per boarder; another car may already have taken it.
                if let Some(pos) = self.requests.iter().position(|&f| f == floor) {
                    self.requests.remove(pos);
                }
            }
            car.passengers.extend(boarding);

            match self.policy.dispatch(car, &mut self.requests) {
                Ok(Some(target)) if target == floor => {
                    // Already there: nothing to report, nowhere to go.
                    trace!("{} committed its own floor {floor}", car.id);
                }
                Ok(Some(target)) => {
                    observer.on_dispatch(now, car, target);
                    car.begin_travel(now, self.config.ticks_per_floor);
                    self.stats.dispatches += 1;
                    dispatches += 1;
                }
                Ok(None) => {}
                Err(e) => {
                    warn!("{} at {floor}: decision skipped: {e}", car.id);
                    self.stats.skipped_decisions += 1;
                }
            }
        }

        // ── Phase 3: wait counters ────────────────────────────────────────
        for person in self.building.waiting_mut() {
            person.wait_ticks_outside += 1;
        }
        let mut riding = 0;
        for car in &mut self.cars {
            riding += car.passengers.len();
            for person in &mut car.passengers {
                person.wait_ticks_inside += 1;
            }
        }

        Ok(TickStats {
            tick:          now,
            waiting:       self.building.waiting_count(),
            riding,
            delivered,
            pending_calls: self.requests.len(),
            dispatches,
        })
    }
}
