//! The building: floor count and the people waiting on each floor.

use lift_core::{Floor, LiftError, LiftResult};

use crate::Person;

/// Per-floor waiting lists, indexed by `Floor`.
#[derive(Debug, Clone)]
pub struct Building {
    waiting: Vec<Vec<Person>>,
}

impl Building {
    /// A building with floors `0..num_floors`, nobody waiting.
    pub fn new(num_floors: u32) -> Self {
        Self { waiting: vec![Vec::new(); num_floors as usize] }
    }

    pub fn num_floors(&self) -> u32 {
        self.waiting.len() as u32
    }

    /// Put `person` in the queue at their origin floor.
    ///
    /// # Errors
    ///
    /// `LiftError::FloorOutOfRange` if the origin is not in this building.
    pub fn add_waiting(&mut self, person: Person) -> LiftResult<()> {
        let num_floors = self.num_floors();
        match self.waiting.get_mut(person.origin.index()) {
            Some(list) => {
                list.push(person);
                Ok(())
            }
            None => Err(LiftError::FloorOutOfRange { floor: person.origin, num_floors }),
        }
    }

    /// People currently waiting on `floor` (empty for unknown floors).
    pub fn waiting_at(&self, floor: Floor) -> &[Person] {
        self.waiting.get(floor.index()).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Remove and return everyone waiting on `floor`.
    pub fn take_waiting(&mut self, floor: Floor) -> Vec<Person> {
        self.waiting
            .get_mut(floor.index())
            .map(std::mem::take)
            .unwrap_or_default()
    }

    /// Total number of people waiting across all floors.
    pub fn waiting_count(&self) -> usize {
        self.waiting.iter().map(Vec::len).sum()
    }

    /// Mutable iterator over every waiting person.
    pub fn waiting_mut(&mut self) -> impl Iterator<Item = &mut Person> {
        self.waiting.iter_mut().flatten()
    }
}
