//! CSV arrival loader.
//!
//! # CSV format
//!
//! One row per person.  Rows need not be sorted.
//!
//! ```csv
//! tick,origin,destination
//! 0,7,0
//! 0,3,9
//! 4,2,5
//! ```
//!
//! Rows whose origin equals their destination are rejected: such a person
//! would never need a car.  Floor ranges are checked later against the
//! building by `SimBuilder::build`.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use lift_core::{Floor, Tick};

use crate::SimError;
use crate::spawn::{Arrival, ScriptedSpawner};

#[derive(Deserialize)]
struct ArrivalRecord {
    tick:        u64,
    origin:      u32,
    destination: u32,
}

/// Load a [`ScriptedSpawner`] from a CSV file.
pub fn load_arrivals_csv(path: &Path) -> Result<ScriptedSpawner, SimError> {
    let file = std::fs::File::open(path).map_err(SimError::Io)?;
    load_arrivals_reader(file)
}

/// Like [`load_arrivals_csv`] but accepts any `Read` source.
pub fn load_arrivals_reader<R: Read>(reader: R) -> Result<ScriptedSpawner, SimError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut spawner = ScriptedSpawner::new();

    for (line, result) in csv_reader.deserialize::<ArrivalRecord>().enumerate() {
        let row = result.map_err(|e| SimError::Parse(e.to_string()))?;
        if row.origin == row.destination {
            return Err(SimError::Parse(format!(
                "row {}: origin and destination are both floor {}",
                line + 1,
                row.origin
            )));
        }
        spawner.push(
            Tick(row.tick),
            Arrival::new(Floor(row.origin), Floor(row.destination)),
        );
    }

    Ok(spawner)
}
