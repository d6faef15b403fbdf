//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `dispatches.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{DispatchRow, OutputResult, TickSummaryRow};

/// Writes telemetry to two CSV files.
pub struct CsvWriter {
    dispatches: Writer<File>,
    summaries:  Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut dispatches = Writer::from_path(dir.join("dispatches.csv"))?;
        dispatches.write_record(["tick", "car_id", "from_floor", "target_floor", "passengers"])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(["tick", "waiting", "riding", "delivered", "pending_calls"])?;

        Ok(Self {
            dispatches,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_dispatch(&mut self, row: &DispatchRow) -> OutputResult<()> {
        self.dispatches.write_record(&[
            row.tick.to_string(),
            row.car_id.to_string(),
            row.from_floor.to_string(),
            row.target_floor.to_string(),
            row.passengers.to_string(),
        ])?;
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.waiting.to_string(),
            row.riding.to_string(),
            row.delivered.to_string(),
            row.pending_calls.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.dispatches.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
