//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use log::warn;

use lift_core::{Floor, SimConfig, Tick};
use lift_sim::{Car, SimObserver, TickStats};

use crate::row::{DispatchRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that records every dispatch and a periodic tick summary
/// to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:          W,
    output_interval: u64,
    last_error:      Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`, writing a summary every
    /// `config.output_interval_ticks` ticks (never, if that is 0).
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self {
            writer,
            output_interval: config.output_interval_ticks,
            last_error:      None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!("telemetry write failed: {e}");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_dispatch(&mut self, tick: Tick, car: &Car, target: Floor) {
        let row = DispatchRow {
            tick:         tick.0,
            car_id:       car.id.0,
            from_floor:   car.at_floor().unwrap_or(target).0,
            target_floor: target.0,
            passengers:   car.passengers.len() as u32,
        };
        let result = self.writer.write_dispatch(&row);
        self.store_err(result);
    }

    fn on_tick_end(&mut self, stats: &TickStats) {
        if self.output_interval == 0 || stats.tick.0 % self.output_interval != 0 {
            return;
        }
        let row = TickSummaryRow {
            tick:          stats.tick.0,
            waiting:       stats.waiting as u64,
            riding:        stats.riding as u64,
            delivered:     stats.delivered as u64,
            pending_calls: stats.pending_calls as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
