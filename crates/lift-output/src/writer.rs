//! The `OutputWriter` trait implemented by backend writers.

use crate::{DispatchRow, OutputResult, TickSummaryRow};

/// Trait implemented by telemetry backends.
///
/// Errors are stored by [`SimOutputObserver`][crate::SimOutputObserver] and
/// retrieved with `take_error`, since observer hooks cannot fail.
pub trait OutputWriter {
    /// Write one dispatch decision.
    fn write_dispatch(&mut self, row: &DispatchRow) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
