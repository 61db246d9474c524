//! The `OutputWriter` trait implemented by backend writers.

use crate::{EventRow, OutputResult, SnapshotRow};

/// Trait implemented by output backends (currently CSV).
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one snapshot row.
    fn write_snapshot(&mut self, row: &SnapshotRow) -> OutputResult<()>;

    /// Write one event row.
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
