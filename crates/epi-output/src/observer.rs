//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use epi_engine::{AggregateSnapshot, EpiEvent, SimObserver};

use crate::row::{EventRow, SnapshotRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that streams snapshots and events to an
/// [`OutputWriter`] backend as they are emitted.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After the run, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after the run.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_event(&mut self, event: &EpiEvent) {
        let row = EventRow::from(event);
        let result = self.writer.write_event(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, snapshot: &AggregateSnapshot) {
        let row = SnapshotRow::from(snapshot);
        let result = self.writer.write_snapshot(&row);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: u64, _time: f64) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
