//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `snapshots.csv`
//! - `events.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{EventRow, OutputResult, SnapshotRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    events:    Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("snapshots.csv"))?;
        snapshots.write_record(["time", "healthy", "infected", "removed"])?;

        let mut events = Writer::from_path(dir.join("events.csv"))?;
        events.write_record(["kind", "time", "agent_id"])?;

        Ok(Self {
            snapshots,
            events,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshot(&mut self, row: &SnapshotRow) -> OutputResult<()> {
        self.snapshots.write_record(&[
            row.time.to_string(),
            row.healthy.to_string(),
            row.infected.to_string(),
            row.removed.to_string(),
        ])?;
        Ok(())
    }

    fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
        self.events.write_record(&[
            row.kind.to_string(),
            row.time.to_string(),
            row.agent_id.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.events.flush()?;
        Ok(())
    }
}
