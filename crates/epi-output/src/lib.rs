//! `epi-output` — simulation output writers for the epi_sim framework.
//!
//! The CSV backend creates two files:
//!
//! | File            | Contents                                           |
//! |-----------------|----------------------------------------------------|
//! | `snapshots.csv` | one row per aggregate snapshot (chartable series)  |
//! | `events.csv`    | one row per transition event                       |
//!
//! The backend implements [`OutputWriter`] and is driven by
//! [`SimOutputObserver`], which implements `epi_engine::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use epi_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run_until_extinct(dt, max_ticks, &mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{EventRow, SnapshotRow};
pub use writer::OutputWriter;
