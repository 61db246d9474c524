//! The per-simulation append-only log.
//!
//! Each simulation instance owns exactly one `SimLog`, created by the
//! builder and handed to the `Sim` (no process-wide registry keyed by name —
//! ownership and lifetime are explicit).  Consumers read the full history
//! at any time through [`Sim::log`][crate::Sim::log] and can take it over
//! with [`Sim::into_log`][crate::Sim::into_log] after the run.

use crate::EpiEvent;

/// Aggregate counts recorded at one sampling boundary.
///
/// `removed` merges Recovered and Dead.  Snapshots are immutable once
/// appended; the declared `time` is the sampling boundary
/// (`step * sample_interval`), not the raw tick time.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct AggregateSnapshot {
    pub time:     f64,
    pub healthy:  usize,
    pub infected: usize,
    pub removed:  usize,
}

/// Append-only history of one simulation: every transition event plus the
/// coarser aggregate snapshots.
#[derive(Default, Debug)]
pub struct SimLog {
    events:    Vec<EpiEvent>,
    snapshots: Vec<AggregateSnapshot>,
}

impl SimLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push_event(&mut self, event: EpiEvent) {
        self.events.push(event);
    }

    pub(crate) fn push_snapshot(&mut self, snapshot: AggregateSnapshot) {
        self.snapshots.push(snapshot);
    }

    /// All events so far, in emission order.
    pub fn events(&self) -> &[EpiEvent] {
        &self.events
    }

    /// All snapshots so far, in time order.
    pub fn snapshots(&self) -> &[AggregateSnapshot] {
        &self.snapshots
    }
}
