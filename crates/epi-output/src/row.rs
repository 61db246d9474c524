//! Plain data row types written by output backends.

use epi_engine::{AggregateSnapshot, EpiEvent};

/// One aggregate snapshot, flattened for export.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapshotRow {
    pub time:     f64,
    pub healthy:  u64,
    pub infected: u64,
    pub removed:  u64,
}

impl From<&AggregateSnapshot> for SnapshotRow {
    fn from(s: &AggregateSnapshot) -> Self {
        Self {
            time:     s.time,
            healthy:  s.healthy as u64,
            infected: s.infected as u64,
            removed:  s.removed as u64,
        }
    }
}

/// One transition event, flattened for export.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventRow {
    /// `"infection"`, `"recovery"`, or `"death"`.
    pub kind:     &'static str,
    pub time:     f64,
    pub agent_id: u32,
}

impl From<&EpiEvent> for EventRow {
    fn from(e: &EpiEvent) -> Self {
        Self {
            kind: match e.kind {
                epi_engine::EventKind::Infection => "infection",
                epi_engine::EventKind::Recovery  => "recovery",
                epi_engine::EventKind::Death     => "death",
            },
            time:     e.time,
            agent_id: e.agent.0,
        }
    }
}
