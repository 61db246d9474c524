//! Transition events.
//!
//! Events exist for observability only (charting, export); the transition
//! logic never reads them back.

use std::fmt;

use epi_core::AgentId;

/// Which transition fired.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum EventKind {
    Infection,
    Recovery,
    Death,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EventKind::Infection => "infection",
            EventKind::Recovery  => "recovery",
            EventKind::Death     => "death",
        };
        f.write_str(s)
    }
}

/// One health transition, tagged with the simulated time of the tick it
/// happened in.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct EpiEvent {
    pub kind:  EventKind,
    pub time:  f64,
    pub agent: AgentId,
}
