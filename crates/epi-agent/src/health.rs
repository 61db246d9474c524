//! Agent health state.

use std::fmt;

/// One agent's position in the SIR state machine.
///
/// `Recovered` and `Dead` are both terminal: no further transitions occur.
/// The aggregate "removed" count merges the two.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HealthState {
    #[default]
    Susceptible,
    Infected,
    Recovered,
    Dead,
}

impl HealthState {
    /// `true` for the two terminal states.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, HealthState::Recovered | HealthState::Dead)
    }

    /// `true` while the agent can infect others.
    #[inline]
    pub fn is_infectious(self) -> bool {
        self == HealthState::Infected
    }
}

impl fmt::Display for HealthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HealthState::Susceptible => "susceptible",
            HealthState::Infected    => "infected",
            HealthState::Recovered   => "recovered",
            HealthState::Dead        => "dead",
        };
        f.write_str(s)
    }
}
