//! Core population storage: `PopulationStore` (SoA arrays).
//!
//! Every `Vec` field has exactly `count` elements; the `AgentId` value is the
//! index into all of them:
//!
//! ```ignore
//! let pos = store.position[agent.index()];  // O(1), cache-friendly
//! ```
//!
//! Health transitions go through the mutator methods below so the
//! single-assignment invariants (`infected_at` set exactly once, terminal
//! states final) hold everywhere by construction.

use epi_core::{AgentId, Vec2};

use crate::HealthState;

/// Structure-of-Arrays storage for all agent state.
pub struct PopulationStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    // ── Spatial state ─────────────────────────────────────────────────────
    /// Arena-local position.
    pub position: Vec<Vec2>,

    /// Unit velocity (heading).  Scaled by the motion field's speed each tick.
    pub velocity: Vec<Vec2>,

    // ── Epidemic state ────────────────────────────────────────────────────
    /// SIR health tag.
    pub health: Vec<HealthState>,

    /// Set once at infection-seed time; an immune agent, once infected,
    /// never transitions to Dead.
    pub immune: Vec<bool>,

    /// Simulated time at which the agent became Infected; `None` until then.
    pub infected_at: Vec<Option<f64>>,

    // ── Protective equipment ──────────────────────────────────────────────
    /// Mask flag.  Drawn at construction only for the PPE variant; all
    /// `false` in the baseline.
    pub mask: Vec<bool>,

    /// Glove flag, same lifecycle as `mask`.
    pub gloves: Vec<bool>,
}

impl PopulationStore {
    /// Allocate a store of `count` agents, all susceptible at the origin.
    ///
    /// Used by [`PopulationBuilder`][crate::PopulationBuilder]; positions and
    /// headings are filled in there.
    pub(crate) fn new(count: usize) -> Self {
        Self {
            count,
            position:    vec![Vec2::default(); count],
            velocity:    vec![Vec2::default(); count],
            health:      vec![HealthState::Susceptible; count],
            immune:      vec![false; count],
            infected_at: vec![None; count],
            mask:        vec![false; count],
            gloves:      vec![false; count],
        }
    }

    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    // ── Health queries ────────────────────────────────────────────────────

    #[inline]
    pub fn health(&self, agent: AgentId) -> HealthState {
        self.health[agent.index()]
    }

    #[inline]
    pub fn is_terminal(&self, agent: AgentId) -> bool {
        self.health[agent.index()].is_terminal()
    }

    // ── Health transitions ────────────────────────────────────────────────

    /// Transition `agent` from Susceptible to Infected at `time`.
    ///
    /// # Panics (debug)
    /// The agent must currently be Susceptible and never previously infected.
    pub fn infect(&mut self, agent: AgentId, time: f64) {
        let i = agent.index();
        debug_assert_eq!(self.health[i], HealthState::Susceptible);
        debug_assert!(self.infected_at[i].is_none(), "infected_at set twice");
        self.health[i] = HealthState::Infected;
        self.infected_at[i] = Some(time);
    }

    /// Transition `agent` from Infected to Recovered.
    pub fn recover(&mut self, agent: AgentId) {
        let i = agent.index();
        debug_assert_eq!(self.health[i], HealthState::Infected);
        self.health[i] = HealthState::Recovered;
    }

    /// Transition `agent` from Infected to Dead.
    ///
    /// # Panics (debug)
    /// Immune agents never die; the caller must have excluded them.
    pub fn kill(&mut self, agent: AgentId) {
        let i = agent.index();
        debug_assert_eq!(self.health[i], HealthState::Infected);
        debug_assert!(!self.immune[i], "immune agent reached the death transition");
        self.health[i] = HealthState::Dead;
    }

    // ── Aggregate scan ────────────────────────────────────────────────────

    /// Count `(healthy, infected, removed)` by scanning the health array.
    ///
    /// The running totals on the sim are the source of truth at runtime;
    /// this scan exists to verify them (consistency is a tick invariant).
    pub fn tally(&self) -> (usize, usize, usize) {
        let mut healthy = 0;
        let mut infected = 0;
        let mut removed = 0;
        for h in &self.health {
            match h {
                HealthState::Susceptible => healthy += 1,
                HealthState::Infected => infected += 1,
                HealthState::Recovered | HealthState::Dead => removed += 1,
            }
        }
        (healthy, infected, removed)
    }
}
