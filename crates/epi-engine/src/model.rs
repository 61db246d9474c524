//! The `InfectionModel` trait — the seam for behavioral variants.
//!
//! The reference design layered variants by class inheritance (baseline
//! motion → SIR → SIR-with-PPE overriding the infection pass).  Here the
//! variant is a capability passed to the engine at construction: the death
//! and recovery phases are shared code, and only the two quantities the PPE
//! variant actually changes — radius and probability — go through the trait.
//! That makes each variant testable in isolation and the substitution
//! explicit at the type level.

use epi_agent::PopulationStore;
use epi_core::AgentId;

/// Modifies the infection phase's effective radius and probability.
///
/// Both methods default to passing the base value through, so the baseline
/// variant is an empty impl.  Implementations may read any per-agent state
/// but must not mutate — the infection phase owns all mutation.
pub trait InfectionModel: Send + Sync + 'static {
    /// Effective infection radius when `carrier` is the infecting agent.
    #[inline]
    fn radius(&self, base: f32, _store: &PopulationStore, _carrier: AgentId) -> f32 {
        base
    }

    /// Effective per-contact probability when `target` is the susceptible
    /// agent under consideration.
    #[inline]
    fn probability(&self, base: f64, _store: &PopulationStore, _target: AgentId) -> f64 {
        base
    }
}

/// The baseline SIR infection phase: configured radius and probability,
/// unmodified.
pub struct BaselineInfection;

impl InfectionModel for BaselineInfection {}

/// Protective-equipment modifiers: a masked carrier infects at a quarter of
/// the base radius; a gloved target is infected at half the base probability.
pub struct PpeInfection;

impl InfectionModel for PpeInfection {
    #[inline]
    fn radius(&self, base: f32, store: &PopulationStore, carrier: AgentId) -> f32 {
        if store.mask[carrier.index()] { base / 4.0 } else { base }
    }

    #[inline]
    fn probability(&self, base: f64, store: &PopulationStore, target: AgentId) -> f64 {
        if store.gloves[target.index()] { base / 2.0 } else { base }
    }
}
