//! Simulation configuration.
//!
//! All parameters are fixed at construction; a running simulation never
//! re-reads external configuration.  Validation is fail-fast and REJECTS
//! out-of-range values (rather than clamping): a probability of 1.3 is a
//! caller bug that should surface at build time, not silently corrupt
//! transition rates at runtime.

use crate::{Arena, EpiError, EpiResult};

/// Protective-equipment adoption probabilities.
///
/// Present only when the PPE simulation variant is requested; each agent
/// draws its mask and glove flags independently, once, at construction.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PpeParams {
    /// Probability an agent wears a mask (quarters its infection radius).
    pub p_mask: f64,
    /// Probability an agent wears gloves (halves its infection risk).
    pub p_gloves: f64,
}

/// Immutable parameters for one simulation instance.
///
/// Typically built from `..Default::default()` with the fields of interest
/// overridden; [`validate`][Self::validate] is called by the sim builder.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EpiConfig {
    /// Population size.  Fixed for the simulation's lifetime — deaths and
    /// recoveries mark agents terminal but never remove them.
    pub count: usize,

    /// Agents marked Infected at construction, before any tick runs.
    pub n_infected: usize,

    /// Infection radius in arena units.
    pub r_infection: f32,

    /// Per-contact infection probability.
    pub p_infection: f64,

    /// Simulated-time units after which an infected agent recovers.
    pub t_recovery: f64,

    /// Per-tick death probability, conditional on infection and non-immunity.
    pub p_death: f64,

    /// Immunity probability, applied only to seed-infected agents.
    pub p_immune: f64,

    /// Protective-equipment adoption.  `None` selects the baseline variant.
    pub ppe: Option<PpeParams>,

    /// Arena bounds.
    pub arena: Arena,

    /// Motion speed in arena units per simulated-time unit.
    pub speed: f32,

    /// Snapshot cadence in simulated-time units (coarser than the tick).
    pub sample_interval: f64,

    /// RNG seed.  `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for EpiConfig {
    /// The reference scenario parameters.
    fn default() -> Self {
        Self {
            count:           50,
            n_infected:      8,
            r_infection:     5.0,
            p_infection:     0.1,
            t_recovery:      5.0,
            p_death:         0.01,
            p_immune:        0.2,
            ppe:             None,
            arena:           Arena::default(),
            speed:           30.0,
            sample_interval: 1.0,
            seed:            None,
        }
    }
}

impl EpiConfig {
    /// Check every parameter against its contract.
    ///
    /// Returns `EpiError::Config` naming the first violated field.
    pub fn validate(&self) -> EpiResult<()> {
        if self.count == 0 {
            return Err(EpiError::Config("population count must be positive".into()));
        }
        if self.n_infected > self.count {
            return Err(EpiError::Config(format!(
                "seed-infected count {} exceeds population {}",
                self.n_infected, self.count
            )));
        }
        if !(self.r_infection > 0.0) {
            return Err(EpiError::Config("infection radius must be positive".into()));
        }
        for (name, p) in [
            ("p_infection", self.p_infection),
            ("p_death", self.p_death),
            ("p_immune", self.p_immune),
        ] {
            check_probability(name, p)?;
        }
        if let Some(ppe) = &self.ppe {
            check_probability("p_mask", ppe.p_mask)?;
            check_probability("p_gloves", ppe.p_gloves)?;
        }
        if !(self.t_recovery >= 0.0) {
            return Err(EpiError::Config("recovery time must be non-negative".into()));
        }
        if !(self.speed.is_finite()) {
            return Err(EpiError::Config("speed must be finite".into()));
        }
        if !(self.sample_interval > 0.0) {
            return Err(EpiError::Config("sample interval must be positive".into()));
        }
        if !(self.arena.size > 0.0)
            || !(self.arena.margin >= 0.0)
            || self.arena.margin * 2.0 >= self.arena.size
        {
            return Err(EpiError::Config(format!(
                "arena margin {} does not fit inside size {}",
                self.arena.margin, self.arena.size
            )));
        }
        Ok(())
    }
}

fn check_probability(name: &str, p: f64) -> EpiResult<()> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(EpiError::Config(format!("{name} = {p} is outside [0, 1]")))
    }
}
