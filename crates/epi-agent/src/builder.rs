//! Fluent builder for constructing a seeded `PopulationStore`.
//!
//! # Usage
//!
//! ```rust
//! use epi_agent::PopulationBuilder;
//! use epi_core::{EpiConfig, SimRng};
//!
//! let cfg = EpiConfig::default();
//! let mut rng = SimRng::seeded(42);
//! let store = PopulationBuilder::new(&cfg).build(&mut rng);
//!
//! assert_eq!(store.count, cfg.count);
//! assert_eq!(store.tally().1, cfg.n_infected);
//! ```

use epi_core::{EpiConfig, SimRng};

use crate::PopulationStore;

/// Builds a [`PopulationStore`] from an [`EpiConfig`]:
///
/// 1. every agent gets a position uniform in the clamped arena interior and
///    a unit heading uniform in `[0, 2π)`;
/// 2. the first `n_infected` agents (population order) are seeded Infected
///    at time 0, each drawing immunity with probability `p_immune`;
/// 3. with the PPE variant configured, every agent draws its mask and glove
///    flags once, independently.
///
/// The config is assumed valid — the sim builder validates before calling.
pub struct PopulationBuilder<'a> {
    cfg: &'a EpiConfig,
}

impl<'a> PopulationBuilder<'a> {
    pub fn new(cfg: &'a EpiConfig) -> Self {
        Self { cfg }
    }

    /// Construct and seed the store, consuming draws from `rng`.
    pub fn build(self, rng: &mut SimRng) -> PopulationStore {
        let cfg = self.cfg;
        let mut store = PopulationStore::new(cfg.count);

        // ── Placement ─────────────────────────────────────────────────────
        let (low, high) = (cfg.arena.low(), cfg.arena.high());
        for i in 0..cfg.count {
            store.position[i] = rng.position_in(low, high);
            store.velocity[i] = rng.unit_heading();
        }

        // ── Seed infections ───────────────────────────────────────────────
        //
        // Immunity is drawn here and only here: agents infected later by
        // contact never gain immunity.
        for i in 0..cfg.n_infected {
            store.health[i] = crate::HealthState::Infected;
            store.infected_at[i] = Some(0.0);
            if rng.chance(cfg.p_immune) {
                store.immune[i] = true;
            }
        }

        // ── Protective equipment ──────────────────────────────────────────
        if let Some(ppe) = &cfg.ppe {
            for i in 0..cfg.count {
                store.mask[i] = rng.chance(ppe.p_mask);
                store.gloves[i] = rng.chance(ppe.p_gloves);
            }
        }

        store
    }
}
