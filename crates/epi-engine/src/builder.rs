//! Fluent builder for constructing a [`Sim`].

use epi_agent::PopulationBuilder;
use epi_core::{EpiConfig, SimRng};

use crate::{EngineResult, InfectionModel, Sim, TransitionEngine, TransitionParams};

/// Builds a validated, seeded [`Sim<M>`].
///
/// The infection-model variant is chosen explicitly at build time; the two
/// stock variants are [`BaselineInfection`][crate::BaselineInfection] and
/// [`PpeInfection`][crate::PpeInfection].
///
/// # Example
///
/// ```rust
/// use epi_core::{EpiConfig, PpeParams};
/// use epi_engine::{PpeInfection, SimBuilder};
///
/// let cfg = EpiConfig {
///     ppe: Some(PpeParams { p_mask: 0.5, p_gloves: 0.5 }),
///     seed: Some(42),
///     ..Default::default()
/// };
/// let sim = SimBuilder::new(cfg).build(PpeInfection).unwrap();
/// assert!(sim.is_running());
/// ```
pub struct SimBuilder {
    config: EpiConfig,
}

impl SimBuilder {
    pub fn new(config: EpiConfig) -> Self {
        Self { config }
    }

    /// Validate the config, build and seed the population, and return a
    /// ready-to-tick [`Sim`].
    ///
    /// Fails fast with a configuration error on any out-of-range parameter
    /// (the reject policy — invalid probabilities never reach a draw).
    pub fn build<M: InfectionModel>(self, model: M) -> EngineResult<Sim<M>> {
        self.config.validate()?;

        let mut rng = match self.config.seed {
            Some(seed) => SimRng::seeded(seed),
            None => SimRng::from_entropy(),
        };

        let store = PopulationBuilder::new(&self.config).build(&mut rng);
        let params = TransitionParams::from(&self.config);
        let engine = TransitionEngine::new(params, model);

        Ok(Sim::new(self.config, store, engine, rng))
    }
}
