//! `epi-engine` — tick loop orchestrator for the epi_sim framework.
//!
//! # Tick anatomy
//!
//! ```text
//! advance(dt):
//!   ① Motion     — every agent moves by velocity * speed * dt and reflects
//!                  off the arena walls (health never halts motion).
//!   ② Sampling   — if simulated time crossed a sampling boundary, append
//!                  one AggregateSnapshot of the running counts.
//!   ③ Death      — each infected, non-immune agent dies with p_death.
//!   ④ Recovery   — each infected agent past its recovery deadline recovers.
//!   ⑤ Infection  — each (infected, susceptible) pair within the effective
//!                  radius infects with the effective probability.
//!   clock += dt
//! ```
//!
//! Each transition phase rebuilds its work-set from current state, so phase
//! ④ sees deaths from phase ③.  Phase ⑤ snapshots *both* of its work-sets at
//! entry: an agent infected this tick neither infects nor is re-infected
//! within the same tick.
//!
//! The infection phase's radius and probability pass through an
//! [`InfectionModel`], the seam where the protective-equipment variant
//! ([`PpeInfection`]) replaces the baseline ([`BaselineInfection`]) without
//! touching the death or recovery phases.
//!
//! # Quick-start
//!
//! ```rust
//! use epi_core::EpiConfig;
//! use epi_engine::{BaselineInfection, NoopObserver, SimBuilder};
//!
//! let cfg = EpiConfig { seed: Some(42), ..Default::default() };
//! let mut sim = SimBuilder::new(cfg).build(BaselineInfection).unwrap();
//! sim.run_until_extinct(0.1, 100_000, &mut NoopObserver);
//! assert!(!sim.is_running());
//! ```

pub mod builder;
pub mod engine;
pub mod error;
pub mod event;
pub mod log;
pub mod model;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use engine::{Counts, TransitionEngine, TransitionParams};
pub use error::{EngineError, EngineResult};
pub use event::{EpiEvent, EventKind};
pub use log::{AggregateSnapshot, SimLog};
pub use model::{BaselineInfection, InfectionModel, PpeInfection};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{AgentView, Sim};
