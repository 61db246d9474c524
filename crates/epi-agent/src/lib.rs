//! `epi-agent` — Structure-of-Arrays population storage for the `epi_sim`
//! framework.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`health`]  | `HealthState` enum                                      |
//! | [`store`]   | `PopulationStore` (SoA arrays)                          |
//! | [`builder`] | `PopulationBuilder` (random placement, seed infections) |
//!
//! The population is fixed-size for a simulation's lifetime: deaths and
//! recoveries mark agents terminal but never remove them from the arrays —
//! terminal agents keep moving and keep being rendered, only their health
//! tag differs.

pub mod builder;
pub mod health;
pub mod store;


pub use builder::PopulationBuilder;
pub use health::HealthState;
pub use store::PopulationStore;
