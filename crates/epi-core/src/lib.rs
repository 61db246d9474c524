//! `epi-core` — foundational types for the `epi_sim` epidemic framework.
//!
//! This crate is a dependency of every other `epi-*` crate.  It intentionally
//! has no `epi-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`ids`]      | `AgentId`                                             |
//! | [`vec2`]     | `Vec2`, Euclidean distance, `Arena` bounds            |
//! | [`time`]     | `SimClock`, `Sampler`                                 |
//! | [`rng`]      | `SimRng` (uniform draws, Bernoulli trials, headings)  |
//! | [`config`]   | `EpiConfig`, `PpeParams` (validated fail-fast)        |
//! | [`error`]    | `EpiError`, `EpiResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;
pub mod vec2;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{EpiConfig, PpeParams};
pub use error::{EpiError, EpiResult};
pub use ids::AgentId;
pub use rng::SimRng;
pub use time::{Sampler, SimClock};
pub use vec2::{Arena, Vec2};
