//! Simulation RNG wrapper.
//!
//! # Seeding strategy
//!
//! Reproducibility is not a contract of the simulation: the default
//! constructor seeds from OS entropy, matching the reference behavior.  An
//! explicit [`SimRng::seeded`] constructor exists so the transition engine
//! can be driven deterministically in tests without a real-time or entropy
//! dependency.
//!
//! All randomness in a simulation instance flows through its single `SimRng`,
//! which keeps instances independent of each other (no shared RNG state) and
//! makes draw ordering well-defined within a tick.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Vec2;

/// Simulation-level RNG: uniform real/integer draws, Bernoulli trials, and
/// uniform unit headings.
pub struct SimRng(SmallRng);

impl SimRng {
    /// Seed from OS entropy — the default for interactive runs.
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }

    /// Seed deterministically — for tests and reproducible scenarios.
    pub fn seeded(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Bernoulli trial: `true` with probability `p`.
    ///
    /// `p` must already be a valid probability — configuration validation
    /// rejects out-of-range values before any draw happens, so a clamp here
    /// would only mask a logic defect.  Derived probabilities (PPE divisors)
    /// can only shrink a valid `p`.
    #[inline]
    pub fn chance(&mut self, p: f64) -> bool {
        self.0.gen_bool(p)
    }

    /// A unit velocity with heading uniform in `[0, 2π)`.
    #[inline]
    pub fn unit_heading(&mut self) -> Vec2 {
        let angle = self.0.gen_range(0.0_f32..std::f32::consts::TAU);
        Vec2::from_angle(angle)
    }

    /// A position uniform in the rectangle `[low, high] × [low, high]`.
    #[inline]
    pub fn position_in(&mut self, low: f32, high: f32) -> Vec2 {
        Vec2 {
            x: self.0.gen_range(low..=high),
            y: self.0.gen_range(low..=high),
        }
    }
}
