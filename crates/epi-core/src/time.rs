//! Simulation time model.
//!
//! # Design
//!
//! Two cadences exist, and they are deliberately distinct:
//!
//! - the **physics tick**: continuous simulated time advanced by a fixed
//!   `dt` per accepted tick (`SimClock`);
//! - the **sampling cadence**: a coarser interval at which aggregate
//!   snapshots are recorded for charting (`Sampler`).
//!
//! The driver owns wall-clock scheduling; nothing in here touches real time,
//! so the whole engine can be stepped synchronously in tests.

use std::fmt;

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Owns simulated time for one simulation instance.
///
/// `time` is continuous (f64 simulated-time units, "weeks" in the reference
/// scenario); `tick` counts how many fixed-timestep advances have happened.
/// Transition rules read `time` *before* the advance — a tick's phases all
/// see the time at which the tick started.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Simulated time at the start of the current tick.
    pub time: f64,
    /// Number of completed ticks.
    pub tick: u64,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one tick of duration `dt`.
    #[inline]
    pub fn advance(&mut self, dt: f64) {
        self.time += dt;
        self.tick += 1;
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={:.3} (tick {})", self.time, self.tick)
    }
}

// ── Sampler ───────────────────────────────────────────────────────────────────

/// Tracks the coarser snapshot cadence.
///
/// A snapshot is due when simulated time crosses a sampling-interval
/// boundary: `floor(time / interval)` exceeds the last sampled step.  At
/// most one snapshot is emitted per interval regardless of how many physics
/// ticks fall inside it.
///
/// The declared time coordinate of a snapshot is `step * interval`, i.e. the
/// boundary itself, not the raw continuous time at the sampling instant.
/// (The reference scaled this by a further 1/timestep factor; that is
/// corrected here — see DESIGN.md.)
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sampler {
    /// Simulated-time units between snapshots.
    pub interval: f64,
    /// Last sampling step emitted; -1 means "none yet", so the very first
    /// tick (time 0) produces the step-0 snapshot of the seed state.
    last_step: i64,
}

impl Sampler {
    pub fn new(interval: f64) -> Self {
        Self { interval, last_step: -1 }
    }

    /// If a sampling boundary has been crossed, return the new step index
    /// and mark it emitted; otherwise `None`.
    pub fn poll(&mut self, time: f64) -> Option<u64> {
        let step = (time / self.interval).floor() as i64;
        if step > self.last_step {
            self.last_step = step;
            Some(step as u64)
        } else {
            None
        }
    }

    /// The declared time coordinate for a snapshot at `step`.
    #[inline]
    pub fn step_time(&self, step: u64) -> f64 {
        step as f64 * self.interval
    }
}
