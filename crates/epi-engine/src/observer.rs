//! Simulation observer trait for progress reporting and data collection.

use crate::{AggregateSnapshot, Counts, EpiEvent};

/// Callbacks invoked by the tick loop in
/// [`Sim::run_ticks`][crate::Sim::run_ticks] and
/// [`Sim::run_until_extinct`][crate::Sim::run_until_extinct].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — extinction printer
///
/// ```rust,ignore
/// struct ExtinctionPrinter;
///
/// impl SimObserver for ExtinctionPrinter {
///     fn on_sim_end(&mut self, final_tick: u64, time: f64) {
///         println!("outbreak over after {final_tick} ticks (t = {time:.1})");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called after each tick completes, with the tick's start time and the
    /// post-tick aggregate counts.
    fn on_tick_end(&mut self, _tick: u64, _time: f64, _counts: &Counts) {}

    /// Called once per transition event, in emission order within the tick.
    fn on_event(&mut self, _event: &EpiEvent) {}

    /// Called when a sampling boundary is crossed, with the snapshot that
    /// was appended to the log.
    fn on_snapshot(&mut self, _snapshot: &AggregateSnapshot) {}

    /// Called once when a driving loop stops (end of requested ticks reached
    /// extinction, or the tick budget ran out).
    fn on_sim_end(&mut self, _final_tick: u64, _time: f64) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to drive the loop
/// but don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
