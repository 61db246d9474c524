//! The `Sim` struct and its tick loop.

use epi_agent::{HealthState, PopulationStore};
use epi_core::{AgentId, EpiConfig, Sampler, SimClock, SimRng, Vec2};
use epi_motion::MotionField;

use crate::{
    AggregateSnapshot, Counts, InfectionModel, NoopObserver, SimLog, SimObserver,
    TransitionEngine,
};

// ── AgentView ─────────────────────────────────────────────────────────────────

/// Per-agent render state: position scaled to a drawing surface plus the
/// visual attributes (health class, immunity ring, PPE rings).
///
/// Produced by [`Sim::agent_views`] — a pure read with no side effects, so
/// render callbacks may be invoked any number of times between ticks.
#[derive(Copy, Clone, Debug)]
pub struct AgentView {
    pub agent:   AgentId,
    /// Position in surface coordinates.
    pub surface: Vec2,
    pub health:  HealthState,
    pub immune:  bool,
    pub mask:    bool,
    pub gloves:  bool,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// One independent simulation instance.
///
/// Holds the population, clock, sampler, motion field, transition engine,
/// RNG, running counts, and the append-only log.  Instances never share
/// state; advancing several of them in the same synchronous pass is the
/// driver's business.
///
/// A reset is a reconstruction: discard the instance and build a new one via
/// [`SimBuilder`][crate::SimBuilder] — there is no partial reset.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<M: InfectionModel> {
    /// The immutable parameter set this instance was built from.
    pub config: EpiConfig,

    /// Simulated time and tick counter.
    pub clock: SimClock,

    /// Snapshot cadence tracker.
    sampler: Sampler,

    /// All per-agent state (SoA arrays).
    pub store: PopulationStore,

    /// Motion integration and wall reflection.
    pub motion: MotionField,

    /// The three transition phases plus the infection-model variant.
    pub engine: TransitionEngine<M>,

    /// All randomness for this instance.
    rng: SimRng,

    /// Running aggregate totals (incremental, never rescanned at runtime).
    counts: Counts,

    /// Append-only event + snapshot history.
    log: SimLog,
}

impl<M: InfectionModel> Sim<M> {
    pub(crate) fn new(
        config: EpiConfig,
        store:  PopulationStore,
        engine: TransitionEngine<M>,
        rng:    SimRng,
    ) -> Self {
        let sampler = Sampler::new(config.sample_interval);
        let motion = MotionField::new(config.arena, config.speed);
        let counts = Counts::seeded(config.count, config.n_infected);
        Self {
            clock: SimClock::new(),
            sampler,
            store,
            motion,
            engine,
            rng,
            counts,
            log: SimLog::new(),
            config,
        }
    }

    // ── Queries (pure reads) ──────────────────────────────────────────────

    /// `true` exactly while any agent is infected.  Drivers stop delivering
    /// ticks once this turns false.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.counts.infected > 0
    }

    /// Current aggregate totals.
    #[inline]
    pub fn counts(&self) -> Counts {
        self.counts
    }

    /// The full event + snapshot history so far.
    #[inline]
    pub fn log(&self) -> &SimLog {
        &self.log
    }

    /// Consume the instance and keep its history.
    pub fn into_log(self) -> SimLog {
        self.log
    }

    /// Render state for every agent, scaled to a `width × height` surface.
    ///
    /// Geometry only affects the returned coordinates, never the physics.
    pub fn agent_views(
        &self,
        width:  f32,
        height: f32,
    ) -> impl Iterator<Item = AgentView> + '_ {
        self.store.agent_ids().map(move |agent| {
            let i = agent.index();
            AgentView {
                agent,
                surface: self.motion.arena.to_surface(self.store.position[i], width, height),
                health:  self.store.health[i],
                immune:  self.store.immune[i],
                mask:    self.store.mask[i],
                gloves:  self.store.gloves[i],
            }
        })
    }

    // ── Tick loop ─────────────────────────────────────────────────────────

    /// Advance one tick of duration `dt` without observer callbacks.
    pub fn advance(&mut self, dt: f64) {
        self.advance_with(dt, &mut NoopObserver);
    }

    /// Advance one tick, dispatching observer callbacks.
    ///
    /// The whole tick — motion, sampling, the three transition phases — runs
    /// to completion; there are no partial ticks.  Counter consistency with
    /// the population's tags is asserted at the tick boundary in debug
    /// builds (violation is a logic defect, not a handleable error).
    pub fn advance_with<O: SimObserver>(&mut self, dt: f64, observer: &mut O) {
        let now = self.clock.time;

        // ① Motion.
        self.motion.advance(&mut self.store, dt);

        // ② Sampling — before the transition phases, so the step-0 snapshot
        // records the seed state.
        if let Some(step) = self.sampler.poll(now) {
            let snapshot = AggregateSnapshot {
                time:     self.sampler.step_time(step),
                healthy:  self.counts.healthy,
                infected: self.counts.infected,
                removed:  self.counts.removed,
            };
            self.log.push_snapshot(snapshot);
            observer.on_snapshot(&snapshot);
        }

        // ③④⑤ Death, recovery, infection.
        let first_new_event = self.log.events().len();
        self.engine.step(
            now,
            &mut self.store,
            &mut self.counts,
            &mut self.log,
            &mut self.rng,
        );
        for i in first_new_event..self.log.events().len() {
            let event = self.log.events()[i];
            observer.on_event(&event);
        }

        self.clock.advance(dt);

        debug_assert!(
            self.counts.matches(&self.store),
            "aggregate counters diverged from population tags at {}",
            self.clock,
        );
        debug_assert_eq!(self.counts.total(), self.config.count);

        observer.on_tick_end(self.clock.tick, now, &self.counts);
    }

    /// Advance exactly `n` ticks of duration `dt`.
    ///
    /// Ticks are delivered regardless of the termination predicate — useful
    /// for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, dt: f64, observer: &mut O) {
        for _ in 0..n {
            self.advance_with(dt, observer);
        }
    }

    /// Tick at cadence `dt` until no agent is infected, or until `max_ticks`
    /// have run.  Returns the number of ticks executed and fires
    /// `on_sim_end` once.
    pub fn run_until_extinct<O: SimObserver>(
        &mut self,
        dt:        f64,
        max_ticks: u64,
        observer:  &mut O,
    ) -> u64 {
        let mut executed = 0;
        while self.is_running() && executed < max_ticks {
            self.advance_with(dt, observer);
            executed += 1;
        }
        observer.on_sim_end(self.clock.tick, self.clock.time);
        executed
    }
}
