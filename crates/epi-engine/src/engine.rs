//! The per-tick transition engine: death, recovery, infection.

use epi_agent::{HealthState, PopulationStore};
use epi_core::{AgentId, EpiConfig, SimRng};

use crate::{EpiEvent, EventKind, InfectionModel, SimLog};

// ── Counts ────────────────────────────────────────────────────────────────────

/// Running aggregate totals, maintained incrementally by the transition
/// phases — never recomputed by scanning the population at runtime.
///
/// Consistency with the population's actual tags at every tick boundary is
/// an internal invariant: a mismatch is a logic defect, checked by a debug
/// assertion in the tick loop (and by tests via
/// [`PopulationStore::tally`]).
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Counts {
    pub healthy:  usize,
    pub infected: usize,
    pub removed:  usize,
}

impl Counts {
    /// Initial counts for a freshly seeded population.
    pub fn seeded(count: usize, n_infected: usize) -> Self {
        Self {
            healthy:  count - n_infected,
            infected: n_infected,
            removed:  0,
        }
    }

    /// Conservation: the three classes always partition the population.
    #[inline]
    pub fn total(&self) -> usize {
        self.healthy + self.infected + self.removed
    }

    /// `true` if the running totals agree with a fresh scan of `store`.
    pub fn matches(&self, store: &PopulationStore) -> bool {
        store.tally() == (self.healthy, self.infected, self.removed)
    }
}

// ── TransitionParams ──────────────────────────────────────────────────────────

/// The subset of [`EpiConfig`] the transition phases read each tick.
#[derive(Copy, Clone, Debug)]
pub struct TransitionParams {
    pub r_infection: f32,
    pub p_infection: f64,
    pub t_recovery:  f64,
    pub p_death:     f64,
}

impl From<&EpiConfig> for TransitionParams {
    fn from(cfg: &EpiConfig) -> Self {
        Self {
            r_infection: cfg.r_infection,
            p_infection: cfg.p_infection,
            t_recovery:  cfg.t_recovery,
            p_death:     cfg.p_death,
        }
    }
}

// ── TransitionEngine ──────────────────────────────────────────────────────────

/// Evaluates the three ordered transition phases over a population.
///
/// Phases run death → recovery → infection.  Each phase collects its own
/// work-set from current state at phase entry, so recovery sees this tick's
/// deaths.  The infection phase snapshots both of its work-sets so each
/// susceptible agent is infected at most once per tick and a just-infected
/// agent does not itself infect until the next tick.
pub struct TransitionEngine<M: InfectionModel> {
    pub params: TransitionParams,
    pub model:  M,
}

impl<M: InfectionModel> TransitionEngine<M> {
    pub fn new(params: TransitionParams, model: M) -> Self {
        Self { params, model }
    }

    /// Run all three phases for the tick that started at `time`.
    pub fn step(
        &self,
        time:   f64,
        store:  &mut PopulationStore,
        counts: &mut Counts,
        log:    &mut SimLog,
        rng:    &mut SimRng,
    ) {
        self.process_deaths(time, store, counts, log, rng);
        self.process_recoveries(time, store, counts, log);
        self.process_infections(time, store, counts, log, rng);
    }

    // ── Phase 1: death ────────────────────────────────────────────────────

    fn process_deaths(
        &self,
        time:   f64,
        store:  &mut PopulationStore,
        counts: &mut Counts,
        log:    &mut SimLog,
        rng:    &mut SimRng,
    ) {
        for agent in infected_set(store) {
            // The draw happens before the immunity check, matching the
            // reference draw order; immune agents never die.
            if rng.chance(self.params.p_death) && !store.immune[agent.index()] {
                store.kill(agent);
                counts.infected -= 1;
                counts.removed += 1;
                log.push_event(EpiEvent { kind: EventKind::Death, time, agent });
            }
        }
    }

    // ── Phase 2: recovery ─────────────────────────────────────────────────

    fn process_recoveries(
        &self,
        time:   f64,
        store:  &mut PopulationStore,
        counts: &mut Counts,
        log:    &mut SimLog,
    ) {
        // Fresh work-set: agents that died in phase 1 are already excluded.
        for agent in infected_set(store) {
            let Some(t0) = store.infected_at[agent.index()] else {
                continue;
            };
            // Strictly greater: an agent infected at t recovers at the first
            // tick with time > t + t_recovery, not at equality.
            if time - t0 > self.params.t_recovery {
                store.recover(agent);
                counts.infected -= 1;
                counts.removed += 1;
                log.push_event(EpiEvent { kind: EventKind::Recovery, time, agent });
            }
        }
    }

    // ── Phase 3: infection ────────────────────────────────────────────────

    fn process_infections(
        &self,
        time:   f64,
        store:  &mut PopulationStore,
        counts: &mut Counts,
        log:    &mut SimLog,
        rng:    &mut SimRng,
    ) {
        // Both work-sets are snapshotted at phase entry.  Pairing order is
        // population order (earlier carriers scan first).
        let infected = infected_set(store);
        let susceptible: Vec<AgentId> = store
            .agent_ids()
            .filter(|&a| store.health(a) == HealthState::Susceptible)
            .collect();

        for &carrier in &infected {
            let radius = self
                .model
                .radius(self.params.r_infection, store, carrier);
            let carrier_pos = store.position[carrier.index()];

            for &target in &susceptible {
                // Re-check live health: an earlier carrier in this same pass
                // may already have infected this target.
                if store.health(target) != HealthState::Susceptible {
                    continue;
                }
                if carrier_pos.distance(store.position[target.index()]) >= radius {
                    continue;
                }
                let p = self
                    .model
                    .probability(self.params.p_infection, store, target);
                if rng.chance(p) {
                    store.infect(target, time);
                    counts.healthy -= 1;
                    counts.infected += 1;
                    log.push_event(EpiEvent { kind: EventKind::Infection, time, agent: target });
                }
            }
        }
    }
}

/// Collect all currently infectious agents, in population order.
fn infected_set(store: &PopulationStore) -> Vec<AgentId> {
    store
        .agent_ids()
        .filter(|&a| store.health(a).is_infectious())
        .collect()
}
