//! petri — reference scenario for the epi_sim framework.
//!
//! Runs two independent arenas side by side, advanced in the same
//! synchronous pass by an explicit fixed-step driver (the role the
//! animation loop played in an interactive frontend):
//!
//! - `baseline`: 50 agents, 8 seed-infected, plain SIR dynamics;
//! - `ppe`:      25 agents, 4 seed-infected, 50 % mask and glove adoption.
//!
//! Each arena's snapshot/event history is exported to CSV under
//! `output/<name>/` for charting.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use epi_core::{EpiConfig, PpeParams};
use epi_engine::{
    BaselineInfection, Counts, InfectionModel, PpeInfection, Sim, SimBuilder, SimObserver,
};
use epi_output::{CsvWriter, SimOutputObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

/// Fixed physics timestep: 4 simulated-time units per 60 driver ticks,
/// matching the reference cadence of an interactive frontend.
const DT: f64 = (1.0 / 60.0) * 4.0;

/// Safety valve — an outbreak that somehow survives this long is a bug.
const MAX_TICKS: u64 = 1_000_000;

// ── Progress observer ─────────────────────────────────────────────────────────

/// Wraps the CSV output observer with a console progress line per snapshot.
struct Progress<O: SimObserver> {
    name:  &'static str,
    inner: O,
}

impl<O: SimObserver> SimObserver for Progress<O> {
    fn on_tick_end(&mut self, tick: u64, time: f64, counts: &Counts) {
        self.inner.on_tick_end(tick, time, counts);
    }

    fn on_event(&mut self, event: &epi_engine::EpiEvent) {
        self.inner.on_event(event);
    }

    fn on_snapshot(&mut self, snapshot: &epi_engine::AggregateSnapshot) {
        println!(
            "[{:>8}] t={:>5.1}  healthy={:>3}  infected={:>3}  removed={:>3}",
            self.name, snapshot.time, snapshot.healthy, snapshot.infected, snapshot.removed
        );
        self.inner.on_snapshot(snapshot);
    }

    fn on_sim_end(&mut self, final_tick: u64, time: f64) {
        println!("[{:>8}] extinct after {final_tick} ticks (t = {time:.1})", self.name);
        self.inner.on_sim_end(final_tick, time);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn observer_for(name: &'static str) -> Result<Progress<SimOutputObserver<CsvWriter>>> {
    let dir = Path::new("output").join(name);
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    let writer = CsvWriter::new(&dir).with_context(|| format!("open CSV files in {}", dir.display()))?;
    Ok(Progress { name, inner: SimOutputObserver::new(writer) })
}

fn finish<M: InfectionModel>(
    name: &str,
    sim:  &Sim<M>,
    obs:  &mut Progress<SimOutputObserver<CsvWriter>>,
) -> Result<()> {
    if let Some(e) = obs.inner.take_error() {
        return Err(e).with_context(|| format!("writing {name} output"));
    }
    let c = sim.counts();
    println!(
        "[{name:>8}] final: healthy={} infected={} removed={} | {} events, {} snapshots",
        c.healthy,
        c.infected,
        c.removed,
        sim.log().events().len(),
        sim.log().snapshots().len(),
    );
    Ok(())
}

fn main() -> Result<()> {
    println!("=== petri — epi_sim reference scenario ===");
    println!("dt = {DT:.4} | snapshot every 1.0 simulated-time unit");
    println!();

    let mut baseline = SimBuilder::new(EpiConfig {
        count:      50,
        n_infected: 8,
        ..Default::default()
    })
    .build(BaselineInfection)?;

    let mut ppe = SimBuilder::new(EpiConfig {
        count:      25,
        n_infected: 4,
        ppe:        Some(PpeParams { p_mask: 0.5, p_gloves: 0.5 }),
        ..Default::default()
    })
    .build(PpeInfection)?;

    let mut baseline_obs = observer_for("baseline")?;
    let mut ppe_obs = observer_for("ppe")?;

    // Both arenas advance in the same synchronous pass; each stops receiving
    // ticks once its own outbreak is extinct.
    let mut ticks = 0u64;
    while (baseline.is_running() || ppe.is_running()) && ticks < MAX_TICKS {
        if baseline.is_running() {
            baseline.advance_with(DT, &mut baseline_obs);
            if !baseline.is_running() {
                baseline_obs.on_sim_end(baseline.clock.tick, baseline.clock.time);
            }
        }
        if ppe.is_running() {
            ppe.advance_with(DT, &mut ppe_obs);
            if !ppe.is_running() {
                ppe_obs.on_sim_end(ppe.clock.tick, ppe.clock.time);
            }
        }
        ticks += 1;
    }

    println!();
    finish("baseline", &baseline, &mut baseline_obs)?;
    finish("ppe", &ppe, &mut ppe_obs)?;
    println!();
    println!("CSV written to output/baseline/ and output/ppe/");
    Ok(())
}
