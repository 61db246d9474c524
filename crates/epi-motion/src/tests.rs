//! Unit tests for the motion field.

use epi_agent::{PopulationBuilder, PopulationStore};
use epi_core::{AgentId, Arena, EpiConfig, SimRng, Vec2};

use crate::MotionField;

fn single_agent_store() -> PopulationStore {
    let cfg = EpiConfig { count: 1, n_infected: 0, ..Default::default() };
    let mut rng = SimRng::seeded(1);
    PopulationBuilder::new(&cfg).build(&mut rng)
}

#[test]
fn moves_along_velocity() {
    let mut store = single_agent_store();
    store.position[0] = Vec2::new(50.0, 50.0);
    store.velocity[0] = Vec2::new(1.0, 0.0);

    let field = MotionField::new(Arena::default(), 30.0);
    field.advance(&mut store, 0.1);

    assert!((store.position[0].x - 53.0).abs() < 1e-4);
    assert_eq!(store.position[0].y, 50.0);
}

#[test]
fn reflects_x_at_far_wall() {
    let mut store = single_agent_store();
    store.position[0] = Vec2::new(94.0, 50.0);
    store.velocity[0] = Vec2::new(1.0, 0.0);

    let field = MotionField::new(Arena::default(), 30.0);
    field.advance(&mut store, 0.1);

    // Crossed 95: position overshoots (no clamping), velocity negated.
    assert!(store.position[0].x > 95.0);
    assert_eq!(store.velocity[0].x, -1.0);

    // The next tick carries the agent back inside.
    field.advance(&mut store, 0.1);
    assert!(store.position[0].x < 95.0);
}

#[test]
fn reflects_y_at_near_wall_independently() {
    let mut store = single_agent_store();
    store.position[0] = Vec2::new(50.0, 6.0);
    store.velocity[0] = Vec2::new(0.6, -0.8);

    let field = MotionField::new(Arena::default(), 30.0);
    field.advance(&mut store, 0.1);

    // Only the y component reflects; x keeps its sign.
    assert_eq!(store.velocity[0].y, 0.8);
    assert_eq!(store.velocity[0].x, 0.6);
}

#[test]
fn terminal_agents_keep_moving() {
    let mut store = single_agent_store();
    store.position[0] = Vec2::new(50.0, 50.0);
    store.velocity[0] = Vec2::new(0.0, 1.0);
    store.infect(AgentId(0), 0.0);
    store.kill(AgentId(0));

    let field = MotionField::new(Arena::default(), 30.0);
    field.advance(&mut store, 0.1);

    assert!(store.position[0].y > 50.0, "dead agent should still move");
}

#[test]
fn population_stays_near_arena_over_many_ticks() {
    let cfg = EpiConfig { count: 40, n_infected: 0, ..Default::default() };
    let mut rng = SimRng::seeded(9);
    let mut store = PopulationBuilder::new(&cfg).build(&mut rng);
    let field = MotionField::new(cfg.arena, cfg.speed);

    for _ in 0..2_000 {
        field.advance(&mut store, 1.0 / 60.0 * 4.0);
    }
    // One tick's travel is 2 units; positions can exceed the margin band by
    // at most one overshoot before reflecting back.
    let slack = 2.5;
    for p in &store.position {
        assert!(p.x > cfg.arena.low() - slack && p.x < cfg.arena.high() + slack);
        assert!(p.y > cfg.arena.low() - slack && p.y < cfg.arena.high() + slack);
    }
}

#[test]
fn surface_position_scales() {
    let mut store = single_agent_store();
    store.position[0] = Vec2::new(25.0, 75.0);
    let field = MotionField::new(Arena::default(), 30.0);
    let p = field.surface_position(&store, AgentId(0), 400.0, 200.0);
    assert_eq!(p.x, 100.0);
    assert_eq!(p.y, 150.0);
}
