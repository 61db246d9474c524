//! The motion field: advances agent positions and reflects them off walls.

use epi_agent::PopulationStore;
use epi_core::{AgentId, Arena, Vec2};

/// Owns the arena geometry and motion speed; advances a population's
/// positions each tick.
///
/// # Reflection model
///
/// Each axis is handled independently: after the position update, if the new
/// coordinate lies outside `[margin, size - margin]`, that axis's velocity
/// component is negated.  The position itself is NOT clamped — an agent may
/// sit slightly outside the interior for one tick before the reflected
/// velocity carries it back.  At `speed * dt` well below the margin this
/// never escapes the arena.
///
/// Health state never halts motion: dead and recovered agents keep moving,
/// only their rendering differs.
#[derive(Clone, Debug)]
pub struct MotionField {
    pub arena: Arena,
    /// Arena units per simulated-time unit.
    pub speed: f32,
}

impl MotionField {
    pub fn new(arena: Arena, speed: f32) -> Self {
        Self { arena, speed }
    }

    /// Move every agent by `velocity * speed * dt` and reflect at the walls.
    pub fn advance(&self, store: &mut PopulationStore, dt: f64) {
        let step = self.speed * dt as f32;
        for i in 0..store.count {
            let v = store.velocity[i];
            let p = &mut store.position[i];
            p.x += v.x * step;
            p.y += v.y * step;

            if !self.arena.contains_axis(p.x) {
                store.velocity[i].x = -v.x;
            }
            if !self.arena.contains_axis(p.y) {
                store.velocity[i].y = -v.y;
            }
        }
    }

    /// Surface-scaled position of one agent, for rendering.
    #[inline]
    pub fn surface_position(
        &self,
        store:  &PopulationStore,
        agent:  AgentId,
        width:  f32,
        height: f32,
    ) -> Vec2 {
        self.arena.to_surface(store.position[agent.index()], width, height)
    }
}
