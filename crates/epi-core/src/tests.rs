//! Unit tests for epi-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod vec2 {
    use crate::{Arena, Vec2};

    #[test]
    fn zero_distance() {
        let p = Vec2::new(12.5, 40.0);
        assert_eq!(p.distance(p), 0.0);
    }

    #[test]
    fn pythagorean_distance() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
    }

    #[test]
    fn unit_heading_from_angle() {
        let v = Vec2::from_angle(0.0);
        assert!((v.x - 1.0).abs() < 1e-6);
        assert!(v.y.abs() < 1e-6);
    }

    #[test]
    fn arena_interior_bounds() {
        let arena = Arena::new(100.0, 5.0);
        assert_eq!(arena.low(), 5.0);
        assert_eq!(arena.high(), 95.0);
        assert!(arena.contains_axis(50.0));
        assert!(!arena.contains_axis(4.9));
        assert!(!arena.contains_axis(95.1));
    }

    #[test]
    fn surface_scaling() {
        let arena = Arena::new(100.0, 5.0);
        let p = arena.to_surface(Vec2::new(50.0, 25.0), 800.0, 400.0);
        assert_eq!(p.x, 400.0);
        assert_eq!(p.y, 100.0);
    }
}

#[cfg(test)]
mod time {
    use crate::{Sampler, SimClock};

    #[test]
    fn clock_advance() {
        let mut clock = SimClock::new();
        assert_eq!(clock.time, 0.0);
        clock.advance(0.25);
        clock.advance(0.25);
        assert_eq!(clock.tick, 2);
        assert!((clock.time - 0.5).abs() < 1e-12);
    }

    #[test]
    fn sampler_fires_at_time_zero() {
        // The seed state is sampled before any interval has elapsed.
        let mut s = Sampler::new(1.0);
        assert_eq!(s.poll(0.0), Some(0));
    }

    #[test]
    fn sampler_one_snapshot_per_interval() {
        let mut s = Sampler::new(1.0);
        assert_eq!(s.poll(0.0), Some(0));
        // Many physics ticks inside the same interval: no further snapshot.
        assert_eq!(s.poll(0.25), None);
        assert_eq!(s.poll(0.5), None);
        assert_eq!(s.poll(0.99), None);
        // Crossing the boundary emits exactly one.
        assert_eq!(s.poll(1.01), Some(1));
        assert_eq!(s.poll(1.5), None);
    }

    #[test]
    fn sampler_step_time_is_boundary() {
        let s = Sampler::new(0.5);
        assert_eq!(s.step_time(4), 2.0);
    }

    #[test]
    fn sampler_skipped_intervals_collapse() {
        // A large dt can jump several boundaries; only the latest step fires.
        let mut s = Sampler::new(1.0);
        assert_eq!(s.poll(0.0), Some(0));
        assert_eq!(s.poll(3.2), Some(3));
        assert_eq!(s.poll(3.4), None);
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn chance_extremes() {
        let mut rng = SimRng::seeded(1);
        assert!(!rng.chance(0.0));
        assert!(rng.chance(1.0));
    }

    #[test]
    fn unit_heading_has_unit_length() {
        let mut rng = SimRng::seeded(7);
        for _ in 0..100 {
            let v = rng.unit_heading();
            let len = (v.x * v.x + v.y * v.y).sqrt();
            assert!((len - 1.0).abs() < 1e-5, "got length {len}");
        }
    }

    #[test]
    fn position_in_stays_in_bounds() {
        let mut rng = SimRng::seeded(99);
        for _ in 0..100 {
            let p = rng.position_in(5.0, 95.0);
            assert!((5.0..=95.0).contains(&p.x));
            assert!((5.0..=95.0).contains(&p.y));
        }
    }

    #[test]
    fn seeded_streams_are_reproducible() {
        let mut a = SimRng::seeded(42);
        let mut b = SimRng::seeded(42);
        for _ in 0..20 {
            assert_eq!(a.gen_range(0..1_000_000), b.gen_range(0..1_000_000));
        }
    }
}

#[cfg(test)]
mod config {
    use crate::{EpiConfig, PpeParams};

    #[test]
    fn default_config_is_valid() {
        assert!(EpiConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_probability_above_one() {
        let cfg = EpiConfig { p_infection: 1.3, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_negative_probability() {
        let cfg = EpiConfig { p_death: -0.01, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_ppe_probability_out_of_range() {
        let cfg = EpiConfig {
            ppe: Some(PpeParams { p_mask: 2.0, p_gloves: 0.5 }),
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_seed_count_above_population() {
        let cfg = EpiConfig { count: 10, n_infected: 11, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_empty_population() {
        let cfg = EpiConfig { count: 0, n_infected: 0, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_margin_wider_than_arena() {
        let cfg = EpiConfig {
            arena: crate::Arena::new(10.0, 5.0),
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }
}
