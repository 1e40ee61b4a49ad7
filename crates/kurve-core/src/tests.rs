//! Unit tests for kurve-core primitives.

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
    fn default_is_invalid() {
        assert_eq!(AgentId::default(), AgentId::INVALID);
        assert_eq!(AgentId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod geo {
    use std::f64::consts::FRAC_PI_2;

    use crate::{Bounds, Vec2, Wall};

    #[test]
    fn gap_marker_is_not_finite() {
        assert!(Vec2::GAP.is_gap());
        assert!(!Vec2::new(1.0, 2.0).is_gap());
        assert_ne!(Vec2::GAP, Vec2::GAP);
    }

    #[test]
    fn heading_unit_vectors() {
        let east = Vec2::from_angle(0.0);
        assert!((east.x - 1.0).abs() < 1e-12 && east.y.abs() < 1e-12);
        // +π/2 points down the screen.
        let down = Vec2::from_angle(FRAC_PI_2);
        assert!(down.x.abs() < 1e-12 && (down.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn wall_distances_and_normals() {
        let b = Bounds::from_size(800.0, 600.0);
        let p = Vec2::new(100.0, 50.0);
        assert_eq!(b.distance_to(Wall::Left, p), 100.0);
        assert_eq!(b.distance_to(Wall::Right, p), 700.0);
        assert_eq!(b.distance_to(Wall::Top, p), 50.0);
        assert_eq!(b.distance_to(Wall::Bottom, p), 550.0);
        assert_eq!(Wall::Bottom.normal(), Vec2::new(0.0, 1.0));
        assert_eq!(Wall::Top.normal(), Vec2::new(0.0, -1.0));
    }

    #[test]
    fn contains_is_strict_and_respects_margin() {
        let b = Bounds::from_size(100.0, 100.0);
        assert!(b.contains(Vec2::new(50.0, 50.0), 0.0));
        assert!(!b.contains(Vec2::new(0.0, 50.0), 0.0));
        assert!(!b.contains(Vec2::new(3.0, 50.0), 3.0));
        assert!(b.contains(Vec2::new(3.5, 50.0), 3.0));
        assert!(!b.contains(Vec2::GAP, 0.0));
    }

    #[test]
    fn touching_a_wall_is_a_hit() {
        let b = Bounds::from_size(100.0, 100.0);
        assert!(b.hits_wall(Vec2::new(100.0, 50.0)));
        assert!(b.hits_wall(Vec2::new(50.0, 0.0)));
        assert!(!b.hits_wall(Vec2::new(99.9, 0.1)));
    }

    #[test]
    fn invalid_bounds_detected() {
        assert!(Bounds::from_size(10.0, 10.0).is_valid());
        assert!(!Bounds::new(0.0, 0.0, 0.0, 10.0).is_valid());
        assert!(!Bounds::new(0.0, f64::INFINITY, 0.0, 10.0).is_valid());
    }
}

#[cfg(test)]
mod action {
    use crate::{Action, ActionSet, Steering};

    #[test]
    fn left_takes_precedence_over_right() {
        let both = Steering { left: true, right: true };
        assert_eq!(both.resolve(), Action::Left);
        assert_eq!(Steering { left: false, right: true }.resolve(), Action::Right);
        assert_eq!(Steering::default().resolve(), Action::Straight);
    }

    #[test]
    fn steering_from_action_roundtrips() {
        for a in Action::ALL {
            assert_eq!(Steering::from(a).resolve(), a);
        }
    }

    #[test]
    fn action_set_iterates_in_canonical_order() {
        let set: ActionSet = [Action::Right, Action::Left].into_iter().collect();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Action::Left, Action::Right]);
        assert_eq!(set, ActionSet::TURNS);
        assert_eq!(set.len(), 2);
        assert!(!set.contains(Action::Straight));
    }

    #[test]
    fn mirrored_set_swaps_turns() {
        let set = ActionSet::only(Action::Right).with(Action::Straight);
        let mirrored = set.mirrored();
        assert!(mirrored.contains(Action::Left));
        assert!(mirrored.contains(Action::Straight));
        assert!(!mirrored.contains(Action::Right));
        assert_eq!(ActionSet::EMPTY.mirrored(), ActionSet::EMPTY);
    }

    #[test]
    fn heading_signs() {
        assert_eq!(Action::Left.heading_sign(), -1.0);
        assert_eq!(Action::Straight.heading_sign(), 0.0);
        assert_eq!(Action::Right.heading_sign(), 1.0);
    }
}

#[cfg(test)]
mod config {
    use crate::{ArenaConfig, GapConfig, KurveError, Kinematics};

    #[test]
    fn turn_radius_roundtrip() {
        let kin = Kinematics::from_turn_radius(2.0, 40.0, 2.0).unwrap();
        assert!((kin.turn_radius() - 40.0).abs() < 1e-9);
    }

    #[test]
    fn zero_speed_rejected() {
        let kin = Kinematics { speed: 0.0, angular_step: 0.1, radius: 2.0 };
        assert!(matches!(kin.validate(), Err(KurveError::Config(_))));
    }

    #[test]
    fn zero_angular_step_rejected() {
        let kin = Kinematics { speed: 1.0, angular_step: 0.0, radius: 2.0 };
        assert!(kin.validate().is_err());
    }

    #[test]
    fn untraceable_turn_radius_rejected() {
        assert!(matches!(
            Kinematics::from_turn_radius(10.0, 1.0, 2.0),
            Err(KurveError::Geometry(_))
        ));
    }

    #[test]
    fn classic_arena_kinematics() {
        let cfg = ArenaConfig::classic(800.0, 600.0);
        cfg.validate().unwrap();
        let kin = cfg.classic_kinematics(30.0, 1.0, 2.0).unwrap();
        assert!((kin.speed - 2.0).abs() < 1e-12);
        assert!((kin.turn_radius() - 40.0).abs() < 1e-9);
        assert_eq!(cfg.spawn_separation, 20.0);
    }

    #[test]
    fn gap_config_validation() {
        GapConfig::classic(2.0).validate().unwrap();
        let bad = GapConfig { min_between: 10.0, max_between: 5.0, ..GapConfig::classic(2.0) };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn arena_without_room_rejected() {
        let mut cfg = ArenaConfig::classic(100.0, 100.0);
        cfg.spawn_margin = 60.0;
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.next(), Tick(11));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(3).since(Tick(5)), 0);
    }
}

#[cfg(test)]
mod rng {
    use crate::rng::{GAP_STREAM, POLICY_STREAM};
    use crate::{AgentId, AgentRng, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::new(12345, AgentId(0), GAP_STREAM);
        let mut r2 = AgentRng::new(12345, AgentId(0), GAP_STREAM);
        for _ in 0..100 {
            assert_eq!(r1.unit(), r2.unit());
        }
    }

    #[test]
    fn streams_differ() {
        let mut gaps = AgentRng::new(1, AgentId(0), GAP_STREAM);
        let mut policy = AgentRng::new(1, AgentId(0), POLICY_STREAM);
        assert_ne!(gaps.unit(), policy.unit());
    }

    #[test]
    fn uniform_in_bounds() {
        let mut rng = AgentRng::from_seed(0);
        for _ in 0..1000 {
            let v = rng.uniform(200.0, 1500.0);
            assert!((200.0..1500.0).contains(&v));
        }
    }

    #[test]
    fn sim_rng_heading_in_range() {
        let mut rng = SimRng::new(9);
        for _ in 0..1000 {
            let h = rng.heading();
            assert!((0.0..std::f64::consts::TAU).contains(&h));
        }
    }
}
