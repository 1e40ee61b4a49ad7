//! Unit tests for kurve-behavior.
//!
//! Wall scenarios use an 800×600 arena, speed 10 and an evasion radius of 50.

use kurve_agent::{Agent, AgentSpec};
use kurve_core::{AgentId, Bounds, Kinematics, Tick, Vec2};

use crate::Snapshot;

// ── Helpers ───────────────────────────────────────────────────────────────────

const R: f64 = 50.0;

fn bounds() -> Bounds {
    Bounds::from_size(800.0, 600.0)
}

fn agent_at(x: f64, y: f64, heading_deg: f64) -> Agent {
    let kin = Kinematics::from_turn_radius(10.0, R, 1.0).unwrap();
    AgentSpec::new(kin)
        .at(Vec2::new(x, y))
        .facing(heading_deg.to_radians())
        .build(AgentId(0), 0)
        .unwrap()
}

/// Left-right mirror image of `(x, y, heading)` in the 800-wide arena.
fn mirrored(x: f64, y: f64, heading_deg: f64) -> Agent {
    agent_at(800.0 - x, y, 180.0 - heading_deg)
}

fn snapshot<'a>(agents: &'a [Agent], active: &'a [bool]) -> Snapshot<'a> {
    Snapshot::new(Tick(0), bounds(), agents, active)
}

// ── Evasion ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod evasion {
    use kurve_core::{Action, ActionSet, Vec2};

    use super::*;
    use crate::evasion::{EvasionConfig, TurnState, admissible_actions, classify_turn, turn_center};

    fn admissible(agent: &Agent) -> ActionSet {
        admissible_actions(agent, &bounds(), R, &EvasionConfig::default())
    }

    #[test]
    fn centre_of_arena_allows_everything() {
        assert_eq!(admissible(&agent_at(500.0, 300.0, -60.0)), ActionSet::ALL);
        assert_eq!(admissible(&agent_at(400.0, 300.0, 0.0)), ActionSet::ALL);
    }

    #[test]
    fn approaching_top_near_corner_requires_right() {
        let a = agent_at(600.0, R - 5.0, -80.0);
        assert_eq!(admissible(&a), ActionSet::only(Action::Right));
    }

    #[test]
    fn facing_top_head_on_requires_a_turn() {
        let a = agent_at(600.0, R + 5.0, -90.0);
        assert_eq!(admissible(&a), ActionSet::TURNS);
    }

    #[test]
    fn exactly_one_radius_from_top_requires_a_turn() {
        // The straight tick after this one carries both turn circles onto
        // the wall, so going straight is no longer safe.
        let a = agent_at(400.0, R, -90.0);
        assert_eq!(admissible(&a), ActionSet::TURNS);

        let m = mirrored(400.0, R, -90.0);
        assert_eq!(admissible(&m), ActionSet::TURNS);
    }

    #[test]
    fn exactly_one_radius_from_top_in_right_corner_only_left() {
        // A right turn would swing through the right wall.
        let a = agent_at(750.0, R, -90.0);
        assert_eq!(admissible(&a), ActionSet::only(Action::Left));

        // Mirrored into the left corner, the left turn is the one ruled out.
        let m = mirrored(750.0, R, -90.0);
        assert_eq!(admissible(&m), ActionSet::only(Action::Right));
    }

    #[test]
    fn mirrored_corner_requires_left() {
        let a = mirrored(600.0, R - 5.0, -80.0);
        assert_eq!(admissible(&a), ActionSet::only(Action::Left));
    }

    #[test]
    fn mirror_symmetry_across_scenarios() {
        let scenarios = [
            (600.0, 45.0, -80.0),
            (600.0, 55.0, -90.0),
            (400.0, R, -90.0),
            (750.0, R, -90.0),
            (500.0, 300.0, -60.0),
            (750.0, 65.0, -60.0),
            (600.0, 50.0, -95.0),
            (400.0, 1.0, 0.573),
            (500.0, 20.0, 90.0),
        ];
        for (x, y, h) in scenarios {
            let original = admissible(&agent_at(x, y, h));
            let mirror = admissible(&mirrored(x, y, h));
            assert_eq!(mirror, original.mirrored(), "scenario ({x}, {y}, {h}°)");
        }
    }

    #[test]
    fn close_but_receding_filters_by_dry_run() {
        // Skimming the top wall while drifting away from it: a left turn
        // would cross the wall next tick.
        let a = agent_at(400.0, 1.0, 0.573);
        assert_eq!(admissible(&a), ActionSet::only(Action::Straight).with(Action::Right));

        let b = agent_at(500.0, 20.0, 90.0);
        assert_eq!(admissible(&b), ActionSet::ALL);
    }

    #[test]
    fn too_late_yields_empty_set() {
        let a = agent_at(750.0, 65.0, -60.0);
        assert!(admissible(&a).is_empty());
    }

    #[test]
    fn turn_centres_lie_beside_the_heading() {
        let a = agent_at(0.0, 0.0, 0.0);
        let w = (R * R - 25.0).sqrt();
        let left = turn_center(&a, Action::Left, R);
        let right = turn_center(&a, Action::Right, R);
        assert!(left.distance(Vec2::new(-5.0, -w)) < 1e-9, "left centre {left}");
        assert!(right.distance(Vec2::new(-5.0, w)) < 1e-9, "right centre {right}");
    }

    #[test]
    fn touching_the_wall_makes_a_turn_impossible() {
        // Right-turn circle's right extremal point lands on x = 800.
        let offset = (R * R - 25.0).sqrt();
        let a = agent_at(800.0 - R - offset, 300.0, -90.0);
        let right = classify_turn(&a, &bounds(), Action::Right, R, [false; 4]);
        let left = classify_turn(&a, &bounds(), Action::Left, R, [false; 4]);
        assert_eq!(right, TurnState::Impossible);
        assert_eq!(left, TurnState::Possible);
    }

    #[test]
    fn invalid_close_factor_rejected() {
        assert!(EvasionConfig { close_factor: 0.0 }.validate().is_err());
        EvasionConfig::default().validate().unwrap();
    }
}

// ── WallEvader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod reflex {
    use kurve_core::Action;

    use super::*;
    use crate::{BehaviorError, EvasionConfig, Policy, WallEvader};

    fn evader() -> WallEvader {
        WallEvader::new(1.0, EvasionConfig::default()).unwrap()
    }

    #[test]
    fn centre_goes_straight() {
        let agents = [agent_at(400.0, 300.0, 17.0)];
        let action = evader().decide(&agents[0], &snapshot(&agents, &[true])).unwrap();
        assert_eq!(action, Action::Straight);
    }

    #[test]
    fn single_admissible_turn_is_taken() {
        assert_eq!(evader().choose(&agent_at(600.0, 45.0, -80.0), &bounds()), Action::Right);
        assert_eq!(evader().choose(&mirrored(600.0, 45.0, -80.0), &bounds()), Action::Left);
    }

    #[test]
    fn both_turns_prefer_more_clearance() {
        // Heading slightly left of straight up: turning left gains more room.
        assert_eq!(evader().choose(&agent_at(600.0, 50.0, -95.0), &bounds()), Action::Left);
        assert_eq!(evader().choose(&mirrored(600.0, 50.0, -95.0), &bounds()), Action::Right);
    }

    #[test]
    fn symmetric_head_on_prefers_right() {
        assert_eq!(evader().choose(&agent_at(600.0, 55.0, -90.0), &bounds()), Action::Right);
    }

    #[test]
    fn doomed_agent_goes_straight() {
        assert_eq!(evader().choose(&agent_at(750.0, 65.0, -60.0), &bounds()), Action::Straight);
    }

    #[test]
    fn safety_factor_below_one_rejected() {
        assert!(matches!(
            WallEvader::new(0.5, EvasionConfig::default()),
            Err(BehaviorError::Config(_))
        ));
        assert_eq!(WallEvader::default().safety_factor, 1.05);
    }
}

// ── RandomSteering ────────────────────────────────────────────────────────────

#[cfg(test)]
mod random {
    use kurve_core::{Action, AgentRng};

    use super::*;
    use crate::{Policy, RandomSteering, RandomSteeringConfig};

    fn cfg() -> RandomSteeringConfig {
        RandomSteeringConfig { safety_factor: 1.0, ..RandomSteeringConfig::default() }
    }

    fn run(seed: u64, ticks: usize) -> Vec<Action> {
        let mut policy = RandomSteering::new(cfg(), AgentRng::from_seed(seed)).unwrap();
        let mut agent = agent_at(400.0, 300.0, 0.0);
        let mut actions = Vec::with_capacity(ticks);
        for _ in 0..ticks {
            let action = {
                let agents = std::slice::from_ref(&agent);
                policy.decide(&agent, &snapshot(agents, &[true])).unwrap()
            };
            agent.advance(action);
            actions.push(action);
        }
        actions
    }

    #[test]
    fn same_seed_same_manoeuvres() {
        assert_eq!(run(11, 300), run(11, 300));
    }

    #[test]
    fn manoeuvres_are_held_for_several_ticks() {
        let actions = run(3, 300);
        let switches = actions.windows(2).filter(|w| w[0] != w[1]).count();
        assert!(switches < 150, "{switches} switches in 300 ticks");
    }

    #[test]
    fn forced_action_overrides_manoeuvre() {
        let mut policy = RandomSteering::new(cfg(), AgentRng::from_seed(0)).unwrap();
        let agents = [agent_at(600.0, 45.0, -80.0)];
        for _ in 0..10 {
            let action = policy.decide(&agents[0], &snapshot(&agents, &[true])).unwrap();
            assert_eq!(action, Action::Right);
        }
    }

    #[test]
    fn inverted_range_rejected() {
        let bad = RandomSteeringConfig { turn_angles_deg: (90.0, 10.0), ..cfg() };
        assert!(RandomSteering::new(bad, AgentRng::from_seed(0)).is_err());
    }
}

// ── Scripted ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scripted {
    use kurve_core::Action;

    use super::*;
    use crate::{FixedActions, Policy, Straight};

    #[test]
    fn fixed_actions_loop() {
        let agents = [agent_at(400.0, 300.0, 0.0)];
        let ctx = snapshot(&agents, &[true]);
        let mut p = FixedActions::new(vec![Action::Left, Action::Straight, Action::Right]).unwrap();
        let got: Vec<_> = (0..7).map(|_| p.decide(&agents[0], &ctx).unwrap()).collect();
        use Action::*;
        assert_eq!(got, vec![Left, Straight, Right, Left, Straight, Right, Left]);
    }

    #[test]
    fn empty_script_rejected() {
        assert!(FixedActions::new(Vec::new()).is_err());
    }

    #[test]
    fn straight_is_straight() {
        let agents = [agent_at(400.0, 300.0, 0.0)];
        let mut p: Box<dyn Policy> = Box::new(Straight);
        assert_eq!(p.decide(&agents[0], &snapshot(&agents, &[true])).unwrap(), Action::Straight);
        assert_eq!(p.name(), "straight");
    }
}

// ── Snapshot ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod context {
    use super::*;

    #[test]
    fn active_and_other_agents() {
        let kin = Kinematics::from_turn_radius(2.0, 40.0, 2.0).unwrap();
        let agents: Vec<Agent> = (0..3)
            .map(|i| {
                AgentSpec::new(kin)
                    .at(Vec2::new(100.0 * (i + 1) as f64, 100.0))
                    .facing(0.0)
                    .build(AgentId(i), 0)
                    .unwrap()
            })
            .collect();
        let active = [true, false, true];
        let ctx = snapshot(&agents, &active);

        assert!(ctx.is_active(AgentId(0)));
        assert!(!ctx.is_active(AgentId(1)));
        assert!(!ctx.is_active(AgentId(9)));
        assert_eq!(ctx.agent(AgentId(2)).map(|a| a.id), Some(AgentId(2)));
        assert_eq!(ctx.active_agents().map(|a| a.id.0).collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(ctx.others(AgentId(1)).map(|a| a.id.0).collect::<Vec<_>>(), vec![0, 2]);
    }
}
