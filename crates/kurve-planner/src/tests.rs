//! Unit tests for kurve-planner.
//!
//! Scenarios use the classic arena: 800×600, speed 2, turn radius 40,
//! collision radius 2, two steps of 40 units (20 ticks each).

use kurve_agent::{Agent, AgentSpec};
use kurve_core::{AgentId, Bounds, Kinematics, Tick, Vec2};
use kurve_behavior::Snapshot;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn kin() -> Kinematics {
    Kinematics::from_turn_radius(2.0, 40.0, 2.0).unwrap()
}

fn agent(id: u32, x: f64, y: f64, heading_deg: f64) -> Agent {
    AgentSpec::new(kin())
        .at(Vec2::new(x, y))
        .facing(heading_deg.to_radians())
        .build(AgentId(id), 0)
        .unwrap()
}

/// A second agent whose trail is a vertical line at `x` from `y0` to `y1`.
fn vertical_trail(id: u32, x: f64, y0: f64, y1: f64) -> Agent {
    let mut a = agent(id, x, y0, 90.0);
    while a.pos.y < y1 {
        a.advance(kurve_core::Action::Straight);
    }
    a
}

fn snapshot<'a>(agents: &'a [Agent], active: &'a [bool]) -> Snapshot<'a> {
    Snapshot::new(Tick(0), Bounds::from_size(800.0, 600.0), agents, active)
}

// ── Sequences ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod sequence {
    use rustc_hash::FxHashSet;

    use crate::enumerate_sequences;

    #[test]
    fn counts_are_powers_of_three() {
        for n in 1..=4 {
            let seqs = enumerate_sequences(n);
            assert_eq!(seqs.len(), 3usize.pow(n as u32));
            assert!(seqs.iter().all(|s| s.len() == n));
            let distinct: FxHashSet<_> = seqs.iter().collect();
            assert_eq!(distinct.len(), seqs.len());
        }
    }

    #[test]
    fn order_is_fixed() {
        assert_eq!(enumerate_sequences(3), enumerate_sequences(3));
        use kurve_core::Action::*;
        assert_eq!(enumerate_sequences(2)[0], vec![Straight, Straight]);
    }
}

// ── Config ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod config {
    use super::kin;
    use crate::{PlannerConfig, PlannerError, ReplanPeriod, StepLength};

    #[test]
    fn default_cadence() {
        let c = PlannerConfig::default().cadence(&kin()).unwrap();
        assert_eq!(c.ticks_per_step, 20);
        assert_eq!(c.horizon, 40);
        assert_eq!(c.replan_period, 40);
        // One replanning interval decays by exactly the discount factor.
        assert!((c.discount(40) - 0.95).abs() < 1e-12);
        assert!((c.gamma().powi(40) - 0.95).abs() < 1e-12);
        assert_eq!(c.discount(0), 1.0);
        assert_eq!(c.discount(1000), c.discount(40));
    }

    #[test]
    fn fractional_replan_period_is_in_steps() {
        let cfg = PlannerConfig { replan_period: ReplanPeriod::Steps(0.5), ..Default::default() };
        assert_eq!(cfg.cadence(&kin()).unwrap().replan_period, 10);
    }

    #[test]
    fn replan_period_beyond_horizon_rejected() {
        let cfg = PlannerConfig { replan_period: ReplanPeriod::Ticks(41), ..Default::default() };
        assert!(matches!(cfg.cadence(&kin()), Err(PlannerError::Config(_))));
    }

    #[test]
    fn zero_replan_period_rejected() {
        let cfg = PlannerConfig { replan_period: ReplanPeriod::Ticks(0), ..Default::default() };
        assert!(cfg.cadence(&kin()).is_err());
    }

    #[test]
    fn sub_tick_step_rejected() {
        let cfg = PlannerConfig { step_length: StepLength::Distance(1.0), ..Default::default() };
        assert!(cfg.cadence(&kin()).is_err());
        let cfg = PlannerConfig { step_length: StepLength::Ticks(5), ..Default::default() };
        assert_eq!(cfg.cadence(&kin()).unwrap().horizon, 10);
    }

    #[test]
    fn bad_discount_and_steps_rejected() {
        let k = kin();
        assert!(PlannerConfig { discount_factor: 0.0, ..Default::default() }.cadence(&k).is_err());
        assert!(PlannerConfig { discount_factor: 1.5, ..Default::default() }.cadence(&k).is_err());
        assert!(PlannerConfig { steps: 0, ..Default::default() }.cadence(&k).is_err());
        assert!(PlannerConfig { wall_penalty: -1.0, ..Default::default() }.cadence(&k).is_err());
    }
}

// ── Search ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod search {
    use kurve_core::Action::{self, *};

    use super::*;
    use crate::{LookaheadPlanner, PlannerConfig, search};

    fn planner(seed: u64) -> LookaheadPlanner {
        LookaheadPlanner::new(PlannerConfig::default(), &kin(), kurve_core::AgentRng::from_seed(seed)).unwrap()
    }

    #[test]
    fn open_field_is_a_nine_way_tie() {
        let agents = [agent(0, 400.0, 300.0, 0.0)];
        let r = planner(0).evaluate(&agents[0], &snapshot(&agents, &[true]), true).unwrap();
        assert_eq!(r.best_score, 0.0);
        assert_eq!(r.winners.len(), 9);
        assert_eq!(r.pruned, 0);
    }

    #[test]
    fn heading_into_a_wall_requires_turning_first() {
        let agents = [agent(0, 400.0, 60.0, -90.0)];
        let r = planner(0).evaluate(&agents[0], &snapshot(&agents, &[true]), true).unwrap();
        assert_eq!(r.best_score, 0.0);
        let expected: Vec<Vec<Action>> =
            vec![vec![Left, Left], vec![Left, Straight], vec![Right, Straight], vec![Right, Right]];
        let mut winners = r.winners.clone();
        winners.sort();
        assert_eq!(winners, expected);
        assert!(r.pruned > 0);
    }

    #[test]
    fn trail_ahead_prefers_sustained_turns() {
        let agents = [agent(0, 400.0, 300.0, 0.0), vertical_trail(1, 440.0, 200.0, 400.0)];
        let r = planner(0).evaluate(&agents[0], &snapshot(&agents, &[true, true]), true).unwrap();
        assert!(r.best_score < 0.0);
        assert!(
            r.winners.iter().all(|w| *w == vec![Left, Left] || *w == vec![Right, Right]),
            "winners {:?}",
            r.winners
        );
    }

    #[test]
    fn own_recent_trail_is_not_an_obstacle() {
        let mut a = agent(0, 100.0, 300.0, 0.0);
        for _ in 0..50 {
            a.advance(Straight);
        }
        assert_eq!(search::own_trail_trim(&a), 3);
        let agents = [a];
        let r = planner(0).evaluate(&agents[0], &snapshot(&agents, &[true]), true).unwrap();
        assert_eq!(r.best_score, 0.0);
        assert!(r.winners.contains(&vec![Straight, Straight]));
    }

    #[test]
    fn disabled_agents_trails_still_count() {
        let agents = [agent(0, 400.0, 300.0, 0.0), vertical_trail(1, 440.0, 200.0, 400.0)];
        let p = planner(0);
        let live = p.evaluate(&agents[0], &snapshot(&agents, &[true, true]), true).unwrap();
        let dead = p.evaluate(&agents[0], &snapshot(&agents, &[true, false]), true).unwrap();
        assert_eq!(live, dead);
    }

    #[test]
    fn pruning_does_not_change_the_winners() {
        let scenarios = [
            vec![agent(0, 400.0, 60.0, -90.0)],
            vec![agent(0, 400.0, 300.0, 0.0), vertical_trail(1, 440.0, 200.0, 400.0)],
            vec![agent(0, 760.0, 40.0, -30.0), vertical_trail(1, 700.0, 20.0, 200.0)],
        ];
        let p = planner(0);
        for agents in &scenarios {
            let active = vec![true; agents.len()];
            let ctx = snapshot(agents, &active);
            let pruned = p.evaluate(&agents[0], &ctx, true).unwrap();
            let full = p.evaluate(&agents[0], &ctx, false).unwrap();
            assert_eq!(pruned.best_score, full.best_score);
            assert_eq!(pruned.winners, full.winners);
            assert_eq!(full.pruned, 0);
        }
    }
}

// ── Planner policy ────────────────────────────────────────────────────────────

#[cfg(test)]
mod planner {
    use kurve_behavior::Policy;
    use kurve_core::{Action, AgentRng};

    use super::*;
    use crate::{LookaheadPlanner, PlannerConfig, ReplanPeriod};

    fn run(cfg: PlannerConfig, seed: u64, ticks: usize) -> (Vec<Action>, LookaheadPlanner) {
        let mut a = agent(0, 400.0, 300.0, 0.0);
        let mut p = LookaheadPlanner::new(cfg, &a.kin, AgentRng::from_seed(seed)).unwrap();
        let mut actions = Vec::new();
        for _ in 0..ticks {
            let action = {
                let agents = std::slice::from_ref(&a);
                p.decide(&a, &snapshot(agents, &[true])).unwrap()
            };
            a.advance(action);
            actions.push(action);
        }
        (actions, p)
    }

    #[test]
    fn same_seed_same_plans() {
        let (a1, p1) = run(PlannerConfig::default(), 42, 120);
        let (a2, p2) = run(PlannerConfig::default(), 42, 120);
        assert_eq!(a1, a2);
        assert_eq!(p1.last_score(), p2.last_score());
        assert_eq!(p1.plans_made(), p2.plans_made());
    }

    #[test]
    fn candidates_cover_every_sequence() {
        let cfg = PlannerConfig { steps: 3, ..Default::default() };
        let (_, p) = run(cfg, 1, 1);
        assert_eq!(p.sequences().len(), 27);
        assert!(p.sequences().iter().all(|s| s.len() == 3));
    }

    #[test]
    fn plans_once_per_horizon_by_default() {
        let (_, p) = run(PlannerConfig::default(), 1, 80);
        assert_eq!(p.plans_made(), 2);
    }

    #[test]
    fn replans_on_its_cadence() {
        let cfg = PlannerConfig { replan_period: ReplanPeriod::Ticks(5), ..Default::default() };
        let (_, p) = run(cfg, 1, 20);
        assert_eq!(p.plans_made(), 4);
    }

    #[test]
    fn plan_holds_each_step_for_ticks_per_step() {
        let (actions, _) = run(PlannerConfig::default(), 7, 40);
        assert!(actions[..20].iter().all(|&x| x == actions[0]));
        assert!(actions[20..].iter().all(|&x| x == actions[20]));
    }

    #[test]
    fn first_decision_plans_immediately() {
        let (_, p) = run(PlannerConfig::default(), 3, 1);
        assert_eq!(p.plans_made(), 1);
        assert_eq!(p.queued().count(), 39);
        assert_eq!(p.last_score(), Some(0.0));
    }
}
