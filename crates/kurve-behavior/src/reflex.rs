//! `WallEvader`: a policy that only reacts to walls.

use kurve_agent::Agent;
use kurve_core::{Action, Bounds, Wall};
use tracing::{trace, warn};

use crate::evasion::{self, EvasionConfig};
use crate::{BehaviorError, BehaviorResult, Policy, Snapshot};

/// Ties between the two turns closer than this go to `Right`.
const TIE_EPSILON: f64 = 1e-9;

/// Goes straight whenever the evasion reflex allows it and turns only when a
/// wall forces it.  Ignores trails entirely.
#[derive(Clone, Debug)]
pub struct WallEvader {
    /// Evasive turns are planned on `safety_factor × turn radius`.
    pub safety_factor: f64,
    pub evasion: EvasionConfig,
}

impl WallEvader {
    pub const DEFAULT_SAFETY_FACTOR: f64 = 1.05;

    pub fn new(safety_factor: f64, evasion: EvasionConfig) -> BehaviorResult<Self> {
        if !(safety_factor.is_finite() && safety_factor >= 1.0) {
            return Err(BehaviorError::Config(format!(
                "safety_factor must be at least 1, got {safety_factor}"
            )));
        }
        evasion.validate()?;
        Ok(Self { safety_factor, evasion })
    }

    /// Radius the reflex assumes for `agent`'s evasive turns.
    #[inline]
    pub fn evasion_radius(&self, agent: &Agent) -> f64 {
        agent.turn_radius() * self.safety_factor
    }

    /// Pick the action for `agent` inside `bounds`.
    pub fn choose(&self, agent: &Agent, bounds: &Bounds) -> Action {
        let radius = self.evasion_radius(agent);
        if bounds.contains(agent.pos, 2.0 * radius) {
            return Action::Straight;
        }

        let admissible = evasion::admissible_actions(agent, bounds, radius, &self.evasion);
        if admissible.is_empty() {
            warn!(agent = %agent.id, pos = %agent.pos, "unable to evade the walls");
            return Action::Straight;
        }
        if admissible.contains(Action::Straight) {
            return Action::Straight;
        }
        match (admissible.contains(Action::Left), admissible.contains(Action::Right)) {
            (true, false) => Action::Left,
            (false, true) => Action::Right,
            _ => self.farther_turn(agent, bounds, radius),
        }
    }

    /// Of the two turns, the one whose next position is farther from the
    /// nearest critical wall.  Falls back to `Right` on a tie.
    fn farther_turn(&self, agent: &Agent, bounds: &Bounds, radius: f64) -> Action {
        let close = evasion::close_walls(agent, bounds, radius, &self.evasion);
        let critical = evasion::critical_walls(agent, close);
        let clearance = |action: Action| {
            let p = agent.peek(action);
            Wall::ALL
                .iter()
                .zip(critical)
                .filter(|(_, crit)| *crit)
                .map(|(&w, _)| bounds.distance_to(w, p))
                .fold(f64::INFINITY, f64::min)
        };
        let (left, right) = (clearance(Action::Left), clearance(Action::Right));
        trace!(agent = %agent.id, left, right, "turn clearances");
        if left > right + TIE_EPSILON { Action::Left } else { Action::Right }
    }
}

impl Default for WallEvader {
    fn default() -> Self {
        Self {
            safety_factor: Self::DEFAULT_SAFETY_FACTOR,
            evasion: EvasionConfig::default(),
        }
    }
}

impl Policy for WallEvader {
    fn decide(&mut self, agent: &Agent, ctx: &Snapshot<'_>) -> BehaviorResult<Action> {
        Ok(self.choose(agent, &ctx.bounds))
    }

    fn name(&self) -> &str {
        "wall-evader"
    }
}
