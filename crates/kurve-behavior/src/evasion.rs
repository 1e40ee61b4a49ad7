//! Geometric wall-evasion reflex.
//!
//! Decides which of {Left, Straight, Right} keep a wall crash avoidable by
//! looking at the circle the agent would trace if it started turning now.
//!
//! ```text
//!   no wall within close_factor·R            → {L, S, R}
//!   close walls, none being approached       → actions whose 1-tick dry run
//!                                              stays strictly inside
//!   approaching a close ("critical") wall    → classify each turn direction:
//!       Impossible      some extremal point of the turn circle is out now
//!                       (touching a wall counts as out)
//!       ActionRequired  an extremal point facing a critical wall is out
//!                       after one more straight tick
//!       Possible        otherwise
//! ```
//!
//! The extremal points of a circle of radius `R` centred at `c` are
//! `c + R·n` for the four outward wall normals `n`, so the point facing
//! wall `w` is `c + R·w.normal()`.

use std::fmt;

use kurve_agent::Agent;
use kurve_core::{Action, ActionSet, Bounds, Vec2, Wall};
use tracing::debug;

use crate::{BehaviorError, BehaviorResult};

/// Extremal points closer than this to a wall count as outside it.
const WALL_TOLERANCE: f64 = 1e-9;

// ── Config ────────────────────────────────────────────────────────────────────

/// Reflex tuning.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EvasionConfig {
    /// A wall is close when its distance is at most `close_factor · R`.
    pub close_factor: f64,
}

impl EvasionConfig {
    pub fn validate(&self) -> BehaviorResult<()> {
        if !(self.close_factor.is_finite() && self.close_factor > 0.0) {
            return Err(BehaviorError::Config(format!(
                "close_factor must be positive, got {}",
                self.close_factor
            )));
        }
        Ok(())
    }
}

impl Default for EvasionConfig {
    fn default() -> Self {
        Self { close_factor: 2.5 }
    }
}

// ── TurnState ─────────────────────────────────────────────────────────────────

/// Feasibility of an evasive turn in one direction, ordered by severity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum TurnState {
    Possible,
    ActionRequired,
    Impossible,
}

impl fmt::Display for TurnState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TurnState::Possible => "possible",
            TurnState::ActionRequired => "required",
            TurnState::Impossible => "impossible",
        })
    }
}

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Walls within `close_factor · turn_radius` of the agent, in [`Wall::ALL`]
/// order.
pub fn close_walls(agent: &Agent, bounds: &Bounds, turn_radius: f64, cfg: &EvasionConfig) -> [bool; 4] {
    Wall::ALL.map(|w| bounds.distance_to(w, agent.pos) <= cfg.close_factor * turn_radius)
}

/// Close walls the agent is moving toward (non-negative heading projection on
/// the outward normal).
pub fn critical_walls(agent: &Agent, close: [bool; 4]) -> [bool; 4] {
    let dir = agent.direction();
    let mut critical = [false; 4];
    for (i, w) in Wall::ALL.iter().enumerate() {
        critical[i] = close[i] && w.normal().dot(dir) >= 0.0;
    }
    critical
}

/// Centre of the circle of `turn_radius` traced by turning toward `turn`,
/// anchored at the midpoint of the tick just travelled.
///
/// `turn` must be `Left` or `Right`.
pub fn turn_center(agent: &Agent, turn: Action, turn_radius: f64) -> Vec2 {
    let half = 0.5 * agent.kin.speed;
    let offset = (turn_radius * turn_radius - half * half).max(0.0).sqrt();
    let dir = agent.direction();
    // Heading rotated a quarter turn toward `turn`.
    let sign = turn.heading_sign();
    let normal = Vec2::new(-sign * dir.y, sign * dir.x);
    agent.pos - dir * half + normal * offset
}

/// Classify a turn toward `turn` given the critical walls.
pub fn classify_turn(
    agent: &Agent,
    bounds: &Bounds,
    turn: Action,
    turn_radius: f64,
    critical: [bool; 4],
) -> TurnState {
    let center = turn_center(agent, turn, turn_radius);
    let extremal = Wall::ALL.map(|w| center + w.normal() * turn_radius);

    if extremal.iter().any(|&p| !bounds.contains(p, WALL_TOLERANCE)) {
        return TurnState::Impossible;
    }
    let step = agent.velocity();
    let late = extremal
        .iter()
        .zip(critical)
        .any(|(&p, crit)| crit && !bounds.contains(p + step, WALL_TOLERANCE));
    if late { TurnState::ActionRequired } else { TurnState::Possible }
}

#[inline]
fn dry_run_inside(agent: &Agent, bounds: &Bounds, action: Action) -> bool {
    bounds.contains(agent.peek(action), 0.0)
}

// ── Admissible set ────────────────────────────────────────────────────────────

/// Actions that keep a wall crash avoidable for an agent whose evasive turns
/// trace circles of `turn_radius`.
///
/// An empty set means the crash can no longer be avoided; callers still have
/// to pick an action and conventionally go straight.
pub fn admissible_actions(
    agent: &Agent,
    bounds: &Bounds,
    turn_radius: f64,
    cfg: &EvasionConfig,
) -> ActionSet {
    let close = close_walls(agent, bounds, turn_radius, cfg);
    if !close.iter().any(|&c| c) {
        return ActionSet::ALL;
    }

    let critical = critical_walls(agent, close);
    if !critical.iter().any(|&c| c) {
        return Action::ALL
            .into_iter()
            .filter(|&a| dry_run_inside(agent, bounds, a))
            .collect();
    }

    let left = classify_turn(agent, bounds, Action::Left, turn_radius, critical);
    let right = classify_turn(agent, bounds, Action::Right, turn_radius, critical);
    debug!(agent = %agent.id, %left, %right, ?critical, "wall evasion turn states");

    use TurnState::*;
    match (left, right) {
        (Impossible, Impossible) => ActionSet::EMPTY,
        (Impossible, other) | (other, Impossible) => {
            let turn = if left == Impossible { Action::Right } else { Action::Left };
            let set = ActionSet::only(turn);
            if other == Possible && dry_run_inside(agent, bounds, Action::Straight) {
                set.with(Action::Straight)
            } else {
                set
            }
        }
        (ActionRequired, ActionRequired) => ActionSet::TURNS,
        _ => ActionSet::ALL,
    }
}
