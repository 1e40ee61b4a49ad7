//! Scoring candidate sequences.

use kurve_agent::Agent;
use kurve_behavior::Snapshot;
use kurve_core::{Action, Bounds};
use kurve_spatial::{TrailIndex, TrailIndexBuilder};
use tracing::trace;

use crate::{Cadence, PlannerConfig, PlannerError, PlannerResult};

/// Outcome of scoring every candidate.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult {
    /// Highest score found (`≤ 0`).
    pub best_score: f64,
    /// Every sequence achieving `best_score`, in enumeration order.
    pub winners: Vec<Vec<Action>>,
    /// Candidates abandoned early by pruning.
    pub pruned: usize,
}

/// Own-trail entries excluded from the collidable set:
/// `ceil(2.5·radius / speed)`.
#[inline]
pub fn own_trail_trim(agent: &Agent) -> usize {
    (2.5 * agent.kin.radius / agent.kin.speed).ceil() as usize
}

/// Index of every trail in the snapshot that the planning agent could run
/// into, including its own trail minus the most recent points.
pub fn collidable_trails(agent: &Agent, ctx: &Snapshot<'_>) -> TrailIndex {
    let trim = own_trail_trim(agent);
    let mut builder = TrailIndexBuilder::new();
    for other in ctx.agents {
        if other.id == agent.id {
            builder.add_trail(other.id, agent.trail.without_recent(trim));
        } else {
            builder.add_trail(other.id, other.trail.points());
        }
    }
    builder.build()
}

/// Score every sequence in `sequences` for `agent` against `ctx`.
///
/// Pure: no randomness and no planner state, so identical inputs always give
/// identical results.  With `prune` set, candidates are abandoned as soon as
/// their running score drops below the best score so far; since penalties
/// only ever subtract, the winner set is the same either way.
pub fn evaluate(
    agent: &Agent,
    ctx: &Snapshot<'_>,
    sequences: &[Vec<Action>],
    cfg: &PlannerConfig,
    cadence: &Cadence,
    prune: bool,
) -> PlannerResult<SearchResult> {
    let index = collidable_trails(agent, ctx);
    let buffer = 2.0 * agent.kin.radius;

    let mut best = f64::NEG_INFINITY;
    let mut winners: Vec<usize> = Vec::new();
    let mut pruned = 0;

    for (i, seq) in sequences.iter().enumerate() {
        let Some((mut score, ghost)) = simulate(agent, seq, &ctx.bounds, cfg, cadence, prune.then_some(best))
        else {
            pruned += 1;
            continue;
        };

        if let Some(d) = index.first_conflict(ghost.trail.points(), buffer)? {
            let ticks = (d / agent.kin.speed) as usize;
            score -= cfg.trail_penalty * cadence.discount(ticks);
        }
        trace!(agent = %agent.id, ?seq, score, "candidate scored");

        if score > best {
            best = score;
            winners.clear();
            winners.push(i);
        } else if score == best {
            winners.push(i);
        }
    }

    if winners.is_empty() || !best.is_finite() {
        return Err(PlannerError::NoPlan { agent: agent.id });
    }
    Ok(SearchResult {
        best_score: best,
        winners: winners.into_iter().map(|i| sequences[i].clone()).collect(),
        pruned,
    })
}

/// Advance a ghost through `seq`, accumulating discounted wall penalties.
///
/// Returns `None` if the running score fell below `floor`.
fn simulate(
    agent: &Agent,
    seq: &[Action],
    bounds: &Bounds,
    cfg: &PlannerConfig,
    cadence: &Cadence,
    floor: Option<f64>,
) -> Option<(f64, Agent)> {
    let margin = agent.kin.radius;
    let mut ghost = agent.ghost();
    let mut score = 0.0;
    let mut t = 0;
    for &action in seq {
        for _ in 0..cadence.ticks_per_step {
            ghost.advance(action);
            if !bounds.contains(ghost.pos, margin) {
                score -= cfg.wall_penalty * cadence.discount(t);
            }
            t += 1;
            if floor.is_some_and(|f| score < f) {
                return None;
            }
        }
    }
    Some((score, ghost))
}
