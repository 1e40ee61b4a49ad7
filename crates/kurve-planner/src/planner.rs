//! `LookaheadPlanner`: the planning policy.

use std::collections::VecDeque;

use kurve_agent::Agent;
use kurve_behavior::{BehaviorResult, Policy, Snapshot};
use kurve_core::{Action, AgentRng, Kinematics};
use tracing::debug;

use crate::{Cadence, PlannerConfig, PlannerResult, SearchResult, enumerate_sequences, evaluate};

/// Plans `N` steps ahead, then follows the plan one action per tick.
///
/// ```text
///   Idle ──(queue empty or replan_period elapsed)──▶ Planning ──▶ Idle
/// ```
///
/// Ties between equally scored sequences are broken with the planner's own
/// RNG, so two planners built with the same seed make identical choices.
#[derive(Debug)]
pub struct LookaheadPlanner {
    cfg:       PlannerConfig,
    cadence:   Cadence,
    sequences: Vec<Vec<Action>>,
    rng:       AgentRng,

    queue:            VecDeque<Action>,
    ticks_since_plan: usize,
    plans_made:       u64,
    last_score:       Option<f64>,
}

impl LookaheadPlanner {
    /// Build a planner for an agent moving with `kin`.
    pub fn new(cfg: PlannerConfig, kin: &Kinematics, rng: AgentRng) -> PlannerResult<Self> {
        let cadence = cfg.cadence(kin)?;
        Ok(Self {
            sequences: enumerate_sequences(cfg.steps),
            cfg,
            cadence,
            rng,
            queue: VecDeque::new(),
            ticks_since_plan: 0,
            plans_made: 0,
            last_score: None,
        })
    }

    #[inline]
    pub fn cadence(&self) -> &Cadence {
        &self.cadence
    }

    #[inline]
    pub fn sequences(&self) -> &[Vec<Action>] {
        &self.sequences
    }

    /// Number of plans computed so far.
    #[inline]
    pub fn plans_made(&self) -> u64 {
        self.plans_made
    }

    /// Score of the most recent plan.
    #[inline]
    pub fn last_score(&self) -> Option<f64> {
        self.last_score
    }

    /// Actions still queued from the current plan.
    pub fn queued(&self) -> impl Iterator<Item = Action> + '_ {
        self.queue.iter().copied()
    }

    /// Score every candidate without touching planner state.
    pub fn evaluate(&self, agent: &Agent, ctx: &Snapshot<'_>, prune: bool) -> PlannerResult<SearchResult> {
        evaluate(agent, ctx, &self.sequences, &self.cfg, &self.cadence, prune)
    }

    /// Choose the best sequence (one action per step), breaking ties at random.
    pub fn plan(&mut self, agent: &Agent, ctx: &Snapshot<'_>) -> PlannerResult<Vec<Action>> {
        let mut result = self.evaluate(agent, ctx, self.cfg.prune)?;
        let pick = match result.winners.len() {
            1 => 0,
            n => self.rng.index(n),
        };
        let chosen = result.winners.swap_remove(pick);
        debug!(
            agent = %agent.id,
            tick = %ctx.tick,
            score = result.best_score,
            ties = result.winners.len() + 1,
            pruned = result.pruned,
            plan = ?chosen,
            "updated plan"
        );
        self.plans_made += 1;
        self.last_score = Some(result.best_score);
        Ok(chosen)
    }

    /// Per-tick expansion of a step sequence.
    fn expand(&self, steps: &[Action]) -> VecDeque<Action> {
        steps
            .iter()
            .flat_map(|&a| std::iter::repeat_n(a, self.cadence.ticks_per_step))
            .collect()
    }
}

impl Policy for LookaheadPlanner {
    fn decide(&mut self, agent: &Agent, ctx: &Snapshot<'_>) -> BehaviorResult<Action> {
        if self.queue.is_empty() || self.ticks_since_plan >= self.cadence.replan_period {
            let steps = self.plan(agent, ctx)?;
            self.queue = self.expand(&steps);
            self.ticks_since_plan = 0;
        }
        self.ticks_since_plan += 1;
        Ok(self.queue.pop_front().unwrap_or(Action::Straight))
    }

    fn name(&self) -> &str {
        "lookahead"
    }
}
