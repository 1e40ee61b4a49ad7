//! Scripted policies that ignore the arena.

use kurve_agent::Agent;
use kurve_core::Action;

use crate::{BehaviorError, BehaviorResult, Policy, Snapshot};

/// Always goes straight.
#[derive(Copy, Clone, Debug, Default)]
pub struct Straight;

impl Policy for Straight {
    fn decide(&mut self, _agent: &Agent, _ctx: &Snapshot<'_>) -> BehaviorResult<Action> {
        Ok(Action::Straight)
    }

    fn name(&self) -> &str {
        "straight"
    }
}

/// Loops through a fixed list of actions, one per tick.
#[derive(Clone, Debug)]
pub struct FixedActions {
    actions: Vec<Action>,
    next:    usize,
}

impl FixedActions {
    pub fn new(actions: Vec<Action>) -> BehaviorResult<Self> {
        if actions.is_empty() {
            return Err(BehaviorError::Config("fixed action list is empty".into()));
        }
        Ok(Self { actions, next: 0 })
    }

    /// `count` repeats of `action`, e.g. `repeated(Action::Right, 72)`.
    pub fn repeated(action: Action, count: usize) -> BehaviorResult<Self> {
        Self::new(vec![action; count])
    }
}

impl Policy for FixedActions {
    fn decide(&mut self, _agent: &Agent, _ctx: &Snapshot<'_>) -> BehaviorResult<Action> {
        let action = self.actions[self.next];
        self.next = (self.next + 1) % self.actions.len();
        Ok(action)
    }

    fn name(&self) -> &str {
        "fixed-actions"
    }
}
