//! The `Policy` trait: the extension point for agent decision making.

use kurve_agent::Agent;
use kurve_core::Action;

use crate::{BehaviorResult, Snapshot};

/// Pluggable per-agent decision strategy.
///
/// Called once per tick for every active agent with the agent's own state and
/// the frozen [`Snapshot`].  Returns the single steering action for this tick.
///
/// # Determinism
///
/// Any randomness must come from an [`AgentRng`](kurve_core::AgentRng) owned
/// by the policy and seeded at construction.  Given the same seed and the
/// same sequence of snapshots, a policy must return the same actions.
///
/// # Thread safety
///
/// With the arena's `parallel` feature, policies of different agents are
/// called concurrently, so implementations must be `Send`.  Each policy is
/// only ever called from one thread at a time.
///
/// # Example
///
/// ```rust,ignore
/// struct AlwaysRight;
///
/// impl Policy for AlwaysRight {
///     fn decide(&mut self, _agent: &Agent, _ctx: &Snapshot<'_>) -> BehaviorResult<Action> {
///         Ok(Action::Right)
///     }
///
///     fn name(&self) -> &str {
///         "always-right"
///     }
/// }
/// ```
pub trait Policy: Send {
    fn decide(&mut self, agent: &Agent, ctx: &Snapshot<'_>) -> BehaviorResult<Action>;

    /// Short label used in logs.
    fn name(&self) -> &str;
}

impl<P: Policy + ?Sized> Policy for Box<P> {
    fn decide(&mut self, agent: &Agent, ctx: &Snapshot<'_>) -> BehaviorResult<Action> {
        (**self).decide(agent, ctx)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
