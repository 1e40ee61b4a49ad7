//! Read-only arena state passed to every policy.

use kurve_agent::Agent;
use kurve_core::{AgentId, Bounds, Tick};

/// A frozen view of the arena at the start of a tick.
///
/// Built once per tick by the arena and shared (immutably) across all
/// policies during the intent phase.  `agents` and `active` are indexed by
/// `AgentId`; disabled agents stay in `agents` because their trails remain
/// collidable.
#[derive(Copy, Clone)]
pub struct Snapshot<'a> {
    /// Tick being decided.
    pub tick: Tick,

    pub bounds: Bounds,

    /// Every agent ever spawned, indexed by `AgentId`.
    pub agents: &'a [Agent],

    /// `active[i]` is `false` once agent `i` has been disabled.
    pub active: &'a [bool],
}

impl<'a> Snapshot<'a> {
    #[inline]
    pub fn new(tick: Tick, bounds: Bounds, agents: &'a [Agent], active: &'a [bool]) -> Self {
        debug_assert_eq!(agents.len(), active.len());
        Self { tick, bounds, agents, active }
    }

    #[inline]
    pub fn agent(&self, id: AgentId) -> Option<&'a Agent> {
        self.agents.get(id.index())
    }

    #[inline]
    pub fn is_active(&self, id: AgentId) -> bool {
        self.active.get(id.index()).copied().unwrap_or(false)
    }

    /// Agents still in play.
    pub fn active_agents(&self) -> impl Iterator<Item = &'a Agent> + '_ {
        self.agents.iter().zip(self.active).filter(|(_, a)| **a).map(|(agent, _)| agent)
    }

    /// Every agent except `id`, active or not.
    pub fn others(&self, id: AgentId) -> impl Iterator<Item = &'a Agent> + '_ {
        self.agents.iter().filter(move |a| a.id != id)
    }
}
