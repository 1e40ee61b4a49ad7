//! The `Arena` struct and its tick loop.

use kurve_agent::{Agent, Collision, collision};
use kurve_behavior::{Policy, Snapshot};
use kurve_core::{Action, AgentId, ArenaConfig, Tick};
use tracing::{debug, info};

use crate::{ArenaObserver, SimError, SimResult};

/// One agent leaving play.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Elimination {
    pub agent: AgentId,
    pub tick:  Tick,
    pub cause: Collision,
}

/// Summary of a finished (or paused) game.
#[derive(Clone, Debug, PartialEq)]
pub struct Outcome {
    /// Number of ticks processed.
    pub ticks: Tick,
    /// Agents still active, ascending ID.
    pub survivors: Vec<AgentId>,
    /// Every elimination so far, in the order they happened.
    pub eliminations: Vec<Elimination>,
}

impl Outcome {
    /// The single survivor, if there is exactly one.
    pub fn winner(&self) -> Option<AgentId> {
        match self.survivors.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }
}

/// The headless game runner.
///
/// Holds every agent (active or not), one policy per agent, and the active
/// flags, and drives the two-phase tick loop described in the crate docs.
/// Disabled agents stay in `agents` so their trails remain obstacles.
///
/// Create via [`ArenaBuilder`][crate::ArenaBuilder].
pub struct Arena {
    pub config: ArenaConfig,

    /// Next tick to be processed.
    pub tick: Tick,

    agents:       Vec<Agent>,
    active:       Vec<bool>,
    policies:     Vec<Box<dyn Policy>>,
    eliminations: Vec<Elimination>,

    #[cfg(feature = "parallel")]
    pub(crate) pool: Option<rayon::ThreadPool>,
}

impl Arena {
    pub(crate) fn new(config: ArenaConfig, agents: Vec<Agent>, policies: Vec<Box<dyn Policy>>) -> Self {
        debug_assert_eq!(agents.len(), policies.len());
        Self {
            config,
            tick: Tick::ZERO,
            active: vec![true; agents.len()],
            agents,
            policies,
            eliminations: Vec::new(),
            #[cfg(feature = "parallel")]
            pool: None,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// Every agent, indexed by `AgentId`.
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id.index())
    }

    pub fn is_active(&self, id: AgentId) -> bool {
        self.active.get(id.index()).copied().unwrap_or(false)
    }

    pub fn active_count(&self) -> usize {
        self.active.iter().filter(|a| **a).count()
    }

    pub fn eliminations(&self) -> &[Elimination] {
        &self.eliminations
    }

    /// Read-only view of the current state, as policies see it.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::new(self.tick, self.config.bounds, &self.agents, &self.active)
    }

    /// `true` once no further tick can change the result.
    pub fn is_finished(&self) -> bool {
        let active = self.active_count();
        active == 0 || (self.config.stop_at_last_survivor && self.agents.len() > 1 && active <= 1)
    }

    pub fn outcome(&self) -> Outcome {
        Outcome {
            ticks: self.tick,
            survivors: self
                .agents
                .iter()
                .filter(|a| self.active[a.id.index()])
                .map(|a| a.id)
                .collect(),
            eliminations: self.eliminations.clone(),
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run until `config.total_ticks` or until the game is decided.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: ArenaObserver>(&mut self, observer: &mut O) -> SimResult<Outcome> {
        while self.tick.0 < self.config.total_ticks && !self.is_finished() {
            self.step(observer)?;
        }
        let outcome = self.outcome();
        info!(
            ticks = %outcome.ticks,
            survivors = ?outcome.survivors,
            eliminated = outcome.eliminations.len(),
            "game over"
        );
        observer.on_game_end(&outcome);
        Ok(outcome)
    }

    /// Run at most `n` ticks from the current position (ignores
    /// `total_ticks`), stopping early once the game is decided.
    pub fn run_ticks<O: ArenaObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<Outcome> {
        for _ in 0..n {
            if self.is_finished() {
                break;
            }
            self.step(observer)?;
        }
        Ok(self.outcome())
    }

    /// Process exactly one tick.  Returns the agents disabled in it.
    pub fn step<O: ArenaObserver>(&mut self, observer: &mut O) -> SimResult<Vec<AgentId>> {
        let now = self.tick;
        observer.on_tick_start(now);

        // ── Phase 1: intents against the frozen state ─────────────────────
        let intents = self.compute_intents(now)?;

        // ── Phase 2: apply in ascending AgentId order ─────────────────────
        for &(id, action) in &intents {
            self.agents[id.index()].advance(action);
        }

        // ── Phase 3: collisions after everyone has moved ──────────────────
        //
        // Disabled agents' trails stay collidable; disabled agents themselves
        // are never tested.
        let hits: Vec<(AgentId, Collision)> = intents
            .iter()
            .filter_map(|&(id, _)| {
                let agent = &self.agents[id.index()];
                collision::detect(agent, &self.agents, &self.config.bounds).map(|c| (id, c))
            })
            .collect();

        // ── Phase 4: disable every collider together ──────────────────────
        let mut disabled = Vec::with_capacity(hits.len());
        for (id, cause) in hits {
            self.active[id.index()] = false;
            let agent = &self.agents[id.index()];
            info!(
                tick = %now,
                agent = %id,
                name = %agent.name,
                pos = %agent.pos,
                cause = %cause,
                "agent disabled"
            );
            self.eliminations.push(Elimination { agent: id, tick: now, cause });
            observer.on_agent_disabled(now, id, cause);
            disabled.push(id);
        }

        let active = self.active_count();
        observer.on_tick_end(now, active);
        self.tick = now.next();
        Ok(disabled)
    }

    // ── Intent phase ──────────────────────────────────────────────────────

    /// Ask every active agent's policy for its action.
    ///
    /// With the `parallel` Cargo feature, policies run on Rayon's thread pool
    /// (or the arena's own pool when `num_threads` is set).  The result is
    /// always in ascending `AgentId` order.
    fn compute_intents(&mut self, now: Tick) -> SimResult<Vec<(AgentId, Action)>> {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let agents   = &self.agents;
        let active   = &self.active;
        let policies = &mut self.policies;
        let ctx = Snapshot::new(now, self.config.bounds, agents, active);

        let decide = |(i, policy): (usize, &mut Box<dyn Policy>)| -> Option<SimResult<(AgentId, Action)>> {
            if !active[i] {
                return None;
            }
            let agent = &agents[i];
            Some(match policy.decide(agent, &ctx) {
                Ok(action) => Ok((agent.id, action)),
                Err(source) => Err(SimError::Policy { agent: agent.id, source }),
            })
        };

        #[cfg(not(feature = "parallel"))]
        let intents: SimResult<Vec<_>> = policies.iter_mut().enumerate().filter_map(decide).collect();

        #[cfg(feature = "parallel")]
        let intents: SimResult<Vec<_>> = {
            use rayon::prelude::*;

            let run = || -> SimResult<Vec<(AgentId, Action)>> {
                policies.par_iter_mut().enumerate().filter_map(decide).collect()
            };
            match &self.pool {
                Some(pool) => pool.install(run),
                None => run(),
            }
        };

        let intents = intents?;
        debug!(tick = %now, deciding = intents.len(), "intents collected");
        Ok(intents)
    }
}
