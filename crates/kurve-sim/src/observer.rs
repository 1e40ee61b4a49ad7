//! Arena observer trait for progress reporting and event collection.

use kurve_agent::Collision;
use kurve_core::{AgentId, Tick};

use crate::Outcome;

/// Callbacks invoked by [`Arena`][crate::Arena] at key points in the tick
/// loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: elimination printer
///
/// ```rust,ignore
/// struct Announcer;
///
/// impl ArenaObserver for Announcer {
///     fn on_agent_disabled(&mut self, tick: Tick, agent: AgentId, cause: Collision) {
///         println!("{tick}: {agent} hit {cause}");
///     }
/// }
/// ```
pub trait ArenaObserver {
    /// Called at the very start of each tick, before any policy runs.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per agent disabled this tick, in ascending `AgentId` order.
    fn on_agent_disabled(&mut self, _tick: Tick, _agent: AgentId, _cause: Collision) {}

    /// Called at the end of each tick with the number of agents still active.
    fn on_tick_end(&mut self, _tick: Tick, _active: usize) {}

    /// Called once when [`Arena::run`][crate::Arena::run] finishes.
    fn on_game_end(&mut self, _outcome: &Outcome) {}
}

/// An [`ArenaObserver`] that does nothing.
pub struct NoopObserver;

impl ArenaObserver for NoopObserver {}

/// A recorded arena event.
#[derive(Clone, Debug, PartialEq)]
pub enum ArenaEvent {
    Disabled { tick: Tick, agent: AgentId, cause: Collision },
    GameEnd { tick: Tick, survivors: Vec<AgentId> },
}

/// Records disable and game-end events in order.
#[derive(Default, Debug)]
pub struct EventLog {
    pub events: Vec<ArenaEvent>,
    /// Ticks observed (tick-end callbacks).
    pub ticks: u64,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Disabled agents in the order they were disabled.
    pub fn eliminated(&self) -> Vec<AgentId> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ArenaEvent::Disabled { agent, .. } => Some(*agent),
                ArenaEvent::GameEnd { .. } => None,
            })
            .collect()
    }
}

impl ArenaObserver for EventLog {
    fn on_agent_disabled(&mut self, tick: Tick, agent: AgentId, cause: Collision) {
        self.events.push(ArenaEvent::Disabled { tick, agent, cause });
    }

    fn on_tick_end(&mut self, _tick: Tick, _active: usize) {
        self.ticks += 1;
    }

    fn on_game_end(&mut self, outcome: &Outcome) {
        self.events.push(ArenaEvent::GameEnd {
            tick:      outcome.ticks,
            survivors: outcome.survivors.clone(),
        });
    }
}
