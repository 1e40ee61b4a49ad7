//! Agent identifiers.
//!
//! An `AgentId` is the agent's spawn index, so the arena's agent `Vec` and
//! every per-agent side table are addressed with `id.index()`.  Disabled
//! agents keep their ID; it is never reused within a game.

use std::fmt;

/// Index of an agent in the arena.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(pub u32);

impl AgentId {
    /// Placeholder for "no agent".
    pub const INVALID: AgentId = AgentId(u32::MAX);

    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for AgentId {
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AgentId({})", self.0)
    }
}

/// Spawn index to ID; fails past `u32::MAX` agents.
impl TryFrom<usize> for AgentId {
    type Error = std::num::TryFromIntError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        u32::try_from(index).map(AgentId)
    }
}
