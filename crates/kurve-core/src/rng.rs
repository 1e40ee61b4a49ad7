//! Deterministic RNG wrappers.
//!
//! # Determinism strategy
//!
//! Nothing in the engine touches a thread-local or global generator.  Every
//! random draw goes through one of two explicitly seeded wrappers:
//!
//! - [`AgentRng`]: owned by a single agent (gap scheduling) or a single
//!   policy (plan tie-breaks, random manoeuvres).  Seeded by
//!
//!   seed = global_seed XOR (agent_id * MIXING_CONSTANT) XOR stream
//!
//!   so an agent's gap stream and its policy's stream never coincide.
//! - [`SimRng`]: arena-level draws (spawn positions and headings).
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive agent IDs uniformly across the seed space.

use std::f64::consts::TAU;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::AgentId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Stream offset for an agent's gap schedule.
pub const GAP_STREAM: u64 = 0x6761_7073; // "gaps"

/// Stream offset for an agent's decision policy.
pub const POLICY_STREAM: u64 = 0x706f_6c69; // "poli"

#[inline]
fn mix(global_seed: u64, agent: AgentId, stream: u64) -> u64 {
    global_seed ^ (agent.0 as u64).wrapping_mul(MIXING_CONSTANT) ^ stream.rotate_left(32)
}

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG.
///
/// Deliberately not `Clone`: two copies of the same stream would silently
/// produce identical "random" decisions.
#[derive(Debug)]
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed from the run's global seed, an agent ID, and a stream offset
    /// ([`GAP_STREAM`], [`POLICY_STREAM`]).
    pub fn new(global_seed: u64, agent: AgentId, stream: u64) -> Self {
        AgentRng(SmallRng::seed_from_u64(mix(global_seed, agent, stream)))
    }

    /// Seed directly; used by tests and stand-alone policies.
    pub fn from_seed(seed: u64) -> Self {
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform sample in `[0, 1)`.
    #[inline]
    pub fn unit(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }

    /// Uniform sample in `[lo, hi)`; returns `lo` when the range is empty.
    #[inline]
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.unit()
    }

    /// Uniform index in `0..len`.
    ///
    /// # Panics
    /// Panics if `len == 0`.
    #[inline]
    pub fn index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }

    /// Choose a random element from a slice, `None` if it is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Arena-level RNG for spawn rolling.
///
/// Used only by the single-threaded arena builder.
#[derive(Debug)]
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform sample in `[lo, hi)`.
    #[inline]
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.0.r#gen::<f64>()
    }

    /// Uniform heading in `[0, 2π)`.
    #[inline]
    pub fn heading(&mut self) -> f64 {
        TAU * self.0.r#gen::<f64>()
    }
}
