//! Time-indexed trail storage.

use kurve_core::Vec2;

/// The ordered history of an agent's positions.
///
/// Entry `i` is the agent's position after tick `i` (entry 0 is the spawn
/// point), or [`Vec2::GAP`] if the agent was inside a gap that tick.  Entries
/// are only ever appended, so `len() == ticks_survived + 1`.
#[derive(Clone, Debug)]
pub struct Trail {
    points: Vec<Vec2>,
}

impl Trail {
    /// A trail holding only the spawn point.
    pub fn new(start: Vec2) -> Self {
        Self { points: vec![start] }
    }

    #[inline]
    pub fn push(&mut self, p: Vec2) {
        self.points.push(p);
    }

    #[inline]
    pub fn push_gap(&mut self) {
        self.points.push(Vec2::GAP);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Never true: a trail always holds its spawn point.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Newest entry (possibly a gap marker).
    #[inline]
    pub fn last(&self) -> Vec2 {
        // Invariant: never empty.
        self.points[self.points.len() - 1]
    }

    /// Every entry except the newest `n`.
    #[inline]
    pub fn without_recent(&self, n: usize) -> &[Vec2] {
        &self.points[..self.points.len().saturating_sub(n)]
    }

    /// Drawn (non-gap) points in time order.
    pub fn drawn(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.points.iter().copied().filter(|p| p.is_finite())
    }

    /// Number of gap markers recorded so far.
    pub fn gap_count(&self) -> usize {
        self.points.iter().filter(|p| p.is_gap()).count()
    }

    /// Index of the first gap marker, if any.
    pub fn first_gap(&self) -> Option<usize> {
        self.points.iter().position(|p| p.is_gap())
    }
}
