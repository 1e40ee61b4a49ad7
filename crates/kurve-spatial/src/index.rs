//! R-tree index over trail segments.
//!
//! Every pair of consecutive drawn trail points becomes one [`SegmentEntry`];
//! gap markers break the chain so nothing is indexed across a gap.  Point
//! queries return the exact point-to-segment distance, and path queries look
//! for the first point of a polyline that lies within the buffer of any
//! indexed segment.

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use kurve_core::{AgentId, Vec2};

use crate::{SpatialError, SpatialResult, gap_free_runs};

/// Ternary-search rounds used to locate the closest approach to a segment.
const APPROACH_ROUNDS: u32 = 64;

/// Bisection rounds used to refine a conflict location.
const REFINE_ROUNDS: u32 = 48;

// ── R-tree segment entry ──────────────────────────────────────────────────────

#[derive(Clone, Debug)]
struct SegmentEntry {
    a:     [f64; 2],
    b:     [f64; 2],
    owner: AgentId,
}

impl RTreeObject for SegmentEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.a, self.b)
    }
}

impl PointDistance for SegmentEntry {
    /// Squared distance from `point` to the closest point of the segment.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let (ax, ay) = (self.a[0], self.a[1]);
        let (dx, dy) = (self.b[0] - ax, self.b[1] - ay);
        let (px, py) = (point[0] - ax, point[1] - ay);
        let len_sq = dx * dx + dy * dy;
        let t = if len_sq > 0.0 {
            ((px * dx + py * dy) / len_sq).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let (ex, ey) = (px - t * dx, py - t * dy);
        ex * ex + ey * ey
    }
}

// ── TrailIndex ────────────────────────────────────────────────────────────────

/// Immutable spatial index over a set of trails.
///
/// Build with [`TrailIndexBuilder`]; the index is a snapshot and is rebuilt
/// whenever the trails it describes have grown.
pub struct TrailIndex {
    tree: RTree<SegmentEntry>,
}

impl TrailIndex {
    pub fn empty() -> Self {
        Self { tree: RTree::new() }
    }

    /// Number of indexed segments.
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Owner of and distance to the segment nearest to `p`.
    ///
    /// Returns `None` only if the index is empty.
    pub fn nearest(&self, p: Vec2) -> Option<(AgentId, f64)> {
        let q = p.to_array();
        self.tree
            .nearest_neighbor(&q)
            .map(|seg| (seg.owner, seg.distance_2(&q).sqrt()))
    }

    /// `true` if any indexed segment lies within `buffer` of `p`.
    #[inline]
    pub fn is_within(&self, p: Vec2, buffer: f64) -> bool {
        let q = p.to_array();
        self.tree
            .nearest_neighbor(&q)
            .is_some_and(|seg| seg.distance_2(&q) <= buffer * buffer)
    }

    /// Arc length along `path` at which it first comes within `buffer` of any
    /// indexed segment, or `None` if the whole path stays clear.
    ///
    /// A path whose first point is already inside the buffer conflicts at
    /// distance `0`.  Each path segment is checked against every trail
    /// segment whose envelope, grown by `buffer`, overlaps its own, so a
    /// path that only grazes the buffer is still caught.
    pub fn first_conflict(&self, path: &[Vec2], buffer: f64) -> SpatialResult<Option<f64>> {
        if !(buffer.is_finite() && buffer > 0.0) {
            return Err(SpatialError::InvalidBuffer(buffer));
        }
        if let Some(index) = path.iter().position(|p| !p.is_finite()) {
            return Err(SpatialError::NonFinitePath { index });
        }
        let Some(&start) = path.first() else {
            return Ok(None);
        };
        if self.is_empty() {
            return Ok(None);
        }
        if self.is_within(start, buffer) {
            return Ok(Some(0.0));
        }

        let buffer_sq = buffer * buffer;
        let mut travelled = 0.0;
        for pair in path.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let len = a.distance(b);
            if len == 0.0 {
                continue;
            }
            let query = AABB::from_corners(
                [a.x.min(b.x) - buffer, a.y.min(b.y) - buffer],
                [a.x.max(b.x) + buffer, a.y.max(b.y) + buffer],
            );
            let hit = self
                .tree
                .locate_in_envelope_intersecting(&query)
                .filter_map(|seg| seg.entry_along(a, b, buffer_sq))
                .reduce(f64::min);
            if let Some(t) = hit {
                return Ok(Some(travelled + t * len));
            }
            travelled += len;
        }
        Ok(None)
    }
}

impl SegmentEntry {
    /// Smallest `t` in `[0, 1]` at which `a.lerp(b, t)` lies within the
    /// buffer of this segment.
    ///
    /// The distance from a point moving along a line to a segment is convex
    /// in `t`, so the closest approach is found by ternary search and the
    /// entry point by bisection on the falling side of it.
    fn entry_along(&self, a: Vec2, b: Vec2, buffer_sq: f64) -> Option<f64> {
        let dist_sq = |t: f64| self.distance_2(&a.lerp(b, t).to_array());
        if dist_sq(0.0) <= buffer_sq {
            return Some(0.0);
        }

        let (mut lo, mut hi) = (0.0, 1.0);
        for _ in 0..APPROACH_ROUNDS {
            let m1 = lo + (hi - lo) / 3.0;
            let m2 = hi - (hi - lo) / 3.0;
            if dist_sq(m1) <= dist_sq(m2) {
                hi = m2;
            } else {
                lo = m1;
            }
        }
        let closest = 0.5 * (lo + hi);
        if dist_sq(closest) > buffer_sq {
            return None;
        }

        let (mut lo, mut hi) = (0.0, closest);
        for _ in 0..REFINE_ROUNDS {
            let mid = 0.5 * (lo + hi);
            if dist_sq(mid) <= buffer_sq {
                hi = mid;
            } else {
                lo = mid;
            }
        }
        Some(hi)
    }
}

impl Default for TrailIndex {
    fn default() -> Self {
        Self::empty()
    }
}

// ── TrailIndexBuilder ─────────────────────────────────────────────────────────

/// Collect trails, then bulk-load them with [`build`](Self::build).
#[derive(Default)]
pub struct TrailIndexBuilder {
    segments: Vec<SegmentEntry>,
}

impl TrailIndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every gap-free run of `points` as segments owned by `owner`.
    pub fn add_trail(&mut self, owner: AgentId, points: &[Vec2]) -> &mut Self {
        for run in gap_free_runs(points) {
            self.segments.extend(run.windows(2).map(|w| SegmentEntry {
                a: w[0].to_array(),
                b: w[1].to_array(),
                owner,
            }));
        }
        self
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn build(self) -> TrailIndex {
        // Bulk loading beats repeated inserts for a one-shot snapshot.
        TrailIndex { tree: RTree::bulk_load(self.segments) }
    }
}
