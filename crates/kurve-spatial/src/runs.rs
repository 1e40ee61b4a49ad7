//! Splitting trails at gap markers.

use kurve_core::Vec2;

/// Maximal runs of consecutive drawn points, in time order.
///
/// Runs with fewer than two points describe no segment and are skipped, so a
/// lone point between two gaps never blocks anything.
pub fn gap_free_runs(points: &[Vec2]) -> impl Iterator<Item = &[Vec2]> {
    points.split(|p| p.is_gap()).filter(|run| run.len() >= 2)
}
