//! Trail-gap scheduling.
//!
//! A gap schedule tracks `dist_to_next`, the distance left until the next gap
//! opens.  Every tick it is reduced by the distance travelled:
//!
//! ```text
//! dist_to_next >  0              → draw this tick
//! dist_to_next <= 0              → gap tick
//! dist_to_next <  -gap_width     → gap tick, and the gap closes: roll again
//! ```
//!
//! Rolls drawn before the startblock has been covered land beyond it
//! (`startblock + max·U`), so no gap ever opens inside the startblock.

use kurve_core::{AgentRng, GapConfig};
use tracing::trace;

/// Per-agent gap schedule.
#[derive(Debug)]
pub enum GapSchedule {
    /// The agent never leaves gaps (planner ghosts, scripted tests).
    Disabled,
    Active {
        cfg:          GapConfig,
        dist_to_next: f64,
        rng:          AgentRng,
    },
}

impl GapSchedule {
    /// Start a schedule for an agent that has not moved yet.
    pub fn new(cfg: GapConfig, mut rng: AgentRng) -> Self {
        let dist_to_next = roll(&cfg, 0.0, &mut rng);
        GapSchedule::Active { cfg, dist_to_next, rng }
    }

    /// Distance left until the next gap, `None` when gaps are disabled.
    #[inline]
    pub fn dist_to_next(&self) -> Option<f64> {
        match self {
            GapSchedule::Disabled => None,
            GapSchedule::Active { dist_to_next, .. } => Some(*dist_to_next),
        }
    }

    /// Account for `step` travelled this tick; `travelled` is the agent's
    /// total distance including this step.  Returns `true` if this tick is a
    /// gap tick.
    pub fn advance(&mut self, step: f64, travelled: f64) -> bool {
        let GapSchedule::Active { cfg, dist_to_next, rng } = self else {
            return false;
        };
        *dist_to_next -= step;
        if *dist_to_next > 0.0 {
            return false;
        }
        if *dist_to_next < -cfg.gap_width {
            *dist_to_next = roll(cfg, travelled, rng);
        }
        true
    }
}

fn roll(cfg: &GapConfig, travelled: f64, rng: &mut AgentRng) -> f64 {
    let dist = if travelled < cfg.startblock {
        cfg.startblock + cfg.max_between * rng.unit()
    } else {
        rng.uniform(cfg.min_between, cfg.max_between)
    };
    trace!(travelled, next_gap_in = dist, "rolled gap distance");
    dist
}
