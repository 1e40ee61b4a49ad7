//! Planner configuration and the per-agent cadence derived from it.

use kurve_core::Kinematics;

use crate::{PlannerError, PlannerResult};

/// How long each planned step lasts.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum StepLength {
    /// Distance per step; converted to `floor(distance / speed)` ticks.
    Distance(f64),
    /// Exact tick count per step.
    Ticks(usize),
}

/// How often the planner recomputes its plan.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ReplanPeriod {
    /// Once the whole plan is consumed (`steps × ticks_per_step`).
    Horizon,
    /// Every `n` ticks.
    Ticks(usize),
    /// Every `floor(f × ticks_per_step)` ticks.
    Steps(f64),
}

/// Look-ahead planner tuning.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlannerConfig {
    /// Number of steps `N` in each candidate sequence.
    pub steps: usize,
    pub step_length: StepLength,
    pub wall_penalty: f64,
    pub trail_penalty: f64,
    /// Decay over one replanning interval, in `(0, 1]`.
    pub discount_factor: f64,
    pub replan_period: ReplanPeriod,
    /// Abort a candidate once its running score drops below the best so far.
    pub prune: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            steps:           2,
            step_length:     StepLength::Distance(40.0),
            wall_penalty:    100.0,
            trail_penalty:   111.0,
            discount_factor: 0.95,
            replan_period:   ReplanPeriod::Horizon,
            prune:           true,
        }
    }
}

impl PlannerConfig {
    /// Validate against an agent's kinematics and derive its [`Cadence`].
    pub fn cadence(&self, kin: &Kinematics) -> PlannerResult<Cadence> {
        if self.steps == 0 {
            return Err(PlannerError::Config("steps must be at least 1".into()));
        }
        for (name, v) in [("wall_penalty", self.wall_penalty), ("trail_penalty", self.trail_penalty)] {
            if !(v.is_finite() && v >= 0.0) {
                return Err(PlannerError::Config(format!("{name} must be non-negative, got {v}")));
            }
        }
        if !(self.discount_factor > 0.0 && self.discount_factor <= 1.0) {
            return Err(PlannerError::Config(format!(
                "discount_factor must lie in (0, 1], got {}",
                self.discount_factor
            )));
        }
        if !(kin.speed.is_finite() && kin.speed > 0.0) {
            return Err(PlannerError::Config(format!("speed must be positive, got {}", kin.speed)));
        }

        let ticks_per_step = match self.step_length {
            StepLength::Ticks(n) => n,
            StepLength::Distance(d) if d.is_finite() && d > 0.0 => (d / kin.speed) as usize,
            StepLength::Distance(d) => {
                return Err(PlannerError::Config(format!("step distance must be positive, got {d}")));
            }
        };
        if ticks_per_step == 0 {
            return Err(PlannerError::Config(format!(
                "a step of {:?} lasts less than one tick at speed {}",
                self.step_length, kin.speed
            )));
        }

        let horizon = self.steps * ticks_per_step;
        let replan_period = match self.replan_period {
            ReplanPeriod::Horizon => horizon,
            ReplanPeriod::Ticks(n) => n,
            ReplanPeriod::Steps(f) if f.is_finite() && f > 0.0 => (f * ticks_per_step as f64) as usize,
            ReplanPeriod::Steps(f) => {
                return Err(PlannerError::Config(format!("replan period {f} steps is not positive")));
            }
        };
        if replan_period == 0 || replan_period > horizon {
            return Err(PlannerError::Config(format!(
                "replan period must lie in 1..={horizon} ticks, got {replan_period}"
            )));
        }

        let gamma = self.discount_factor.powf(1.0 / replan_period as f64);
        let mut discounts = Vec::with_capacity(horizon + 1);
        let mut w = 1.0;
        for _ in 0..=horizon {
            discounts.push(w);
            w *= gamma;
        }

        Ok(Cadence { ticks_per_step, horizon, replan_period, discounts })
    }
}

/// Tick-level timing derived from a [`PlannerConfig`] for one agent.
#[derive(Clone, Debug, PartialEq)]
pub struct Cadence {
    pub ticks_per_step: usize,
    /// `steps × ticks_per_step`.
    pub horizon: usize,
    pub replan_period: usize,
    /// `γ^t` for `t` in `0..=horizon`.
    discounts: Vec<f64>,
}

impl Cadence {
    /// Per-tick discount `γ`.
    #[inline]
    pub fn gamma(&self) -> f64 {
        self.discounts.get(1).copied().unwrap_or(1.0)
    }

    /// `γ^t`, with `t` clamped to the horizon.
    #[inline]
    pub fn discount(&self, t: usize) -> f64 {
        self.discounts[t.min(self.horizon)]
    }
}
