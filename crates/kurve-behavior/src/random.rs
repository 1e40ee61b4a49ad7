//! `RandomSteering`: random manoeuvres kept safe by the evasion reflex.

use kurve_agent::Agent;
use kurve_core::{Action, AgentRng};
use tracing::debug;

use crate::evasion::{self, EvasionConfig};
use crate::{BehaviorError, BehaviorResult, Policy, Snapshot};

/// Ranges the manoeuvres are drawn from.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomSteeringConfig {
    /// Turn angle range, degrees.
    pub turn_angles_deg: (f64, f64),
    /// Straight-run length range, distance units.
    pub straight_lengths: (f64, f64),
    /// Evasive turns are planned on `safety_factor × turn radius`.
    pub safety_factor: f64,
    pub evasion: EvasionConfig,
}

impl Default for RandomSteeringConfig {
    fn default() -> Self {
        Self {
            turn_angles_deg: (40.0, 180.0),
            straight_lengths: (0.0, 200.0),
            safety_factor: 1.05,
            evasion: EvasionConfig::default(),
        }
    }
}

impl RandomSteeringConfig {
    pub fn validate(&self) -> BehaviorResult<()> {
        let ranges = [("turn_angles_deg", self.turn_angles_deg), ("straight_lengths", self.straight_lengths)];
        for (name, (lo, hi)) in ranges {
            if !(lo.is_finite() && hi.is_finite() && 0.0 <= lo && lo <= hi) {
                return Err(BehaviorError::Config(format!("invalid {name} range ({lo}, {hi})")));
            }
        }
        if !(self.safety_factor.is_finite() && self.safety_factor >= 1.0) {
            return Err(BehaviorError::Config(format!(
                "safety_factor must be at least 1, got {}",
                self.safety_factor
            )));
        }
        self.evasion.validate()
    }
}

/// Alternates between turns and straight runs of random extent.
///
/// Each tick the reflex's admissible set is computed first: a single
/// admissible action is taken unconditionally; otherwise the current
/// manoeuvre continues if admissible, or a random admissible action is taken.
#[derive(Debug)]
pub struct RandomSteering {
    cfg:        RandomSteeringConfig,
    rng:        AgentRng,
    manoeuvre:  Option<Action>,
    ticks_left: i64,
}

impl RandomSteering {
    pub fn new(cfg: RandomSteeringConfig, rng: AgentRng) -> BehaviorResult<Self> {
        cfg.validate()?;
        Ok(Self { cfg, rng, manoeuvre: None, ticks_left: 0 })
    }

    fn roll(&mut self, agent: &Agent) -> Action {
        let action = Action::ALL[self.rng.index(Action::ALL.len())];
        self.ticks_left = if action.is_turn() {
            let (lo, hi) = self.cfg.turn_angles_deg;
            let angle = self.rng.uniform(lo, hi).to_radians();
            agent.kin.ticks_for_angle(angle) as i64
        } else {
            let (lo, hi) = self.cfg.straight_lengths;
            agent.kin.ticks_for_distance(self.rng.uniform(lo, hi)) as i64
        };
        debug!(agent = %agent.id, %action, ticks = self.ticks_left, "new manoeuvre");
        self.manoeuvre = Some(action);
        action
    }
}

impl Policy for RandomSteering {
    fn decide(&mut self, agent: &Agent, ctx: &Snapshot<'_>) -> BehaviorResult<Action> {
        self.ticks_left -= 1;
        let radius = agent.turn_radius() * self.cfg.safety_factor;
        let admissible = evasion::admissible_actions(agent, &ctx.bounds, radius, &self.cfg.evasion);

        if admissible.is_empty() {
            return Ok(Action::Straight);
        }
        if admissible.len() == 1 {
            return Ok(admissible.iter().next().unwrap_or(Action::Straight));
        }

        let current = match self.manoeuvre {
            Some(a) if self.ticks_left > 0 => a,
            _ => self.roll(agent),
        };
        if admissible.contains(current) {
            return Ok(current);
        }
        let options: Vec<Action> = admissible.iter().collect();
        Ok(self.rng.choose(&options).copied().unwrap_or(Action::Straight))
    }

    fn name(&self) -> &str {
        "random-steering"
    }
}
