//! Arena and per-agent configuration.
//!
//! Everything here is set once (at arena or agent construction) and never
//! changes during a game.  Validation happens at construction time so that
//! no tick ever has to deal with a zero speed or a non-finite turn radius.

use crate::{Bounds, KurveError, KurveResult};

// ── Kinematics ────────────────────────────────────────────────────────────────

/// Per-agent motion constants.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Kinematics {
    /// Distance travelled per tick.
    pub speed: f64,
    /// Heading change per steering tick, radians.
    pub angular_step: f64,
    /// Collision disk radius.
    pub radius: f64,
}

impl Kinematics {
    /// Derive the angular step that traces a circle of `turn_radius`:
    /// `angular_step = 2·asin(speed / (2·turn_radius))`.
    pub fn from_turn_radius(speed: f64, turn_radius: f64, radius: f64) -> KurveResult<Self> {
        if !(turn_radius.is_finite() && turn_radius > 0.0) || speed > 2.0 * turn_radius {
            return Err(KurveError::Geometry(format!(
                "turn radius {turn_radius} cannot be traced at speed {speed}"
            )));
        }
        let kin = Kinematics {
            speed,
            angular_step: 2.0 * (speed / (2.0 * turn_radius)).asin(),
            radius,
        };
        kin.validate()?;
        Ok(kin)
    }

    /// Radius of the circle traced while steering continuously:
    /// `speed / (2·sin(angular_step / 2))`.
    #[inline]
    pub fn turn_radius(&self) -> f64 {
        self.speed / (2.0 * (0.5 * self.angular_step).sin())
    }

    /// Number of ticks needed to turn through `angle` radians.
    #[inline]
    pub fn ticks_for_angle(&self, angle: f64) -> usize {
        (angle / self.angular_step) as usize
    }

    /// Number of ticks needed to travel `distance`.
    #[inline]
    pub fn ticks_for_distance(&self, distance: f64) -> usize {
        (distance / self.speed) as usize
    }

    pub fn validate(&self) -> KurveResult<()> {
        if !(self.speed.is_finite() && self.speed > 0.0) {
            return Err(KurveError::Config(format!("speed must be positive, got {}", self.speed)));
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(KurveError::Config(format!("radius must be positive, got {}", self.radius)));
        }
        if !(self.angular_step.is_finite()
            && self.angular_step > 0.0
            && self.angular_step < std::f64::consts::PI)
        {
            return Err(KurveError::Config(format!(
                "angular step must lie in (0, π), got {}",
                self.angular_step
            )));
        }
        let r = self.turn_radius();
        if !r.is_finite() || r <= 0.0 {
            return Err(KurveError::Geometry(format!("turn radius {r} is not finite")));
        }
        Ok(())
    }
}

// ── GapConfig ─────────────────────────────────────────────────────────────────

/// Trail-gap ("hole") schedule parameters.  All values are distances.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GapConfig {
    /// Distance that must be travelled before the first gap may open.
    pub startblock: f64,
    /// Length of one gap.
    pub gap_width: f64,
    /// Lower bound of the distance between two gaps.
    pub min_between: f64,
    /// Upper bound of the distance between two gaps.
    pub max_between: f64,
}

impl GapConfig {
    /// The game's defaults: gaps three diameters wide, 200–1500 units apart,
    /// none within the first 100 units.
    pub fn classic(radius: f64) -> Self {
        GapConfig {
            startblock:  100.0,
            gap_width:   2.0 * radius * 3.0,
            min_between: 200.0,
            max_between: 1500.0,
        }
    }

    pub fn validate(&self) -> KurveResult<()> {
        let all_finite = [self.startblock, self.gap_width, self.min_between, self.max_between]
            .iter()
            .all(|v| v.is_finite());
        if !all_finite {
            return Err(KurveError::Config("gap distances must be finite".into()));
        }
        if self.startblock < 0.0 || self.gap_width <= 0.0 || self.min_between < 0.0 {
            return Err(KurveError::Config(format!("invalid gap schedule {self:?}")));
        }
        if self.max_between < self.min_between {
            return Err(KurveError::Config(format!(
                "max gap distance {} is below min gap distance {}",
                self.max_between, self.min_between
            )));
        }
        Ok(())
    }
}

// ── ArenaConfig ───────────────────────────────────────────────────────────────

/// Top-level arena configuration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArenaConfig {
    /// Arena rectangle.
    pub bounds: Bounds,

    /// Ticks simulated by `Arena::run`.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical games.
    pub seed: u64,

    /// Worker thread count for the `parallel` intent phase.  `None` uses
    /// Rayon's global pool.
    pub num_threads: Option<usize>,

    /// Minimum distance between a rolled spawn point and any wall.
    pub spawn_margin: f64,

    /// Minimum distance between two rolled spawn points.
    pub spawn_separation: f64,

    /// Re-roll budget for a single spawn position.
    pub spawn_attempts: usize,

    /// Stop `run` as soon as at most one agent is left.  When `false` the
    /// survivor keeps playing until it crashes or `total_ticks` is reached.
    pub stop_at_last_survivor: bool,
}

impl ArenaConfig {
    /// Fraction of the arena width used as minimum turn radius.
    pub const TURN_RADIUS_FRACTION: f64 = 0.05;
    /// Fraction of the arena width travelled per second at speed factor 1.
    pub const SPEED_FRACTION: f64 = 0.075;

    /// The game's classic parameters for a `width × height` arena.
    pub fn classic(width: f64, height: f64) -> Self {
        let min_turn_radius = Self::TURN_RADIUS_FRACTION * width;
        ArenaConfig {
            bounds:                Bounds::from_size(width, height),
            total_ticks:           10_000,
            seed:                  0,
            num_threads:           None,
            spawn_margin:          min_turn_radius,
            spawn_separation:      0.5 * min_turn_radius,
            spawn_attempts:        100,
            stop_at_last_survivor: false,
        }
    }

    /// Classic agent kinematics for this arena: the minimum turn radius is 5 %
    /// of the arena width and agents cover 7.5 % of the width per second.
    pub fn classic_kinematics(&self, fps: f64, speed_factor: f64, radius: f64) -> KurveResult<Kinematics> {
        if !(fps.is_finite() && fps > 0.0) {
            return Err(KurveError::Config(format!("fps must be positive, got {fps}")));
        }
        let width = self.bounds.width();
        let speed = speed_factor * Self::SPEED_FRACTION * width / fps;
        Kinematics::from_turn_radius(speed, Self::TURN_RADIUS_FRACTION * width, radius)
    }

    pub fn validate(&self) -> KurveResult<()> {
        if !self.bounds.is_valid() {
            return Err(KurveError::Config(format!("invalid arena bounds {:?}", self.bounds)));
        }
        if self.spawn_margin < 0.0
            || 2.0 * self.spawn_margin >= self.bounds.width().min(self.bounds.height())
        {
            return Err(KurveError::Config(format!(
                "spawn margin {} leaves no room to spawn",
                self.spawn_margin
            )));
        }
        if self.spawn_attempts == 0 {
            return Err(KurveError::Config("spawn_attempts must be at least 1".into()));
        }
        if self.num_threads == Some(0) {
            return Err(KurveError::Config("num_threads must be at least 1".into()));
        }
        Ok(())
    }
}
