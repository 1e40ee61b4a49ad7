//! Fluent construction of a single [`Agent`].
//!
//! # Usage
//!
//! ```rust
//! use kurve_agent::{AgentSpec, Color};
//! use kurve_core::{AgentId, GapConfig, Kinematics, Vec2};
//!
//! let kin = Kinematics::from_turn_radius(2.0, 40.0, 2.0).unwrap();
//! let agent = AgentSpec::new(kin)
//!     .name("red")
//!     .color(Color::PALETTE[0])
//!     .at(Vec2::new(400.0, 300.0))
//!     .facing(0.0)
//!     .gaps(GapConfig::classic(2.0))
//!     .build(AgentId(0), /*seed=*/ 42)
//!     .unwrap();
//!
//! assert_eq!(agent.trail.len(), 1);
//! ```
//!
//! Position and heading are optional on the spec so an arena can roll them;
//! `build` fails if either is still missing.

use kurve_core::{AgentId, AgentRng, GapConfig, Kinematics, Vec2, rng::GAP_STREAM};

use crate::{Agent, AgentError, AgentResult, GapSchedule, Trail};

/// Display colour.  Carried for front ends only.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    /// Default colours handed out by agent index.
    pub const PALETTE: [Color; 6] = [
        Color(255, 0, 0),
        Color(255, 255, 0),
        Color(255, 165, 0),
        Color(0, 255, 0),
        Color(255, 0, 255),
        Color(64, 224, 208),
    ];

    /// Palette colour for agent index `i` (wraps around).
    pub fn for_index(i: usize) -> Color {
        Self::PALETTE[i % Self::PALETTE.len()]
    }
}

/// Everything needed to construct an [`Agent`].
#[derive(Clone, Debug)]
pub struct AgentSpec {
    pub name:       Option<String>,
    pub color:      Option<Color>,
    pub position:   Option<Vec2>,
    pub heading:    Option<f64>,
    pub kinematics: Kinematics,
    pub gaps:       Option<GapConfig>,
}

impl AgentSpec {
    /// A gap-free spec with no position or heading yet.
    pub fn new(kinematics: Kinematics) -> Self {
        Self {
            name: None,
            color: None,
            position: None,
            heading: None,
            kinematics,
            gaps: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Fixed spawn position.
    pub fn at(mut self, position: Vec2) -> Self {
        self.position = Some(position);
        self
    }

    /// Fixed initial heading, radians.
    pub fn facing(mut self, heading: f64) -> Self {
        self.heading = Some(heading);
        self
    }

    /// Enable trail gaps with the given schedule.
    pub fn gaps(mut self, cfg: GapConfig) -> Self {
        self.gaps = Some(cfg);
        self
    }

    pub fn no_gaps(mut self) -> Self {
        self.gaps = None;
        self
    }

    /// Validate and construct.  `seed` is the global seed; the gap stream is
    /// derived from it and `id`.
    pub fn build(self, id: AgentId, seed: u64) -> AgentResult<Agent> {
        self.kinematics.validate()?;
        let pos = self.position.ok_or(AgentError::Unplaced(id))?;
        let heading = self.heading.ok_or(AgentError::NoHeading(id))?;
        if !pos.is_finite() || !heading.is_finite() {
            return Err(kurve_core::KurveError::Config(format!(
                "agent {id} spawn state must be finite, got {pos} heading {heading}"
            ))
            .into());
        }

        let gaps = match self.gaps {
            Some(cfg) => {
                cfg.validate()?;
                GapSchedule::new(cfg, AgentRng::new(seed, id, GAP_STREAM))
            }
            None => GapSchedule::Disabled,
        };

        Ok(Agent {
            id,
            name: self.name.unwrap_or_else(|| format!("agent-{}", id.0)),
            color: self.color.unwrap_or_else(|| Color::for_index(id.index())),
            pos,
            heading,
            kin: self.kinematics,
            trail: Trail::new(pos),
            headings: vec![heading],
            distance: 0.0,
            gaps,
        })
    }
}
