//! The kinematic agent.

use kurve_core::{Action, AgentId, Kinematics, Steering, Vec2};

use crate::{Color, GapSchedule, Trail};

/// A single curve in the arena.
///
/// State is mutated only by [`advance`](Self::advance); everything else reads.
/// Construct with [`AgentSpec`](crate::AgentSpec).
#[derive(Debug)]
pub struct Agent {
    pub id:    AgentId,
    pub name:  String,
    pub color: Color,

    /// Current position.
    pub pos: Vec2,
    /// Current heading, radians.  Not normalised; `0` points along +x and
    /// positive angles turn clockwise on screen (y points down).
    pub heading: f64,
    pub kin: Kinematics,

    /// One entry per tick survived, plus the spawn point.
    pub trail: Trail,
    /// Heading after every tick, aligned with `trail`.
    pub headings: Vec<f64>,
    /// Total distance travelled.
    pub distance: f64,

    pub(crate) gaps: GapSchedule,
}

impl Agent {
    /// Unit vector along the current heading.
    #[inline]
    pub fn direction(&self) -> Vec2 {
        Vec2::from_angle(self.heading)
    }

    /// Displacement of the next straight tick.
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.direction() * self.kin.speed
    }

    #[inline]
    pub fn turn_radius(&self) -> f64 {
        self.kin.turn_radius()
    }

    #[inline]
    pub fn ticks_survived(&self) -> usize {
        self.trail.len() - 1
    }

    /// `true` if the current tick left no trail.
    #[inline]
    pub fn in_gap(&self) -> bool {
        self.trail.last().is_gap()
    }

    #[inline]
    pub fn gap_schedule(&self) -> &GapSchedule {
        &self.gaps
    }

    /// Advance one tick: rotate by at most one angular step, move one chord
    /// along the new heading, then record the new position (or a gap marker).
    pub fn advance(&mut self, action: Action) {
        self.heading += action.heading_sign() * self.kin.angular_step;
        self.pos += self.velocity();
        self.distance += self.kin.speed;

        if self.gaps.advance(self.kin.speed, self.distance) {
            self.trail.push_gap();
        } else {
            self.trail.push(self.pos);
        }
        self.headings.push(self.heading);
    }

    /// Advance one tick from raw steering input (left wins over right).
    #[inline]
    pub fn steer(&mut self, steering: Steering) {
        self.advance(steering.resolve());
    }

    /// Position after one hypothetical tick of `action`, without moving.
    pub fn peek(&self, action: Action) -> Vec2 {
        let heading = self.heading + action.heading_sign() * self.kin.angular_step;
        self.pos + Vec2::from_angle(heading) * self.kin.speed
    }

    /// A gap-free copy at the current pose whose trail starts here.
    ///
    /// Used for look-ahead: the ghost can be advanced freely and its trail
    /// describes only the hypothetical future.
    pub fn ghost(&self) -> Agent {
        Agent {
            id:       self.id,
            name:     String::new(),
            color:    self.color,
            pos:      self.pos,
            heading:  self.heading,
            kin:      self.kin,
            trail:    Trail::new(self.pos),
            headings: vec![self.heading],
            distance: 0.0,
            gaps:     GapSchedule::Disabled,
        }
    }
}
