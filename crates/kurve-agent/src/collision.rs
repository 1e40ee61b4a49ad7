//! Terminal-collision tests.
//!
//! | Test                  | Against                          | Hit when            |
//! |-----------------------|----------------------------------|---------------------|
//! | [`wall_collision`]    | arena rectangle                  | on or past a wall   |
//! | [`self_collision`]    | own trail minus recent points    | `d² <= (2r)²`       |
//! | [`cross_collision`]   | another agent's full trail       | `d² <  r²`          |
//!
//! Note the two trail thresholds differ.  Gap markers never collide.

use std::fmt;

use kurve_core::{AgentId, Bounds, Kinematics, Vec2};

use crate::Agent;

/// Why an agent was disabled.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Collision {
    Wall,
    SelfTrail,
    Opponent(AgentId),
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collision::Wall => f.write_str("wall"),
            Collision::SelfTrail => f.write_str("own trail"),
            Collision::Opponent(id) => write!(f, "trail of {id}"),
        }
    }
}

/// Number of most recent own-trail entries ignored by [`self_collision`]:
/// `ceil(5·radius / speed)`.
#[inline]
pub fn self_exclusion_window(kin: &Kinematics) -> usize {
    (5.0 * kin.radius / kin.speed).ceil() as usize
}

#[inline]
pub fn wall_collision(pos: Vec2, bounds: &Bounds) -> bool {
    bounds.hits_wall(pos)
}

/// `true` if the agent's position lies within `2·radius` of an older entry of
/// its own trail.
pub fn self_collision(agent: &Agent) -> bool {
    let skip = self_exclusion_window(&agent.kin);
    if agent.trail.len() <= skip {
        return false;
    }
    let threshold = (2.0 * agent.kin.radius).powi(2);
    agent
        .trail
        .without_recent(skip)
        .iter()
        .any(|p| p.is_finite() && p.distance_sq(agent.pos) <= threshold)
}

/// `true` if the agent's position lies strictly within `radius` of any drawn
/// point of `other`'s trail.
pub fn cross_collision(agent: &Agent, other: &Agent) -> bool {
    let threshold = agent.kin.radius * agent.kin.radius;
    other.trail.drawn().any(|p| p.distance_sq(agent.pos) < threshold)
}

/// Run every test in order wall, own trail, then every other agent in the
/// order given.  `others` may include `agent` itself; it is skipped by ID.
pub fn detect<'a, I>(agent: &Agent, others: I, bounds: &Bounds) -> Option<Collision>
where
    I: IntoIterator<Item = &'a Agent>,
{
    if wall_collision(agent.pos, bounds) {
        return Some(Collision::Wall);
    }
    if self_collision(agent) {
        return Some(Collision::SelfTrail);
    }
    others
        .into_iter()
        .filter(|o| o.id != agent.id)
        .find(|o| cross_collision(agent, o))
        .map(|o| Collision::Opponent(o.id))
}
