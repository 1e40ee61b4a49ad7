//! `kurve-agent`: the kinematic agent model shared by every player.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`agent`]       | `Agent`: position, heading, trail, `advance()`            |
//! | [`trail`]       | `Trail`: time-indexed points with gap markers             |
//! | [`gap`]         | `GapSchedule`: startblock / width / re-rolled distances   |
//! | [`builder`]     | `AgentSpec` (fluent construction + validation), `Color`   |
//! | [`collision`]   | wall, self-trail, and cross-agent trail tests             |
//! | [`error`]       | `AgentError`, `AgentResult<T>`                            |
//!
//! # Motion model
//!
//! Each tick an agent turns by at most one angular step, then moves one
//! `speed`-long chord along its new heading.  Steering continuously therefore
//! traces a regular polygon inscribed in a circle of radius
//! `speed / (2·sin(angular_step / 2))`.

pub mod agent;
pub mod builder;
pub mod collision;
pub mod error;
pub mod gap;
pub mod trail;


pub use agent::Agent;
pub use builder::{AgentSpec, Color};
pub use collision::Collision;
pub use error::{AgentError, AgentResult};
pub use gap::GapSchedule;
pub use trail::Trail;
