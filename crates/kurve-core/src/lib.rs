//! `kurve-core`: foundational types for the `kurve` trail-arena engine.
//!
//! Every other `kurve-*` crate builds on the geometry, IDs, actions and
//! configuration defined here.  External dependencies are `rand` and
//! `thiserror`, with `serde` behind a feature flag.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`geo`]         | `Vec2`, `Bounds`, wall normals                        |
//! | [`action`]      | `Action`, `ActionSet`, `Steering`                     |
//! | [`time`]        | `Tick`                                                |
//! | [`rng`]         | `AgentRng` (per-agent), `SimRng` (arena-level)        |
//! | [`config`]      | `ArenaConfig`, `Kinematics`, `GapConfig`              |
//! | [`error`]       | `KurveError`, `KurveResult`                           |
//!
//! # Coordinate frame
//!
//! Screen convention: origin top-left, `x` to the right, `y` down.  A
//! positive heading change therefore rotates the velocity clockwise on
//! screen, which is what the game calls steering *right*.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to config and geometry.     |

pub mod action;
pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use action::{Action, ActionSet, Steering};
pub use config::{ArenaConfig, GapConfig, Kinematics};
pub use error::{KurveError, KurveResult};
pub use geo::{Bounds, Vec2, Wall};
pub use ids::AgentId;
pub use rng::{AgentRng, SimRng};
pub use time::Tick;
