//! `kurve-behavior`: decision policies and the wall-evasion reflex.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                       |
//! |--------------|----------------------------------------------------------------|
//! | [`context`]  | `Snapshot<'a>`: frozen tick view shared by all policies        |
//! | [`policy`]   | `Policy` trait                                                 |
//! | [`evasion`]  | `admissible_actions`, `TurnState`, `EvasionConfig`             |
//! | [`reflex`]   | `WallEvader`: straight unless the walls demand a turn          |
//! | [`random`]   | `RandomSteering`: random manoeuvres filtered by the reflex     |
//! | [`scripted`] | `Straight`, `FixedActions`                                     |
//! | [`error`]    | `BehaviorError`, `BehaviorResult<T>`                           |
//!
//! # Design notes
//!
//! The arena tick works in two phases:
//!
//! 1. **Intent phase**: every active agent's policy is asked for one
//!    [`Action`](kurve_core::Action).  All reads go through `&Snapshot`; no
//!    agent is moved yet.
//!
//! 2. **Apply phase** (sequential): actions are applied in ascending agent-id
//!    order, then collisions are evaluated for everyone at once.
//!
//! Policies therefore never see another agent's mid-tick state.  A policy may
//! keep private state (queued plans, its own RNG) behind `&mut self`.

pub mod context;
pub mod error;
pub mod evasion;
pub mod policy;
pub mod random;
pub mod reflex;
pub mod scripted;

#[cfg(test)]
mod tests;

pub use context::Snapshot;
pub use error::{BehaviorError, BehaviorResult};
pub use evasion::{EvasionConfig, TurnState, admissible_actions};
pub use policy::Policy;
pub use random::{RandomSteering, RandomSteeringConfig};
pub use reflex::WallEvader;
pub use scripted::{FixedActions, Straight};
