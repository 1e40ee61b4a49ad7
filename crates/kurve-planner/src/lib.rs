//! `kurve-planner`: N-step look-ahead planning.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                       |
//! |--------------|----------------------------------------------------------------|
//! | [`config`]   | `PlannerConfig`, `StepLength`, `ReplanPeriod`, `Cadence`       |
//! | [`sequence`] | `enumerate_sequences`: every distinct N-action sequence        |
//! | [`search`]   | `collidable_trails`, `evaluate` → `SearchResult`               |
//! | [`planner`]  | `LookaheadPlanner`: the `Policy` with a queued plan            |
//! | [`error`]    | `PlannerError`, `PlannerResult<T>`                             |
//!
//! # Scoring
//!
//! Scores are sums of penalties (never rewards), so a candidate's running
//! score only decreases.  With `γ = discount_factor^(1 / replan_period)`:
//!
//! ```text
//! wall   −wall_penalty  · γ^t    for every tick t the ghost is outside the
//!                                bounds shrunk by the agent's radius
//! trail  −trail_penalty · γ^t    once, at the first tick t the predicted
//!                                path comes within 2·radius of any trail
//! ```
//!
//! A full replanning interval therefore always decays penalties by exactly
//! `discount_factor`, whatever the horizon.

pub mod config;
pub mod error;
pub mod planner;
pub mod search;
pub mod sequence;

#[cfg(test)]
mod tests;

pub use config::{Cadence, PlannerConfig, ReplanPeriod, StepLength};
pub use error::{PlannerError, PlannerResult};
pub use planner::LookaheadPlanner;
pub use search::{SearchResult, evaluate};
pub use sequence::enumerate_sequences;
