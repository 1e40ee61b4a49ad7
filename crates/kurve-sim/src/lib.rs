//! `kurve-sim`: headless arena for the kurve engine.
//!
//! # Two-phase tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Snapshot: freeze every agent's trail and the active flags.
//!   ② Intents: call Policy::decide for each active agent
//!      (parallel with the `parallel` feature).
//!   ③ Apply: advance each agent by its action, ascending AgentId.
//!   ④ Collide: test every moved agent against the walls, its own trail
//!      and all other trails (including disabled agents'), then disable
//!      every colliding agent at once.
//! ```
//!
//! Because collisions are evaluated only after every agent has moved, agent
//! order never changes the outcome of a tick.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the intent phase on Rayon's thread pool.          |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use kurve_agent::AgentSpec;
//! use kurve_behavior::{Straight, WallEvader};
//! use kurve_core::ArenaConfig;
//! use kurve_sim::{ArenaBuilder, NoopObserver};
//!
//! let config = ArenaConfig::classic(800.0, 600.0);
//! let kin = config.classic_kinematics(30.0, 1.0, 2.0)?;
//! let mut arena = ArenaBuilder::new(config)
//!     .agent(AgentSpec::new(kin), WallEvader::default())
//!     .agent(AgentSpec::new(kin), Straight)
//!     .build()?;
//! let outcome = arena.run(&mut NoopObserver)?;
//! ```

pub mod arena;
pub mod builder;
pub mod error;
pub mod observer;


pub use arena::{Arena, Elimination, Outcome};
pub use builder::ArenaBuilder;
pub use error::{SimError, SimResult};
pub use observer::{ArenaEvent, ArenaObserver, EventLog, NoopObserver};
