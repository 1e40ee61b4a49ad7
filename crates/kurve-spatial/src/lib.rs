//! `kurve-spatial`: trail geometry and spatial indexing.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                     |
//! |-----------|--------------------------------------------------------------|
//! | [`runs`]  | `gap_free_runs`: split a trail into drawn polylines          |
//! | [`index`] | `TrailIndex` (R-tree of segments), `TrailIndexBuilder`       |
//! | [`error`] | `SpatialError`, `SpatialResult<T>`                           |
//!
//! The look-ahead planner asks one question of this crate: how far along a
//! predicted path does the path first come within a buffer distance of any
//! trail?  [`TrailIndex::first_conflict`] answers it one path segment at a
//! time: the R-tree yields the trail segments near it and the entry point is
//! solved against each of them.

pub mod error;
pub mod index;
pub mod runs;


pub use error::{SpatialError, SpatialResult};
pub use index::{TrailIndex, TrailIndexBuilder};
pub use runs::gap_free_runs;
