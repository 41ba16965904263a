//! Shared data structures for the Growth Velocity scenario pipeline
//!
//! This module defines the core types flowing through the engine:
//! - `BaselineMetrics`: current-state business metrics (the opaque input record)
//! - `ModifierSet` / `Lever`: the five percentage levers and their declared ranges
//! - `Projection`: the derived-metric record recomputed on every evaluation
//! - `Status`: three-tier classification for dashboard emphasis

mod baseline;
mod modifiers;
mod projection;
mod status;

pub use baseline::*;
pub use modifiers::*;
pub use projection::*;
pub use status::*;
