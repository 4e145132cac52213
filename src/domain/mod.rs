//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - workout kinds and their sensor tags (`WorkoutKind`)
//! - the per-kind workout values (`Training`, `Running`, `SportsWalking`, `Swimming`)
//! - raw sensor packages (`Package`) and output settings (`OutputFormat`)

pub mod types;

pub use types::*;
