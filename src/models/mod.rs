//! Workout statistics.
//!
//! Formulas are small, pure functions matched over the workout kind so the
//! pipeline can stay generic.

pub mod training;

pub use training::*;
