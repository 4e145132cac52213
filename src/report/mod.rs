//! Reporting utilities: workout summaries and their terminal/JSON rendering.

pub mod format;

pub use format::*;
