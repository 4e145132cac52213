//! Input helpers.
//!
//! - package decoding and the workout factory (`package`)

pub mod package;

pub use package::*;
