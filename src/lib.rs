//! `workout-stats` library crate.
//!
//! The binary (`workout`) is a thin wrapper around this library so that:
//!
//! - formulas and formatting are testable without spawning processes
//! - the factory and pipeline are reusable from other front-ends

pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod models;
pub mod report;
