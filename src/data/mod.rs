//! Bundled input data.

pub mod sample;

pub use sample::{SAMPLE_PACKAGES, sample_packages};
