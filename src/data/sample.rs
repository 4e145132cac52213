//! Built-in sample packages printed by `workout samples`.

use crate::domain::Package;

/// Sample sensor readings, in print order.
pub const SAMPLE_PACKAGES: [(&str, &[f64]); 3] = [
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15000.0, 1.0, 75.0]),
    ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
];

pub fn sample_packages() -> Vec<Package> {
    SAMPLE_PACKAGES
        .iter()
        .map(|(tag, data)| Package::new(*tag, data.to_vec()))
        .collect()
}
