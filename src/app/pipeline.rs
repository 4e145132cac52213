//! Shared "package pipeline" used by every command.
//!
//! package -> workout -> statistics -> summary
//!
//! Packages are processed one at a time in input order; the first failure stops
//! the run, leaving earlier summaries already delivered to the sink.

use tracing::{debug, info, warn};

use crate::domain::Package;
use crate::error::{AppError, WorkoutError};
use crate::report::InfoMessage;

/// Decode one package and compute its summary.
pub fn summarize(package: &Package) -> Result<InfoMessage, WorkoutError> {
    let training = package.to_training()?;
    let summary = training.show_training_info()?;
    debug!(
        tag = %package.tag,
        distance = summary.distance,
        speed = summary.speed,
        calories = summary.calories,
        "workout summarized"
    );
    Ok(summary)
}

/// Summarize packages in order, handing each summary to `sink`.
///
/// A sink error stops the run like a bad package does. Returns the number of
/// packages processed.
pub fn run_packages<F>(packages: &[Package], mut sink: F) -> Result<usize, AppError>
where
    F: FnMut(&InfoMessage) -> Result<(), AppError>,
{
    for (idx, package) in packages.iter().enumerate() {
        let summary = summarize(package).map_err(|e| {
            warn!(index = idx, tag = %package.tag, error = %e, "package rejected");
            AppError::from(e)
        })?;
        sink(&summary)?;
    }
    info!(count = packages.len(), "packages processed");
    Ok(packages.len())
}

/// Summarize every package, stopping at the first failure.
pub fn summarize_all(packages: &[Package]) -> Result<Vec<InfoMessage>, AppError> {
    let mut out = Vec::with_capacity(packages.len());
    run_packages(packages, |summary| {
        out.push(summary.clone());
        Ok(())
    })?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_packages;

    #[test]
    fn samples_produce_golden_lines() {
        let lines: Vec<String> = summarize_all(&sample_packages())
            .unwrap()
            .iter()
            .map(InfoMessage::message)
            .collect();

        assert_eq!(
            lines,
            [
                "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000.",
                "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; Ср. скорость: 9.750 км/ч; Потрачено ккал: 797.805.",
                "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; Ср. скорость: 5.850 км/ч; Потрачено ккал: 348.945.",
            ]
        );
    }

    #[test]
    fn stops_at_first_bad_package_after_emitting_earlier_ones() {
        let packages = vec![
            Package::new("RUN", vec![15000.0, 1.0, 75.0]),
            Package::new("XXX", vec![1.0]),
            Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
        ];
        let mut seen = Vec::new();
        let err = run_packages(&packages, |s| {
            seen.push(s.training_type.clone());
            Ok(())
        })
        .unwrap_err();

        assert_eq!(seen, ["Running"]);
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("XXX"));
    }

    #[test]
    fn sink_error_stops_the_run() {
        let mut calls = 0;
        let err = run_packages(&sample_packages(), |_| {
            calls += 1;
            Err(AppError::new(4, "write failed"))
        })
        .unwrap_err();

        assert_eq!(calls, 1);
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn zero_duration_fails_with_computation_code() {
        let err = summarize_all(&[Package::new("RUN", vec![15000.0, 0.0, 75.0])]).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }
}
