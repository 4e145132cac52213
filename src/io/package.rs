//! Sensor package decoding.
//!
//! A package is a workout tag followed by positional numbers. This module turns
//! packages into [`Training`] values and reads package files from disk.
//!
//! Rules:
//! - **Exact tags**: `SWM`, `RUN`, `WLK`; anything else is an unknown workout type
//! - **Exact arity**: the value count must match the workout's field list
//! - **Whole action counts**: steps/strokes must be a non-negative integer

use std::fs;
use std::path::Path;

use csv::StringRecord;

use crate::domain::{Package, Running, SportsWalking, Swimming, Training, WorkoutKind};
use crate::error::{AppError, WorkoutError};

/// Build a workout from its tag and positional values.
pub fn read_package(tag: &str, data: &[f64]) -> Result<Training, WorkoutError> {
    let kind = WorkoutKind::from_tag(tag)?;
    if data.len() != kind.arity() {
        return Err(WorkoutError::ArgumentCount {
            tag: tag.to_string(),
            expected: kind.arity(),
            got: data.len(),
        });
    }

    let action = action_count(data[0])?;
    let training = match kind {
        WorkoutKind::Running => Running::new(action, data[1], data[2]).into(),
        WorkoutKind::SportsWalking => SportsWalking::new(action, data[1], data[2], data[3]).into(),
        WorkoutKind::Swimming => Swimming::new(action, data[1], data[2], data[3], data[4]).into(),
    };
    Ok(training)
}

impl Package {
    /// Decode this package into a workout.
    pub fn to_training(&self) -> Result<Training, WorkoutError> {
        read_package(&self.tag, &self.data)
    }
}

fn action_count(value: f64) -> Result<u32, WorkoutError> {
    let invalid = |reason| WorkoutError::InvalidValue {
        field: "action",
        value,
        reason,
    };
    if !value.is_finite() || value < 0.0 {
        return Err(invalid("must be a non-negative number"));
    }
    if value.fract() != 0.0 {
        return Err(invalid("must be a whole number of steps or strokes"));
    }
    if value > f64::from(u32::MAX) {
        return Err(invalid("is too large"));
    }
    Ok(value as u32)
}

/// Build a package from one CSV record (`TAG,v1,v2,...`).
///
/// Returns `Ok(None)` for records with no non-empty fields.
pub fn package_from_record(record: &StringRecord) -> Result<Option<Package>, WorkoutError> {
    if record.iter().all(str::is_empty) {
        return Ok(None);
    }

    let mut fields = record.iter();
    let tag = fields.next().unwrap_or_default();

    let data = fields
        .map(|t| {
            t.parse::<f64>()
                .map_err(|_| WorkoutError::InvalidNumber(t.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Some(Package::new(tag, data)))
}

/// Load every package in a file.
///
/// `.json` files hold an array of `{"tag": .., "data": [..]}` objects; anything
/// else is read as headerless CSV, one package per row.
pub fn load_packages(path: &Path) -> Result<Vec<Package>, AppError> {
    let content = fs::read_to_string(path).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to read package file '{}': {e}", path.display()),
        )
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        return serde_json::from_str(&content).map_err(|e| {
            AppError::new(
                2,
                format!("Failed to parse package JSON '{}': {e}", path.display()),
            )
        });
    }

    parse_packages(&content)
}

/// Parse headerless CSV packages, skipping blank rows and `#` comments.
///
/// Errors report the 1-based line of the first bad row.
pub fn parse_packages(content: &str) -> Result<Vec<Package>, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(content.as_bytes());

    let mut packages = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| {
            let line = e.position().map(|p| p.line()).unwrap_or_default();
            AppError::new(2, format!("Line {line}: CSV parse error: {e}"))
        })?;

        let line = record.position().map(|p| p.line()).unwrap_or_default();
        match package_from_record(&record) {
            Ok(Some(package)) => packages.push(package),
            Ok(None) => {}
            Err(e) => return Err(AppError::new(2, format!("Line {line}: {e}"))),
        }
    }
    Ok(packages)
}
