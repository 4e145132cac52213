//! Shared domain types.
//!
//! Workouts are a closed set of variants, so each kind carries its own fields and
//! every computation matches exhaustively over [`Training`].

use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::WorkoutError;

/// Minutes in one hour; used to precompute `duration_minutes`.
pub const MIN_IN_H: f64 = 60.0;

/// Centimetres in one metre.
pub const CM_IN_M: f64 = 100.0;

/// The workout kinds a sensor package can describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutKind {
    Swimming,
    Running,
    SportsWalking,
}

impl WorkoutKind {
    /// All kinds, in the order they are listed to users.
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Swimming,
        WorkoutKind::Running,
        WorkoutKind::SportsWalking,
    ];

    /// Short sensor tag (`SWM`, `RUN`, `WLK`).
    pub fn tag(self) -> &'static str {
        match self {
            WorkoutKind::Swimming => "SWM",
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
        }
    }

    /// Name shown in the summary line.
    pub fn display_name(self) -> &'static str {
        match self {
            WorkoutKind::Swimming => "Swimming",
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
        }
    }

    /// Positional field names expected in a package of this kind.
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            WorkoutKind::Swimming => &["action", "duration", "weight", "length_pool", "count_pool"],
            WorkoutKind::Running => &["action", "duration", "weight"],
            WorkoutKind::SportsWalking => &["action", "duration", "weight", "height"],
        }
    }

    /// Number of positional values a package of this kind must carry.
    pub fn arity(self) -> usize {
        self.fields().len()
    }

    /// Resolve a sensor tag. Matching is exact and case-sensitive.
    pub fn from_tag(tag: &str) -> Result<Self, WorkoutError> {
        WorkoutKind::ALL
            .into_iter()
            .find(|kind| kind.tag() == tag)
            .ok_or_else(|| WorkoutError::UnknownWorkoutType(tag.to_string()))
    }
}

impl FromStr for WorkoutKind {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorkoutKind::from_tag(s)
    }
}

/// How summaries are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One formatted summary line per workout.
    #[default]
    Text,
    /// A JSON array of summary objects.
    Json,
}

/// Fields every workout kind shares.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingBase {
    /// Steps (running, walking) or strokes (swimming).
    pub action: u32,
    /// Hours.
    pub duration: f64,
    /// Kilograms.
    pub weight: f64,
    /// `duration` in minutes, fixed at construction.
    pub duration_minutes: f64,
}

impl TrainingBase {
    pub fn new(action: u32, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
            duration_minutes: duration * MIN_IN_H,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    pub base: TrainingBase,
}

impl Running {
    pub fn new(action: u32, duration: f64, weight: f64) -> Self {
        Self {
            base: TrainingBase::new(action, duration, weight),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    pub base: TrainingBase,
    /// Centimetres.
    pub height: f64,
    pub height_metre: f64,
}

impl SportsWalking {
    pub fn new(action: u32, duration: f64, weight: f64, height: f64) -> Self {
        Self {
            base: TrainingBase::new(action, duration, weight),
            height,
            height_metre: height / CM_IN_M,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    pub base: TrainingBase,
    /// Metres per lap.
    pub length_pool: f64,
    /// Laps swum.
    pub count_pool: f64,
}

impl Swimming {
    pub fn new(action: u32, duration: f64, weight: f64, length_pool: f64, count_pool: f64) -> Self {
        Self {
            base: TrainingBase::new(action, duration, weight),
            length_pool,
            count_pool,
        }
    }
}

/// A constructed workout, ready for statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Training {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Training {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            Training::Running(_) => WorkoutKind::Running,
            Training::SportsWalking(_) => WorkoutKind::SportsWalking,
            Training::Swimming(_) => WorkoutKind::Swimming,
        }
    }

    pub fn base(&self) -> &TrainingBase {
        match self {
            Training::Running(t) => &t.base,
            Training::SportsWalking(t) => &t.base,
            Training::Swimming(t) => &t.base,
        }
    }
}

impl From<Running> for Training {
    fn from(value: Running) -> Self {
        Training::Running(value)
    }
}

impl From<SportsWalking> for Training {
    fn from(value: SportsWalking) -> Self {
        Training::SportsWalking(value)
    }
}

impl From<Swimming> for Training {
    fn from(value: Swimming) -> Self {
        Training::Swimming(value)
    }
}

/// One raw sensor record: a workout tag and its positional values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub tag: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(tag: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self {
            tag: tag.into(),
            data: data.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_resolve_to_kinds() {
        assert_eq!(WorkoutKind::from_tag("SWM").unwrap(), WorkoutKind::Swimming);
        assert_eq!(WorkoutKind::from_tag("RUN").unwrap(), WorkoutKind::Running);
        assert_eq!("WLK".parse::<WorkoutKind>().unwrap(), WorkoutKind::SportsWalking);
    }

    #[test]
    fn tag_lookup_is_case_sensitive() {
        let err = WorkoutKind::from_tag("run").unwrap_err();
        assert_eq!(err, WorkoutError::UnknownWorkoutType("run".to_string()));
    }

    #[test]
    fn arity_matches_constructor_fields() {
        assert_eq!(WorkoutKind::Swimming.arity(), 5);
        assert_eq!(WorkoutKind::Running.arity(), 3);
        assert_eq!(WorkoutKind::SportsWalking.arity(), 4);
    }

    #[test]
    fn derived_fields_are_precomputed() {
        let walk = SportsWalking::new(9000, 1.5, 75.0, 180.0);
        assert!((walk.base.duration_minutes - 90.0).abs() < 1e-12);
        assert!((walk.height_metre - 1.8).abs() < 1e-12);
        assert_eq!(Training::from(walk).kind(), WorkoutKind::SportsWalking);
    }
}
