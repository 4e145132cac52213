//! Distance, speed and calorie formulas for each workout kind.
//!
//! Every statistic is a pure function of the immutable workout fields, so calling
//! any of these twice yields the same value.

use crate::domain::{SportsWalking, Swimming, Training, TrainingBase, WorkoutKind};
use crate::error::WorkoutError;
use crate::report::InfoMessage;

/// Metres in one kilometre.
pub const M_IN_KM: f64 = 1000.0;

/// Step length in metres (running, walking).
pub const LEN_STEP: f64 = 0.65;

/// Stroke length in metres (swimming).
pub const LEN_STROKE: f64 = 1.38;

/// km/h to m/s.
pub const KMH_IN_MSEC: f64 = 1000.0 / (60.0 * 60.0);

const RUN_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 1.79;

const WLK_WEIGHT_MULTIPLIER: f64 = 0.035;
const WLK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

const SWM_SPEED_SHIFT: f64 = 1.1;
const SWM_WEIGHT_MULTIPLIER: f64 = 2.0;

impl WorkoutKind {
    /// Metres covered per action unit.
    pub fn step_length(self) -> f64 {
        match self {
            WorkoutKind::Running | WorkoutKind::SportsWalking => LEN_STEP,
            WorkoutKind::Swimming => LEN_STROKE,
        }
    }
}

impl Training {
    /// Distance in km.
    pub fn distance(&self) -> f64 {
        f64::from(self.base().action) * self.kind().step_length() / M_IN_KM
    }

    /// Mean speed in km/h over the whole duration.
    ///
    /// Swimming measures speed from pool laps rather than strokes.
    pub fn mean_speed(&self) -> Result<f64, WorkoutError> {
        let duration = nonzero_duration(self.base())?;
        let speed = match self {
            Training::Running(_) | Training::SportsWalking(_) => self.distance() / duration,
            Training::Swimming(s) => s.length_pool * s.count_pool / M_IN_KM / duration,
        };
        Ok(speed)
    }

    /// Calories (kcal) spent during the workout.
    pub fn spent_calories(&self) -> Result<f64, WorkoutError> {
        let speed = self.mean_speed()?;
        match self {
            Training::Running(r) => Ok(running_calories(&r.base, speed)),
            Training::SportsWalking(w) => walking_calories(w, speed),
            Training::Swimming(s) => Ok(swimming_calories(s, speed)),
        }
    }

    /// Build the summary for this workout.
    pub fn show_training_info(&self) -> Result<InfoMessage, WorkoutError> {
        let distance = self.distance();
        let speed = self.mean_speed()?;
        let calories = self.spent_calories()?;

        for (name, value) in [("distance", distance), ("speed", speed), ("calories", calories)] {
            if !value.is_finite() {
                return Err(WorkoutError::NonFinite(name));
            }
        }

        Ok(InfoMessage {
            training_type: self.kind().display_name().to_string(),
            duration: self.base().duration,
            distance,
            speed,
            calories,
        })
    }
}

fn nonzero_duration(base: &TrainingBase) -> Result<f64, WorkoutError> {
    if base.duration == 0.0 {
        return Err(WorkoutError::ZeroDuration);
    }
    Ok(base.duration)
}

fn running_calories(base: &TrainingBase, speed: f64) -> f64 {
    (RUN_SPEED_MULTIPLIER * speed + RUN_SPEED_SHIFT) * base.weight / M_IN_KM * base.duration_minutes
}

fn walking_calories(w: &SportsWalking, speed: f64) -> Result<f64, WorkoutError> {
    if w.height_metre == 0.0 {
        return Err(WorkoutError::ZeroHeight);
    }
    let speed_ms = speed * KMH_IN_MSEC;
    Ok((WLK_WEIGHT_MULTIPLIER * w.base.weight
        + (speed_ms.powi(2) / w.height_metre) * WLK_SPEED_HEIGHT_MULTIPLIER * w.base.weight)
        * w.base.duration_minutes)
}

fn swimming_calories(s: &Swimming, speed: f64) -> f64 {
    (speed + SWM_SPEED_SHIFT) * SWM_WEIGHT_MULTIPLIER * s.base.weight * s.base.duration
}
