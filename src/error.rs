use thiserror::Error;

/// Process-level error carrying the exit code the binary should return.
///
/// Exit codes:
/// - `2`: bad input (unknown tag, wrong arity, bad value, unreadable or malformed
///   package file, invalid `WORKOUT_FORMAT`)
/// - `3`: statistics that cannot be computed (zero duration or height, non-finite result)
/// - `4`: output that cannot be serialized or written to stdout
#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

/// Errors raised while building or evaluating a single workout.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkoutError {
    #[error("Unknown workout type: '{0}'")]
    UnknownWorkoutType(String),

    #[error("Workout '{tag}' expects {expected} values, got {got}")]
    ArgumentCount {
        tag: String,
        expected: usize,
        got: usize,
    },

    #[error("Invalid {field} value {value}: {reason}")]
    InvalidValue {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Invalid number '{0}'")]
    InvalidNumber(String),

    #[error("Duration must be non-zero to compute mean speed")]
    ZeroDuration,

    #[error("Height must be non-zero to compute walking calories")]
    ZeroHeight,

    #[error("Non-finite {0} computed for workout")]
    NonFinite(&'static str),
}

impl WorkoutError {
    /// Whether the error comes from the raw input rather than from the formulas.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            WorkoutError::UnknownWorkoutType(_)
                | WorkoutError::ArgumentCount { .. }
                | WorkoutError::InvalidValue { .. }
                | WorkoutError::InvalidNumber(_)
        )
    }
}

impl From<WorkoutError> for AppError {
    fn from(err: WorkoutError) -> Self {
        let code = if err.is_input_error() { 2 } else { 3 };
        AppError::new(code, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tag_maps_to_input_exit_code() {
        let err: AppError = WorkoutError::UnknownWorkoutType("XXX".to_string()).into();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("XXX"));
    }

    #[test]
    fn zero_duration_maps_to_computation_exit_code() {
        let err: AppError = WorkoutError::ZeroDuration.into();
        assert_eq!(err.exit_code(), 3);
    }
}
