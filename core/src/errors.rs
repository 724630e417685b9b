// core/src/errors.rs
use thiserror::Error;

/// Failures when building a workout or its summary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkoutError {
    #[error("unknown workout code: {0:?}")]
    UnknownWorkoutCode(String),

    #[error("{code}: expected {expected} parameters, got {got}")]
    ArityMismatch {
        code: String,
        expected: usize,
        got: usize,
    },

    /// Calorie model requested from a workout that has none (the bare base session).
    #[error("{training_type} has no calorie model")]
    NotImplemented { training_type: &'static str },

    #[error("{code}: parameter `{name}` must be a non-negative whole number, got {value}")]
    InvalidParameter {
        code: String,
        name: &'static str,
        value: f64,
    },
}

/// Failures when reading a package file for the driver.
#[derive(Error, Debug)]
pub enum PackageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("parse error at {path}: {message}")]
    Parse { path: String, message: String },
}
