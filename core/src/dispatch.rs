// core/src/dispatch.rs
use std::fmt;
use std::str::FromStr;

use crate::errors::WorkoutError;
use crate::running::Running;
use crate::swimming::Swimming;
use crate::training::Training;
use crate::walking::SportsWalking;

const RUN_PARAMS: &[&str] = &["action", "duration", "weight"];
const WLK_PARAMS: &[&str] = &["action", "duration", "weight", "height"];
const SWM_PARAMS: &[&str] = &["action", "duration", "weight", "pool_length", "lap_count"];

/// Workout types the sensor block can report, keyed by their short code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutKind {
    Running,
    SportsWalking,
    Swimming,
}

impl WorkoutKind {
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Running,
        WorkoutKind::SportsWalking,
        WorkoutKind::Swimming,
    ];

    pub fn code(self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    /// Label the summary shows for this kind.
    pub fn label(self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// Positional parameter names, in the order the package carries them.
    pub fn param_names(self) -> &'static [&'static str] {
        match self {
            WorkoutKind::Running => RUN_PARAMS,
            WorkoutKind::SportsWalking => WLK_PARAMS,
            WorkoutKind::Swimming => SWM_PARAMS,
        }
    }

    pub fn arity(self) -> usize {
        self.param_names().len()
    }

    /// Bind `params` positionally and construct the workout.
    pub fn build(self, params: &[f64]) -> Result<Box<dyn Training>, WorkoutError> {
        if params.len() != self.arity() {
            return Err(WorkoutError::ArityMismatch {
                code: self.code().to_string(),
                expected: self.arity(),
                got: params.len(),
            });
        }

        let action = self.count(params, 0)?;
        let (duration_h, weight_kg) = (params[1], params[2]);

        let workout: Box<dyn Training> = match self {
            WorkoutKind::Running => Box::new(Running::new(action, duration_h, weight_kg)),
            WorkoutKind::SportsWalking => {
                Box::new(SportsWalking::new(action, duration_h, weight_kg, params[3]))
            }
            WorkoutKind::Swimming => Box::new(Swimming::new(
                action,
                duration_h,
                weight_kg,
                self.count(params, 3)?,
                self.count(params, 4)?,
            )),
        };
        Ok(workout)
    }

    /// Integer-typed position: finite, non-negative, whole and within u32.
    fn count(self, params: &[f64], idx: usize) -> Result<u32, WorkoutError> {
        let value = params[idx];
        if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64 {
            Ok(value as u32)
        } else {
            Err(WorkoutError::InvalidParameter {
                code: self.code().to_string(),
                name: self.param_names()[idx],
                value,
            })
        }
    }
}

impl FromStr for WorkoutKind {
    type Err = WorkoutError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        WorkoutKind::ALL
            .into_iter()
            .find(|k| k.code() == code)
            .ok_or_else(|| WorkoutError::UnknownWorkoutCode(code.to_string()))
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Read one sensor package: resolve `code` and construct the matching workout.
pub fn read_package(code: &str, params: &[f64]) -> Result<Box<dyn Training>, WorkoutError> {
    let built = code.parse::<WorkoutKind>().and_then(|kind| kind.build(params));
    match &built {
        Ok(w) => log::debug!("package {} {:?} -> {}", code, params, w.label()),
        Err(e) => log::warn!("package {} {:?} rejected: {}", code, params, e),
    }
    built
}
