use crate::dispatch::WorkoutKind;
use crate::errors::WorkoutError;
use crate::models::Session;
use crate::training::{Training, M_IN_KM};

const CALORIES_SPEED_MULTIPLIER: f64 = 18.0;
const CALORIES_SPEED_SHIFT: f64 = 20.0;

/// Workout: running.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    pub session: Session,
}

impl Running {
    pub fn new(action: u32, duration_h: f64, weight_kg: f64) -> Self {
        Self { session: Session::new(action, duration_h, weight_kg) }
    }
}

impl Training for Running {
    fn label(&self) -> &'static str {
        WorkoutKind::Running.label()
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn spent_calories_kcal(&self) -> Result<f64, WorkoutError> {
        let s = &self.session;
        Ok((CALORIES_SPEED_MULTIPLIER * self.mean_speed_kmh() - CALORIES_SPEED_SHIFT)
            * s.weight_kg
            / M_IN_KM
            * s.duration_min())
    }
}
