use crate::dispatch::WorkoutKind;
use crate::errors::WorkoutError;
use crate::models::Session;
use crate::training::Training;

const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

/// Workout: sports (race) walking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    pub session: Session,
    pub height_cm: f64,
}

impl SportsWalking {
    pub fn new(action: u32, duration_h: f64, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            session: Session::new(action, duration_h, weight_kg),
            height_cm,
        }
    }
}

/// `a // b` on floats: the quotient floored toward negative infinity.
#[inline]
fn floor_div(a: f64, b: f64) -> f64 {
    (a / b).floor()
}

impl Training for SportsWalking {
    fn label(&self) -> &'static str {
        WorkoutKind::SportsWalking.label()
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn spent_calories_kcal(&self) -> Result<f64, WorkoutError> {
        let s = &self.session;
        let speed = self.mean_speed_kmh();
        Ok((CALORIES_WEIGHT_MULTIPLIER * s.weight_kg
            + floor_div(speed.powi(2), self.height_cm)
                * CALORIES_SPEED_HEIGHT_MULTIPLIER
                * s.weight_kg)
            * s.duration_min())
    }
}
