use crate::dispatch::WorkoutKind;
use crate::errors::WorkoutError;
use crate::models::Session;
use crate::training::{Training, M_IN_KM};

pub const LEN_STROKE_M: f64 = 1.38; // stroke length (m)
const CALORIES_SPEED_SHIFT: f64 = 1.1;
const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Workout: swimming. Speed comes from the pool, not from the stroke count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    pub session: Session,
    pub pool_length_m: u32,
    pub lap_count: u32,
}

impl Swimming {
    pub fn new(
        action: u32,
        duration_h: f64,
        weight_kg: f64,
        pool_length_m: u32,
        lap_count: u32,
    ) -> Self {
        Self {
            session: Session::new(action, duration_h, weight_kg),
            pool_length_m,
            lap_count,
        }
    }
}

impl Training for Swimming {
    fn label(&self) -> &'static str {
        WorkoutKind::Swimming.label()
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn step_length_m(&self) -> f64 {
        LEN_STROKE_M
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m as f64 * self.lap_count as f64 / M_IN_KM / self.session.duration_h
    }

    fn spent_calories_kcal(&self) -> Result<f64, WorkoutError> {
        Ok((self.mean_speed_kmh() + CALORIES_SPEED_SHIFT)
            * CALORIES_WEIGHT_MULTIPLIER
            * self.session.weight_kg)
    }
}
