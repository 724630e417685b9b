// core/src/training.rs
use crate::errors::WorkoutError;
use crate::models::Session;
use crate::report::Summary;

pub const M_IN_KM: f64 = 1000.0;  // metres per kilometre
pub const MIN_IN_H: f64 = 60.0;   // minutes per hour
pub const LEN_STEP_M: f64 = 0.65; // step length (m)

/// Capability set every workout shares.
///
/// Distance and speed have generic defaults built on `session()` and
/// `step_length_m()`. The calorie model has no generic form: the default
/// body reports [`WorkoutError::NotImplemented`], and each concrete workout
/// overrides it.
pub trait Training: std::fmt::Debug + Send + Sync {
    /// Label shown in the summary.
    fn label(&self) -> &'static str;

    fn session(&self) -> &Session;

    /// Length covered per step or stroke (m).
    fn step_length_m(&self) -> f64 {
        LEN_STEP_M
    }

    /// Distance in km.
    fn distance_km(&self) -> f64 {
        self.session().action as f64 * self.step_length_m() / M_IN_KM
    }

    /// Mean speed in km/h. Assumes `duration_h > 0`.
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.session().duration_h
    }

    /// Calories spent (kcal).
    fn spent_calories_kcal(&self) -> Result<f64, WorkoutError> {
        Err(WorkoutError::NotImplemented {
            training_type: self.label(),
        })
    }

    /// Package the derived metrics for display.
    fn summary(&self) -> Result<Summary, WorkoutError> {
        let calories = self.spent_calories_kcal()?;
        let summary = Summary {
            training_type: self.label().to_string(),
            duration_h: self.session().duration_h,
            distance_km: self.distance_km(),
            speed_kmh: self.mean_speed_kmh(),
            calories_kcal: calories,
        };
        log::debug!("built summary: {:?}", summary);
        Ok(summary)
    }
}

/// The bare base session has no physical model for calories.
impl Training for Session {
    fn label(&self) -> &'static str {
        "Training"
    }

    fn session(&self) -> &Session {
        self
    }
}
