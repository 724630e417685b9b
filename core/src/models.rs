/// Raw sensor readings shared by every workout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Session {
    pub action: u32,      // steps, or strokes when swimming
    pub duration_h: f64,  // hours, must be > 0
    pub weight_kg: f64,   // kg
}

impl Session {
    pub fn new(action: u32, duration_h: f64, weight_kg: f64) -> Self {
        Self { action, duration_h, weight_kg }
    }

    #[inline]
    pub fn duration_min(&self) -> f64 {
        self.duration_h * crate::training::MIN_IN_H
    }
}
