use crate::error::ValidationError;
use crate::training::{positive, Training, TrainingBase, MINUTES_IN_HOUR};
use crate::types::activity::ActivityKind;

#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    base: TrainingBase,
    height: f64,
}

impl SportsWalking {
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
    // km/h -> m/s
    const KMH_IN_MSEC: f64 = 0.278;
    // cm -> m
    const CM_IN_M: f64 = 100.0;

    /// `height` is in centimeters.
    pub fn new(action: u64, duration: f64, weight: f64, height: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            base: TrainingBase::new(action, duration, weight)?,
            height: positive("height", height)?,
        })
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Training for SportsWalking {
    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn kind(&self) -> ActivityKind {
        ActivityKind::SportsWalking
    }

    fn get_spent_calories(&self) -> f64 {
        let weight = self.base.weight();
        let speed_ms = self.get_mean_speed() * Self::KMH_IN_MSEC;
        let height_m = self.height / Self::CM_IN_M;

        (Self::CALORIES_WEIGHT_MULTIPLIER * weight
            + (speed_ms.powi(2) / height_m) * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER * weight)
            * (self.base.duration() * MINUTES_IN_HOUR)
    }
}
