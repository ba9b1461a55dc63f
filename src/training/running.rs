use crate::error::ValidationError;
use crate::training::{Training, TrainingBase, MINUTES_IN_HOUR, M_IN_KM};
use crate::types::activity::ActivityKind;

#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    base: TrainingBase,
}

impl Running {
    const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

    pub fn new(action: u64, duration: f64, weight: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            base: TrainingBase::new(action, duration, weight)?,
        })
    }
}

impl Training for Running {
    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn kind(&self) -> ActivityKind {
        ActivityKind::Running
    }

    fn get_spent_calories(&self) -> f64 {
        (Self::CALORIES_MEAN_SPEED_MULTIPLIER * self.get_mean_speed()
            + Self::CALORIES_MEAN_SPEED_SHIFT)
            * self.base.weight()
            / M_IN_KM
            * (self.base.duration() * MINUTES_IN_HOUR)
    }
}
