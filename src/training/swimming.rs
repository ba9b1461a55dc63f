use crate::error::ValidationError;
use crate::training::{positive, Training, TrainingBase, M_IN_KM};
use crate::types::activity::ActivityKind;

/// Pool swimming. `action` counts strokes; mean speed comes from pool
/// geometry rather than stroke count.
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    base: TrainingBase,
    length_pool: f64,
    count_pool: u64,
}

impl Swimming {
    const LEN_STEP: f64 = 1.38;
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(
        action: u64,
        duration: f64,
        weight: f64,
        length_pool: f64,
        count_pool: u64,
    ) -> Result<Self, ValidationError> {
        let base = TrainingBase::new(action, duration, weight)?;
        let length_pool = positive("length_pool", length_pool)?;
        if count_pool == 0 {
            return Err(ValidationError::NonPositive {
                field: "count_pool",
                value: 0.0,
            });
        }

        Ok(Self {
            base,
            length_pool,
            count_pool,
        })
    }

    pub fn length_pool(&self) -> f64 {
        self.length_pool
    }

    pub fn count_pool(&self) -> u64 {
        self.count_pool
    }
}

impl Training for Swimming {
    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn kind(&self) -> ActivityKind {
        ActivityKind::Swimming
    }

    fn step_length(&self) -> f64 {
        Self::LEN_STEP
    }

    fn get_mean_speed(&self) -> f64 {
        self.length_pool * self.count_pool as f64 / M_IN_KM / self.base.duration()
    }

    fn get_spent_calories(&self) -> f64 {
        (self.get_mean_speed() + Self::CALORIES_MEAN_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.base.weight()
            * self.base.duration()
    }
}
