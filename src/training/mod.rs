//! Workout calculations.
//!
//! Every activity shares [`TrainingBase`] and the default distance and speed
//! formulas of [`Training`]; each variant supplies its own calorie formula
//! and may override step length or mean speed.

mod running;
mod swimming;
mod walking;

pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;

use crate::error::ValidationError;
use crate::types::activity::ActivityKind;
use crate::types::message::InfoMessage;

pub const M_IN_KM: f64 = 1000.0;
pub const MINUTES_IN_HOUR: f64 = 60.0;
/// Default step length in meters, used by running and walking.
pub const LEN_STEP: f64 = 0.65;

/// Readings shared by every activity.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingBase {
    action: u64,
    duration: f64,
    weight: f64,
}

impl TrainingBase {
    pub fn new(action: u64, duration: f64, weight: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            action,
            duration: positive("duration", duration)?,
            weight: positive("weight", weight)?,
        })
    }

    pub fn action(&self) -> u64 {
        self.action
    }

    /// Hours, always > 0.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

pub trait Training: Send + Sync {
    fn base(&self) -> &TrainingBase;

    fn kind(&self) -> ActivityKind;

    fn step_length(&self) -> f64 {
        LEN_STEP
    }

    /// Distance in km.
    fn get_distance(&self) -> f64 {
        self.base().action() as f64 * self.step_length() / M_IN_KM
    }

    /// Mean speed in km/h.
    fn get_mean_speed(&self) -> f64 {
        self.get_distance() / self.base().duration()
    }

    fn get_spent_calories(&self) -> f64;

    fn show_training_info(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.kind().label(),
            duration: self.base().duration(),
            distance: self.get_distance(),
            speed: self.get_mean_speed(),
            calories: self.get_spent_calories(),
        }
    }
}

pub(crate) fn positive(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field });
    }
    if value <= 0.0 {
        return Err(ValidationError::NonPositive { field, value });
    }
    Ok(value)
}

/// Converts a raw reading into a non-negative whole count.
pub(crate) fn whole_count(field: &'static str, value: f64) -> Result<u64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field });
    }
    if value < 0.0 {
        return Err(ValidationError::Negative { field, value });
    }
    if value.fract() != 0.0 || value > u64::MAX as f64 {
        return Err(ValidationError::NotWhole { field, value });
    }
    Ok(value as u64)
}
