use crate::error::AppError;
use crate::training::{whole_count, Running, SportsWalking, Swimming, Training};
use crate::types::activity::{ActivityKind, WorkoutRecord};

/// Builds the training for `activity_code`, binding `values` positionally in
/// the order `action, duration, weight[, height | length_pool, count_pool]`.
pub fn build(activity_code: &str, values: &[f64]) -> Result<Box<dyn Training>, AppError> {
    let kind = ActivityKind::from_code(activity_code)
        .ok_or_else(|| AppError::UnsupportedActivity(activity_code.to_string()))?;

    if values.len() != kind.arity() {
        return Err(AppError::InvalidArity {
            code: kind.code(),
            expected: kind.arity(),
            got: values.len(),
        });
    }

    let action = whole_count("action", values[0])?;
    let (duration, weight) = (values[1], values[2]);

    let training: Box<dyn Training> = match kind {
        ActivityKind::Running => Box::new(Running::new(action, duration, weight)?),
        ActivityKind::SportsWalking => {
            Box::new(SportsWalking::new(action, duration, weight, values[3])?)
        }
        ActivityKind::Swimming => {
            let count_pool = whole_count("count_pool", values[4])?;
            Box::new(Swimming::new(action, duration, weight, values[3], count_pool)?)
        }
    };

    Ok(training)
}

pub fn build_record(record: &WorkoutRecord) -> Result<Box<dyn Training>, AppError> {
    build(&record.code, &record.values)
}
