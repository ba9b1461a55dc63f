#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} must be positive (got {value})")]
    NonPositive { field: &'static str, value: f64 },
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },
    #[error("{field} must be a whole number (got {value})")]
    NotWhole { field: &'static str, value: f64 },
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    #[error("Unsupported activity: {0}")]
    UnsupportedActivity(String),
    #[error("Invalid arity for {code}: expected {expected} values, got {got}")]
    InvalidArity {
        code: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("Invalid parameter: {0}")]
    InvalidParameter(#[from] ValidationError),
}
