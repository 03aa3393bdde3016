//! Error types for parameter parsing and projection runs

use thiserror::Error;

/// Hard cap on the projection horizon. A century of daily records is far
/// beyond any meaningful planning horizon; inputs past it would only grow
/// the output vector without bound.
pub const MAX_PROJECTION_DAYS: i64 = 36_500;

#[derive(Error, Debug)]
pub enum ProjectionError {
    #[error("required field `{0}` is missing")]
    MissingField(&'static str),

    #[error("field `{field}` has invalid value `{value}`")]
    InvalidField { field: &'static str, value: String },

    #[error("initial balance must be non-zero to compute percentage profit")]
    ZeroInitialBalance,

    #[error("projection horizon of {0} days exceeds the maximum of {MAX_PROJECTION_DAYS}")]
    HorizonTooLong(i64),

    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ProjectionError>;
