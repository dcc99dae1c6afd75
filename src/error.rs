//! Error types for the des-forecast library.

use thiserror::Error;

/// Result type alias for forecast operations.
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Errors that can occur during smoothing and parameter search.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// Insufficient data points for the operation.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// An observation used as a MAPE denominator is zero.
    #[error("division by zero: observation at index {index} is zero")]
    DivisionByZero { index: usize },

    /// An observation used as a MAPE denominator is negative.
    #[error("non-positive observation at index {index}: {value}")]
    NonPositiveValue { index: usize, value: f64 },

    /// A smoothing weight lies outside the closed unit interval.
    #[error("parameter {name} out of range [0, 1]: {value}")]
    ParameterOutOfRange { name: &'static str, value: f64 },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Dimension mismatch between data structures.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Period (year) sequence is not strictly consecutive.
    #[error("period error: {0}")]
    PeriodError(String),

    /// Model has not been fitted yet.
    #[error("model must be fitted before prediction")]
    FitRequired,

    /// Missing values detected when not allowed.
    #[error("missing values detected in data")]
    MissingValues,
}
