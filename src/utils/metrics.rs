//! Accuracy metrics for forecast evaluation.

use crate::error::{ForecastError, Result};

/// Accuracy metrics reported for a smoothing run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccuracyMetrics {
    /// Mean Absolute Deviation
    pub mad: f64,
    /// Mean Squared Error
    pub mse: f64,
    /// Mean Absolute Percentage Error, in percent
    pub mape: f64,
}

/// Calculate accuracy metrics between actual and predicted values.
///
/// # Arguments
/// * `actual` - Actual observed values
/// * `predicted` - Predicted values aligned index-by-index with `actual`
///
/// # Errors
/// Fails on empty or mismatched input, and whenever MAPE is undefined
/// (see [`mape`]).
pub fn calculate_metrics(actual: &[f64], predicted: &[f64]) -> Result<AccuracyMetrics> {
    check_aligned(actual, predicted)?;

    Ok(AccuracyMetrics {
        mad: mad(actual, predicted),
        mse: mse(actual, predicted),
        mape: mape(actual, predicted)?,
    })
}

/// Calculate MAD between two slices.
pub fn mad(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() != predicted.len() || actual.is_empty() {
        return f64::NAN;
    }
    actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).abs())
        .sum::<f64>()
        / actual.len() as f64
}

/// Calculate MSE between two slices.
pub fn mse(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() != predicted.len() || actual.is_empty() {
        return f64::NAN;
    }
    actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).powi(2))
        .sum::<f64>()
        / actual.len() as f64
}

/// Calculate MAPE (in percent) between two slices.
///
/// The mean of `|a - p| / a` is taken first and scaled by 100 afterwards;
/// the grid search relies on this exact operation order.
///
/// # Errors
/// `DivisionByZero` for a zero observation, `NonPositiveValue` for a
/// negative one.
pub fn mape(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    check_aligned(actual, predicted)?;

    let mut sum = 0.0;
    for (index, (&a, &p)) in actual.iter().zip(predicted.iter()).enumerate() {
        sum += percentage_term(index, a, p)?;
    }
    Ok(sum / actual.len() as f64 * 100.0)
}

/// Check that every observation can serve as a MAPE denominator.
pub fn ensure_positive(values: &[f64]) -> Result<()> {
    for (index, &value) in values.iter().enumerate() {
        check_denominator(index, value)?;
    }
    Ok(())
}

/// One `|a - p| / a` term.
#[inline]
pub(crate) fn percentage_term(index: usize, actual: f64, predicted: f64) -> Result<f64> {
    check_denominator(index, actual)?;
    Ok((actual - predicted).abs() / actual)
}

#[inline]
fn check_denominator(index: usize, value: f64) -> Result<()> {
    if value == 0.0 {
        return Err(ForecastError::DivisionByZero { index });
    }
    if value < 0.0 {
        return Err(ForecastError::NonPositiveValue { index, value });
    }
    Ok(())
}

fn check_aligned(actual: &[f64], predicted: &[f64]) -> Result<()> {
    if actual.is_empty() || predicted.is_empty() {
        return Err(ForecastError::EmptyData);
    }
    if actual.len() != predicted.len() {
        return Err(ForecastError::DimensionMismatch {
            expected: actual.len(),
            got: predicted.len(),
        });
    }
    Ok(())
}
