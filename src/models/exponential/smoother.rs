//! Double exponential smoothing core.
//!
//! Computes Holt's level and trend recursions over a whole series, the
//! one-step-ahead forecast sequence and its accuracy metrics.
//!
//! The model equations are:
//! - Level: `l_t = α × y_t + (1-α) × (l_{t-1} + b_{t-1})`
//! - Trend: `b_t = β × (l_t - l_{t-1}) + (1-β) × b_{t-1}`
//! - Forecast: `ŷ_{t+1} = l_t + b_t`
//!
//! with `l_0 = y_0` and `b_0 = y_1 - y_0`.

use crate::error::{ForecastError, Result};
use crate::utils::metrics::{calculate_metrics, percentage_term, AccuracyMetrics};

/// Smoothing weights for level (alpha) and trend (beta).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmoothingParameters {
    /// Level smoothing parameter (0 <= alpha <= 1).
    pub alpha: f64,
    /// Trend smoothing parameter (0 <= beta <= 1).
    pub beta: f64,
}

impl SmoothingParameters {
    /// Create validated parameters.
    ///
    /// Outside `[0, 1]` the updates stop being convex combinations, so
    /// both weights are rejected with `ParameterOutOfRange`.
    pub fn new(alpha: f64, beta: f64) -> Result<Self> {
        let params = Self { alpha, beta };
        params.validate()?;
        Ok(params)
    }

    /// Check both weights lie in the closed unit interval.
    pub fn validate(&self) -> Result<()> {
        check_unit_interval("alpha", self.alpha)?;
        check_unit_interval("beta", self.beta)
    }
}

impl Default for SmoothingParameters {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            beta: 0.5,
        }
    }
}

fn check_unit_interval(name: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ForecastError::ParameterOutOfRange { name, value })
    }
}

/// Output of a single smoothing pass.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SmoothingResult {
    params: SmoothingParameters,
    observed: Vec<f64>,
    level: Vec<f64>,
    trend: Vec<f64>,
    forecast: Vec<f64>,
    metrics: AccuracyMetrics,
}

impl SmoothingResult {
    /// Parameters used for this pass.
    pub fn params(&self) -> SmoothingParameters {
        self.params
    }

    /// The observations the pass was run on.
    pub fn observed(&self) -> &[f64] {
        &self.observed
    }

    /// Smoothed level, one entry per observation.
    pub fn level(&self) -> &[f64] {
        &self.level
    }

    /// Smoothed trend, one entry per observation.
    pub fn trend(&self) -> &[f64] {
        &self.trend
    }

    /// One-step-ahead forecasts, `len() + 1` entries.
    pub fn forecast(&self) -> &[f64] {
        &self.forecast
    }

    /// MAD, MSE and MAPE over the observed points.
    pub fn metrics(&self) -> AccuracyMetrics {
        self.metrics
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.observed.len()
    }

    /// Check if the result holds no observations.
    pub fn is_empty(&self) -> bool {
        self.observed.is_empty()
    }

    /// Projection for the period after the last observation.
    pub fn next_period(&self) -> f64 {
        self.forecast[self.observed.len()]
    }

    /// Observation minus the forecast in the same slot.
    pub fn errors(&self) -> Vec<f64> {
        self.observed
            .iter()
            .zip(self.forecast.iter())
            .map(|(y, f)| y - f)
            .collect()
    }
}

/// Run double exponential smoothing over `values`.
///
/// The weights are used as given; callers wanting bounds checking should
/// build them with [`SmoothingParameters::new`].
///
/// # Errors
/// `InsufficientData` below two observations, `MissingValues` on NaN or
/// infinite input, and `DivisionByZero` / `NonPositiveValue` from MAPE.
pub fn smooth(values: &[f64], params: SmoothingParameters) -> Result<SmoothingResult> {
    check_series(values)?;

    let (level, trend) = holt_states(values, params.alpha, params.beta);
    let forecast = one_step_forecasts(&level, &trend);

    // Metrics pair series[i] with forecast[i], not forecast[i + 1].
    let metrics = calculate_metrics(values, &forecast[..values.len()])?;

    Ok(SmoothingResult {
        params,
        observed: values.to_vec(),
        level,
        trend,
        forecast,
        metrics,
    })
}

/// Level and trend recursions. `values` must hold at least two points.
pub(crate) fn holt_states(values: &[f64], alpha: f64, beta: f64) -> (Vec<f64>, Vec<f64>) {
    let n = values.len();
    let mut level = Vec::with_capacity(n);
    let mut trend = Vec::with_capacity(n);

    level.push(values[0]);
    trend.push(values[1] - values[0]);

    for i in 1..n {
        let l = alpha * values[i] + (1.0 - alpha) * (level[i - 1] + trend[i - 1]);
        let b = beta * (l - level[i - 1]) + (1.0 - beta) * trend[i - 1];
        level.push(l);
        trend.push(b);
    }

    (level, trend)
}

/// Build the `n + 1` forecast slots from level and trend, which must be
/// non-empty.
///
/// Slot 0 has no predecessor and repeats `level[0] + trend[0]`, so
/// `forecast[0] == forecast[1]`. Downstream metrics and published tables
/// depend on this layout.
pub(crate) fn one_step_forecasts(level: &[f64], trend: &[f64]) -> Vec<f64> {
    let mut forecast = Vec::with_capacity(level.len() + 1);
    forecast.push(level[0] + trend[0]);
    forecast.extend(level.iter().zip(trend.iter()).map(|(l, b)| l + b));
    forecast
}

/// MAPE of a smoothing pass without materialising the state vectors.
///
/// Performs the same floating point operations in the same order as
/// [`smooth`], so the value is bit-identical to `smooth(..).metrics().mape`.
pub fn mape_for(values: &[f64], alpha: f64, beta: f64) -> Result<f64> {
    check_series(values)?;

    let n = values.len();
    let mut level = values[0];
    let mut trend = values[1] - values[0];

    // forecast[0] == level[0] + trend[0]
    let mut sum = percentage_term(0, values[0], level + trend)?;

    for i in 1..n {
        // forecast[i] == level[i - 1] + trend[i - 1]
        sum += percentage_term(i, values[i], level + trend)?;

        let prev = level;
        level = alpha * values[i] + (1.0 - alpha) * (prev + trend);
        trend = beta * (level - prev) + (1.0 - beta) * trend;
    }

    Ok(sum / n as f64 * 100.0)
}

pub(crate) fn check_series(values: &[f64]) -> Result<()> {
    if values.len() < 2 {
        return Err(ForecastError::InsufficientData {
            needed: 2,
            got: values.len(),
        });
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(ForecastError::MissingValues);
    }
    Ok(())
}
