//! Holt's Linear Trend forecasting model.
//!
//! Also known as double exponential smoothing, this model is suitable for
//! data with a linear trend but no seasonality.

use crate::core::AnnualSeries;
use crate::error::{ForecastError, Result};
use crate::models::exponential::smoother::{smooth, SmoothingParameters, SmoothingResult};
use crate::models::Forecaster;
use crate::utils::grid_search::{optimize, GridSearchConfig, GridSearchResult};

/// Holt's Linear Trend forecaster.
///
/// Parameters are either fixed up front or chosen by a MAPE grid search
/// at fit time. Multi-step predictions extrapolate the final state:
/// `ŷ_{n+h} = l_n + h × b_n`.
#[derive(Debug, Clone)]
pub struct HoltLinearTrend {
    /// Smoothing weights, `None` until optimized.
    params: Option<SmoothingParameters>,
    /// Grid used when the weights are optimized.
    search: Option<GridSearchConfig>,
    /// Outcome of the last grid search.
    search_result: Option<GridSearchResult>,
    /// Smoothing pass over the fitted series.
    result: Option<SmoothingResult>,
    /// Residuals.
    residuals: Option<Vec<f64>>,
}

impl HoltLinearTrend {
    /// Create a new Holt model with fixed parameters.
    ///
    /// # Arguments
    /// * `alpha` - Level smoothing parameter (0 <= alpha <= 1)
    /// * `beta` - Trend smoothing parameter (0 <= beta <= 1)
    pub fn new(alpha: f64, beta: f64) -> Result<Self> {
        Ok(Self::with_params(SmoothingParameters::new(alpha, beta)?))
    }

    fn with_params(params: SmoothingParameters) -> Self {
        Self {
            params: Some(params),
            search: None,
            search_result: None,
            result: None,
            residuals: None,
        }
    }

    /// Create a Holt model tuned by the default 100 x 100 grid search.
    pub fn auto() -> Self {
        Self::with_grid(GridSearchConfig::default())
    }

    /// Create a Holt model tuned by a custom grid search.
    pub fn with_grid(config: GridSearchConfig) -> Self {
        Self {
            params: None,
            search: Some(config),
            search_result: None,
            result: None,
            residuals: None,
        }
    }

    /// Get the smoothing parameters in use.
    pub fn params(&self) -> Option<SmoothingParameters> {
        self.params
    }

    /// Get the grid search outcome of the last fit, if one ran.
    pub fn search_result(&self) -> Option<&GridSearchResult> {
        self.search_result.as_ref()
    }

    /// Get the full smoothing pass of the last fit.
    pub fn smoothing(&self) -> Option<&SmoothingResult> {
        self.result.as_ref()
    }

    /// Get the final level.
    pub fn level(&self) -> Option<f64> {
        self.result.as_ref().and_then(|r| r.level().last().copied())
    }

    /// Get the final trend.
    pub fn trend(&self) -> Option<f64> {
        self.result.as_ref().and_then(|r| r.trend().last().copied())
    }
}

impl Default for HoltLinearTrend {
    fn default() -> Self {
        Self::auto()
    }
}

impl Forecaster for HoltLinearTrend {
    fn fit(&mut self, series: &AnnualSeries) -> Result<()> {
        let values = series.values();

        // A failed fit must not leave the previous fit's state behind.
        self.result = None;
        self.residuals = None;
        self.search_result = None;
        if self.search.is_some() {
            self.params = None;
        }

        if let Some(config) = &self.search {
            let found = optimize(values, config)?;
            self.params = Some(found.params);
            self.search_result = Some(found);
        }

        let params = self.params.ok_or(ForecastError::FitRequired)?;
        let result = smooth(values, params)?;

        self.residuals = Some(result.errors());
        self.result = Some(result);

        Ok(())
    }

    fn predict(&self, horizon: usize) -> Result<Vec<f64>> {
        let l = self.level().ok_or(ForecastError::FitRequired)?;
        let b = self.trend().ok_or(ForecastError::FitRequired)?;

        Ok((1..=horizon).map(|h| l + h as f64 * b).collect())
    }

    fn fitted_values(&self) -> Option<&[f64]> {
        self.result
            .as_ref()
            .map(|r| &r.forecast()[..r.len()])
    }

    fn residuals(&self) -> Option<&[f64]> {
        self.residuals.as_deref()
    }

    fn name(&self) -> &str {
        if self.search.is_some() {
            "HoltLinearTrend(grid)"
        } else {
            "HoltLinearTrend"
        }
    }
}
