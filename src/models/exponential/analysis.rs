//! End-to-end Holt analysis of an annual series.
//!
//! Mirrors how a dashboard uses the model: one pass with hand-picked
//! weights, a grid search for the MAPE-optimal weights, and a final pass
//! with those weights that produces the published table.

use crate::core::{AnnualSeries, ForecastTable};
use crate::error::Result;
use crate::models::exponential::smoother::{smooth, SmoothingParameters, SmoothingResult};
use crate::utils::grid_search::{optimize, GridSearchConfig, GridSearchResult};

/// Configuration for [`HoltAnalysis`].
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalysisConfig {
    /// Weights for the exploratory pass (default 0.5 / 0.5).
    pub manual: SmoothingParameters,
    /// Grid for the optimal pass.
    pub search: GridSearchConfig,
}

impl AnalysisConfig {
    /// Use the given exploratory weights.
    pub fn with_manual(mut self, alpha: f64, beta: f64) -> Self {
        self.manual = SmoothingParameters { alpha, beta };
        self
    }

    /// Use the given grid configuration.
    pub fn with_search(mut self, search: GridSearchConfig) -> Self {
        self.search = search;
        self
    }
}

/// Results of a full analysis run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HoltAnalysis {
    /// Pass with the configured manual weights.
    pub manual: SmoothingResult,
    /// Table for the manual pass.
    pub manual_table: ForecastTable,
    /// Grid search outcome.
    pub search: GridSearchResult,
    /// Pass with the optimal weights.
    pub optimal: SmoothingResult,
    /// Table for the optimal pass.
    pub table: ForecastTable,
}

impl HoltAnalysis {
    /// Run the analysis with default configuration.
    pub fn run(series: &AnnualSeries) -> Result<Self> {
        Self::with_config(series, &AnalysisConfig::default())
    }

    /// Run the analysis with a custom configuration.
    ///
    /// Any failure aborts the run; no partial results are returned.
    pub fn with_config(series: &AnnualSeries, config: &AnalysisConfig) -> Result<Self> {
        config.manual.validate()?;

        let manual = smooth(series.values(), config.manual)?;
        let manual_table = ForecastTable::new(series, &manual)?;

        let search = optimize(series.values(), &config.search)?;

        let optimal = smooth(series.values(), search.params)?;
        let table = ForecastTable::new(series, &optimal)?;

        Ok(Self {
            manual,
            manual_table,
            search,
            optimal,
            table,
        })
    }

    /// Forecast for the year after the series, from the optimal pass.
    pub fn next_period(&self) -> f64 {
        self.optimal.next_period()
    }

    /// Optimal smoothing weights.
    pub fn optimal_params(&self) -> SmoothingParameters {
        self.search.params
    }

    /// Exploratory pass result.
    pub fn manual_result(&self) -> &SmoothingResult {
        &self.manual
    }
}
