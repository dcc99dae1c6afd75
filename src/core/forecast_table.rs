//! Per-year forecast table handed to presentation and export layers.

use crate::core::AnnualSeries;
use crate::error::{ForecastError, Result};
use crate::models::exponential::{SmoothingParameters, SmoothingResult};
use crate::utils::metrics::AccuracyMetrics;

/// One year of the forecast table.
///
/// The synthetic year after the series only carries a forecast.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForecastRow {
    pub year: i32,
    pub production: Option<f64>,
    pub level: Option<f64>,
    pub trend: Option<f64>,
    pub forecast: f64,
    /// Production minus forecast.
    pub error: Option<f64>,
}

impl ForecastRow {
    /// Whether this row is the projected year.
    pub fn is_projection(&self) -> bool {
        self.production.is_none()
    }
}

/// Scalar results accompanying the table.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForecastSummary {
    pub params: SmoothingParameters,
    pub metrics: AccuracyMetrics,
    pub next_year: i32,
    pub next_period: f64,
}

/// Forecast table keyed by year.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ForecastTable {
    rows: Vec<ForecastRow>,
    summary: ForecastSummary,
}

impl ForecastTable {
    /// Lay a smoothing result out against the years of `series`.
    ///
    /// Row `i` pairs `series[i]` with `forecast[i]`; an extra row for
    /// `series.next_year()` holds `forecast[n]`.
    pub fn new(series: &AnnualSeries, result: &SmoothingResult) -> Result<Self> {
        if series.len() != result.len() {
            return Err(ForecastError::DimensionMismatch {
                expected: series.len(),
                got: result.len(),
            });
        }

        let forecast = result.forecast();
        let mut rows: Vec<ForecastRow> = series
            .iter()
            .enumerate()
            .map(|(i, (year, production))| ForecastRow {
                year,
                production: Some(production),
                level: Some(result.level()[i]),
                trend: Some(result.trend()[i]),
                forecast: forecast[i],
                error: Some(production - forecast[i]),
            })
            .collect();

        let next_period = result.next_period();
        rows.push(ForecastRow {
            year: series.next_year(),
            production: None,
            level: None,
            trend: None,
            forecast: next_period,
            error: None,
        });

        Ok(Self {
            rows,
            summary: ForecastSummary {
                params: result.params(),
                metrics: result.metrics(),
                next_year: series.next_year(),
                next_period,
            },
        })
    }

    /// All rows, observed years first, projection last.
    pub fn rows(&self) -> &[ForecastRow] {
        &self.rows
    }

    /// Rows with an observed production value.
    pub fn observed_rows(&self) -> &[ForecastRow] {
        &self.rows[..self.rows.len() - 1]
    }

    /// The projected year.
    pub fn projection(&self) -> &ForecastRow {
        &self.rows[self.rows.len() - 1]
    }

    pub fn summary(&self) -> &ForecastSummary {
        &self.summary
    }

    /// Row for `year`, if present.
    pub fn row(&self, year: i32) -> Option<&ForecastRow> {
        self.rows.iter().find(|r| r.year == year)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
