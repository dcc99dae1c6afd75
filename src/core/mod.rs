//! Core data structures for annual forecasting.

mod annual_series;
mod forecast_table;

pub use annual_series::{AnnualSeries, AnnualSeriesBuilder};
pub use forecast_table::{ForecastRow, ForecastSummary, ForecastTable};
