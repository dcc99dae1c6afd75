//! # des-forecast
//!
//! Annual production forecasting with double exponential smoothing
//! (Holt's linear trend method).
//!
//! Provides the smoothing pass with MAD, MSE and MAPE, an exhaustive
//! grid search for the MAPE-optimal `(alpha, beta)`, a `Forecaster`
//! model, and a per-year forecast table for export layers.
//!
//! ```
//! use des_forecast::prelude::*;
//!
//! let series = AnnualSeries::starting_at(2015, vec![639.0, 664.0, 717.0, 756.0, 752.0]).unwrap();
//! let analysis = HoltAnalysis::run(&series).unwrap();
//!
//! assert_eq!(analysis.table.projection().year, 2020);
//! assert!(analysis.search.mape < 100.0);
//! ```

#![allow(clippy::needless_range_loop)]

pub mod core;
pub mod error;
pub mod models;
pub mod utils;

pub use error::{ForecastError, Result};

pub mod prelude {
    pub use crate::core::{AnnualSeries, ForecastRow, ForecastTable};
    pub use crate::error::{ForecastError, Result};
    pub use crate::models::exponential::{
        smooth, AnalysisConfig, HoltAnalysis, HoltLinearTrend, SmoothingParameters,
        SmoothingResult,
    };
    pub use crate::models::Forecaster;
    pub use crate::utils::{find_optimal, AccuracyMetrics, GridSearchConfig, GridSearchResult};
}
