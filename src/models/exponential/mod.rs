//! Exponential smoothing models.
//!
//! This module provides double exponential smoothing (Holt's linear trend):
//! - the smoothing pass with MAD / MSE / MAPE
//! - a `Forecaster` model with fixed or grid-searched weights
//! - the full manual / optimal analysis of an annual series

mod analysis;
mod holt;
pub mod smoother;

pub use analysis::{AnalysisConfig, HoltAnalysis};
pub use holt::HoltLinearTrend;
pub use smoother::{mape_for, smooth, SmoothingParameters, SmoothingResult};
