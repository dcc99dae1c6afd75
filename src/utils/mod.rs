//! Utility functions for forecasting models.

pub mod grid_search;
pub mod metrics;

pub use grid_search::{find_optimal, grid_search, optimize, GridSearchConfig, GridSearchResult};
pub use metrics::{calculate_metrics, AccuracyMetrics};

#[cfg(feature = "parallel")]
pub use grid_search::grid_search_parallel;
