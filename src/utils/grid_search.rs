//! Exhaustive grid search for Holt smoothing weights.
//!
//! Every `(i / steps, j / steps)` pair with `i, j` in `0..steps` is scored
//! by MAPE; the upper value `1.0` is never visited. Alpha is the outer
//! loop and beta the inner one, both ascending, and a pair only replaces
//! the incumbent when its MAPE is strictly lower, so the earliest pair
//! wins exact ties.
//!
//! # Example
//! ```
//! use des_forecast::utils::grid_search::{grid_search, GridSearchConfig};
//!
//! let production = [100.0, 104.0, 109.0, 113.0, 118.0, 122.0];
//! let result = grid_search(&production, &GridSearchConfig::default()).unwrap();
//!
//! assert_eq!(result.evaluations, 10_000);
//! assert!(result.mape < 100.0);
//! ```

use crate::error::{ForecastError, Result};
use crate::models::exponential::smoother::{check_series, mape_for, SmoothingParameters};
use crate::utils::metrics::ensure_positive;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Configuration for the grid search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSearchConfig {
    /// Number of grid values per axis; the grid is `i / steps` for `i` in `0..steps`.
    pub steps: usize,
    /// Starting value of the running minimum (default 100.0).
    ///
    /// With `Some(bound)`, pairs scoring `>= bound` can never be selected
    /// and a search where nothing beats the bound reports `(0, 0)` with
    /// MAPE equal to the bound. `None` starts from infinity so the
    /// reported MAPE always belongs to an evaluated pair.
    pub initial_bound: Option<f64>,
}

impl Default for GridSearchConfig {
    fn default() -> Self {
        Self {
            steps: 100,
            initial_bound: Some(100.0),
        }
    }
}

impl GridSearchConfig {
    /// Create a configuration with a custom grid resolution.
    pub fn with_steps(steps: usize) -> Self {
        Self {
            steps,
            ..Default::default()
        }
    }

    /// Replace the starting value of the running minimum.
    pub fn with_initial_bound(mut self, bound: Option<f64>) -> Self {
        self.initial_bound = bound;
        self
    }

    /// Grid value at position `index`.
    #[inline]
    pub fn grid_value(&self, index: usize) -> f64 {
        index as f64 / self.steps as f64
    }

    /// Total number of `(alpha, beta)` pairs.
    pub fn evaluations(&self) -> usize {
        self.steps * self.steps
    }
}

/// Result of a grid search.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSearchResult {
    /// Best smoothing weights found.
    pub params: SmoothingParameters,
    /// MAPE (percent) of the best pair, or the initial bound.
    pub mape: f64,
    /// Number of grid pairs evaluated.
    pub evaluations: usize,
    /// Whether any pair beat the initial bound.
    pub improved: bool,
}

impl GridSearchResult {
    /// True when no pair beat the bound and `params`/`mape` are the
    /// untested starting values.
    pub fn is_sentinel(&self) -> bool {
        !self.improved
    }
}

/// Search the default 100 x 100 grid.
///
/// Returns the optimal `(alpha, beta)` and their MAPE.
pub fn find_optimal(values: &[f64]) -> Result<GridSearchResult> {
    optimize(values, &GridSearchConfig::default())
}

/// Search with the parallel strategy when the `parallel` feature is
/// enabled, sequentially otherwise. Both give identical results.
pub fn optimize(values: &[f64], config: &GridSearchConfig) -> Result<GridSearchResult> {
    #[cfg(feature = "parallel")]
    {
        grid_search_parallel(values, config)
    }
    #[cfg(not(feature = "parallel"))]
    {
        grid_search(values, config)
    }
}

/// Search the `(alpha, beta)` grid described by `config` for the lowest MAPE.
///
/// # Errors
/// `InvalidParameter` for an empty grid; otherwise the first error any
/// evaluation would raise aborts the whole search.
pub fn grid_search(values: &[f64], config: &GridSearchConfig) -> Result<GridSearchResult> {
    validate(values, config)?;

    let mut best = Candidate::start(config);

    for i in 0..config.steps {
        let row = search_row(values, config, i, best.mape)?;
        if let Some(candidate) = row {
            best = candidate;
        }
    }

    Ok(best.into_result(config))
}

/// Parallel grid search; rows of the alpha axis are scored concurrently.
///
/// The reduction keeps the lowest MAPE and, among equal scores, the
/// earliest grid position, so the result equals [`grid_search`].
#[cfg(feature = "parallel")]
pub fn grid_search_parallel(
    values: &[f64],
    config: &GridSearchConfig,
) -> Result<GridSearchResult> {
    validate(values, config)?;

    let start = Candidate::start(config);
    let bound = start.mape;

    let rows = (0..config.steps)
        .into_par_iter()
        .map(|i| search_row(values, config, i, bound))
        .collect::<Result<Vec<_>>>()?;

    let best = rows
        .into_iter()
        .flatten()
        .fold(start, |best, candidate| {
            if candidate.mape < best.mape {
                candidate
            } else {
                best
            }
        });

    Ok(best.into_result(config))
}

/// Best pair in row `i` whose MAPE is strictly below `bound`.
fn search_row(
    values: &[f64],
    config: &GridSearchConfig,
    i: usize,
    bound: f64,
) -> Result<Option<Candidate>> {
    let alpha = config.grid_value(i);
    let mut best: Option<Candidate> = None;
    let mut threshold = bound;

    for j in 0..config.steps {
        let beta = config.grid_value(j);
        let mape = mape_for(values, alpha, beta)?;
        if mape < threshold {
            threshold = mape;
            best = Some(Candidate {
                params: SmoothingParameters { alpha, beta },
                mape,
                improved: true,
            });
        }
    }

    Ok(best)
}

fn validate(values: &[f64], config: &GridSearchConfig) -> Result<()> {
    if config.steps == 0 {
        return Err(ForecastError::InvalidParameter(
            "grid steps must be positive".to_string(),
        ));
    }
    check_series(values)?;
    // Every evaluation divides by every observation, so fail before searching.
    ensure_positive(values)
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    params: SmoothingParameters,
    mape: f64,
    improved: bool,
}

impl Candidate {
    fn start(config: &GridSearchConfig) -> Self {
        Self {
            params: SmoothingParameters {
                alpha: 0.0,
                beta: 0.0,
            },
            mape: config.initial_bound.unwrap_or(f64::INFINITY),
            improved: false,
        }
    }

    fn into_result(self, config: &GridSearchConfig) -> GridSearchResult {
        GridSearchResult {
            params: self.params,
            mape: self.mape,
            evaluations: config.evaluations(),
            improved: self.improved,
        }
    }
}
