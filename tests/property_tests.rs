//! Property-based tests for the smoother and the grid search.
//!
//! These tests verify invariants that should hold for all valid inputs,
//! using randomly generated production series.

use des_forecast::core::AnnualSeries;
use des_forecast::models::exponential::{mape_for, smooth, HoltLinearTrend, SmoothingParameters};
use des_forecast::models::Forecaster;
use des_forecast::utils::grid_search::{find_optimal, GridSearchConfig};
use proptest::prelude::*;

fn params(alpha: f64, beta: f64) -> SmoothingParameters {
    SmoothingParameters { alpha, beta }
}

/// Strategy for strictly positive production values.
fn positive_values_strategy(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    (min_len..max_len).prop_flat_map(|len| prop::collection::vec(1.0..1000.0_f64, len))
}

fn weight() -> impl Strategy<Value = f64> {
    0.0..=1.0_f64
}

// =============================================================================
// Property: Shape of the smoothing output
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn forecast_length_is_one_past_series(
        values in positive_values_strategy(2, 60),
        alpha in weight(),
        beta in weight()
    ) {
        let result = smooth(&values, params(alpha, beta)).unwrap();
        prop_assert_eq!(result.level().len(), values.len());
        prop_assert_eq!(result.trend().len(), values.len());
        prop_assert_eq!(result.forecast().len(), values.len() + 1);
    }

    #[test]
    fn first_two_forecast_slots_are_equal(
        values in positive_values_strategy(2, 60),
        alpha in weight(),
        beta in weight()
    ) {
        let result = smooth(&values, params(alpha, beta)).unwrap();
        let forecast = result.forecast();
        prop_assert_eq!(forecast[0], forecast[1]);
        prop_assert_eq!(forecast[0], result.level()[0] + result.trend()[0]);
    }

    #[test]
    fn fast_mape_is_bit_identical(
        values in positive_values_strategy(2, 60),
        alpha in weight(),
        beta in weight()
    ) {
        let full = smooth(&values, params(alpha, beta)).unwrap().metrics().mape;
        let fast = mape_for(&values, alpha, beta).unwrap();
        prop_assert_eq!(full.to_bits(), fast.to_bits());
    }
}

// =============================================================================
// Property: Boundary weights
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn zero_weights_freeze_trend_and_level_slope(values in positive_values_strategy(2, 60)) {
        let result = smooth(&values, params(0.0, 0.0)).unwrap();
        let initial_trend = values[1] - values[0];
        for i in 0..values.len() {
            prop_assert_eq!(result.trend()[i], initial_trend);
        }
        for i in 1..values.len() {
            prop_assert_eq!(result.level()[i], result.level()[i - 1] + initial_trend);
        }
    }

    #[test]
    fn unit_weights_track_observations(values in positive_values_strategy(2, 60)) {
        let result = smooth(&values, params(1.0, 1.0)).unwrap();
        prop_assert_eq!(result.level(), values.as_slice());
    }
}

// =============================================================================
// Property: MAPE is scale invariant
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn mape_unchanged_by_power_of_two_scaling(
        values in positive_values_strategy(2, 40),
        alpha in weight(),
        beta in weight(),
        exponent in -8i32..8
    ) {
        let factor = 2.0_f64.powi(exponent);
        let scaled: Vec<f64> = values.iter().map(|v| v * factor).collect();
        let original = mape_for(&values, alpha, beta).unwrap();
        let rescaled = mape_for(&scaled, alpha, beta).unwrap();
        prop_assert_eq!(original, rescaled);
    }

    #[test]
    fn mape_nearly_unchanged_by_arbitrary_scaling(
        values in positive_values_strategy(2, 40),
        alpha in weight(),
        beta in weight(),
        factor in 0.01..100.0_f64
    ) {
        let scaled: Vec<f64> = values.iter().map(|v| v * factor).collect();
        let original = mape_for(&values, alpha, beta).unwrap();
        let rescaled = mape_for(&scaled, alpha, beta).unwrap();
        let tolerance = 1e-9 * original.abs().max(1.0);
        prop_assert!(
            (original - rescaled).abs() <= tolerance,
            "MAPE changed under scaling: {} vs {}", original, rescaled
        );
    }
}

// =============================================================================
// Property: Grid search optimality
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn grid_optimum_beats_sampled_grid_points(
        values in positive_values_strategy(2, 30),
        samples in prop::collection::vec((0usize..100, 0usize..100), 1..25)
    ) {
        let result = find_optimal(&values).unwrap();
        let config = GridSearchConfig::default();
        for (i, j) in samples {
            let mape = mape_for(&values, config.grid_value(i), config.grid_value(j)).unwrap();
            prop_assert!(result.mape <= mape, "grid point ({}, {}) beat the optimum", i, j);
        }
    }

    #[test]
    fn grid_optimum_lies_on_grid(values in positive_values_strategy(2, 30)) {
        let result = find_optimal(&values).unwrap();
        let alpha_index = (result.params.alpha * 100.0).round();
        let beta_index = (result.params.beta * 100.0).round();
        prop_assert!(alpha_index < 100.0 && beta_index < 100.0);
        prop_assert_eq!(result.params.alpha, alpha_index / 100.0);
        prop_assert_eq!(result.params.beta, beta_index / 100.0);
    }
}

// =============================================================================
// Property: Model predictions continue the smoothing pass
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn first_prediction_equals_next_period(
        values in positive_values_strategy(2, 40),
        alpha in weight(),
        beta in weight(),
        horizon in 1usize..10
    ) {
        let ts = AnnualSeries::starting_at(1980, values).unwrap();
        let mut model = HoltLinearTrend::new(alpha, beta).unwrap();
        model.fit(&ts).unwrap();

        let preds = model.predict(horizon).unwrap();
        prop_assert_eq!(preds.len(), horizon);
        prop_assert_eq!(preds[0], model.smoothing().unwrap().next_period());
        for val in &preds {
            prop_assert!(val.is_finite(), "Forecast contains non-finite value: {}", val);
        }
    }
}
