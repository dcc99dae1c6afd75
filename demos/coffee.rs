//! Coffee Production Forecast Example
//!
//! Runs the full double exponential smoothing analysis on an annual
//! production series: a pass with hand-picked weights, the MAPE grid
//! search, and the final table with next year's projection.
//!
//! Run with: cargo run --example coffee

use des_forecast::prelude::*;

fn main() {
    println!("=== Coffee Production Forecast ===\n");

    // Annual production in tonnes, 2003..=2022
    let production = vec![
        671_255.0, 647_385.0, 640_365.0, 682_158.0, 676_475.0, 698_016.0, 682_591.0, 686_921.0,
        638_646.0, 691_163.0, 675_881.0, 643_857.0, 639_412.0, 663_871.0, 717_962.0, 756_051.0,
        752_511.0, 762_380.0, 774_630.0, 794_762.0,
    ];

    let series = match AnnualSeries::starting_at(2003, production) {
        Ok(series) => series,
        Err(e) => {
            println!("Invalid series: {}", e);
            return;
        }
    };

    let config = AnalysisConfig::default().with_manual(0.5, 0.5);
    let analysis = match HoltAnalysis::with_config(&series, &config) {
        Ok(analysis) => analysis,
        Err(e) => {
            println!("Analysis failed: {}", e);
            return;
        }
    };

    // =========================================================================
    // Manual weights
    // =========================================================================
    println!("--- Manual weights (alpha = 0.5, beta = 0.5) ---\n");
    print_metrics(&analysis.manual.metrics());
    println!(
        "Forecast for {}: {:.0} tonnes",
        series.next_year(),
        analysis.manual.next_period()
    );

    // =========================================================================
    // Grid search
    // =========================================================================
    println!("\n--- Grid search ---\n");
    let search = &analysis.search;
    println!("Evaluated pairs: {}", search.evaluations);
    println!("Optimal alpha:   {:.2}", search.params.alpha);
    println!("Optimal beta:    {:.2}", search.params.beta);
    println!("Minimum MAPE:    {:.4}%", search.mape);
    if search.is_sentinel() {
        println!("Note: no grid pair reached a MAPE below the initial bound");
    }

    // =========================================================================
    // Final table
    // =========================================================================
    println!("\n--- Forecast table (optimal weights) ---\n");
    println!(
        "{:>6} {:>12} {:>12} {:>10} {:>12} {:>10}",
        "Year", "Production", "Level", "Trend", "Forecast", "Error"
    );
    for row in analysis.table.rows() {
        println!(
            "{:>6} {:>12} {:>12} {:>10} {:>12.0} {:>10}",
            row.year,
            fmt_cell(row.production),
            fmt_cell(row.level),
            fmt_cell(row.trend),
            row.forecast,
            fmt_cell(row.error)
        );
    }

    println!();
    print_metrics(&analysis.optimal.metrics());
    println!(
        "Forecast for {}: {:.0} tonnes",
        analysis.table.summary().next_year,
        analysis.next_period()
    );
}

fn print_metrics(metrics: &AccuracyMetrics) {
    println!("MAD:  {:.2}", metrics.mad);
    println!("MSE:  {:.2}", metrics.mse);
    println!("MAPE: {:.4}%", metrics.mape);
}

fn fmt_cell(value: Option<f64>) -> String {
    value.map(|v| format!("{:.0}", v)).unwrap_or_default()
}
