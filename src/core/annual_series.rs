//! Annual observation series.

use crate::error::{ForecastError, Result};
use chrono::{Datelike, NaiveDate};

/// Production values keyed by consecutive years.
///
/// Invariants: at least two observations, years strictly ascending with
/// no gaps, every value finite.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawAnnualSeries"))]
pub struct AnnualSeries {
    years: Vec<i32>,
    values: Vec<f64>,
}

/// Unvalidated wire form; deserialization goes through [`AnnualSeries::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawAnnualSeries {
    years: Vec<i32>,
    values: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawAnnualSeries> for AnnualSeries {
    type Error = ForecastError;

    fn try_from(raw: RawAnnualSeries) -> Result<Self> {
        Self::new(raw.years, raw.values)
    }
}

/// Builder for constructing an [`AnnualSeries`].
#[derive(Debug, Clone, Default)]
pub struct AnnualSeriesBuilder {
    start_year: Option<i32>,
    years: Vec<i32>,
    values: Vec<f64>,
}

impl AnnualSeriesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number the values consecutively from `year`, ignoring explicit years.
    pub fn start_year(mut self, year: i32) -> Self {
        self.start_year = Some(year);
        self
    }

    pub fn years(mut self, years: Vec<i32>) -> Self {
        self.years = years;
        self
    }

    pub fn values(mut self, values: Vec<f64>) -> Self {
        self.values = values;
        self
    }

    /// Append a single `(year, value)` observation.
    pub fn observation(mut self, year: i32, value: f64) -> Self {
        self.years.push(year);
        self.values.push(value);
        self
    }

    pub fn build(self) -> Result<AnnualSeries> {
        match self.start_year {
            Some(start) => AnnualSeries::starting_at(start, self.values),
            None => AnnualSeries::new(self.years, self.values),
        }
    }
}

impl AnnualSeries {
    /// Create a series from parallel year and value vectors.
    pub fn new(years: Vec<i32>, values: Vec<f64>) -> Result<Self> {
        if years.len() != values.len() {
            return Err(ForecastError::DimensionMismatch {
                expected: years.len(),
                got: values.len(),
            });
        }
        if values.len() < 2 {
            return Err(ForecastError::InsufficientData {
                needed: 2,
                got: values.len(),
            });
        }

        for pair in years.windows(2) {
            if pair[1] <= pair[0] {
                return Err(ForecastError::PeriodError(format!(
                    "years must be strictly ascending: {} follows {}",
                    pair[1], pair[0]
                )));
            }
            if pair[1].checked_sub(pair[0]) != Some(1) {
                return Err(ForecastError::PeriodError(format!(
                    "gap between {} and {}",
                    pair[0], pair[1]
                )));
            }
        }

        let last = years[years.len() - 1];
        if last.checked_add(1).is_none() {
            return Err(ForecastError::PeriodError(format!(
                "no year follows {}",
                last
            )));
        }

        if values.iter().any(|v| !v.is_finite()) {
            return Err(ForecastError::MissingValues);
        }

        Ok(Self { years, values })
    }

    /// Create a series whose first value belongs to `start_year`.
    pub fn starting_at(start_year: i32, values: Vec<f64>) -> Result<Self> {
        let years = (0..values.len())
            .map(|i| i32::try_from(i).ok().and_then(|i| start_year.checked_add(i)))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| {
                ForecastError::PeriodError(format!(
                    "{} years starting at {} overflow the calendar",
                    values.len(),
                    start_year
                ))
            })?;
        Self::new(years, values)
    }

    /// Create a series from `(year, value)` pairs in ascending year order.
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (i32, f64)>,
    {
        let (years, values) = pairs.into_iter().unzip();
        Self::new(years, values)
    }

    /// Create a series from dated observations, one per calendar year.
    pub fn from_dates(dates: &[NaiveDate], values: Vec<f64>) -> Result<Self> {
        let years = dates.iter().map(|d| d.year()).collect();
        Self::new(years, values)
    }

    /// Get the number of observations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the series is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn first_year(&self) -> i32 {
        self.years[0]
    }

    pub fn last_year(&self) -> i32 {
        self.years[self.years.len() - 1]
    }

    /// The year following the last observation.
    ///
    /// Construction guarantees it is representable.
    pub fn next_year(&self) -> i32 {
        self.last_year() + 1
    }

    /// Value observed in `year`, if inside the series.
    pub fn get(&self, year: i32) -> Option<f64> {
        let offset = year.checked_sub(self.first_year())?;
        usize::try_from(offset)
            .ok()
            .and_then(|i| self.values.get(i).copied())
    }

    /// Sub-series covering `from..=to`.
    pub fn window(&self, from: i32, to: i32) -> Result<Self> {
        if from < self.first_year() || to > self.last_year() || from > to {
            return Err(ForecastError::PeriodError(format!(
                "window {}..={} outside {}..={}",
                from,
                to,
                self.first_year(),
                self.last_year()
            )));
        }
        let start = (from - self.first_year()) as usize;
        let end = (to - self.first_year()) as usize + 1;
        Self::new(
            self.years[start..end].to_vec(),
            self.values[start..end].to_vec(),
        )
    }

    /// Iterate over `(year, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.years.iter().copied().zip(self.values.iter().copied())
    }
}
