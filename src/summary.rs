//! Summary statistics for a measurement series
//!
//! Computes the population mean and standard deviation used as the center
//! line and sigma unit when the caller does not supply a known process
//! specification. Also computes display bounds (`y_min`/`y_max`) consumed
//! by external plotting; rule logic never reads them.

use crate::error::{Error, Result};
use crate::series::Series;

/// Population statistics of a series, plus display-bound hints
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeriesSummary {
    /// Population mean
    pub mean: f64,
    /// Population standard deviation (no Bessel correction)
    pub std_dev: f64,
    /// Smallest value in the series
    pub min: f64,
    /// Largest value in the series
    pub max: f64,
    /// Suggested lower display bound: `min - std_dev`
    pub y_min: f64,
    /// Suggested upper display bound: `max + std_dev`
    pub y_max: f64,
    /// Number of samples summarized
    pub n: usize,
}

impl SeriesSummary {
    /// Compute summary statistics over a non-empty series.
    ///
    /// Uses population formulas (`Σ(v - mean)² / n`) to match the
    /// population-based sigma thresholds used by the rule detectors.
    pub fn from_series(series: &Series) -> Result<Self> {
        if series.is_empty() {
            return Err(Error::empty_input());
        }

        let n = series.len();
        let n_f = n as f64;

        let sum: f64 = series.values().sum();
        let mean = sum / n_f;

        let variance: f64 = series
            .values()
            .map(|v| {
                let diff = v - mean;
                diff * diff
            })
            .sum::<f64>()
            / n_f;
        let std_dev = variance.sqrt();

        let min = series.values().fold(f64::INFINITY, f64::min);
        let max = series.values().fold(f64::NEG_INFINITY, f64::max);

        Ok(Self {
            mean,
            std_dev,
            min,
            max,
            y_min: min - std_dev,
            y_max: max + std_dev,
            n,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_population_mean_and_std() {
        let series = Series::from_values(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        let summary = SeriesSummary::from_series(&series).unwrap();
        // Classic population-variance example: mean 5, sigma 2.
        assert_relative_eq!(summary.mean, 5.0);
        assert_relative_eq!(summary.std_dev, 2.0);
        assert_eq!(summary.n, 8);
    }

    #[test]
    fn test_display_bounds() {
        let series = Series::from_values(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        let summary = SeriesSummary::from_series(&series).unwrap();
        assert_relative_eq!(summary.min, 2.0);
        assert_relative_eq!(summary.max, 9.0);
        assert_relative_eq!(summary.y_min, 0.0);
        assert_relative_eq!(summary.y_max, 11.0);
    }

    #[test]
    fn test_single_sample() {
        let series = Series::from_values(&[42.0]);
        let summary = SeriesSummary::from_series(&series).unwrap();
        assert_relative_eq!(summary.mean, 42.0);
        assert_relative_eq!(summary.std_dev, 0.0);
        assert_relative_eq!(summary.y_min, 42.0);
        assert_relative_eq!(summary.y_max, 42.0);
    }

    #[test]
    fn test_empty_series_fails() {
        let series = Series::from_values(&[]);
        let err = SeriesSummary::from_series(&series).unwrap_err();
        match err {
            Error::InsufficientData { expected, actual } => {
                assert_eq!(expected, 1);
                assert_eq!(actual, 0);
            }
            _ => panic!("Wrong error type"),
        }
    }
}
