//! Control limits derived from a center line and sigma unit
//!
//! UCL/LCL and the sigma-zone boundaries are always derived from
//! `mean`/`std_dev`, never stored independently, so they can not drift out
//! of sync with the statistics they came from.

use crate::error::{Error, Result};
use crate::series::Series;
use crate::summary::SeriesSummary;

/// Center line and sigma unit for a control chart
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlLimits {
    mean: f64,
    std_dev: f64,
}

impl ControlLimits {
    /// Create control limits from a known mean and standard deviation.
    ///
    /// `std_dev = 0` is a legal degenerate case (see [`is_degenerate`]);
    /// negative or non-finite inputs are rejected.
    ///
    /// [`is_degenerate`]: ControlLimits::is_degenerate
    pub fn new(mean: f64, std_dev: f64) -> Result<Self> {
        if !mean.is_finite() {
            return Err(Error::non_finite("mean"));
        }
        if !std_dev.is_finite() {
            return Err(Error::non_finite("stdDev"));
        }
        if std_dev < 0.0 {
            return Err(Error::InvalidInput(format!(
                "stdDev must be non-negative, got {std_dev}"
            )));
        }
        Ok(Self { mean, std_dev })
    }

    /// Derive control limits from the series itself (self-baselined mode)
    pub fn from_series(series: &Series) -> Result<Self> {
        let summary = SeriesSummary::from_series(series)?;
        Self::new(summary.mean, summary.std_dev)
    }

    /// Center line
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sigma unit
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Upper control limit: `mean + 3σ`
    pub fn ucl(&self) -> f64 {
        self.mean + 3.0 * self.std_dev
    }

    /// Lower control limit: `mean - 3σ`
    pub fn lcl(&self) -> f64 {
        self.mean - 3.0 * self.std_dev
    }

    /// Zone boundary pair `(mean - kσ, mean + kσ)` for k in 1..=3
    pub fn sigma_bounds(&self, k: u32) -> (f64, f64) {
        let offset = k as f64 * self.std_dev;
        (self.mean - offset, self.mean + offset)
    }

    /// Whether the sigma unit is zero, collapsing every zone boundary onto
    /// the center line
    pub fn is_degenerate(&self) -> bool {
        self.std_dev == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_derived_limits() {
        let limits = ControlLimits::new(13.0, 4.0).unwrap();
        assert_relative_eq!(limits.ucl(), 25.0);
        assert_relative_eq!(limits.lcl(), 1.0);
        let (lo, hi) = limits.sigma_bounds(2);
        assert_relative_eq!(lo, 5.0);
        assert_relative_eq!(hi, 21.0);
        assert!(!limits.is_degenerate());
    }

    #[test]
    fn test_from_series() {
        let series = Series::from_values(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        let limits = ControlLimits::from_series(&series).unwrap();
        assert_relative_eq!(limits.mean(), 5.0);
        assert_relative_eq!(limits.std_dev(), 2.0);
        assert_relative_eq!(limits.ucl(), 11.0);
        assert_relative_eq!(limits.lcl(), -1.0);
    }

    #[test]
    fn test_degenerate_sigma_is_legal() {
        let limits = ControlLimits::new(10.0, 0.0).unwrap();
        assert!(limits.is_degenerate());
        assert_relative_eq!(limits.ucl(), 10.0);
        assert_relative_eq!(limits.lcl(), 10.0);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        assert!(ControlLimits::new(f64::NAN, 1.0).is_err());
        assert!(ControlLimits::new(0.0, f64::INFINITY).is_err());
        assert!(ControlLimits::new(0.0, -0.5).is_err());
    }

    #[test]
    fn test_from_empty_series_fails() {
        let err = ControlLimits::from_series(&Series::from_values(&[])).unwrap_err();
        assert!(matches!(err, Error::InsufficientData { .. }));
    }
}
