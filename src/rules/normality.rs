//! Normality rule
//!
//! For an in-control normal process roughly 68% of points fall within one
//! standard deviation of the mean. This rule fires when the observed
//! fraction drops below a configured percentage (default 70).

use crate::limits::ControlLimits;
use crate::report::{RuleId, RuleResult};
use crate::series::Series;
use crate::traits::RuleDetector;

/// Detects too few points within one standard deviation of the mean.
///
/// The mean and standard deviation are recomputed from the tested series
/// itself (population formulas), not taken from the supplied control
/// limits. This mirrors the behavior of the system being reimplemented;
/// with self-baselined limits the two coincide, with externally fixed
/// limits they can differ.
///
/// This is an aggregate check over the whole series, so it is
/// order-independent and reports no trigger position.
#[derive(Debug, Clone, Copy)]
pub struct Normality {
    threshold_pct: f64,
}

impl Normality {
    pub fn new(threshold_pct: f64) -> Self {
        Self { threshold_pct }
    }
}

impl RuleDetector for Normality {
    fn rule_id(&self) -> RuleId {
        RuleId::Normality
    }

    fn minimum_sample_size(&self) -> usize {
        1
    }

    fn evaluate(&self, series: &Series, limits: &ControlLimits) -> RuleResult {
        let _ = limits; // Statistics come from the tested series itself.
        if series.is_empty() {
            return self.insufficient();
        }

        let n = series.len() as f64;
        let mean: f64 = series.values().sum::<f64>() / n;
        let std_dev = (series
            .values()
            .map(|v| {
                let diff = v - mean;
                diff * diff
            })
            .sum::<f64>()
            / n)
            .sqrt();

        let within = series
            .values()
            .filter(|v| (v - mean).abs() <= std_dev)
            .count();
        let percentage = within as f64 / n * 100.0;

        if percentage < self.threshold_pct {
            RuleResult::violated(self.rule_id(), None)
        } else {
            RuleResult::clean(self.rule_id())
        }
    }
}
