//! Trend rule
//!
//! A run of strictly monotonic points signals a drifting process.

use crate::limits::ControlLimits;
use crate::report::{RuleId, RuleResult};
use crate::series::Series;
use crate::traits::RuleDetector;

/// Detects `trend_length` consecutive strictly increasing or strictly
/// decreasing points.
///
/// A single point is a length-1 trend, so both counters start at 1; equal
/// neighbors reset both. The conventional trend length is 6; some variants
/// use 8.
#[derive(Debug, Clone, Copy)]
pub struct Trend {
    trend_length: usize,
}

impl Trend {
    pub fn new(trend_length: usize) -> Self {
        Self { trend_length }
    }
}

impl RuleDetector for Trend {
    fn rule_id(&self) -> RuleId {
        RuleId::Trend
    }

    fn minimum_sample_size(&self) -> usize {
        self.trend_length
    }

    fn evaluate(&self, series: &Series, limits: &ControlLimits) -> RuleResult {
        let _ = limits; // Trend compares neighbors only.
        if series.len() < self.minimum_sample_size() {
            return self.insufficient();
        }

        let samples = series.samples();
        let mut increasing = 1_usize;
        let mut decreasing = 1_usize;

        for i in 1..samples.len() {
            let prev = samples[i - 1].value;
            let curr = samples[i].value;
            if curr > prev {
                increasing += 1;
                decreasing = 1;
            } else if curr < prev {
                decreasing += 1;
                increasing = 1;
            } else {
                increasing = 1;
                decreasing = 1;
            }

            if increasing >= self.trend_length || decreasing >= self.trend_length {
                return RuleResult::violated(self.rule_id(), Some(i));
            }
        }

        RuleResult::clean(self.rule_id())
    }
}
