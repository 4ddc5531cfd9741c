//! Same-side run rule
//!
//! A sustained run of points strictly on one side of the center line
//! signals a shift in the process mean.

use crate::limits::ControlLimits;
use crate::report::{RuleId, RuleResult};
use crate::series::Series;
use crate::traits::RuleDetector;

/// Detects a run of `run_length` consecutive points on one side of the mean.
///
/// A point exactly on the center line breaks both streaks. The conventional
/// Western Electric run length is 8; some variants use 10.
#[derive(Debug, Clone, Copy)]
pub struct SameSideRun {
    run_length: usize,
}

impl SameSideRun {
    pub fn new(run_length: usize) -> Self {
        Self { run_length }
    }
}

impl RuleDetector for SameSideRun {
    fn rule_id(&self) -> RuleId {
        RuleId::SameSideRun
    }

    fn minimum_sample_size(&self) -> usize {
        self.run_length
    }

    fn evaluate(&self, series: &Series, limits: &ControlLimits) -> RuleResult {
        if series.len() < self.minimum_sample_size() {
            return self.insufficient();
        }

        let mean = limits.mean();
        let mut above = 0_usize;
        let mut below = 0_usize;

        for (i, value) in series.values().enumerate() {
            if value > mean {
                above += 1;
                below = 0;
            } else if value < mean {
                below += 1;
                above = 0;
            } else {
                above = 0;
                below = 0;
            }

            if above >= self.run_length || below >= self.run_length {
                return RuleResult::violated(self.rule_id(), Some(i));
            }
        }

        RuleResult::clean(self.rule_id())
    }
}
