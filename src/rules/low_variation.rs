//! Low-variation rule
//!
//! A long streak hugging the center line signals stratification: the
//! chart's sigma unit overstates the actual process variation, often
//! because mixed streams average each other out.

use crate::limits::ControlLimits;
use crate::report::{RuleId, RuleResult};
use crate::series::Series;
use crate::traits::RuleDetector;

/// Streak length that triggers the rule
pub const LOW_VARIATION_STREAK: usize = 15;

/// Detects 15 consecutive points within 1σ of the center line.
///
/// The 1σ band is closed here (`|v - mean| <= σ` counts), matching the
/// per-point zone-C classification.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowVariation;

impl RuleDetector for LowVariation {
    fn rule_id(&self) -> RuleId {
        RuleId::LowVariation
    }

    fn minimum_sample_size(&self) -> usize {
        LOW_VARIATION_STREAK
    }

    fn evaluate(&self, series: &Series, limits: &ControlLimits) -> RuleResult {
        if series.len() < self.minimum_sample_size() {
            return self.insufficient();
        }

        let mean = limits.mean();
        let sigma = limits.std_dev();
        let mut streak = 0_usize;

        for (i, value) in series.values().enumerate() {
            if (value - mean).abs() <= sigma {
                streak += 1;
            } else {
                streak = 0;
            }

            if streak >= LOW_VARIATION_STREAK {
                return RuleResult::violated(self.rule_id(), Some(i));
            }
        }

        RuleResult::clean(self.rule_id())
    }
}
