//! Core trait for pattern detectors
//!
//! Every detector is a pure, deterministic single scan over the ordered
//! series. Detectors are independent of each other: any subset may be
//! evaluated in isolation, in any order, without affecting results.

use crate::limits::ControlLimits;
use crate::report::{RuleId, RuleResult};
use crate::series::Series;

/// A single control chart pattern detector
pub trait RuleDetector {
    /// Which rule this detector implements
    fn rule_id(&self) -> RuleId;

    /// Minimum number of samples the rule needs to be evaluated at all
    fn minimum_sample_size(&self) -> usize;

    /// Scan the series and return this rule's verdict.
    ///
    /// Must be a pure read: no mutation, no cross-call state. A series
    /// shorter than [`minimum_sample_size`](RuleDetector::minimum_sample_size)
    /// yields an insufficient-data verdict, never an error.
    fn evaluate(&self, series: &Series, limits: &ControlLimits) -> RuleResult;

    /// The insufficient-data verdict for this detector
    fn insufficient(&self) -> RuleResult {
        RuleResult::insufficient(self.rule_id(), self.minimum_sample_size())
    }
}
