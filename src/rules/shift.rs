//! Zone-occupancy window rules
//!
//! Two sliding-window rules that catch small sustained shifts: points
//! crowding the outer zones without necessarily crossing the 3σ limit.
//! Both bands are open on both ends (`kσ < |v - mean| < 3σ`), reproducing
//! the source system: a point exactly on a zone boundary does not count,
//! and a point beyond 3σ is the beyond-limits case, not a zone occupant.

use crate::limits::ControlLimits;
use crate::report::{RuleId, RuleResult};
use crate::series::Series;
use crate::traits::RuleDetector;

/// Count of window points whose deviation lies strictly inside
/// `(inner, outer)`.
fn count_in_band(window: &[f64], mean: f64, inner: f64, outer: f64) -> usize {
    window
        .iter()
        .filter(|&&v| {
            let deviation = (v - mean).abs();
            deviation > inner && deviation < outer
        })
        .count()
}

/// Shared scan: first window of `width` with at least `needed` points in
/// the open band `(inner_sigma·σ, 3σ)`. Returns the last index of that
/// window.
fn scan_windows(
    series: &Series,
    limits: &ControlLimits,
    width: usize,
    needed: usize,
    inner_sigma: f64,
) -> Option<usize> {
    let values: Vec<f64> = series.values().collect();
    let mean = limits.mean();
    let inner = inner_sigma * limits.std_dev();
    let outer = 3.0 * limits.std_dev();

    values
        .windows(width)
        .position(|window| count_in_band(window, mean, inner, outer) >= needed)
        .map(|start| start + width - 1)
}

/// Detects 2 of 3 consecutive points between 2σ and 3σ from the mean.
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoOfThreeBeyondTwoSigma;

impl RuleDetector for TwoOfThreeBeyondTwoSigma {
    fn rule_id(&self) -> RuleId {
        RuleId::TwoOfThreeBeyondTwoSigma
    }

    fn minimum_sample_size(&self) -> usize {
        3
    }

    fn evaluate(&self, series: &Series, limits: &ControlLimits) -> RuleResult {
        if series.len() < self.minimum_sample_size() {
            return self.insufficient();
        }
        match scan_windows(series, limits, 3, 2, 2.0) {
            Some(i) => RuleResult::violated(self.rule_id(), Some(i)),
            None => RuleResult::clean(self.rule_id()),
        }
    }
}

/// Detects 4 of 5 consecutive points between 1σ and 3σ from the mean.
#[derive(Debug, Clone, Copy, Default)]
pub struct FourOfFiveBeyondOneSigma;

impl RuleDetector for FourOfFiveBeyondOneSigma {
    fn rule_id(&self) -> RuleId {
        RuleId::FourOfFiveBeyondOneSigma
    }

    fn minimum_sample_size(&self) -> usize {
        5
    }

    fn evaluate(&self, series: &Series, limits: &ControlLimits) -> RuleResult {
        if series.len() < self.minimum_sample_size() {
            return self.insufficient();
        }
        match scan_windows(series, limits, 5, 4, 1.0) {
            Some(i) => RuleResult::violated(self.rule_id(), Some(i)),
            None => RuleResult::clean(self.rule_id()),
        }
    }
}
