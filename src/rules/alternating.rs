//! Alternating rule
//!
//! A long sawtooth pattern signals systematic variation, typically two
//! alternating process streams.

use crate::limits::ControlLimits;
use crate::report::{RuleId, RuleResult};
use crate::series::Series;
use crate::traits::RuleDetector;

/// Window width for the alternation check
pub const ALTERNATING_WINDOW: usize = 14;

/// Detects 14 consecutive points strictly alternating up and down.
///
/// Every first difference in the window must be non-zero and opposite in
/// sign to its predecessor; a single flat step disqualifies the window.
#[derive(Debug, Clone, Copy, Default)]
pub struct Alternating;

/// Whether all first differences of `window` strictly alternate in sign.
fn is_alternating(window: &[f64]) -> bool {
    for i in 2..window.len() {
        let prev_diff = window[i - 1] - window[i - 2];
        let curr_diff = window[i] - window[i - 1];
        if prev_diff == 0.0 || curr_diff == 0.0 {
            return false;
        }
        if (prev_diff > 0.0) == (curr_diff > 0.0) {
            return false;
        }
    }
    // A 14-wide window has 13 differences; the loop above covers pairs, so
    // the first difference alone must still be non-zero.
    window.len() < 2 || window[1] != window[0]
}

impl RuleDetector for Alternating {
    fn rule_id(&self) -> RuleId {
        RuleId::Alternating
    }

    fn minimum_sample_size(&self) -> usize {
        ALTERNATING_WINDOW
    }

    fn evaluate(&self, series: &Series, limits: &ControlLimits) -> RuleResult {
        let _ = limits; // Alternation compares neighbors only.
        if series.len() < self.minimum_sample_size() {
            return self.insufficient();
        }

        let values: Vec<f64> = series.values().collect();
        match values
            .windows(ALTERNATING_WINDOW)
            .position(|window| is_alternating(window))
        {
            Some(start) => {
                RuleResult::violated(self.rule_id(), Some(start + ALTERNATING_WINDOW - 1))
            }
            None => RuleResult::clean(self.rule_id()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::RuleStatus;

    fn limits() -> ControlLimits {
        ControlLimits::new(13.0, 4.0).unwrap()
    }

    fn sawtooth(n: usize) -> Vec<f64> {
        (0..n).map(|i| if i % 2 == 0 { 1.0 } else { 2.0 }).collect()
    }

    #[test]
    fn test_fourteen_alternating_fires() {
        let series = Series::from_values(&sawtooth(14));
        let result = Alternating.evaluate(&series, &limits());
        assert!(result.is_violated());
        assert_eq!(result.first_trigger(), Some(13));
    }

    #[test]
    fn test_thirteen_is_not_enough() {
        let series = Series::from_values(&sawtooth(13));
        let result = Alternating.evaluate(&series, &limits());
        assert_eq!(result.status, RuleStatus::InsufficientData { required: 14 });
    }

    #[test]
    fn test_flat_step_disqualifies() {
        let mut values = sawtooth(14);
        values[7] = values[6]; // zero difference inside the window
        let result = Alternating.evaluate(&Series::from_values(&values), &limits());
        assert!(!result.is_violated());
    }

    #[test]
    fn test_two_same_sign_steps_disqualify() {
        let mut values = sawtooth(14);
        values[5] = 3.0; // up after up
        let result = Alternating.evaluate(&Series::from_values(&values), &limits());
        assert!(!result.is_violated());
    }

    #[test]
    fn test_window_slides_over_prefix() {
        // Two flat points, then a full sawtooth: the flat prefix spoils the
        // first two windows, so the rule fires on the window starting at 2.
        let mut values = vec![1.0, 1.0];
        values.extend(sawtooth(14));
        let result = Alternating.evaluate(&Series::from_values(&values), &limits());
        assert!(result.is_violated());
        assert_eq!(result.first_trigger(), Some(15));
    }

    #[test]
    fn test_monotonic_series_is_clean() {
        let values: Vec<f64> = (0..20).map(|i| i as f64).collect();
        let result = Alternating.evaluate(&Series::from_values(&values), &limits());
        assert!(!result.is_violated());
    }
}
