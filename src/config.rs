//! Engine configuration
//!
//! The source material this engine replaces drifted between two threshold
//! conventions (run length 8 vs 10, trend length 6 vs 8), so both streak
//! thresholds are explicit named parameters here. The defaults are the
//! conventional Western Electric values.

use crate::error::{Error, Result};
use crate::report::RuleId;

/// Configuration for a [`RuleEngine`](crate::engine::RuleEngine)
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Same-side run length that triggers [`RuleId::SameSideRun`].
    /// Default 8; some chart variants use 10.
    pub run_length: usize,
    /// Monotonic streak length that triggers [`RuleId::Trend`].
    /// Default 6; some chart variants use 8.
    pub trend_length: usize,
    /// Minimum percentage of points within 1 local σ for
    /// [`RuleId::Normality`] to stay clean. Default 70.
    pub normality_threshold_pct: f64,
    /// Rules to evaluate, in the order given. Default: all seven in
    /// canonical order.
    pub rules: Vec<RuleId>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            run_length: 8,
            trend_length: 6,
            normality_threshold_pct: 70.0,
            rules: RuleId::ALL.to_vec(),
        }
    }
}

impl EngineConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.run_length < 2 {
            return Err(Error::InvalidParameter(format!(
                "run length must be at least 2, got {}",
                self.run_length
            )));
        }
        if self.trend_length < 2 {
            return Err(Error::InvalidParameter(format!(
                "trend length must be at least 2, got {}",
                self.trend_length
            )));
        }
        if !(self.normality_threshold_pct > 0.0 && self.normality_threshold_pct <= 100.0) {
            return Err(Error::InvalidParameter(format!(
                "normality threshold must be in (0, 100], got {}",
                self.normality_threshold_pct
            )));
        }
        if self.rules.is_empty() {
            return Err(Error::InvalidParameter(
                "rule set must not be empty".to_string(),
            ));
        }
        let mut seen: Vec<RuleId> = Vec::with_capacity(self.rules.len());
        for &rule in &self.rules {
            if seen.contains(&rule) {
                return Err(Error::InvalidParameter(format!(
                    "duplicate rule in rule set: {rule}"
                )));
            }
            seen.push(rule);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_western_electric() {
        let config = EngineConfig::default();
        assert_eq!(config.run_length, 8);
        assert_eq!(config.trend_length, 6);
        assert_eq!(config.normality_threshold_pct, 70.0);
        assert_eq!(config.rules, RuleId::ALL.to_vec());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_alternate_convention_is_valid() {
        let config = EngineConfig {
            run_length: 10,
            trend_length: 8,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_degenerate_lengths() {
        let config = EngineConfig {
            run_length: 1,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = EngineConfig {
            trend_length: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_threshold() {
        for pct in [0.0, -5.0, 100.5, f64::NAN] {
            let config = EngineConfig {
                normality_threshold_pct: pct,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "pct {pct} should be rejected");
        }
    }

    #[test]
    fn test_rejects_empty_and_duplicate_rule_sets() {
        let config = EngineConfig {
            rules: vec![],
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = EngineConfig {
            rules: vec![RuleId::Trend, RuleId::Trend],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_subset_is_valid() {
        let config = EngineConfig {
            rules: vec![RuleId::SameSideRun, RuleId::Trend],
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
