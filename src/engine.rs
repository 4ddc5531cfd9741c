//! Rule engine: validation, dispatch, and report assembly
//!
//! The engine owns no state beyond its configuration. Every evaluation is
//! a fresh pass: validate the input, run each configured detector over the
//! immutable series, and collect the verdicts. One rule's insufficiency
//! never aborts the others; structural input errors abort the whole call.

use tracing::{debug, trace};

use crate::config::EngineConfig;
use crate::error::{Error, Result};
use crate::limits::ControlLimits;
use crate::report::{RuleId, ViolationReport};
use crate::rules::{
    Alternating, FourOfFiveBeyondOneSigma, LowVariation, Normality, SameSideRun, Trend,
    TwoOfThreeBeyondTwoSigma,
};
use crate::series::Series;
use crate::traits::RuleDetector;
use crate::zone::{classify_series, ZoneClassification};

/// Evaluates a configured set of control chart rules over a series
#[derive(Debug, Clone)]
pub struct RuleEngine {
    config: EngineConfig,
}

impl Default for RuleEngine {
    fn default() -> Self {
        // The default config always validates.
        Self {
            config: EngineConfig::default(),
        }
    }
}

impl RuleEngine {
    /// Create an engine with a validated configuration
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The engine's configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn detector_for(&self, rule: RuleId) -> Box<dyn RuleDetector> {
        match rule {
            RuleId::SameSideRun => Box::new(SameSideRun::new(self.config.run_length)),
            RuleId::Trend => Box::new(Trend::new(self.config.trend_length)),
            RuleId::Normality => Box::new(Normality::new(self.config.normality_threshold_pct)),
            RuleId::TwoOfThreeBeyondTwoSigma => Box::new(TwoOfThreeBeyondTwoSigma),
            RuleId::FourOfFiveBeyondOneSigma => Box::new(FourOfFiveBeyondOneSigma),
            RuleId::Alternating => Box::new(Alternating),
            RuleId::LowVariation => Box::new(LowVariation),
        }
    }

    fn check_series(series: &Series) -> Result<()> {
        for sample in series.samples() {
            if !sample.value.is_finite() {
                return Err(Error::InvalidInput(format!(
                    "sample at position {} has non-finite value {}",
                    sample.index, sample.value
                )));
            }
        }
        Ok(())
    }

    /// Evaluate the configured rules against externally supplied limits.
    ///
    /// Non-finite series values fail the whole call with
    /// [`Error::InvalidInput`]; a short series succeeds with per-rule
    /// insufficient-data verdicts.
    pub fn evaluate(&self, series: &Series, limits: &ControlLimits) -> Result<ViolationReport> {
        Self::check_series(series)?;

        debug!(
            samples = series.len(),
            mean = limits.mean(),
            std_dev = limits.std_dev(),
            run_length = self.config.run_length,
            trend_length = self.config.trend_length,
            "evaluating control rules"
        );

        let results = self
            .config
            .rules
            .iter()
            .map(|&rule| {
                let result = self.detector_for(rule).evaluate(series, limits);
                trace!(rule = %rule, violated = result.is_violated(), "rule evaluated");
                result
            })
            .collect();

        Ok(ViolationReport::new(
            results,
            series.len(),
            limits.is_degenerate(),
        ))
    }

    /// Evaluate and also return the per-sample zone classification list for
    /// downstream coloring/plotting
    pub fn evaluate_with_zones(
        &self,
        series: &Series,
        limits: &ControlLimits,
    ) -> Result<(ViolationReport, Vec<ZoneClassification>)> {
        let report = self.evaluate(series, limits)?;
        Ok((report, classify_series(series, limits)))
    }

    /// Evaluate with limits derived from the series itself (self-baselined
    /// mode). Fails with [`Error::InsufficientData`] on an empty series,
    /// since there is nothing to derive limits from.
    pub fn evaluate_derived(&self, series: &Series) -> Result<ViolationReport> {
        Self::check_series(series)?;
        let limits = ControlLimits::from_series(series)?;
        self.evaluate(series, &limits)
    }
}
