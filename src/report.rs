//! Rule identifiers, verdicts, and the aggregated violation report

use std::fmt;

/// The seven pattern-detection rules, in canonical evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RuleId {
    /// Run of points on one side of the center line
    SameSideRun,
    /// Run of monotonically increasing or decreasing points
    Trend,
    /// Too few points within 1σ of the series' own mean
    Normality,
    /// 2 of 3 consecutive points between 2σ and 3σ
    TwoOfThreeBeyondTwoSigma,
    /// 4 of 5 consecutive points between 1σ and 3σ
    FourOfFiveBeyondOneSigma,
    /// 14 consecutive points strictly alternating up and down
    Alternating,
    /// 15 consecutive points within 1σ of the center line
    LowVariation,
}

impl RuleId {
    /// All rules in canonical order
    pub const ALL: [RuleId; 7] = [
        RuleId::SameSideRun,
        RuleId::Trend,
        RuleId::Normality,
        RuleId::TwoOfThreeBeyondTwoSigma,
        RuleId::FourOfFiveBeyondOneSigma,
        RuleId::Alternating,
        RuleId::LowVariation,
    ];
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleId::SameSideRun => write!(f, "points on one side"),
            RuleId::Trend => write!(f, "points trending"),
            RuleId::Normality => write!(f, "normality"),
            RuleId::TwoOfThreeBeyondTwoSigma => write!(f, "2 of 3 beyond 2σ"),
            RuleId::FourOfFiveBeyondOneSigma => write!(f, "4 of 5 beyond 1σ"),
            RuleId::Alternating => write!(f, "14 points alternating"),
            RuleId::LowVariation => write!(f, "15 points within 1σ"),
        }
    }
}

/// Three-way verdict of a single rule
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RuleStatus {
    /// The rule's pattern was found
    Violated {
        /// Position (0-based, by series order) at which the pattern was
        /// first completed. `None` for aggregate rules with no single
        /// triggering point.
        first_trigger: Option<usize>,
    },
    /// The rule was evaluated and found no pattern
    Clean,
    /// The series is shorter than the rule's minimum window; the rule was
    /// not evaluated. Distinct from [`RuleStatus::Clean`].
    InsufficientData {
        /// Minimum number of samples the rule needs
        required: usize,
    },
}

/// Verdict of one rule over one series
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleResult {
    /// Which rule produced this verdict
    pub rule: RuleId,
    /// The verdict
    pub status: RuleStatus,
}

impl RuleResult {
    /// A violated verdict with the position that completed the pattern
    pub fn violated(rule: RuleId, first_trigger: Option<usize>) -> Self {
        Self {
            rule,
            status: RuleStatus::Violated { first_trigger },
        }
    }

    /// An evaluated-and-clean verdict
    pub fn clean(rule: RuleId) -> Self {
        Self {
            rule,
            status: RuleStatus::Clean,
        }
    }

    /// A not-evaluated verdict for a too-short series
    pub fn insufficient(rule: RuleId, required: usize) -> Self {
        Self {
            rule,
            status: RuleStatus::InsufficientData { required },
        }
    }

    /// Whether the rule fired
    pub fn is_violated(&self) -> bool {
        matches!(self.status, RuleStatus::Violated { .. })
    }

    /// The triggering position, if the rule fired at a specific point
    pub fn first_trigger(&self) -> Option<usize> {
        match self.status {
            RuleStatus::Violated { first_trigger } => first_trigger,
            _ => None,
        }
    }
}

impl fmt::Display for RuleResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            RuleStatus::Violated {
                first_trigger: Some(i),
            } => write!(f, "{}: violated (first at {})", self.rule, i),
            RuleStatus::Violated {
                first_trigger: None,
            } => write!(f, "{}: violated", self.rule),
            RuleStatus::Clean => write!(f, "{}: ok", self.rule),
            RuleStatus::InsufficientData { required } => {
                write!(f, "{}: not evaluated (needs {} samples)", self.rule, required)
            }
        }
    }
}

/// Aggregated verdicts of an evaluation run, in canonical rule order
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViolationReport {
    results: Vec<RuleResult>,
    sample_size: usize,
    degenerate_variance: bool,
}

impl ViolationReport {
    /// Assemble a report from per-rule verdicts
    pub fn new(results: Vec<RuleResult>, sample_size: usize, degenerate_variance: bool) -> Self {
        Self {
            results,
            sample_size,
            degenerate_variance,
        }
    }

    /// Per-rule verdicts, in canonical rule order
    pub fn results(&self) -> &[RuleResult] {
        &self.results
    }

    /// Verdict for a specific rule, if it was part of the evaluated set
    pub fn get(&self, rule: RuleId) -> Option<&RuleResult> {
        self.results.iter().find(|r| r.rule == rule)
    }

    /// The rules that fired
    pub fn violated_rules(&self) -> Vec<RuleId> {
        self.results
            .iter()
            .filter(|r| r.is_violated())
            .map(|r| r.rule)
            .collect()
    }

    /// Whether any rule fired
    pub fn any_violation(&self) -> bool {
        self.results.iter().any(|r| r.is_violated())
    }

    /// Number of samples that were evaluated
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Whether the sigma unit was zero, meaning every zone boundary
    /// collapsed onto the center line and zone-based verdicts are
    /// meaningless as ordinary classifications
    pub fn is_degenerate(&self) -> bool {
        self.degenerate_variance
    }
}

impl fmt::Display for ViolationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Control rule evaluation:")?;
        writeln!(f, "  Samples: {}", self.sample_size)?;
        if self.degenerate_variance {
            writeln!(f, "  Warning: zero standard deviation, zones collapsed")?;
        }
        for result in &self.results {
            writeln!(f, "  {}", result)?;
        }
        Ok(())
    }
}
