//! The seven pattern detectors
//!
//! Each module implements one detector family as a pure scan over the
//! ordered series. All detectors honor the same contract: a series shorter
//! than the rule's minimum window yields an insufficient-data verdict
//! rather than an error, and a verdict once triggered at position `i` can
//! never be un-set by extending the series past `i`.

mod alternating;
mod low_variation;
mod normality;
mod run;
mod shift;
mod trend;

pub use alternating::{Alternating, ALTERNATING_WINDOW};
pub use low_variation::{LowVariation, LOW_VARIATION_STREAK};
pub use normality::Normality;
pub use run::SameSideRun;
pub use shift::{FourOfFiveBeyondOneSigma, TwoOfThreeBeyondTwoSigma};
pub use trend::Trend;
