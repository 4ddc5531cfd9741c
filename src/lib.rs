//! Shewhart control chart rule evaluation
//!
//! Given an ordered sequence of measurements, this crate decides whether
//! the process is in statistical control by checking the series against a
//! battery of Western Electric / Nelson style pattern rules relative to a
//! center line and sigma-based control limits.
//!
//! # Components
//!
//! - [`SeriesSummary`] — population mean/std dev and display bounds
//! - [`ControlLimits`] — center line, UCL/LCL, sigma-zone boundaries
//! - [`classify`] / [`classify_series`] — per-sample sigma-zone verdicts
//! - Seven [`RuleDetector`] implementations in [`rules`]
//! - [`RuleEngine`] — validation, dispatch, [`ViolationReport`] assembly
//!
//! # Usage
//!
//! ```rust
//! use spc_rules::{ControlLimits, RuleEngine, RuleId, Series};
//!
//! // Eight points above the center line: a same-side run.
//! let series = Series::from_values(&[20.0; 8]);
//! let limits = ControlLimits::new(13.0, 4.0).unwrap();
//!
//! let engine = RuleEngine::default();
//! let report = engine.evaluate(&series, &limits).unwrap();
//!
//! assert!(report.get(RuleId::SameSideRun).unwrap().is_violated());
//! ```
//!
//! Every evaluation is a pure read over an immutable [`Series`]; the engine
//! retains no state between calls. Rendering, interaction, and data
//! acquisition are external collaborators that consume [`ViolationReport`]
//! and [`ZoneClassification`] or supply [`Series`].
//!
//! # References
//!
//! - Western Electric (1956). *Statistical Quality Control Handbook*.
//! - Nelson, L.S. (1984). "The Shewhart Control Chart — Tests for Special
//!   Causes", *Journal of Quality Technology* 16(4), pp. 237-239.

pub mod config;
pub mod engine;
pub mod error;
pub mod limits;
pub mod report;
pub mod rules;
pub mod series;
pub mod summary;
pub mod traits;
pub mod zone;

pub use config::EngineConfig;
pub use engine::RuleEngine;
pub use error::{Error, Result};
pub use limits::ControlLimits;
pub use report::{RuleId, RuleResult, RuleStatus, ViolationReport};
pub use series::{Sample, Series};
pub use summary::SeriesSummary;
pub use traits::RuleDetector;
pub use zone::{classify, classify_series, Side, SigmaZone, ZoneClassification};
