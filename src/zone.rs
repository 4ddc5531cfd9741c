//! Per-sample sigma-zone classification
//!
//! Each sample is banded by its absolute deviation from the center line.
//! Boundaries are closed on the inner edge: a value exactly at 1σ is zone C,
//! exactly at 2σ is zone B, exactly at 3σ is zone A. Ties always resolve
//! toward the tighter zone. Classification is stateless and independent per
//! sample; it never looks at neighbors.

use std::fmt;

use crate::limits::ControlLimits;
use crate::series::{Sample, Series};

/// Sigma band relative to the center line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SigmaZone {
    /// Within 1σ of the center line
    C,
    /// Between 1σ and 2σ
    B,
    /// Between 2σ and 3σ
    A,
    /// More than 3σ from the center line (out of control)
    Beyond,
}

impl fmt::Display for SigmaZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SigmaZone::C => write!(f, "C (within 1σ)"),
            SigmaZone::B => write!(f, "B (1σ-2σ)"),
            SigmaZone::A => write!(f, "A (2σ-3σ)"),
            SigmaZone::Beyond => write!(f, "beyond 3σ"),
        }
    }
}

/// Which side of the center line a sample falls on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Above,
    Below,
    /// Exactly on the center line
    On,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Above => write!(f, "above"),
            Side::Below => write!(f, "below"),
            Side::On => write!(f, "on"),
        }
    }
}

/// Zone verdict for a single sample
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoneClassification {
    /// The sample's order-defining index
    pub index: usize,
    /// Sigma band of the sample
    pub zone: SigmaZone,
    /// Side of the center line
    pub side: Side,
    /// `|value - mean| > 3σ`, exactly
    pub out_of_control: bool,
}

/// Classify a single sample against the given control limits
pub fn classify(sample: &Sample, limits: &ControlLimits) -> ZoneClassification {
    let deviation = (sample.value - limits.mean()).abs();
    let sigma = limits.std_dev();

    let zone = if deviation <= sigma {
        SigmaZone::C
    } else if deviation <= 2.0 * sigma {
        SigmaZone::B
    } else if deviation <= 3.0 * sigma {
        SigmaZone::A
    } else {
        SigmaZone::Beyond
    };

    let side = if sample.value > limits.mean() {
        Side::Above
    } else if sample.value < limits.mean() {
        Side::Below
    } else {
        Side::On
    };

    ZoneClassification {
        index: sample.index,
        zone,
        side,
        out_of_control: deviation > 3.0 * sigma,
    }
}

/// Classify every sample of a series, in process order
pub fn classify_series(series: &Series, limits: &ControlLimits) -> Vec<ZoneClassification> {
    series
        .samples()
        .iter()
        .map(|sample| classify(sample, limits))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits() -> ControlLimits {
        ControlLimits::new(13.0, 4.0).unwrap()
    }

    #[test]
    fn test_zone_banding() {
        let cases = [
            (13.0, SigmaZone::C),
            (15.0, SigmaZone::C),
            (19.0, SigmaZone::B),
            (5.5, SigmaZone::B),
            (23.0, SigmaZone::A),
            (2.0, SigmaZone::A),
            (28.0, SigmaZone::Beyond),
            (-1.0, SigmaZone::Beyond),
        ];
        for (value, expected) in cases {
            let c = classify(&Sample::new(0, value), &limits());
            assert_eq!(c.zone, expected, "value {value}");
        }
    }

    #[test]
    fn test_boundary_ties_go_to_tighter_zone() {
        // Exactly at 1σ/2σ/3σ: C, B, A respectively.
        assert_eq!(classify(&Sample::new(0, 17.0), &limits()).zone, SigmaZone::C);
        assert_eq!(classify(&Sample::new(0, 21.0), &limits()).zone, SigmaZone::B);
        assert_eq!(classify(&Sample::new(0, 25.0), &limits()).zone, SigmaZone::A);
        assert_eq!(classify(&Sample::new(0, 9.0), &limits()).zone, SigmaZone::C);
        assert_eq!(classify(&Sample::new(0, 5.0), &limits()).zone, SigmaZone::B);
        assert_eq!(classify(&Sample::new(0, 1.0), &limits()).zone, SigmaZone::A);
    }

    #[test]
    fn test_side() {
        assert_eq!(classify(&Sample::new(0, 14.0), &limits()).side, Side::Above);
        assert_eq!(classify(&Sample::new(0, 12.0), &limits()).side, Side::Below);
        assert_eq!(classify(&Sample::new(0, 13.0), &limits()).side, Side::On);
    }

    #[test]
    fn test_out_of_control_matches_three_sigma_exactly() {
        // On the 3σ limit is still in control.
        assert!(!classify(&Sample::new(0, 25.0), &limits()).out_of_control);
        assert!(classify(&Sample::new(0, 25.0001), &limits()).out_of_control);
        assert!(classify(&Sample::new(0, 0.9999), &limits()).out_of_control);
    }

    #[test]
    fn test_degenerate_sigma_collapses_zones() {
        let limits = ControlLimits::new(10.0, 0.0).unwrap();
        let on_mean = classify(&Sample::new(0, 10.0), &limits);
        assert_eq!(on_mean.zone, SigmaZone::C);
        assert_eq!(on_mean.side, Side::On);
        assert!(!on_mean.out_of_control);

        let off_mean = classify(&Sample::new(1, 10.01), &limits);
        assert_eq!(off_mean.zone, SigmaZone::Beyond);
        assert!(off_mean.out_of_control);
    }

    #[test]
    fn test_classify_series_keeps_order_and_indices() {
        let series = Series::from_values(&[10.0, 12.0, 8.0, 14.0, 28.0, 9.0]);
        let classes = classify_series(&series, &limits());
        assert_eq!(classes.len(), 6);
        assert_eq!(classes[4].index, 4);
        assert_eq!(classes[4].zone, SigmaZone::Beyond);
        assert!(classes[4].out_of_control);
        // Everything else is within 2σ.
        for c in classes.iter().filter(|c| c.index != 4) {
            assert!(matches!(c.zone, SigmaZone::C | SigmaZone::B));
            assert!(!c.out_of_control);
        }
    }
}
