//! Ordered measurement series
//!
//! A [`Series`] is the immutable input to every engine operation. Sample
//! order encodes process time and is never changed by the engine; the
//! `index` field is an opaque identifier carried through to results.

/// A single process measurement
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample {
    /// Order-defining index, unique within a series
    pub index: usize,
    /// Optional informational label (e.g. "Sample 12")
    pub label: Option<String>,
    /// Measured value
    pub value: f64,
}

impl Sample {
    /// Create an unlabeled sample
    pub fn new(index: usize, value: f64) -> Self {
        Self {
            index,
            label: None,
            value,
        }
    }

    /// Create a labeled sample
    pub fn with_label(index: usize, label: impl Into<String>, value: f64) -> Self {
        Self {
            index,
            label: Some(label.into()),
            value,
        }
    }
}

/// An ordered, immutable sequence of samples
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Series {
    samples: Vec<Sample>,
}

impl Series {
    /// Create a series from pre-built samples, preserving their order
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    /// Create a series from raw values, assigning indices 0..n
    pub fn from_values(values: &[f64]) -> Self {
        Self {
            samples: values
                .iter()
                .enumerate()
                .map(|(i, &v)| Sample::new(i, v))
                .collect(),
        }
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the series is empty
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The samples in process order
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Iterator over the measured values in process order
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.value)
    }
}
