//! In-memory series
//!
//! [`Series`] keeps samples in insertion order and never re-sorts them.
//! The most recent sample is found by scanning for the largest tick, so
//! reading a series for ordering purposes never mutates it.

use crate::contract::{Metadata, Timestamp};
use crate::traits::TimeSeries;
use crate::value::Value;
use serde::{Deserialize, Serialize};

/// A single observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// When the value was observed
    pub tick: Timestamp,
    /// Observed value
    pub value: Value,
}

impl Sample {
    /// Create a sample
    pub fn new(tick: Timestamp, value: impl Into<Value>) -> Self {
        Sample {
            tick,
            value: value.into(),
        }
    }
}

/// Metadata plus an unordered list of samples
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    metadata: Metadata,
    #[serde(default)]
    samples: Vec<Sample>,
}

impl Series {
    /// Create an empty series
    pub fn new(metadata: Metadata) -> Self {
        Series {
            metadata,
            samples: Vec::new(),
        }
    }

    /// Create a series from existing samples
    pub fn with_samples(metadata: Metadata, samples: Vec<Sample>) -> Self {
        Series { metadata, samples }
    }

    /// Append a sample
    ///
    /// Ticks need not be increasing.
    pub fn push(&mut self, tick: Timestamp, value: impl Into<Value>) {
        self.samples.push(Sample::new(tick, value));
    }

    /// Builder-style [`Series::push`]
    pub fn with_sample(mut self, tick: Timestamp, value: impl Into<Value>) -> Self {
        self.push(tick, value);
        self
    }

    /// Samples in insertion order
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Mutable access to the metadata
    pub fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }
}

impl TimeSeries for Series {
    fn len(&self) -> usize {
        self.samples.len()
    }

    /// Largest tick wins; among equal ticks the sample pushed last wins.
    fn most_recent(&self) -> Option<(Timestamp, &Value)> {
        self.samples
            .iter()
            .max_by_key(|s| s.tick)
            .map(|s| (s.tick, &s.value))
    }

    fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}
