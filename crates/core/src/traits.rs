//! Core trait for series abstraction
//!
//! The ordering layer never looks inside a series. It only needs the sample
//! count, the most recent sample and the identity metadata, so any storage
//! layout can be sorted by implementing [`TimeSeries`].

use crate::contract::{Metadata, Timestamp};
use crate::value::Value;

/// Read-only accessor contract for a time series
///
/// # Examples
///
/// ```
/// use seriesort_core::{Metadata, Series, TimeSeries, Timestamp, Value};
///
/// let mut series = Series::new(Metadata::new("temp"));
/// series.push(Timestamp::from_micros(10), Value::Int(3));
/// series.push(Timestamp::from_micros(5), Value::Int(7));
///
/// assert_eq!(series.last_tick(), Some(Timestamp::from_micros(10)));
/// assert_eq!(series.last_value(), Some(&Value::Int(3)));
/// ```
pub trait TimeSeries {
    /// Number of samples
    fn len(&self) -> usize;

    /// The sample with the largest tick
    ///
    /// Must return `Some` iff `len() > 0`.
    fn most_recent(&self) -> Option<(Timestamp, &Value)>;

    /// Identity metadata
    fn metadata(&self) -> &Metadata;

    /// True when the series holds no samples
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value of the most recent sample
    fn last_value(&self) -> Option<&Value> {
        self.most_recent().map(|(_, value)| value)
    }

    /// Tick of the most recent sample
    fn last_tick(&self) -> Option<Timestamp> {
        self.most_recent().map(|(tick, _)| tick)
    }
}

impl<T: TimeSeries + ?Sized> TimeSeries for &T {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn most_recent(&self) -> Option<(Timestamp, &Value)> {
        (**self).most_recent()
    }

    fn metadata(&self) -> &Metadata {
        (**self).metadata()
    }
}

impl<T: TimeSeries + ?Sized> TimeSeries for Box<T> {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn most_recent(&self) -> Option<(Timestamp, &Value)> {
        (**self).most_recent()
    }

    fn metadata(&self) -> &Metadata {
        (**self).metadata()
    }
}
