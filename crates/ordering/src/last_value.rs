//! Last-value ordering
//!
//! Orders series without any transformation. Rules, first decisive wins:
//!
//! 1. Empty series sort after non-empty ones. Two empty series go straight
//!    to rule 4.
//! 2. Most recent values, compared with [`compare_values`].
//! 3. Most recent ticks, later first.
//! 4. Metadata, through the configured [`MetadataOrder`].
//!
//! The comparison never fails and is `Equal` for a series compared with
//! itself. It is not transitive once value types mix: `Float(3.0)` ties
//! `Int(3)` numerically and `Int(3)` ties `"3"` as text, yet `"3.0" > "3"`.
//! Sorting therefore never relies on a total order and cannot panic.

use crate::coerce::compare_values;
use crate::config::OrderingConfig;
use crate::metadata::{MetadataOrder, TextMetadataOrder};
use seriesort_core::TimeSeries;
use std::cmp::Ordering;
use tracing::debug;

/// Context-free comparator over series
#[derive(Debug, Clone, Copy, Default)]
pub struct LastValueComparator<M = TextMetadataOrder> {
    metadata_order: M,
}

impl LastValueComparator<TextMetadataOrder> {
    /// Comparator ending ties with the text metadata order
    pub fn new() -> Self {
        Self::default()
    }
}

impl<M: MetadataOrder> LastValueComparator<M> {
    /// Comparator ending ties with a caller-supplied metadata order
    pub fn with_metadata_order(metadata_order: M) -> Self {
        LastValueComparator { metadata_order }
    }

    /// Compare two series.
    ///
    /// A series whose `most_recent()` is `None` counts as empty.
    pub fn compare<S>(&self, a: &S, b: &S) -> Ordering
    where
        S: TimeSeries + ?Sized,
    {
        match (a.most_recent(), b.most_recent()) {
            (None, None) => self.metadata_order.compare(a.metadata(), b.metadata()),
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some((tick_a, value_a)), Some((tick_b, value_b))) => compare_values(value_a, value_b)
                .then_with(|| tick_b.cmp(&tick_a))
                .then_with(|| self.metadata_order.compare(a.metadata(), b.metadata())),
        }
    }

    /// Sort series in place with this comparator.
    ///
    /// The result is always a permutation of the input, whatever mix of
    /// value types the series hold.
    pub fn sort<S: TimeSeries>(&self, series: &mut [S], config: &OrderingConfig) {
        config.sort_by(series, |a, b| self.compare(a, b));
        debug!(target: "seriesort::order", count = series.len(), ties = ?config.ties, "Sorted by last value");
    }
}

/// Compare two series with the default last-value comparator.
///
/// ```
/// use seriesort_core::{Metadata, Series, Timestamp};
/// use seriesort_ordering::last_value_compare;
/// use std::cmp::Ordering;
///
/// let empty = Series::new(Metadata::new("a"));
/// let full = Series::new(Metadata::new("b")).with_sample(Timestamp::from_micros(1), 1);
/// assert_eq!(last_value_compare(&empty, &full), Ordering::Greater);
/// ```
pub fn last_value_compare<S>(a: &S, b: &S) -> Ordering
where
    S: TimeSeries + ?Sized,
{
    LastValueComparator::new().compare(a, b)
}

/// Sort series by last value with the default configuration.
pub fn sort_by_last_value<S: TimeSeries>(series: &mut [S]) {
    LastValueComparator::new().sort(series, &OrderingConfig::default());
}
