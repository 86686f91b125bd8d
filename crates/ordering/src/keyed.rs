//! Keyed ordering
//!
//! A keyed sort runs in two strictly separated phases:
//!
//! 1. **Extraction**: the transformation is called once per series, in input
//!    order. Each result is validated and recorded in a [`KeyTable`]. The
//!    first failure aborts the sort; calls already made are not undone.
//! 2. **Ordering**: positions are sorted by their recorded keys and the
//!    series are permuted accordingly.
//!
//! No comparison happens before extraction completes, and the input is only
//! touched once both phases have succeeded.

use crate::config::OrderingConfig;
use crate::key::{KeyTable, KeyType, SortKey};
use crate::sort::apply_positions;
use crate::transform::TransformResult;
use seriesort_core::{Error, Result, TimeSeries};
use std::cmp::Ordering;
use tracing::{debug, trace, warn};

/// Comparator over positions, backed by extracted keys
#[derive(Debug, Clone)]
pub struct KeyedComparator {
    table: KeyTable,
}

impl KeyedComparator {
    /// Run the transformation over every series and validate the results.
    ///
    /// # Errors
    ///
    /// - `TransformFailed` if the transformation reports a failure
    /// - `InconsistentOrInvalidKeyType` if a result is absent, a Bool, or
    ///   differs in type from the first result
    pub fn extract<S, F>(series: &[S], mut transform: F) -> Result<Self>
    where
        S: TimeSeries,
        F: FnMut(&S) -> TransformResult,
    {
        let mut table = KeyTable::with_capacity(series.len());

        for (index, s) in series.iter().enumerate() {
            let result = transform(s).map_err(|e| {
                warn!(target: "seriesort::order", index, series = %s.metadata(), error = %e, "Transformation failed, sort aborted");
                Error::transform_failed(index, e.reason())
            })?;

            let key = table.record(result).map_err(|e| {
                warn!(target: "seriesort::order", index, series = %s.metadata(), error = %e, "Invalid sort key, sort aborted");
                e
            })?;
            trace!(target: "seriesort::order", index, series = %s.metadata(), key = ?key, "Key extracted");
        }

        debug!(
            target: "seriesort::order",
            count = table.len(),
            key_type = ?table.key_type(),
            "Keys extracted"
        );
        Ok(KeyedComparator { table })
    }

    /// Compare the series at two input positions by their keys.
    pub fn compare(&self, a: usize, b: usize) -> Ordering {
        self.table.compare(a, b)
    }

    /// Established key type; `None` for an empty input
    pub fn key_type(&self) -> Option<KeyType> {
        self.table.key_type()
    }

    /// Key of the series at an input position
    pub fn key(&self, index: usize) -> Option<&SortKey> {
        self.table.get(index)
    }

    /// The underlying key table
    pub fn key_table(&self) -> &KeyTable {
        &self.table
    }

    /// Input positions in ascending key order
    pub fn sorted_positions(&self, config: &OrderingConfig) -> Vec<usize> {
        config.sorted_positions(self.table.len(), |a, b| self.compare(a, b))
    }
}

/// Sort series by transformation-derived keys, with the default config.
///
/// # Example
///
/// ```
/// use seriesort_core::{Metadata, Series, TimeSeries, Timestamp, Value};
/// use seriesort_ordering::order_by_key;
///
/// let mut all = vec![
///     Series::new(Metadata::new("a")).with_sample(Timestamp::from_micros(1), 3),
///     Series::new(Metadata::new("b")).with_sample(Timestamp::from_micros(1), 1),
/// ];
/// order_by_key(&mut all, |s: &Series| Ok(Some(Value::Int(s.len() as i64))))?;
/// # Ok::<(), seriesort_core::Error>(())
/// ```
pub fn order_by_key<S, F>(series: &mut [S], transform: F) -> Result<()>
where
    S: TimeSeries,
    F: FnMut(&S) -> TransformResult,
{
    order_by_key_with(series, transform, &OrderingConfig::default())
}

/// Sort series by transformation-derived keys.
///
/// On error the slice is left exactly as it was.
pub fn order_by_key_with<S, F>(series: &mut [S], transform: F, config: &OrderingConfig) -> Result<()>
where
    S: TimeSeries,
    F: FnMut(&S) -> TransformResult,
{
    let comparator = KeyedComparator::extract(series, transform)?;
    let positions = comparator.sorted_positions(config);
    apply_positions(series, positions);
    debug!(target: "seriesort::order", count = series.len(), "Sorted by key");
    Ok(())
}
