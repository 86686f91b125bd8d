//! Single entry point choosing between keyed and last-value ordering

use crate::config::OrderingConfig;
use crate::keyed::order_by_key_with;
use crate::last_value::LastValueComparator;
use crate::transform::TransformResult;
use seriesort_core::{Result, TimeSeries};

/// Sort series by transformation keys when a transformation is given,
/// otherwise by last value.
///
/// Only the keyed path can fail.
///
/// ```
/// use seriesort_core::Series;
/// use seriesort_ordering::{order, OrderingConfig, TransformResult};
///
/// let mut all: Vec<Series> = Vec::new();
/// order(&mut all, None::<fn(&Series) -> TransformResult>, &OrderingConfig::default())?;
/// # Ok::<(), seriesort_core::Error>(())
/// ```
pub fn order<S, F>(series: &mut [S], transform: Option<F>, config: &OrderingConfig) -> Result<()>
where
    S: TimeSeries,
    F: FnMut(&S) -> TransformResult,
{
    match transform {
        Some(transform) => order_by_key_with(series, transform, config),
        None => {
            LastValueComparator::new().sort(series, config);
            Ok(())
        }
    }
}
