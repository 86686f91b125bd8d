//! Dynamically typed input lists
//!
//! Callers that receive their input from an untyped source (a stack machine,
//! a decoded request) hold a list of [`Operand`]s rather than a list of
//! series. [`order_operands`] checks that every element is a series before
//! the transformation is invoked even once.

use crate::config::OrderingConfig;
use crate::keyed::order_by_key_with;
use crate::last_value::LastValueComparator;
use crate::transform::TransformResult;
use serde::{Deserialize, Serialize};
use seriesort_core::{Error, Result, Series, Value};
use tracing::warn;

/// One element of an untyped input list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Operand {
    /// A time series
    Series(Series),
    /// A plain scalar
    Value(Value),
    /// Absent element
    Null,
}

impl Operand {
    /// Type name for error reporting
    pub fn type_name(&self) -> &'static str {
        match self {
            Operand::Series(_) => "Series",
            Operand::Value(v) => v.type_name(),
            Operand::Null => "Null",
        }
    }

    /// Get as &Series if this is a Series operand
    pub fn as_series(&self) -> Option<&Series> {
        match self {
            Operand::Series(s) => Some(s),
            _ => None,
        }
    }
}

impl From<Series> for Operand {
    fn from(s: Series) -> Self {
        Operand::Series(s)
    }
}

impl From<Value> for Operand {
    fn from(v: Value) -> Self {
        Operand::Value(v)
    }
}

/// Unwrap a list of operands into series.
///
/// # Errors
///
/// `NotAnEntityCollection` naming the first element that is not a series.
pub fn into_series(operands: Vec<Operand>) -> Result<Vec<Series>> {
    operands
        .into_iter()
        .enumerate()
        .map(|(index, operand)| match operand {
            Operand::Series(s) => Ok(s),
            other => {
                warn!(target: "seriesort::order", index, found = other.type_name(), "Input is not a series collection");
                Err(Error::not_an_entity(index, other.type_name()))
            }
        })
        .collect()
}

/// Keyed sort over an untyped list.
///
/// The whole list is checked before the transformation runs; on success the
/// series are returned in ascending key order.
pub fn order_operands<F>(
    operands: Vec<Operand>,
    transform: F,
    config: &OrderingConfig,
) -> Result<Vec<Series>>
where
    F: FnMut(&Series) -> TransformResult,
{
    let mut series = into_series(operands)?;
    order_by_key_with(&mut series, transform, config)?;
    Ok(series)
}

/// Last-value sort over an untyped list.
pub fn order_operands_by_last_value(
    operands: Vec<Operand>,
    config: &OrderingConfig,
) -> Result<Vec<Series>> {
    let mut series = into_series(operands)?;
    LastValueComparator::new().sort(&mut series, config);
    Ok(series)
}
