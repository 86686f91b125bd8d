//! Shared test utilities for the integration suites.
//!
//! Import via `#[path = "../common/mod.rs"] mod common;` from a suite's main.rs.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

pub use seriesort::{
    Error, Metadata, OrderingConfig, Series, TimeSeries, Timestamp, TransformError,
    TransformResult, Value,
};

// ============================================================================
// Series builders
// ============================================================================

/// Empty series named `name`.
pub fn empty(name: &str) -> Series {
    Series::new(Metadata::new(name))
}

/// Series named `name` with the given `(tick, value)` samples.
pub fn series<V: Into<Value> + Clone>(name: &str, samples: &[(i64, V)]) -> Series {
    let mut s = empty(name);
    for (tick, value) in samples {
        s.push(Timestamp::from_micros(*tick), value.clone());
    }
    s
}

/// Series with a single sample.
pub fn single(name: &str, tick: i64, value: impl Into<Value>) -> Series {
    empty(name).with_sample(Timestamp::from_micros(tick), value)
}

/// Class names in collection order.
pub fn names(all: &[Series]) -> Vec<String> {
    all.iter().map(|s| s.metadata().name().to_string()).collect()
}

// ============================================================================
// Recording transformation
// ============================================================================

/// Log of transformation calls, shared with the closure under test.
#[derive(Clone, Default)]
pub struct CallLog {
    calls: Rc<RefCell<Vec<String>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `inner` so every call records the series name first.
    pub fn wrap<F>(&self, mut inner: F) -> impl FnMut(&Series) -> TransformResult
    where
        F: FnMut(&Series) -> TransformResult,
    {
        let calls = Rc::clone(&self.calls);
        move |s: &Series| {
            calls.borrow_mut().push(s.metadata().name().to_string());
            inner(s)
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

/// Transformation returning the most recent value.
pub fn last_value(s: &Series) -> TransformResult {
    Ok(s.last_value().cloned())
}
