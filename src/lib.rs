//! Seriesort - deterministic ordering of time series
//!
//! Seriesort orders a collection of time series either by a key that a
//! caller-supplied transformation derives from each series, or by the
//! series' most recent values.
//!
//! # Quick Start
//!
//! ```
//! use seriesort::{order_by_key, sort_by_last_value, Metadata, Series, TimeSeries, Timestamp};
//!
//! let mut all = vec![
//!     Series::new(Metadata::new("b")).with_sample(Timestamp::from_micros(5), 10),
//!     Series::new(Metadata::new("a")).with_sample(Timestamp::from_micros(9), 10),
//! ];
//!
//! // Most recent value, then most recent tick (later first)
//! sort_by_last_value(&mut all);
//! assert_eq!(all[0].metadata().name(), "a");
//!
//! // Keys from a transformation
//! order_by_key(&mut all, |s: &Series| Ok(s.last_tick().map(|t| t.as_micros().into())))?;
//! assert_eq!(all[0].metadata().name(), "b");
//! # Ok::<(), seriesort::Error>(())
//! ```
//!
//! # Architecture
//!
//! - `seriesort-core`: values, ticks, metadata, the `TimeSeries` contract, errors
//! - `seriesort-ordering`: key extraction, comparators, configuration

pub use seriesort_core::*;
pub use seriesort_ordering::*;
