//! Core types and traits for seriesort
//!
//! This crate defines the foundational types used by the ordering layer:
//! - Value: Scalar sample value (Int, Float, String, Bool)
//! - Timestamp: Signed sample tick
//! - Metadata: Series identity (class name and labels)
//! - TimeSeries: Accessor contract every sortable series implements
//! - Series: In-memory reference series
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod contract;
pub mod error;
pub mod series;
pub mod traits;
pub mod value;

pub use contract::{Metadata, Timestamp};
pub use error::{Error, Result};
pub use series::{Sample, Series};
pub use traits::TimeSeries;
pub use value::Value;
