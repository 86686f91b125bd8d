//! Ordering of time series
//!
//! Two orderings are provided:
//! - Keyed: a caller-supplied transformation yields one key per series
//!   ([`order_by_key`], [`KeyedComparator`])
//! - Last value: series compare by their most recent sample, then tick,
//!   then metadata ([`last_value_compare`], [`LastValueComparator`])
//!
//! Both are synchronous and single-threaded. Keyed sorts call the
//! transformation sequentially in input order before any comparison.
//!
//! Logging goes through `tracing` under the `seriesort::order` target.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod coerce;
pub mod config;
pub mod key;
pub mod keyed;
pub mod last_value;
pub mod metadata;
pub mod operand;
pub mod order;
mod sort;
pub mod transform;

pub use coerce::compare_values;
pub use config::{OrderingConfig, TieOrder, CONFIG_FILE_NAME};
pub use key::{KeyTable, KeyType, SortKey};
pub use keyed::{order_by_key, order_by_key_with, KeyedComparator};
pub use last_value::{last_value_compare, sort_by_last_value, LastValueComparator};
pub use metadata::{MetadataOrder, TextMetadataOrder};
pub use operand::{into_series, order_operands, order_operands_by_last_value, Operand};
pub use order::order;
pub use transform::{TransformError, TransformResult};
