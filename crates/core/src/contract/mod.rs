//! Contract types shared by every series implementation
//!
//! ## Module Structure
//!
//! - `timestamp`: Sample ticks
//! - `metadata`: Series identity (class name and labels)
//!
//! ## Usage
//!
//! ```
//! use seriesort_core::contract::{Metadata, Timestamp};
//! ```

pub mod metadata;
pub mod timestamp;

// Re-exports
pub use metadata::Metadata;
pub use timestamp::Timestamp;
