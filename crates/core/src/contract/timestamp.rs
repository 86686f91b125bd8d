//! Sample timestamp (tick) type
//!
//! Every sample in a series carries a tick. Ticks order the samples of a
//! series: the sample with the largest tick is the most recent one.
//!
//! ## Precision
//!
//! Ticks are signed 64-bit integers. By convention they count microseconds
//! since Unix epoch (1970-01-01 00:00:00 UTC), but nothing in the ordering
//! logic depends on the unit. Negative ticks are valid and sort before epoch.
//!
//! ## Usage
//!
//! ```
//! use seriesort_core::Timestamp;
//!
//! let earlier = Timestamp::from_micros(-5);
//! let later = Timestamp::from_micros(1_000_000_000);
//! assert!(earlier < later);
//! assert_eq!(later.as_micros(), 1_000_000_000);
//! ```

use serde::{Deserialize, Serialize};

/// Signed sample tick
///
/// ## Invariants
///
/// - Ticks are totally ordered (plain `i64` order)
/// - The zero tick represents Unix epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Unix epoch (1970-01-01 00:00:00 UTC)
    pub const EPOCH: Timestamp = Timestamp(0);

    /// Create a timestamp from microseconds since epoch
    #[inline]
    pub const fn from_micros(micros: i64) -> Self {
        Timestamp(micros)
    }

    /// Get the raw tick
    #[inline]
    pub const fn as_micros(&self) -> i64 {
        self.0
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Timestamp::EPOCH
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Timestamp {
    /// Create from a raw tick
    fn from(tick: i64) -> Self {
        Timestamp::from_micros(tick)
    }
}

impl From<Timestamp> for i64 {
    /// Extract the raw tick
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}
