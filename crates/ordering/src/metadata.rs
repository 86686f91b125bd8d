//! Metadata ordering seam
//!
//! The last-value comparator ends every tie with a metadata comparison. The
//! comparison is pluggable; implementations must be total.

use seriesort_core::Metadata;
use std::cmp::Ordering;

/// Total order over series metadata
pub trait MetadataOrder {
    /// Compare two metadata
    fn compare(&self, a: &Metadata, b: &Metadata) -> Ordering;
}

/// Class name, then sorted labels (see [`Metadata::text_cmp`])
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextMetadataOrder;

impl MetadataOrder for TextMetadataOrder {
    fn compare(&self, a: &Metadata, b: &Metadata) -> Ordering {
        a.text_cmp(b)
    }
}

impl<F> MetadataOrder for F
where
    F: Fn(&Metadata, &Metadata) -> Ordering,
{
    fn compare(&self, a: &Metadata, b: &Metadata) -> Ordering {
        self(a, b)
    }
}
