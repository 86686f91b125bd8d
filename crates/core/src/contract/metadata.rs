//! Series identity metadata
//!
//! A series is identified by a class name and a set of labels, e.g.
//! `cpu.load{host=a,dc=eu}`. Metadata is the final tie-break when every other
//! ordering rule considers two series equal, so its order must be total.
//!
//! ## Text Order
//!
//! 1. Class names compare lexicographically (byte order)
//! 2. Labels compare as their sorted `(key, value)` pair sequence, pair by
//!    pair; when one sequence is a prefix of the other, the shorter sorts first
//!
//! Two metadata with the same class and identical labels compare `Equal`.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// Class name and labels identifying a series
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Metadata {
    name: String,
    #[serde(default)]
    labels: BTreeMap<String, String>,
}

impl Metadata {
    /// Create metadata with a class name and no labels
    pub fn new(name: impl Into<String>) -> Self {
        Metadata {
            name: name.into(),
            labels: BTreeMap::new(),
        }
    }

    /// Builder-style label insertion
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    /// Insert or replace a label, returning the previous value
    pub fn set_label(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.labels.insert(key.into(), value.into())
    }

    /// Class name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All labels, sorted by key
    pub fn labels(&self) -> &BTreeMap<String, String> {
        &self.labels
    }

    /// Look up a single label
    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels.get(key).map(String::as_str)
    }

    /// Compare by class name, then by sorted labels.
    pub fn text_cmp(&self, other: &Metadata) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.labels.iter().cmp(other.labels.iter()))
    }
}

impl PartialOrd for Metadata {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Metadata {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text_cmp(other)
    }
}

/// Renders as `name{k1=v1,k2=v2}`
impl fmt::Display for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{{", self.name)?;
        for (i, (k, v)) in self.labels.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}={}", k, v)?;
        }
        f.write_str("}")
    }
}
