//! Ordering configuration via `seriesort.toml`
//!
//! The only tunable is how ties are resolved by the underlying sort. The
//! keyed comparator adds no tie-break of its own, so equal keys are left in
//! input order (stable merge sort) or in whatever order the in-place heap
//! sort picks (unstable).

use crate::sort::{apply_positions, heap_sort, merge_sort};
use serde::{Deserialize, Serialize};
use seriesort_core::{Error, Result};
use std::cmp::Ordering;
use std::path::Path;

/// Config file name.
pub const CONFIG_FILE_NAME: &str = "seriesort.toml";

/// How elements with equal keys are arranged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TieOrder {
    /// Equal elements keep their input order
    #[default]
    Stable,
    /// Equal elements may end up in any order
    Unstable,
}

/// Ordering configuration loaded from `seriesort.toml`.
///
/// # Example
///
/// ```toml
/// # Tie handling: "stable" (default) or "unstable"
/// ties = "stable"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderingConfig {
    /// Tie handling: `"stable"` or `"unstable"`.
    #[serde(default)]
    pub ties: TieOrder,
}

impl OrderingConfig {
    /// Config that keeps input order among ties.
    pub fn stable() -> Self {
        OrderingConfig {
            ties: TieOrder::Stable,
        }
    }

    /// Config that leaves ties unordered.
    pub fn unstable() -> Self {
        OrderingConfig {
            ties: TieOrder::Unstable,
        }
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Seriesort ordering configuration
#
# Tie handling: "stable" (default) or "unstable"
#   "stable"   = elements with equal keys keep their input order
#   "unstable" = elements with equal keys may be reordered (no extra buffer)
ties = "stable"
"#
    }

    /// Parse config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the text is not valid TOML or names an
    /// unknown tie mode.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::config(format!("Failed to parse ordering config: {}", e)))
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        toml::from_str(&content).map_err(|e| {
            Error::config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content).map_err(|e| {
            Error::config(format!(
                "Failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Input positions `0..len` in ascending order under `compare`,
    /// honoring the configured tie order.
    ///
    /// Never panics, even when `compare` is not a total order.
    pub(crate) fn sorted_positions<F>(&self, len: usize, compare: F) -> Vec<usize>
    where
        F: FnMut(usize, usize) -> Ordering,
    {
        match self.ties {
            TieOrder::Stable => merge_sort(len, compare),
            TieOrder::Unstable => heap_sort(len, compare),
        }
    }

    /// Sort `items` with `compare`, honoring the configured tie order.
    pub(crate) fn sort_by<T, F>(&self, items: &mut [T], mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let positions = self.sorted_positions(items.len(), |a, b| compare(&items[a], &items[b]));
        apply_positions(items, positions);
    }
}
