//! Sort keys produced by a transformation
//!
//! A keyed sort accepts exactly three key types: Int, Float and String.
//! Bool is rejected even though Bool sample values are ordered by the
//! last-value comparator; boolean keys are not accepted by keyed sorts.
//!
//! The first key recorded in a [`KeyTable`] fixes the established type.
//! Every later key must have the same type.

use crate::coerce::compare_f64;
use seriesort_core::{Error, Result, Value};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Type of a sort key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyType {
    /// 64-bit signed integer keys
    Int,
    /// 64-bit floating point keys
    Float,
    /// UTF-8 string keys
    String,
}

impl KeyType {
    /// Type name, matching `Value::type_name`
    pub fn as_str(self) -> &'static str {
        match self {
            KeyType::Int => "Int",
            KeyType::Float => "Float",
            KeyType::String => "String",
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated sort key
///
/// Keys of the same type compare natively; floats use the IEEE-754 total
/// order. Keys of different types never meet inside one [`KeyTable`], but
/// the `Ord` impl still ranks them `Int < Float < String` so it stays total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SortKey {
    /// Integer key
    Int(i64),
    /// Float key
    Float(f64),
    /// String key
    String(String),
}

impl SortKey {
    /// Classify a transformation result. Bool yields `None`.
    pub fn from_value(value: Value) -> Option<SortKey> {
        match value {
            Value::Int(i) => Some(SortKey::Int(i)),
            Value::Float(f) => Some(SortKey::Float(f)),
            Value::String(s) => Some(SortKey::String(s)),
            Value::Bool(_) => None,
        }
    }

    /// Type of this key
    pub fn key_type(&self) -> KeyType {
        match self {
            SortKey::Int(_) => KeyType::Int,
            SortKey::Float(_) => KeyType::Float,
            SortKey::String(_) => KeyType::String,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            SortKey::Int(_) => 0,
            SortKey::Float(_) => 1,
            SortKey::String(_) => 2,
        }
    }
}

impl From<SortKey> for Value {
    fn from(key: SortKey) -> Self {
        match key {
            SortKey::Int(i) => Value::Int(i),
            SortKey::Float(f) => Value::Float(f),
            SortKey::String(s) => Value::String(s),
        }
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Int(a), SortKey::Int(b)) => a.cmp(b),
            (SortKey::Float(a), SortKey::Float(b)) => compare_f64(*a, *b),
            (SortKey::String(a), SortKey::String(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SortKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortKey {}

/// One key per input position, all of one type
///
/// Entries are addressed by the position of the series in the input, so two
/// series with identical content still get separate entries.
#[derive(Debug, Clone, Default)]
pub struct KeyTable {
    keys: Vec<SortKey>,
    key_type: Option<KeyType>,
}

impl KeyTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table sized for `capacity` series
    pub fn with_capacity(capacity: usize) -> Self {
        KeyTable {
            keys: Vec::with_capacity(capacity),
            key_type: None,
        }
    }

    /// Validate a transformation result and record it for the next position.
    ///
    /// # Errors
    ///
    /// `InconsistentOrInvalidKeyType` if the result is absent, a Bool, or a
    /// type different from the established one. The table is unchanged on
    /// error.
    pub fn record(&mut self, result: Option<Value>) -> Result<&SortKey> {
        let index = self.keys.len();
        let expected = self.key_type.map(KeyType::as_str);

        let value = result.ok_or_else(|| Error::invalid_key(index, expected, "nothing"))?;
        let found = value.type_name();
        let key = SortKey::from_value(value)
            .ok_or_else(|| Error::invalid_key(index, expected, found))?;

        match self.key_type {
            Some(established) if established != key.key_type() => {
                return Err(Error::invalid_key(index, expected, found));
            }
            Some(_) => {}
            None => self.key_type = Some(key.key_type()),
        }

        self.keys.push(key);
        Ok(&self.keys[index])
    }

    /// Established key type; `None` while the table is empty
    pub fn key_type(&self) -> Option<KeyType> {
        self.key_type
    }

    /// Key recorded for a position
    pub fn get(&self, index: usize) -> Option<&SortKey> {
        self.keys.get(index)
    }

    /// Number of recorded keys
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// True when no key has been recorded
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Keys in input order
    pub fn iter(&self) -> impl Iterator<Item = &SortKey> {
        self.keys.iter()
    }

    /// Compare the keys of two positions.
    ///
    /// Positions outside the table sort after every recorded key.
    pub fn compare(&self, a: usize, b: usize) -> Ordering {
        match (self.keys.get(a), self.keys.get(b)) {
            (Some(x), Some(y)) => x.cmp(y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}
