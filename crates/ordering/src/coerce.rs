//! Cross-type value comparison
//!
//! Rules, first match wins:
//!
//! | Left | Right | Comparison |
//! |------|-------|------------|
//! | Int | Int | integer order |
//! | Float | Float | IEEE-754 total order |
//! | String | String | byte order |
//! | Bool | Bool | `false < true` |
//! | Int | Float (either side) | both widened to f64, total order |
//! | anything else | | text renderings in byte order |
//!
//! Floats order as `f64::total_cmp` except for NaN: every NaN, whatever its
//! sign or payload, is equal to every other NaN and above `+inf`. Negative
//! zero still sorts before positive zero.

use seriesort_core::Value;
use std::cmp::Ordering;

/// Compare two sample values using the cross-type rules above.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => x.cmp(y),
        (Value::Float(x), Value::Float(y)) => compare_f64(*x, *y),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Int(x), Value::Float(y)) => compare_f64(*x as f64, *y),
        (Value::Float(x), Value::Int(y)) => compare_f64(*x, *y as f64),
        _ => compare_rendered(a, b),
    }
}

/// Total order over f64 with a single NaN class on top
#[inline]
pub fn compare_f64(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.total_cmp(&b),
    }
}

/// Last-resort comparison of the text renderings
pub fn compare_rendered(a: &Value, b: &Value) -> Ordering {
    a.to_string().cmp(&b.to_string())
}
