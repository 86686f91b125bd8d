//! Last-value comparator invariants.

use crate::common::*;
use seriesort::{last_value_compare, LastValueComparator};
use std::cmp::Ordering;

#[test]
fn empty_series_sort_after_non_empty() {
    let e = empty("a");
    let n = single("z", 1, 0);
    assert_eq!(last_value_compare(&e, &n), Ordering::Greater);
    assert_eq!(last_value_compare(&n, &e), Ordering::Less);
}

#[test]
fn empty_beats_metadata() {
    // "a" < "z" by metadata, but emptiness decides first.
    let e = empty("a");
    let n = single("z", i64::MIN, "anything");
    assert_eq!(last_value_compare(&e, &n), Ordering::Greater);
}

#[test]
fn int_and_float_compare_numerically() {
    let five = single("a", 1, 5);
    let five_and_a_half = single("b", 1, 5.5);
    assert_eq!(last_value_compare(&five, &five_and_a_half), Ordering::Less);
    assert_eq!(last_value_compare(&five_and_a_half, &five), Ordering::Greater);
}

#[test]
fn int_equal_to_float_falls_through_to_tick() {
    let int_early = single("a", 1, 2);
    let float_late = single("b", 2, 2.0);
    assert_eq!(last_value_compare(&float_late, &int_early), Ordering::Less);
}

#[test]
fn false_before_true() {
    let f = single("z", 1, false);
    let t = single("a", 1, true);
    assert_eq!(last_value_compare(&f, &t), Ordering::Less);
    assert_eq!(last_value_compare(&t, &f), Ordering::Greater);
}

#[test]
fn mismatched_types_compare_by_rendering() {
    // "5" < "abc"
    let number = single("z", 1, 5);
    let text = single("a", 1, "abc");
    assert_eq!(last_value_compare(&number, &text), Ordering::Less);

    // "true" > "1.5"
    let flag = single("a", 1, true);
    let float = single("z", 1, 1.5);
    assert_eq!(last_value_compare(&flag, &float), Ordering::Greater);
}

#[test]
fn equal_rendering_falls_through_to_tick() {
    let text = single("a", 1, "7");
    let number = single("b", 2, 7);
    assert_eq!(last_value_compare(&number, &text), Ordering::Less);
}

#[test]
fn later_tick_ranks_first_on_equal_values() {
    let at_100 = single("a", 100, 42);
    let at_200 = single("b", 200, 42);
    assert_eq!(last_value_compare(&at_200, &at_100), Ordering::Less);
    assert_eq!(last_value_compare(&at_100, &at_200), Ordering::Greater);
}

#[test]
fn both_empty_compare_by_metadata() {
    let a = empty("a");
    let b = empty("b");
    assert_eq!(last_value_compare(&a, &b), Ordering::Less);
    assert_eq!(
        last_value_compare(&a, &b),
        a.metadata().text_cmp(b.metadata())
    );
}

#[test]
fn full_tie_uses_labels() {
    let mut a = single("m", 5, 1);
    a.metadata_mut().set_label("host", "a");
    let mut b = single("m", 5, 1);
    b.metadata_mut().set_label("host", "b");
    assert_eq!(last_value_compare(&a, &b), Ordering::Less);
}

#[test]
fn identical_series_compare_equal() {
    let a = single("m", 5, "x");
    let b = a.clone();
    assert_eq!(last_value_compare(&a, &b), Ordering::Equal);
    assert_eq!(last_value_compare(&a, &a), Ordering::Equal);
}

#[test]
fn most_recent_sample_is_largest_tick() {
    // Stored out of order: most recent is 9@30.
    let a = series("a", &[(30, 9), (10, 1), (20, 100)]);
    let b = single("b", 1, 50);
    assert_eq!(last_value_compare(&a, &b), Ordering::Less);
}

#[test]
fn custom_metadata_order_is_final_tie_break() {
    let by_host_desc = LastValueComparator::with_metadata_order(|x: &Metadata, y: &Metadata| {
        y.label("host").cmp(&x.label("host"))
    });
    let mut a = empty("m");
    a.metadata_mut().set_label("host", "a");
    let mut b = empty("m");
    b.metadata_mut().set_label("host", "b");
    assert_eq!(by_host_desc.compare(&a, &b), Ordering::Greater);
}

#[test]
fn comparator_is_antisymmetric_over_a_mixed_pool() {
    let pool = vec![
        empty("e1"),
        empty("e2"),
        single("i", 1, 3),
        single("f", 1, 3.0),
        single("f2", 2, 3.0),
        single("s", 1, "3"),
        single("t", 1, true),
        single("u", 1, false),
        single("nan", 1, f64::NAN),
    ];
    for a in &pool {
        for b in &pool {
            assert_eq!(last_value_compare(a, b), last_value_compare(b, a).reverse());
        }
    }
}

#[test]
fn large_mixed_collection_sorts_without_panicking() {
    let values = |i: i64| -> Option<Value> {
        let k = (i * 7919) % 50;
        match i % 7 {
            _ if i % 97 == 0 => None,
            0 => Some(Value::Int(k)),
            1 => Some(Value::Float(k as f64)),
            2 => Some(Value::String(k.to_string())),
            3 => Some(Value::Float(k as f64 + 0.5)),
            4 => Some(Value::Bool(k % 2 == 0)),
            5 => Some(Value::Int(i64::MAX - k)),
            _ => Some(Value::Float(9.007_199_254_740_993e15)),
        }
    };
    let all: Vec<Series> = (0..2000i64)
        .map(|i| match values(i) {
            Some(v) => single(&format!("s{:04}", i), (i * 31) % 17, v),
            None => empty(&format!("s{:04}", i)),
        })
        .collect();
    let mut expected = names(&all);
    expected.sort();

    for config in [OrderingConfig::stable(), OrderingConfig::unstable()] {
        let mut sorted = all.clone();
        LastValueComparator::new().sort(&mut sorted, &config);

        let first_empty = sorted.iter().position(TimeSeries::is_empty).unwrap_or(sorted.len());
        assert!(sorted[first_empty..].iter().all(TimeSeries::is_empty));

        let mut got = names(&sorted);
        got.sort();
        assert_eq!(got, expected);
    }
}
