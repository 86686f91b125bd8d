//! Keyed ordering invariants.

use crate::common::*;
use seriesort::{order_by_key, order_by_key_with, KeyType, KeyedComparator, SortKey};

#[test]
fn transform_called_once_per_series_in_input_order() {
    let log = CallLog::new();
    let mut all = vec![single("c", 1, 3), single("a", 1, 1), single("b", 1, 2)];

    order_by_key(&mut all, log.wrap(last_value)).unwrap();

    assert_eq!(log.calls(), vec!["c", "a", "b"]);
    assert_eq!(names(&all), vec!["a", "b", "c"]);
}

#[test]
fn keys_ascend_for_each_key_type() {
    let mut ints = vec![single("x", 1, 9), single("y", 1, -4), single("z", 1, 0)];
    order_by_key(&mut ints, last_value).unwrap();
    assert_eq!(names(&ints), vec!["y", "z", "x"]);

    let mut floats = vec![single("x", 1, 0.5), single("y", 1, -0.5), single("z", 1, 1e9)];
    order_by_key(&mut floats, last_value).unwrap();
    assert_eq!(names(&floats), vec!["y", "x", "z"]);

    let mut strings = vec![single("x", 1, "b"), single("y", 1, "B"), single("z", 1, "a")];
    order_by_key(&mut strings, last_value).unwrap();
    assert_eq!(names(&strings), vec!["y", "z", "x"]);
}

#[test]
fn mixed_int_and_float_keys_are_rejected() {
    let mut all = vec![single("a", 1, 1), single("b", 1, 2.0)];
    let err = order_by_key(&mut all, last_value).unwrap_err();

    assert_eq!(
        err,
        Error::InconsistentOrInvalidKeyType {
            index: 1,
            expected: Some("Int".to_string()),
            found: "Float".to_string(),
        }
    );
    assert_eq!(names(&all), vec!["a", "b"]);
}

#[test]
fn absent_key_is_rejected() {
    let mut all = vec![single("a", 1, 1), empty("b")];
    let err = order_by_key(&mut all, last_value).unwrap_err();
    assert_eq!(err, Error::invalid_key(1, Some("Int"), "nothing"));
}

#[test]
fn bool_keys_rejected_by_keyed_sort_but_ordered_by_last_value() {
    // Boolean keys are refused here even though the last-value
    // comparator orders boolean samples.
    let mut all = vec![single("t", 1, true), single("f", 1, false)];
    let err = order_by_key(&mut all, last_value).unwrap_err();
    assert_eq!(err, Error::invalid_key(0, None, "Bool"));
    assert!(err.is_type_error());

    seriesort::sort_by_last_value(&mut all);
    assert_eq!(names(&all), vec!["f", "t"]);
}

#[test]
fn failure_stops_further_calls_without_rollback() {
    let log = CallLog::new();
    let mut all = vec![single("a", 1, 1), single("b", 1, "text"), single("c", 1, 3)];

    let err = order_by_key(&mut all, log.wrap(last_value)).unwrap_err();

    assert_eq!(err.index(), Some(1));
    assert_eq!(log.calls(), vec!["a", "b"]);
    assert_eq!(names(&all), vec!["a", "b", "c"]);
}

#[test]
fn transform_error_is_reported_with_position() {
    let mut all = vec![single("a", 1, 1), single("b", 1, 2)];
    let err = order_by_key(&mut all, |s: &Series| {
        if s.metadata().name() == "b" {
            Err(TransformError::new("stack underflow"))
        } else {
            Ok(Some(Value::Int(0)))
        }
    })
    .unwrap_err();

    assert_eq!(err, Error::transform_failed(1, "stack underflow"));
    assert!(!err.is_type_error());
}

#[test]
fn each_call_revalidates_from_scratch() {
    let mut ints = vec![single("a", 1, 2), single("b", 1, 1)];
    order_by_key(&mut ints, last_value).unwrap();

    // A previous Int sort does not constrain the next call.
    let mut strings = vec![single("a", 1, "z"), single("b", 1, "y")];
    order_by_key(&mut strings, last_value).unwrap();
    assert_eq!(names(&strings), vec!["b", "a"]);
}

#[test]
fn duplicate_series_get_separate_keys() {
    let twin = single("twin", 1, 5);
    let mut all = vec![twin.clone(), single("mid", 1, 0), twin];
    let mut counter = 0i64;
    order_by_key(&mut all, |_: &Series| {
        counter += 1;
        Ok(Some(Value::Int(-counter)))
    })
    .unwrap();
    // keys: twin=-1, mid=-2, twin=-3
    assert_eq!(names(&all), vec!["twin", "mid", "twin"]);
}

#[test]
fn comparator_exposes_extracted_keys() {
    let all = vec![single("a", 1, "pear"), single("b", 1, "apple")];
    let comparator = KeyedComparator::extract(&all, last_value).unwrap();

    assert_eq!(comparator.key_type(), Some(KeyType::String));
    assert_eq!(comparator.key(1), Some(&SortKey::String("apple".into())));
    assert_eq!(
        comparator.sorted_positions(&OrderingConfig::default()),
        vec![1, 0]
    );
}

#[test]
fn unstable_config_orders_keys() {
    let mut all: Vec<Series> = (0..50)
        .map(|i| single(&format!("s{}", i), 1, (i * 7) % 5))
        .collect();
    order_by_key_with(&mut all, last_value, &OrderingConfig::unstable()).unwrap();

    let keys: Vec<i64> = all
        .iter()
        .filter_map(|s| s.last_value().and_then(Value::as_int))
        .collect();
    assert!(keys.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(keys.len(), 50);
}
