use std::{pin::pin, task::Poll};

use super::{YieldThen, poll_once, yield_then};
use crate::futures::from_entries;

type Fut = YieldThen<Result<i32, &'static str>>;

#[test]
fn test_from_entries_empty_settles_immediately() {
    // the observed original never settles on empty input, this pins the corrected
    // contract: settle on first poll with an empty mapping
    let mut f = pin!(from_entries::<[(&str, Fut); 0], _, _, _, _>([]));

    let Poll::Ready(Ok(result)) = poll_once(f.as_mut()) else {
        panic!("expected to settle on first poll");
    };
    assert!(result.is_empty());
}

#[test]
fn test_from_entries_unique_keys() {
    let entries: [(&str, Fut); 3] = [
        ("a", yield_then(0, Ok(1))),
        ("b", yield_then(0, Ok(2))),
        ("c", yield_then(0, Ok(3))),
    ];
    let mut f = pin!(from_entries(entries));

    let Poll::Ready(Ok(result)) = poll_once(f.as_mut()) else {
        panic!("expected to settle on first poll");
    };
    assert_eq!(result.keys().collect::<Vec<_>>(), [&"a", &"b", &"c"]);
    assert_eq!(result.values().collect::<Vec<_>>(), [&1, &2, &3]);
}

#[test]
fn test_from_entries_settles_after_slowest() {
    let entries: [(&str, Fut); 2] = [
        ("fast", yield_then(0, Ok(1))),
        ("slow", yield_then(2, Ok(2))),
    ];
    let mut f = pin!(from_entries(entries));

    assert!(poll_once(f.as_mut()).is_pending());
    assert!(poll_once(f.as_mut()).is_pending());

    let Poll::Ready(Ok(result)) = poll_once(f.as_mut()) else {
        panic!("expected to settle on third poll");
    };
    assert_eq!(result.get("fast"), Some(&1));
    assert_eq!(result.get("slow"), Some(&2));
}

#[test]
fn test_from_entries_duplicate_key_last_in_sequence_wins() {
    // the earlier entry settles last, the later entry still wins
    let entries: [(&str, Fut); 3] = [
        ("k", yield_then(2, Ok(1))),
        ("k", yield_then(0, Ok(2))),
        ("other", yield_then(1, Ok(3))),
    ];
    let mut f = pin!(from_entries(entries));

    assert!(poll_once(f.as_mut()).is_pending());
    assert!(poll_once(f.as_mut()).is_pending());

    let Poll::Ready(Ok(result)) = poll_once(f.as_mut()) else {
        panic!("expected to settle on third poll");
    };
    assert_eq!(result.len(), 2);
    assert_eq!(result.get("k"), Some(&2));
    assert_eq!(result.keys().collect::<Vec<_>>(), [&"k", &"other"]);
}

#[test]
fn test_from_entries_failure_propagates() {
    let entries = [
        ("a", yield_then(1, Ok(1))),
        ("b", yield_then(0, Err("boom"))),
    ];
    let mut f = pin!(from_entries(entries));

    assert_eq!(poll_once(f.as_mut()), Poll::Ready(Err("boom")));
}

#[test]
fn test_from_entries_first_failure_wins() {
    let entries: [(&str, Fut); 2] = [
        ("late", yield_then(2, Err("late"))),
        ("early", yield_then(0, Err("early"))),
    ];
    let mut f = pin!(from_entries(entries));

    assert_eq!(poll_once(f.as_mut()), Poll::Ready(Err("early")));
}
