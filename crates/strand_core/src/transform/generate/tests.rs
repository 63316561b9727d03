#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::pair::Pair;
use crate::transform::slicing::Limit;
use crate::transform::testing::drain;
use pretty_assertions::assert_eq;

#[test]
fn recurse_starts_with_the_seed() {
    let powers = Limit::new(Recurse::new(1, |n: &i32| n * 2), 5);
    assert_eq!(drain(powers), vec![1, 2, 4, 8, 16]);
}

#[test]
fn recurse_is_never_exhausted() {
    let mut cursor = Recurse::new((), |(): &()| ());
    for _ in 0..100 {
        assert!(cursor.has_next().unwrap());
        cursor.next().unwrap();
    }
    assert!(cursor.has_next().unwrap());
}

#[test]
fn recurse_only_steps_when_pulled() {
    let mut steps = 0;
    let mut cursor = Recurse::new(0, |n: &i32| {
        steps += 1;
        n + 1
    });
    cursor.next().unwrap();
    cursor.next().unwrap();
    cursor.has_next().unwrap();
    drop(cursor);
    assert_eq!(steps, 1);
}

#[test]
fn deferred_first_element_waits_for_the_first_pull() {
    let opened = std::rc::Rc::new(std::cell::Cell::new(false));
    let flag = std::rc::Rc::clone(&opened);
    let mut cursor = Recurse::deferred(
        move || {
            flag.set(true);
            10
        },
        |n: &i32| n + 1,
    );
    assert!(cursor.has_next().unwrap());
    assert!(!opened.get());
    assert_eq!(cursor.next().unwrap(), 10);
    assert!(opened.get());
    assert_eq!(cursor.next().unwrap(), 11);
}

#[test]
fn fibonacci_over_pairs() {
    let fib = Recurse::new(Pair::new(0, 1), |p: &Pair<i32, i32>| {
        Pair::new(*p.right(), p.left() + p.right())
    });
    let lefts: Vec<i32> = drain(Limit::new(fib, 10))
        .into_iter()
        .map(|p| *p.left())
        .collect();
    assert_eq!(lefts, vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
}

#[test]
fn generate_calls_the_supplier_per_element() {
    let mut next = 0;
    let counter = Generate::new(|| {
        next += 3;
        next
    });
    assert_eq!(drain(Limit::new(counter, 3)), vec![3, 6, 9]);
}
