#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::transform::testing::{drain, source};
use pretty_assertions::assert_eq;

fn one_to(n: i32) -> Vec<i32> {
    (1..=n).collect()
}

#[test]
fn sliding_window() {
    assert_eq!(
        drain(Window::new(source(one_to(5)), 3, 1)),
        vec![vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5]]
    );
}

#[test]
fn window_with_step() {
    assert_eq!(
        drain(Window::new(source(one_to(5)), 3, 2)),
        vec![vec![1, 2, 3], vec![3, 4, 5]]
    );
    assert_eq!(
        drain(Window::new(source(one_to(6)), 3, 2)),
        vec![vec![1, 2, 3], vec![3, 4, 5], vec![5, 6]]
    );
}

#[test]
fn window_step_larger_than_size_skips_between() {
    assert_eq!(
        drain(Window::new(source(one_to(7)), 2, 3)),
        vec![vec![1, 2], vec![4, 5], vec![7]]
    );
}

#[test]
fn short_and_empty_sources() {
    assert_eq!(drain(Window::new(source(one_to(2)), 3, 1)), vec![vec![1, 2]]);
    assert_eq!(drain(Window::new(source(one_to(0)), 3, 1)), Vec::<Vec<i32>>::new());
}

#[test]
fn batching_is_a_window_stepping_its_size() {
    assert_eq!(
        drain(Window::new(source(one_to(5)), 3, 3)),
        vec![vec![1, 2, 3], vec![4, 5]]
    );
}

#[test]
fn window_rejects_remove() {
    let mut cursor = Window::new(source(one_to(3)), 2, 1);
    cursor.next().unwrap();
    assert_eq!(cursor.remove(), Err(unsupported("remove")));
}

#[test]
fn batch_by_cuts_on_descent() {
    let items = vec![67, 5, 43, 3, 5, 7, 24, 5, 67];
    assert_eq!(
        drain(BatchBy::new(source(items), |a: &i32, b: &i32| a > b)),
        vec![vec![67], vec![5, 43], vec![3, 5, 7, 24], vec![5, 67]]
    );
    assert_eq!(
        drain(BatchBy::new(source(one_to(0)), |_: &i32, _: &i32| true)),
        Vec::<Vec<i32>>::new()
    );
}

#[test]
fn split_drops_separators() {
    let split = |items: Vec<i32>| drain(Split::new(source(items), |n: &i32| *n == 3));
    assert_eq!(split(one_to(2)), vec![vec![1, 2]]);
    assert_eq!(split(one_to(3)), vec![vec![1, 2]]);
    assert_eq!(split(one_to(5)), vec![vec![1, 2], vec![4, 5]]);
    assert_eq!(split(vec![3, 1, 3, 3]), vec![vec![], vec![1], vec![]]);
    assert_eq!(split(vec![]), Vec::<Vec<i32>>::new());
}

#[test]
fn adjacent_pairs_overlap() {
    assert_eq!(drain(Adjacent::new(source(one_to(1)))), Vec::<(i32, i32)>::new());
    assert_eq!(
        drain(Adjacent::new(source(one_to(3)))),
        vec![(1, 2), (2, 3)]
    );
}
