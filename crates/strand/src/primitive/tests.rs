#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use pretty_assertions::assert_eq;

use super::*;
use crate::test_helpers::{assert_twice, list};

#[test]
fn int_ranges_are_inclusive_both_ways() {
    assert_twice(&IntSequence::range(1, 5), &[1, 2, 3, 4, 5]);
    assert_twice(&IntSequence::range(3, 1), &[3, 2, 1]);
    assert_twice(&IntSequence::range(4, 4), &[4]);
}

#[test]
fn range_from_stops_at_the_type_bound() {
    assert_eq!(list(&IntSequence::range_from(i32::MAX - 1)), vec![i32::MAX - 1, i32::MAX]);
    assert_eq!(list(&IntSequence::range_from(10).limit(3)), vec![10, 11, 12]);
    assert_eq!(list(&LongSequence::range_from(-2).limit(3)), vec![-2, -1, 0]);
}

#[test]
fn long_ranges() {
    assert_twice(&LongSequence::range(-1, 1), &[-1, 0, 1]);
    assert_twice(&LongSequence::range(1, -1), &[1, 0, -1]);
}

#[test]
fn int_sum_does_not_overflow() {
    let big = IntSequence::of(vec![i32::MAX, i32::MAX]);
    assert_eq!(big.sum().unwrap(), 2 * i64::from(i32::MAX));
    assert_eq!(IntSequence::empty().sum().unwrap(), 0);
}

#[test]
fn averages() {
    assert_eq!(IntSequence::range(1, 4).average().unwrap(), Some(2.5));
    assert_eq!(IntSequence::empty().average().unwrap(), None);
    assert_eq!(LongSequence::of(vec![2, 4]).average().unwrap(), Some(3.0));
    assert_eq!(DoubleSequence::of(vec![0.5, 1.5]).average().unwrap(), Some(1.0));
    assert_eq!(DoubleSequence::empty().average().unwrap(), None);
}

#[test]
fn long_and_double_sums() {
    assert_eq!(LongSequence::range(1, 100).sum().unwrap(), 5050);
    assert_eq!(DoubleSequence::of(vec![0.25, 0.5, 0.25]).sum().unwrap(), 1.0);
}

#[test]
fn conversions_between_families() {
    assert_eq!(list(&IntSequence::of(vec![65, 66]).as_chars()), vec!['A', 'B']);
    assert_eq!(
        list(&IntSequence::of(vec![-1, 0xD800]).as_chars()),
        vec![char::REPLACEMENT_CHARACTER; 2]
    );
    assert_eq!(list(&IntSequence::of(vec![1, -2]).as_longs()), vec![1i64, -2]);
    assert_eq!(list(&IntSequence::of(vec![3]).as_doubles()), vec![3.0]);

    assert_eq!(list(&LongSequence::of(vec![(1 << 32) | 7]).as_ints()), vec![7]);
    assert_eq!(list(&LongSequence::of(vec![5]).as_doubles()), vec![5.0]);

    assert_eq!(list(&DoubleSequence::of(vec![2.9, -2.9]).as_ints()), vec![2, -2]);
    assert_eq!(list(&DoubleSequence::of(vec![f64::NAN, 1e300]).as_longs()), vec![0, i64::MAX]);

    assert_eq!(list(&CharSeq::chars("az").as_ints()), vec![97, 122]);
}

#[test]
fn generic_typed_maps_land_in_the_primitive_families() {
    let words = Sequence::of(vec!["a", "bcd"]);
    let lengths: IntSequence = words.to_ints(|w| i32::try_from(w.len()).unwrap_or(i32::MAX));
    assert_eq!(lengths.sum().unwrap(), 4);

    let initials: CharSeq = words.to_chars(|w| w.chars().next().unwrap_or(' '));
    assert_eq!(initials.as_string().unwrap(), "ab");

    let halves: DoubleSequence = IntSequence::range(1, 2).to_doubles(|n| f64::from(n) / 2.0);
    assert_eq!(list(&halves), vec![0.5, 1.0]);

    let squares: LongSequence = IntSequence::range(1, 3).to_longs(|n| i64::from(n * n));
    assert_eq!(list(&squares), vec![1, 4, 9]);
}

#[test]
fn doubles_order_totally() {
    let values = DoubleSequence::of(vec![2.0, f64::NAN, -1.0, 0.5]);
    let sorted = list(&values.sorted_total());
    assert_eq!(&sorted[..3], &[-1.0, 0.5, 2.0]);
    assert!(sorted[3].is_nan());

    assert_eq!(values.min_total().unwrap(), Some(-1.0));
    assert!(values.max_total().unwrap().unwrap().is_nan());
    assert_eq!(DoubleSequence::empty().max_total().unwrap(), None);
}

#[test]
fn char_helpers() {
    assert_twice(&CharSeq::chars("héllo"), &['h', 'é', 'l', 'l', 'o']);
    assert_twice(&CharSeq::char_range('a', 'd'), &['a', 'b', 'c', 'd']);
    assert_twice(&CharSeq::char_range('c', 'a'), &['c', 'b', 'a']);

    let gap = CharSeq::char_range('\u{D7FF}', '\u{E000}');
    assert_eq!(list(&gap), vec!['\u{D7FF}', '\u{E000}']);
}

#[test]
fn case_mapping_can_change_length() {
    assert_eq!(CharSeq::chars("abc").to_upper_case().as_string().unwrap(), "ABC");
    assert_eq!(CharSeq::chars("ß").to_upper_case().as_string().unwrap(), "SS");
    assert_eq!(CharSeq::chars("MiXeD").to_lower_case().as_string().unwrap(), "mixed");
}

#[test]
fn generic_operations_apply_to_primitives() {
    let evens = IntSequence::range(1, 10).filter(|n| n % 2 == 0);
    assert_eq!(evens.sum().unwrap(), 30);
    assert_eq!(evens.max().unwrap(), Some(10));
    assert_eq!(
        CharSeq::chars("banana").distinct().as_string().unwrap(),
        "ban"
    );
}
