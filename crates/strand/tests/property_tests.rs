//! Property-based tests for sequence operations.
//!
//! Each property compares a sequence pipeline against the same computation
//! done eagerly on a `Vec`, over random inputs and parameters. Every pipeline
//! is traversed twice to check that reiterable sources stay reiterable.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use std::collections::HashSet;

use proptest::prelude::*;
use strand::{Reuse, Sequence};

fn items_strategy() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-50i32..50, 0..40)
}

fn both_traversals(sequence: &Sequence<i32>) -> Result<Vec<i32>, TestCaseError> {
    let first = sequence.to_list().unwrap();
    let second = sequence.to_list().unwrap();
    prop_assert_eq!(&first, &second, "reiterable sequence changed between traversals");
    Ok(first)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        max_shrink_iters: 1000,
        ..ProptestConfig::default()
    })]

    /// `skip(n).limit(m)` is the slice `[n, n + m)`, clipped.
    #[test]
    fn prop_skip_limit_slice(items in items_strategy(), skip in 0usize..50, limit in 0usize..50) {
        let sequence = Sequence::of(items.clone()).skip(skip).limit(limit);
        let expected: Vec<i32> = items.iter().copied().skip(skip).take(limit).collect();
        prop_assert_eq!(both_traversals(&sequence)?, expected);
    }

    /// `skip_tail(n)` and `limit_tail(n)` split the sequence at `len - n`.
    #[test]
    fn prop_tails_partition(items in items_strategy(), count in 0usize..50) {
        let sequence = Sequence::of(items.clone());
        let cut = items.len().saturating_sub(count);
        prop_assert_eq!(both_traversals(&sequence.skip_tail(count))?, items[..cut].to_vec());
        prop_assert_eq!(both_traversals(&sequence.limit_tail(count))?, items[cut..].to_vec());
    }

    /// `step(k)` keeps indices divisible by `k`.
    #[test]
    fn prop_step_stride(items in items_strategy(), step in 1usize..8) {
        let sequence = Sequence::of(items.clone()).step(step).unwrap();
        let expected: Vec<i32> = items.iter().copied().step_by(step).collect();
        prop_assert_eq!(both_traversals(&sequence)?, expected);
    }

    /// `distinct` keeps each value's first occurrence, in encounter order.
    #[test]
    fn prop_distinct_order(items in items_strategy()) {
        let mut seen = HashSet::new();
        let expected: Vec<i32> = items.iter().copied().filter(|n| seen.insert(*n)).collect();
        prop_assert_eq!(both_traversals(&Sequence::of(items).distinct())?, expected);
    }

    /// `sorted_by_key` is stable.
    #[test]
    fn prop_sort_is_stable(items in items_strategy()) {
        let indexed: Vec<(i32, usize)> =
            items.iter().enumerate().map(|(index, n)| (n.rem_euclid(5), index)).collect();
        let sorted = Sequence::of(indexed.clone()).sorted_by_key(|(key, _)| *key).to_list().unwrap();
        let mut expected = indexed;
        expected.sort_by_key(|(key, _)| *key);
        prop_assert_eq!(sorted, expected);
    }

    /// `batch(n)` concatenates back to the input, with only the last batch short.
    #[test]
    fn prop_batch_concatenates_back(items in items_strategy(), size in 1usize..10) {
        let batches: Vec<Vec<i32>> = Sequence::of(items.clone())
            .batch(size)
            .unwrap()
            .to_list()
            .unwrap()
            .iter()
            .map(|batch| batch.to_list().unwrap())
            .collect();
        let expected: Vec<Vec<i32>> = items.chunks(size).map(<[i32]>::to_vec).collect();
        prop_assert_eq!(batches, expected);
    }

    /// `window(n)` yields `len - n + 1` full windows, or one short window.
    #[test]
    fn prop_window_count(items in items_strategy(), size in 1usize..10) {
        let windows: Vec<Vec<i32>> = Sequence::of(items.clone())
            .window(size)
            .unwrap()
            .to_list()
            .unwrap()
            .iter()
            .map(|window| window.to_list().unwrap())
            .collect();
        let expected: Vec<Vec<i32>> = if items.len() >= size {
            items.windows(size).map(<[i32]>::to_vec).collect()
        } else if items.is_empty() {
            Vec::new()
        } else {
            vec![items.clone()]
        };
        prop_assert_eq!(windows, expected);
    }

    /// `filter` and `map` commute with their eager counterparts.
    #[test]
    fn prop_filter_map(items in items_strategy(), modulus in 1i32..6) {
        let sequence = Sequence::of(items.clone())
            .filter(move |n| n.rem_euclid(modulus) == 0)
            .map(|n| n * 3);
        let expected: Vec<i32> = items
            .iter()
            .copied()
            .filter(|n| n.rem_euclid(modulus) == 0)
            .map(|n| n * 3)
            .collect();
        prop_assert_eq!(both_traversals(&sequence)?, expected);
    }

    /// `count` agrees with the number of collected elements.
    #[test]
    fn prop_count_matches_length(items in items_strategy(), skip in 0usize..50) {
        let sequence = Sequence::of(items.clone()).skip(skip);
        prop_assert_eq!(sequence.count().unwrap(), items.len().saturating_sub(skip));
    }

    /// A once-only source yields its elements once, then nothing.
    #[test]
    fn prop_once_drains(items in items_strategy()) {
        let sequence = Sequence::once(items.clone());
        prop_assert_eq!(sequence.reuse(), Reuse::OnceOnly);
        prop_assert_eq!(sequence.to_list().unwrap(), items);
        prop_assert!(sequence.is_empty().unwrap());
    }

    /// Removing through a filtered view edits exactly the matching elements.
    #[test]
    fn prop_remove_if_through_a_view(items in items_strategy(), modulus in 2i32..5) {
        let list: strand::SharedList<i32> = items.iter().copied().collect();
        let removed = Sequence::from_list(&list)
            .filter(|n| *n >= 0)
            .remove_if(move |n| n % modulus == 0)
            .unwrap();
        let expected: Vec<i32> = items
            .iter()
            .copied()
            .filter(|n| *n < 0 || n % modulus != 0)
            .collect();
        prop_assert_eq!(removed, expected.len() != items.len());
        prop_assert_eq!(list.to_vec(), expected);
    }
}
