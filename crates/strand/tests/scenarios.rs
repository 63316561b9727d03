//! End-to-end scenarios through the public API.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use std::cell::Cell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use strand::{BiSequence, CharSeq, EntrySequence, IntSequence, Pair, Reuse, SeqError, Sequence, SharedList};

#[test]
fn even_digits_as_strings() {
    let strings = Sequence::of(vec![1, 2, 3, 4, 5, 6, 7, 8, 9])
        .filter(|x| x % 2 == 0)
        .map(|x| x.to_string())
        .to_list()
        .unwrap();
    assert_eq!(strings, vec!["2", "4", "6", "8"]);
}

#[test]
fn fibonacci_by_recursion() {
    let fib = Sequence::recurse((0u64, 1u64), |&(a, b)| (b, a + b))
        .map(|(a, _)| a)
        .limit(10);
    assert_eq!(fib.to_list().unwrap(), vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
    assert_eq!(fib.to_list().unwrap(), fib.to_list().unwrap());
}

#[test]
fn mapper_never_sees_elements_the_consumer_does_not_reach() {
    let sequence = Sequence::of(vec![Some(1), None]).map(|n: Option<i32>| {
        n.map(|n| n.to_string())
            .unwrap_or_else(|| panic!("mapper reached the missing element"))
    });
    assert_eq!(sequence.first().unwrap(), Some("1".to_string()));
    assert_eq!(sequence.limit(1).to_list().unwrap(), vec!["1"]);
}

#[test]
fn window_and_batch_exactness() {
    let five = IntSequence::range(1, 5);
    let windows: Vec<Vec<i32>> = five
        .window(3)
        .unwrap()
        .iter()
        .map(|window| window.unwrap().to_list().unwrap())
        .collect();
    assert_eq!(windows, vec![vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5]]);

    let batches: Vec<Vec<i32>> = five
        .batch(3)
        .unwrap()
        .iter()
        .map(|batch| batch.unwrap().to_list().unwrap())
        .collect();
    assert_eq!(batches, vec![vec![1, 2, 3], vec![4, 5]]);
}

#[test]
fn distinct_preserves_first_occurrence_order() {
    let sequence = Sequence::of(vec![67, 5, 43, 3, 5, 7, 24, 5, 67]).distinct();
    assert_eq!(sequence.to_list().unwrap(), vec![67, 5, 43, 3, 7, 24]);
}

#[test]
fn pairs_sort_missing_left_parts_first() {
    let pairs = BiSequence::<Option<i32>, &str>::from_entries([
        (Some(2), "b"),
        (None, "z"),
        (Some(1), "c"),
        (Some(1), "a"),
    ]);
    let sorted = pairs.sorted().to_list().unwrap();
    assert_eq!(
        sorted,
        vec![
            Pair::new(None, "z"),
            Pair::new(Some(1), "a"),
            Pair::new(Some(1), "c"),
            Pair::new(Some(2), "b"),
        ]
    );
}

#[test]
fn fold_identity_and_single_reduce() {
    assert_eq!(Sequence::<i32>::empty().fold(17, |a, b| a + b).unwrap(), 17);
    assert_eq!(Sequence::of(vec![5]).reduce(|a, b| a + b).unwrap(), Some(5));
    assert_eq!(Sequence::<i32>::empty().reduce(|a, b| a + b).unwrap(), None);
}

#[test]
fn repeat_edge_cases_terminate() {
    assert!(Sequence::of(vec![1, 2]).repeat_times(0).is_empty().unwrap());
    assert!(Sequence::<i32>::empty().repeat().is_empty().unwrap());
}

#[test]
fn removal_through_a_filtered_view_edits_the_list() {
    let list: SharedList<i32> = (1..=6).collect();
    let evens = Sequence::from_list(&list).filter(|n| n % 2 == 0);

    assert!(evens.remove(&4).unwrap());
    assert_eq!(list.to_vec(), vec![1, 2, 3, 5, 6]);
    assert_eq!(Sequence::from_list(&list).count().unwrap(), 5);
    assert_eq!(evens.to_list().unwrap(), vec![2, 6]);
}

#[test]
fn once_only_sources_are_drained_by_the_first_pass() {
    let sequence = Sequence::once(vec!["a", "b"]).map(str::to_uppercase);
    assert_eq!(sequence.reuse(), Reuse::OnceOnly);
    assert_eq!(sequence.to_list().unwrap(), vec!["A", "B"]);
    assert_eq!(sequence.count().unwrap(), 0);
}

#[test]
fn word_frequencies() {
    let text = "the cat saw the other cat";
    let counts = Sequence::of(text.split(' ').collect::<Vec<_>>())
        .to_entry_sequence(|word| (word, 1))
        .to_merged_map(|a, b| a + b)
        .unwrap();
    assert_eq!(counts["the"], 2);
    assert_eq!(counts["cat"], 2);
    assert_eq!(counts["saw"], 1);

    let by_initial = EntrySequence::<&str, i32>::from_map(&counts)
        .map_keys(|word| word.chars().next().unwrap_or(' '))
        .to_grouped_map()
        .unwrap();
    assert_eq!(by_initial[&'c'], vec![2]);
    assert_eq!(by_initial[&'o'], vec![1]);
}

#[test]
fn character_pipeline() {
    let shout = CharSeq::chars("hello, world")
        .filter(|c| c.is_alphabetic())
        .to_upper_case()
        .distinct()
        .as_string()
        .unwrap();
    assert_eq!(shout, "HELOWRD");
}

#[test]
fn zig_zag_with_interleave_and_reverse() {
    let up = IntSequence::range(1, 3);
    let down = up.reverse().map(|n| -n);
    assert_eq!(up.interleave(&down).join(" ").unwrap(), "1 -3 2 -2 3 -1");
}

#[test]
fn pipelines_are_recomputed_per_traversal() {
    let source: SharedList<i32> = vec![3, 1, 2].into();
    let top_two = Sequence::from_list(&source).sorted().limit_tail(2);
    assert_eq!(top_two.to_list().unwrap(), vec![2, 3]);

    source.push(10);
    assert_eq!(top_two.to_list().unwrap(), vec![3, 10]);
}

#[test]
fn generators_are_bounded_by_until() {
    let ticks = Rc::new(Cell::new(0));
    let clock = Rc::clone(&ticks);
    let sequence = Sequence::generate(move || {
        clock.set(clock.get() + 1);
        clock.get()
    })
    .until(4);
    assert_eq!(sequence.to_list().unwrap(), vec![1, 2, 3]);
    assert_eq!(ticks.get(), 4);
}

#[test]
fn unsupported_removal_is_distinct_from_exhaustion() {
    let list: SharedList<i32> = vec![1, 2].into();
    let sequence = Sequence::from_list(&list).sorted();
    let error = sequence.remove(&1).unwrap_err();
    assert!(matches!(error, SeqError::Unsupported { .. }));
    assert!(!error.is_exhausted());
    assert_eq!(error.to_string(), "remove is not supported by this view");
}
