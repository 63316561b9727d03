use super::*;
use pretty_assertions::assert_eq;

#[test]
fn ordering_is_left_then_right() {
    let mut pairs = vec![
        Pair::new(2, "a"),
        Pair::new(1, "b"),
        Pair::new(1, "a"),
        Pair::new(3, "a"),
    ];
    pairs.sort();
    assert_eq!(
        pairs,
        vec![
            Pair::new(1, "a"),
            Pair::new(1, "b"),
            Pair::new(2, "a"),
            Pair::new(3, "a"),
        ]
    );
}

#[test]
fn missing_values_sort_first() {
    let mut pairs = vec![
        Pair::new(Some(1), Some("x")),
        Pair::new(None, Some("y")),
        Pair::new(Some(1), None),
        Pair::new(None, None),
    ];
    pairs.sort();
    assert_eq!(
        pairs,
        vec![
            Pair::new(None, None),
            Pair::new(None, Some("y")),
            Pair::new(Some(1), None),
            Pair::new(Some(1), Some("x")),
        ]
    );
}

#[test]
fn structural_equality_and_hash() {
    use std::collections::HashSet;

    let set: HashSet<_> = [Pair::new(1, 2), Pair::new(1, 2), Pair::new(2, 1)]
        .into_iter()
        .collect();
    assert_eq!(set.len(), 2);
    assert_eq!(Pair::new(1, 2), Pair::from((1, 2)));
}

#[test]
fn shifting_and_swapping() {
    let pair = Pair::new(1, 2);
    assert_eq!(pair.swap(), Pair::new(2, 1));
    assert_eq!(pair.shift_left(3), Pair::new(2, 3));
    assert_eq!(pair.shift_right(0), Pair::new(0, 1));
    assert_eq!(pair.with_left("a"), Pair::new("a", 2));
    assert_eq!(pair.with_right("b"), Pair::new(1, "b"));
}

#[test]
fn mapping_and_testing() {
    let pair = Pair::new(3, "three");
    assert_eq!(pair.map_parts(|l| l * 2, str::len), Pair::new(6, 5));
    assert_eq!(pair.map(|l, r| Pair::new(r, l)), Pair::new("three", 3));
    assert_eq!(pair.apply(|l, r| format!("{l}={r}")), "3=three");
    assert!(pair.test(|l, r| *l == 3 && r.len() == 5));
    assert!(pair.test_parts(|l| *l > 0, |r| r.starts_with('t')));
    assert!(!pair.test_parts(|l| *l > 5, |_| true));
}

#[test]
fn unary_and_display() {
    assert_eq!(Pair::unary(7), Pair::new(7, 7));
    assert_eq!(Pair::new(1, "one").to_string(), "(1, one)");
}

#[test]
fn put_into_map_replaces_existing() {
    let mut map = HashMap::new();
    assert_eq!(Pair::new("a", 1).put_into(&mut map), None);
    assert_eq!(Pair::new("a", 2).put_into(&mut map), Some(1));
    assert_eq!(map.get("a"), Some(&2));
}

#[test]
fn tuples_and_pairs_share_the_pair_like_view() {
    fn describe<P: PairLike<Left = i32, Right = char>>(p: &P) -> String {
        format!("{}{}", p.left(), p.right())
    }
    assert_eq!(describe(&(1, 'a')), "1a");
    assert_eq!(describe(&Pair::new(2, 'b')), "2b");
    assert_eq!(<(i32, char)>::from_parts(3, 'c').into_parts(), (3, 'c'));
}
