#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use std::cell::Cell;
use std::rc::Rc;

use super::*;
use crate::backing::SharedList;
use crate::cursor::IntoCursor;
use crate::transform::testing::drain;
use pretty_assertions::assert_eq;

fn thunk(items: Vec<i32>) -> CursorThunk<i32> {
    Box::new(move || items.into_cursor())
}

#[test]
fn chains_in_order() {
    let chain = Chain::new([thunk(vec![1, 2]), thunk(vec![]), thunk(vec![3])]);
    assert_eq!(drain(chain), vec![1, 2, 3]);
}

#[test]
fn later_sources_open_lazily() {
    let opened = Rc::new(Cell::new(false));
    let flag = Rc::clone(&opened);
    let late: CursorThunk<i32> = Box::new(move || {
        flag.set(true);
        vec![9].into_cursor()
    });
    let mut chain = Chain::new([thunk(vec![1]), late]);
    assert_eq!(chain.next().unwrap(), 1);
    assert!(!opened.get());
    assert!(chain.has_next().unwrap());
    assert!(opened.get());
}

#[test]
fn chain_remove_goes_to_the_active_source() {
    let list: SharedList<i32> = (1..=2).collect();
    let backing = list.clone();
    let live: CursorThunk<i32> = Box::new(move || -> BoxCursor<i32> { Box::new(backing.cursor()) });
    let mut chain = Chain::new([thunk(vec![0]), live]);
    assert_eq!(chain.next().unwrap(), 0);
    assert_eq!(chain.remove(), Err(unsupported("remove")));
    assert_eq!(chain.next().unwrap(), 1);
    chain.remove().unwrap();
    assert_eq!(list.to_vec(), vec![2]);
}

#[test]
fn interleaves_round_robin() {
    let cursor = Interleave::new([thunk(vec![1, 4, 6, 7]), thunk(vec![2, 5]), thunk(vec![3])]);
    assert_eq!(drain(cursor), vec![1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn interleave_opens_each_source_on_its_first_turn() {
    let opened = Rc::new(Cell::new(false));
    let flag = Rc::clone(&opened);
    let second: CursorThunk<i32> = Box::new(move || {
        flag.set(true);
        vec![2].into_cursor()
    });
    let mut cursor = Interleave::new([thunk(vec![1, 3]), second]);
    assert!(cursor.has_next().unwrap());
    assert_eq!(cursor.next().unwrap(), 1);
    assert!(!opened.get());
    assert_eq!(cursor.next().unwrap(), 2);
    assert!(opened.get());
    assert_eq!(drain(cursor), vec![3]);
}

#[test]
fn interleave_of_nothing_is_empty() {
    let mut cursor = Interleave::<i32>::new([]);
    assert!(!cursor.has_next().unwrap());
    assert_eq!(cursor.next(), Err(SeqError::Exhausted));
}
