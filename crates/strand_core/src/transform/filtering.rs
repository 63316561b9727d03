//! Predicate cursors with one element of lookahead.
//!
//! `has_next` pulls upstream until it finds an accepted element and holds it.
//! Any such pull moves the upstream cursor past the element `next` last
//! returned, so `remove` is refused with `IllegalState` until the next yield.

use std::hash::Hash;

use rustc_hash::FxHashSet;

use crate::cursor::Cursor;
use crate::error::{SeqError, SeqResult};
use crate::transform::lookahead::Removal;

/// Keeps elements accepted by `predicate(element, upstream_index)`.
pub struct Filter<C: Cursor, P> {
    source: C,
    predicate: P,
    index: usize,
    held: Option<C::Item>,
    removal: Removal,
}

impl<C: Cursor, P> Filter<C, P> {
    pub fn new(source: C, predicate: P) -> Self {
        Filter {
            source,
            predicate,
            index: 0,
            held: None,
            removal: Removal::Idle,
        }
    }
}

impl<C, P> Cursor for Filter<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item, usize) -> bool,
{
    type Item = C::Item;

    fn has_next(&mut self) -> SeqResult<bool> {
        while self.held.is_none() && self.source.has_next()? {
            let item = self.source.next()?;
            self.removal.pulled();
            let index = self.index;
            self.index += 1;
            if (self.predicate)(&item, index) {
                self.held = Some(item);
            }
        }
        Ok(self.held.is_some())
    }

    fn next(&mut self) -> SeqResult<C::Item> {
        if !self.has_next()? {
            return Err(SeqError::Exhausted);
        }
        let item = self.held.take().ok_or(SeqError::Exhausted)?;
        self.removal.yielded();
        Ok(item)
    }

    fn remove(&mut self) -> SeqResult<()> {
        self.removal.take()?;
        self.source.remove()
    }
}

/// Drops every element equal to one already yielded in this traversal.
pub struct Distinct<C: Cursor> {
    source: C,
    seen: FxHashSet<C::Item>,
    held: Option<C::Item>,
    removal: Removal,
}

impl<C: Cursor> Distinct<C>
where
    C::Item: Eq + Hash + Clone,
{
    pub fn new(source: C) -> Self {
        Distinct {
            source,
            seen: FxHashSet::default(),
            held: None,
            removal: Removal::Idle,
        }
    }
}

impl<C: Cursor> Cursor for Distinct<C>
where
    C::Item: Eq + Hash + Clone,
{
    type Item = C::Item;

    fn has_next(&mut self) -> SeqResult<bool> {
        while self.held.is_none() && self.source.has_next()? {
            let item = self.source.next()?;
            self.removal.pulled();
            if self.seen.insert(item.clone()) {
                self.held = Some(item);
            }
        }
        Ok(self.held.is_some())
    }

    fn next(&mut self) -> SeqResult<C::Item> {
        if !self.has_next()? {
            return Err(SeqError::Exhausted);
        }
        let item = self.held.take().ok_or(SeqError::Exhausted)?;
        self.removal.yielded();
        Ok(item)
    }

    fn remove(&mut self) -> SeqResult<()> {
        self.removal.take()?;
        self.source.remove()
    }
}
