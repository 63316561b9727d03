//! Mutable backing store with fail-fast cursors.
//!
//! [`SharedList`] is the one place a sequence view can write back to. Every
//! structural change (insert, removal, clear) bumps a generation counter.
//! Each [`ListCursor`] remembers the generation it last saw and checks it on
//! every call, so a change made through any other path surfaces as
//! [`SeqError::ConcurrentModification`] instead of silently skipping or
//! repeating elements.
//!
//! Replacing an element in place with [`SharedList::set`] is not structural.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::cursor::Cursor;
use crate::error::{nothing_to_remove, SeqError, SeqResult};

struct ListState<T> {
    items: Vec<T>,
    generation: u64,
}

impl<T> ListState<T> {
    fn bump(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }
}

/// A shared, growable list. Clones alias the same storage.
pub struct SharedList<T> {
    state: Rc<RefCell<ListState<T>>>,
}

impl<T> SharedList<T> {
    pub fn new() -> Self {
        Self::from(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.state.borrow().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends `item`. Open cursors fail on their next access.
    pub fn push(&self, item: T) {
        let mut state = self.state.borrow_mut();
        state.items.push(item);
        state.bump();
    }

    /// Inserts at `index`, shifting later elements. Out-of-range indices append.
    pub fn insert(&self, index: usize, item: T) {
        let mut state = self.state.borrow_mut();
        let index = index.min(state.items.len());
        state.items.insert(index, item);
        state.bump();
    }

    /// Removes and returns the element at `index`, or `None` when out of range.
    pub fn remove_at(&self, index: usize) -> Option<T> {
        let mut state = self.state.borrow_mut();
        if index >= state.items.len() {
            return None;
        }
        let item = state.items.remove(index);
        state.bump();
        Some(item)
    }

    /// Replaces the element at `index`, returning the old one. Not a structural change.
    pub fn set(&self, index: usize, item: T) -> Option<T> {
        let mut state = self.state.borrow_mut();
        state
            .items
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, item))
    }

    /// Removes every element. Open cursors fail on their next access.
    pub fn clear(&self) {
        let mut state = self.state.borrow_mut();
        state.items.clear();
        state.bump();
    }

    /// Whether both handles alias the same storage.
    pub fn ptr_eq(&self, other: &SharedList<T>) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl<T: Clone> SharedList<T> {
    /// A clone of the element at `index`.
    pub fn get(&self, index: usize) -> Option<T> {
        self.state.borrow().items.get(index).cloned()
    }

    /// A snapshot of the current contents.
    pub fn to_vec(&self) -> Vec<T> {
        self.state.borrow().items.clone()
    }

    /// A fail-fast cursor over the live contents.
    pub fn cursor(&self) -> ListCursor<T> {
        let expected = self.state.borrow().generation;
        ListCursor {
            state: Rc::clone(&self.state),
            index: 0,
            last_returned: None,
            expected,
        }
    }
}

impl<T> Clone for SharedList<T> {
    fn clone(&self) -> Self {
        SharedList {
            state: Rc::clone(&self.state),
        }
    }
}

impl<T> Default for SharedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for SharedList<T> {
    fn from(items: Vec<T>) -> Self {
        SharedList {
            state: Rc::new(RefCell::new(ListState {
                items,
                generation: 0,
            })),
        }
    }
}

impl<T> FromIterator<T> for SharedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T: fmt::Debug> fmt::Debug for SharedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.state.borrow().items.iter()).finish()
    }
}

// ── ListCursor ──

/// Cursor over a [`SharedList`] that supports `remove` and detects foreign changes.
pub struct ListCursor<T> {
    state: Rc<RefCell<ListState<T>>>,
    index: usize,
    last_returned: Option<usize>,
    expected: u64,
}

impl<T> ListCursor<T> {
    fn check(&self) -> SeqResult<()> {
        if self.state.borrow().generation == self.expected {
            Ok(())
        } else {
            Err(SeqError::ConcurrentModification)
        }
    }
}

impl<T: Clone> Cursor for ListCursor<T> {
    type Item = T;

    fn has_next(&mut self) -> SeqResult<bool> {
        self.check()?;
        Ok(self.index < self.state.borrow().items.len())
    }

    fn next(&mut self) -> SeqResult<T> {
        self.check()?;
        let item = self
            .state
            .borrow()
            .items
            .get(self.index)
            .cloned()
            .ok_or(SeqError::Exhausted)?;
        self.last_returned = Some(self.index);
        self.index += 1;
        Ok(item)
    }

    fn remove(&mut self) -> SeqResult<()> {
        self.check()?;
        let index = self.last_returned.take().ok_or_else(nothing_to_remove)?;
        let mut state = self.state.borrow_mut();
        state.items.remove(index);
        state.bump();
        self.expected = state.generation;
        self.index = index;
        Ok(())
    }

    fn skip(&mut self, n: usize) -> SeqResult<usize> {
        self.check()?;
        let len = self.state.borrow().items.len();
        let skipped = n.min(len.saturating_sub(self.index));
        self.index += skipped;
        self.last_returned = None;
        Ok(skipped)
    }
}
