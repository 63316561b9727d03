//! The pull protocol every sequence traversal runs on.
//!
//! A [`Cursor`] answers `has_next` without advancing and hands out exactly one
//! element per `next`. Exhaustion is sticky: once `has_next` reports `false`
//! it keeps doing so, and `next` fails with [`SeqError::Exhausted`].
//!
//! `remove` and `skip` are optional capabilities. `remove` deletes the last
//! element `next` returned from whatever store backs the cursor; views with no
//! backing store reject it with [`SeqError::Unsupported`].
//!
//! # Sources
//!
//! - [`IterCursor`]: wraps any [`Iterator`]
//! - [`SliceCursor`]: walks a shared slice, cloning elements out
//! - [`SharedIterCursor`]: several cursors draining one iterator (once-only sources)
//! - [`EmptyCursor`]: never yields

use std::cell::RefCell;
use std::collections::VecDeque;
use std::iter::{Fuse, Peekable};
use std::marker::PhantomData;
use std::rc::Rc;

use crate::error::{unsupported, SeqError, SeqResult};

/// A single-pass, pull-based cursor.
pub trait Cursor {
    type Item;

    /// Reports whether `next` would yield an element. Repeated calls do not advance.
    fn has_next(&mut self) -> SeqResult<bool>;

    /// Yields the next element, or [`SeqError::Exhausted`].
    fn next(&mut self) -> SeqResult<Self::Item>;

    /// Removes the element most recently returned by `next` from the backing store.
    fn remove(&mut self) -> SeqResult<()> {
        Err(unsupported("remove"))
    }

    /// Advances past up to `n` elements, returning how many were actually skipped.
    fn skip(&mut self, n: usize) -> SeqResult<usize> {
        let mut skipped = 0;
        while skipped < n && self.has_next()? {
            self.next()?;
            skipped += 1;
        }
        Ok(skipped)
    }
}

/// Type-erased cursor, the currency passed between sequence stages.
pub type BoxCursor<T> = Box<dyn Cursor<Item = T>>;

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Item = C::Item;

    #[inline]
    fn has_next(&mut self) -> SeqResult<bool> {
        (**self).has_next()
    }

    #[inline]
    fn next(&mut self) -> SeqResult<C::Item> {
        (**self).next()
    }

    #[inline]
    fn remove(&mut self) -> SeqResult<()> {
        (**self).remove()
    }

    #[inline]
    fn skip(&mut self, n: usize) -> SeqResult<usize> {
        (**self).skip(n)
    }
}

// ── Typed accessors ──

/// Generates a typed accessor trait with a blanket impl for every cursor of that item type.
macro_rules! typed_cursor {
    ($(#[$meta:meta])* $name:ident, $ty:ty, $method:ident) => {
        $(#[$meta])*
        pub trait $name: Cursor<Item = $ty> {
            #[inline]
            fn $method(&mut self) -> SeqResult<$ty> {
                self.next()
            }
        }

        impl<C: Cursor<Item = $ty> + ?Sized> $name for C {}
    };
}

typed_cursor!(
    /// `next_char` for cursors over `char`.
    CharCursor, char, next_char
);
typed_cursor!(
    /// `next_int` for cursors over `i32`.
    IntCursor, i32, next_int
);
typed_cursor!(
    /// `next_long` for cursors over `i64`.
    LongCursor, i64, next_long
);
typed_cursor!(
    /// `next_double` for cursors over `f64`.
    DoubleCursor, f64, next_double
);

// ── Sources ──

/// A cursor that never yields.
pub struct EmptyCursor<T>(PhantomData<fn() -> T>);

impl<T> EmptyCursor<T> {
    pub fn new() -> Self {
        EmptyCursor(PhantomData)
    }
}

impl<T> Default for EmptyCursor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Cursor for EmptyCursor<T> {
    type Item = T;

    fn has_next(&mut self) -> SeqResult<bool> {
        Ok(false)
    }

    fn next(&mut self) -> SeqResult<T> {
        Err(SeqError::Exhausted)
    }
}

/// Adapts a standard iterator, holding at most one peeked element.
///
/// The iterator is fused: once it has returned `None`, the cursor stays
/// exhausted even if the iterator would resume.
pub struct IterCursor<I: Iterator> {
    iter: Fuse<I>,
    peeked: Option<I::Item>,
}

impl<I: Iterator> IterCursor<I> {
    pub fn new(iter: I) -> Self {
        IterCursor {
            iter: iter.fuse(),
            peeked: None,
        }
    }
}

impl<I: Iterator> Cursor for IterCursor<I> {
    type Item = I::Item;

    fn has_next(&mut self) -> SeqResult<bool> {
        if self.peeked.is_none() {
            self.peeked = self.iter.next();
        }
        Ok(self.peeked.is_some())
    }

    fn next(&mut self) -> SeqResult<I::Item> {
        match self.peeked.take() {
            Some(item) => Ok(item),
            None => self.iter.next().ok_or(SeqError::Exhausted),
        }
    }

    fn skip(&mut self, n: usize) -> SeqResult<usize> {
        if n == 0 {
            return Ok(0);
        }
        let mut skipped = 0;
        if self.peeked.take().is_some() {
            skipped += 1;
        }
        while skipped < n && self.iter.next().is_some() {
            skipped += 1;
        }
        Ok(skipped)
    }
}

/// Walks a shared, immutable slice. Elements are cloned out.
pub struct SliceCursor<T> {
    items: Rc<[T]>,
    index: usize,
}

impl<T> SliceCursor<T> {
    pub fn new(items: Rc<[T]>) -> Self {
        SliceCursor { items, index: 0 }
    }
}

impl<T: Clone> Cursor for SliceCursor<T> {
    type Item = T;

    fn has_next(&mut self) -> SeqResult<bool> {
        Ok(self.index < self.items.len())
    }

    fn next(&mut self) -> SeqResult<T> {
        let item = self.items.get(self.index).ok_or(SeqError::Exhausted)?.clone();
        self.index += 1;
        Ok(item)
    }

    fn skip(&mut self, n: usize) -> SeqResult<usize> {
        let skipped = n.min(self.items.len() - self.index);
        self.index += skipped;
        Ok(skipped)
    }
}

/// A fused iterator shared by every [`SharedIterCursor`] draining it.
pub type SharedIter<I> = Rc<RefCell<Peekable<Fuse<I>>>>;

/// Wraps `iter` for sharing between cursors.
pub fn share<I: Iterator>(iter: I) -> SharedIter<I> {
    Rc::new(RefCell::new(iter.fuse().peekable()))
}

/// One of possibly many cursors draining the same iterator.
///
/// Whatever one cursor consumes is gone for every other, so a second
/// traversal sees only what the first left behind.
pub struct SharedIterCursor<I: Iterator> {
    source: SharedIter<I>,
}

impl<I: Iterator> SharedIterCursor<I> {
    pub fn new(source: SharedIter<I>) -> Self {
        SharedIterCursor { source }
    }
}

impl<I: Iterator> Cursor for SharedIterCursor<I> {
    type Item = I::Item;

    fn has_next(&mut self) -> SeqResult<bool> {
        Ok(self.source.borrow_mut().peek().is_some())
    }

    fn next(&mut self) -> SeqResult<I::Item> {
        self.source.borrow_mut().next().ok_or(SeqError::Exhausted)
    }
}

// ── Std interop ──

/// Drives a cursor as a standard iterator of results.
///
/// Yields `Err` once if the cursor fails, then ends.
pub struct CursorIter<C> {
    cursor: C,
    failed: bool,
}

impl<C: Cursor> CursorIter<C> {
    pub fn new(cursor: C) -> Self {
        CursorIter {
            cursor,
            failed: false,
        }
    }

    /// Gives back the underlying cursor, e.g. to call `remove` mid-loop.
    pub fn cursor_mut(&mut self) -> &mut C {
        &mut self.cursor
    }
}

impl<C: Cursor> Iterator for CursorIter<C> {
    type Item = SeqResult<C::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let step = match self.cursor.has_next() {
            Ok(true) => Some(self.cursor.next()),
            Ok(false) => None,
            Err(error) => Some(Err(error)),
        };
        if matches!(step, Some(Err(_))) {
            self.failed = true;
        }
        step
    }
}

impl<C: Cursor> std::iter::FusedIterator for CursorIter<C> {}

// ── IntoCursor ──

/// Owned values that can be turned into a boxed cursor, used by flattening.
pub trait IntoCursor {
    type Item;

    fn into_cursor(self) -> BoxCursor<Self::Item>;
}

impl<T: 'static> IntoCursor for Vec<T> {
    type Item = T;

    fn into_cursor(self) -> BoxCursor<T> {
        Box::new(IterCursor::new(self.into_iter()))
    }
}

impl<T: 'static> IntoCursor for VecDeque<T> {
    type Item = T;

    fn into_cursor(self) -> BoxCursor<T> {
        Box::new(IterCursor::new(self.into_iter()))
    }
}

impl<T: 'static> IntoCursor for Box<[T]> {
    type Item = T;

    fn into_cursor(self) -> BoxCursor<T> {
        Box::new(IterCursor::new(self.into_vec().into_iter()))
    }
}

impl<T: 'static> IntoCursor for Option<T> {
    type Item = T;

    fn into_cursor(self) -> BoxCursor<T> {
        Box::new(IterCursor::new(self.into_iter()))
    }
}

impl<T: 'static> IntoCursor for BoxCursor<T> {
    type Item = T;

    fn into_cursor(self) -> BoxCursor<T> {
        self
    }
}
