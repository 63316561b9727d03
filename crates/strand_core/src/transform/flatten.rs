//! One-to-many expansion.

use crate::cursor::{BoxCursor, Cursor};
use crate::error::{nothing_to_remove, SeqError, SeqResult};

/// Expands each outer element into an inner cursor and yields the inner elements.
///
/// The expander runs only when the traversal reaches that outer element, so a
/// failing expansion surfaces at that position and no earlier.
pub struct Flatten<C, F, U> {
    outer: C,
    expand: F,
    inner: Option<BoxCursor<U>>,
}

impl<C, F, U> Flatten<C, F, U> {
    pub fn new(outer: C, expand: F) -> Self {
        Flatten {
            outer,
            expand,
            inner: None,
        }
    }
}

impl<C, F, U> Cursor for Flatten<C, F, U>
where
    C: Cursor,
    F: FnMut(C::Item) -> BoxCursor<U>,
{
    type Item = U;

    fn has_next(&mut self) -> SeqResult<bool> {
        loop {
            if let Some(inner) = self.inner.as_mut() {
                if inner.has_next()? {
                    return Ok(true);
                }
            }
            if !self.outer.has_next()? {
                return Ok(false);
            }
            let item = self.outer.next()?;
            self.inner = Some((self.expand)(item));
        }
    }

    fn next(&mut self) -> SeqResult<U> {
        if !self.has_next()? {
            return Err(SeqError::Exhausted);
        }
        match self.inner.as_mut() {
            Some(inner) => inner.next(),
            None => Err(SeqError::Exhausted),
        }
    }

    fn remove(&mut self) -> SeqResult<()> {
        match self.inner.as_mut() {
            Some(inner) => inner.remove(),
            None => Err(nothing_to_remove()),
        }
    }
}
