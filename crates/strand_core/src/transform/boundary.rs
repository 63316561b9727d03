//! Cursors that cut a traversal at the first match of a predicate.
//!
//! `Until` stops before the match and `EndingAt` stops after it. `Starting`
//! is the mirror image at the front: it discards everything up to the first
//! match, keeping the match itself only when inclusive. If nothing matches,
//! `Starting` yields nothing.

use crate::cursor::Cursor;
use crate::error::{SeqError, SeqResult};
use crate::transform::lookahead::Removal;

/// Yields elements until `is_terminal` matches. The terminal is not yielded.
pub struct Until<C: Cursor, P> {
    source: C,
    is_terminal: P,
    held: Option<C::Item>,
    done: bool,
    removal: Removal,
}

impl<C: Cursor, P> Until<C, P> {
    pub fn new(source: C, is_terminal: P) -> Self {
        Until {
            source,
            is_terminal,
            held: None,
            done: false,
            removal: Removal::Idle,
        }
    }
}

impl<C, P> Cursor for Until<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    type Item = C::Item;

    fn has_next(&mut self) -> SeqResult<bool> {
        if self.held.is_some() {
            return Ok(true);
        }
        if self.done || !self.source.has_next()? {
            return Ok(false);
        }
        let item = self.source.next()?;
        self.removal.pulled();
        if (self.is_terminal)(&item) {
            self.done = true;
            return Ok(false);
        }
        self.held = Some(item);
        Ok(true)
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

/// Yields elements up to and including the first one matching `is_terminal`.
pub struct EndingAt<C, P> {
    source: C,
    is_terminal: P,
    done: bool,
}

impl<C, P> EndingAt<C, P> {
    pub fn new(source: C, is_terminal: P) -> Self {
        EndingAt {
            source,
            is_terminal,
            done: false,
        }
    }
}

impl<C, P> Cursor for EndingAt<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    type Item = C::Item;

    fn has_next(&mut self) -> SeqResult<bool> {
        if self.done {
            return Ok(false);
        }
        self.source.has_next()
    }

    fn next(&mut self) -> SeqResult<C::Item> {
        if self.done {
            return Err(SeqError::Exhausted);
        }
        let item = self.source.next()?;
        if (self.is_terminal)(&item) {
            self.done = true;
        }
        Ok(item)
    }

    fn remove(&mut self) -> SeqResult<()> {
        self.source.remove()
    }
}

/// Discards elements before the first match of `is_start`.
///
/// With `inclusive` the match is the first element yielded ("starting
/// from"), otherwise the element after it is ("starting after").
pub struct Starting<C: Cursor, P> {
    source: C,
    is_start: P,
    inclusive: bool,
    held: Option<C::Item>,
    searched: bool,
    found: bool,
    removal: Removal,
}

impl<C: Cursor, P> Starting<C, P> {
    pub fn new(source: C, is_start: P, inclusive: bool) -> Self {
        Starting {
            source,
            is_start,
            inclusive,
            held: None,
            searched: false,
            found: false,
            removal: Removal::Idle,
        }
    }
}

impl<C, P> Starting<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    fn search(&mut self) -> SeqResult<()> {
        if self.searched {
            return Ok(());
        }
        self.searched = true;
        while self.source.has_next()? {
            let item = self.source.next()?;
            self.removal.pulled();
            if (self.is_start)(&item) {
                self.found = true;
                if self.inclusive {
                    self.held = Some(item);
                }
                break;
            }
        }
        Ok(())
    }
}

impl<C, P> Cursor for Starting<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    type Item = C::Item;

    fn has_next(&mut self) -> SeqResult<bool> {
        self.search()?;
        if !self.found {
            return Ok(false);
        }
        if self.held.is_some() {
            return Ok(true);
        }
        self.source.has_next()
    }

    fn next(&mut self) -> SeqResult<C::Item> {
        if !self.has_next()? {
            return Err(SeqError::Exhausted);
        }
        let item = match self.held.take() {
            Some(item) => item,
            None => self.source.next()?,
        };
        self.removal.yielded();
        Ok(item)
    }

    fn remove(&mut self) -> SeqResult<()> {
        self.removal.take()?;
        self.source.remove()
    }
}

/// Unwraps `Some` elements and stops at the first `None`.
pub struct UntilNone<C, T> {
    source: C,
    held: Option<T>,
    done: bool,
    removal: Removal,
}

impl<C, T> UntilNone<C, T> {
    pub fn new(source: C) -> Self {
        UntilNone {
            source,
            held: None,
            done: false,
            removal: Removal::Idle,
        }
    }
}

impl<C, T> Cursor for UntilNone<C, T>
where
    C: Cursor<Item = Option<T>>,
{
    type Item = T;

    fn has_next(&mut self) -> SeqResult<bool> {
        if self.held.is_some() {
            return Ok(true);
        }
        if self.done || !self.source.has_next()? {
            return Ok(false);
        }
        let item = self.source.next()?;
        self.removal.pulled();
        match item {
            Some(item) => {
                self.held = Some(item);
                Ok(true)
            }
            None => {
                self.done = true;
                Ok(false)
            }
        }
    }

    fn next(&mut self) -> SeqResult<T> {
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
