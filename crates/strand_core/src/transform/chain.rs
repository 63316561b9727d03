//! Cursors over several sources: concatenation and round-robin interleaving.

use smallvec::SmallVec;

use crate::cursor::{BoxCursor, Cursor};
use crate::error::{nothing_to_remove, unsupported, SeqError, SeqResult};

/// Opens a source cursor when a chain first reaches it.
pub type CursorThunk<T> = Box<dyn FnOnce() -> BoxCursor<T>>;

/// Concatenates sources, opening each only once the previous one is exhausted.
pub struct Chain<T> {
    /// Unopened sources in reverse order, so the next one is at the end.
    pending: SmallVec<[CursorThunk<T>; 4]>,
    current: Option<BoxCursor<T>>,
}

impl<T> Chain<T> {
    pub fn new(sources: impl IntoIterator<Item = CursorThunk<T>>) -> Self {
        let mut pending: SmallVec<[CursorThunk<T>; 4]> = sources.into_iter().collect();
        pending.reverse();
        Chain {
            pending,
            current: None,
        }
    }
}

impl<T> Cursor for Chain<T> {
    type Item = T;

    fn has_next(&mut self) -> SeqResult<bool> {
        loop {
            if let Some(current) = self.current.as_mut() {
                if current.has_next()? {
                    return Ok(true);
                }
            }
            match self.pending.pop() {
                Some(open) => self.current = Some(open()),
                None => return Ok(false),
            }
        }
    }

    fn next(&mut self) -> SeqResult<T> {
        if !self.has_next()? {
            return Err(SeqError::Exhausted);
        }
        match self.current.as_mut() {
            Some(current) => current.next(),
            None => Err(SeqError::Exhausted),
        }
    }

    fn remove(&mut self) -> SeqResult<()> {
        match self.current.as_mut() {
            Some(current) => current.remove(),
            None => Err(nothing_to_remove()),
        }
    }
}

/// Takes one element from each source in turn, dropping sources as they run dry.
///
/// A source is opened when its first turn comes, not when the cursor is built.
pub struct Interleave<T> {
    sources: SmallVec<[Chain<T>; 4]>,
    turn: usize,
}

impl<T> Interleave<T> {
    pub fn new(sources: impl IntoIterator<Item = CursorThunk<T>>) -> Self {
        Interleave {
            sources: sources.into_iter().map(|open| Chain::new([open])).collect(),
            turn: 0,
        }
    }
}

impl<T> Cursor for Interleave<T> {
    type Item = T;

    fn has_next(&mut self) -> SeqResult<bool> {
        let count = self.sources.len();
        for offset in 0..count {
            if self.sources[(self.turn + offset) % count].has_next()? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn next(&mut self) -> SeqResult<T> {
        let count = self.sources.len();
        for offset in 0..count {
            let index = (self.turn + offset) % count;
            if self.sources[index].has_next()? {
                self.turn = index + 1;
                return self.sources[index].next();
            }
        }
        Err(SeqError::Exhausted)
    }

    fn remove(&mut self) -> SeqResult<()> {
        Err(unsupported("remove"))
    }
}

#[cfg(test)]
mod tests;
