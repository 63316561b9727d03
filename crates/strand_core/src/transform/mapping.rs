//! Element-wise cursors: mapping and peeking, with or without the element index.

use crate::cursor::Cursor;
use crate::error::SeqResult;

/// Applies `mapper` to each element as it is pulled.
pub struct Map<C, F> {
    source: C,
    mapper: F,
}

impl<C, F> Map<C, F> {
    pub fn new(source: C, mapper: F) -> Self {
        Map { source, mapper }
    }
}

impl<C, F, U> Cursor for Map<C, F>
where
    C: Cursor,
    F: FnMut(C::Item) -> U,
{
    type Item = U;

    fn has_next(&mut self) -> SeqResult<bool> {
        self.source.has_next()
    }

    fn next(&mut self) -> SeqResult<U> {
        let item = self.source.next()?;
        Ok((self.mapper)(item))
    }

    fn remove(&mut self) -> SeqResult<()> {
        self.source.remove()
    }

    /// Skipped elements are never mapped.
    fn skip(&mut self, n: usize) -> SeqResult<usize> {
        self.source.skip(n)
    }
}

/// Like [`Map`], also passing the zero-based position of the element.
pub struct MapIndexed<C, F> {
    source: C,
    mapper: F,
    index: usize,
}

impl<C, F> MapIndexed<C, F> {
    pub fn new(source: C, mapper: F) -> Self {
        MapIndexed {
            source,
            mapper,
            index: 0,
        }
    }
}

impl<C, F, U> Cursor for MapIndexed<C, F>
where
    C: Cursor,
    F: FnMut(C::Item, usize) -> U,
{
    type Item = U;

    fn has_next(&mut self) -> SeqResult<bool> {
        self.source.has_next()
    }

    fn next(&mut self) -> SeqResult<U> {
        let item = self.source.next()?;
        let index = self.index;
        self.index += 1;
        Ok((self.mapper)(item, index))
    }

    fn remove(&mut self) -> SeqResult<()> {
        self.source.remove()
    }

    fn skip(&mut self, n: usize) -> SeqResult<usize> {
        let skipped = self.source.skip(n)?;
        self.index += skipped;
        Ok(skipped)
    }
}

/// Runs `action` on every element that passes through, including skipped ones.
pub struct Peek<C, F> {
    source: C,
    action: F,
    index: usize,
}

impl<C, F> Peek<C, F> {
    pub fn new(source: C, action: F) -> Self {
        Peek {
            source,
            action,
            index: 0,
        }
    }
}

impl<C, F> Cursor for Peek<C, F>
where
    C: Cursor,
    F: FnMut(&C::Item, usize),
{
    type Item = C::Item;

    fn has_next(&mut self) -> SeqResult<bool> {
        self.source.has_next()
    }

    fn next(&mut self) -> SeqResult<C::Item> {
        let item = self.source.next()?;
        (self.action)(&item, self.index);
        self.index += 1;
        Ok(item)
    }

    fn remove(&mut self) -> SeqResult<()> {
        self.source.remove()
    }
}
