//! Cursors that yield groups of upstream elements.
//!
//! Groups are handed out as owned `Vec`s. None of these cursors can remove,
//! since a group has no single position in the backing store.

use std::collections::VecDeque;

use crate::cursor::Cursor;
use crate::error::{unsupported, SeqError, SeqResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Start,
    Ready,
    Emitted,
    Done,
}

/// Sliding windows of up to `size` elements, advancing `step` elements each time.
///
/// After the first window, a new one is emitted only if sliding pulled in at
/// least one new element. The last window may therefore be short, and an
/// empty upstream yields no window at all.
pub struct Window<C: Cursor> {
    source: C,
    size: usize,
    step: usize,
    buffer: VecDeque<C::Item>,
    phase: Phase,
}

impl<C: Cursor> Window<C> {
    /// `size` and `step` must be at least 1; callers validate them.
    pub fn new(source: C, size: usize, step: usize) -> Self {
        let size = size.max(1);
        Window {
            source,
            size,
            step: step.max(1),
            buffer: VecDeque::with_capacity(size.min(64)),
            phase: Phase::Start,
        }
    }

    fn fill(&mut self) -> SeqResult<usize> {
        let mut added = 0;
        while self.buffer.len() < self.size && self.source.has_next()? {
            let item = self.source.next()?;
            self.buffer.push_back(item);
            added += 1;
        }
        Ok(added)
    }

    fn slide(&mut self) -> SeqResult<()> {
        let dropped = self.step.min(self.buffer.len());
        self.buffer.drain(..dropped);
        let beyond = self.step - dropped;
        if beyond > 0 {
            self.source.skip(beyond)?;
        }
        Ok(())
    }
}

impl<C: Cursor> Cursor for Window<C>
where
    C::Item: Clone,
{
    type Item = Vec<C::Item>;

    fn has_next(&mut self) -> SeqResult<bool> {
        match self.phase {
            Phase::Ready => return Ok(true),
            Phase::Done => return Ok(false),
            Phase::Start => {}
            Phase::Emitted => self.slide()?,
        }
        self.phase = if self.fill()? > 0 {
            Phase::Ready
        } else {
            Phase::Done
        };
        Ok(self.phase == Phase::Ready)
    }

    fn next(&mut self) -> SeqResult<Vec<C::Item>> {
        if !self.has_next()? {
            return Err(SeqError::Exhausted);
        }
        self.phase = Phase::Emitted;
        tracing::trace!(len = self.buffer.len(), "window emitted");
        Ok(self.buffer.iter().cloned().collect())
    }

    fn remove(&mut self) -> SeqResult<()> {
        Err(unsupported("remove"))
    }
}

/// Groups runs of elements, cutting between neighbours `a, b` whenever
/// `cut(a, b)` is true. The first group always starts with the first element.
pub struct BatchBy<C: Cursor, P> {
    source: C,
    cut: P,
    held: Option<C::Item>,
}

impl<C: Cursor, P> BatchBy<C, P> {
    pub fn new(source: C, cut: P) -> Self {
        BatchBy {
            source,
            cut,
            held: None,
        }
    }
}

impl<C, P> Cursor for BatchBy<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item, &C::Item) -> bool,
{
    type Item = Vec<C::Item>;

    fn has_next(&mut self) -> SeqResult<bool> {
        if self.held.is_some() {
            return Ok(true);
        }
        self.source.has_next()
    }

    fn next(&mut self) -> SeqResult<Vec<C::Item>> {
        let first = match self.held.take() {
            Some(item) => item,
            None => self.source.next()?,
        };
        let mut group = vec![first];
        while self.source.has_next()? {
            let item = self.source.next()?;
            let cut = match group.last() {
                Some(previous) => (self.cut)(previous, &item),
                None => false,
            };
            if cut {
                self.held = Some(item);
                break;
            }
            group.push(item);
        }
        Ok(group)
    }

    fn remove(&mut self) -> SeqResult<()> {
        Err(unsupported("remove"))
    }
}

/// Splits around elements matching `is_separator`, which are dropped.
///
/// A leading separator, or two in a row, produce an empty group. A trailing
/// separator does not add an empty group after it.
pub struct Split<C, P> {
    source: C,
    is_separator: P,
}

impl<C, P> Split<C, P> {
    pub fn new(source: C, is_separator: P) -> Self {
        Split {
            source,
            is_separator,
        }
    }
}

impl<C, P> Cursor for Split<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    type Item = Vec<C::Item>;

    fn has_next(&mut self) -> SeqResult<bool> {
        self.source.has_next()
    }

    fn next(&mut self) -> SeqResult<Vec<C::Item>> {
        if !self.source.has_next()? {
            return Err(SeqError::Exhausted);
        }
        let mut group = Vec::new();
        while self.source.has_next()? {
            let item = self.source.next()?;
            if (self.is_separator)(&item) {
                break;
            }
            group.push(item);
        }
        Ok(group)
    }

    fn remove(&mut self) -> SeqResult<()> {
        Err(unsupported("remove"))
    }
}

/// Overlapping neighbour pairs: `(a, b), (b, c), ...`. Fewer than two
/// elements yield nothing.
pub struct Adjacent<C: Cursor> {
    source: C,
    previous: Option<C::Item>,
}

impl<C: Cursor> Adjacent<C> {
    pub fn new(source: C) -> Self {
        Adjacent {
            source,
            previous: None,
        }
    }
}

impl<C: Cursor> Cursor for Adjacent<C>
where
    C::Item: Clone,
{
    type Item = (C::Item, C::Item);

    fn has_next(&mut self) -> SeqResult<bool> {
        if self.previous.is_none() {
            if !self.source.has_next()? {
                return Ok(false);
            }
            self.previous = Some(self.source.next()?);
        }
        self.source.has_next()
    }

    fn next(&mut self) -> SeqResult<(C::Item, C::Item)> {
        if !self.has_next()? {
            return Err(SeqError::Exhausted);
        }
        let current = self.source.next()?;
        let previous = self
            .previous
            .replace(current.clone())
            .ok_or(SeqError::Exhausted)?;
        Ok((previous, current))
    }

    fn remove(&mut self) -> SeqResult<()> {
        Err(unsupported("remove"))
    }
}

#[cfg(test)]
mod tests;
