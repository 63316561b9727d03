//! Positional cursors: head/tail skipping and limiting, and striding.

use std::collections::VecDeque;

use crate::cursor::Cursor;
use crate::error::{nothing_to_remove, unsupported, SeqError, SeqResult};

/// Drops the first `count` elements, lazily on first pull.
pub struct Skip<C> {
    source: C,
    pending: usize,
}

impl<C: Cursor> Skip<C> {
    pub fn new(source: C, count: usize) -> Self {
        Skip {
            source,
            pending: count,
        }
    }

    fn settle(&mut self) -> SeqResult<()> {
        if self.pending > 0 {
            let count = std::mem::take(&mut self.pending);
            self.source.skip(count)?;
        }
        Ok(())
    }
}

impl<C: Cursor> Cursor for Skip<C> {
    type Item = C::Item;

    fn has_next(&mut self) -> SeqResult<bool> {
        self.settle()?;
        self.source.has_next()
    }

    fn next(&mut self) -> SeqResult<C::Item> {
        self.settle()?;
        self.source.next()
    }

    fn remove(&mut self) -> SeqResult<()> {
        self.source.remove()
    }

    fn skip(&mut self, n: usize) -> SeqResult<usize> {
        self.settle()?;
        self.source.skip(n)
    }
}

/// Drops the last `count` elements.
///
/// Keeps `count + 1` elements buffered so it knows, before yielding one,
/// that at least `count` more follow.
pub struct SkipTail<C: Cursor> {
    source: C,
    count: usize,
    buffer: VecDeque<C::Item>,
}

impl<C: Cursor> SkipTail<C> {
    pub fn new(source: C, count: usize) -> Self {
        SkipTail {
            source,
            count,
            buffer: VecDeque::new(),
        }
    }
}

impl<C: Cursor> Cursor for SkipTail<C> {
    type Item = C::Item;

    fn has_next(&mut self) -> SeqResult<bool> {
        while self.buffer.len() <= self.count && self.source.has_next()? {
            let item = self.source.next()?;
            self.buffer.push_back(item);
        }
        Ok(self.buffer.len() > self.count)
    }

    fn next(&mut self) -> SeqResult<C::Item> {
        if !self.has_next()? {
            return Err(SeqError::Exhausted);
        }
        self.buffer.pop_front().ok_or(SeqError::Exhausted)
    }
}

/// Stops after `limit` elements.
pub struct Limit<C> {
    source: C,
    remaining: usize,
}

impl<C: Cursor> Limit<C> {
    pub fn new(source: C, limit: usize) -> Self {
        Limit {
            source,
            remaining: limit,
        }
    }
}

impl<C: Cursor> Cursor for Limit<C> {
    type Item = C::Item;

    fn has_next(&mut self) -> SeqResult<bool> {
        if self.remaining == 0 {
            return Ok(false);
        }
        self.source.has_next()
    }

    fn next(&mut self) -> SeqResult<C::Item> {
        if self.remaining == 0 {
            return Err(SeqError::Exhausted);
        }
        let item = self.source.next()?;
        self.remaining -= 1;
        Ok(item)
    }

    fn remove(&mut self) -> SeqResult<()> {
        self.source.remove()
    }

    fn skip(&mut self, n: usize) -> SeqResult<usize> {
        let skipped = self.source.skip(n.min(self.remaining))?;
        self.remaining -= skipped;
        Ok(skipped)
    }
}

/// Keeps only the last `limit` elements.
///
/// Drains the upstream on first pull through a buffer bounded at `limit`.
pub struct LimitTail<C: Cursor> {
    source: C,
    limit: usize,
    buffer: VecDeque<C::Item>,
    filled: bool,
}

impl<C: Cursor> LimitTail<C> {
    pub fn new(source: C, limit: usize) -> Self {
        LimitTail {
            source,
            limit,
            buffer: VecDeque::with_capacity(limit.min(64)),
            filled: false,
        }
    }

    fn fill(&mut self) -> SeqResult<()> {
        if self.filled {
            return Ok(());
        }
        self.filled = true;
        let mut seen = 0usize;
        while self.source.has_next()? {
            let item = self.source.next()?;
            seen += 1;
            if self.limit == 0 {
                continue;
            }
            if self.buffer.len() == self.limit {
                self.buffer.pop_front();
            }
            self.buffer.push_back(item);
        }
        tracing::trace!(seen, kept = self.buffer.len(), "limit_tail drained upstream");
        Ok(())
    }
}

impl<C: Cursor> Cursor for LimitTail<C> {
    type Item = C::Item;

    fn has_next(&mut self) -> SeqResult<bool> {
        self.fill()?;
        Ok(!self.buffer.is_empty())
    }

    fn next(&mut self) -> SeqResult<C::Item> {
        self.fill()?;
        self.buffer.pop_front().ok_or(SeqError::Exhausted)
    }

    fn remove(&mut self) -> SeqResult<()> {
        Err(unsupported("remove"))
    }
}

/// Yields every `step`-th element, starting with the first.
///
/// The `step - 1` elements between two yields are skipped on the following
/// pull, not right after `next`, so `remove` still targets the element just
/// returned.
pub struct Step<C> {
    source: C,
    step: usize,
    skip_due: bool,
}

impl<C: Cursor> Step<C> {
    /// `step` must be at least 1; callers validate it.
    pub fn new(source: C, step: usize) -> Self {
        Step {
            source,
            step: step.max(1),
            skip_due: false,
        }
    }

    fn settle(&mut self) -> SeqResult<()> {
        if self.skip_due {
            self.skip_due = false;
            self.source.skip(self.step - 1)?;
        }
        Ok(())
    }
}

impl<C: Cursor> Cursor for Step<C> {
    type Item = C::Item;

    fn has_next(&mut self) -> SeqResult<bool> {
        self.settle()?;
        self.source.has_next()
    }

    fn next(&mut self) -> SeqResult<C::Item> {
        self.settle()?;
        let item = self.source.next()?;
        self.skip_due = true;
        Ok(item)
    }

    fn remove(&mut self) -> SeqResult<()> {
        if self.skip_due {
            self.source.remove()
        } else {
            Err(nothing_to_remove())
        }
    }
}
