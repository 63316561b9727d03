//! Cursors that must see the whole upstream before yielding anything.

use crate::cursor::Cursor;
use crate::error::{unsupported, SeqError, SeqResult};

/// Drains the upstream into a buffer on first pull, rearranges it once, then
/// yields from the buffer.
///
/// Sorting, reversing and shuffling are all this cursor with a different
/// `arrange` step. The yielded order has no link back to a backing store, so
/// `remove` is unsupported.
pub struct Buffered<C: Cursor, F> {
    state: BufferState<C, F>,
}

enum BufferState<C: Cursor, F> {
    Pending { source: C, arrange: F },
    Draining(std::vec::IntoIter<C::Item>),
    Done,
}

impl<C: Cursor, F> Buffered<C, F>
where
    F: FnOnce(&mut Vec<C::Item>),
{
    pub fn new(source: C, arrange: F) -> Self {
        Buffered {
            state: BufferState::Pending { source, arrange },
        }
    }

    fn fill(&mut self) -> SeqResult<&mut std::vec::IntoIter<C::Item>> {
        if let BufferState::Pending { .. } = self.state {
            let BufferState::Pending {
                mut source,
                arrange,
            } = std::mem::replace(&mut self.state, BufferState::Done)
            else {
                return Err(SeqError::Exhausted);
            };
            let mut buffer = Vec::new();
            while source.has_next()? {
                buffer.push(source.next()?);
            }
            arrange(&mut buffer);
            tracing::trace!(len = buffer.len(), "buffered upstream");
            self.state = BufferState::Draining(buffer.into_iter());
        }
        match &mut self.state {
            BufferState::Draining(items) => Ok(items),
            _ => Err(SeqError::Exhausted),
        }
    }
}

impl<C: Cursor, F> Cursor for Buffered<C, F>
where
    F: FnOnce(&mut Vec<C::Item>),
{
    type Item = C::Item;

    fn has_next(&mut self) -> SeqResult<bool> {
        match self.fill() {
            Ok(items) => Ok(!items.as_slice().is_empty()),
            Err(SeqError::Exhausted) => Ok(false),
            Err(error) => Err(error),
        }
    }

    fn next(&mut self) -> SeqResult<C::Item> {
        self.fill()?.next().ok_or(SeqError::Exhausted)
    }

    fn remove(&mut self) -> SeqResult<()> {
        Err(unsupported("remove"))
    }
}
