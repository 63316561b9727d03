//! Lap-by-lap repetition of a re-openable source.

use crate::cursor::{BoxCursor, Cursor};
use crate::error::{nothing_to_remove, SeqError, SeqResult};

/// Re-opens the source for every lap, forever or for a fixed number of laps.
///
/// Each lap sees whatever the source holds when that lap starts, so a source
/// that shrinks between laps yields shorter laps. A lap that yields nothing
/// ends the repetition, which keeps an empty source from spinning.
pub struct Repeat<T, F> {
    open: F,
    laps_left: Option<usize>,
    current: Option<BoxCursor<T>>,
    lap_yielded: bool,
    lap: usize,
}

impl<T, F> Repeat<T, F>
where
    F: FnMut() -> BoxCursor<T>,
{
    /// `laps` of `None` repeats until a lap comes back empty.
    pub fn new(open: F, laps: Option<usize>) -> Self {
        Repeat {
            open,
            laps_left: laps,
            current: None,
            lap_yielded: false,
            lap: 0,
        }
    }
}

impl<T, F> Cursor for Repeat<T, F>
where
    F: FnMut() -> BoxCursor<T>,
{
    type Item = T;

    fn has_next(&mut self) -> SeqResult<bool> {
        loop {
            if let Some(current) = self.current.as_mut() {
                if current.has_next()? {
                    return Ok(true);
                }
                if !self.lap_yielded {
                    return Ok(false);
                }
            }
            match self.laps_left.as_mut() {
                Some(0) => return Ok(false),
                Some(left) => *left -= 1,
                None => {}
            }
            self.current = Some((self.open)());
            self.lap_yielded = false;
            self.lap += 1;
            tracing::trace!(lap = self.lap, "repeat opened lap");
        }
    }

    fn next(&mut self) -> SeqResult<T> {
        if !self.has_next()? {
            return Err(SeqError::Exhausted);
        }
        self.lap_yielded = true;
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
