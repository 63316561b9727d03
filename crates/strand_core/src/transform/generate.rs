//! Unbounded sources. Neither cursor ever reports exhaustion, so a traversal
//! ends only when a downstream limit or boundary cursor stops pulling.

use crate::cursor::Cursor;
use crate::error::{SeqError, SeqResult};

/// The first element of a [`Recurse`]: given, or computed on the first pull.
enum First<T> {
    Seed(T),
    Deferred(Box<dyn FnOnce() -> T>),
}

/// `seed, step(seed), step(step(seed)), ...`
///
/// Each step is computed when its element is pulled, not before. The same
/// holds for a deferred first element.
pub struct Recurse<T, F> {
    first: Option<First<T>>,
    previous: Option<T>,
    step: F,
}

impl<T, F> Recurse<T, F> {
    pub fn new(seed: T, step: F) -> Self {
        Recurse {
            first: Some(First::Seed(seed)),
            previous: None,
            step,
        }
    }

    /// Starts with `first()`, called when the first element is pulled.
    pub fn deferred(first: impl FnOnce() -> T + 'static, step: F) -> Self {
        Recurse {
            first: Some(First::Deferred(Box::new(first))),
            previous: None,
            step,
        }
    }
}

impl<T, F> Cursor for Recurse<T, F>
where
    T: Clone,
    F: FnMut(&T) -> T,
{
    type Item = T;

    fn has_next(&mut self) -> SeqResult<bool> {
        Ok(true)
    }

    fn next(&mut self) -> SeqResult<T> {
        let item = match (self.first.take(), self.previous.as_ref()) {
            (Some(First::Seed(seed)), _) => seed,
            (Some(First::Deferred(first)), _) => first(),
            (None, Some(previous)) => (self.step)(previous),
            (None, None) => return Err(SeqError::Exhausted),
        };
        self.previous = Some(item.clone());
        Ok(item)
    }
}

/// Calls `supplier` for every element.
pub struct Generate<F> {
    supplier: F,
}

impl<F> Generate<F> {
    pub fn new(supplier: F) -> Self {
        Generate { supplier }
    }
}

impl<T, F: FnMut() -> T> Cursor for Generate<F> {
    type Item = T;

    fn has_next(&mut self) -> SeqResult<bool> {
        Ok(true)
    }

    fn next(&mut self) -> SeqResult<T> {
        Ok((self.supplier)())
    }
}

#[cfg(test)]
mod tests;
