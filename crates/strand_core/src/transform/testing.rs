//! Shared helpers for transform cursor tests.

#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use crate::cursor::{Cursor, IterCursor};

/// Pulls every element, panicking on error.
pub(crate) fn drain<C: Cursor>(mut cursor: C) -> Vec<C::Item> {
    let mut out = Vec::new();
    while cursor.has_next().unwrap() {
        out.push(cursor.next().unwrap());
    }
    out
}

/// A plain read-only source over `items`.
pub(crate) fn source<T>(items: Vec<T>) -> IterCursor<std::vec::IntoIter<T>> {
    IterCursor::new(items.into_iter())
}
