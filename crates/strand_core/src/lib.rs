//! Core engine for lazy strand sequences.
//!
//! A sequence is a cursor factory. Each traversal builds a fresh chain of
//! small stateful cursors, pulls elements through it, and discards it.
//!
//! # Modules
//!
//! - [`cursor`]: the pull protocol ([`Cursor`]) and the basic sources
//! - [`backing`]: [`SharedList`], a mutable store with fail-fast cursors
//! - [`transform`]: one cursor per operation (skip, filter, window, ...)
//! - [`pair`]: [`Pair`] and the [`PairLike`] abstraction over two-part elements
//! - [`error`]: [`SeqError`] and [`SeqResult`]

pub mod backing;
pub mod cursor;
pub mod error;
pub mod pair;
pub mod transform;

pub use backing::{ListCursor, SharedList};
pub use cursor::{
    share, BoxCursor, CharCursor, Cursor, CursorIter, DoubleCursor, EmptyCursor, IntCursor,
    IntoCursor, IterCursor, LongCursor, SharedIter, SharedIterCursor, SliceCursor,
};
pub use error::{SeqError, SeqResult};
pub use pair::{Pair, PairLike};
