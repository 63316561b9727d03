//! One small stateful cursor per sequence operation.
//!
//! Each cursor wraps its upstream (or a handful of them) and does no work in
//! its constructor. Evaluation starts with the consumer's first `has_next` or
//! `next`, so a mapper or predicate that would fail on some element fails only
//! when the traversal actually reaches that element.
//!
//! # Removal
//!
//! Cursors that pass elements through unchanged forward `remove` upstream, so
//! removing through a filtered or skipped view removes from the backing list.
//! A cursor that has pulled upstream past the element it last yielded refuses
//! with `IllegalState`. Cursors that buffer, reorder or group have no position
//! to remove and report [`SeqError::Unsupported`](crate::SeqError::Unsupported).
//!
//! | Family | Cursors |
//! |---|---|
//! | [`slicing`] | [`Skip`], [`SkipTail`], [`Limit`], [`LimitTail`], [`Step`] |
//! | [`mapping`] | [`Map`], [`MapIndexed`], [`Peek`] |
//! | [`filtering`] | [`Filter`], [`Distinct`] |
//! | [`flatten`] | [`Flatten`] |
//! | [`buffered`] | [`Buffered`] (sort, reverse, shuffle) |
//! | [`grouping`] | [`Window`], [`BatchBy`], [`Split`], [`Adjacent`] |
//! | [`boundary`] | [`Until`], [`EndingAt`], [`Starting`], [`UntilNone`] |
//! | [`chain`] | [`Chain`], [`Interleave`] |
//! | [`generate`] | [`Recurse`], [`Generate`] |
//! | [`repeat`] | [`Repeat`] |

pub mod boundary;
pub mod buffered;
pub mod chain;
pub mod filtering;
pub mod flatten;
pub mod generate;
pub mod grouping;
mod lookahead;
pub mod mapping;
pub mod repeat;
pub mod slicing;

#[cfg(test)]
mod testing;

pub use boundary::{EndingAt, Starting, Until, UntilNone};
pub use buffered::Buffered;
pub use chain::{Chain, CursorThunk, Interleave};
pub use filtering::{Distinct, Filter};
pub use flatten::Flatten;
pub use generate::{Generate, Recurse};
pub use grouping::{Adjacent, BatchBy, Split, Window};
pub use mapping::{Map, MapIndexed, Peek};
pub use repeat::Repeat;
pub use slicing::{Limit, LimitTail, Skip, SkipTail, Step};
