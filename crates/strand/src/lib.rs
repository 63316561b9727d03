//! Lazy, composable, re-traversable sequences.
//!
//! A [`Sequence`] is a recipe, not a container: chaining calls such as
//! [`Sequence::filter`] or [`Sequence::window`] only describe a pipeline, and
//! nothing is pulled from the source until a terminal call like
//! [`Sequence::to_list`] drives a traversal.
//!
//! ```
//! use strand::Sequence;
//!
//! let evens = Sequence::of((1..=9).collect::<Vec<_>>())
//!     .filter(|n| n % 2 == 0)
//!     .map(|n| n.to_string());
//! assert_eq!(evens.to_list().unwrap(), ["2", "4", "6", "8"]);
//! ```
//!
//! # Facades
//!
//! - [`Sequence`]: any element type
//! - [`BiSequence`] / [`EntrySequence`]: two-part elements with left/right
//!   (key/value) overloads of every predicate and mapper
//! - [`IntSequence`], [`LongSequence`], [`DoubleSequence`], [`CharSeq`]:
//!   numeric and character helpers
//!
//! # Features
//!
//! - `shuffle` (default): the shuffle family, backed by `rand`
//! - `serde`: `Serialize`/`Deserialize` for [`Pair`]

pub mod pair_sequence;
pub mod primitive;
pub mod sequence;

mod stack;

#[cfg(test)]
mod test_helpers;

pub use pair_sequence::{BiSequence, EntrySequence, PairSequence};
pub use primitive::{CharSeq, DoubleSequence, IntSequence, LongSequence};
pub use sequence::{Iter, Reuse, Sequence};
pub use strand_core::{
    BoxCursor, Cursor, IntoCursor, Pair, PairLike, SeqError, SeqResult, SharedList,
};
