//! Error taxonomy for cursors and sequence terminals.
//!
//! Every failure is returned to the immediate caller. Nothing here logs,
//! retries or recovers.

use std::fmt;

/// Result alias used by every cursor method and terminal operation.
pub type SeqResult<T> = Result<T, SeqError>;

/// Errors raised while traversing or mutating a sequence.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SeqError {
    /// `next` was called on a cursor with no remaining elements.
    #[error("no more elements")]
    Exhausted,

    /// The operation needs a live link to a backing store and this view has none.
    #[error("{operation} is not supported by this view")]
    Unsupported { operation: &'static str },

    /// A count or input shape was rejected before traversal.
    #[error("illegal argument `{name}`: {reason}")]
    IllegalArgument { name: &'static str, reason: String },

    /// The cursor is not in a state where the call makes sense.
    #[error("illegal state: {reason}")]
    IllegalState { reason: &'static str },

    /// The backing store changed through some path other than this cursor.
    #[error("backing list was structurally modified during traversal")]
    ConcurrentModification,
}

impl SeqError {
    /// Whether this is the plain end-of-input signal.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, SeqError::Exhausted)
    }
}

// ── Factories ──

/// Removal (or another mutation) requested on a view without a backing link.
#[cold]
pub fn unsupported(operation: &'static str) -> SeqError {
    SeqError::Unsupported { operation }
}

/// An argument failed validation.
#[cold]
pub fn illegal_argument(name: &'static str, reason: impl fmt::Display) -> SeqError {
    SeqError::IllegalArgument {
        name,
        reason: reason.to_string(),
    }
}

/// `remove` without a preceding `next`, or after the element was already removed.
#[cold]
pub fn nothing_to_remove() -> SeqError {
    SeqError::IllegalState {
        reason: "remove requires a preceding next",
    }
}

/// `remove` after `has_next` moved past the element `next` returned.
#[cold]
pub fn remove_after_lookahead() -> SeqError {
    SeqError::IllegalState {
        reason: "cannot remove after has_next looked ahead",
    }
}

/// Rejects a zero count where at least one is required.
pub fn require_positive(name: &'static str, value: usize) -> SeqResult<usize> {
    if value == 0 {
        Err(illegal_argument(name, "must be at least 1"))
    } else {
        Ok(value)
    }
}
