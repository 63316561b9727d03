//! Removal bookkeeping for cursors that read ahead of the consumer.
//!
//! A lookahead cursor pulls upstream elements the consumer never sees, such
//! as rejected elements or a scanned prefix. After such a pull the
//! upstream cursor no longer sits on the element `next` last returned, so a
//! forwarded `remove` would delete the wrong element.

use crate::error::{nothing_to_remove, remove_after_lookahead, SeqResult};

/// Where the upstream cursor sits relative to the last yielded element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum Removal {
    /// Nothing yielded yet, or the last yield was already removed.
    #[default]
    Idle,
    /// Upstream still sits on the element `next` just returned.
    Ready,
    /// Upstream was pulled past what the consumer saw.
    Moved,
}

impl Removal {
    /// Records an upstream pull made on the cursor's own behalf.
    pub(crate) fn pulled(&mut self) {
        *self = Removal::Moved;
    }

    /// Records that `next` returned the element upstream last produced.
    pub(crate) fn yielded(&mut self) {
        *self = Removal::Ready;
    }

    /// Consumes the right to remove, or explains why there is none.
    pub(crate) fn take(&mut self) -> SeqResult<()> {
        match std::mem::take(self) {
            Removal::Ready => Ok(()),
            Removal::Idle => Err(nothing_to_remove()),
            Removal::Moved => {
                *self = Removal::Moved;
                Err(remove_after_lookahead())
            }
        }
    }
}

#[cfg(test)]
mod tests;
