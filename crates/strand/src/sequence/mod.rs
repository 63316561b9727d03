//! The [`Sequence`] facade.
//!
//! A `Sequence<T>` owns no elements. It is a shared cursor factory: every
//! traversal asks the factory for a fresh cursor chain, pulls through it, and
//! drops it. Chaining methods wrap the factory in a new one and return
//! immediately; terminal methods open one cursor and drive it to the end.
//!
//! # Reuse
//!
//! Whether a second traversal sees the same elements depends on the source,
//! and is fixed when the sequence is built (see [`Reuse`]). Collections,
//! slices and generator functions are [`Reuse::Reiterable`]. A handed-in
//! iterator can only be drained once, so sequences over one are
//! [`Reuse::OnceOnly`]: the first traversal consumes it and later ones find
//! only what earlier traversals left behind. Chained sequences inherit the
//! mode of their upstream.

use std::fmt;
use std::rc::Rc;

use strand_core::transform::{Chain, CursorThunk, Generate, Recurse};
use strand_core::{
    share, BoxCursor, Cursor, CursorIter, EmptyCursor, IntoCursor, IterCursor,
    SharedIterCursor, SharedList, SliceCursor,
};

use crate::stack::ensure_sufficient_stack;

mod chaining;
mod terminal;

/// Whether a sequence can be traversed more than once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reuse {
    /// Every traversal starts over from the source.
    Reiterable,
    /// Traversals share one consumable source.
    OnceOnly,
}

impl Reuse {
    /// `OnceOnly` if either side is.
    pub fn combine(self, other: Reuse) -> Reuse {
        if self == Reuse::OnceOnly || other == Reuse::OnceOnly {
            Reuse::OnceOnly
        } else {
            Reuse::Reiterable
        }
    }
}

/// Standard iterator over a sequence traversal. Yields `Err` once on failure.
pub type Iter<T> = CursorIter<BoxCursor<T>>;

type Factory<T> = Rc<dyn Fn() -> BoxCursor<T>>;

/// A lazy, chainable view over some source of elements.
pub struct Sequence<T> {
    factory: Factory<T>,
    reuse: Reuse,
}

/// Erases a concrete cursor.
pub(crate) fn boxed<C: Cursor + 'static>(cursor: C) -> BoxCursor<C::Item> {
    Box::new(cursor)
}

impl<T: 'static> Sequence<T> {
    pub(crate) fn with_factory(reuse: Reuse, factory: impl Fn() -> BoxCursor<T> + 'static) -> Self {
        Sequence {
            factory: Rc::new(factory),
            reuse,
        }
    }

    /// A reiterable sequence whose traversals each start from `open()`.
    pub fn from_cursors(open: impl Fn() -> BoxCursor<T> + 'static) -> Self {
        Self::with_factory(Reuse::Reiterable, open)
    }

    /// A reiterable sequence with no elements.
    pub fn empty() -> Self {
        Self::from_cursors(|| boxed(EmptyCursor::new()))
    }

    /// A reiterable sequence over whatever `source()` yields, called once per traversal.
    ///
    /// `source` is called again for every traversal, so a source whose contents
    /// change between calls is reflected as-is.
    pub fn from_iterable<F, I>(source: F) -> Self
    where
        F: Fn() -> I + 'static,
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        Self::from_cursors(move || boxed(IterCursor::new(source().into_iter())))
    }

    /// A once-only sequence draining `items`.
    ///
    /// Traversals share the iterator: abandoning one midway leaves the rest
    /// for the next, and a full traversal leaves nothing.
    pub fn once<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        let shared = share(items.into_iter());
        Self::with_factory(Reuse::OnceOnly, move || {
            boxed(SharedIterCursor::new(Rc::clone(&shared)))
        })
    }

    /// Concatenates `sequences`. Each is opened only when the traversal reaches it.
    pub fn concat(sequences: impl IntoIterator<Item = Sequence<T>>) -> Self {
        let sequences: Rc<[Sequence<T>]> = sequences.into_iter().collect();
        let reuse = sequences
            .iter()
            .fold(Reuse::Reiterable, |reuse, sequence| reuse.combine(sequence.reuse));
        Self::with_factory(reuse, move || {
            let sources = sequences.iter().map(|sequence| {
                let sequence = sequence.clone();
                Box::new(move || sequence.cursor()) as CursorThunk<T>
            });
            boxed(Chain::new(sources))
        })
    }

    /// An infinite sequence pulling from one shared `supplier`.
    ///
    /// All traversals call the same supplier, so a stateful supplier picks up
    /// where the previous traversal stopped.
    pub fn generate(supplier: impl Fn() -> T + 'static) -> Self {
        let supplier = Rc::new(supplier);
        Self::from_cursors(move || {
            let supplier = Rc::clone(&supplier);
            boxed(Generate::new(move || supplier()))
        })
    }

    /// An infinite sequence that builds a fresh supplier for every traversal.
    pub fn multi_generate<F, G>(factory: F) -> Self
    where
        F: Fn() -> G + 'static,
        G: FnMut() -> T + 'static,
    {
        Self::from_cursors(move || boxed(Generate::new(factory())))
    }

    /// Whether this sequence can be traversed more than once.
    pub fn reuse(&self) -> Reuse {
        self.reuse
    }

    /// Whether both handles share the same cursor factory.
    pub fn same_instance(&self, other: &Sequence<T>) -> bool {
        Rc::ptr_eq(&self.factory, &other.factory)
    }

    /// Opens a new traversal.
    pub fn cursor(&self) -> BoxCursor<T> {
        ensure_sufficient_stack(|| (self.factory)())
    }

    /// Opens a new traversal as a standard iterator of results.
    pub fn iter(&self) -> Iter<T> {
        CursorIter::new(self.cursor())
    }
}

impl<T: Clone + 'static> Sequence<T> {
    /// A reiterable sequence over a fixed list of elements.
    pub fn of(items: impl Into<Vec<T>>) -> Self {
        let items: Rc<[T]> = items.into().into();
        Self::from_cursors(move || boxed(SliceCursor::new(Rc::clone(&items))))
    }

    /// A reiterable view over a live list. Removal through the view edits the list.
    pub fn from_list(list: &SharedList<T>) -> Self {
        let list = list.clone();
        Self::from_cursors(move || boxed(list.cursor()))
    }

    /// Drains `items` now and serves every traversal from the stored copy.
    ///
    /// The copy is a live list, so removal through the sequence works.
    pub fn cache<I: IntoIterator<Item = T>>(items: I) -> Self {
        let list: SharedList<T> = items.into_iter().collect();
        tracing::debug!(len = list.len(), "cached sequence source");
        Self::from_list(&list)
    }

    /// `seed, step(seed), step(step(seed)), ...`, never ending.
    pub fn recurse(seed: T, step: impl Fn(&T) -> T + 'static) -> Self {
        let step = Rc::new(step);
        Self::from_cursors(move || {
            let step = Rc::clone(&step);
            boxed(Recurse::new(seed.clone(), move |previous: &T| step(previous)))
        })
    }

    /// `f(seed), f(g(f(seed))), ...`: recursion through an intermediate type.
    ///
    /// `f` runs once per element and `g` once per step, each only when the
    /// element it produces is pulled.
    pub fn recurse_mapped<S, F, G>(seed: S, f: F, g: G) -> Self
    where
        S: Clone + 'static,
        F: Fn(S) -> T + 'static,
        G: Fn(T) -> S + 'static,
    {
        let f = Rc::new(f);
        let g = Rc::new(g);
        Self::from_cursors(move || {
            let (f, g) = (Rc::clone(&f), Rc::clone(&g));
            let first = {
                let (f, seed) = (Rc::clone(&f), seed.clone());
                move || f(seed)
            };
            boxed(Recurse::deferred(first, move |previous: &T| f(g(previous.clone()))))
        })
    }
}

impl<T> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        Sequence {
            factory: Rc::clone(&self.factory),
            reuse: self.reuse,
        }
    }
}

impl<T> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("reuse", &self.reuse)
            .finish_non_exhaustive()
    }
}

impl<T: 'static> Default for Sequence<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Clone + 'static> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self::of(items)
    }
}

impl<T: Clone + 'static> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::of(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T: 'static> IntoIterator for &Sequence<T> {
    type Item = strand_core::SeqResult<T>;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Iter<T> {
        self.iter()
    }
}

impl<T: 'static> IntoCursor for Sequence<T> {
    type Item = T;

    fn into_cursor(self) -> BoxCursor<T> {
        self.cursor()
    }
}
