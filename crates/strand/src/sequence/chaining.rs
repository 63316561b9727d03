//! Chaining operations. Each returns a new sequence and touches no elements.

use std::cmp::Ordering;
use std::hash::Hash;
use std::rc::Rc;

use rustc_hash::FxHashSet;
use strand_core::error::require_positive;
use strand_core::transform::{
    Adjacent, BatchBy, Buffered, CursorThunk, Distinct, EndingAt, Filter, Flatten, Interleave,
    Limit, LimitTail, Map, MapIndexed, Peek, Repeat, Skip, SkipTail, Split, Starting, Step, Until,
    UntilNone, Window,
};
use strand_core::{BoxCursor, EmptyCursor, IntoCursor, IterCursor, Pair, SeqResult};

use super::{boxed, Sequence};
use crate::pair_sequence::{BiSequence, EntrySequence, PairSequence};
use crate::primitive::{CharSeq, DoubleSequence, IntSequence, LongSequence};

impl<T: Clone + 'static> Sequence<T> {
    /// Wraps each traversal of `self` in the cursor built by `wrap`.
    fn derive<U: 'static>(&self, wrap: impl Fn(BoxCursor<T>) -> BoxCursor<U> + 'static) -> Sequence<U> {
        let upstream = self.clone();
        Sequence::with_factory(self.reuse, move || wrap(upstream.cursor()))
    }

    /// An empty sequence with the reuse mode of `self`.
    fn emptied(&self) -> Sequence<T> {
        Sequence::with_factory(self.reuse, || boxed(EmptyCursor::new()))
    }

    // ── Positional ──

    /// Drops the first `count` elements. `skip(0)` is `self`.
    pub fn skip(&self, count: usize) -> Sequence<T> {
        if count == 0 {
            return self.clone();
        }
        self.derive(move |source| boxed(Skip::new(source, count)))
    }

    /// Drops the last `count` elements. `skip_tail(0)` is `self`.
    pub fn skip_tail(&self, count: usize) -> Sequence<T> {
        if count == 0 {
            return self.clone();
        }
        self.derive(move |source| boxed(SkipTail::new(source, count)))
    }

    /// Keeps at most the first `count` elements. `limit(0)` never opens `self`.
    pub fn limit(&self, count: usize) -> Sequence<T> {
        if count == 0 {
            return self.emptied();
        }
        self.derive(move |source| boxed(Limit::new(source, count)))
    }

    /// Keeps at most the last `count` elements.
    pub fn limit_tail(&self, count: usize) -> Sequence<T> {
        if count == 0 {
            return self.emptied();
        }
        self.derive(move |source| boxed(LimitTail::new(source, count)))
    }

    /// Every `step`-th element, starting with the first.
    pub fn step(&self, step: usize) -> SeqResult<Sequence<T>> {
        let step = require_positive("step", step)?;
        if step == 1 {
            return Ok(self.clone());
        }
        Ok(self.derive(move |source| boxed(Step::new(source, step))))
    }

    // ── Filtering ──

    /// Keeps the elements matching `predicate`. Removal passes through.
    pub fn filter(&self, predicate: impl Fn(&T) -> bool + 'static) -> Sequence<T> {
        let predicate = Rc::new(predicate);
        self.derive(move |source| {
            let predicate = Rc::clone(&predicate);
            boxed(Filter::new(source, move |item: &T, _: usize| predicate(item)))
        })
    }

    /// Filters with the zero-based position of each element in `self`.
    pub fn filter_indexed(&self, predicate: impl Fn(&T, usize) -> bool + 'static) -> Sequence<T> {
        let predicate = Rc::new(predicate);
        self.derive(move |source| {
            let predicate = Rc::clone(&predicate);
            boxed(Filter::new(source, move |item: &T, index: usize| {
                predicate(item, index)
            }))
        })
    }

    /// Keeps elements found in `items`.
    pub fn including(&self, items: impl IntoIterator<Item = T>) -> Sequence<T>
    where
        T: Eq + Hash,
    {
        let allowed: FxHashSet<T> = items.into_iter().collect();
        self.filter(move |item| allowed.contains(item))
    }

    /// Drops elements found in `items`.
    pub fn excluding(&self, items: impl IntoIterator<Item = T>) -> Sequence<T>
    where
        T: Eq + Hash,
    {
        let denied: FxHashSet<T> = items.into_iter().collect();
        self.filter(move |item| !denied.contains(item))
    }

    /// Drops repeats, keeping each element's first occurrence.
    pub fn distinct(&self) -> Sequence<T>
    where
        T: Eq + Hash,
    {
        self.derive(|source| boxed(Distinct::new(source)))
    }

    // ── Mapping ──

    /// Transforms every element. `mapper` runs once per pulled element.
    pub fn map<U: 'static>(&self, mapper: impl Fn(T) -> U + 'static) -> Sequence<U> {
        let mapper = Rc::new(mapper);
        self.derive(move |source| {
            let mapper = Rc::clone(&mapper);
            boxed(Map::new(source, move |item: T| mapper(item)))
        })
    }

    /// Maps with the zero-based position of each element.
    pub fn map_indexed<U: 'static>(&self, mapper: impl Fn(T, usize) -> U + 'static) -> Sequence<U> {
        let mapper = Rc::new(mapper);
        self.derive(move |source| {
            let mapper = Rc::clone(&mapper);
            boxed(MapIndexed::new(source, move |item: T, index: usize| {
                mapper(item, index)
            }))
        })
    }

    /// Runs `action` on each element as it passes through.
    pub fn peek(&self, action: impl Fn(&T) + 'static) -> Sequence<T> {
        let action = Rc::new(action);
        self.derive(move |source| {
            let action = Rc::clone(&action);
            boxed(Peek::new(source, move |item: &T, _: usize| action(item)))
        })
    }

    /// Like [`peek`](Self::peek), with the zero-based position.
    pub fn peek_indexed(&self, action: impl Fn(&T, usize) + 'static) -> Sequence<T> {
        let action = Rc::new(action);
        self.derive(move |source| {
            let action = Rc::clone(&action);
            boxed(Peek::new(source, move |item: &T, index: usize| action(item, index)))
        })
    }

    /// Maps to an [`IntSequence`].
    pub fn to_ints(&self, mapper: impl Fn(T) -> i32 + 'static) -> IntSequence {
        self.map(mapper)
    }

    /// Maps to a [`LongSequence`].
    pub fn to_longs(&self, mapper: impl Fn(T) -> i64 + 'static) -> LongSequence {
        self.map(mapper)
    }

    /// Maps to a [`DoubleSequence`].
    pub fn to_doubles(&self, mapper: impl Fn(T) -> f64 + 'static) -> DoubleSequence {
        self.map(mapper)
    }

    /// Maps to a [`CharSeq`].
    pub fn to_chars(&self, mapper: impl Fn(T) -> char + 'static) -> CharSeq {
        self.map(mapper)
    }

    /// Maps every element to a [`Pair`], giving a [`BiSequence`].
    pub fn to_bi_sequence<L, R>(&self, mapper: impl Fn(T) -> Pair<L, R> + 'static) -> BiSequence<L, R>
    where
        L: Clone + 'static,
        R: Clone + 'static,
    {
        PairSequence::from_sequence(self.map(mapper))
    }

    /// Maps every element to a `(key, value)` tuple, giving an [`EntrySequence`].
    pub fn to_entry_sequence<K, V>(&self, mapper: impl Fn(T) -> (K, V) + 'static) -> EntrySequence<K, V>
    where
        K: Clone + 'static,
        V: Clone + 'static,
    {
        PairSequence::from_sequence(self.map(mapper))
    }

    // ── Flattening ──

    /// Expands each element into the elements of `expand(element)`.
    ///
    /// `expand` runs only when the traversal reaches that element.
    pub fn flat_map<U, I>(&self, expand: impl Fn(T) -> I + 'static) -> Sequence<U>
    where
        U: 'static,
        I: IntoCursor<Item = U>,
    {
        let expand = Rc::new(expand);
        self.derive(move |source| {
            let expand = Rc::clone(&expand);
            boxed(Flatten::new(source, move |item: T| expand(item).into_cursor()))
        })
    }

    /// [`flat_map`](Self::flat_map) for expanders returning standard iterators.
    pub fn flat_map_iter<U, I>(&self, expand: impl Fn(T) -> I + 'static) -> Sequence<U>
    where
        U: 'static,
        I: IntoIterator<Item = U>,
        I::IntoIter: 'static,
    {
        let expand = Rc::new(expand);
        self.derive(move |source| {
            let expand = Rc::clone(&expand);
            boxed(Flatten::new(source, move |item: T| {
                boxed(IterCursor::new(expand(item).into_iter()))
            }))
        })
    }

    /// Concatenates the elements of each element.
    pub fn flatten(&self) -> Sequence<T::Item>
    where
        T: IntoCursor,
        T::Item: 'static,
    {
        self.flat_map(|item| item)
    }

    // ── Combining ──

    /// `self` followed by `other`. `other` is opened only once `self` runs out.
    pub fn append(&self, other: &Sequence<T>) -> Sequence<T> {
        Sequence::concat([self.clone(), other.clone()])
    }

    /// `self` followed by a once-only tail drained from `items`.
    pub fn append_iter<I>(&self, items: I) -> Sequence<T>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        self.append(&Sequence::once(items))
    }

    /// Alternates elements of `self` and `other`, continuing with the longer one.
    pub fn interleave(&self, other: &Sequence<T>) -> Sequence<T> {
        let (first, second) = (self.clone(), other.clone());
        Sequence::with_factory(self.reuse.combine(other.reuse), move || {
            let (first, second) = (first.clone(), second.clone());
            let sources: [CursorThunk<T>; 2] = [
                Box::new(move || first.cursor()),
                Box::new(move || second.cursor()),
            ];
            boxed(Interleave::new(sources))
        })
    }

    /// Repeats `self` lap after lap until a lap comes back empty.
    ///
    /// Each lap opens a fresh traversal, so a source that shrinks between laps
    /// yields shorter laps, and a once-only source stops after its first lap.
    pub fn repeat(&self) -> Sequence<T> {
        self.repeat_laps(None)
    }

    /// Repeats `self` at most `times` laps.
    pub fn repeat_times(&self, times: usize) -> Sequence<T> {
        if times == 0 {
            return self.emptied();
        }
        self.repeat_laps(Some(times))
    }

    fn repeat_laps(&self, laps: Option<usize>) -> Sequence<T> {
        let upstream = self.clone();
        Sequence::with_factory(self.reuse, move || {
            let upstream = upstream.clone();
            boxed(Repeat::new(move || upstream.cursor(), laps))
        })
    }

    // ── Reordering ──

    /// Stable sort in natural order.
    pub fn sorted(&self) -> Sequence<T>
    where
        T: Ord,
    {
        self.derive(|source| boxed(Buffered::new(source, |items: &mut Vec<T>| items.sort())))
    }

    /// Stable sort by `compare`.
    pub fn sorted_by(&self, compare: impl Fn(&T, &T) -> Ordering + 'static) -> Sequence<T> {
        let compare = Rc::new(compare);
        self.derive(move |source| {
            let compare = Rc::clone(&compare);
            boxed(Buffered::new(source, move |items: &mut Vec<T>| {
                items.sort_by(|a, b| compare(a, b));
            }))
        })
    }

    /// Stable sort by an extracted key.
    pub fn sorted_by_key<K: Ord>(&self, key: impl Fn(&T) -> K + 'static) -> Sequence<T> {
        let key = Rc::new(key);
        self.derive(move |source| {
            let key = Rc::clone(&key);
            boxed(Buffered::new(source, move |items: &mut Vec<T>| {
                items.sort_by_key(|item| key(item));
            }))
        })
    }

    /// The elements in reverse order. Buffers the whole traversal.
    pub fn reverse(&self) -> Sequence<T> {
        self.derive(|source| boxed(Buffered::new(source, |items: &mut Vec<T>| items.reverse())))
    }

    // ── Grouping ──

    /// Sliding windows of `size`, one element apart. Same as [`window_step`](Self::window_step) with step 1.
    pub fn window(&self, size: usize) -> SeqResult<Sequence<Sequence<T>>> {
        self.window_step(size, 1)
    }

    /// Sliding windows of `size`, `step` elements apart.
    ///
    /// The last window may be short. An empty sequence has no windows.
    pub fn window_step(&self, size: usize, step: usize) -> SeqResult<Sequence<Sequence<T>>> {
        let size = require_positive("size", size)?;
        let step = require_positive("step", step)?;
        Ok(self.derive(move |source| {
            boxed(Map::new(Window::new(source, size, step), |group: Vec<T>| {
                Sequence::of(group)
            }))
        }))
    }

    /// Alias for [`window`](Self::window).
    pub fn partition(&self, size: usize) -> SeqResult<Sequence<Sequence<T>>> {
        self.window(size)
    }

    /// Consecutive, non-overlapping groups of `size`. The last may be short.
    pub fn batch(&self, size: usize) -> SeqResult<Sequence<Sequence<T>>> {
        self.window_step(size, size)
    }

    /// Groups runs of elements, starting a new group between `a` and `b`
    /// whenever `cut(a, b)` holds.
    pub fn batch_by(&self, cut: impl Fn(&T, &T) -> bool + 'static) -> Sequence<Sequence<T>> {
        let cut = Rc::new(cut);
        self.derive(move |source| {
            let cut = Rc::clone(&cut);
            let batches = BatchBy::new(source, move |a: &T, b: &T| cut(a, b));
            boxed(Map::new(batches, |group: Vec<T>| Sequence::of(group)))
        })
    }

    /// Splits around elements equal to `separator`, dropping them.
    pub fn split(&self, separator: T) -> Sequence<Sequence<T>>
    where
        T: PartialEq,
    {
        self.split_by(move |item| *item == separator)
    }

    /// Splits around elements matching `is_separator`, dropping them.
    pub fn split_by(&self, is_separator: impl Fn(&T) -> bool + 'static) -> Sequence<Sequence<T>> {
        let is_separator = Rc::new(is_separator);
        self.derive(move |source| {
            let is_separator = Rc::clone(&is_separator);
            let groups = Split::new(source, move |item: &T| is_separator(item));
            boxed(Map::new(groups, |group: Vec<T>| Sequence::of(group)))
        })
    }

    /// Overlapping neighbour pairs `(a, b), (b, c), ...`.
    pub fn adjacent_pairs(&self) -> BiSequence<T, T> {
        PairSequence::from_sequence(self.derive(|source| {
            boxed(Map::new(Adjacent::new(source), |(left, right): (T, T)| {
                Pair::new(left, right)
            }))
        }))
    }

    // ── Boundaries ──

    /// Elements before the first one equal to `terminal`.
    pub fn until(&self, terminal: T) -> Sequence<T>
    where
        T: PartialEq,
    {
        self.until_by(move |item| *item == terminal)
    }

    /// Elements before the first one matching `is_terminal`.
    pub fn until_by(&self, is_terminal: impl Fn(&T) -> bool + 'static) -> Sequence<T> {
        let is_terminal = Rc::new(is_terminal);
        self.derive(move |source| {
            let is_terminal = Rc::clone(&is_terminal);
            boxed(Until::new(source, move |item: &T| is_terminal(item)))
        })
    }

    /// Elements up to and including the first one equal to `terminal`.
    pub fn ending_at(&self, terminal: T) -> Sequence<T>
    where
        T: PartialEq,
    {
        self.ending_at_by(move |item| *item == terminal)
    }

    /// Elements up to and including the first one matching `is_terminal`.
    pub fn ending_at_by(&self, is_terminal: impl Fn(&T) -> bool + 'static) -> Sequence<T> {
        let is_terminal = Rc::new(is_terminal);
        self.derive(move |source| {
            let is_terminal = Rc::clone(&is_terminal);
            boxed(EndingAt::new(source, move |item: &T| is_terminal(item)))
        })
    }

    /// Elements after the first one equal to `start`. Empty if there is none.
    pub fn starting_after(&self, start: T) -> Sequence<T>
    where
        T: PartialEq,
    {
        self.starting_after_by(move |item| *item == start)
    }

    /// Elements after the first one matching `is_start`.
    pub fn starting_after_by(&self, is_start: impl Fn(&T) -> bool + 'static) -> Sequence<T> {
        self.starting(is_start, false)
    }

    /// Elements from the first one equal to `start` on. Empty if there is none.
    pub fn starting_from(&self, start: T) -> Sequence<T>
    where
        T: PartialEq,
    {
        self.starting_from_by(move |item| *item == start)
    }

    /// Elements from the first one matching `is_start` on.
    pub fn starting_from_by(&self, is_start: impl Fn(&T) -> bool + 'static) -> Sequence<T> {
        self.starting(is_start, true)
    }

    fn starting(&self, is_start: impl Fn(&T) -> bool + 'static, inclusive: bool) -> Sequence<T> {
        let is_start = Rc::new(is_start);
        self.derive(move |source| {
            let is_start = Rc::clone(&is_start);
            boxed(Starting::new(source, move |item: &T| is_start(item), inclusive))
        })
    }
}

impl<T: Clone + 'static> Sequence<Option<T>> {
    /// Unwraps elements up to the first `None`.
    pub fn until_none(&self) -> Sequence<T> {
        let upstream = self.clone();
        Sequence::with_factory(self.reuse(), move || boxed(UntilNone::new(upstream.cursor())))
    }
}

// ── Shuffling ──

#[cfg(feature = "shuffle")]
mod shuffle {
    use std::cell::RefCell;
    use std::rc::Rc;

    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256PlusPlus;
    use strand_core::transform::Buffered;

    use super::{boxed, Sequence};

    impl<T: Clone + 'static> Sequence<T> {
        /// Random order from the thread-local generator, different on every traversal.
        pub fn shuffle(&self) -> Sequence<T> {
            self.derive(|source| {
                boxed(Buffered::new(source, |items: &mut Vec<T>| {
                    items.shuffle(&mut rand::rng());
                }))
            })
        }

        /// Random order fixed by `seed`: every traversal yields the same order.
        pub fn shuffle_seeded(&self, seed: u64) -> Sequence<T> {
            self.shuffle_with(move || seed)
        }

        /// Random order seeded by `seed()` at the start of each traversal.
        pub fn shuffle_with(&self, seed: impl Fn() -> u64 + 'static) -> Sequence<T> {
            let seed = Rc::new(seed);
            self.derive(move |source| {
                let seed = Rc::clone(&seed);
                boxed(Buffered::new(source, move |items: &mut Vec<T>| {
                    items.shuffle(&mut Xoshiro256PlusPlus::seed_from_u64(seed()));
                }))
            })
        }

        /// Random order drawn from one generator shared by all traversals.
        ///
        /// Successive traversals differ, but the run as a whole is reproducible
        /// when `rng` is seeded.
        pub fn shuffle_using<R: Rng + 'static>(&self, rng: R) -> Sequence<T> {
            let rng = Rc::new(RefCell::new(rng));
            self.derive(move |source| {
                let rng = Rc::clone(&rng);
                boxed(Buffered::new(source, move |items: &mut Vec<T>| {
                    items.shuffle(&mut *rng.borrow_mut());
                }))
            })
        }
    }
}
