//! Sequences of two-part elements.
//!
//! [`PairSequence`] wraps a [`Sequence`] of [`PairLike`] elements and adds
//! left/right forms of the predicate, mapper and consumer operations. The two
//! aliases cover the usual element shapes:
//!
//! - [`BiSequence<L, R>`](BiSequence) over [`Pair<L, R>`]
//! - [`EntrySequence<K, V>`](EntrySequence) over `(K, V)` tuples
//!
//! Everything else is forwarded to the inner sequence, including the reuse
//! mode and the removal link to a backing list.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::{BuildHasher, Hash};

use strand_core::error::illegal_argument;
use strand_core::{BoxCursor, IntoCursor, Pair, PairLike, SeqResult, SharedList};

use crate::sequence::{Iter, Reuse, Sequence};

/// Sequence of [`Pair`]s.
pub type BiSequence<L, R> = PairSequence<Pair<L, R>>;

/// Sequence of `(key, value)` entries.
pub type EntrySequence<K, V> = PairSequence<(K, V)>;

/// A [`Sequence`] of two-part elements.
pub struct PairSequence<P> {
    inner: Sequence<P>,
}

impl<P> Clone for PairSequence<P> {
    fn clone(&self) -> Self {
        PairSequence {
            inner: self.inner.clone(),
        }
    }
}

impl<P> fmt::Debug for PairSequence<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PairSequence").field(&self.inner).finish()
    }
}

impl<P: PairLike + Clone + 'static> PairSequence<P> {
    // ── Construction ──

    /// Views `inner` as a pair sequence.
    pub fn from_sequence(inner: Sequence<P>) -> Self {
        PairSequence { inner }
    }

    /// A reiterable pair sequence with no elements.
    pub fn empty() -> Self {
        Self::from_sequence(Sequence::empty())
    }

    /// A reiterable sequence over `items`.
    pub fn of(items: impl Into<Vec<P>>) -> Self {
        Self::from_sequence(Sequence::of(items))
    }

    /// A single-element sequence.
    pub fn of_pair(left: P::Left, right: P::Right) -> Self {
        Self::of(vec![P::from_parts(left, right)])
    }

    /// Copies `entries` into a reiterable sequence.
    pub fn from_entries(entries: impl IntoIterator<Item = (P::Left, P::Right)>) -> Self {
        Self::of(
            entries
                .into_iter()
                .map(|(left, right)| P::from_parts(left, right))
                .collect::<Vec<_>>(),
        )
    }

    /// Copies the entries of `map`, in the map's iteration order.
    pub fn from_map<S: BuildHasher>(map: &HashMap<P::Left, P::Right, S>) -> Self
    where
        P::Left: Clone,
        P::Right: Clone,
    {
        Self::from_entries(map.iter().map(|(k, v)| (k.clone(), v.clone())))
    }

    /// A live view over `list`. Removal edits the list.
    pub fn from_list(list: &SharedList<P>) -> Self {
        Self::from_sequence(Sequence::from_list(list))
    }

    /// A once-only sequence draining `items`.
    pub fn once<I>(items: I) -> Self
    where
        I: IntoIterator<Item = P>,
        I::IntoIter: 'static,
    {
        Self::from_sequence(Sequence::once(items))
    }

    /// Drains `items` now into a live, removable copy.
    pub fn cache(items: impl IntoIterator<Item = P>) -> Self {
        Self::from_sequence(Sequence::cache(items))
    }

    /// `(left, right)`, then `step(left, right)` applied to each previous pair.
    pub fn recurse(
        left: P::Left,
        right: P::Right,
        step: impl Fn(&P::Left, &P::Right) -> P + 'static,
    ) -> Self {
        Self::from_sequence(Sequence::recurse(P::from_parts(left, right), move |previous: &P| {
            step(previous.left(), previous.right())
        }))
    }

    /// The underlying one-argument sequence.
    pub fn as_sequence(&self) -> &Sequence<P> {
        &self.inner
    }

    /// A clone of the underlying sequence, sharing its factory.
    pub fn to_sequence(&self) -> Sequence<P> {
        self.inner.clone()
    }

    /// Whether this sequence can be traversed more than once.
    pub fn reuse(&self) -> Reuse {
        self.inner.reuse()
    }

    /// Whether both share one cursor factory.
    pub fn same_instance(&self, other: &Self) -> bool {
        self.inner.same_instance(&other.inner)
    }

    /// Opens a fresh traversal.
    pub fn cursor(&self) -> BoxCursor<P> {
        self.inner.cursor()
    }

    /// A standard iterator of results over a fresh traversal.
    pub fn iter(&self) -> Iter<P> {
        self.inner.iter()
    }

    // ── Shape-preserving forwards ──

    /// Same as [`Sequence::skip`].
    pub fn skip(&self, count: usize) -> Self {
        Self::from_sequence(self.inner.skip(count))
    }

    /// Same as [`Sequence::skip_tail`].
    pub fn skip_tail(&self, count: usize) -> Self {
        Self::from_sequence(self.inner.skip_tail(count))
    }

    /// Same as [`Sequence::limit`].
    pub fn limit(&self, count: usize) -> Self {
        Self::from_sequence(self.inner.limit(count))
    }

    /// Same as [`Sequence::limit_tail`].
    pub fn limit_tail(&self, count: usize) -> Self {
        Self::from_sequence(self.inner.limit_tail(count))
    }

    /// Same as [`Sequence::step`].
    pub fn step(&self, step: usize) -> SeqResult<Self> {
        self.inner.step(step).map(Self::from_sequence)
    }

    /// Same as [`Sequence::distinct`].
    pub fn distinct(&self) -> Self
    where
        P: Eq + Hash,
    {
        Self::from_sequence(self.inner.distinct())
    }

    /// Same as [`Sequence::sorted`].
    pub fn sorted(&self) -> Self
    where
        P: Ord,
    {
        Self::from_sequence(self.inner.sorted())
    }

    /// Same as [`Sequence::sorted_by`].
    pub fn sorted_by(&self, compare: impl Fn(&P, &P) -> Ordering + 'static) -> Self {
        Self::from_sequence(self.inner.sorted_by(compare))
    }

    /// Same as [`Sequence::reverse`].
    pub fn reverse(&self) -> Self {
        Self::from_sequence(self.inner.reverse())
    }

    /// Same as [`Sequence::shuffle`].
    #[cfg(feature = "shuffle")]
    pub fn shuffle(&self) -> Self {
        Self::from_sequence(self.inner.shuffle())
    }

    /// Same as [`Sequence::shuffle_seeded`].
    #[cfg(feature = "shuffle")]
    pub fn shuffle_seeded(&self, seed: u64) -> Self {
        Self::from_sequence(self.inner.shuffle_seeded(seed))
    }

    /// Same as [`Sequence::repeat`].
    pub fn repeat(&self) -> Self {
        Self::from_sequence(self.inner.repeat())
    }

    /// Same as [`Sequence::repeat_times`].
    pub fn repeat_times(&self, times: usize) -> Self {
        Self::from_sequence(self.inner.repeat_times(times))
    }

    /// Same as [`Sequence::append`].
    pub fn append(&self, other: &Self) -> Self {
        Self::from_sequence(self.inner.append(&other.inner))
    }

    /// Same as [`Sequence::append_iter`].
    pub fn append_iter<I>(&self, items: I) -> Self
    where
        I: IntoIterator<Item = P>,
        I::IntoIter: 'static,
    {
        Self::from_sequence(self.inner.append_iter(items))
    }

    /// Same as [`Sequence::interleave`].
    pub fn interleave(&self, other: &Self) -> Self {
        Self::from_sequence(self.inner.interleave(&other.inner))
    }

    /// Same as [`Sequence::window`].
    pub fn window(&self, size: usize) -> SeqResult<Sequence<Self>> {
        Ok(self.inner.window(size)?.map(Self::from_sequence))
    }

    /// Same as [`Sequence::window_step`].
    pub fn window_step(&self, size: usize, step: usize) -> SeqResult<Sequence<Self>> {
        Ok(self.inner.window_step(size, step)?.map(Self::from_sequence))
    }

    /// Same as [`Sequence::batch`].
    pub fn batch(&self, size: usize) -> SeqResult<Sequence<Self>> {
        Ok(self.inner.batch(size)?.map(Self::from_sequence))
    }

    /// Splits around elements equal to `separator`, dropping them.
    pub fn split(&self, separator: P) -> Sequence<Self>
    where
        P: PartialEq,
    {
        self.inner.split(separator).map(Self::from_sequence)
    }

    /// Same as [`Sequence::until`].
    pub fn until(&self, terminal: P) -> Self
    where
        P: PartialEq,
    {
        Self::from_sequence(self.inner.until(terminal))
    }

    /// Same as [`Sequence::ending_at`].
    pub fn ending_at(&self, terminal: P) -> Self
    where
        P: PartialEq,
    {
        Self::from_sequence(self.inner.ending_at(terminal))
    }

    /// Same as [`Sequence::starting_after`].
    pub fn starting_after(&self, start: P) -> Self
    where
        P: PartialEq,
    {
        Self::from_sequence(self.inner.starting_after(start))
    }

    /// Same as [`Sequence::starting_from`].
    pub fn starting_from(&self, start: P) -> Self
    where
        P: PartialEq,
    {
        Self::from_sequence(self.inner.starting_from(start))
    }

    // ── Two-argument chaining ──

    /// Keeps pairs whose parts match `predicate`.
    pub fn filter(&self, predicate: impl Fn(&P::Left, &P::Right) -> bool + 'static) -> Self {
        Self::from_sequence(self.inner.filter(move |p| predicate(p.left(), p.right())))
    }

    /// Keeps pairs matching `predicate`, taking the pair whole.
    pub fn filter_pair(&self, predicate: impl Fn(&P) -> bool + 'static) -> Self {
        Self::from_sequence(self.inner.filter(predicate))
    }

    /// Like [`filter`](Self::filter), with the zero-based upstream position.
    pub fn filter_indexed(
        &self,
        predicate: impl Fn(&P::Left, &P::Right, usize) -> bool + 'static,
    ) -> Self {
        Self::from_sequence(
            self.inner
                .filter_indexed(move |p, index| predicate(p.left(), p.right(), index)),
        )
    }

    /// Maps both parts into a new two-part element.
    pub fn map<Q>(&self, mapper: impl Fn(P::Left, P::Right) -> Q + 'static) -> PairSequence<Q>
    where
        Q: PairLike + Clone + 'static,
    {
        PairSequence::from_sequence(self.inner.map(move |p| {
            let (left, right) = p.into_parts();
            mapper(left, right)
        }))
    }

    /// Maps whole pairs to another two-part element.
    pub fn map_pair<Q>(&self, mapper: impl Fn(P) -> Q + 'static) -> PairSequence<Q>
    where
        Q: PairLike + Clone + 'static,
    {
        PairSequence::from_sequence(self.inner.map(mapper))
    }

    /// Like [`map`](Self::map), with the zero-based position.
    pub fn map_indexed<Q>(
        &self,
        mapper: impl Fn(P::Left, P::Right, usize) -> Q + 'static,
    ) -> PairSequence<Q>
    where
        Q: PairLike + Clone + 'static,
    {
        PairSequence::from_sequence(self.inner.map_indexed(move |p, index| {
            let (left, right) = p.into_parts();
            mapper(left, right, index)
        }))
    }

    /// Maps each element to a plain value, leaving the pair world.
    pub fn to_sequence_with<T: 'static>(
        &self,
        mapper: impl Fn(P::Left, P::Right) -> T + 'static,
    ) -> Sequence<T> {
        self.inner.map(move |p| {
            let (left, right) = p.into_parts();
            mapper(left, right)
        })
    }

    /// Expands each pair into any number of two-part elements.
    pub fn flat_map<Q, I>(&self, expand: impl Fn(P::Left, P::Right) -> I + 'static) -> PairSequence<Q>
    where
        Q: PairLike + Clone + 'static,
        I: IntoCursor<Item = Q>,
    {
        PairSequence::from_sequence(self.inner.flat_map(move |p| {
            let (left, right) = p.into_parts();
            expand(left, right)
        }))
    }

    /// Runs `action` on both parts of each pair as it passes through.
    pub fn peek(&self, action: impl Fn(&P::Left, &P::Right) + 'static) -> Self {
        Self::from_sequence(self.inner.peek(move |p| action(p.left(), p.right())))
    }

    /// Runs `action` on each whole pair as it passes through.
    pub fn peek_pair(&self, action: impl Fn(&P) + 'static) -> Self {
        Self::from_sequence(self.inner.peek(action))
    }

    /// Pairs before the first one whose parts match `is_terminal`.
    pub fn until_by(&self, is_terminal: impl Fn(&P::Left, &P::Right) -> bool + 'static) -> Self {
        Self::from_sequence(self.inner.until_by(move |p| is_terminal(p.left(), p.right())))
    }

    /// Pairs up to and including the first one whose parts match `is_terminal`.
    pub fn ending_at_by(&self, is_terminal: impl Fn(&P::Left, &P::Right) -> bool + 'static) -> Self {
        Self::from_sequence(
            self.inner
                .ending_at_by(move |p| is_terminal(p.left(), p.right())),
        )
    }

    /// Pairs after the first one whose parts match `is_start`.
    pub fn starting_after_by(&self, is_start: impl Fn(&P::Left, &P::Right) -> bool + 'static) -> Self {
        Self::from_sequence(
            self.inner
                .starting_after_by(move |p| is_start(p.left(), p.right())),
        )
    }

    /// Pairs from the first one whose parts match `is_start` on.
    pub fn starting_from_by(&self, is_start: impl Fn(&P::Left, &P::Right) -> bool + 'static) -> Self {
        Self::from_sequence(
            self.inner
                .starting_from_by(move |p| is_start(p.left(), p.right())),
        )
    }

    /// Starts a new group between neighbours `a` and `b` whenever `cut(a, b)` holds.
    pub fn batch_by(&self, cut: impl Fn(&P, &P) -> bool + 'static) -> Sequence<Self> {
        self.inner.batch_by(cut).map(Self::from_sequence)
    }

    /// [`batch_by`](Self::batch_by) with the neighbours' parts spelled out.
    pub fn batch_by_parts(
        &self,
        cut: impl Fn(&P::Left, &P::Right, &P::Left, &P::Right) -> bool + 'static,
    ) -> Sequence<Self> {
        self.batch_by(move |a, b| cut(a.left(), a.right(), b.left(), b.right()))
    }

    /// Splits into groups at pairs whose parts match `is_separator`, dropping them.
    pub fn split_by(&self, is_separator: impl Fn(&P::Left, &P::Right) -> bool + 'static) -> Sequence<Self> {
        self.inner
            .split_by(move |p| is_separator(p.left(), p.right()))
            .map(Self::from_sequence)
    }

    // ── Terminals ──

    /// Same as [`Sequence::to_list`].
    pub fn to_list(&self) -> SeqResult<Vec<P>> {
        self.inner.to_list()
    }

    /// Same as [`Sequence::count`].
    pub fn count(&self) -> SeqResult<usize> {
        self.inner.count()
    }

    /// Same as [`Sequence::is_empty`].
    pub fn is_empty(&self) -> SeqResult<bool> {
        self.inner.is_empty()
    }

    /// Same as [`Sequence::first`].
    pub fn first(&self) -> SeqResult<Option<P>> {
        self.inner.first()
    }

    /// Same as [`Sequence::last`].
    pub fn last(&self) -> SeqResult<Option<P>> {
        self.inner.last()
    }

    /// Same as [`Sequence::at`].
    pub fn at(&self, index: usize) -> SeqResult<Option<P>> {
        self.inner.at(index)
    }

    /// The first pair whose parts match `predicate`.
    pub fn first_by(&self, mut predicate: impl FnMut(&P::Left, &P::Right) -> bool) -> SeqResult<Option<P>> {
        self.inner.first_by(|p| predicate(p.left(), p.right()))
    }

    /// The last pair whose parts match `predicate`.
    pub fn last_by(&self, mut predicate: impl FnMut(&P::Left, &P::Right) -> bool) -> SeqResult<Option<P>> {
        self.inner.last_by(|p| predicate(p.left(), p.right()))
    }

    /// The `index`-th pair whose parts match `predicate`, counting from zero.
    pub fn at_by(
        &self,
        index: usize,
        mut predicate: impl FnMut(&P::Left, &P::Right) -> bool,
    ) -> SeqResult<Option<P>> {
        self.inner.at_by(index, |p| predicate(p.left(), p.right()))
    }

    /// Whether some pair's parts match `predicate`.
    pub fn any(&self, mut predicate: impl FnMut(&P::Left, &P::Right) -> bool) -> SeqResult<bool> {
        self.inner.any(|p| predicate(p.left(), p.right()))
    }

    /// Whether every pair's parts match `predicate`.
    pub fn all(&self, mut predicate: impl FnMut(&P::Left, &P::Right) -> bool) -> SeqResult<bool> {
        self.inner.all(|p| predicate(p.left(), p.right()))
    }

    /// Whether no pair's parts match `predicate`.
    pub fn none(&self, mut predicate: impl FnMut(&P::Left, &P::Right) -> bool) -> SeqResult<bool> {
        self.inner.none(|p| predicate(p.left(), p.right()))
    }

    /// Same as [`Sequence::contains`].
    pub fn contains(&self, pair: &P) -> SeqResult<bool>
    where
        P: PartialEq,
    {
        self.inner.contains(pair)
    }

    /// Whether some pair has exactly these parts.
    pub fn contains_parts(&self, left: &P::Left, right: &P::Right) -> SeqResult<bool>
    where
        P::Left: PartialEq,
        P::Right: PartialEq,
    {
        self.inner.any(|p| p.left() == left && p.right() == right)
    }

    /// Calls `action` with the parts of every pair.
    pub fn for_each(&self, mut action: impl FnMut(P::Left, P::Right)) -> SeqResult<()> {
        self.inner.for_each(|p| {
            let (left, right) = p.into_parts();
            action(left, right);
        })
    }

    /// Same as [`Sequence::reduce`].
    pub fn reduce(&self, op: impl FnMut(P, P) -> P) -> SeqResult<Option<P>> {
        self.inner.reduce(op)
    }

    /// Reduces with both neighbours' parts spelled out.
    pub fn reduce_parts(
        &self,
        mut op: impl FnMut(P::Left, P::Right, P::Left, P::Right) -> P,
    ) -> SeqResult<Option<P>> {
        self.inner.reduce(|a, b| {
            let (l1, r1) = a.into_parts();
            let (l2, r2) = b.into_parts();
            op(l1, r1, l2, r2)
        })
    }

    /// Left parts become keys; a later duplicate key overwrites the earlier value.
    pub fn to_map(&self) -> SeqResult<HashMap<P::Left, P::Right>>
    where
        P::Left: Eq + Hash,
    {
        self.inner.collect_with(HashMap::new(), |map, p| {
            let (left, right) = p.into_parts();
            map.insert(left, right);
        })
    }

    /// Like [`to_map`](Self::to_map), but sorted by left part.
    pub fn to_sorted_map(&self) -> SeqResult<BTreeMap<P::Left, P::Right>>
    where
        P::Left: Ord,
    {
        self.inner.collect_with(BTreeMap::new(), |map, p| {
            let (left, right) = p.into_parts();
            map.insert(left, right);
        })
    }

    /// Like [`to_map`](Self::to_map) but combines the values of duplicate keys with `merge`.
    pub fn to_merged_map(
        &self,
        mut merge: impl FnMut(P::Right, P::Right) -> P::Right,
    ) -> SeqResult<HashMap<P::Left, P::Right>>
    where
        P::Left: Eq + Hash,
    {
        self.inner.collect_with(HashMap::new(), |map, p| {
            let (left, right) = p.into_parts();
            let merged = match map.remove(&left) {
                Some(existing) => merge(existing, right),
                None => right,
            };
            map.insert(left, merged);
        })
    }

    /// Groups right parts by left part, keeping encounter order within each group.
    pub fn to_grouped_map(&self) -> SeqResult<HashMap<P::Left, Vec<P::Right>>>
    where
        P::Left: Eq + Hash,
    {
        self.inner.collect_with(HashMap::new(), |map, p| {
            let (left, right) = p.into_parts();
            map.entry(left).or_default().push(right);
        })
    }

    // ── Removal ──

    /// Removes every pair this view yields from its backing store.
    pub fn clear(&self) -> SeqResult<()> {
        self.inner.clear()
    }

    /// Removes pairs whose parts match `predicate`. Reports whether any was removed.
    pub fn remove_if(&self, mut predicate: impl FnMut(&P::Left, &P::Right) -> bool) -> SeqResult<bool> {
        self.inner.remove_if(|p| predicate(p.left(), p.right()))
    }

    /// Keeps only pairs whose parts match `predicate`.
    pub fn retain_if(&self, mut predicate: impl FnMut(&P::Left, &P::Right) -> bool) -> SeqResult<bool> {
        self.inner.retain_if(|p| predicate(p.left(), p.right()))
    }
}

impl<T, P> PairSequence<P>
where
    P: PairLike<Left = T, Right = T> + Clone + 'static,
{
    /// Pairs up consecutive items: `[a, b, c, d]` becomes `(a, b), (c, d)`.
    ///
    /// Fails if `items` has an odd length.
    pub fn from_flat(items: Vec<T>) -> SeqResult<Self> {
        if items.len() % 2 != 0 {
            return Err(illegal_argument(
                "items",
                format!("expected an even number of items, got {}", items.len()),
            ));
        }
        let mut pairs = Vec::with_capacity(items.len() / 2);
        let mut items = items.into_iter();
        while let (Some(left), Some(right)) = (items.next(), items.next()) {
            pairs.push(P::from_parts(left, right));
        }
        Ok(Self::of(pairs))
    }
}

// ── BiSequence ──

impl<L: Clone + 'static, R: Clone + 'static> PairSequence<Pair<L, R>> {
    /// Maps left parts, keeping right parts.
    pub fn map_left<A: Clone + 'static>(&self, mapper: impl Fn(L) -> A + 'static) -> BiSequence<A, R> {
        self.map_pair(move |p| {
            let (left, right) = p.into_parts();
            Pair::new(mapper(left), right)
        })
    }

    /// Maps right parts, keeping left parts.
    pub fn map_right<B: Clone + 'static>(&self, mapper: impl Fn(R) -> B + 'static) -> BiSequence<L, B> {
        self.map_pair(move |p| {
            let (left, right) = p.into_parts();
            Pair::new(left, mapper(right))
        })
    }

    /// Maps each side with its own function.
    pub fn map_parts<A, B>(
        &self,
        left: impl Fn(L) -> A + 'static,
        right: impl Fn(R) -> B + 'static,
    ) -> BiSequence<A, B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
    {
        self.map_pair(move |p| p.map_parts(&left, &right))
    }

    /// Expands each left part into several, each paired with the original right part.
    pub fn flatten_left<A, I>(&self, expand: impl Fn(L) -> I + 'static) -> BiSequence<A, R>
    where
        A: Clone + 'static,
        I: IntoIterator<Item = A>,
        I::IntoIter: 'static,
    {
        PairSequence::from_sequence(self.as_sequence().flat_map_iter(move |p: Pair<L, R>| {
            let (left, right) = p.into_parts();
            expand(left)
                .into_iter()
                .map(move |a| Pair::new(a, right.clone()))
        }))
    }

    /// Expands each right part into several, each paired with the original left part.
    pub fn flatten_right<B, I>(&self, expand: impl Fn(R) -> I + 'static) -> BiSequence<L, B>
    where
        B: Clone + 'static,
        I: IntoIterator<Item = B>,
        I::IntoIter: 'static,
    {
        PairSequence::from_sequence(self.as_sequence().flat_map_iter(move |p: Pair<L, R>| {
            let (left, right) = p.into_parts();
            expand(right)
                .into_iter()
                .map(move |b| Pair::new(left.clone(), b))
        }))
    }

    /// Exchanges the parts of every pair.
    pub fn swap(&self) -> BiSequence<R, L> {
        self.map_pair(Pair::swap)
    }

    /// The same elements as `(left, right)` tuples.
    pub fn to_entry_sequence(&self) -> EntrySequence<L, R> {
        self.map_pair(Pair::into_parts)
    }
}

// ── EntrySequence ──

impl<K: Clone + 'static, V: Clone + 'static> PairSequence<(K, V)> {
    /// Maps keys, keeping values.
    pub fn map_keys<A: Clone + 'static>(&self, mapper: impl Fn(K) -> A + 'static) -> EntrySequence<A, V> {
        self.map_pair(move |(key, value)| (mapper(key), value))
    }

    /// Maps values, keeping keys.
    pub fn map_values<B: Clone + 'static>(&self, mapper: impl Fn(V) -> B + 'static) -> EntrySequence<K, B> {
        self.map_pair(move |(key, value)| (key, mapper(value)))
    }

    /// Expands each key into several, each paired with the original value.
    pub fn flatten_keys<A, I>(&self, expand: impl Fn(K) -> I + 'static) -> EntrySequence<A, V>
    where
        A: Clone + 'static,
        I: IntoIterator<Item = A>,
        I::IntoIter: 'static,
    {
        PairSequence::from_sequence(self.as_sequence().flat_map_iter(move |(key, value): (K, V)| {
            expand(key).into_iter().map(move |a| (a, value.clone()))
        }))
    }

    /// Expands each value into several, each paired with the original key.
    pub fn flatten_values<B, I>(&self, expand: impl Fn(V) -> I + 'static) -> EntrySequence<K, B>
    where
        B: Clone + 'static,
        I: IntoIterator<Item = B>,
        I::IntoIter: 'static,
    {
        PairSequence::from_sequence(self.as_sequence().flat_map_iter(move |(key, value): (K, V)| {
            expand(value).into_iter().map(move |b| (key.clone(), b))
        }))
    }

    /// The same elements as [`Pair`]s.
    pub fn to_bi_sequence(&self) -> BiSequence<K, V> {
        self.map_pair(Pair::from_entry)
    }
}

impl<P: 'static> IntoCursor for PairSequence<P> {
    type Item = P;

    fn into_cursor(self) -> BoxCursor<P> {
        self.inner.cursor()
    }
}

impl<P: 'static> IntoIterator for &PairSequence<P> {
    type Item = SeqResult<P>;
    type IntoIter = Iter<P>;

    fn into_iter(self) -> Iter<P> {
        self.inner.iter()
    }
}

impl<P: PairLike + Clone + 'static> From<Sequence<P>> for PairSequence<P> {
    fn from(inner: Sequence<P>) -> Self {
        Self::from_sequence(inner)
    }
}
