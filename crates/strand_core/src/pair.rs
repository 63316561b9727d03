//! Two-part elements.
//!
//! [`Pair`] is the ordered left/right record carried by bi-sequences. Its
//! equality, hashing and ordering are structural: left first, then right.
//! With `Option` components, `None` sorts before any `Some`.
//!
//! [`PairLike`] lets the pair-sequence facade treat [`Pair`] and plain
//! `(K, V)` tuples uniformly.

use std::collections::HashMap;
use std::fmt;
use std::hash::{BuildHasher, Hash};

/// An immutable left/right pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pair<L, R> {
    left: L,
    right: R,
}

impl<L, R> Pair<L, R> {
    pub const fn new(left: L, right: R) -> Self {
        Pair { left, right }
    }

    /// Builds a pair from a `(key, value)` entry.
    pub fn from_entry((left, right): (L, R)) -> Self {
        Pair { left, right }
    }

    pub fn left(&self) -> &L {
        &self.left
    }

    pub fn right(&self) -> &R {
        &self.right
    }

    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }

    pub fn swap(self) -> Pair<R, L> {
        Pair::new(self.right, self.left)
    }

    pub fn with_left<N>(self, left: N) -> Pair<N, R> {
        Pair::new(left, self.right)
    }

    pub fn with_right<N>(self, right: N) -> Pair<L, N> {
        Pair::new(self.left, right)
    }

    /// Drops the left value, moves right into its place and appends `right`.
    pub fn shift_left<N>(self, right: N) -> Pair<R, N> {
        Pair::new(self.right, right)
    }

    /// Drops the right value, moves left into its place and prepends `left`.
    pub fn shift_right<N>(self, left: N) -> Pair<N, L> {
        Pair::new(left, self.left)
    }

    /// Maps each side independently.
    pub fn map_parts<A, B>(self, left: impl FnOnce(L) -> A, right: impl FnOnce(R) -> B) -> Pair<A, B> {
        Pair::new(left(self.left), right(self.right))
    }

    /// Maps both sides together into a new pair.
    pub fn map<A, B>(self, mapper: impl FnOnce(L, R) -> Pair<A, B>) -> Pair<A, B> {
        mapper(self.left, self.right)
    }

    /// Applies a two-argument function to the parts.
    pub fn apply<T>(self, function: impl FnOnce(L, R) -> T) -> T {
        function(self.left, self.right)
    }

    /// True when both side predicates accept their part.
    pub fn test_parts(&self, left: impl FnOnce(&L) -> bool, right: impl FnOnce(&R) -> bool) -> bool {
        left(&self.left) && right(&self.right)
    }

    pub fn test(&self, predicate: impl FnOnce(&L, &R) -> bool) -> bool {
        predicate(&self.left, &self.right)
    }

    /// Inserts this pair into `map` as an entry, returning the displaced value.
    pub fn put_into<S: BuildHasher>(self, map: &mut HashMap<L, R, S>) -> Option<R>
    where
        L: Eq + Hash,
    {
        map.insert(self.left, self.right)
    }
}

impl<T: Clone> Pair<T, T> {
    /// A pair with the same value on both sides.
    pub fn unary(value: T) -> Self {
        Pair::new(value.clone(), value)
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Pair<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.left, self.right)
    }
}

impl<L, R> From<(L, R)> for Pair<L, R> {
    fn from(entry: (L, R)) -> Self {
        Pair::from_entry(entry)
    }
}

impl<L, R> From<Pair<L, R>> for (L, R) {
    fn from(pair: Pair<L, R>) -> Self {
        pair.into_parts()
    }
}

// ── PairLike ──

/// An element with a left (key) part and a right (value) part.
pub trait PairLike {
    type Left;
    type Right;

    fn left(&self) -> &Self::Left;
    fn right(&self) -> &Self::Right;
    fn into_parts(self) -> (Self::Left, Self::Right);
    fn from_parts(left: Self::Left, right: Self::Right) -> Self;
}

impl<L, R> PairLike for Pair<L, R> {
    type Left = L;
    type Right = R;

    fn left(&self) -> &L {
        &self.left
    }

    fn right(&self) -> &R {
        &self.right
    }

    fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }

    fn from_parts(left: L, right: R) -> Self {
        Pair::new(left, right)
    }
}

impl<K, V> PairLike for (K, V) {
    type Left = K;
    type Right = V;

    fn left(&self) -> &K {
        &self.0
    }

    fn right(&self) -> &V {
        &self.1
    }

    fn into_parts(self) -> (K, V) {
        self
    }

    fn from_parts(left: K, right: V) -> Self {
        (left, right)
    }
}

#[cfg(test)]
mod tests;
