//! Terminal operations. Each opens one traversal and drives it.
//!
//! Positional lookups (`first`, `at`, ...) return `Ok(None)` when the element
//! is absent. Errors are the cursor chain's own, passed through unchanged.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt::Display;
use std::hash::Hash;

use rustc_hash::FxHashSet;
use strand_core::{Cursor, SeqResult};

use super::Sequence;

impl<T: 'static> Sequence<T> {
    /// Calls `action` on every element in order.
    pub fn for_each(&self, mut action: impl FnMut(T)) -> SeqResult<()> {
        let mut cursor = self.cursor();
        while cursor.has_next()? {
            action(cursor.next()?);
        }
        Ok(())
    }

    // ── Collecting ──

    /// Collects every element into a `Vec`, in traversal order.
    pub fn to_list(&self) -> SeqResult<Vec<T>> {
        self.iter().collect()
    }

    /// Collects into a `HashSet`, dropping duplicates.
    pub fn to_set(&self) -> SeqResult<HashSet<T>>
    where
        T: Eq + Hash,
    {
        self.iter().collect()
    }

    /// Collects into a `BTreeSet`, sorted and without duplicates.
    pub fn to_sorted_set(&self) -> SeqResult<BTreeSet<T>>
    where
        T: Ord,
    {
        self.iter().collect()
    }

    /// Collects into a fresh `C`, inserting one element at a time.
    pub fn to_collection<C: Default + Extend<T>>(&self) -> SeqResult<C> {
        self.collect_into(C::default())
    }

    /// Appends every element to `target` and hands it back.
    pub fn collect_into<C: Extend<T>>(&self, mut target: C) -> SeqResult<C> {
        self.for_each(|item| target.extend(std::iter::once(item)))?;
        Ok(target)
    }

    /// Folds every element into `container` with `add`.
    pub fn collect_with<C>(&self, mut container: C, mut add: impl FnMut(&mut C, T)) -> SeqResult<C> {
        self.for_each(|item| add(&mut container, item))?;
        Ok(container)
    }

    /// Builds a map; later elements overwrite earlier ones with the same key.
    pub fn to_map<K, V>(
        &self,
        mut key: impl FnMut(&T) -> K,
        mut value: impl FnMut(T) -> V,
    ) -> SeqResult<HashMap<K, V>>
    where
        K: Eq + Hash,
    {
        self.collect_with(HashMap::new(), |map, item| {
            map.insert(key(&item), value(item));
        })
    }

    /// Like [`Sequence::to_map`], but sorted by key.
    pub fn to_sorted_map<K, V>(
        &self,
        mut key: impl FnMut(&T) -> K,
        mut value: impl FnMut(T) -> V,
    ) -> SeqResult<BTreeMap<K, V>>
    where
        K: Ord,
    {
        self.collect_with(BTreeMap::new(), |map, item| {
            map.insert(key(&item), value(item));
        })
    }

    /// The elements' `Display` forms separated by `delimiter`.
    pub fn join(&self, delimiter: &str) -> SeqResult<String>
    where
        T: Display,
    {
        self.join_with("", delimiter, "")
    }

    /// `prefix`, the elements separated by `delimiter`, then `suffix`.
    pub fn join_with(&self, prefix: &str, delimiter: &str, suffix: &str) -> SeqResult<String>
    where
        T: Display,
    {
        let mut out = String::from(prefix);
        let mut first = true;
        self.for_each(|item| {
            if !first {
                out.push_str(delimiter);
            }
            first = false;
            out.push_str(&item.to_string());
        })?;
        out.push_str(suffix);
        Ok(out)
    }

    // ── Reducing ──

    /// Combines all elements pairwise from the left. `None` if there are none.
    pub fn reduce(&self, mut op: impl FnMut(T, T) -> T) -> SeqResult<Option<T>> {
        let mut acc = None;
        self.for_each(|item| {
            acc = Some(match acc.take() {
                Some(previous) => op(previous, item),
                None => item,
            });
        })?;
        Ok(acc)
    }

    /// Combines all elements onto `identity`. An empty sequence gives back `identity`.
    pub fn fold<A>(&self, identity: A, mut op: impl FnMut(A, T) -> A) -> SeqResult<A> {
        let mut cursor = self.cursor();
        let mut acc = identity;
        while cursor.has_next()? {
            acc = op(acc, cursor.next()?);
        }
        Ok(acc)
    }

    /// Number of elements.
    pub fn count(&self) -> SeqResult<usize> {
        self.cursor().skip(usize::MAX)
    }

    /// Whether the sequence yields nothing. Opens a traversal but pulls no element.
    pub fn is_empty(&self) -> SeqResult<bool> {
        Ok(!self.cursor().has_next()?)
    }

    /// The smallest element; the first of several equal ones.
    pub fn min(&self) -> SeqResult<Option<T>>
    where
        T: Ord,
    {
        self.min_by(T::cmp)
    }

    /// The largest element; the last of several equal ones.
    pub fn max(&self) -> SeqResult<Option<T>>
    where
        T: Ord,
    {
        self.max_by(T::cmp)
    }

    /// The smallest element by `compare`; the first of several equal ones.
    pub fn min_by(&self, mut compare: impl FnMut(&T, &T) -> Ordering) -> SeqResult<Option<T>> {
        self.reduce(|best, item| {
            if compare(&item, &best) == Ordering::Less {
                item
            } else {
                best
            }
        })
    }

    /// The largest element by `compare`; the last of several equal ones.
    pub fn max_by(&self, mut compare: impl FnMut(&T, &T) -> Ordering) -> SeqResult<Option<T>> {
        self.reduce(|best, item| {
            if compare(&item, &best) == Ordering::Less {
                best
            } else {
                item
            }
        })
    }

    // ── Positional ──

    /// The first element, if any.
    pub fn first(&self) -> SeqResult<Option<T>> {
        self.at(0)
    }

    /// The second element, if any.
    pub fn second(&self) -> SeqResult<Option<T>> {
        self.at(1)
    }

    /// The third element, if any.
    pub fn third(&self) -> SeqResult<Option<T>> {
        self.at(2)
    }

    /// The element at zero-based `index`.
    pub fn at(&self, index: usize) -> SeqResult<Option<T>> {
        let mut cursor = self.cursor();
        if cursor.skip(index)? < index || !cursor.has_next()? {
            return Ok(None);
        }
        cursor.next().map(Some)
    }

    /// The last element. Drives the whole traversal.
    pub fn last(&self) -> SeqResult<Option<T>> {
        let mut last = None;
        self.for_each(|item| last = Some(item))?;
        Ok(last)
    }

    /// The first element matching `predicate`.
    pub fn first_by(&self, predicate: impl FnMut(&T) -> bool) -> SeqResult<Option<T>> {
        self.at_by(0, predicate)
    }

    /// The `index`-th element among those matching `predicate`.
    pub fn at_by(&self, index: usize, mut predicate: impl FnMut(&T) -> bool) -> SeqResult<Option<T>> {
        let mut cursor = self.cursor();
        let mut remaining = index;
        while cursor.has_next()? {
            let item = cursor.next()?;
            if predicate(&item) {
                if remaining == 0 {
                    return Ok(Some(item));
                }
                remaining -= 1;
            }
        }
        Ok(None)
    }

    /// The last element matching `predicate`.
    pub fn last_by(&self, mut predicate: impl FnMut(&T) -> bool) -> SeqResult<Option<T>> {
        let mut last = None;
        self.for_each(|item| {
            if predicate(&item) {
                last = Some(item);
            }
        })?;
        Ok(last)
    }

    // ── Matching ──

    /// Whether some element matches. Stops at the first match.
    pub fn any(&self, mut predicate: impl FnMut(&T) -> bool) -> SeqResult<bool> {
        let mut cursor = self.cursor();
        while cursor.has_next()? {
            if predicate(&cursor.next()?) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Whether every element matches. True for an empty sequence.
    pub fn all(&self, mut predicate: impl FnMut(&T) -> bool) -> SeqResult<bool> {
        Ok(!self.any(|item| !predicate(item))?)
    }

    /// Whether no element matches.
    pub fn none(&self, predicate: impl FnMut(&T) -> bool) -> SeqResult<bool> {
        Ok(!self.any(predicate)?)
    }

    /// Whether some element equals `item`.
    pub fn contains(&self, item: &T) -> SeqResult<bool>
    where
        T: PartialEq,
    {
        self.any(|candidate| candidate == item)
    }

    /// Whether every one of `items` occurs. Vacuously true for no items.
    pub fn contains_all(&self, items: impl IntoIterator<Item = T>) -> SeqResult<bool>
    where
        T: Eq + Hash,
    {
        let mut wanted: FxHashSet<T> = items.into_iter().collect();
        if wanted.is_empty() {
            return Ok(true);
        }
        let mut cursor = self.cursor();
        while cursor.has_next()? {
            wanted.remove(&cursor.next()?);
            if wanted.is_empty() {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Whether at least one of `items` occurs. False for no items.
    pub fn contains_any(&self, items: impl IntoIterator<Item = T>) -> SeqResult<bool>
    where
        T: Eq + Hash,
    {
        let wanted: FxHashSet<T> = items.into_iter().collect();
        self.any(|item| wanted.contains(item))
    }

    // ── Removal through the backing link ──

    /// Removes every element this view yields from its backing store.
    pub fn clear(&self) -> SeqResult<()> {
        self.remove_if(|_| true)?;
        Ok(())
    }

    /// Removes the first element equal to `item`.
    pub fn remove(&self, item: &T) -> SeqResult<bool>
    where
        T: PartialEq,
    {
        let mut cursor = self.cursor();
        while cursor.has_next()? {
            if cursor.next()? == *item {
                cursor.remove()?;
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Removes every element contained in `items`. Reports whether any was removed.
    pub fn remove_all(&self, items: impl IntoIterator<Item = T>) -> SeqResult<bool>
    where
        T: Eq + Hash,
    {
        let doomed: FxHashSet<T> = items.into_iter().collect();
        self.remove_if(|item| doomed.contains(item))
    }

    /// Removes every element not contained in `items`. Reports whether any was removed.
    pub fn retain_all(&self, items: impl IntoIterator<Item = T>) -> SeqResult<bool>
    where
        T: Eq + Hash,
    {
        let kept: FxHashSet<T> = items.into_iter().collect();
        self.remove_if(|item| !kept.contains(item))
    }

    /// Removes every element matching `predicate`. Reports whether any was removed.
    pub fn remove_if(&self, mut predicate: impl FnMut(&T) -> bool) -> SeqResult<bool> {
        let mut cursor = self.cursor();
        let mut removed = false;
        while cursor.has_next()? {
            if predicate(&cursor.next()?) {
                cursor.remove()?;
                removed = true;
            }
        }
        Ok(removed)
    }

    /// Keeps only elements matching `predicate`, removing the rest.
    pub fn retain_if(&self, mut predicate: impl FnMut(&T) -> bool) -> SeqResult<bool> {
        self.remove_if(|item| !predicate(item))
    }
}
