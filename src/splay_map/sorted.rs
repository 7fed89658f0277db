use super::SplayMap;
use crate::compare::{Comparator, NaturalOrder};
use crate::error::BuildError;
use crate::raw::RawSplayTree;

impl<K: Ord, V> SplayMap<K, V> {
    /// Builds a map from entries already in strictly ascending key order.
    ///
    /// The result is perfectly balanced: its height is ⌈log₂(n + 1)⌉.
    ///
    /// This is an extension and is not part of the standard `BTreeMap` API.
    ///
    /// # Panics
    ///
    /// Panics if the keys are not strictly ascending. Use
    /// [`try_from_sorted_iter`](SplayMap::try_from_sorted_iter) to handle that case.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplayMap;
    ///
    /// let map = SplayMap::from_sorted_iter([(1, 'a'), (2, 'b'), (3, 'c'), (4, 'd'), (5, 'e')]);
    /// assert_eq!(map.height(), 3);
    /// assert_eq!(map.keys().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
    /// ```
    pub fn from_sorted_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        SplayMap::from_sorted_iter_with_comparator(iter, NaturalOrder)
    }

    /// Builds a map from entries in strictly ascending key order, reporting
    /// the first entry that breaks the order.
    ///
    /// This is an extension and is not part of the standard `BTreeMap` API.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::OutOfOrder`] if a key is less than its
    /// predecessor and [`BuildError::Duplicate`] if it equals it.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::{BuildError, SplayMap};
    ///
    /// let ok = SplayMap::try_from_sorted_iter([(1, "a"), (2, "b")]);
    /// assert_eq!(ok.map(|m| m.len()), Ok(2));
    ///
    /// let err = SplayMap::try_from_sorted_iter([(1, "a"), (1, "b")]);
    /// assert_eq!(err.unwrap_err(), BuildError::Duplicate { index: 1 });
    /// ```
    pub fn try_from_sorted_iter<I>(iter: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        SplayMap::try_from_sorted_iter_with_comparator(iter, NaturalOrder)
    }
}

impl<K, V, C: Comparator<K>> SplayMap<K, V, C> {
    /// Like [`from_sorted_iter`](SplayMap::from_sorted_iter), with entries
    /// ascending under `cmp`.
    ///
    /// # Panics
    ///
    /// Panics if the keys are not strictly ascending under `cmp`.
    pub fn from_sorted_iter_with_comparator<I>(iter: I, cmp: C) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        match SplayMap::try_from_sorted_iter_with_comparator(iter, cmp) {
            Ok(map) => map,
            Err(err) => panic!("`SplayMap::from_sorted_iter()` - {err}"),
        }
    }

    /// Like [`try_from_sorted_iter`](SplayMap::try_from_sorted_iter), with
    /// entries ascending under `cmp`.
    ///
    /// # Errors
    ///
    /// Returns a [`BuildError`] naming the first entry that is not strictly
    /// greater than the one before it.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::{ReverseOrder, SplayMap};
    ///
    /// let map = SplayMap::try_from_sorted_iter_with_comparator([(3, ()), (2, ()), (1, ())], ReverseOrder)?;
    /// assert_eq!(map.keys().copied().collect::<Vec<_>>(), [3, 2, 1]);
    /// # Ok::<(), splay_tree::BuildError>(())
    /// ```
    pub fn try_from_sorted_iter_with_comparator<I>(iter: I, cmp: C) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Ok(SplayMap {
            raw: RawSplayTree::try_from_sorted(iter, cmp)?,
        })
    }
}
