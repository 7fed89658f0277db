use super::SplaySet;
use crate::SplayMap;
use crate::compare::{Comparator, NaturalOrder};
use crate::error::BuildError;

impl<T: Ord> SplaySet<T> {
    /// Builds a perfectly balanced set from strictly ascending elements.
    ///
    /// This is an extension and is not part of the standard `BTreeSet` API.
    ///
    /// # Panics
    ///
    /// Panics if the elements are not strictly ascending.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplaySet;
    ///
    /// let set = SplaySet::from_sorted_iter(1..=15);
    /// assert_eq!(set.height(), 4);
    /// ```
    pub fn from_sorted_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        SplaySet::from_sorted_iter_with_comparator(iter, NaturalOrder)
    }

    /// Builds a set from strictly ascending elements, reporting the first
    /// element that breaks the order.
    ///
    /// This is an extension and is not part of the standard `BTreeSet` API.
    ///
    /// # Errors
    ///
    /// Returns a [`BuildError`] naming the offending position.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::{BuildError, SplaySet};
    ///
    /// let err = SplaySet::try_from_sorted_iter([1, 3, 2]).unwrap_err();
    /// assert_eq!(err, BuildError::OutOfOrder { index: 2 });
    /// ```
    pub fn try_from_sorted_iter<I>(iter: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = T>,
    {
        SplaySet::try_from_sorted_iter_with_comparator(iter, NaturalOrder)
    }
}

impl<T, C: Comparator<T>> SplaySet<T, C> {
    /// Like [`from_sorted_iter`](SplaySet::from_sorted_iter), with elements
    /// ascending under `cmp`.
    ///
    /// # Panics
    ///
    /// Panics if the elements are not strictly ascending under `cmp`.
    pub fn from_sorted_iter_with_comparator<I>(iter: I, cmp: C) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        match SplaySet::try_from_sorted_iter_with_comparator(iter, cmp) {
            Ok(set) => set,
            Err(err) => panic!("`SplaySet::from_sorted_iter()` - {err}"),
        }
    }

    /// Like [`try_from_sorted_iter`](SplaySet::try_from_sorted_iter), with
    /// elements ascending under `cmp`.
    ///
    /// # Errors
    ///
    /// Returns a [`BuildError`] naming the offending position.
    pub fn try_from_sorted_iter_with_comparator<I>(iter: I, cmp: C) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = T>,
    {
        let map = SplayMap::try_from_sorted_iter_with_comparator(iter.into_iter().map(|elem| (elem, ())), cmp)?;
        Ok(SplaySet { map })
    }
}
