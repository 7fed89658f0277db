use super::SplaySet;
use crate::SplayMap;
use crate::compare::NaturalOrder;

impl<T> SplaySet<T> {
    /// Creates an empty set with capacity for at least `capacity` elements.
    ///
    /// This is an extension and is not part of the standard `BTreeSet` API.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplaySet;
    ///
    /// let set: SplaySet<i32> = SplaySet::with_capacity(32);
    /// assert!(set.is_empty());
    /// assert!(set.capacity() >= 32);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        SplaySet::with_capacity_and_comparator(capacity, NaturalOrder)
    }
}

impl<T, C> SplaySet<T, C> {
    /// Creates an empty set ordered by `cmp` with capacity for at least
    /// `capacity` elements.
    ///
    /// This is an extension and is not part of the standard `BTreeSet` API.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::{ReverseOrder, SplaySet};
    ///
    /// let mut set = SplaySet::with_capacity_and_comparator(8, ReverseOrder);
    /// set.extend([1, 3, 2]);
    /// assert!(set.capacity() >= 8);
    /// assert_eq!(set.first(), Some(&3));
    /// ```
    #[must_use]
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        SplaySet {
            map: SplayMap::with_capacity_and_comparator(capacity, cmp),
        }
    }

    /// Returns the number of elements the set can hold without reallocating.
    ///
    /// This is an extension and is not part of the standard `BTreeSet` API.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.map.capacity()
    }
}
