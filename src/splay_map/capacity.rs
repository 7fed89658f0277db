use super::SplayMap;
use crate::compare::NaturalOrder;
use crate::raw::RawSplayTree;

impl<K, V> SplayMap<K, V> {
    /// Creates an empty map with capacity for at least `capacity` elements.
    ///
    /// This is an extension and is not part of the standard `BTreeMap` API.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplayMap;
    ///
    /// let map: SplayMap<i32, i32> = SplayMap::with_capacity(32);
    /// assert!(map.is_empty());
    /// assert!(map.capacity() >= 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        SplayMap::with_capacity_and_comparator(capacity, NaturalOrder)
    }
}

impl<K, V, C> SplayMap<K, V, C> {
    /// Creates an empty map ordered by `cmp` with capacity for at least
    /// `capacity` elements.
    ///
    /// This is an extension and is not part of the standard `BTreeMap` API.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::{ReverseOrder, SplayMap};
    ///
    /// let mut map = SplayMap::with_capacity_and_comparator(8, ReverseOrder);
    /// map.extend([(1, ()), (2, ())]);
    /// assert_eq!(map.first_key_value(), Some((&2, &())));
    /// ```
    #[must_use]
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        SplayMap {
            raw: RawSplayTree::with_capacity(capacity, cmp),
        }
    }

    /// Returns the number of elements the map can hold without reallocating.
    ///
    /// This is an extension and is not part of the standard `BTreeMap` API.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
