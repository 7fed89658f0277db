use core::borrow::Borrow;

use super::SplayMap;
use crate::compare::Comparator;

impl<K, V, C> SplayMap<K, V, C> {
    /// Returns the entry with the greatest key strictly less than `key`.
    ///
    /// `key` need not be present. The search splays the nearest key to the
    /// root, then takes at most one further walk down a subtree.
    ///
    /// This is an extension and is not part of the standard `BTreeMap` API.
    ///
    /// # Complexity
    ///
    /// O(log n) amortized
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplayMap;
    ///
    /// let mut map: SplayMap<_, _> = SplayMap::from([(1, 'a'), (3, 'c'), (5, 'e')]);
    /// assert_eq!(map.predecessor(&3), Some((&1, &'a')));
    /// assert_eq!(map.predecessor(&4), Some((&3, &'c')));
    /// assert_eq!(map.predecessor(&1), None);
    /// ```
    pub fn predecessor<Q>(&mut self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.raw.predecessor(key)
    }

    /// Returns the entry with the least key strictly greater than `key`.
    ///
    /// This is an extension and is not part of the standard `BTreeMap` API.
    ///
    /// # Complexity
    ///
    /// O(log n) amortized
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplayMap;
    ///
    /// let mut map: SplayMap<_, _> = SplayMap::from([(1, 'a'), (3, 'c'), (5, 'e')]);
    /// assert_eq!(map.successor(&3), Some((&5, &'e')));
    /// assert_eq!(map.successor(&0), Some((&1, &'a')));
    /// assert_eq!(map.successor(&5), None);
    /// ```
    pub fn successor<Q>(&mut self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.raw.successor(key)
    }

    /// Returns the entry currently at the root, without restructuring.
    ///
    /// After any successful lookup or insert this is the entry just touched.
    ///
    /// This is an extension and is not part of the standard `BTreeMap` API.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplayMap;
    ///
    /// let mut map: SplayMap<_, _> = (0..10).map(|k| (k, k * k)).collect();
    /// map.get(&7);
    /// assert_eq!(map.root_key_value(), Some((&7, &49)));
    /// ```
    #[must_use]
    pub fn root_key_value(&self) -> Option<(&K, &V)> {
        self.raw.root_entry()
    }

    /// Returns the number of nodes on the longest path from the root to a
    /// leaf, or 0 for an empty map.
    ///
    /// Splay trees keep no balance information, so this walks the whole tree.
    ///
    /// This is an extension and is not part of the standard `BTreeMap` API.
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
    /// let mut map = SplayMap::new();
    /// for k in 0..7 {
    ///     map.insert(k, ());
    /// }
    /// // Ascending inserts leave a path.
    /// assert_eq!(map.height(), 7);
    ///
    /// let balanced = SplayMap::from_sorted_iter((0..7).map(|k| (k, ())));
    /// assert_eq!(balanced.height(), 3);
    /// ```
    #[must_use]
    pub fn height(&self) -> usize {
        self.raw.height()
    }
}
