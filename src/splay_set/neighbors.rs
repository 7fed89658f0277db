use core::borrow::Borrow;

use super::SplaySet;
use crate::compare::Comparator;

impl<T, C> SplaySet<T, C> {
    /// Returns the greatest element strictly less than `value`.
    ///
    /// This is an extension and is not part of the standard `BTreeSet` API.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplaySet;
    ///
    /// let mut set: SplaySet<_> = SplaySet::from([10, 20, 30]);
    /// assert_eq!(set.predecessor(&25), Some(&20));
    /// assert_eq!(set.predecessor(&10), None);
    /// ```
    pub fn predecessor<Q>(&mut self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.map.predecessor(value).map(|(k, ())| k)
    }

    /// Returns the least element strictly greater than `value`.
    ///
    /// This is an extension and is not part of the standard `BTreeSet` API.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplaySet;
    ///
    /// let mut set: SplaySet<_> = SplaySet::from([10, 20, 30]);
    /// assert_eq!(set.successor(&20), Some(&30));
    /// assert_eq!(set.successor(&30), None);
    /// ```
    pub fn successor<Q>(&mut self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.map.successor(value).map(|(k, ())| k)
    }

    /// Returns the element currently at the root, without restructuring.
    ///
    /// This is an extension and is not part of the standard `BTreeSet` API.
    #[must_use]
    pub fn root(&self) -> Option<&T> {
        self.map.root_key_value().map(|(k, ())| k)
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    ///
    /// This is an extension and is not part of the standard `BTreeSet` API.
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn height(&self) -> usize {
        self.map.height()
    }
}
