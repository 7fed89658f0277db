use alloc::vec::Vec;
use core::borrow::Borrow;
use core::cmp::Ordering;
use core::ops::{Bound, RangeBounds};

use smallvec::SmallVec;

use super::arena::Arena;
use super::handle::Handle;
use super::node::Node;
use super::splay::splay;
use super::traversal::Traversal;
use crate::compare::Comparator;
use crate::error::BuildError;
use crate::trace::trace;

/// The core splay tree backing `SplayMap` and `SplaySet`.
#[derive(Clone)]
pub(crate) struct RawSplayTree<K, V, C> {
    /// Arena storing all tree nodes.
    nodes: Arena<Node<K>>,
    /// Arena storing all values, addressed by `Node::value`.
    values: Arena<V>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<Handle>,
    cmp: C,
}

impl<K, V, C> RawSplayTree<K, V, C> {
    /// Creates a new, empty tree.
    pub(crate) const fn new(cmp: C) -> Self {
        Self {
            nodes: Arena::new(),
            values: Arena::new(),
            root: None,
            cmp,
        }
    }

    /// Creates a new tree with room for `capacity` entries.
    pub(crate) fn with_capacity(capacity: usize, cmp: C) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            values: Arena::with_capacity(capacity),
            root: None,
            cmp,
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) const fn comparator(&self) -> &C {
        &self.cmp
    }

    pub(crate) fn clear(&mut self) {
        trace!(len = self.len(), "clearing tree");
        self.nodes.clear();
        self.values.clear();
        self.root = None;
    }

    pub(crate) const fn nodes(&self) -> &Arena<Node<K>> {
        &self.nodes
    }

    pub(crate) const fn values(&self) -> &Arena<V> {
        &self.values
    }

    /// Borrows the node arena shared and the value arena exclusively.
    pub(crate) fn split_mut(&mut self) -> (&Arena<Node<K>>, &mut Arena<V>) {
        (&self.nodes, &mut self.values)
    }

    /// Returns the entry stored at `handle`.
    pub(crate) fn entry(&self, handle: Handle) -> (&K, &V) {
        let node = self.nodes.get(handle);
        (node.key(), self.values.get(node.value()))
    }

    /// Returns the entry at the root without restructuring the tree.
    pub(crate) fn root_entry(&self) -> Option<(&K, &V)> {
        self.root.map(|root| self.entry(root))
    }

    /// Number of nodes on the longest root-to-leaf path. O(n), no splaying.
    pub(crate) fn height(&self) -> usize {
        let mut deepest = 0;
        let mut pending: SmallVec<[(Handle, usize); 32]> = SmallVec::new();
        if let Some(root) = self.root {
            pending.push((root, 1));
        }
        while let Some((handle, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            let node = self.nodes.get(handle);
            pending.extend([node.left(), node.right()].into_iter().flatten().map(|child| (child, depth + 1)));
        }
        deepest
    }

    /// A traversal over every entry in key order.
    pub(crate) fn traversal(&self) -> Traversal {
        Traversal::full(&self.nodes, self.root)
    }

    /// Splays the minimum to the root and returns it.
    fn splay_first(&mut self) -> Option<Handle> {
        let root = splay(&mut self.nodes, self.root?, |_| Ordering::Less);
        self.root = Some(root);
        Some(root)
    }

    /// Splays the maximum to the root and returns it.
    fn splay_last(&mut self) -> Option<Handle> {
        let root = splay(&mut self.nodes, self.root?, |_| Ordering::Greater);
        self.root = Some(root);
        Some(root)
    }

    pub(crate) fn first_key_value(&mut self) -> Option<(&K, &V)> {
        let root = self.splay_first()?;
        Some(self.entry(root))
    }

    pub(crate) fn last_key_value(&mut self) -> Option<(&K, &V)> {
        let root = self.splay_last()?;
        Some(self.entry(root))
    }

    pub(crate) fn pop_first(&mut self) -> Option<(K, V)> {
        let root = self.splay_first()?;
        Some(self.detach_root(root))
    }

    pub(crate) fn pop_last(&mut self) -> Option<(K, V)> {
        let root = self.splay_last()?;
        Some(self.detach_root(root))
    }

    /// Removes the root node and joins its subtrees.
    ///
    /// Every key in the left subtree is smaller than the departing root, so
    /// splaying that subtree toward the root's key brings its maximum up with
    /// a free right link to receive the right subtree.
    fn detach_root(&mut self, root: Handle) -> (K, V) {
        let (key, value, left, right) = self.nodes.take(root).into_parts();
        self.root = match left {
            None => right,
            Some(left) => {
                let joined = splay(&mut self.nodes, left, |_| Ordering::Greater);
                debug_assert!(self.nodes.get(joined).right().is_none());
                self.nodes.get_mut(joined).set_right(right);
                Some(joined)
            }
        };
        (key, self.values.take(value))
    }

    /// Allocates a node owning `key` and `value` with the given subtrees.
    ///
    /// # Panics
    ///
    /// Panics, leaving both arenas untouched, if either arena is out of handles.
    fn alloc_node(&mut self, key: K, value: V, left: Option<Handle>, right: Option<Handle>) -> Handle {
        assert!(
            !self.nodes.is_full() && !self.values.is_full(),
            "`RawSplayTree::alloc_node()` - tree is at maximum capacity ({})",
            Handle::MAX_SLOT + 1
        );
        let value = self.values.alloc(value);
        self.nodes.alloc(Node::new(key, value, left, right))
    }

    /// Builds a perfectly balanced subtree from the next `count` entries, in order.
    fn build_balanced<I>(&mut self, count: usize, entries: &mut I) -> Option<Handle>
    where
        I: Iterator<Item = (K, V)>,
    {
        if count == 0 {
            return None;
        }
        let left_count = count / 2;
        let left = self.build_balanced(left_count, entries);
        let (key, value) = entries.next()?;
        let right = self.build_balanced(count - left_count - 1, entries);
        Some(self.alloc_node(key, value, left, right))
    }

    /// Replaces the contents with `entries`, which must already be strictly ascending.
    fn rebuild(&mut self, entries: Vec<(K, V)>) {
        self.nodes.clear();
        self.values.clear();
        let count = entries.len();
        let mut entries = entries.into_iter();
        self.root = self.build_balanced(count, &mut entries);
    }

    /// Removes every entry, returning them in key order. O(n), no splaying.
    pub(crate) fn drain_to_vec(&mut self) -> Vec<(K, V)> {
        let mut result = Vec::with_capacity(self.len());
        let mut pending: SmallVec<[Handle; 32]> = SmallVec::new();
        let mut current = self.root.take();

        loop {
            while let Some(handle) = current {
                pending.push(handle);
                current = self.nodes.get(handle).left();
            }
            let Some(handle) = pending.pop() else { break };
            let (key, value, _, right) = self.nodes.take(handle).into_parts();
            result.push((key, self.values.take(value)));
            current = right;
        }

        self.nodes.clear();
        self.values.clear();
        result
    }

    /// Keeps only the entries for which `keep` returns `true`, then rebalances.
    ///
    /// Every verdict is collected before anything is moved, so a panicking
    /// predicate leaves the tree as it was.
    pub(crate) fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        let mut verdicts = Vec::with_capacity(self.len());
        let mut walk = self.traversal();
        while let Some(handle) = walk.next_front(&self.nodes) {
            let node = self.nodes.get(handle);
            verdicts.push(keep(node.key(), self.values.get_mut(node.value())));
        }

        let entries = self
            .drain_to_vec()
            .into_iter()
            .zip(verdicts)
            .filter_map(|(entry, kept)| kept.then_some(entry))
            .collect();
        self.rebuild(entries);
        trace!(len = self.len(), "retained entries");
    }
}

impl<K, V, C> RawSplayTree<K, V, C> {
    /// Splays toward `key` and reports how `key` compares with the new root's key.
    fn seek<Q>(&mut self, key: &Q) -> Option<(Handle, Ordering)>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        let cmp = &self.cmp;
        let root = splay(&mut self.nodes, self.root?, |probe| cmp.compare(key, probe.borrow()));
        self.root = Some(root);
        Some((root, cmp.compare(key, self.nodes.get(root).key().borrow())))
    }

    /// Splays toward `key` and returns the root if it holds `key`.
    fn find<Q>(&mut self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        match self.seek(key)? {
            (root, Ordering::Equal) => Some(root),
            _ => None,
        }
    }

    /// Plain binary search for `key`; the shape is left alone.
    pub(crate) fn peek<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            current = match self.cmp.compare(key, node.key().borrow()) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(self.entry(handle)),
            };
        }
        None
    }

    pub(crate) fn get_key_value<Q>(&mut self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        let root = self.find(key)?;
        Some(self.entry(root))
    }

    pub(crate) fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.get_key_value(key).map(|(_, value)| value)
    }

    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        let root = self.find(key)?;
        let value = self.nodes.get(root).value();
        Some(self.values.get_mut(value))
    }

    pub(crate) fn contains_key<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.find(key).is_some()
    }

    pub(crate) fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        let root = self.find(key)?;
        Some(self.detach_root(root))
    }

    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Greatest entry whose key is strictly less than `key`.
    pub(crate) fn predecessor<Q>(&mut self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        let (root, ord) = self.seek(key)?;
        let found = if ord == Ordering::Greater {
            Some(root)
        } else {
            self.nodes.get(root).left().map(|left| self.rightmost(left))
        };
        found.map(|handle| self.entry(handle))
    }

    /// Least entry whose key is strictly greater than `key`.
    pub(crate) fn successor<Q>(&mut self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        let (root, ord) = self.seek(key)?;
        let found = if ord == Ordering::Less {
            Some(root)
        } else {
            self.nodes.get(root).right().map(|right| self.leftmost(right))
        };
        found.map(|handle| self.entry(handle))
    }

    fn leftmost(&self, mut handle: Handle) -> Handle {
        while let Some(left) = self.nodes.get(handle).left() {
            handle = left;
        }
        handle
    }

    fn rightmost(&self, mut handle: Handle) -> Handle {
        while let Some(right) = self.nodes.get(handle).right() {
            handle = right;
        }
        handle
    }

    /// A traversal over the entries whose keys fall within `range`. No splaying.
    ///
    /// # Panics
    ///
    /// Panics if the range start lies after its end, or if both bounds are
    /// excluded and equal.
    pub(crate) fn range_traversal<T, R>(&self, range: &R, collection: &str) -> Traversal
    where
        K: Borrow<T>,
        C: Comparator<T>,
        T: ?Sized,
        R: RangeBounds<T>,
    {
        let cmp = &self.cmp;
        if let (Bound::Included(start) | Bound::Excluded(start), Bound::Included(end) | Bound::Excluded(end)) =
            (range.start_bound(), range.end_bound())
        {
            match cmp.compare(start, end) {
                Ordering::Greater => panic!("range start is greater than range end in {collection}"),
                Ordering::Equal
                    if matches!(range.start_bound(), Bound::Excluded(_))
                        && matches!(range.end_bound(), Bound::Excluded(_)) =>
                {
                    panic!("range start and end are equal and excluded in {collection}")
                }
                _ => {}
            }
        }

        let above_start = |key: &K| match range.start_bound() {
            Bound::Included(start) => cmp.compare(key.borrow(), start) != Ordering::Less,
            Bound::Excluded(start) => cmp.compare(key.borrow(), start) == Ordering::Greater,
            Bound::Unbounded => true,
        };
        let below_end = |key: &K| match range.end_bound() {
            Bound::Included(end) => cmp.compare(key.borrow(), end) != Ordering::Greater,
            Bound::Excluded(end) => cmp.compare(key.borrow(), end) == Ordering::Less,
            Bound::Unbounded => true,
        };
        Traversal::bounded(&self.nodes, self.root, above_start, below_end)
    }
}

impl<K, V, C: Comparator<K>> RawSplayTree<K, V, C> {
    /// Inserts `key` and `value`, returning the previous value for an equal key.
    /// The key is splayed to the root either way; an existing key is kept.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V> {
        let Some((root, ord)) = self.seek(&key) else {
            self.root = Some(self.alloc_node(key, value, None, None));
            return None;
        };

        if ord == Ordering::Equal {
            let slot = self.nodes.get(root).value();
            return Some(core::mem::replace(self.values.get_mut(slot), value));
        }

        // Allocate before unlinking so a capacity panic leaves the tree intact.
        let handle = self.alloc_node(key, value, None, None);
        let displaced = self.nodes.get_mut(root);
        let (left, right) = if ord == Ordering::Less {
            (displaced.take_left(), Some(root))
        } else {
            (Some(root), displaced.take_right())
        };
        let node = self.nodes.get_mut(handle);
        node.set_left(left);
        node.set_right(right);
        self.root = Some(handle);
        None
    }

    /// Checks that `entries` is strictly ascending, reporting the first violation.
    fn check_sorted(&self, entries: &[(K, V)]) -> Result<(), BuildError> {
        for (index, pair) in entries.windows(2).enumerate() {
            match self.cmp.compare(&pair[0].0, &pair[1].0) {
                Ordering::Less => {}
                Ordering::Equal => return Err(BuildError::Duplicate { index: index + 1 }),
                Ordering::Greater => return Err(BuildError::OutOfOrder { index: index + 1 }),
            }
        }
        Ok(())
    }

    /// Builds a balanced tree from strictly ascending entries in O(n).
    pub(crate) fn try_from_sorted<I>(entries: I, cmp: C) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let entries: Vec<(K, V)> = entries.into_iter().collect();
        let mut tree = Self::with_capacity(entries.len(), cmp);
        tree.check_sorted(&entries)?;
        tree.rebuild(entries);
        trace!(len = tree.len(), height = tree.height(), "built tree from sorted input");
        Ok(tree)
    }

    /// Moves every entry of `other` into `self`; on equal keys `other` wins.
    ///
    /// `other` may be ordered by a differently configured comparator, so its
    /// entries are re-sorted under `self`'s comparator first. That sort is
    /// linear when both comparators agree or are exact opposites; the merge
    /// and rebuild are O(n + m).
    pub(crate) fn append(&mut self, other: &mut Self) {
        if other.is_empty() {
            return;
        }

        let mut theirs = other.drain_to_vec();
        theirs.sort_by(|a, b| self.cmp.compare(&a.0, &b.0));
        // Keys distinct under `other`'s order may collide under ours; the later one wins.
        theirs.dedup_by(|later, kept| {
            let equal = self.cmp.compare(&later.0, &kept.0) == Ordering::Equal;
            if equal {
                core::mem::swap(later, kept);
            }
            equal
        });
        if self.is_empty() {
            self.rebuild(theirs);
            return;
        }

        let ours = self.drain_to_vec();
        trace!(ours = ours.len(), theirs = theirs.len(), "merging trees");

        let mut merged = Vec::with_capacity(ours.len() + theirs.len());
        let mut ours = ours.into_iter().peekable();
        let mut theirs = theirs.into_iter().peekable();
        loop {
            let ord = match (ours.peek(), theirs.peek()) {
                (Some(a), Some(b)) => self.cmp.compare(&a.0, &b.0),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => break,
            };
            match ord {
                Ordering::Less => merged.extend(ours.next()),
                Ordering::Greater => merged.extend(theirs.next()),
                Ordering::Equal => {
                    ours.next();
                    merged.extend(theirs.next());
                }
            }
        }
        self.rebuild(merged);
    }
}
