use smallvec::SmallVec;

use super::arena::Arena;
use super::handle::Handle;
use super::node::Node;

/// Ancestor chain of the next node on one end of a traversal.
///
/// Without parent links the in-order successor is re-derived from this stack;
/// a perfectly balanced tree of four billion nodes fits inline.
type Spine = SmallVec<[Handle; 32]>;

/// Double-ended in-order walk over a subtree, independent of key type.
///
/// `front` holds the path to the next node yielded in ascending order, `back`
/// the path to the next node yielded in descending order. The two ends have
/// met once both would yield the same node, after which the walk is finished.
#[derive(Clone, Debug)]
pub(crate) struct Traversal {
    front: Spine,
    back: Spine,
    finished: bool,
}

impl Traversal {
    /// Walks every node under `root`.
    pub(crate) fn full<K>(nodes: &Arena<Node<K>>, root: Option<Handle>) -> Self {
        Self::bounded(nodes, root, |_| true, |_| true)
    }

    /// Walks the nodes whose keys satisfy both `above_start` and `below_end`.
    ///
    /// `above_start` must hold for a suffix of the in-order sequence and
    /// `below_end` for a prefix. The caller is responsible for
    /// rejecting ranges whose start lies past their end; a range that simply
    /// selects no nodes is detected here.
    pub(crate) fn bounded<K, S, E>(
        nodes: &Arena<Node<K>>,
        root: Option<Handle>,
        mut above_start: S,
        mut below_end: E,
    ) -> Self
    where
        S: FnMut(&K) -> bool,
        E: FnMut(&K) -> bool,
    {
        let mut front = Spine::new();
        let mut current = root;
        while let Some(handle) = current {
            let node = nodes.get(handle);
            if above_start(node.key()) {
                front.push(handle);
                current = node.left();
            } else {
                current = node.right();
            }
        }

        let mut back = Spine::new();
        let mut current = root;
        while let Some(handle) = current {
            let node = nodes.get(handle);
            if below_end(node.key()) {
                back.push(handle);
                current = node.right();
            } else {
                current = node.left();
            }
        }

        // The first admitted node lies past the last one: nothing is in range.
        let finished = match (front.last(), back.last()) {
            (Some(&first), Some(&last)) => first != last && !below_end(nodes.get(first).key()),
            _ => true,
        };

        Self { front, back, finished }
    }

    pub(crate) fn next_front<K>(&mut self, nodes: &Arena<Node<K>>) -> Option<Handle> {
        if self.finished {
            return None;
        }
        let handle = self.front.pop()?;
        if self.back.last() == Some(&handle) {
            self.finished = true;
        } else {
            let mut current = nodes.get(handle).right();
            while let Some(child) = current {
                self.front.push(child);
                current = nodes.get(child).left();
            }
        }
        Some(handle)
    }

    pub(crate) fn next_back<K>(&mut self, nodes: &Arena<Node<K>>) -> Option<Handle> {
        if self.finished {
            return None;
        }
        let handle = self.back.pop()?;
        if self.front.last() == Some(&handle) {
            self.finished = true;
        } else {
            let mut current = nodes.get(handle).left();
            while let Some(child) = current {
                self.back.push(child);
                current = nodes.get(child).right();
            }
        }
        Some(handle)
    }

    #[cfg(test)]
    pub(crate) const fn is_finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    /// Balanced tree over 1..=7 rooted at 4.
    fn seven() -> (Arena<Node<u32>>, Handle) {
        let mut nodes = Arena::new();
        let value = Handle::from_slot(0);
        let mut leaf = |key| nodes.alloc(Node::new(key, value, None, None));
        let (one, three, five, seven) = (leaf(1), leaf(3), leaf(5), leaf(7));
        let two = nodes.alloc(Node::new(2, value, Some(one), Some(three)));
        let six = nodes.alloc(Node::new(6, value, Some(five), Some(seven)));
        let four = nodes.alloc(Node::new(4, value, Some(two), Some(six)));
        (nodes, four)
    }

    fn drain(nodes: &Arena<Node<u32>>, mut traversal: Traversal, pattern: &[bool]) -> Vec<u32> {
        let mut out = Vec::new();
        for &from_front in pattern.iter().cycle() {
            let next = if from_front {
                traversal.next_front(nodes)
            } else {
                traversal.next_back(nodes)
            };
            match next {
                Some(handle) => out.push(*nodes.get(handle).key()),
                None => break,
            }
        }
        out
    }

    #[test]
    fn full_walk_in_both_directions() {
        let (nodes, root) = seven();
        assert_eq!(drain(&nodes, Traversal::full(&nodes, Some(root)), &[true]), [1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(drain(&nodes, Traversal::full(&nodes, Some(root)), &[false]), [7, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn alternating_ends_meet_without_repeats() {
        let (nodes, root) = seven();
        assert_eq!(
            drain(&nodes, Traversal::full(&nodes, Some(root)), &[true, false]),
            [1, 7, 2, 6, 3, 5, 4]
        );
    }

    #[test]
    fn bounded_walk() {
        let (nodes, root) = seven();
        let traversal = Traversal::bounded(&nodes, Some(root), |&k| k >= 3, |&k| k < 6);
        assert_eq!(drain(&nodes, traversal, &[true]), [3, 4, 5]);
    }

    #[test]
    fn bounds_that_select_nothing() {
        let (nodes, root) = seven();
        let gap = Traversal::bounded(&nodes, Some(root), |&k| k > 3, |&k| k < 4);
        assert!(gap.is_finished());
        let past_end = Traversal::bounded(&nodes, Some(root), |&k| k > 7, |_| true);
        assert!(past_end.is_finished());
        assert!(Traversal::full::<u32>(&nodes, None).is_finished());
    }

    #[test]
    fn single_node_range() {
        let (nodes, root) = seven();
        let traversal = Traversal::bounded(&nodes, Some(root), |&k| k >= 5, |&k| k <= 5);
        assert_eq!(drain(&nodes, traversal, &[false]), [5]);
    }
}
