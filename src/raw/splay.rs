//! Top-down splaying (Sleator & Tarjan, "Self-Adjusting Binary Search Trees", 1985).
//!
//! The walk from the root toward the target strips nodes off into two side
//! trees: everything known to be smaller than the final root hangs off the
//! *lesser* tree, everything known to be larger off the *greater* tree. When
//! the walk stops, the stopping node adopts both side trees as its children.
//! No parent links and no explicit path stack are needed.

use core::cmp::Ordering;

use super::arena::Arena;
use super::handle::Handle;
use super::node::Node;

/// A side tree under construction.
///
/// `attach` is the node whose free child link receives the next stripped node:
/// the rightmost node of the lesser tree, or the leftmost node of the greater tree.
#[derive(Clone, Copy, Default)]
struct SideTree {
    root: Option<Handle>,
    attach: Option<Handle>,
}

/// Splays the subtree rooted at `top` and returns its new root.
///
/// `probe` reports where the target lies relative to a node key: `Less` means
/// the target sorts before the key, `Greater` after it, `Equal` that the node
/// is the target. Always answering `Less` splays the minimum, always answering
/// `Greater` splays the maximum.
///
/// The returned node is the target when it is present, otherwise the last node
/// on the search path, which is either the target's in-order predecessor or its
/// successor. Only the shape of the subtree changes.
pub(crate) fn splay<K, F>(nodes: &mut Arena<Node<K>>, top: Handle, mut probe: F) -> Handle
where
    F: FnMut(&K) -> Ordering,
{
    let mut lesser = SideTree::default();
    let mut greater = SideTree::default();
    let mut current = top;

    loop {
        let node = nodes.get(current);
        match probe(node.key()) {
            Ordering::Less => {
                let Some(mut next) = node.left() else { break };
                if probe(nodes.get(next).key()) == Ordering::Less {
                    // Zig-zig: rotate before linking so the path is halved.
                    rotate_right(nodes, current, next);
                    current = next;
                    match nodes.get(current).left() {
                        Some(left) => next = left,
                        None => break,
                    }
                }
                link_greater(nodes, &mut greater, current);
                current = next;
            }
            Ordering::Greater => {
                let Some(mut next) = node.right() else { break };
                if probe(nodes.get(next).key()) == Ordering::Greater {
                    rotate_left(nodes, current, next);
                    current = next;
                    match nodes.get(current).right() {
                        Some(right) => next = right,
                        None => break,
                    }
                }
                link_lesser(nodes, &mut lesser, current);
                current = next;
            }
            Ordering::Equal => break,
        }
    }

    assemble(nodes, current, lesser, greater);
    current
}

/// Promotes `child`, the left child of `parent`, above it.
fn rotate_right<K>(nodes: &mut Arena<Node<K>>, parent: Handle, child: Handle) {
    let inner = nodes.get(child).right();
    nodes.get_mut(parent).set_left(inner);
    nodes.get_mut(child).set_right(Some(parent));
}

/// Promotes `child`, the right child of `parent`, above it.
fn rotate_left<K>(nodes: &mut Arena<Node<K>>, parent: Handle, child: Handle) {
    let inner = nodes.get(child).left();
    nodes.get_mut(parent).set_right(inner);
    nodes.get_mut(child).set_left(Some(parent));
}

/// Hangs `handle` (with its right subtree) off the greater side tree.
/// Its stale left link is overwritten by the next link or by [`assemble`].
fn link_greater<K>(nodes: &mut Arena<Node<K>>, side: &mut SideTree, handle: Handle) {
    match side.attach {
        Some(attach) => nodes.get_mut(attach).set_left(Some(handle)),
        None => side.root = Some(handle),
    }
    side.attach = Some(handle);
}

/// Hangs `handle` (with its left subtree) off the lesser side tree.
fn link_lesser<K>(nodes: &mut Arena<Node<K>>, side: &mut SideTree, handle: Handle) {
    match side.attach {
        Some(attach) => nodes.get_mut(attach).set_right(Some(handle)),
        None => side.root = Some(handle),
    }
    side.attach = Some(handle);
}

fn assemble<K>(nodes: &mut Arena<Node<K>>, top: Handle, mut lesser: SideTree, mut greater: SideTree) {
    let (left, right) = {
        let node = nodes.get(top);
        (node.left(), node.right())
    };

    match lesser.attach {
        Some(attach) => nodes.get_mut(attach).set_right(left),
        None => lesser.root = left,
    }
    match greater.attach {
        Some(attach) => nodes.get_mut(attach).set_left(right),
        None => greater.root = right,
    }

    let node = nodes.get_mut(top);
    node.set_left(lesser.root);
    node.set_right(greater.root);
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    /// Builds a tree from `(key, left, right)` triples, where children refer to
    /// positions in the slice. Returns the arena and the handle of position 0.
    fn build(shape: &[(u32, Option<usize>, Option<usize>)]) -> (Arena<Node<u32>>, Handle) {
        let mut nodes = Arena::new();
        let value = Handle::from_slot(0);
        let handles: Vec<Handle> = shape
            .iter()
            .map(|&(key, _, _)| nodes.alloc(Node::new(key, value, None, None)))
            .collect();
        for (index, &(_, left, right)) in shape.iter().enumerate() {
            let node = nodes.get_mut(handles[index]);
            node.set_left(left.map(|i| handles[i]));
            node.set_right(right.map(|i| handles[i]));
        }
        (nodes, handles[0])
    }

    fn in_order(nodes: &Arena<Node<u32>>, top: Option<Handle>, out: &mut Vec<u32>) {
        if let Some(handle) = top {
            let node = nodes.get(handle);
            in_order(nodes, node.left(), out);
            out.push(*node.key());
            in_order(nodes, node.right(), out);
        }
    }

    fn keys(nodes: &Arena<Node<u32>>, top: Handle) -> Vec<u32> {
        let mut out = Vec::new();
        in_order(nodes, Some(top), &mut out);
        out
    }

    fn key_of(nodes: &Arena<Node<u32>>, handle: Option<Handle>) -> Option<u32> {
        handle.map(|h| *nodes.get(h).key())
    }

    fn probe_for(target: u32) -> impl FnMut(&u32) -> Ordering {
        move |key| target.cmp(key)
    }

    /// A left-leaning chain 5 -> 4 -> 3 -> 2 -> 1.
    fn left_chain() -> (Arena<Node<u32>>, Handle) {
        build(&[
            (5, Some(1), None),
            (4, Some(2), None),
            (3, Some(3), None),
            (2, Some(4), None),
            (1, None, None),
        ])
    }

    #[test]
    fn single_node_is_unchanged() {
        let (mut nodes, top) = build(&[(7, None, None)]);
        assert_eq!(splay(&mut nodes, top, probe_for(3)), top);
        assert_eq!(splay(&mut nodes, top, probe_for(9)), top);
        assert_eq!(keys(&nodes, top), vec![7]);
    }

    #[test]
    fn present_key_becomes_root() {
        let (mut nodes, top) = left_chain();
        let root = splay(&mut nodes, top, probe_for(1));
        assert_eq!(*nodes.get(root).key(), 1);
        assert_eq!(keys(&nodes, root), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn zig_zig_halves_the_chain() {
        let (mut nodes, top) = left_chain();
        let root = splay(&mut nodes, top, probe_for(1));
        // 1
        //  \
        //   4
        //  / \
        // 2   5
        //  \
        //   3
        let root_node = nodes.get(root);
        assert_eq!(root_node.left(), None);
        let four = root_node.right();
        assert_eq!(key_of(&nodes, four), Some(4));
        let four = nodes.get(four.unwrap());
        assert_eq!(key_of(&nodes, four.left()), Some(2));
        assert_eq!(key_of(&nodes, four.right()), Some(5));
        let two = nodes.get(four.left().unwrap());
        assert_eq!(key_of(&nodes, two.right()), Some(3));
    }

    #[test]
    fn zig_zag_brings_inner_grandchild_up() {
        //   3
        //  /
        // 1
        //  \
        //   2
        let (mut nodes, top) = build(&[(3, Some(1), None), (1, None, Some(2)), (2, None, None)]);
        let root = splay(&mut nodes, top, probe_for(2));
        let root_node = nodes.get(root);
        assert_eq!(*root_node.key(), 2);
        assert_eq!(key_of(&nodes, root_node.left()), Some(1));
        assert_eq!(key_of(&nodes, root_node.right()), Some(3));
    }

    #[test]
    fn absent_key_roots_a_neighbor() {
        let (mut nodes, top) = build(&[
            (40, Some(1), Some(2)),
            (20, Some(3), Some(4)),
            (60, None, None),
            (10, None, None),
            (30, None, None),
        ]);
        let mut root = top;
        for target in [0, 15, 25, 35, 50, 70] {
            root = splay(&mut nodes, root, probe_for(target));
            let key = *nodes.get(root).key();
            let order = keys(&nodes, root);
            let position = order.iter().position(|&k| k == key).unwrap();
            let before = position.checked_sub(1).map(|i| order[i]);
            let after = order.get(position + 1).copied();
            assert!(
                (key < target && after.is_none_or(|a| a > target)) || (key > target && before.is_none_or(|b| b < target)),
                "splaying {target} rooted {key}, which is not adjacent to it"
            );
            assert_eq!(order, vec![10, 20, 30, 40, 60]);
        }
    }

    #[test]
    fn extreme_probes_root_min_and_max() {
        let (mut nodes, top) = left_chain();
        let root = splay(&mut nodes, top, |_| Ordering::Greater);
        assert_eq!(*nodes.get(root).key(), 5);
        assert_eq!(nodes.get(root).right(), None);

        let root = splay(&mut nodes, root, |_| Ordering::Less);
        assert_eq!(*nodes.get(root).key(), 1);
        assert_eq!(nodes.get(root).left(), None);
        assert_eq!(keys(&nodes, root), vec![1, 2, 3, 4, 5]);
    }
}
