use super::handle::Handle;

/// A binary tree cell. Children are owned exclusively through their parent's link;
/// there is no parent link.
#[derive(Clone, Debug)]
pub(crate) struct Node<K> {
    key: K,
    // Values live in their own arena so iterators can lend out `&mut V`
    // while still reading links.
    value: Handle,
    left: Option<Handle>,
    right: Option<Handle>,
}

impl<K> Node<K> {
    pub(crate) const fn new(key: K, value: Handle, left: Option<Handle>, right: Option<Handle>) -> Self {
        Self {
            key,
            value,
            left,
            right,
        }
    }

    #[inline]
    pub(crate) const fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    pub(crate) const fn value(&self) -> Handle {
        self.value
    }

    #[inline]
    pub(crate) const fn left(&self) -> Option<Handle> {
        self.left
    }

    #[inline]
    pub(crate) const fn right(&self) -> Option<Handle> {
        self.right
    }

    #[inline]
    pub(crate) fn set_left(&mut self, left: Option<Handle>) {
        self.left = left;
    }

    #[inline]
    pub(crate) fn set_right(&mut self, right: Option<Handle>) {
        self.right = right;
    }

    /// Detaches and returns the left subtree.
    pub(crate) fn take_left(&mut self) -> Option<Handle> {
        self.left.take()
    }

    /// Detaches and returns the right subtree.
    pub(crate) fn take_right(&mut self) -> Option<Handle> {
        self.right.take()
    }

    /// Consumes the cell, returning `(key, value, left, right)`.
    pub(crate) fn into_parts(self) -> (K, Handle, Option<Handle>, Option<Handle>) {
        (self.key, self.value, self.left, self.right)
    }
}
