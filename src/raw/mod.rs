mod arena;
mod handle;
mod node;
mod raw_splay_tree;
mod splay;
mod traversal;

pub(crate) use arena::{Arena, Slot};
pub(crate) use handle::Handle;
pub(crate) use node::Node;
pub(crate) use raw_splay_tree::RawSplayTree;
pub(crate) use traversal::Traversal;
