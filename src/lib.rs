//! Self-adjusting ordered collections for Rust.
//!
//! This crate provides [`SplayMap`] and [`SplaySet`], ordered collections
//! backed by a top-down [splay tree]. Their API follows the standard
//! library's `BTreeMap` and `BTreeSet`, with a few differences that come from
//! the data structure:
//!
//! - Lookups such as [`get`](SplayMap::get) and [`contains`](SplaySet::contains)
//!   move the element they find to the root, so they take `&mut self`.
//! - Any sequence of `m` operations on `n` elements costs O(m log n) in total,
//!   and repeated or nearby accesses are much cheaper than that.
//! - Keys are ordered by a [`Comparator`] chosen at construction. The default,
//!   [`NaturalOrder`], uses [`Ord`].
//! - Neighbor queries ([`predecessor`](SplayMap::predecessor),
//!   [`successor`](SplayMap::successor)) and an O(n) balanced build from sorted
//!   input ([`from_sorted_iter`](SplayMap::from_sorted_iter)).
//!
//! # Example
//!
//! ```
//! use splay_tree::SplayMap;
//!
//! let mut scores = SplayMap::new();
//! scores.insert("Alice", 100);
//! scores.insert("Bob", 85);
//! scores.insert("Carol", 92);
//!
//! assert_eq!(scores.get(&"Bob"), Some(&85));
//! // The key just looked up is now at the root.
//! assert_eq!(scores.root_key_value(), Some((&"Bob", &85)));
//!
//! assert_eq!(scores.predecessor(&"Bob"), Some((&"Alice", &100)));
//! assert_eq!(scores.successor(&"Bob"), Some((&"Carol", &92)));
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`
//! - **`tracing`** (off by default) - Emits `trace`-level events from bulk
//!   operations such as [`append`](SplayMap::append) and
//!   [`retain`](SplayMap::retain)
//!
//! # Implementation
//!
//! Nodes live in an arena and refer to their children by index; there are no
//! parent links. Splaying is done top-down in a single pass, and iterators
//! keep an explicit stack of ancestors instead.
//!
//! [splay tree]: https://en.wikipedia.org/wiki/Splay_tree

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
// NOTE: `IterMut` needs unsafe code to hand out disjoint `&mut V` from one arena.
// #![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod compare;
mod error;
mod raw;
mod trace;

pub mod splay_map;
pub mod splay_set;

pub use compare::{Comparator, FnComparator, NaturalOrder, ReverseOrder};
pub use error::BuildError;
pub use splay_map::SplayMap;
pub use splay_set::SplaySet;
