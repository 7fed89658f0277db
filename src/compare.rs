use core::cmp::Ordering;
use core::fmt;

/// A total order over `T`, supplied to a map or set at construction.
///
/// Implementations must be a strict weak order that is also total: reflexive
/// `Equal`, antisymmetric, and transitive. Violating this is a logic error; the
/// collections will not exhibit undefined behavior, but lookups may miss, and
/// iteration order is unspecified.
///
/// A comparator for the key type `K` may also implement `Comparator<Q>` for
/// borrowed forms `Q` of `K`, which lets lookups take `&Q` the same way
/// `BTreeMap` does. The ordering on `Q` *must* match the ordering on `K`.
///
/// # Examples
///
/// ```
/// use core::cmp::Ordering;
/// use splay_tree::{Comparator, SplaySet};
///
/// /// Orders strings by length, then lexicographically.
/// #[derive(Default)]
/// struct ByLength;
///
/// impl Comparator<str> for ByLength {
///     fn compare(&self, a: &str, b: &str) -> Ordering {
///         a.len().cmp(&b.len()).then_with(|| a.cmp(b))
///     }
/// }
///
/// impl Comparator<String> for ByLength {
///     fn compare(&self, a: &String, b: &String) -> Ordering {
///         Comparator::<str>::compare(self, a, b)
///     }
/// }
///
/// let mut words = SplaySet::with_comparator(ByLength);
/// for word in ["pear", "fig", "banana", "kiwi"] {
///     words.insert(String::from(word));
/// }
/// let ordered: Vec<&str> = words.iter().map(String::as_str).collect();
/// assert_eq!(ordered, ["fig", "kiwi", "pear", "banana"]);
/// assert!(words.contains("kiwi"));
/// ```
pub trait Comparator<T: ?Sized> {
    /// Compares `a` with `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Orders values by their [`Ord`] implementation. This is the default comparator.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct NaturalOrder;

impl<T: ?Sized + Ord> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Orders values by the reverse of their [`Ord`] implementation.
///
/// ```
/// use splay_tree::{ReverseOrder, SplayMap};
///
/// let mut map = SplayMap::with_comparator(ReverseOrder);
/// map.extend([(1, 'a'), (3, 'c'), (2, 'b')]);
/// assert_eq!(map.keys().copied().collect::<Vec<_>>(), [3, 2, 1]);
/// assert_eq!(map.first_key_value(), Some((&3, &'c')));
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct ReverseOrder;

impl<T: ?Sized + Ord> Comparator<T> for ReverseOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

/// Adapts a closure `Fn(&T, &T) -> Ordering` into a [`Comparator`].
///
/// ```
/// use splay_tree::{FnComparator, SplayMap};
///
/// // Case-insensitive keys.
/// let mut map = SplayMap::with_comparator(FnComparator(|a: &&str, b: &&str| {
///     a.to_ascii_lowercase().cmp(&b.to_ascii_lowercase())
/// }));
/// map.insert("Apple", 1);
/// assert_eq!(map.insert("APPLE", 2), Some(1));
/// assert_eq!(map.len(), 1);
/// ```
#[derive(Clone, Copy, Default)]
pub struct FnComparator<F>(pub F);

impl<T: ?Sized, F> Comparator<T> for FnComparator<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}

impl<F> fmt::Debug for FnComparator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnComparator").finish_non_exhaustive()
    }
}

impl<T: ?Sized, C: Comparator<T> + ?Sized> Comparator<T> for &C {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (**self).compare(a, b)
    }
}
