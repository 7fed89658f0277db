use thiserror::Error;

/// The reason a sorted bulk build rejected its input.
///
/// Returned by [`SplayMap::try_from_sorted_iter`](crate::SplayMap::try_from_sorted_iter)
/// and [`SplaySet::try_from_sorted_iter`](crate::SplaySet::try_from_sorted_iter).
/// The non-`try` variants panic with the same message.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
pub enum BuildError {
    /// The entry at `index` compares less than the entry before it.
    #[error("sorted input is out of order at index {index}")]
    OutOfOrder {
        /// Position of the offending entry in the input.
        index: usize,
    },
    /// The entry at `index` compares equal to the entry before it.
    #[error("sorted input repeats a key at index {index}")]
    Duplicate {
        /// Position of the offending entry in the input.
        index: usize,
    },
}

impl BuildError {
    /// Position of the offending entry in the input sequence.
    #[must_use]
    pub const fn index(&self) -> usize {
        match *self {
            BuildError::OutOfOrder { index } | BuildError::Duplicate { index } => index,
        }
    }
}
