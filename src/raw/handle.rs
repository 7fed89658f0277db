use core::num::NonZero;

// Narrow handles under test so that arena exhaustion can be exercised quickly.
#[cfg(test)]
type RawHandle = u16;
#[cfg(not(test))]
type RawHandle = u32;

/// Index of a node slot in the arena, stored off-by-one so `Option<Handle>` is free.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub(crate) struct Handle(NonZero<RawHandle>);

impl Handle {
    /// The largest slot index a handle can address.
    pub(crate) const MAX_SLOT: usize = (RawHandle::MAX - 1) as usize;

    #[inline]
    pub(crate) const fn from_slot(slot: usize) -> Self {
        assert!(slot <= Self::MAX_SLOT, "`Handle::from_slot()` - `slot` > `Handle::MAX_SLOT`!");
        #[allow(clippy::cast_possible_truncation)]
        match NonZero::new((slot + 1) as RawHandle) {
            Some(raw) => Self(raw),
            None => unreachable!(),
        }
    }

    #[inline]
    pub(crate) const fn slot(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use static_assertions::assert_eq_size;

    // Child links are `Option<Handle>`; they must cost no more than a bare index.
    assert_eq_size!(Handle, Option<Handle>);
    assert_eq_size!(Handle, RawHandle);

    #[test]
    #[should_panic(expected = "`Handle::from_slot()` - `slot` > `Handle::MAX_SLOT`!")]
    fn slot_past_max_panics() {
        let _ = Handle::from_slot(Handle::MAX_SLOT + 1);
    }

    #[test]
    fn first_and_last_slots() {
        assert_eq!(Handle::from_slot(0).slot(), 0);
        assert_eq!(Handle::from_slot(Handle::MAX_SLOT).slot(), Handle::MAX_SLOT);
    }

    proptest! {
        #[test]
        fn slot_survives_handle_conversion(slot in 0..=Handle::MAX_SLOT) {
            prop_assert_eq!(Handle::from_slot(slot).slot(), slot);
        }
    }
}
