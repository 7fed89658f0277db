use alloc::vec::Vec;

use super::handle::Handle;

/// A slot either holds a live element or links to the next vacant slot.
#[derive(Clone)]
pub(crate) enum Slot<T> {
    Occupied(T),
    Vacant(Option<Handle>),
}

/// Slab of tree cells addressed by [`Handle`].
///
/// Freed slots form an intrusive singly linked free list, so `alloc` after a
/// `take` reuses memory without touching the allocator.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    next_free: Option<Handle>,
    len: usize,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            next_free: None,
            len: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            next_free: None,
            len: 0,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Number of occupied slots.
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the next `alloc` would run out of handles.
    pub(crate) fn is_full(&self) -> bool {
        self.next_free.is_none() && self.slots.len() > Handle::MAX_SLOT
    }

    pub(crate) fn alloc(&mut self, element: T) -> Handle {
        let handle = if let Some(handle) = self.next_free {
            let slot = &mut self.slots[handle.slot()];
            let Slot::Vacant(next) = *slot else {
                panic!("`Arena::alloc()` - free list points at an occupied slot!");
            };
            self.next_free = next;
            *slot = Slot::Occupied(element);
            handle
        } else {
            assert!(
                !self.is_full(),
                "`Arena::alloc()` - arena is at maximum capacity ({})",
                Handle::MAX_SLOT + 1
            );
            self.slots.push(Slot::Occupied(element));
            Handle::from_slot(self.slots.len() - 1)
        };
        self.len += 1;
        handle
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        match &self.slots[handle.slot()] {
            Slot::Occupied(element) => element,
            Slot::Vacant(_) => panic!("`Arena::get()` - `handle` is vacant!"),
        }
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        match &mut self.slots[handle.slot()] {
            Slot::Occupied(element) => element,
            Slot::Vacant(_) => panic!("`Arena::get_mut()` - `handle` is vacant!"),
        }
    }

    pub(crate) fn take(&mut self, handle: Handle) -> T {
        let slot = core::mem::replace(&mut self.slots[handle.slot()], Slot::Vacant(self.next_free));
        let Slot::Occupied(element) = slot else {
            panic!("`Arena::take()` - `handle` is vacant!");
        };
        self.next_free = Some(handle);
        self.len -= 1;
        element
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.next_free = None;
        self.len = 0;
    }

    /// Base pointer used by iterators that hand out `&mut T` for distinct slots.
    pub(crate) fn as_mut_ptr(&mut self) -> *mut Slot<T> {
        self.slots.as_mut_ptr()
    }

    /// Returns the element at `handle` through a base pointer from [`Arena::as_mut_ptr`].
    ///
    /// # Safety
    /// - `base` must come from `as_mut_ptr` on an arena that is still alive and has
    ///   not been structurally modified since.
    /// - `handle` must be occupied in that arena.
    /// - No other reference to the same slot may exist for `'a`.
    #[inline]
    pub(crate) unsafe fn get_mut_raw<'a>(base: *mut Slot<T>, handle: Handle) -> &'a mut T {
        // SAFETY: The caller guarantees `base` is valid for `handle.slot()` and that the
        // slot is not aliased.
        match unsafe { &mut *base.add(handle.slot()) } {
            Slot::Occupied(element) => element,
            Slot::Vacant(_) => panic!("`Arena::get_mut_raw()` - `handle` is vacant!"),
        }
    }
}
