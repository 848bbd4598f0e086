use std::alloc::{self, Layout};
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::mem::MaybeUninit;
use std::ptr::NonNull;
use std::slice;

use crate::error::{AllocationError, CapacityOverflow, OutOfMemory};

/// A heap allocation with room for exactly `cap` values of `T`, none of which are assumed to be
/// initialized.
///
/// Block is the raw storage underneath [`Sequence`](super::super::Sequence). It never reads,
/// writes or drops its contents, that is entirely up to the owner, which tracks how many of the
/// slots are initialized. Dropping a Block only releases the allocation.
///
/// Zero-sized types and a capacity of zero are never allocated, a dangling pointer is used
/// instead.
pub(crate) struct Block<T> {
    pub(crate) ptr: NonNull<MaybeUninit<T>>,
    pub(crate) cap: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Block<T> {
    /// Creates an empty Block without allocating.
    pub(crate) const fn new() -> Block<T> {
        Block {
            ptr: NonNull::dangling(),
            cap: 0,
            _phantom: PhantomData,
        }
    }

    /// Allocates a Block with exactly `cap` uninitialized slots.
    pub(crate) fn try_with_cap(cap: usize) -> Result<Block<T>, AllocationError> {
        let mut block = Block::new();
        block.try_realloc(cap)?;
        Ok(block)
    }

    pub(crate) const fn cap(&self) -> usize {
        self.cap
    }

    pub(crate) const fn as_ptr(&self) -> *const MaybeUninit<T> {
        self.ptr.as_ptr().cast_const()
    }

    pub(crate) const fn as_mut_ptr(&mut self) -> *mut MaybeUninit<T> {
        self.ptr.as_ptr()
    }

    /// Returns every slot of the Block, initialized or not.
    pub(crate) fn slots_mut(&mut self) -> &mut [MaybeUninit<T>] {
        // SAFETY: The pointer is valid and properly aligned for cap slots of MaybeUninit<T>, which
        // has no validity requirements. The returned slice borrows self mutably.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.cap) }
    }

    /// Computes the layout for `cap` values of `T`.
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] if the layout's size would exceed [`isize::MAX`].
    pub(crate) fn layout(cap: usize) -> Result<Layout, AllocationError> {
        Layout::array::<T>(cap).map_err(|_| CapacityOverflow.into())
    }

    /// Reallocates the Block to hold exactly `new_cap` slots. The contents of the first
    /// `min(cap, new_cap)` slots are preserved bit for bit, regardless of whether they are
    /// initialized. Slots beyond the new capacity are discarded without being dropped.
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] if the new layout would exceed [`isize::MAX`] bytes and
    /// [`OutOfMemory`] if the allocator fails. The Block is unchanged in either case.
    pub(crate) fn try_realloc(&mut self, new_cap: usize) -> Result<(), AllocationError> {
        if new_cap == self.cap {
            return Ok(());
        }

        let old_layout = Self::layout(self.cap)?;
        let new_layout = Self::layout(new_cap)?;

        let new_ptr = match (old_layout.size(), new_layout.size()) {
            // Zero-sized types never need memory, only the capacity changes.
            (0, 0) => self.ptr,
            (0, _) => {
                // SAFETY: The new layout has a non-zero size.
                let raw = unsafe { alloc::alloc(new_layout) };
                Self::non_null(raw, new_layout)?
            },
            (_, 0) => {
                // SAFETY: ptr was allocated in the global allocator with old_layout.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), old_layout) }
                NonNull::dangling()
            },
            (_, _) => {
                // SAFETY: ptr was allocated in the global allocator with old_layout, and the new
                // size is non-zero and was validated by Layout::array to not overflow isize::MAX.
                let raw = unsafe {
                    alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_layout.size())
                };
                Self::non_null(raw, new_layout)?
            },
        };

        log::trace!(
            "block of {} realloc: {} -> {} slots",
            std::any::type_name::<T>(),
            self.cap,
            new_cap,
        );

        self.ptr = new_ptr;
        self.cap = new_cap;
        Ok(())
    }

    fn non_null(raw: *mut u8, layout: Layout) -> Result<NonNull<MaybeUninit<T>>, AllocationError> {
        NonNull::new(raw.cast()).ok_or_else(|| OutOfMemory { bytes: layout.size() }.into())
    }
}

impl<T> Default for Block<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Block<T> {
    fn drop(&mut self) {
        // The layout was valid when it was allocated, so it is valid now.
        if let Ok(layout) = Self::layout(self.cap)
            && layout.size() != 0
        {
            // SAFETY: ptr is allocated in the global allocator with this layout. Zero-sized
            // layouts are never allocated and are guarded against.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
        }
    }
}

impl<T> Debug for Block<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Block")
            .field("ptr", &self.ptr)
            .field("cap", &self.cap)
            .finish()
    }
}

// SAFETY: A Block uniquely owns its allocation, so it can be sent when T can.
unsafe impl<T: Send> Send for Block<T> {}
// SAFETY: Block exposes no interior mutability through shared references.
unsafe impl<T: Sync> Sync for Block<T> {}
