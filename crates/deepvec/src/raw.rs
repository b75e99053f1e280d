//! Low-level backing-storage management.
//!
//! [`RawBuf`] owns a raw allocation of `cap` slots of `T` and nothing else:
//! it never reads, drops, or initializes elements. Element lifecycle is the
//! container's job; this module only moves bytes. All `unsafe` here is
//! allocator plumbing, each block with a `// SAFETY:` comment.

#![allow(unsafe_code)]

use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem::size_of;
use std::ptr::NonNull;

use crate::error::VecError;

/// An owned, uninitialized buffer of exactly `cap` slots of `T`.
///
/// Canonical-empty is `cap == 0` with a dangling pointer — no allocation.
/// For zero-sized `T` the capacity is pure bookkeeping and no allocation is
/// ever made.
///
/// `RawBuf` has no `Drop`; the container releases it through
/// [`RawBuf::release`] after disposing of the live elements.
pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
    /// Owns-`T` marker for drop-check purposes.
    _marker: PhantomData<T>,
}

impl<T> RawBuf<T> {
    /// A buffer with no allocation (canonical-empty).
    pub(crate) const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            _marker: PhantomData,
        }
    }

    /// Current capacity in slots.
    pub(crate) fn cap(&self) -> usize {
        self.cap
    }

    /// Pointer to the first slot. Dangling (but aligned and non-null) when
    /// the capacity is zero.
    pub(crate) fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Resize the allocation to hold exactly `n` slots, relocating existing
    /// bytes. `op` names the calling operation for diagnostics.
    ///
    /// Shrinking below the number of live elements is allowed — the caller
    /// is responsible for its own length bookkeeping before any discarded
    /// slot is touched again.
    pub(crate) fn try_reserve_exact(&mut self, n: usize, op: &'static str) -> Result<(), VecError> {
        if size_of::<T>() == 0 {
            // Zero-sized elements never hit the allocator; capacity is
            // bookkeeping only.
            self.cap = n;
            return Ok(());
        }
        if n == self.cap {
            return Ok(());
        }
        if n == 0 {
            self.release();
            return Ok(());
        }

        // Layout::array rejects byte sizes beyond isize::MAX.
        let new_layout = Layout::array::<T>(n).map_err(|_| VecError::CapacityOverflow {
            op,
            requested_slots: n,
        })?;

        let raw = if self.cap == 0 {
            // SAFETY: new_layout has non-zero size (n > 0 and T is not
            // zero-sized).
            unsafe { alloc::alloc(new_layout) }
        } else {
            let old_layout = Layout::array::<T>(self.cap)
                .expect("existing capacity was validated when it was allocated");
            // SAFETY: self.ptr was returned by this allocator with
            // old_layout, and new_layout.size() is non-zero and within
            // isize::MAX (checked by Layout::array above).
            unsafe { alloc::realloc(self.ptr.as_ptr().cast::<u8>(), old_layout, new_layout.size()) }
        };

        match NonNull::new(raw.cast::<T>()) {
            Some(ptr) => {
                self.ptr = ptr;
                self.cap = n;
                Ok(())
            }
            None => Err(VecError::AllocationFailed {
                op,
                requested_bytes: new_layout.size(),
            }),
        }
    }

    /// Release the allocation and reset to canonical-empty. Idempotent.
    ///
    /// The caller must already have disposed of any live elements; the
    /// bytes are freed without running anything.
    pub(crate) fn release(&mut self) {
        if self.cap != 0 && size_of::<T>() != 0 {
            let layout = Layout::array::<T>(self.cap)
                .expect("existing capacity was validated when it was allocated");
            // SAFETY: self.ptr was allocated by this allocator with exactly
            // this layout and has not been freed since.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast::<u8>(), layout) };
        }
        self.ptr = NonNull::dangling();
        self.cap = 0;
    }

    /// Reset to canonical-empty *without* releasing the allocation.
    ///
    /// For use after ownership of the buffer has been relocated elsewhere
    /// by a raw byte copy of the containing value.
    pub(crate) fn forget(&mut self) {
        self.ptr = NonNull::dangling();
        self.cap = 0;
    }
}
