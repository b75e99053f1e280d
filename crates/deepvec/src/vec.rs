//! The [`DeepVec`] container and its operation surface.

#![allow(unsafe_code)]

use std::fmt;
use std::ops::{Index, IndexMut};
use std::ptr;
use std::slice;

use deepvec_core::{Element, Kind, Scalar};

use crate::error::VecError;
use crate::raw::RawBuf;

/// A growable array of `T` with explicit deep-ownership semantics.
///
/// Elements in `[0, len)` are live and owned by the container; slots in
/// `[len, capacity)` are raw spare storage. The canonical-empty state is
/// `len == 0, capacity == 0` with no heap buffer, and is what
/// [`DeepVec::new`] returns and [`DeepVec::deep_free`] resets to.
///
/// Appends grow capacity geometrically (1, 2, 4, 8, ...), giving amortized
/// O(1) push. Because `T: Element`, containers nest to any depth with
/// deep-copy and deep-free recursing through every level:
///
/// ```
/// use deepvec::DeepVec;
///
/// // A 3×2 grid of empty integer vectors, allocated exactly as declared.
/// let mut grid = DeepVec::filled(3, DeepVec::filled(2, DeepVec::<i32>::new()));
/// grid.at_mut(1).at_mut(0).push(42);
///
/// let copy = grid.deep_copy();
/// assert_eq!(copy, grid);
/// assert_eq!(copy.at(1).at(0).get(0), 42);
/// assert_eq!(copy.at(0).at(0).len(), 0);
/// ```
pub struct DeepVec<T: Element> {
    buf: RawBuf<T>,
    len: usize,
}

/// Panic with the error's diagnostic; the fail-fast mode for the
/// infallible entry points.
fn fail_fast(result: Result<(), VecError>) {
    if let Err(e) = result {
        panic!("{e}");
    }
}

impl<T: Element> DeepVec<T> {
    /// Capacity multiplier applied when an append finds the buffer full.
    pub const GROWTH_FACTOR: usize = 2;

    /// Capacity of the first allocation made by an append.
    pub const MIN_NONZERO_CAPACITY: usize = 1;

    /// An empty container. Performs no heap allocation.
    pub const fn new() -> Self {
        Self {
            buf: RawBuf::new(),
            len: 0,
        }
    }

    /// Build a container of `n` elements from `template`, consuming it.
    ///
    /// Slot 0 takes the relocated `template`; slots `1..n` are independent
    /// deep copies. With `n == 0` the template is deep-freed and the result
    /// is canonical-empty. Either way `template` is gone afterwards, which
    /// is what makes chained nested construction
    /// (`filled(10, filled(20, DeepVec::new()))`) allocate exactly what it
    /// declares. To keep an independent template, pass
    /// `template.deep_copy()` instead.
    ///
    /// The result's capacity is exactly `n`.
    ///
    /// # Panics
    ///
    /// Panics if the backing storage cannot be allocated (fail-fast mode).
    pub fn filled(n: usize, mut template: T) -> Self {
        if n == 0 {
            template.deep_free();
            return Self::new();
        }
        let mut v = Self::new();
        fail_fast(v.buf.try_reserve_exact(n, "filled"));
        v.append_within_capacity(template);
        for _ in 1..n {
            let copy = v.as_slice()[0].deep_copy();
            v.append_within_capacity(copy);
        }
        v
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the container holds no live elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots the backing storage holds before the next
    /// reallocation.
    pub fn capacity(&self) -> usize {
        self.buf.cap()
    }

    /// Make the backing storage hold exactly `n` slots.
    ///
    /// If `n < len()`, the length is truncated to `n`. **The discarded
    /// elements are not released** — for owning-composite elements their
    /// owned resources leak. Callers that need the discarded elements
    /// released must deep-free them before shrinking.
    pub fn try_reserve_exact(&mut self, n: usize) -> Result<(), VecError> {
        self.buf.try_reserve_exact(n, "reserve")?;
        if self.len > n {
            self.len = n;
        }
        Ok(())
    }

    /// Infallible [`try_reserve_exact`](Self::try_reserve_exact).
    ///
    /// # Panics
    ///
    /// Panics if the backing storage cannot be allocated (fail-fast mode).
    pub fn reserve_exact(&mut self, n: usize) {
        fail_fast(self.try_reserve_exact(n));
    }

    /// Resize to exactly `n` elements.
    ///
    /// Growth fills the new slots with `T::default()`. Shrinking truncates
    /// like [`try_reserve_exact`](Self::try_reserve_exact) (a no-op release
    /// for scalar elements). Only scalar element types can be resized;
    /// owning-composite containers are grown with [`push`](Self::push) or
    /// built with [`filled`](Self::filled), so a composite element can
    /// never come into existence uninitialized.
    pub fn try_resize(&mut self, n: usize) -> Result<(), VecError>
    where
        T: Scalar,
    {
        self.buf.try_reserve_exact(n, "resize")?;
        if n <= self.len {
            self.len = n;
        } else {
            while self.len < n {
                self.append_within_capacity(T::default());
            }
        }
        Ok(())
    }

    /// Infallible [`try_resize`](Self::try_resize).
    ///
    /// # Panics
    ///
    /// Panics if the backing storage cannot be allocated (fail-fast mode).
    pub fn resize(&mut self, n: usize)
    where
        T: Scalar,
    {
        fail_fast(self.try_resize(n));
    }

    /// Borrow element `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= len()`.
    pub fn at(&self, i: usize) -> &T {
        &self.as_slice()[i]
    }

    /// Mutably borrow element `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= len()`.
    pub fn at_mut(&mut self, i: usize) -> &mut T {
        &mut self.as_mut_slice()[i]
    }

    /// Element `i` by value. Scalar elements only — composite elements are
    /// reached through [`at`](Self::at) / [`at_mut`](Self::at_mut), so a
    /// shallow copy aliasing owned resources cannot be produced.
    ///
    /// # Panics
    ///
    /// Panics if `i >= len()`.
    pub fn get(&self, i: usize) -> T
    where
        T: Scalar,
    {
        self.as_slice()[i]
    }

    /// Append `val`, taking ownership. Amortized O(1).
    ///
    /// This is the move-append: the source value is consumed, so no second
    /// owner of its resources can exist afterwards.
    ///
    /// # Panics
    ///
    /// Panics if the backing storage cannot be grown (fail-fast mode).
    pub fn push(&mut self, val: T) {
        if self.len == self.buf.cap() {
            let grown = (self.buf.cap() * Self::GROWTH_FACTOR).max(Self::MIN_NONZERO_CAPACITY);
            fail_fast(self.buf.try_reserve_exact(grown, "push"));
        }
        self.append_within_capacity(val);
    }

    /// Append a deep copy of `val`. Amortized O(1) plus the copy cost.
    ///
    /// # Panics
    ///
    /// Panics if the backing storage cannot be grown (fail-fast mode).
    pub fn push_copy(&mut self, val: &T) {
        self.push(val.deep_copy());
    }

    /// Return a recursively independent duplicate.
    ///
    /// The result's capacity is exactly `len()` and it shares no storage
    /// with `self` at any nesting depth. O(len) plus recursive copy cost.
    ///
    /// # Panics
    ///
    /// Panics if the backing storage cannot be allocated (fail-fast mode).
    pub fn deep_copy(&self) -> Self {
        let mut v = Self::new();
        if self.len == 0 {
            return v;
        }
        fail_fast(v.buf.try_reserve_exact(self.len, "deep_copy"));
        for elem in self.as_slice() {
            v.append_within_capacity(elem.deep_copy());
        }
        v
    }

    /// Recursively release every live element, release the backing buffer,
    /// and reset to canonical-empty.
    ///
    /// Safe to call on an already canonical-empty container (no-op). Also
    /// what `Drop` runs, so explicit deep-freeing is never required for
    /// correctness — only for reclaiming storage early.
    pub fn deep_free(&mut self) {
        if !T::KIND.is_scalar() {
            for elem in self.as_mut_slice() {
                elem.deep_free();
            }
        }
        self.len = 0;
        self.buf.release();
    }

    /// The live elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots [0, len) are initialized live elements; the pointer
        // is aligned and non-null even when empty (dangling is fine for a
        // zero-length slice).
        unsafe { slice::from_raw_parts(self.buf.ptr(), self.len) }
    }

    /// The live elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as for as_slice, plus &mut self guarantees exclusivity.
        unsafe { slice::from_raw_parts_mut(self.buf.ptr(), self.len) }
    }

    /// Move `val` into slot `len` without growing. Capacity must already
    /// hold at least `len + 1` slots.
    fn append_within_capacity(&mut self, val: T) {
        debug_assert!(self.len < self.buf.cap());
        // SAFETY: slot len is within capacity and uninitialized spare
        // storage; ptr::write moves val in without reading the slot.
        unsafe { ptr::write(self.buf.ptr().add(self.len), val) };
        self.len += 1;
    }
}

impl<T: Element> Element for DeepVec<T> {
    const KIND: Kind = Kind::OwningComposite;

    fn deep_copy(&self) -> Self {
        DeepVec::deep_copy(self)
    }

    fn deep_free(&mut self) {
        DeepVec::deep_free(self);
    }

    fn nullify(&mut self) {
        self.len = 0;
        self.buf.forget();
    }
}

impl<T: Element> Drop for DeepVec<T> {
    fn drop(&mut self) {
        self.deep_free();
    }
}

impl<T: Element> Default for DeepVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> Clone for DeepVec<T> {
    fn clone(&self) -> Self {
        self.deep_copy()
    }
}

impl<T: Element> Index<usize> for DeepVec<T> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        self.at(i)
    }
}

impl<T: Element> IndexMut<usize> for DeepVec<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        self.at_mut(i)
    }
}

impl<T: Element + fmt::Debug> fmt::Debug for DeepVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: Element + PartialEq> PartialEq for DeepVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Element + Eq> Eq for DeepVec<T> {}

// SAFETY: DeepVec exclusively owns its buffer and elements; sending or
// sharing it across threads is exactly as safe as for the element type.
unsafe impl<T: Element + Send> Send for DeepVec<T> {}
// SAFETY: shared access only exposes &T.
unsafe impl<T: Element + Sync> Sync for DeepVec<T> {}
