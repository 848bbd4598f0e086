use std::borrow::{Borrow, BorrowMut};
use std::cmp;
use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use crate::collections::contiguous::block::Block;
use crate::error::{
    AllocationError, CapacityOverflow, EmptySequence, IndexError, OutOfBounds,
};
use crate::util::fmt::DebugList;
use crate::util::result::Throw;

/// The smallest capacity allocated by [`Growth::Factor`] when a Sequence first grows.
pub const MIN_CAP: usize = 4;

/// The amortization policy used when a [`Sequence`] needs more capacity.
///
/// Whichever policy is used, the new capacity is never less than what was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Growth {
    /// Multiply the current capacity by the provided factor (at least 2), starting from
    /// [`MIN_CAP`]. Appends are amortized `O(1)`.
    Factor(usize),
    /// Add the provided number of slots (at least 1) to the current capacity. This keeps memory
    /// usage tight, but repeated appends are `O(n)` each on average.
    Step(usize),
}

impl Growth {
    /// Computes the capacity to grow to from `cap`, such that at least `required` elements fit.
    ///
    /// # Examples
    /// ```
    /// # use vlib::collections::contiguous::Growth;
    /// assert_eq!(Growth::Factor(2).next_cap(0, 1), 4);
    /// assert_eq!(Growth::Factor(2).next_cap(8, 9), 16);
    /// assert_eq!(Growth::Step(4).next_cap(8, 9), 12);
    /// assert_eq!(Growth::Step(4).next_cap(8, 20), 20);
    /// ```
    pub const fn next_cap(self, cap: usize, required: usize) -> usize {
        let grown = match self {
            Growth::Factor(factor) => {
                let factor = if factor < 2 { 2 } else { factor };
                let grown = cap.saturating_mul(factor);
                if grown < MIN_CAP { MIN_CAP } else { grown }
            },
            Growth::Step(step) => cap.saturating_add(if step == 0 { 1 } else { step }),
        };

        if grown < required { required } else { grown }
    }
}

impl Default for Growth {
    fn default() -> Self {
        Growth::Factor(2)
    }
}

/// A growable, contiguous sequence of `T`, with explicit length and capacity.
///
/// Storage is allocated lazily and is exclusively owned by the Sequence. Capacity only ever
/// increases as a side effect of other operations. [`resize`](Sequence::resize) and
/// [`expand`](Sequence::expand) never shrink, the only ways to release capacity are
/// [`shrink_to_fit`](Sequence::shrink_to_fit) and [`destruct`](Sequence::destruct).
///
/// Copying, moving and swapping are explicit: [`copy`](Sequence::copy) produces a deep copy that
/// shares nothing, [`take`](Sequence::take) moves the contents out leaving an empty Sequence and
/// [`swap`](Sequence::swap) exchanges contents without allocating.
///
/// # Errors
/// Misuse of an index or range produces an [`IndexError`]. The search functions and
/// [`pop_or`](Sequence::pop_or) treat absence as a normal outcome and never fail. Allocation
/// failures panic in the plain methods, while the `try_` variants return an [`AllocationError`].
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Sequence.
/// - `i`: The index of the item in question.
/// - `m`: The number of items in the second sequence.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `set` | `O(1)`* |
/// | `push` | `O(1)`*, `O(n)` |
/// | `push_unchecked` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `pop_or` | `O(n-i)` |
/// | `resize` | `O(n)`**, `O(1)` |
/// | `concat_in_place` | `O(m)`*, `O(n+m)` |
/// | `find` | `O(n)` |
/// | `find_sub` | `O(n*m)` |
/// | `sort` | `O(n^2)` |
///
/// \* Amortized, with the default [`Growth`] policy. If the Sequence doesn't have enough capacity
/// for the new elements, the operation has to reallocate.
///
/// \** If the Sequence has enough capacity already, `resize` is `O(1)`.
pub struct Sequence<T> {
    pub(crate) block: Block<T>,
    pub(crate) len: usize,
    pub(crate) growth: Growth,
}

impl<T> Sequence<T> {
    /// Creates a new Sequence with length and capacity 0. Memory will be allocated when the
    /// capacity changes.
    ///
    /// # Examples
    /// ```
    /// # use vlib::collections::contiguous::Sequence;
    /// let seq: Sequence<u8> = Sequence::new();
    /// assert_eq!(seq.len(), 0);
    /// assert_eq!(seq.cap(), 0);
    /// ```
    pub const fn new() -> Sequence<T> {
        Sequence::with_growth(Growth::Factor(2))
    }

    /// Creates a new, empty Sequence which grows according to the provided policy.
    pub const fn with_growth(growth: Growth) -> Sequence<T> {
        Sequence {
            block: Block::new(),
            len: 0,
            growth,
        }
    }

    /// Creates a new Sequence with capacity for exactly `cap` elements.
    ///
    /// # Errors
    /// Returns an [`AllocationError`] if the allocation is too large or the allocator fails.
    pub fn try_with_cap(cap: usize) -> Result<Sequence<T>, AllocationError> {
        Ok(Sequence {
            block: Block::try_with_cap(cap)?,
            len: 0,
            growth: Growth::default(),
        })
    }

    /// Creates a new Sequence with capacity exactly equal to the provided value, allowing values
    /// to be added without reallocation.
    ///
    /// # Panics
    /// Panics if the allocation fails or its size would exceed [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use vlib::collections::contiguous::Sequence;
    /// let mut seq: Sequence<u8> = Sequence::with_cap(5);
    /// assert_eq!(seq.cap(), 5);
    /// seq.extend([1_u8, 2, 3, 4, 5]);
    /// assert_eq!(seq.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> Sequence<T> {
        Sequence::try_with_cap(cap).throw()
    }

    /// Returns the number of initialized elements in the Sequence.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Sequence contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the Sequence can hold without reallocating.
    pub const fn cap(&self) -> usize {
        self.block.cap()
    }

    pub const fn growth(&self) -> Growth {
        self.growth
    }

    pub const fn set_growth(&mut self, growth: Growth) {
        self.growth = growth;
    }

    /// Ensures that the capacity is at least `required`. If it already is, nothing happens: the
    /// capacity is never reduced by this method, so pointers obtained from
    /// [`as_ptr`](Sequence::as_ptr) remain valid across calls that don't need to grow.
    ///
    /// # Errors
    /// Returns an [`AllocationError`] if the allocation is too large or the allocator fails. The
    /// Sequence is unchanged in that case.
    pub fn try_resize(&mut self, required: usize) -> Result<(), AllocationError> {
        if required <= self.cap() {
            return Ok(());
        }
        self.block.try_realloc(required)
    }

    /// See [`try_resize`](Sequence::try_resize).
    ///
    /// # Panics
    /// Panics if the allocation fails or its size would exceed [`isize::MAX`].
    pub fn resize(&mut self, required: usize) {
        self.try_resize(required).throw()
    }

    /// Ensures that there is capacity for `additional` elements past the current length,
    /// growing according to the Sequence's [`Growth`] policy.
    ///
    /// # Errors
    /// Returns an [`AllocationError`] if the allocation is too large or the allocator fails.
    pub fn try_expand(&mut self, additional: usize) -> Result<(), AllocationError> {
        let required = self.len.checked_add(additional).ok_or(CapacityOverflow)?;
        if required <= self.cap() {
            return Ok(());
        }

        let target = self.growth.next_cap(self.cap(), required);
        match self.block.try_realloc(target) {
            // The amortized target is too large, but the exact requirement might still fit.
            Err(AllocationError::CapacityOverflow(_)) if target > required => {
                self.block.try_realloc(required)
            },
            result => result,
        }
    }

    /// See [`try_expand`](Sequence::try_expand).
    ///
    /// # Panics
    /// Panics if the allocation fails or its size would exceed [`isize::MAX`].
    pub fn expand(&mut self, additional: usize) {
        self.try_expand(additional).throw()
    }

    /// Reallocates so that the capacity is equal to the length.
    ///
    /// # Panics
    /// Panics if the allocator fails.
    pub fn shrink_to_fit(&mut self) {
        self.block.try_realloc(self.len).throw()
    }

    /// Moves the contents out of the Sequence, leaving it empty and unallocated. The returned
    /// Sequence owns the original storage, so this never allocates.
    ///
    /// # Examples
    /// ```
    /// # use vlib::seq;
    /// let mut donor = seq![1, 2, 3];
    /// let taken = donor.take();
    /// assert_eq!(&*taken, &[1, 2, 3]);
    /// assert_eq!((donor.len(), donor.cap()), (0, 0));
    /// ```
    pub fn take(&mut self) -> Sequence<T> {
        let growth = self.growth;
        mem::replace(self, Sequence::with_growth(growth))
    }

    /// Exchanges the contents of two Sequences without allocating.
    pub fn swap(&mut self, other: &mut Sequence<T>) {
        mem::swap(self, other);
    }

    /// Drops all elements and releases the storage, leaving the Sequence with length and capacity
    /// 0. Calling this on an already empty Sequence does nothing.
    pub fn destruct(&mut self) {
        self.clear();
        self.block = Block::new();
    }

    /// Drops all elements, keeping the capacity.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Drops all elements from `len` onwards. Does nothing if `len` is not less than the current
    /// length.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }

        let old_len = self.len;
        // Set len first, so that a panicking drop leaks rather than double dropping.
        self.len = len;

        // SAFETY: All values in len..old_len are initialized and no longer reachable through the
        // Sequence.
        unsafe {
            ptr::drop_in_place(slice::from_raw_parts_mut(
                self.as_mut_ptr().add(len),
                old_len - len,
            ));
        }
    }

    /// Push the provided value onto the end of the Sequence, increasing the capacity if required.
    ///
    /// # Panics
    /// Panics if growing the Sequence fails.
    ///
    /// # Examples
    /// ```
    /// # use vlib::collections::contiguous::Sequence;
    /// let mut seq = Sequence::new();
    /// for i in 1..=3 {
    ///     seq.push(i);
    /// }
    /// assert_eq!(&*seq, &[1, 2, 3]);
    /// ```
    pub fn push(&mut self, value: T) {
        if self.len == self.cap() {
            self.expand(1);
        }
        // SAFETY: The capacity has just been adjusted to support the addition of the new item.
        unsafe { self.push_unchecked(value) }
    }

    /// Push the provided value onto the end of the Sequence, assuming that there is enough
    /// capacity to do so.
    ///
    /// # Safety
    /// It is up to the caller to ensure that the Sequence has capacity for at least one more
    /// element, using methods like [`resize`](Sequence::resize), [`expand`](Sequence::expand) or
    /// [`with_cap`](Sequence::with_cap). Using this method on a full Sequence is undefined
    /// behavior.
    pub unsafe fn push_unchecked(&mut self, value: T) {
        debug_assert!(self.len < self.cap());
        // SAFETY: The caller guarantees that len < cap, so the slot is within the allocation.
        unsafe { self.block.as_mut_ptr().add(self.len).write(MaybeUninit::new(value)) }
        self.len += 1;
    }

    /// Pushes every value produced by `values`, reserving space for the iterator's lower size
    /// bound up front.
    ///
    /// # Panics
    /// Panics if growing the Sequence fails.
    pub fn append<I: IntoIterator<Item = T>>(&mut self, values: I) {
        let iter = values.into_iter();
        self.expand(iter.size_hint().0);
        for value in iter {
            self.push(value);
        }
    }

    /// Removes and returns the last element, if there is one.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            // SAFETY: The value at the old last index is initialized and is no longer reachable
            // through the Sequence, so reading it moves it out.
            Some(unsafe { self.as_ptr().add(self.len).read() })
        }
    }

    /// Removes and returns the element at `index`, shifting all following elements to the left.
    /// If `index` is out of bounds, nothing is removed and `default` is returned instead.
    ///
    /// # Examples
    /// ```
    /// # use vlib::seq;
    /// let mut seq = seq![10, 20, 30];
    /// assert_eq!(seq.pop_or(1, -1), 20);
    /// assert_eq!(seq.pop_or(5, -1), -1);
    /// assert_eq!(&*seq, &[10, 30]);
    /// ```
    pub fn pop_or(&mut self, index: usize, default: T) -> T {
        self.pop_or_else(index, || default)
    }

    /// Like [`pop_or`](Sequence::pop_or), using [`T::default()`](Default::default) for an out of
    /// bounds index.
    pub fn pop_or_default(&mut self, index: usize) -> T
    where
        T: Default,
    {
        self.pop_or_else(index, T::default)
    }

    /// Like [`pop_or`](Sequence::pop_or), computing the default lazily.
    pub fn pop_or_else<F: FnOnce() -> T>(&mut self, index: usize, default: F) -> T {
        if index >= self.len {
            return default();
        }

        // SAFETY: index < len so the value is initialized. After reading it out, the following
        // values are shifted over its slot and len is reduced, so it is never read again.
        unsafe {
            let slot = self.as_mut_ptr().add(index);
            let value = slot.read();
            ptr::copy(slot.add(1), slot, self.len - index - 1);
            self.len -= 1;
            value
        }
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`IndexError::OutOfBounds`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&T, IndexError> {
        self.check_index(index)?;
        Ok(&self[index])
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`IndexError::OutOfBounds`] if `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, IndexError> {
        self.check_index(index)?;
        Ok(&mut self[index])
    }

    /// Overwrites the element at `index`. Setting the element one past the end appends it, so
    /// `set(len, value)` behaves like [`push`](Sequence::push).
    ///
    /// # Errors
    /// Returns [`IndexError::OutOfBounds`] if `index > len`.
    ///
    /// # Examples
    /// ```
    /// # use vlib::seq;
    /// let mut seq = seq!['a', 'b'];
    /// seq.set(0, 'z').unwrap();
    /// seq.set(2, 'c').unwrap();
    /// assert!(seq.set(5, 'x').is_err());
    /// assert_eq!(&*seq, &['z', 'b', 'c']);
    /// ```
    pub fn set(&mut self, index: usize, value: T) -> Result<(), IndexError> {
        match index.cmp(&self.len) {
            cmp::Ordering::Less => self[index] = value,
            cmp::Ordering::Equal => self.push(value),
            cmp::Ordering::Greater => Err(OutOfBounds { index, len: self.len })?,
        }
        Ok(())
    }

    /// Returns the first element.
    ///
    /// # Errors
    /// Returns [`IndexError::Empty`] if the Sequence is empty.
    pub fn first(&self) -> Result<&T, IndexError> {
        self.deref().first().ok_or(EmptySequence.into())
    }

    /// Returns the last element.
    ///
    /// # Errors
    /// Returns [`IndexError::Empty`] if the Sequence is empty.
    pub fn last(&self) -> Result<&T, IndexError> {
        self.deref().last().ok_or(EmptySequence.into())
    }

    /// Inserts the provided value at `index`, shifting the following elements to the right and
    /// growing if necessary. An `index` equal to the length appends.
    ///
    /// # Errors
    /// Returns [`IndexError::OutOfBounds`] if `index > len`.
    ///
    /// # Examples
    /// ```
    /// # use vlib::seq;
    /// let mut seq = seq![0, 1, 2];
    /// seq.insert(1, 100).unwrap();
    /// seq.insert(4, 200).unwrap();
    /// assert_eq!(&*seq, &[0, 100, 1, 2, 200]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), IndexError> {
        if index > self.len {
            Err(OutOfBounds { index, len: self.len })?;
        }
        self.insert_at(index, value);
        Ok(())
    }

    /// Returns a pointer to the first element. The pointer remains valid until the Sequence
    /// reallocates.
    pub const fn as_ptr(&self) -> *const T {
        self.block.as_ptr().cast()
    }

    pub const fn as_mut_ptr(&mut self) -> *mut T {
        self.block.as_mut_ptr().cast()
    }

    /// Checks that the provided index refers to an initialized element.
    ///
    /// # Errors
    /// Returns [`IndexError::OutOfBounds`] if `index >= len`.
    pub(crate) fn check_index(&self, index: usize) -> Result<(), IndexError> {
        if index >= self.len {
            Err(OutOfBounds { index, len: self.len })?;
        }
        Ok(())
    }

    /// Inserts without checking the index against the length.
    pub(crate) fn insert_at(&mut self, index: usize, value: T) {
        debug_assert!(index <= self.len);

        if self.len == self.cap() {
            self.expand(1);
        }

        // SAFETY: There is capacity for len + 1 elements. Values in index..len are moved one slot
        // right (the regions may overlap, so ptr::copy is used) before index is overwritten.
        unsafe {
            let slot = self.as_mut_ptr().add(index);
            ptr::copy(slot, slot.add(1), self.len - index);
            slot.write(value);
        }
        self.len += 1;
    }

    /// Drops the elements in `start..end` and shifts the following elements left to fill the gap.
    pub(crate) fn remove_range(&mut self, start: usize, end: usize) {
        debug_assert!(start <= end && end <= self.len);

        let old_len = self.len;
        // A panicking drop leaks the tail rather than exposing dropped values.
        self.len = start;

        // SAFETY: start..end is initialized and is dropped exactly once. The tail end..old_len is
        // then moved into place, and len is restored to cover exactly the moved values.
        unsafe {
            let base = self.as_mut_ptr();
            ptr::drop_in_place(slice::from_raw_parts_mut(base.add(start), end - start));
            ptr::copy(base.add(end), base.add(start), old_len - end);
        }
        self.len = old_len - (end - start);
    }

    /// Returns the uninitialized slots past the end of the Sequence.
    pub(crate) fn spare_mut(&mut self) -> &mut [MaybeUninit<T>] {
        let len = self.len;
        &mut self.block.slots_mut()[len..]
    }

    /// Sets the length without touching the contents.
    ///
    /// # Safety
    /// `len` must be no greater than the capacity and all values below it must be initialized.
    /// Values at or above `len` are not dropped.
    pub(crate) const unsafe fn set_len(&mut self, len: usize) {
        self.len = len;
    }
}

impl<T: Clone> Sequence<T> {
    /// Creates a Sequence holding a clone of every element of `values`, with capacity equal to
    /// its length.
    pub fn from_slice(values: &[T]) -> Sequence<T> {
        let mut seq = Sequence::with_cap(values.len());
        // SAFETY: Capacity for every element of values has just been allocated.
        unsafe { seq.concat_unchecked(values) };
        seq
    }

    /// Creates a Sequence containing `count` clones of `value`.
    pub fn repeat(value: T, count: usize) -> Sequence<T> {
        let mut seq = Sequence::with_cap(count);
        for _ in 0..count {
            // SAFETY: The Sequence was created with capacity for count values.
            unsafe { seq.push_unchecked(value.clone()) }
        }
        seq
    }

    /// Creates a deep copy of the Sequence. The copy has its own storage, with capacity equal to
    /// the length of the original, and the same growth policy.
    pub fn copy(&self) -> Sequence<T> {
        let mut copy = Sequence::from_slice(self);
        copy.growth = self.growth;
        copy
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Sequence<T> {
    fn drop(&mut self) {
        // Drop all initialized values in place, then let the Block release the memory.
        self.clear();
    }
}

impl<T> Deref for Sequence<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The Block is valid and properly aligned for cap values, the first len of which
        // are initialized. A dangling pointer is valid for an empty slice.
        unsafe { slice::from_raw_parts(self.as_ptr(), self.len) }
    }
}

impl<T> DerefMut for Sequence<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: See Deref. The mutable borrow of self ensures unique access.
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), self.len) }
    }
}

impl<T> AsRef<[T]> for Sequence<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for Sequence<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Borrow<[T]> for Sequence<T> {
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T> BorrowMut<[T]> for Sequence<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T: Clone> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.append(iter);
    }
}

impl<'a, T: Clone + 'a> Extend<&'a T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.append(iter.into_iter().cloned());
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = Sequence::new();
        seq.append(iter);
        seq
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(value: [T; N]) -> Self {
        let mut seq = Sequence::with_cap(N);
        for item in value {
            // SAFETY: The Sequence was created with capacity for all N values.
            unsafe { seq.push_unchecked(item) }
        }
        seq
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    fn from(value: &[T]) -> Self {
        Sequence::from_slice(value)
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(value: Vec<T>) -> Self {
        let mut seq = Sequence::with_cap(value.len());
        for item in value {
            // SAFETY: The Sequence was created with capacity for every value of the Vec.
            unsafe { seq.push_unchecked(item) }
        }
        seq
    }
}

impl<T> From<Sequence<T>> for Vec<T> {
    fn from(value: Sequence<T>) -> Self {
        value.into_iter().collect()
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: PartialEq> PartialEq<[T]> for Sequence<T> {
    fn eq(&self, other: &[T]) -> bool {
        **self == *other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for Sequence<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        **self == *other
    }
}

impl<T: Eq> Eq for Sequence<T> {}

impl<T: PartialOrd> PartialOrd for Sequence<T> {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        (**self).partial_cmp(&**other)
    }
}

impl<T: Ord> Ord for Sequence<T> {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        (**self).cmp(&**other)
    }
}

impl<T: Hash> Hash for Sequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Sequence<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("contents", &DebugList(self))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

/// Creates a [`Sequence`] containing the arguments, in the same manner as [`vec!`].
///
/// # Examples
/// ```
/// # use vlib::seq;
/// let seq = seq![1, 2, 3];
/// assert_eq!(&*seq, &[1, 2, 3]);
///
/// let zeros = seq![0_u8; 4];
/// assert_eq!(&*zeros, &[0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! seq {
    () => {
        $crate::collections::contiguous::Sequence::new()
    };
    ($value:expr; $count:expr) => {
        $crate::collections::contiguous::Sequence::repeat($value, $count)
    };
    ($($value:expr),+ $(,)?) => {
        $crate::collections::contiguous::Sequence::from([$($value),+])
    };
}
