use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Bound, Div, Mul, RangeBounds, Rem};
use std::ptr;

use super::{Growth, Sequence};
use crate::error::{CapacityOverflow, IndexError, InvertedRange, OutOfBounds};
use crate::util::result::Throw;

/// The direction in which a search scans a sequence.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Scan from the start of the range, returning the first match.
    #[default]
    Forward,
    /// Scan from the end of the range, returning the last match.
    Backward,
}

/// Resolves `range` against a sequence of length `len`, clamping both ends to the length.
pub(crate) fn clamp_range<R: RangeBounds<usize>>(range: R, len: usize) -> (usize, usize) {
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => end.saturating_add(1),
        Bound::Excluded(&end) => end,
        Bound::Unbounded => len,
    };

    let end = end.min(len);
    (start.min(end), end)
}

impl<T> Sequence<T> {
    /// Keeps only the elements for which `keep` returns true, preserving their order.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut keep: F) {
        let len = self.len;
        // A panic in keep or in a drop leaks the remaining values instead of double dropping.
        self.len = 0;

        let base = self.as_mut_ptr();
        let mut write = 0;
        for read in 0..len {
            // SAFETY: read < len, so the value is initialized and hasn't been moved yet. Kept
            // values move to write <= read, which has already been vacated.
            unsafe {
                let slot = base.add(read);
                if keep(&*slot) {
                    if read != write {
                        ptr::copy_nonoverlapping(slot, base.add(write), 1);
                    }
                    write += 1;
                } else {
                    ptr::drop_in_place(slot);
                }
            }
        }

        self.len = write;
    }

    /// Narrows the Sequence down to the elements in `start..end`, in place. See
    /// [`slice`](Sequence::slice) for the bounds policy.
    ///
    /// # Errors
    /// Returns [`IndexError::InvertedRange`] if `start > end`, or [`IndexError::OutOfBounds`] if
    /// `start` is greater than the length. The Sequence is unchanged when an error is returned.
    pub fn slice_in_place(&mut self, start: usize, end: usize) -> Result<(), IndexError> {
        let (start, end) = self.slice_bounds(start, end)?;
        self.truncate(end);
        self.remove_range(0, start);
        Ok(())
    }

    /// Reverses the order of the elements, in place.
    pub fn reverse_in_place(&mut self) {
        <[T]>::reverse(self);
    }

    /// Sorts the elements in place using a stable insertion sort. See [`sort`](Sequence::sort).
    pub fn sort_in_place(&mut self)
    where
        T: PartialOrd,
    {
        let growth = self.growth;
        let old = self.take();
        *self = Sequence::insertion_sorted(old.into_iter(), growth, |new, existing| new <= existing);
    }

    /// Sorts the elements in place with a comparator, using a stable insertion sort.
    pub fn sort_in_place_by<F: FnMut(&T, &T) -> Ordering>(&mut self, mut compare: F) {
        let growth = self.growth;
        let old = self.take();
        *self = Sequence::insertion_sorted(old.into_iter(), growth, |new, existing| {
            compare(new, existing) != Ordering::Greater
        });
    }

    /// Returns the index of the first element equal to `value`.
    ///
    /// # Examples
    /// ```
    /// # use vlib::seq;
    /// let seq = seq![3, 1, 4, 1, 5];
    /// assert_eq!(seq.find(&1), Some(1));
    /// assert_eq!(seq.rfind(&1), Some(3));
    /// assert_eq!(seq.find(&9), None);
    /// ```
    pub fn find(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.find_in(value, .., Direction::Forward)
    }

    /// Returns the index of the last element equal to `value`.
    pub fn rfind(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.find_in(value, .., Direction::Backward)
    }

    /// Searches `range` for `value` in the given direction, returning the index (relative to the
    /// whole Sequence) of the first match encountered. The range is clamped to the length, so an
    /// out of range search simply finds nothing.
    pub fn find_in<R: RangeBounds<usize>>(
        &self,
        value: &T,
        range: R,
        direction: Direction,
    ) -> Option<usize>
    where
        T: PartialEq,
    {
        let (start, end) = clamp_range(range, self.len);
        let mut iter = self[start..end].iter();
        let found = match direction {
            Direction::Forward => iter.position(|item| item == value),
            Direction::Backward => iter.rposition(|item| item == value),
        };
        found.map(|index| index + start)
    }

    /// Returns the index at which the first occurrence of `needle` starts. An empty needle is
    /// never found.
    pub fn find_sub(&self, needle: &[T]) -> Option<usize>
    where
        T: PartialEq,
    {
        self.find_sub_in(needle, .., Direction::Forward)
    }

    /// Returns the index at which the last occurrence of `needle` starts.
    pub fn rfind_sub(&self, needle: &[T]) -> Option<usize>
    where
        T: PartialEq,
    {
        self.find_sub_in(needle, .., Direction::Backward)
    }

    /// Searches `range` for an occurrence of `needle` lying entirely within it.
    pub fn find_sub_in<R: RangeBounds<usize>>(
        &self,
        needle: &[T],
        range: R,
        direction: Direction,
    ) -> Option<usize>
    where
        T: PartialEq,
    {
        let (start, end) = clamp_range(range, self.len);
        let haystack = &self[start..end];
        if needle.is_empty() || needle.len() > haystack.len() {
            return None;
        }

        let mut windows = haystack.windows(needle.len());
        let found = match direction {
            Direction::Forward => windows.position(|window| window == needle),
            Direction::Backward => windows.rposition(|window| window == needle),
        };
        found.map(|index| index + start)
    }

    /// Returns true if any element is equal to `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.find(value).is_some()
    }

    /// Returns true if `needle` occurs anywhere in the Sequence.
    pub fn contains_sub(&self, needle: &[T]) -> bool
    where
        T: PartialEq,
    {
        self.find_sub(needle).is_some()
    }

    /// Counts the elements equal to `value`.
    pub fn count(&self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.count_in(value, ..)
    }

    /// Counts the elements equal to `value` within `range`.
    pub fn count_in<R: RangeBounds<usize>>(&self, value: &T, range: R) -> usize
    where
        T: PartialEq,
    {
        let (start, end) = clamp_range(range, self.len);
        self[start..end].iter().filter(|item| *item == value).count()
    }

    /// Counts the non-overlapping occurrences of `needle`.
    ///
    /// # Examples
    /// ```
    /// # use vlib::seq;
    /// let seq = seq![1, 1, 1, 1, 1];
    /// assert_eq!(seq.count_sub(&[1, 1]), 2);
    /// ```
    pub fn count_sub(&self, needle: &[T]) -> usize
    where
        T: PartialEq,
    {
        self.count_sub_in(needle, ..)
    }

    /// Counts the non-overlapping occurrences of `needle` lying entirely within `range`.
    pub fn count_sub_in<R: RangeBounds<usize>>(&self, needle: &[T], range: R) -> usize
    where
        T: PartialEq,
    {
        let (mut start, end) = clamp_range(range, self.len);
        let mut count = 0;
        while let Some(found) = self.find_sub_in(needle, start..end, Direction::Forward) {
            count += 1;
            start = found + needle.len();
        }
        count
    }

    /// Removes every element equal to any of `values`, in place.
    pub fn remove_in_place(&mut self, values: &[T])
    where
        T: PartialEq,
    {
        self.retain(|item| !values.contains(item));
    }

    /// Overwrites every element equal to `from` with a clone of `to`, in place.
    pub fn replace_in_place(&mut self, from: &T, to: &T)
    where
        T: PartialEq + Clone,
    {
        for item in self.iter_mut() {
            if item == from {
                item.clone_from(to);
            }
        }
    }

    /// Removes `remove` elements starting at `at` and inserts clones of `insert` in their place,
    /// shifting the tail to account for any difference in length.
    ///
    /// # Errors
    /// Returns [`IndexError::OutOfBounds`] if `at + remove` is greater than the length.
    ///
    /// # Examples
    /// ```
    /// # use vlib::seq;
    /// let mut seq = seq![1, 2, 3, 4];
    /// seq.splice(1, 2, &[7, 8, 9]).unwrap();
    /// assert_eq!(&*seq, &[1, 7, 8, 9, 4]);
    /// ```
    pub fn splice(&mut self, at: usize, remove: usize, insert: &[T]) -> Result<(), IndexError>
    where
        T: Clone,
    {
        let end = at.saturating_add(remove);
        if end > self.len {
            Err(OutOfBounds { index: end, len: self.len })?;
        }
        self.splice_unchecked(at, end, insert);
        Ok(())
    }

    /// Inserts clones of `values` at `index`, shifting the tail right.
    ///
    /// # Errors
    /// Returns [`IndexError::OutOfBounds`] if `index > len`.
    pub fn insert_slice(&mut self, index: usize, values: &[T]) -> Result<(), IndexError>
    where
        T: Clone,
    {
        self.splice(index, 0, values)
    }

    /// Replaces every non-overlapping occurrence of `from` with `to`, in place, scanning left to
    /// right. Replacements are never rescanned. An empty `from` matches nothing.
    pub fn replace_sub_in_place(&mut self, from: &[T], to: &[T])
    where
        T: PartialEq + Clone,
    {
        let mut start = 0;
        while let Some(found) = self.find_sub_in(from, start.., Direction::Forward) {
            if from.len() == to.len() {
                self[found..found + to.len()].clone_from_slice(to);
            } else {
                self.splice_unchecked(found, found + from.len(), to);
            }
            start = found + to.len();
        }
    }

    /// Appends clones of every element of `other`, growing once if necessary.
    ///
    /// # Panics
    /// Panics if growing the Sequence fails.
    pub fn concat_in_place(&mut self, other: &[T])
    where
        T: Clone,
    {
        self.expand(other.len());
        // SAFETY: Capacity for every value in other has just been ensured.
        unsafe { self.concat_unchecked(other) }
    }

    /// Appends clones of every element of `other` without checking the capacity.
    ///
    /// # Safety
    /// The caller must ensure that `cap - len >= other.len()`, as with
    /// [`push_unchecked`](Sequence::push_unchecked).
    pub unsafe fn concat_unchecked(&mut self, other: &[T])
    where
        T: Clone,
    {
        for value in other {
            // SAFETY: The caller guarantees capacity for every value in other.
            unsafe { self.push_unchecked(value.clone()) }
        }
    }

    /// Removes `at..end` and inserts clones of `insert` there. The caller checks the bounds.
    pub(crate) fn splice_unchecked(&mut self, at: usize, end: usize, insert: &[T])
    where
        T: Clone,
    {
        self.remove_range(at, end);
        self.expand(insert.len());

        let len = self.len;
        // Until the tail is restored, a panicking clone leaks the tail rather than exposing
        // uninitialized slots.
        self.len = at;

        // SAFETY: There is capacity for len + insert.len() values. The tail at..len is moved right
        // by insert.len() (ptr::copy handles the overlap) and the vacated slots are written once
        // each before len is raised to cover them.
        unsafe {
            let base = self.as_mut_ptr();
            ptr::copy(base.add(at), base.add(at + insert.len()), len - at);
            for (offset, value) in insert.iter().enumerate() {
                base.add(at + offset).write(value.clone());
            }
        }
        self.len = len + insert.len();
    }

    /// Validates and resolves slice bounds.
    pub(crate) fn slice_bounds(&self, start: usize, end: usize) -> Result<(usize, usize), IndexError> {
        if self.is_empty() {
            return Ok((0, 0));
        }
        if start > end {
            Err(InvertedRange { start, end })?;
        }

        let end = end.min(self.len);
        if start > end {
            Err(OutOfBounds { index: start, len: self.len })?;
        }
        Ok((start, end))
    }

    /// Builds a new Sequence by inserting each value before the first existing element it is
    /// less than or equal to. Values are taken from the back of `values`, which makes the result
    /// stable: equal elements keep their original relative order.
    pub(crate) fn insertion_sorted<I, F>(values: I, growth: Growth, mut le: F) -> Sequence<T>
    where
        I: DoubleEndedIterator<Item = T> + ExactSizeIterator,
        F: FnMut(&T, &T) -> bool,
    {
        let mut sorted = Sequence::with_cap(values.len());
        sorted.growth = growth;

        for value in values.rev() {
            let index = sorted
                .iter()
                .position(|existing| le(&value, existing))
                .unwrap_or(sorted.len);
            sorted.insert_at(index, value);
        }

        sorted
    }
}

impl<T: Clone> Sequence<T> {
    /// Builds a new Sequence with the same growth policy as self.
    pub(crate) fn rebuild<I: IntoIterator<Item = T>>(&self, values: I) -> Sequence<T> {
        let mut seq = Sequence::with_growth(self.growth);
        seq.append(values);
        seq
    }

    /// Returns a copy of the Sequence without any of the elements equal to one of `values`.
    ///
    /// # Examples
    /// ```
    /// # use vlib::seq;
    /// let seq = seq![1, 2, 3, 2, 4];
    /// assert_eq!(&*seq.remove(&[2, 4]), &[1, 3]);
    /// ```
    pub fn remove(&self, values: &[T]) -> Sequence<T>
    where
        T: PartialEq,
    {
        self.rebuild(self.iter().filter(|item| !values.contains(item)).cloned())
    }

    /// Returns a copy of the elements in `start..end`.
    ///
    /// Slicing an empty Sequence always succeeds with an empty result. Otherwise, `end` is clamped
    /// to the length.
    ///
    /// # Errors
    /// Returns [`IndexError::InvertedRange`] if `start > end`, or [`IndexError::OutOfBounds`] if
    /// `start` is greater than the length.
    ///
    /// # Examples
    /// ```
    /// # use vlib::seq;
    /// let seq = seq![1, 2, 3, 4, 5, 6];
    /// assert_eq!(&*seq.slice(1, 3).unwrap(), &[2, 3]);
    /// assert_eq!(&*seq.slice(4, usize::MAX).unwrap(), &[5, 6]);
    /// assert!(seq.slice(0, 0).unwrap().is_empty());
    /// assert!(seq.slice(5, 2).is_err());
    /// ```
    pub fn slice(&self, start: usize, end: usize) -> Result<Sequence<T>, IndexError> {
        let (start, end) = self.slice_bounds(start, end)?;
        Ok(self.rebuild(self[start..end].iter().cloned()))
    }

    /// Returns a copy of the Sequence followed by all elements of `other`.
    pub fn concat(&self, other: &[T]) -> Sequence<T> {
        let mut seq = Sequence::with_cap(
            self.len.checked_add(other.len()).ok_or(CapacityOverflow).throw()
        );
        seq.growth = self.growth;
        // SAFETY: The Sequence was created with capacity for both slices.
        unsafe {
            seq.concat_unchecked(self);
            seq.concat_unchecked(other);
        }
        seq
    }

    /// Returns a copy with every element equal to `from` replaced by `to`.
    pub fn replace(&self, from: &T, to: &T) -> Sequence<T>
    where
        T: PartialEq,
    {
        self.rebuild(self.iter().map(|item| if item == from { to } else { item }).cloned())
    }

    /// Returns a copy with every non-overlapping occurrence of `from` replaced by `to`.
    pub fn replace_sub(&self, from: &[T], to: &[T]) -> Sequence<T>
    where
        T: PartialEq,
    {
        let mut seq = self.copy();
        seq.replace_sub_in_place(from, to);
        seq
    }

    /// Returns a sorted copy, built by inserting each element into a fresh Sequence before the
    /// first element it is less than or equal to.
    ///
    /// This is an `O(n^2)` insertion sort. It is stable: elements that compare equal keep their
    /// original relative order.
    ///
    /// # Examples
    /// ```
    /// # use vlib::seq;
    /// let seq = seq![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
    /// let sorted = seq.sort_by(|a, b| a.0.cmp(&b.0));
    /// assert_eq!(&*sorted, &[(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    /// ```
    pub fn sort(&self) -> Sequence<T>
    where
        T: PartialOrd,
    {
        Sequence::insertion_sorted(self.iter().cloned(), self.growth, |new, existing| {
            new <= existing
        })
    }

    /// Returns a copy sorted with a comparator. See [`sort`](Sequence::sort).
    pub fn sort_by<F: FnMut(&T, &T) -> Ordering>(&self, mut compare: F) -> Sequence<T> {
        Sequence::insertion_sorted(self.iter().cloned(), self.growth, |new, existing| {
            compare(new, existing) != Ordering::Greater
        })
    }

    /// Returns a copy with the elements in reverse order.
    pub fn reverse(&self) -> Sequence<T> {
        self.rebuild(self.iter().rev().cloned())
    }

    /// Returns the Sequence repeated `count` times.
    ///
    /// # Panics
    /// Panics if the result would be too large to allocate.
    pub fn multiply(&self, count: usize) -> Sequence<T> {
        let mut seq = Sequence::with_cap(
            self.len.checked_mul(count).ok_or(CapacityOverflow).throw()
        );
        seq.growth = self.growth;
        for _ in 0..count {
            // SAFETY: The Sequence was created with capacity for count copies of self.
            unsafe { seq.concat_unchecked(self) }
        }
        seq
    }

    /// Splits the Sequence into `parts` consecutive pieces. The first `parts - 1` pieces each hold
    /// `len / parts` elements and the last piece holds the rest, so concatenating the pieces in
    /// order reproduces the original. Dividing into zero parts produces no pieces.
    ///
    /// # Examples
    /// ```
    /// # use vlib::collections::contiguous::Sequence;
    /// let seq: Sequence<_> = (0..10).collect();
    /// let parts = seq.divide(3);
    /// let lens: Vec<_> = parts.iter().map(|part| part.len()).collect();
    /// assert_eq!(lens, [3, 3, 4]);
    /// ```
    pub fn divide(&self, parts: usize) -> Sequence<Sequence<T>> {
        let mut divided = Sequence::with_cap(parts);
        if parts == 0 {
            return divided;
        }

        let size = self.len / parts;
        for part in 0..parts {
            let start = part * size;
            let end = if part == parts - 1 { self.len } else { start + size };
            // SAFETY: divided was created with capacity for every part.
            unsafe { divided.push_unchecked(self.rebuild(self[start..end].iter().cloned())) }
        }
        divided
    }

    /// Returns the trailing `len % size` elements: whatever is left over after cutting the
    /// Sequence into pieces of `size` elements. A size of zero leaves nothing over.
    pub fn modulo(&self, size: usize) -> Sequence<T> {
        if size == 0 {
            return Sequence::with_growth(self.growth);
        }
        let leftover = self.len % size;
        self.rebuild(self[self.len - leftover..].iter().cloned())
    }

    /// Splits the Sequence at every element equal to `delimiter`. Adjacent delimiters produce
    /// empty fragments, as does a delimiter at either end.
    pub fn split(&self, delimiter: &T) -> Sequence<Sequence<T>>
    where
        T: PartialEq,
    {
        <[T]>::split(self, |item| item == delimiter)
            .map(|fragment| self.rebuild(fragment.iter().cloned()))
            .collect()
    }

    /// Splits the Sequence at every non-overlapping occurrence of `delimiter`, scanning left to
    /// right. An empty delimiter doesn't split at all.
    ///
    /// # Examples
    /// ```
    /// # use vlib::seq;
    /// let seq = seq![1, 0, 0, 2, 0, 0, 0, 0, 3];
    /// let parts = seq.split_sub(&[0, 0]);
    /// assert_eq!(parts.len(), 4);
    /// assert_eq!(&*parts[0], &[1]);
    /// assert_eq!(&*parts[1], &[2]);
    /// assert!(parts[2].is_empty());
    /// assert_eq!(&*parts[3], &[3]);
    /// ```
    pub fn split_sub(&self, delimiter: &[T]) -> Sequence<Sequence<T>>
    where
        T: PartialEq,
    {
        let mut parts = Sequence::new();
        let mut start = 0;
        while let Some(found) = self.find_sub_in(delimiter, start.., Direction::Forward) {
            parts.push(self.rebuild(self[start..found].iter().cloned()));
            start = found + delimiter.len();
        }
        parts.push(self.rebuild(self[start..].iter().cloned()));
        parts
    }

    /// Concatenates `parts`, placing `separator` between each adjacent pair.
    ///
    /// # Examples
    /// ```
    /// # use vlib::seq;
    /// # use vlib::collections::contiguous::Sequence;
    /// let joined = Sequence::join([seq![1, 2], seq![3], seq![]], &[0]);
    /// assert_eq!(&*joined, &[1, 2, 0, 3, 0]);
    /// ```
    pub fn join<I>(parts: I, separator: &[T]) -> Sequence<T>
    where
        I: IntoIterator,
        I::Item: AsRef<[T]>,
    {
        let mut joined = Sequence::new();
        for (index, part) in parts.into_iter().enumerate() {
            if index != 0 {
                joined.concat_in_place(separator);
            }
            joined.concat_in_place(part.as_ref());
        }
        joined
    }
}

impl<T: Clone> Add<&[T]> for &Sequence<T> {
    type Output = Sequence<T>;

    fn add(self, rhs: &[T]) -> Self::Output {
        self.concat(rhs)
    }
}

impl<T: Clone> AddAssign<&[T]> for Sequence<T> {
    fn add_assign(&mut self, rhs: &[T]) {
        self.concat_in_place(rhs);
    }
}

impl<T: Clone> Mul<usize> for &Sequence<T> {
    type Output = Sequence<T>;

    fn mul(self, rhs: usize) -> Self::Output {
        self.multiply(rhs)
    }
}

impl<T: Clone> Div<usize> for &Sequence<T> {
    type Output = Sequence<Sequence<T>>;

    fn div(self, rhs: usize) -> Self::Output {
        self.divide(rhs)
    }
}

impl<T: Clone> Rem<usize> for &Sequence<T> {
    type Output = Sequence<T>;

    fn rem(self, rhs: usize) -> Self::Output {
        self.modulo(rhs)
    }
}
