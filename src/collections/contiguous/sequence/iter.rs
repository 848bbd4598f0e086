use std::iter::FusedIterator;
use std::mem::{self, ManuallyDrop};
use std::ptr;
use std::slice;

use super::Sequence;
use crate::collections::contiguous::block::Block;

impl<T> IntoIterator for Sequence<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let mut seq = ManuallyDrop::new(self);
        IntoIter {
            block: mem::take(&mut seq.block),
            start: 0,
            end: seq.len,
        }
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Sequence<T> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// An owned iterator over the elements of a [`Sequence`]. See [`Sequence::into_iter`].
///
/// The iterator takes over the Sequence's storage. Values in `start..end` are still owned by the
/// iterator, everything outside of that range has already been moved out.
pub struct IntoIter<T> {
    pub(crate) block: Block<T>,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl<T> IntoIter<T> {
    /// Returns the values that haven't been yielded yet.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: start..end is initialized and within the Block.
        unsafe {
            slice::from_raw_parts(self.block.as_ptr().cast::<T>().add(self.start), self.end - self.start)
        }
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining = self.end - self.start;
        let start = self.start;
        self.start = self.end;

        // SAFETY: The values in start..end haven't been moved out and are dropped exactly once.
        unsafe {
            ptr::drop_in_place(slice::from_raw_parts_mut(
                self.block.as_mut_ptr().cast::<T>().add(start),
                remaining,
            ));
        }
        // The Block deallocates itself afterwards.
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }

        // SAFETY: start < end, so the value is initialized. Incrementing start afterwards means
        // that the value is never read or dropped again, effectively moving it out of the Block.
        let value = unsafe { self.block.as_ptr().cast::<T>().add(self.start).read() };
        self.start += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }

        self.end -= 1;
        // SAFETY: end has just been decremented and is still >= start, so the value is
        // initialized and now outside of the owned range.
        Some(unsafe { self.block.as_ptr().cast::<T>().add(self.end).read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
