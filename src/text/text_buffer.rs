use std::borrow::Borrow;
use std::cmp::Ordering;
use std::ffi::{CStr, c_char};
use std::fmt::{self, Debug, Display, Formatter, Write};
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Deref, DerefMut, Mul, RangeBounds};
use std::slice;
use std::str::{self, Utf8Error};

use crate::collections::contiguous::{Direction, Growth, Sequence};
use crate::error::{AllocationError, CapacityOverflow, IndexError};
use crate::util::fmt::DebugBytes;
use crate::util::result::Throw;

/// A growable byte string, stored in a [`Sequence<u8>`] that always keeps a zero byte after the
/// last element.
///
/// Every operation that can change the length or overwrite the tail writes the terminator again,
/// so [`c_str`](TextBuffer::c_str) and [`as_ptr`](TextBuffer::as_ptr) can hand the contents to C
/// without copying, at any point. A TextBuffer that has never been written to owns no storage at
/// all, in which case the C string accessors return an empty, static string.
///
/// The contents are bytes, not necessarily UTF-8. [`as_str`](TextBuffer::as_str) checks the
/// encoding when it matters. Case conversion only touches ASCII letters.
///
/// # Examples
/// ```
/// # use vlib::text::TextBuffer;
/// let mut text = TextBuffer::from("Hello");
/// text.concat_in_place(" World!");
/// assert_eq!(text.c_str(), c"Hello World!");
/// assert_eq!(text.len(), 12);
/// ```
pub struct TextBuffer {
    pub(crate) seq: Sequence<u8>,
}

impl TextBuffer {
    /// Creates an empty TextBuffer without allocating.
    pub const fn new() -> TextBuffer {
        TextBuffer { seq: Sequence::new() }
    }

    /// Creates an empty TextBuffer with room for `cap` bytes, plus the terminator.
    ///
    /// # Errors
    /// Returns an [`AllocationError`] if the allocation is too large or the allocator fails.
    pub fn try_with_cap(cap: usize) -> Result<TextBuffer, AllocationError> {
        let mut text = TextBuffer {
            seq: Sequence::try_with_cap(cap.checked_add(1).ok_or(CapacityOverflow)?)?,
        };
        text.terminate();
        Ok(text)
    }

    /// See [`try_with_cap`](TextBuffer::try_with_cap).
    ///
    /// # Panics
    /// Panics if the allocation fails or its size would exceed [`isize::MAX`].
    pub fn with_cap(cap: usize) -> TextBuffer {
        TextBuffer::try_with_cap(cap).throw()
    }

    /// Creates a TextBuffer holding a copy of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> TextBuffer {
        let mut text = TextBuffer::with_cap(bytes.len());
        text.concat_in_place(bytes);
        text
    }

    /// Creates a TextBuffer by copying a null-terminated C string, excluding the terminator.
    ///
    /// # Safety
    /// `ptr` must satisfy the requirements of [`CStr::from_ptr`]: it must be non-null and point to
    /// a valid, null-terminated string that isn't mutated for the duration of the call.
    pub unsafe fn from_c_ptr(ptr: *const c_char) -> TextBuffer {
        // SAFETY: Upheld by the caller.
        TextBuffer::from_bytes(unsafe { CStr::from_ptr(ptr) }.to_bytes())
    }

    /// Returns the number of bytes, excluding the terminator.
    pub const fn len(&self) -> usize {
        self.seq.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    /// Returns the number of bytes the TextBuffer can hold without reallocating. The slot used by
    /// the terminator isn't counted.
    pub const fn cap(&self) -> usize {
        self.seq.cap().saturating_sub(1)
    }

    pub const fn growth(&self) -> Growth {
        self.seq.growth()
    }

    pub const fn set_growth(&mut self, growth: Growth) {
        self.seq.set_growth(growth);
    }

    /// Ensures room for at least `required` bytes and the terminator. Capacity is never reduced.
    ///
    /// # Errors
    /// Returns an [`AllocationError`] if the allocation is too large or the allocator fails.
    pub fn try_resize(&mut self, required: usize) -> Result<(), AllocationError> {
        self.seq.try_resize(required.checked_add(1).ok_or(CapacityOverflow)?)?;
        self.terminate();
        Ok(())
    }

    /// See [`try_resize`](TextBuffer::try_resize).
    ///
    /// # Panics
    /// Panics if the allocation fails or its size would exceed [`isize::MAX`].
    pub fn resize(&mut self, required: usize) {
        self.try_resize(required).throw()
    }

    /// Ensures room for `additional` more bytes past the current length, using the growth policy.
    ///
    /// # Errors
    /// Returns an [`AllocationError`] if the allocation is too large or the allocator fails.
    pub fn try_expand(&mut self, additional: usize) -> Result<(), AllocationError> {
        self.seq.try_expand(additional.checked_add(1).ok_or(CapacityOverflow)?)?;
        self.terminate();
        Ok(())
    }

    /// See [`try_expand`](TextBuffer::try_expand).
    ///
    /// # Panics
    /// Panics if the allocation fails or its size would exceed [`isize::MAX`].
    pub fn expand(&mut self, additional: usize) {
        self.try_expand(additional).throw()
    }

    /// Reallocates so that there is no room beyond the contents and the terminator.
    ///
    /// # Panics
    /// Panics if the allocator fails.
    pub fn shrink_to_fit(&mut self) {
        if self.seq.cap() > self.len() + 1 {
            self.seq.shrink_to_fit();
            self.terminate();
        }
    }

    /// Returns the bytes, excluding the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.seq
    }

    /// Returns the bytes followed by the terminator.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        if self.seq.cap() == 0 {
            return b"\0";
        }
        // SAFETY: Allocated storage always has a slot past the last byte, which holds the
        // terminator written by the last mutation.
        unsafe { slice::from_raw_parts(self.seq.as_ptr(), self.len() + 1) }
    }

    /// Returns the contents as a C string. If the contents contain a zero byte, the C string ends
    /// there. The reference is valid until the next mutation, which the borrow checker enforces.
    pub fn c_str(&self) -> &CStr {
        CStr::from_bytes_until_nul(self.as_bytes_with_nul()).unwrap_or(c"")
    }

    /// Returns a pointer to the null-terminated contents, valid until the TextBuffer is mutated or
    /// dropped.
    pub fn as_ptr(&self) -> *const c_char {
        self.c_str().as_ptr()
    }

    /// Returns the contents as a `&str` if they are valid UTF-8.
    ///
    /// # Errors
    /// Returns a [`Utf8Error`] describing the first invalid sequence otherwise.
    pub fn as_str(&self) -> Result<&str, Utf8Error> {
        str::from_utf8(self)
    }

    pub fn as_sequence(&self) -> &Sequence<u8> {
        &self.seq
    }

    /// Converts into the underlying [`Sequence<u8>`]. The terminator is kept as spare capacity.
    pub fn into_sequence(self) -> Sequence<u8> {
        self.seq
    }

    /// Rewrites the terminator after the last byte, allocating a slot for it if necessary. An
    /// unallocated, empty TextBuffer is left alone.
    pub(crate) fn terminate(&mut self) {
        if self.seq.cap() == 0 && self.seq.is_empty() {
            return;
        }
        self.seq.expand(1);
        self.seq.spare_mut()[0].write(0);
    }

    /// Returns the bytes followed by the terminator, mutably.
    pub(crate) fn bytes_with_nul_mut(&mut self) -> &mut [u8] {
        if self.seq.cap() == 0 {
            return &mut [];
        }
        let len = self.len() + 1;
        // SAFETY: See as_bytes_with_nul. The mutable borrow of self ensures unique access.
        unsafe { slice::from_raw_parts_mut(self.seq.as_mut_ptr(), len) }
    }

    /// Creates a deep copy with room for exactly the contents and the terminator.
    pub fn copy(&self) -> TextBuffer {
        let mut copy = TextBuffer::from_bytes(self);
        copy.set_growth(self.growth());
        copy
    }

    /// Moves the contents out, leaving this TextBuffer empty and unallocated.
    pub fn take(&mut self) -> TextBuffer {
        TextBuffer { seq: self.seq.take() }
    }

    /// Exchanges the contents of two TextBuffers without allocating.
    pub fn swap(&mut self, other: &mut TextBuffer) {
        self.seq.swap(&mut other.seq);
    }

    /// Releases the storage, leaving the TextBuffer empty and unallocated.
    pub fn destruct(&mut self) {
        self.seq.destruct();
    }

    /// Removes all bytes, keeping the capacity.
    pub fn clear(&mut self) {
        self.seq.clear();
        self.terminate();
    }

    /// Shortens the contents to `len` bytes. Does nothing if `len` is not less than the length.
    pub fn truncate(&mut self, len: usize) {
        self.seq.truncate(len);
        self.terminate();
    }

    pub fn push(&mut self, byte: u8) {
        self.seq.push(byte);
        self.terminate();
    }

    pub fn push_str(&mut self, value: &str) {
        self.concat_in_place(value);
    }

    /// Appends `bytes`, growing once if necessary.
    pub fn concat_in_place<B: AsRef<[u8]>>(&mut self, bytes: B) {
        let bytes = bytes.as_ref();
        self.seq.expand(bytes.len().saturating_add(1));
        self.seq.concat_in_place(bytes);
        self.terminate();
    }

    /// Returns a copy followed by `bytes`.
    ///
    /// # Examples
    /// ```
    /// # use vlib::text::TextBuffer;
    /// let hello = TextBuffer::from("Hello");
    /// assert_eq!(hello.concat(", there"), "Hello, there");
    /// assert_eq!(hello, "Hello");
    /// ```
    pub fn concat<B: AsRef<[u8]>>(&self, bytes: B) -> TextBuffer {
        let bytes = bytes.as_ref();
        let mut text =
            TextBuffer::with_cap(self.len().checked_add(bytes.len()).ok_or(CapacityOverflow).throw());
        text.set_growth(self.growth());
        text.concat_in_place(self);
        text.concat_in_place(bytes);
        text
    }

    /// Inserts `byte` at `index`, shifting the tail right.
    ///
    /// # Errors
    /// Returns [`IndexError::OutOfBounds`] if `index > len`.
    pub fn insert(&mut self, index: usize, byte: u8) -> Result<(), IndexError> {
        self.seq.insert(index, byte)?;
        self.terminate();
        Ok(())
    }

    /// Inserts `bytes` at `index`, shifting the tail right.
    ///
    /// # Errors
    /// Returns [`IndexError::OutOfBounds`] if `index > len`.
    pub fn insert_bytes<B: AsRef<[u8]>>(&mut self, index: usize, bytes: B) -> Result<(), IndexError> {
        self.seq.insert_slice(index, bytes.as_ref())?;
        self.terminate();
        Ok(())
    }

    /// Removes and returns the last byte.
    pub fn pop(&mut self) -> Option<u8> {
        let byte = self.seq.pop();
        self.terminate();
        byte
    }

    /// Removes and returns the byte at `index`, or `default` if `index` is out of bounds.
    pub fn pop_or(&mut self, index: usize, default: u8) -> u8 {
        let byte = self.seq.pop_or(index, default);
        self.terminate();
        byte
    }

    /// Returns the byte at `index`.
    ///
    /// # Errors
    /// Returns [`IndexError::OutOfBounds`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<u8, IndexError> {
        self.seq.get(index).copied()
    }

    /// Overwrites the byte at `index`, or appends it if `index == len`.
    ///
    /// # Errors
    /// Returns [`IndexError::OutOfBounds`] if `index > len`.
    pub fn set(&mut self, index: usize, byte: u8) -> Result<(), IndexError> {
        self.seq.set(index, byte)?;
        self.terminate();
        Ok(())
    }

    /// # Errors
    /// Returns [`IndexError::Empty`] if the TextBuffer is empty.
    pub fn first(&self) -> Result<u8, IndexError> {
        self.seq.first().copied()
    }

    /// # Errors
    /// Returns [`IndexError::Empty`] if the TextBuffer is empty.
    pub fn last(&self) -> Result<u8, IndexError> {
        self.seq.last().copied()
    }

    /// Returns a copy without any of the bytes in `bytes`.
    pub fn remove<B: AsRef<[u8]>>(&self, bytes: B) -> TextBuffer {
        let mut text = self.copy();
        text.remove_in_place(bytes);
        text
    }

    pub fn remove_in_place<B: AsRef<[u8]>>(&mut self, bytes: B) {
        self.seq.remove_in_place(bytes.as_ref());
        self.terminate();
    }

    /// Returns a copy of the bytes in `start..end`, following the bounds policy of
    /// [`Sequence::slice`].
    ///
    /// # Errors
    /// Returns [`IndexError::InvertedRange`] if `start > end`, or [`IndexError::OutOfBounds`] if
    /// `start` is greater than the length.
    pub fn slice(&self, start: usize, end: usize) -> Result<TextBuffer, IndexError> {
        let (start, end) = self.seq.slice_bounds(start, end)?;
        let mut text = TextBuffer::from_bytes(&self[start..end]);
        text.set_growth(self.growth());
        Ok(text)
    }

    /// # Errors
    /// See [`slice`](TextBuffer::slice). The TextBuffer is unchanged when an error is returned.
    pub fn slice_in_place(&mut self, start: usize, end: usize) -> Result<(), IndexError> {
        self.seq.slice_in_place(start, end)?;
        self.terminate();
        Ok(())
    }

    /// Returns the index of the first occurrence of `needle`. An empty needle is never found.
    ///
    /// # Examples
    /// ```
    /// # use vlib::text::TextBuffer;
    /// let text = TextBuffer::from("Hello World");
    /// assert_eq!(text.find("lo"), Some(3));
    /// assert_eq!(text.find("xyz"), None);
    /// ```
    pub fn find<B: AsRef<[u8]>>(&self, needle: B) -> Option<usize> {
        self.seq.find_sub(needle.as_ref())
    }

    pub fn rfind<B: AsRef<[u8]>>(&self, needle: B) -> Option<usize> {
        self.seq.rfind_sub(needle.as_ref())
    }

    /// Searches `range` for `needle` in the given direction.
    pub fn find_in<B, R>(&self, needle: B, range: R, direction: Direction) -> Option<usize>
    where
        B: AsRef<[u8]>,
        R: RangeBounds<usize>,
    {
        self.seq.find_sub_in(needle.as_ref(), range, direction)
    }

    pub fn find_byte(&self, byte: u8) -> Option<usize> {
        self.seq.find(&byte)
    }

    pub fn contains<B: AsRef<[u8]>>(&self, needle: B) -> bool {
        self.find(needle).is_some()
    }

    /// Counts the non-overlapping occurrences of `needle`.
    pub fn count<B: AsRef<[u8]>>(&self, needle: B) -> usize {
        self.seq.count_sub(needle.as_ref())
    }

    /// Returns a copy with every non-overlapping occurrence of `from` replaced by `to`.
    ///
    /// # Examples
    /// ```
    /// # use vlib::text::TextBuffer;
    /// let text = TextBuffer::from("a-b-c");
    /// assert_eq!(text.replace("-", " -> "), "a -> b -> c");
    /// assert_eq!(text.replace("-", ""), "abc");
    /// ```
    pub fn replace<F: AsRef<[u8]>, T: AsRef<[u8]>>(&self, from: F, to: T) -> TextBuffer {
        let mut text = self.copy();
        text.replace_in_place(from, to);
        text
    }

    /// Replaces every non-overlapping occurrence of `from` with `to`, shifting the tail whenever
    /// their lengths differ.
    pub fn replace_in_place<F: AsRef<[u8]>, T: AsRef<[u8]>>(&mut self, from: F, to: T) {
        self.seq.replace_sub_in_place(from.as_ref(), to.as_ref());
        self.terminate();
    }

    pub fn reverse(&self) -> TextBuffer {
        let mut text = self.copy();
        text.reverse_in_place();
        text
    }

    pub fn reverse_in_place(&mut self) {
        self.seq.reverse_in_place();
    }

    /// Returns a copy with the bytes sorted in ascending order.
    pub fn sort(&self) -> TextBuffer {
        let mut text = self.copy();
        text.sort_in_place();
        text
    }

    pub fn sort_in_place(&mut self) {
        self.seq.sort_in_place();
        self.terminate();
    }

    /// Returns the contents repeated `count` times.
    pub fn multiply(&self, count: usize) -> TextBuffer {
        TextBuffer::from(self.seq.multiply(count))
    }

    /// Splits the contents into `parts` pieces, see [`Sequence::divide`].
    pub fn divide(&self, parts: usize) -> Sequence<TextBuffer> {
        self.seq.divide(parts).into_iter().map(TextBuffer::from).collect()
    }

    /// Splits at every non-overlapping occurrence of `delimiter`. Adjacent delimiters produce
    /// empty fragments. An empty delimiter doesn't split at all.
    ///
    /// # Examples
    /// ```
    /// # use vlib::text::TextBuffer;
    /// let parts = TextBuffer::from("a,,b").split(",");
    /// assert_eq!(parts.len(), 3);
    /// assert!(parts[1].is_empty());
    /// ```
    pub fn split<B: AsRef<[u8]>>(&self, delimiter: B) -> Sequence<TextBuffer> {
        self.seq
            .split_sub(delimiter.as_ref())
            .into_iter()
            .map(TextBuffer::from)
            .collect()
    }

    /// Concatenates `parts`, placing `separator` between each adjacent pair.
    pub fn join<I, B>(parts: I, separator: B) -> TextBuffer
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
        B: AsRef<[u8]>,
    {
        TextBuffer::from(Sequence::join(parts, separator.as_ref()))
    }

    pub fn upper(&self) -> TextBuffer {
        let mut text = self.copy();
        text.upper_in_place();
        text
    }

    /// Converts ASCII letters to uppercase, leaving all other bytes alone.
    pub fn upper_in_place(&mut self) {
        self.make_ascii_uppercase();
    }

    pub fn lower(&self) -> TextBuffer {
        let mut text = self.copy();
        text.lower_in_place();
        text
    }

    /// Converts ASCII letters to lowercase, leaving all other bytes alone.
    pub fn lower_in_place(&mut self) {
        self.make_ascii_lowercase();
    }

    /// Returns a copy wrapped in double quotes.
    pub fn quote(&self) -> TextBuffer {
        let mut text = self.copy();
        text.quote_in_place();
        text
    }

    pub fn quote_in_place(&mut self) {
        self.seq.expand(3);
        self.seq.insert_at(0, b'"');
        self.push(b'"');
    }

    /// Returns true if the contents start and end with a double quote, not counting a lone `"`.
    pub fn is_quoted(&self) -> bool {
        self.len() >= 2 && self.first() == Ok(b'"') && self.last() == Ok(b'"')
    }

    /// Returns a copy with one layer of double quotes removed, if there is one.
    ///
    /// # Examples
    /// ```
    /// # use vlib::text::TextBuffer;
    /// let text = TextBuffer::from("\"\"quoted\"\"");
    /// assert_eq!(text.unquote(), "\"quoted\"");
    /// assert_eq!(TextBuffer::from("plain").unquote(), "plain");
    /// ```
    pub fn unquote(&self) -> TextBuffer {
        let mut text = self.copy();
        text.unquote_in_place();
        text
    }

    pub fn unquote_in_place(&mut self) {
        if self.is_quoted() {
            let len = self.len();
            self.seq.remove_range(len - 1, len);
            self.seq.remove_range(0, 1);
            self.terminate();
        }
    }

    /// Inserts `pad` at the start until the length reaches `width`. A leading `-` stays in front,
    /// so that padded numbers keep their sign.
    ///
    /// # Examples
    /// ```
    /// # use vlib::text::TextBuffer;
    /// let mut text = TextBuffer::from("-1");
    /// text.ensure_start_padding(b'0', 4);
    /// assert_eq!(text, "-001");
    /// ```
    pub fn ensure_start_padding(&mut self, pad: u8, width: usize) {
        let Some(missing) = width.checked_sub(self.len()).filter(|missing| *missing > 0) else {
            return;
        };
        let at = usize::from(self.first() == Ok(b'-'));
        self.seq.resize(width.saturating_add(1));
        let padding = Sequence::repeat(pad, missing);
        // The range at..at is always within bounds.
        self.seq.splice_unchecked(at, at, &padding);
        self.terminate();
    }

    /// Appends `pad` until the length reaches `width`.
    pub fn ensure_end_padding(&mut self, pad: u8, width: usize) {
        if let Some(missing) = width.checked_sub(self.len()) {
            self.seq.resize(width.saturating_add(1));
            self.seq.append((0..missing).map(|_| pad));
            self.terminate();
        }
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for TextBuffer {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.seq
    }
}

impl DerefMut for TextBuffer {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // The length can't change through a slice, so the terminator stays in place.
        &mut self.seq
    }
}

impl AsRef<[u8]> for TextBuffer {
    fn as_ref(&self) -> &[u8] {
        self
    }
}

impl Borrow<[u8]> for TextBuffer {
    fn borrow(&self) -> &[u8] {
        self
    }
}

impl Clone for TextBuffer {
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl<'a> IntoIterator for &'a TextBuffer {
    type Item = &'a u8;

    type IntoIter = slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<u8> for TextBuffer {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        self.seq.append(iter);
        self.terminate();
    }
}

impl<'a> Extend<&'a u8> for TextBuffer {
    fn extend<I: IntoIterator<Item = &'a u8>>(&mut self, iter: I) {
        self.seq.append(iter.into_iter().copied());
        self.terminate();
    }
}

impl FromIterator<u8> for TextBuffer {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        TextBuffer::from(iter.into_iter().collect::<Sequence<u8>>())
    }
}

impl From<&str> for TextBuffer {
    fn from(value: &str) -> Self {
        TextBuffer::from_bytes(value.as_bytes())
    }
}

impl From<String> for TextBuffer {
    fn from(value: String) -> Self {
        TextBuffer::from_bytes(value.as_bytes())
    }
}

impl From<&[u8]> for TextBuffer {
    fn from(value: &[u8]) -> Self {
        TextBuffer::from_bytes(value)
    }
}

impl From<&CStr> for TextBuffer {
    fn from(value: &CStr) -> Self {
        TextBuffer::from_bytes(value.to_bytes())
    }
}

impl From<Sequence<u8>> for TextBuffer {
    fn from(value: Sequence<u8>) -> Self {
        let mut text = TextBuffer { seq: value };
        text.terminate();
        text
    }
}

impl From<TextBuffer> for Sequence<u8> {
    fn from(value: TextBuffer) -> Self {
        value.into_sequence()
    }
}

impl<B: AsRef<[u8]>> Add<B> for &TextBuffer {
    type Output = TextBuffer;

    fn add(self, rhs: B) -> Self::Output {
        self.concat(rhs)
    }
}

impl<B: AsRef<[u8]>> AddAssign<B> for TextBuffer {
    fn add_assign(&mut self, rhs: B) {
        self.concat_in_place(rhs);
    }
}

impl Mul<usize> for &TextBuffer {
    type Output = TextBuffer;

    fn mul(self, rhs: usize) -> Self::Output {
        self.multiply(rhs)
    }
}

impl PartialEq for TextBuffer {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl PartialEq<[u8]> for TextBuffer {
    fn eq(&self, other: &[u8]) -> bool {
        **self == *other
    }
}

impl PartialEq<str> for TextBuffer {
    fn eq(&self, other: &str) -> bool {
        **self == *other.as_bytes()
    }
}

impl PartialEq<&str> for TextBuffer {
    fn eq(&self, other: &&str) -> bool {
        **self == *other.as_bytes()
    }
}

impl Eq for TextBuffer {}

impl PartialOrd for TextBuffer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TextBuffer {
    fn cmp(&self, other: &Self) -> Ordering {
        (**self).cmp(&**other)
    }
}

impl Hash for TextBuffer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl Write for TextBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }
}

impl Display for TextBuffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&String::from_utf8_lossy(self), f)
    }
}

impl Debug for TextBuffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextBuffer")
            .field("contents", &DebugBytes(self))
            .field("len", &self.len())
            .field("cap", &self.cap())
            .finish()
    }
}
