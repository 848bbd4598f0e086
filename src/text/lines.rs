use std::ffi::CStr;
use std::iter::FusedIterator;

use super::TextBuffer;

/// An iterator over the `\n` separated lines of a [`TextBuffer`], without their line endings. See
/// [`TextBuffer::lines`].
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a [u8],
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        match self.rest.iter().position(|byte| *byte == b'\n') {
            Some(index) => {
                let line = &self.rest[..index];
                self.rest = &self.rest[index + 1..];
                Some(line)
            },
            None => Some(std::mem::take(&mut self.rest)),
        }
    }
}

impl FusedIterator for Lines<'_> {}

/// Puts the original byte back when dropped, even if the line callback panics.
struct Restore<'a> {
    bytes: &'a mut [u8],
    index: usize,
    byte: u8,
}

impl Drop for Restore<'_> {
    fn drop(&mut self) {
        self.bytes[self.index] = self.byte;
    }
}

impl TextBuffer {
    /// Returns an iterator over the lines of the contents. A trailing `\n` doesn't produce an
    /// extra, empty line.
    ///
    /// # Examples
    /// ```
    /// # use vlib::text::TextBuffer;
    /// let text = TextBuffer::from("one\n\nthree\n");
    /// let lines: Vec<&[u8]> = text.lines().collect();
    /// assert_eq!(lines, [&b"one"[..], &b""[..], &b"three"[..]]);
    /// ```
    pub fn lines(&self) -> Lines<'_> {
        Lines { rest: self }
    }

    /// Calls `f` with each line as a C string, without copying. Each line is terminated in place
    /// by temporarily overwriting its `\n` with a zero byte, which is restored before the next
    /// line. A line containing a zero byte is cut short there.
    ///
    /// # Examples
    /// ```
    /// # use vlib::text::TextBuffer;
    /// let mut text = TextBuffer::from("a=1\nb=2");
    /// let mut keys = Vec::new();
    /// text.for_each_line(|line| keys.push(line.to_bytes()[0]));
    /// assert_eq!(keys, b"ab");
    /// assert_eq!(text, "a=1\nb=2");
    /// ```
    pub fn for_each_line<F: FnMut(&CStr)>(&mut self, mut f: F) {
        let len = self.len();
        let mut start = 0;

        while start < len {
            let end = self.seq[start..]
                .iter()
                .position(|byte| *byte == b'\n')
                .map_or(len, |index| start + index);

            let bytes = self.bytes_with_nul_mut();
            let byte = bytes[end];
            bytes[end] = 0;
            let guard = Restore { bytes, index: end, byte };

            if let Ok(line) = CStr::from_bytes_until_nul(&guard.bytes[start..=end]) {
                f(line);
            }

            drop(guard);
            start = end + 1;
        }
    }
}
