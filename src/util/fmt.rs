use std::fmt::{self, Debug, Formatter};

/// Formats the wrapped slice as a debug list, for use as a field of a debug struct.
pub(crate) struct DebugList<'a, T>(pub &'a [T]);

impl<T: Debug> Debug for DebugList<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

/// Formats bytes as an escaped string literal, falling back to `\xNN` escapes for anything that
/// isn't printable ASCII.
pub(crate) struct DebugBytes<'a>(pub &'a [u8]);

impl Debug for DebugBytes<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.0.escape_ascii())
    }
}
