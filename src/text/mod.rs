//! Byte strings built on [`Sequence<u8>`](crate::collections::contiguous::Sequence), with a
//! terminator that is kept in place after every mutation, plus decimal formatting and parsing.

mod format;
mod lines;
pub mod parse;
mod tests;
mod text_buffer;

pub use format::*;
pub use lines::*;
pub use text_buffer::*;
