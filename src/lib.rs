//! Growable contiguous sequences with explicit capacity management, and byte strings built on top
//! of them.
//!
//! # Overview
//! [`Sequence<T>`](collections::contiguous::Sequence) is an owned buffer of `T` with a separate
//! length and capacity. It allocates its own storage, grows according to a configurable
//! [`Growth`](collections::contiguous::Growth) policy and never shrinks unless explicitly asked
//! to. Most operations come in two forms: one that returns a new Sequence (`slice`, `sort`,
//! `replace`, ...) and one that modifies the receiver (`slice_in_place`, `sort_in_place`,
//! `replace_in_place`, ...). Copying, moving and swapping are explicit methods, so it is always
//! clear when storage is shared, transferred or duplicated.
//!
//! [`TextBuffer`](text::TextBuffer) wraps a `Sequence<u8>` and keeps a zero byte after its
//! contents at all times, so it can be handed to C without copying. It adds decimal formatting
//! and parsing, case conversion, quoting, padding and line iteration.
//!
//! # Error Handling
//! Errors are strongly typed, using enums for static dispatch rather than dynamic, with structs
//! (often ZSTs) that implement [`Error`](std::error::Error). [`Error`] unifies all of them for
//! callers that just want to use `?`.
//!
//! Not every failure is an error. Searches return [`None`] when nothing is found and
//! [`pop_or`](collections::contiguous::Sequence::pop_or) returns a default for an out of bounds
//! index: absence is an expected outcome there. Allocation failures, on the other hand, are rarely
//! worth handling at each call site, so the plain methods panic on them while the `try_` variants
//! return an [`AllocationError`](error::AllocationError).
//!
//! # Features
//! - `fs` (default): file persistence through the [`fs`] module, using `libc`'s syscall wrappers.
//!   Only available on Unix.
//!
//! # Logging
//! Reallocations are logged at the trace level and file operations at the debug level, through
//! the [`log`] facade. No logger is installed by this crate.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;
pub mod error;
#[cfg(all(unix, feature = "fs"))]
pub mod fs;
pub mod text;

pub(crate) mod util;

pub use collections::contiguous::{Direction, Growth, Sequence};
pub use error::Error;
pub use text::{FloatFormat, TextBuffer};
