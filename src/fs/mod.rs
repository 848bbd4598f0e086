//! File persistence for byte sequences and text, through thin wrappers around the OS's file
//! syscalls.
//!
//! Every failure the OS can report for a given operation is mapped to a distinct error type, so
//! callers can tell a missing file from a full disk. Error codes that can only result from a bug,
//! such as a corrupted file descriptor, cause a panic instead.

mod error;
mod fd;
mod file;
mod panic;
mod persist;
mod tests;

pub use error::*;
pub(crate) use fd::*;
pub use file::*;
