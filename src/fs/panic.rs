use std::error::Error;

use derive_more::{Display, Error};
use libc::c_int;

/// Errors that indicate a bug rather than a recoverable condition, so they are raised as panics.
pub(crate) trait Panic: Error {
    #[track_caller]
    fn panic(&self) -> ! {
        panic!("{}", self)
    }
}

#[derive(Debug, Display, Error)]
#[display("file descriptor corruption")]
pub(crate) struct BadFdPanic;
impl Panic for BadFdPanic {}

#[derive(Debug, Display, Error)]
#[display("pointer outside of the accessible address space")]
pub(crate) struct BadAddrPanic;
impl Panic for BadAddrPanic {}

#[derive(Debug, Display, Error)]
#[display("unexpected OS error with code: {_0}")]
pub(crate) struct UnexpectedErrorPanic(#[error(not(source))] pub c_int);
impl Panic for UnexpectedErrorPanic {}
