//! Error types shared by the collections and text modules.
//!
//! Errors are strongly typed: each distinct failure is a small struct implementing
//! [`Error`](std::error::Error), grouped into enums for the operations that can produce more than
//! one of them. Searches and [`pop_or`](crate::collections::contiguous::Sequence::pop_or) never
//! produce errors, absence is reported through their return values instead.

use derive_more::{Display, Error, From, IsVariant};

#[cfg(all(unix, feature = "fs"))]
use crate::fs::{LoadError, SaveError};

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("index {index} out of bounds for sequence of length {len}")]
pub struct OutOfBounds {
    pub index: usize,
    pub len: usize,
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("range start {start} is greater than range end {end}")]
pub struct InvertedRange {
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("sequence is empty")]
pub struct EmptySequence;

/// An access or range parameter violated the bounds of a sequence.
#[derive(Debug, Display, Error, From, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum IndexError {
    OutOfBounds(OutOfBounds),
    InvertedRange(InvertedRange),
    Empty(EmptySequence),
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("capacity overflow: allocation would exceed the maximum size")]
pub struct CapacityOverflow;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("out of memory: allocator failed to provide {bytes} bytes")]
pub struct OutOfMemory {
    pub bytes: usize,
}

/// A storage request failed or exceeded the maximum representable size.
#[derive(Debug, Display, Error, From, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum AllocationError {
    CapacityOverflow(CapacityOverflow),
    OutOfMemory(OutOfMemory),
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("no value to parse")]
pub struct NoDigits;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("invalid byte {byte:#04x} at index {index}")]
pub struct InvalidByte {
    pub index: usize,
    pub byte: u8,
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("parsed value does not fit the target type")]
pub struct ParseOverflow;

/// Malformed input to one of the strict parsing functions.
#[derive(Debug, Display, Error, From, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    Empty(NoDigits),
    InvalidByte(InvalidByte),
    Overflow(ParseOverflow),
}

/// Any error produced by this crate.
#[derive(Debug, Display, Error, From, IsVariant)]
pub enum Error {
    Index(IndexError),
    Allocation(AllocationError),
    Parse(ParseError),
    #[cfg(all(unix, feature = "fs"))]
    Load(LoadError),
    #[cfg(all(unix, feature = "fs"))]
    Save(SaveError),
}
