//! General-purpose collection types.
//!
//! Applicable types here implement [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which
//! saves writing some of the more repetitive functionality. Where a collection defines a method
//! with the same name as one on slices, the collection's own method takes precedence.

pub mod contiguous;
