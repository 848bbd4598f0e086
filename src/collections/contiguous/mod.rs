//! Contiguous collections, backed by a single heap allocation.
//!
//! The only collection here is [`Sequence`], a growable buffer of elements. Its storage is a
//! crate-private block of possibly uninitialized slots, which the Sequence manages by hand so that
//! it can offer guarantees that [`Vec`] doesn't, such as never shrinking when asked to resize.

pub(crate) mod block;
pub mod sequence;

#[doc(inline)]
pub use sequence::{Direction, Growth, Sequence};
