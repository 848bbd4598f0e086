//! A module containing [`Sequence`] and associated types.
//!
//! [`Sequence`] is split over several files: storage management and element access live with the
//! type itself, while searching, slicing, sorting and the other whole-sequence operations are in
//! their own file. Most operations come in two forms, one returning a new Sequence (`slice`) and
//! one modifying the receiver (`slice_in_place`).
//!
//! [`IntoIter`] provides owned iteration, [`Iter`](std::slice::Iter) and
//! [`IterMut`](std::slice::IterMut) from [`std::slice`] are used for borrowed iteration.
//!
//! [`Sequence`] is also re-exported under the parent module.

mod iter;
mod ops;
mod sequence;

pub use iter::*;
pub use ops::Direction;
pub use sequence::*;
