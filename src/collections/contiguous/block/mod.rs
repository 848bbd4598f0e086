//! Raw, untyped-initialization storage used by [`Sequence`](super::Sequence).

mod block;

pub(crate) use block::*;
