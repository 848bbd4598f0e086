pub(crate) mod alloc;
pub(crate) mod fmt;
pub(crate) mod panic;
pub(crate) mod result;
