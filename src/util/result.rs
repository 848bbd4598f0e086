use std::error::Error;

/// Turns an error into a panic carrying the error's own message, for the infallible counterparts
/// of `try_` methods.
pub(crate) trait Throw<T> {
    /// # Panics
    /// Panics with the error's [`Display`](std::fmt::Display) output if `self` is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> Throw<T> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        // A closure would hide the caller's location from the panic.
        match self {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}
