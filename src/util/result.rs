use std::error::Error;

/// Panicking counterparts for the `try_` methods of this crate.
pub(crate) trait ResultExtension<T> {
    /// Unwraps an [`Ok`] value, or panics with the [`Display`](std::fmt::Display) message of the
    /// error. The panic is reported at the caller's location, so wrappers marked `#[track_caller]`
    /// point at the user's code.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}
