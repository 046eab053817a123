use alloc::borrow::Cow;
use core::error::Error;

use crate::wrapped::WrappedError;

/// Extension methods for wrapping the error of a `Result`.
///
/// This is the `?`-friendly way to add context while propagating errors:
///
/// ```
/// use wraptree::{WrapResultExt, WrappedError};
///
/// fn read_config(path: &str) -> Result<String, WrappedError> {
///     std::fs::read_to_string(path).wrap_err("failed to read configuration file")
/// }
///
/// let err = read_config("/nonexistent").unwrap_err();
/// assert!(err.to_string().starts_with("failed to read configuration file\n- "));
/// ```
pub trait WrapResultExt<T> {
    /// Wraps the error with a message for context.
    fn wrap_err(self, message: impl Into<Cow<'static, str>>) -> Result<T, WrappedError>;

    /// Wraps the error with a lazily evaluated message for context.
    ///
    /// Prefer this over [`wrap_err`](Self::wrap_err) when building the
    /// message allocates and the `Result` is usually `Ok`.
    fn wrap_err_with<M: Into<Cow<'static, str>>>(
        self,
        message: impl FnOnce() -> M,
    ) -> Result<T, WrappedError>;
}

impl<T, E: Error + Send + Sync + 'static> WrapResultExt<T> for Result<T, E> {
    fn wrap_err(self, message: impl Into<Cow<'static, str>>) -> Result<T, WrappedError> {
        self.map_err(|error| WrappedError::new(error, message))
    }

    fn wrap_err_with<M: Into<Cow<'static, str>>>(
        self,
        message: impl FnOnce() -> M,
    ) -> Result<T, WrappedError> {
        self.map_err(|error| WrappedError::new(error, message()))
    }
}
