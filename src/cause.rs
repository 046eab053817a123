use core::{error::Error, fmt};

use triomphe::Arc;
use unsize::CoerceUnsize;

/// Object-safe view of an error value stored as a cause.
///
/// We cannot coerce directly to `dyn Error + Send + Sync` with the `unsize`
/// crate, so this trait bundles the marker bounds and hands out the plain
/// `dyn Error` view needed by the classifier.
pub(crate) trait CauseError: Error + Send + Sync {
    fn as_error(&self) -> &(dyn Error + 'static);
}

impl<E: Error + Send + Sync + 'static> CauseError for E {
    fn as_error(&self) -> &(dyn Error + 'static) {
        self
    }
}

/// A shared handle to an error value used as a wrapped cause.
///
/// Wrap constructors such as [`wrap`](crate::wrap) and
/// [`wrap_all`](crate::wrap_all) store their underlying errors as [`Cause`]
/// values. The handle is backed by an [`Arc`], so cloning it is cheap and the
/// same underlying error can be referenced by multiple independent wrappers
/// without copying it. Nothing in this library ever mutates the error behind
/// a [`Cause`].
///
/// Any error that is `Send + Sync + 'static` converts into a [`Cause`] with
/// [`From`], which is what allows the wrap constructors to accept plain error
/// values and existing handles alike:
///
/// ```
/// use wraptree::{Cause, wrap};
///
/// let cause = Cause::new(std::io::Error::other("disk unplugged"));
///
/// // The same underlying error, wrapped twice independently.
/// let read_err = wrap(cause.clone(), "failed to read database file");
/// let write_err = wrap(cause, "failed to write database file");
///
/// assert_eq!(read_err.to_string(), "failed to read database file\n- disk unplugged");
/// assert_eq!(write_err.to_string(), "failed to write database file\n- disk unplugged");
/// ```
///
/// # Why no `Error` implementation?
///
/// [`Cause`] deliberately does *not* implement [`Error`] itself. This is what
/// makes the blanket `impl<E: Error + Send + Sync + 'static> From<E> for
/// Cause` coherent, the same trade-off made by `anyhow::Error`. Use
/// [`as_error`](Cause::as_error) to get at the underlying `dyn Error`.
///
/// [`Arc`]: triomphe::Arc
#[derive(Clone)]
pub struct Cause {
    inner: Arc<dyn CauseError>,
}

impl Cause {
    /// Creates a new handle owning the given error.
    ///
    /// ```
    /// use wraptree::Cause;
    ///
    /// let cause = Cause::new(std::io::Error::other("connection reset"));
    /// assert_eq!(cause.to_string(), "connection reset");
    /// ```
    pub fn new<E: Error + Send + Sync + 'static>(error: E) -> Self {
        Self {
            inner: Arc::new(error).unsize(unsize::Coercion!(to dyn CauseError)),
        }
    }

    /// Returns the underlying error as a plain `dyn Error`.
    ///
    /// This is the view used by generic cause-search code and by this
    /// library's own classifier.
    pub fn as_error(&self) -> &(dyn Error + 'static) {
        self.inner.as_error()
    }

    /// Attempts to downcast the underlying error to a concrete type.
    ///
    /// ```
    /// use wraptree::Cause;
    ///
    /// let cause = Cause::new(std::io::Error::other("oh no"));
    /// assert!(cause.downcast_ref::<std::io::Error>().is_some());
    /// assert!(cause.downcast_ref::<std::fmt::Error>().is_none());
    /// ```
    pub fn downcast_ref<E: Error + 'static>(&self) -> Option<&E> {
        self.as_error().downcast_ref()
    }
}

impl<E: Error + Send + Sync + 'static> From<E> for Cause {
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_error(), f)
    }
}

impl fmt::Debug for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_error(), f)
    }
}
