use core::{any::Any, fmt};

use triomphe::Arc;
use unsize::CoerceUnsize;

/// Object-safe view of a stored ambient value, bundling the marker bounds
/// the same way `CauseError` does for causes.
pub(crate) trait AmbientValue: Any + Send + Sync {
    fn as_any(&self) -> &(dyn Any + 'static);
}

impl<C: Any + Send + Sync> AmbientValue for C {
    fn as_any(&self) -> &(dyn Any + 'static) {
        self
    }
}

/// An opaque ambient value carried alongside a wrapped error.
///
/// Errors often escape the scope they were created in before anyone looks at
/// them. [`ErrorContext`] lets a wrap constructor capture an arbitrary value
/// from that scope — a request ID, a tracing span handle, a snapshot of log
/// attributes — and carry it up the stack with the error, without this
/// library interpreting it in any way. Rendering never touches it; it is
/// purely a pass-through for whatever inspects the error later.
///
/// Attach a context with [`WrappedError::with_context`] and read it back
/// with [`downcast_ref`](ErrorContext::downcast_ref):
///
/// ```
/// use wraptree::wrap;
///
/// #[derive(Debug, PartialEq)]
/// struct RequestId(u64);
///
/// let err = wrap(std::io::Error::other("timed out"), "failed to fetch user")
///     .with_context(RequestId(1337));
///
/// let ctx = err.context().expect("context was attached");
/// assert_eq!(ctx.downcast_ref::<RequestId>(), Some(&RequestId(1337)));
/// ```
///
/// The value is stored behind an [`Arc`], so cloning the error (or the
/// context itself) is cheap and shares the same value.
///
/// [`Arc`]: triomphe::Arc
/// [`WrappedError::with_context`]: crate::WrappedError::with_context
#[derive(Clone)]
pub struct ErrorContext {
    value: Arc<dyn AmbientValue>,
}

impl ErrorContext {
    /// Stores the given value as an ambient context.
    pub fn new(value: impl Any + Send + Sync) -> Self {
        Self {
            value: Arc::new(value).unsize(unsize::Coercion!(to dyn AmbientValue)),
        }
    }

    /// Returns the stored value as a `dyn Any`.
    pub fn get(&self) -> &(dyn Any + 'static) {
        (*self.value).as_any()
    }

    /// Attempts to downcast the stored value to a concrete type.
    pub fn downcast_ref<C: 'static>(&self) -> Option<&C> {
        self.get().downcast_ref()
    }
}

impl fmt::Debug for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorContext").finish_non_exhaustive()
    }
}
