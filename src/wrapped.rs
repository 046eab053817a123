//! The wrapped error types and their constructors.

use alloc::{borrow::Cow, vec::Vec};
use core::{any::Any, error::Error, fmt};

use crate::{attrs::Attrs, cause::Cause, context::ErrorContext, render::render};

/// Wraps the given error with a message for context.
///
/// The error is displayed in the following format:
///
/// ```
/// use wraptree::wrap;
///
/// let err = std::io::Error::other("expired token");
/// let wrapped = wrap(err, "user authentication failed");
/// assert_eq!(
///     wrapped.to_string(),
///     "\
/// user authentication failed
/// - expired token",
/// );
/// ```
///
/// Wrapped errors can be nested. Wrapping an already wrapped error adds it
/// to the error list:
///
/// ```
/// use wraptree::wrap;
///
/// let err = std::io::Error::other("expired token");
/// let inner = wrap(err, "user authentication failed");
/// let outer = wrap(inner, "failed to update username");
/// assert_eq!(
///     outer.to_string(),
///     "\
/// failed to update username
/// - user authentication failed
/// - expired token",
/// );
/// ```
///
/// For a format-string message, use the [`wrap!`](crate::wrap!) macro
/// instead.
pub fn wrap(cause: impl Into<Cause>, message: impl Into<Cow<'static, str>>) -> WrappedError {
    WrappedError::new(cause, message)
}

/// Wraps the given list of errors with a message for context.
///
/// ```
/// use wraptree::wrap_all;
///
/// let errs = [
///     std::io::Error::other("username too long"),
///     std::io::Error::other("invalid email"),
/// ];
/// let wrapped = wrap_all(errs, "user creation failed");
/// assert_eq!(
///     wrapped.to_string(),
///     "\
/// user creation failed
/// - username too long
/// - invalid email",
/// );
/// ```
///
/// When combined with [`wrap`], nested lists are indented under their
/// parent:
///
/// ```
/// use wraptree::{wrap, wrap_all};
///
/// let errs = [
///     std::io::Error::other("username too long"),
///     std::io::Error::other("invalid email"),
/// ];
/// let inner = wrap_all(errs, "user creation failed");
/// let outer = wrap(inner, "failed to register new user");
/// assert_eq!(
///     outer.to_string(),
///     "\
/// failed to register new user
/// - user creation failed
///   - username too long
///   - invalid email",
/// );
/// ```
///
/// To mix different error types in one list, convert them to [`Cause`]
/// first. For a format-string message, use the
/// [`wrap_all!`](crate::wrap_all!) macro instead.
pub fn wrap_all<I>(causes: I, message: impl Into<Cow<'static, str>>) -> WrappedErrors
where
    I: IntoIterator,
    I::Item: Into<Cause>,
{
    WrappedErrors::new(causes, message)
}

/// An error wrapping exactly one cause with a contextual message.
///
/// Created by [`wrap`], the [`wrap!`](crate::wrap!) macro, or
/// [`WrappedError::new`]. The `Display` output is the full rendered tree
/// (see [`render`]); [`Error::source`] reveals the wrapped cause, so
/// generic source-chain walkers see through it.
///
/// The wrapped cause is stored as a shared [`Cause`] handle, which makes
/// cloning this type cheap.
#[derive(Clone)]
pub struct WrappedError {
    message: Cow<'static, str>,
    cause: Cause,
    attrs: Attrs,
    context: Option<ErrorContext>,
}

impl WrappedError {
    /// Wraps `cause` with the given message.
    pub fn new(cause: impl Into<Cause>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
            cause: cause.into(),
            attrs: Attrs::new(),
            context: None,
        }
    }

    /// Attaches structured attributes to the error.
    ///
    /// ```
    /// use wraptree::{attrs, wrap};
    ///
    /// let err = wrap(std::io::Error::other("duplicate key"), "insert failed")
    ///     .with_attrs(attrs!["table", "users"]);
    /// assert_eq!(err.attrs().len(), 1);
    /// ```
    #[must_use]
    pub fn with_attrs(mut self, attrs: impl Into<Attrs>) -> Self {
        self.attrs = attrs.into();
        self
    }

    /// Attaches an opaque ambient value to the error.
    ///
    /// The value is carried alongside the error without being interpreted;
    /// see [`ErrorContext`].
    #[must_use]
    pub fn with_context(mut self, context: impl Any + Send + Sync) -> Self {
        self.context = Some(ErrorContext::new(context));
        self
    }

    /// The wrapping message, without the rendered causes below it.
    pub fn wrapping_message(&self) -> &str {
        &self.message
    }

    /// The wrapped cause.
    pub fn cause(&self) -> &Cause {
        &self.cause
    }

    /// The attributes attached to this error, if any.
    pub fn attrs(&self) -> &Attrs {
        &self.attrs
    }

    /// The ambient context attached to this error, if any.
    pub fn context(&self) -> Option<&ErrorContext> {
        self.context.as_ref()
    }

    /// Downcasts the attached ambient context to a concrete type.
    pub fn context_ref<C: 'static>(&self) -> Option<&C> {
        self.context.as_ref()?.downcast_ref()
    }
}

impl fmt::Display for WrappedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}

impl fmt::Debug for WrappedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl Error for WrappedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.cause.as_error())
    }
}

/// An error wrapping an ordered sequence of causes with a contextual
/// message.
///
/// Created by [`wrap_all`], the [`wrap_all!`](crate::wrap_all!) macro, or
/// [`WrappedErrors::new`]. The ordered causes are revealed by
/// [`causes`](WrappedErrors::causes); `Error::source` returns `None`, since
/// the single-source contract cannot represent more than one cause.
///
/// An empty cause list is allowed and renders as just the message line.
#[derive(Clone)]
pub struct WrappedErrors {
    message: Cow<'static, str>,
    causes: Vec<Cause>,
    attrs: Attrs,
    context: Option<ErrorContext>,
}

impl WrappedErrors {
    /// Wraps the given causes with the given message.
    pub fn new<I>(causes: I, message: impl Into<Cow<'static, str>>) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Cause>,
    {
        Self {
            message: message.into(),
            causes: causes.into_iter().map(Into::into).collect(),
            attrs: Attrs::new(),
            context: None,
        }
    }

    /// Attaches structured attributes to the error.
    #[must_use]
    pub fn with_attrs(mut self, attrs: impl Into<Attrs>) -> Self {
        self.attrs = attrs.into();
        self
    }

    /// Attaches an opaque ambient value to the error.
    #[must_use]
    pub fn with_context(mut self, context: impl Any + Send + Sync) -> Self {
        self.context = Some(ErrorContext::new(context));
        self
    }

    /// The wrapping message, without the rendered causes below it.
    pub fn wrapping_message(&self) -> &str {
        &self.message
    }

    /// The wrapped causes, in order.
    pub fn causes(&self) -> &[Cause] {
        &self.causes
    }

    /// The attributes attached to this error, if any.
    pub fn attrs(&self) -> &Attrs {
        &self.attrs
    }

    /// The ambient context attached to this error, if any.
    pub fn context(&self) -> Option<&ErrorContext> {
        self.context.as_ref()
    }

    /// Downcasts the attached ambient context to a concrete type.
    pub fn context_ref<C: 'static>(&self) -> Option<&C> {
        self.context.as_ref()?.downcast_ref()
    }
}

impl fmt::Display for WrappedErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}

impl fmt::Debug for WrappedErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl Error for WrappedErrors {}

/// A leaf error carrying just a message, with optional attributes and
/// context.
///
/// This is the constructor to reach for when there is no underlying cause
/// to wrap, but the error should still carry structured metadata:
///
/// ```
/// use wraptree::{ErrorMessage, attrs};
///
/// let err = ErrorMessage::new("no rows matched the query")
///     .with_attrs(attrs![("table", "users")]);
/// assert_eq!(err.to_string(), "no rows matched the query");
/// assert_eq!(err.attrs().len(), 1);
/// ```
#[derive(Clone)]
pub struct ErrorMessage {
    message: Cow<'static, str>,
    attrs: Attrs,
    context: Option<ErrorContext>,
}

impl ErrorMessage {
    /// Creates a new leaf error with the given message.
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
            attrs: Attrs::new(),
            context: None,
        }
    }

    /// Attaches structured attributes to the error.
    #[must_use]
    pub fn with_attrs(mut self, attrs: impl Into<Attrs>) -> Self {
        self.attrs = attrs.into();
        self
    }

    /// Attaches an opaque ambient value to the error.
    #[must_use]
    pub fn with_context(mut self, context: impl Any + Send + Sync) -> Self {
        self.context = Some(ErrorContext::new(context));
        self
    }

    /// The message text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The attributes attached to this error, if any.
    pub fn attrs(&self) -> &Attrs {
        &self.attrs
    }

    /// The ambient context attached to this error, if any.
    pub fn context(&self) -> Option<&ErrorContext> {
        self.context.as_ref()
    }

    /// Downcasts the attached ambient context to a concrete type.
    pub fn context_ref<C: 'static>(&self) -> Option<&C> {
        self.context.as_ref()?.downcast_ref()
    }
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl fmt::Debug for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl Error for ErrorMessage {}
