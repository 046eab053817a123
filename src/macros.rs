/// Wraps an error with a formatted message for context.
///
/// The first argument is the cause (anything convertible to
/// [`Cause`](crate::Cause)); the remaining arguments are interpreted the
/// same way as by the [`format!()`] macro. When the message contains no
/// format arguments, it is kept as a `&'static str` without allocating.
///
/// [`format!()`]: alloc::format
///
/// # Examples
///
/// ```
/// use wraptree::wrap;
///
/// let err = std::io::Error::other("username already taken");
/// let wrapped = wrap!(err, "failed to create user with name '{}'", "hermannm");
/// assert_eq!(
///     wrapped.to_string(),
///     "\
/// failed to create user with name 'hermannm'
/// - username already taken",
/// );
/// ```
#[macro_export]
macro_rules! wrap {
    ($cause:expr, $($message:tt)+) => {
        $crate::WrappedError::new(
            $cause,
            $crate::__private::message($crate::__private::format_args!($($message)+)),
        )
    };
}

/// Wraps a list of errors with a formatted message for context.
///
/// The first argument is an iterable of causes; the remaining arguments are
/// interpreted the same way as by the [`format!()`] macro.
///
/// [`format!()`]: alloc::format
///
/// # Examples
///
/// ```
/// use wraptree::wrap_all;
///
/// let errs = [
///     std::io::Error::other("invalid timestamp format"),
///     std::io::Error::other("id was not UUID"),
/// ];
/// let wrapped = wrap_all!(errs, "failed to parse event of type '{}'", "ORDER_UPDATED");
/// assert_eq!(
///     wrapped.to_string(),
///     "\
/// failed to parse event of type 'ORDER_UPDATED'
/// - invalid timestamp format
/// - id was not UUID",
/// );
/// ```
#[macro_export]
macro_rules! wrap_all {
    ($causes:expr, $($message:tt)+) => {
        $crate::WrappedErrors::new(
            $causes,
            $crate::__private::message($crate::__private::format_args!($($message)+)),
        )
    };
}

/// Builds an attribute list from a flat sequence of items.
///
/// Every item is converted to an
/// [`AttrListItem`](crate::attrs::AttrListItem) and the whole sequence is
/// parsed with [`parse_attrs`](crate::attrs::parse_attrs): bare strings
/// pair up as key/value, `(key, value)` tuples and [`Attr`](crate::Attr)
/// values are taken verbatim, and malformed leftovers degrade to the
/// `"!BADKEY"` sentinel instead of failing.
///
/// # Examples
///
/// ```
/// use wraptree::{Attr, attrs};
///
/// let attrs = attrs!["key1", "value1", Attr::int("key2", 2)];
/// let parsed: Vec<_> = attrs.iter().cloned().collect();
/// assert_eq!(parsed, vec![Attr::str("key1", "value1"), Attr::int("key2", 2)]);
/// ```
#[macro_export]
macro_rules! attrs {
    ($($item:expr),* $(,)?) => {
        $crate::attrs::parse_attrs([$($crate::attrs::AttrListItem::from($item)),*])
    };
}
