#![cfg_attr(not(doc), no_std)]
#![deny(
    missing_docs,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    unused_doc_comments
)]
// Make docs.rs generate better docs
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Wrap errors with readable, tree-structured context messages.
//!
//! ## Overview
//!
//! Propagating errors with `?` tends to produce messages like this:
//!
//! ```text
//! failed to register new user: user creation failed: username too long
//! ```
//!
//! One long line, reading back to front, with `": "` as the only structure.
//! This crate replaces that convention with a deterministic, indented bullet
//! list. Each wrap call attaches a short contextual message to one or more
//! underlying causes, and displaying the outermost error renders the whole
//! tree:
//!
//! ```
//! use wraptree::{wrap, wrap_all};
//!
//! let errs = [
//!     std::io::Error::other("username too long"),
//!     std::io::Error::other("invalid email"),
//! ];
//! let inner = wrap_all(errs, "user creation failed");
//! let outer = wrap(inner, "failed to register new user");
//!
//! assert_eq!(
//!     outer.to_string(),
//!     "\
//! failed to register new user
//! - user creation failed
//!   - username too long
//!   - invalid email",
//! );
//! ```
//!
//! ## Core concepts
//!
//! Mechanically, a wrapped error is a node in a tree: a **message**, one or
//! more **causes** (the child nodes), and optionally structured
//! [**attributes**](attrs) and an opaque [**ambient context**](ErrorContext)
//! carried along for whoever logs the error later.
//!
//! Rendering walks that tree with a small classifier. Errors built by this
//! crate's own constructors are recognized exactly and contribute their
//! wrapping message as a list line. Foreign errors that follow the
//! conventional `"message: cause"` formatting (for example `thiserror`
//! types with `#[error("context: {source}")]`) are split into separate list
//! lines by a documented colon heuristic, so existing error chains render
//! readably without adopting this crate everywhere:
//!
//! ```
//! use wraptree::wrap;
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("something went wrong: {source}")]
//! struct ForeignError {
//!     source: std::io::Error,
//! }
//!
//! let err = ForeignError { source: std::io::Error::other("the underlying error") };
//! assert_eq!(
//!     wrap(err, "wrapped error").to_string(),
//!     "\
//! wrapped error
//! - something went wrong
//! - the underlying error",
//! );
//! ```
//!
//! Everything else is treated as opaque: its full text becomes the label
//! and rendering stops there, so no text is ever duplicated or invented.
//!
//! ## Construction surface
//!
//! - [`wrap`] / [`wrap!`] — one cause, literal or formatted message
//! - [`wrap_all`] / [`wrap_all!`] — an ordered list of causes
//! - [`ErrorMessage`] — a leaf message with no cause
//! - [`.with_attrs(...)`](WrappedError::with_attrs) and
//!   [`.with_context(...)`](WrappedError::with_context) on all of the above
//! - [`WrapResultExt::wrap_err`] for `Result` chains
//! - [`render`] to format any `dyn Error` tree, not just this crate's types
//!
//! Causes are held behind cheap shared [`Cause`] handles: wrapping never
//! copies or mutates the underlying error, the same value can be wrapped
//! independently many times, and all error types here are `Clone`,
//! `Send + Sync + 'static`, and implement [`Error`](core::error::Error).
//!
//! ## Rendering rules
//!
//! The output format is deterministic and exact: the root label verbatim on
//! the first line, each cause as a `"- "` list item indented two spaces per
//! level, continuation lines of multi-line labels aligned one level deeper
//! than their bullet, and no trailing newline. Indentation depends only on
//! a node's own sibling and child counts — a chain of single wraps renders
//! as a flat list, and nesting only indents where a node actually has
//! siblings. See [`render`] for the precise rules.
//!
//! This crate is `no_std` (with `alloc`); rendering is a pure function of
//! the error tree and performs no I/O.

extern crate alloc;

pub mod attrs;
pub mod prelude;

mod cause;
mod classify;
mod context;
mod macros;
mod render;
mod result_ext;
mod wrapped;

pub use crate::{
    attrs::{Attr, AttrValue, Attrs},
    cause::Cause,
    context::ErrorContext,
    render::render,
    result_ext::WrapResultExt,
    wrapped::{ErrorMessage, WrappedError, WrappedErrors, wrap, wrap_all},
};

/// Implementation details used by this crate's macros. Not public API.
#[doc(hidden)]
pub mod __private {
    use alloc::{borrow::Cow, fmt};

    #[doc(hidden)]
    pub use core::format_args;

    /// Resolves a `format_args!` invocation into a message, keeping
    /// argument-free literals as `&'static str` without allocating.
    #[doc(hidden)]
    #[inline]
    #[must_use]
    pub fn message(args: fmt::Arguments<'_>) -> Cow<'static, str> {
        match args.as_str() {
            Some(message) => Cow::Borrowed(message),
            None => Cow::Owned(fmt::format(args)),
        }
    }
}
