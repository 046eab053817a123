//! Commonly used items for convenient importing.
//!
//! Re-exports the constructors, error types, and macros that most code
//! using this library needs, so a single import suffices:
//!
//! ```
//! use wraptree::prelude::*;
//!
//! fn parse_port(raw: &str) -> Result<u16, WrappedError> {
//!     raw.parse().wrap_err_with(|| format!("invalid port '{raw}'"))
//! }
//!
//! let err = parse_port("eighty").unwrap_err();
//! assert!(err.to_string().starts_with("invalid port 'eighty'\n- "));
//! ```

pub use crate::{
    Attr, AttrValue, Attrs, Cause, ErrorContext, ErrorMessage, WrapResultExt, WrappedError,
    WrappedErrors, attrs, render, wrap, wrap_all,
};
