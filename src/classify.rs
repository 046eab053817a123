//! Classification of error values into the structural shapes the renderer
//! understands.

use alloc::{borrow::Cow, string::ToString};
use core::error::Error;

use crate::{
    cause::Cause,
    wrapped::{WrappedError, WrappedErrors},
};

/// The structural shape of one error value, classified on demand.
///
/// `wrapping` records whether `label` is a deliberate short wrapping message
/// (safe to descend past) or the error's full opaque text (descending would
/// duplicate text already present in the label).
pub(crate) enum Node<'a> {
    /// An error that reveals no structural cause.
    Opaque { label: Cow<'a, str> },
    /// An error wrapping exactly one cause.
    Single {
        label: Cow<'a, str>,
        child: &'a (dyn Error + 'static),
        wrapping: bool,
    },
    /// An error wrapping an ordered sequence of causes.
    Multi {
        label: Cow<'a, str>,
        children: &'a [Cause],
        wrapping: bool,
    },
}

/// Classifies one error value.
///
/// Errors created by this library's own constructors are recognized exactly,
/// by downcast, and always carry a genuine wrapping message. Foreign errors
/// that reveal a cause through [`Error::source`] go through the colon
/// heuristic below. Everything else is opaque.
pub(crate) fn classify<'a>(err: &'a (dyn Error + 'static)) -> Node<'a> {
    if let Some(wrapped) = err.downcast_ref::<WrappedError>() {
        return Node::Single {
            label: Cow::Borrowed(wrapped.wrapping_message()),
            child: wrapped.cause().as_error(),
            wrapping: true,
        };
    }

    if let Some(wrapped) = err.downcast_ref::<WrappedErrors>() {
        return Node::Multi {
            label: Cow::Borrowed(wrapped.wrapping_message()),
            children: wrapped.causes(),
            wrapping: true,
        };
    }

    let mut full = err.to_string();
    let Some(child) = err.source() else {
        return Node::Opaque {
            label: Cow::Owned(full),
        };
    };

    match wrapping_message_end(&full, &child.to_string()) {
        Some(end) => {
            full.truncate(end);
            Node::Single {
                label: Cow::Owned(full),
                child,
                wrapping: true,
            }
        }
        None => Node::Single {
            label: Cow::Owned(full),
            child,
            wrapping: false,
        },
    }
}

/// Looks for the conventional `"wrapping message: cause"` pattern in a
/// foreign error's text, and returns the byte offset where the wrapping
/// message ends.
///
/// The full message must end with the child's message, preceded by a colon
/// and a space or newline, with a non-empty message before the colon. A
/// colon followed by anything else (`"10:30"`) is never treated as a
/// separator. This recovers readable labels from errors wrapped with
/// `thiserror`-style `#[error("context: {source}")]` attributes, at an
/// accepted risk of mis-splitting a message that merely happens to end with
/// its cause's text.
fn wrapping_message_end(full: &str, child_message: &str) -> Option<usize> {
    // 2 bytes reserved for the ": " or ":\n" separator.
    let end = full
        .len()
        .checked_sub(child_message.len())?
        .checked_sub(2)?;
    if end == 0 || !full.ends_with(child_message) {
        return None;
    }

    let bytes = full.as_bytes();
    if bytes[end] != b':' {
        return None;
    }
    match bytes[end + 1] {
        b' ' | b'\n' => Some(end),
        _ => None,
    }
}
