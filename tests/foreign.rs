//! Tests for classifying errors from outside this crate: the colon
//! heuristic that recovers wrapping messages from conventionally formatted
//! foreign errors, and the opaque fallback when no safe split exists.

use std::error::Error;
use std::io;

use wraptree::{render, wrap};

/// The conventional `"message: cause"` wrapping style, as produced by
/// `thiserror` attributes like `#[error("context: {source}")]`.
#[derive(Debug, thiserror::Error)]
#[error("{message}: {source}")]
struct ConventionalWrap {
    message: &'static str,
    source: Box<dyn Error + Send + Sync>,
}

impl ConventionalWrap {
    fn new(message: &'static str, source: impl Error + Send + Sync + 'static) -> Self {
        Self {
            message,
            source: Box::new(source),
        }
    }
}

#[test]
fn colon_heuristic_recovers_nested_labels() {
    let err1 = io::Error::other("the underlying error");
    let err2 = ConventionalWrap::new("something went wrong", err1);
    let err3 = ConventionalWrap::new("error string with : in the middle", err2);
    let err4 = ConventionalWrap::new("an error occurred", err3);
    let wrapped = wrap(err4, "wrapped error");

    assert_eq!(
        wrapped.to_string(),
        "\
wrapped error
- an error occurred
- error string with : in the middle
- something went wrong
- the underlying error",
    );
}

#[test]
fn colon_heuristic_accepts_newline_separator() {
    #[derive(Debug, thiserror::Error)]
    #[error("context with newline:\n{source}")]
    struct NewlineWrap {
        source: io::Error,
    }

    let err = NewlineWrap {
        source: io::Error::other("error with\nnewline"),
    };
    let wrapped = wrap(err, "wrapped error");

    assert_eq!(
        wrapped.to_string(),
        "\
wrapped error
- context with newline
- error with
  newline",
    );
}

#[test]
fn colon_without_space_is_not_a_separator() {
    // The full message ends with the source's text, but "10:30" must not be
    // split into "10" and "30".
    #[derive(Debug, thiserror::Error)]
    #[error("meeting at 10:{source}")]
    struct TimeError {
        source: io::Error,
    }

    let err = TimeError {
        source: io::Error::other("30"),
    };
    let wrapped = wrap(err, "wrapped error");

    // The foreign error stays opaque: its full text is the label, and its
    // structural child is not descended into.
    assert_eq!(wrapped.to_string(), "wrapped error\n- meeting at 10:30");
}

#[test]
fn unconventional_message_stays_opaque() {
    // A source revealed through Error::source, but a display format that
    // does not embed it as a ": "-separated suffix.
    #[derive(Debug, thiserror::Error)]
    #[error("operation failed ({source})")]
    struct ParenWrap {
        source: io::Error,
    }

    let err = ParenWrap {
        source: io::Error::other("inner"),
    };
    let wrapped = wrap(err, "wrapped error");

    assert_eq!(wrapped.to_string(), "wrapped error\n- operation failed (inner)");
}

#[test]
fn render_works_on_foreign_roots() {
    let err = ConventionalWrap::new("an error occurred", io::Error::other("the underlying error"));

    assert_eq!(render(&err), "an error occurred\n- the underlying error");

    let opaque = io::Error::other("just an error");
    assert_eq!(render(&opaque), "just an error");
}

#[test]
fn mixed_own_and_foreign_wrapping() {
    let foreign = ConventionalWrap::new("query failed", io::Error::other("connection reset"));
    let outer = wrap(foreign, "failed to load user");

    assert_eq!(
        outer.to_string(),
        "\
failed to load user
- query failed
- connection reset",
    );
}
