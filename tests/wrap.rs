//! Integration tests for the wrap constructors and the tree renderer,
//! covering the exact output format: list markers, sibling-aware
//! indentation, and multi-line label continuation.

use std::error::Error;
use std::io;

use wraptree::prelude::*;

fn leaf(message: &str) -> io::Error {
    io::Error::other(message.to_owned())
}

#[test]
fn wrap_single_error() {
    let wrapped = wrap(leaf("error"), "wrapped error");

    assert_eq!(wrapped.to_string(), "wrapped error\n- error");
}

#[test]
fn wrap_with_formatted_message() {
    let err = leaf("unrecognized event type");
    let wrapped = wrap!(err, "failed to process event of type '{}'", "ORDER_UPDATED");

    assert_eq!(
        wrapped.to_string(),
        "\
failed to process event of type 'ORDER_UPDATED'
- unrecognized event type",
    );
}

#[test]
fn wrap_with_attrs() {
    let wrapped =
        wrap(leaf("error"), "wrapped error").with_attrs(attrs!["key1", "value1", Attr::int("key2", 2)]);

    // Attributes are carried alongside the error, not rendered into it.
    assert_eq!(wrapped.to_string(), "wrapped error\n- error");
    let parsed: Vec<_> = wrapped.attrs().iter().cloned().collect();
    assert_eq!(parsed, vec![Attr::str("key1", "value1"), Attr::int("key2", 2)]);
}

#[test]
fn wrap_all_errors() {
    let errs = [leaf("invalid timestamp format"), leaf("id was not UUID")];
    let wrapped = wrap_all(errs, "failed to parse event");

    assert_eq!(
        wrapped.to_string(),
        "\
failed to parse event
- invalid timestamp format
- id was not UUID",
    );
}

#[test]
fn wrap_all_with_attrs() {
    let errs = [leaf("error 1"), leaf("error 2")];
    let wrapped = wrap_all(errs, "wrapped errors").with_attrs(attrs!["key1", "value1", Attr::int("key2", 2)]);

    assert_eq!(wrapped.to_string(), "wrapped errors\n- error 1\n- error 2");
    let parsed: Vec<_> = wrapped.attrs().iter().cloned().collect();
    assert_eq!(parsed, vec![Attr::str("key1", "value1"), Attr::int("key2", 2)]);
}

#[test]
fn wrap_all_with_formatted_message() {
    let errs = [leaf("invalid timestamp format"), leaf("id was not UUID")];
    let wrapped = wrap_all!(errs, "failed to parse event of type '{}'", "ORDER_UPDATED");

    assert_eq!(
        wrapped.to_string(),
        "\
failed to parse event of type 'ORDER_UPDATED'
- invalid timestamp format
- id was not UUID",
    );
}

#[test]
fn error_message_with_attrs() {
    let err = ErrorMessage::new("error message").with_attrs(attrs!["key1", "value1", Attr::int("key2", 2)]);

    assert_eq!(err.to_string(), "error message");
    let parsed: Vec<_> = err.attrs().iter().cloned().collect();
    assert_eq!(parsed, vec![Attr::str("key1", "value1"), Attr::int("key2", 2)]);
}

#[test]
fn nested_single_wraps_render_flat() {
    let err = leaf("error");
    let inner = wrap(err, "inner wrapped error");
    let outer = wrap(inner, "outer wrapped error");

    assert_eq!(
        outer.to_string(),
        "\
outer wrapped error
- inner wrapped error
- error",
    );
}

#[test]
fn multi_wrap_under_single_wrap_indents() {
    let inner = wrap_all([leaf("error 1"), leaf("error 2")], "inner wrapped errors 1");
    let outer = wrap(inner, "outer wrapped error");

    assert_eq!(
        outer.to_string(),
        "\
outer wrapped error
- inner wrapped errors 1
  - error 1
  - error 2",
    );
}

#[test]
fn nested_errors_mix_lists_and_chains() {
    let inner1 = wrap_all([leaf("error 1"), leaf("error 2")], "inner wrapped errors 1");
    let inner2 = wrap_all([leaf("error 3"), leaf("error 4")], "inner wrapped errors 2");
    let inner3 = wrap(inner2, "inner wrapped error 3");
    let inner4 = wrap(inner3, "inner wrapped error 4");

    let outer = wrap_all([Cause::new(inner1), Cause::new(inner4)], "outer wrapped error");

    assert_eq!(
        outer.to_string(),
        "\
outer wrapped error
- inner wrapped errors 1
  - error 1
  - error 2
- inner wrapped error 4
  - inner wrapped error 3
  - inner wrapped errors 2
    - error 3
    - error 4",
    );
}

#[test]
fn multiline_labels_get_continuation_indent() {
    let err1 = leaf("multiline\nerror 1");
    let err2 = leaf("multiline\nerror 2");
    let inner = wrap_all([err1, err2], "wrapped multiline\nerrors");
    let outer = wrap(inner, "outer wrapped error");

    assert_eq!(
        outer.to_string(),
        "\
outer wrapped error
- wrapped multiline
  errors
  - multiline
    error 1
  - multiline
    error 2",
    );
}

#[test]
fn single_element_lists_indent_only_inside_sibling_lists() {
    let wrapped1 = wrap_all([leaf("error 1")], "wrapped 1");
    let wrapped2 = wrap(wrapped1, "wrapped 2");

    let wrapped3 = wrap_all([leaf("error 2")], "wrapped 3");

    let wrapped4 = wrap_all([Cause::new(wrapped2), Cause::new(wrapped3)], "wrapped 4");

    assert_eq!(
        wrapped4.to_string(),
        "\
wrapped 4
- wrapped 2
  - wrapped 1
  - error 1
- wrapped 3
  - error 2",
    );
}

#[test]
fn single_element_list_stays_flat_at_top_level() {
    // A single cause wrapped through the list constructor indents no deeper
    // than the single-cause constructor would.
    let outer = wrap(wrap_all([leaf("error")], "inner"), "outer");

    assert_eq!(outer.to_string(), "outer\n- inner\n- error");
}

#[test]
fn empty_list_renders_only_the_message() {
    let wrapped = wrap_all(Vec::<Cause>::new(), "wrapped nothing");

    assert_eq!(wrapped.to_string(), "wrapped nothing");
    assert!(wrapped.causes().is_empty());
}

#[test]
fn rendering_is_pure() {
    let outer = wrap(
        wrap_all([leaf("error 1"), leaf("error 2")], "inner"),
        "outer",
    );

    assert_eq!(outer.to_string(), outer.to_string());
    assert_eq!(wraptree::render(&outer), outer.to_string());
}

#[test]
fn debug_output_matches_display() {
    let wrapped = wrap(leaf("error"), "wrapped error");

    assert_eq!(format!("{wrapped:?}"), format!("{wrapped}"));
}

#[test]
fn same_cause_wrapped_independently() {
    let cause = Cause::new(leaf("disk unplugged"));
    let read_err = wrap(cause.clone(), "read failed");
    let write_err = wrap(cause, "write failed");

    assert_eq!(read_err.to_string(), "read failed\n- disk unplugged");
    assert_eq!(write_err.to_string(), "write failed\n- disk unplugged");
}

#[test]
fn source_reveals_the_wrapped_cause() {
    let wrapped = wrap(io::Error::from(io::ErrorKind::NotFound), "file not found");

    let source = wrapped.source().expect("wrap exposes its cause");
    let io_err = source.downcast_ref::<io::Error>().expect("cause is io::Error");
    assert_eq!(io_err.kind(), io::ErrorKind::NotFound);

    // Nested wraps keep the source chain walkable.
    let outer = wrap(wrapped, "nested wrapped error");
    let mut chain_len = 0;
    let mut current: Option<&(dyn Error + 'static)> = outer.source();
    while let Some(err) = current {
        chain_len += 1;
        current = err.source();
    }
    assert_eq!(chain_len, 2);
}

#[test]
fn multi_wrap_reveals_causes_in_order() {
    let wrapped = wrap_all(
        [
            io::Error::other("some other error"),
            io::Error::from(io::ErrorKind::NotFound),
        ],
        "failed to find file, and got other error",
    );

    // The single-source contract cannot represent more than one cause.
    assert!(wrapped.source().is_none());

    let causes = wrapped.causes();
    assert_eq!(causes.len(), 2);
    assert_eq!(causes[0].to_string(), "some other error");
    let not_found = causes[1].downcast_ref::<io::Error>().expect("io::Error");
    assert_eq!(not_found.kind(), io::ErrorKind::NotFound);
}

#[test]
fn ambient_context_round_trips() {
    #[derive(Debug, PartialEq)]
    struct RequestId(u64);

    let wrapped = wrap(leaf("timed out"), "failed to fetch user").with_context(RequestId(1337));

    assert_eq!(wrapped.context_ref::<RequestId>(), Some(&RequestId(1337)));
    assert_eq!(wrapped.context_ref::<String>(), None);

    // Context never affects rendering.
    assert_eq!(wrapped.to_string(), "failed to fetch user\n- timed out");

    let plain = wrap(leaf("timed out"), "failed to fetch user");
    assert!(plain.context().is_none());
}

#[test]
fn result_ext_wraps_errors() {
    fn fallible() -> Result<(), io::Error> {
        Err(leaf("permission denied"))
    }

    let err = fallible().wrap_err("failed to open database").unwrap_err();
    assert_eq!(err.to_string(), "failed to open database\n- permission denied");

    let err = fallible()
        .wrap_err_with(|| format!("failed to open database '{}'", "users.db"))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "failed to open database 'users.db'\n- permission denied",
    );
}

#[test]
fn deep_chains_render_without_overflowing() {
    let mut err = wrap(leaf("bottom"), "level 0");
    for i in 1..1_000 {
        err = wrap!(err, "level {i}");
    }

    let rendered = err.to_string();
    assert!(rendered.starts_with("level 999\n- level 998"));
    // Causes past the depth cap are omitted rather than recursed into.
    assert!(!rendered.contains("bottom"));
}

mod auto_traits {
    use static_assertions::assert_impl_all;
    use wraptree::prelude::*;

    assert_impl_all!(WrappedError: std::error::Error, Send, Sync, Clone);
    assert_impl_all!(WrappedErrors: std::error::Error, Send, Sync, Clone);
    assert_impl_all!(ErrorMessage: std::error::Error, Send, Sync, Clone);
    assert_impl_all!(Cause: Send, Sync, Clone);
    assert_impl_all!(ErrorContext: Send, Sync, Clone);
}
