//! The recursive renderer that turns an error tree into indented text.

use alloc::string::String;
use core::error::Error;

use crate::{
    cause::Cause,
    classify::{Node, classify},
};

/// Maximum recursion depth. Nodes at the cap keep their label but their
/// causes are omitted.
///
/// The cause graph is a caller contract: it must be acyclic and finite. This
/// cap turns a violated contract into a truncated report instead of a stack
/// overflow.
const MAX_DEPTH: usize = 100;

/// Renders an error and its wrapped causes as an indented list.
///
/// The root label is written verbatim on the first line, with no list
/// marker. Each wrapped cause below it becomes a `- ` list item, indented
/// two spaces per level. Labels containing embedded newlines have their
/// continuation lines aligned one level deeper than their bullet. The result
/// never ends in a newline.
///
/// This works for any error, not just the types in this crate: foreign
/// errors wrapped in the conventional `"message: cause"` style are split
/// into separate list lines where that is safe, and left as opaque text
/// where it is not.
///
/// ```
/// use wraptree::{render, wrap, wrap_all};
///
/// let inner = wrap_all(
///     [std::io::Error::other("error 1"), std::io::Error::other("error 2")],
///     "inner wrapped errors",
/// );
/// let outer = wrap(inner, "outer wrapped error");
///
/// assert_eq!(
///     render(&outer),
///     "outer wrapped error\n- inner wrapped errors\n  - error 1\n  - error 2",
/// );
/// ```
///
/// [`WrappedError`](crate::WrappedError) and
/// [`WrappedErrors`](crate::WrappedErrors) use this for their `Display`
/// output, so `err.to_string()` and `render(&err)` agree.
pub fn render(err: &(dyn Error + 'static)) -> String {
    let mut out = String::new();
    match classify(err) {
        Node::Opaque { label } => out.push_str(&label),
        Node::Single {
            label,
            child,
            wrapping,
        } => {
            out.push_str(&label);
            if wrapping {
                write_list_item(&mut out, child, 1, false, 1);
            }
        }
        Node::Multi {
            label,
            children,
            wrapping,
        } => {
            out.push_str(&label);
            if wrapping {
                write_list(&mut out, children, 1, 1);
            }
        }
    }
    out
}

fn write_list_item(
    out: &mut String,
    err: &(dyn Error + 'static),
    indent: usize,
    part_of_list: bool,
    depth: usize,
) {
    out.push('\n');
    push_indent(out, indent - 1);
    out.push_str("- ");

    match classify(err) {
        Node::Single {
            label,
            child,
            wrapping,
        } => {
            write_label(out, &label, indent);
            if wrapping && depth < MAX_DEPTH {
                // A lone nested single-wrap stays at the same level, so
                // chains of single wraps render as a flat list.
                let next_indent = if part_of_list { indent + 1 } else { indent };
                write_list_item(out, child, next_indent, false, depth + 1);
            }
        }
        Node::Multi {
            label,
            children,
            wrapping,
        } => {
            write_label(out, &label, indent);
            if wrapping && depth < MAX_DEPTH {
                let next_indent = if part_of_list || children.len() > 1 {
                    indent + 1
                } else {
                    indent
                };
                write_list(out, children, next_indent, depth + 1);
            }
        }
        Node::Opaque { label } => write_label(out, &label, indent),
    }
}

fn write_list(out: &mut String, causes: &[Cause], indent: usize, depth: usize) {
    for cause in causes {
        write_list_item(out, cause.as_error(), indent, causes.len() > 1, depth);
    }
}

/// Writes a label, indenting every line after the first one level deeper
/// than the list bullet it belongs to.
fn write_label(out: &mut String, label: &str, indent: usize) {
    let mut lines = label.split('\n');
    if let Some(first) = lines.next() {
        out.push_str(first);
    }
    for line in lines {
        out.push('\n');
        push_indent(out, indent);
        out.push_str(line);
    }
}

fn push_indent(out: &mut String, levels: usize) {
    for _ in 0..levels {
        out.push_str("  ");
    }
}
