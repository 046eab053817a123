//! Structured key/value attributes that can be attached to wrapped errors.
//!
//! Attributes are ordered `(key, value)` pairs, meant for the kind of
//! metadata that is useful when an error is logged: operation IDs, user
//! names, retry counts. They are carried alongside the error and never take
//! part in rendering the error message itself.
//!
//! The usual way to build an attribute list is the [`attrs!`](crate::attrs!)
//! macro, which accepts a flat list of items and parses it with
//! [`parse_attrs`]:
//!
//! ```
//! use wraptree::{attrs, wrap};
//!
//! let err = wrap(std::io::Error::other("duplicate key"), "database insert failed")
//!     .with_attrs(attrs!["table", "users", ("retries", 3)]);
//!
//! assert_eq!(err.attrs().len(), 2);
//! ```

use alloc::{borrow::Cow, string::String, vec, vec::Vec};
use core::fmt;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

/// Key used for attributes that could not be parsed from a flat item list.
///
/// A lone trailing key, or a bare value with no key in front of it, is kept
/// rather than dropped: it is stored under this sentinel key.
pub const BAD_KEY: &str = "!BADKEY";

/// An ordered key/value pair attached to an error.
///
/// Duplicate keys are permitted; an attribute list preserves insertion
/// order. Construct attributes either with [`Attr::new`] or with the typed
/// helpers ([`Attr::str`], [`Attr::int`], ...):
///
/// ```
/// use wraptree::{Attr, AttrValue};
///
/// let attr = Attr::int("attempt", 3);
/// assert_eq!(attr.key(), "attempt");
/// assert_eq!(attr.value(), &AttrValue::Int(3));
/// assert_eq!(attr.to_string(), "attempt=3");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Attr {
    key: Cow<'static, str>,
    value: AttrValue,
}

impl Attr {
    /// Creates an attribute from a key and any value convertible to
    /// [`AttrValue`].
    pub fn new(key: impl Into<Cow<'static, str>>, value: impl Into<AttrValue>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates a string-valued attribute.
    pub fn str(key: impl Into<Cow<'static, str>>, value: impl Into<Cow<'static, str>>) -> Self {
        Self::new(key, AttrValue::Str(value.into()))
    }

    /// Creates a signed-integer attribute.
    pub fn int(key: impl Into<Cow<'static, str>>, value: i64) -> Self {
        Self::new(key, AttrValue::Int(value))
    }

    /// Creates an unsigned-integer attribute.
    pub fn uint(key: impl Into<Cow<'static, str>>, value: u64) -> Self {
        Self::new(key, AttrValue::Uint(value))
    }

    /// Creates a floating-point attribute.
    pub fn float(key: impl Into<Cow<'static, str>>, value: f64) -> Self {
        Self::new(key, AttrValue::Float(value))
    }

    /// Creates a boolean attribute.
    pub fn bool(key: impl Into<Cow<'static, str>>, value: bool) -> Self {
        Self::new(key, AttrValue::Bool(value))
    }

    /// Creates an attribute grouping other attributes under one key.
    pub fn group(key: impl Into<Cow<'static, str>>, attrs: impl IntoIterator<Item = Attr>) -> Self {
        Self::new(key, AttrValue::Group(attrs.into_iter().collect()))
    }

    /// The attribute key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The attribute value.
    pub fn value(&self) -> &AttrValue {
        &self.value
    }
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// The value of an [`Attr`].
///
/// A small closed set of value shapes, mirroring what structured loggers
/// commonly accept.
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    /// A string value.
    Str(Cow<'static, str>),
    /// A signed integer value.
    Int(i64),
    /// An unsigned integer value.
    Uint(u64),
    /// A floating-point value.
    Float(f64),
    /// A boolean value.
    Bool(bool),
    /// A group of attributes used as a single value.
    Group(Vec<Attr>),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Str(value) => f.write_str(value),
            AttrValue::Int(value) => write!(f, "{value}"),
            AttrValue::Uint(value) => write!(f, "{value}"),
            AttrValue::Float(value) => write!(f, "{value}"),
            AttrValue::Bool(value) => write!(f, "{value}"),
            AttrValue::Group(attrs) => {
                f.write_str("[")?;
                for (i, attr) in attrs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{attr}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<&'static str> for AttrValue {
    fn from(value: &'static str) -> Self {
        AttrValue::Str(Cow::Borrowed(value))
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Str(Cow::Owned(value))
    }
}

impl From<Cow<'static, str>> for AttrValue {
    fn from(value: Cow<'static, str>) -> Self {
        AttrValue::Str(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Int(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        AttrValue::Int(value.into())
    }
}

impl From<u64> for AttrValue {
    fn from(value: u64) -> Self {
        AttrValue::Uint(value)
    }
}

impl From<u32> for AttrValue {
    fn from(value: u32) -> Self {
        AttrValue::Uint(value.into())
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Float(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<Vec<Attr>> for AttrValue {
    fn from(value: Vec<Attr>) -> Self {
        AttrValue::Group(value)
    }
}

/// One item of a flat, not-yet-parsed attribute list.
///
/// [`parse_attrs`] consumes a sequence of these. Most of the time you build
/// them implicitly through the [`attrs!`](crate::attrs!) macro and the
/// [`From`] conversions below: bare strings become [`Text`](Self::Text)
/// items (candidate keys), numbers and booleans become
/// [`Value`](Self::Value) items, and `(key, value)` tuples or ready-made
/// [`Attr`]s become [`Attr`](Self::Attr) items.
#[derive(Clone, Debug)]
pub enum AttrListItem {
    /// A pre-built attribute, taken verbatim.
    Attr(Attr),
    /// A text item: a key if another item follows it, otherwise a stray
    /// value.
    Text(Cow<'static, str>),
    /// A bare value with no key of its own.
    Value(AttrValue),
}

impl AttrListItem {
    /// Converts an item appearing in value position into a plain value.
    fn into_value(self) -> AttrValue {
        match self {
            AttrListItem::Attr(attr) => AttrValue::Group(vec![attr]),
            AttrListItem::Text(text) => AttrValue::Str(text),
            AttrListItem::Value(value) => value,
        }
    }
}

impl From<Attr> for AttrListItem {
    fn from(attr: Attr) -> Self {
        AttrListItem::Attr(attr)
    }
}

impl From<&'static str> for AttrListItem {
    fn from(text: &'static str) -> Self {
        AttrListItem::Text(Cow::Borrowed(text))
    }
}

impl From<String> for AttrListItem {
    fn from(text: String) -> Self {
        AttrListItem::Text(Cow::Owned(text))
    }
}

impl From<i64> for AttrListItem {
    fn from(value: i64) -> Self {
        AttrListItem::Value(value.into())
    }
}

impl From<i32> for AttrListItem {
    fn from(value: i32) -> Self {
        AttrListItem::Value(value.into())
    }
}

impl From<u64> for AttrListItem {
    fn from(value: u64) -> Self {
        AttrListItem::Value(value.into())
    }
}

impl From<u32> for AttrListItem {
    fn from(value: u32) -> Self {
        AttrListItem::Value(value.into())
    }
}

impl From<f64> for AttrListItem {
    fn from(value: f64) -> Self {
        AttrListItem::Value(value.into())
    }
}

impl From<bool> for AttrListItem {
    fn from(value: bool) -> Self {
        AttrListItem::Value(value.into())
    }
}

impl<K: Into<Cow<'static, str>>, V: Into<AttrValue>> From<(K, V)> for AttrListItem {
    fn from((key, value): (K, V)) -> Self {
        AttrListItem::Attr(Attr::new(key, value))
    }
}

/// Parses a flat item list into ordered attributes.
///
/// The list is scanned left to right:
///
/// - a pre-built [`Attr`] item is taken verbatim;
/// - a text item followed by another item pairs them up as key and value;
/// - a text item with nothing following it becomes `{ "!BADKEY": text }`;
/// - any other item becomes `{ "!BADKEY": item }`.
///
/// Parsing never fails; malformed trailing input degrades to the
/// [`BAD_KEY`] sentinel instead.
///
/// ```
/// use wraptree::{Attr, attrs::{AttrListItem, parse_attrs}};
///
/// let attrs = parse_attrs([
///     AttrListItem::from("key1"),
///     AttrListItem::from("value1"),
///     AttrListItem::from(Attr::int("key2", 2)),
/// ]);
/// let parsed: Vec<_> = attrs.iter().cloned().collect();
/// assert_eq!(parsed, vec![Attr::str("key1", "value1"), Attr::int("key2", 2)]);
///
/// let stray = parse_attrs([AttrListItem::from("onlykey")]);
/// let parsed: Vec<_> = stray.iter().cloned().collect();
/// assert_eq!(parsed, vec![Attr::str("!BADKEY", "onlykey")]);
/// ```
pub fn parse_attrs(items: impl IntoIterator<Item = AttrListItem>) -> Attrs {
    let mut items = items.into_iter();
    let mut parsed = Vec::with_capacity(items.size_hint().0);

    while let Some(item) = items.next() {
        match item {
            AttrListItem::Attr(attr) => parsed.push(attr),
            AttrListItem::Text(text) => match items.next() {
                Some(value) => parsed.push(Attr::new(text, value.into_value())),
                None => parsed.push(Attr::new(BAD_KEY, AttrValue::Str(text))),
            },
            AttrListItem::Value(value) => parsed.push(Attr::new(BAD_KEY, value)),
        }
    }

    Attrs { attrs: parsed }
}

/// An ordered list of attributes.
///
/// Preserves insertion order and permits duplicate keys. Obtained from
/// [`parse_attrs`], the [`attrs!`](crate::attrs!) macro, or collected from
/// [`Attr`] values directly.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Attrs {
    attrs: Vec<Attr>,
}

impl Attrs {
    /// Creates an empty attribute list.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of attributes in the list.
    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Appends an attribute to the list.
    pub fn push(&mut self, attr: Attr) {
        self.attrs.push(attr);
    }

    /// Iterates over the attributes in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, Attr> {
        self.attrs.iter()
    }

    /// Returns the attributes as an insertion-ordered map.
    ///
    /// When the same key occurs more than once, the value of the *last*
    /// occurrence wins, while the key keeps the position of its first
    /// occurrence. This is the view to use when handing attributes to a
    /// structured logger that expects unique keys.
    ///
    /// ```
    /// use wraptree::{Attr, AttrValue, Attrs};
    ///
    /// let attrs: Attrs = [
    ///     Attr::int("attempt", 1),
    ///     Attr::str("table", "users"),
    ///     Attr::int("attempt", 2),
    /// ]
    /// .into_iter()
    /// .collect();
    ///
    /// let map = attrs.as_map();
    /// assert_eq!(map.get_index(0), Some((&"attempt", &&AttrValue::Int(2))));
    /// assert_eq!(map["table"], &AttrValue::Str("users".into()));
    /// ```
    pub fn as_map(&self) -> IndexMap<&str, &AttrValue, FxBuildHasher> {
        let mut map = IndexMap::with_capacity_and_hasher(self.attrs.len(), FxBuildHasher);
        for attr in &self.attrs {
            map.insert(attr.key(), attr.value());
        }
        map
    }
}

impl From<Vec<Attr>> for Attrs {
    fn from(attrs: Vec<Attr>) -> Self {
        Self { attrs }
    }
}

impl FromIterator<Attr> for Attrs {
    fn from_iter<I: IntoIterator<Item = Attr>>(iter: I) -> Self {
        Self {
            attrs: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Attrs {
    type Item = Attr;
    type IntoIter = alloc::vec::IntoIter<Attr>;

    fn into_iter(self) -> Self::IntoIter {
        self.attrs.into_iter()
    }
}

impl<'a> IntoIterator for &'a Attrs {
    type Item = &'a Attr;
    type IntoIter = core::slice::Iter<'a, Attr>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::ToString, vec};

    use super::*;

    #[test]
    fn key_value_pairs() {
        let attrs = parse_attrs([
            AttrListItem::from("key1"),
            AttrListItem::from("value1"),
            AttrListItem::from(Attr::int("key2", 2)),
        ]);
        let parsed: Vec<_> = attrs.iter().cloned().collect();
        assert_eq!(parsed, vec![Attr::str("key1", "value1"), Attr::int("key2", 2)]);
    }

    #[test]
    fn lone_trailing_key() {
        let attrs = parse_attrs([AttrListItem::from("onlykey")]);
        let parsed: Vec<_> = attrs.iter().cloned().collect();
        assert_eq!(parsed, vec![Attr::str(BAD_KEY, "onlykey")]);
    }

    #[test]
    fn bare_value_without_key() {
        let attrs = parse_attrs([AttrListItem::from(42), AttrListItem::from("key"), AttrListItem::from(true)]);
        let parsed: Vec<_> = attrs.iter().cloned().collect();
        assert_eq!(parsed, vec![Attr::int(BAD_KEY, 42), Attr::bool("key", true)]);
    }

    #[test]
    fn attr_in_value_position_becomes_group() {
        let attrs = parse_attrs([
            AttrListItem::from("outer"),
            AttrListItem::from(Attr::int("inner", 1)),
        ]);
        let parsed: Vec<_> = attrs.iter().cloned().collect();
        assert_eq!(parsed, vec![Attr::group("outer", [Attr::int("inner", 1)])]);
    }

    #[test]
    fn duplicate_keys_preserved_in_order() {
        let attrs = parse_attrs([
            AttrListItem::from(("key", 1)),
            AttrListItem::from(("key", 2)),
        ]);
        let parsed: Vec<_> = attrs.iter().cloned().collect();
        assert_eq!(parsed, vec![Attr::int("key", 1), Attr::int("key", 2)]);

        let map = attrs.as_map();
        assert_eq!(map.len(), 1);
        assert_eq!(map["key"], &AttrValue::Int(2));
    }

    #[test]
    fn display_formats() {
        assert_eq!(Attr::str("user", "hermann").to_string(), "user=hermann");
        assert_eq!(
            Attr::group("req", [Attr::int("id", 7), Attr::bool("retry", false)]).to_string(),
            "req=[id=7 retry=false]"
        );
    }
}
