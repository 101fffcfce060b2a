//! Core value and container types.
//!
//! A [`crate::Collection`] wraps exactly one [`Items`] value. The container
//! variant doubles as the collection's [`Shape`]: every operation dispatches on
//! the `Items` discriminant instead of inspecting concrete types at runtime.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single dynamic value held by a collection.
///
/// Serializes untagged, so the scalar layer round-trips through JSON directly:
/// `Int64` and `Float64` become JSON numbers, `Utf8` a string, and so on.
/// Deserialization prefers `Int64` for integral numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Missing/empty value.
    Null,
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// Boolean.
    Bool(bool),
    /// UTF-8 string.
    Utf8(String),
}

impl Value {
    /// Short name of the value's type, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Int64(_) => "int64",
            Value::Float64(_) => "float64",
            Value::Bool(_) => "bool",
            Value::Utf8(_) => "utf8",
        }
    }

    /// Returns the integer value, if this is an `Int64`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int64(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the value as a float, widening `Int64` if necessary.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int64(n) => Some(*n as f64),
            Value::Float64(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the boolean value, if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the string value, if this is a `Utf8`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Utf8(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int64(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float64(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Utf8(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Utf8(s)
    }
}

impl From<Key> for Value {
    fn from(k: Key) -> Self {
        match k {
            Key::Int64(n) => Value::Int64(n),
            Key::Bool(b) => Value::Bool(b),
            Key::Utf8(s) => Value::Utf8(s),
        }
    }
}

/// A mapping key, or the synthetic zero-based position of a sequence entry.
///
/// Keys are compared by value and never sorted; mappings keep insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Key {
    /// Integer key. Sequence positions are always this variant.
    Int64(i64),
    /// Boolean key.
    Bool(bool),
    /// UTF-8 string key.
    Utf8(String),
}

impl Key {
    /// Returns the integer key, if this is an `Int64`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Key::Int64(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string key, if this is a `Utf8`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::Utf8(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl From<i64> for Key {
    fn from(n: i64) -> Self {
        Key::Int64(n)
    }
}

impl From<bool> for Key {
    fn from(b: bool) -> Self {
        Key::Bool(b)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Utf8(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Utf8(s)
    }
}

/// The three container shapes a collection can wrap.
///
/// Used as the conversion target for [`crate::Collection::eject`] and
/// [`crate::Collection::into_shape`]. Because the enum is total, there is no
/// "invalid target" failure mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    /// Growable ordered sequence, backed by `Vec<Value>`.
    Sequence,
    /// Fixed ordered sequence, backed by `Box<[Value]>`.
    FixedSequence,
    /// Keyed mapping with unique keys and insertion order, backed by
    /// `IndexMap<Key, Value>`.
    Mapping,
}

/// The raw wrapped container of a collection.
///
/// The discriminant is the collection's shape tag; every transform preserves
/// it unless documented otherwise. Serializes untagged: both sequence variants
/// become JSON arrays and mappings become objects (JSON arrays deserialize as
/// `Sequence`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Items {
    /// Growable ordered sequence.
    Sequence(Vec<Value>),
    /// Fixed ordered sequence.
    FixedSequence(Box<[Value]>),
    /// Insertion-ordered mapping with unique keys.
    Mapping(IndexMap<Key, Value>),
}

impl Items {
    /// The shape tag of this container.
    pub fn shape(&self) -> Shape {
        match self {
            Items::Sequence(_) => Shape::Sequence,
            Items::FixedSequence(_) => Shape::FixedSequence,
            Items::Mapping(_) => Shape::Mapping,
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        match self {
            Items::Sequence(v) => v.len(),
            Items::FixedSequence(v) => v.len(),
            Items::Mapping(m) => m.len(),
        }
    }

    /// True iff there are no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Items {
    fn default() -> Self {
        Items::Sequence(Vec::new())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Items {
    fn from(values: Vec<T>) -> Self {
        Items::Sequence(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Box<[T]>> for Items {
    fn from(values: Box<[T]>) -> Self {
        Items::FixedSequence(values.into_iter().map(Into::into).collect())
    }
}

impl<K, V> From<IndexMap<K, V>> for Items
where
    K: Into<Key> + std::hash::Hash + Eq,
    V: Into<Value>,
{
    fn from(entries: IndexMap<K, V>) -> Self {
        Items::Mapping(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
