//! `fluent-collections` is a small library of immutable, fluent wrappers over
//! three container shapes: a growable sequence, a fixed sequence, and an
//! insertion-ordered mapping.
//!
//! The primary entrypoint is [`collect`], which wraps a native container in a
//! [`Collection`]. Every transforming method returns a *new* collection of the
//! same shape; the receiver is never mutated.
//!
//! ## What a collection can wrap
//!
//! - `Vec<T>` → [`types::Shape::Sequence`]
//! - `Box<[T]>` → [`types::Shape::FixedSequence`]
//! - `IndexMap<K, V>` → [`types::Shape::Mapping`] (unique keys, insertion
//!   order preserved)
//!
//! Element types convert through [`types::Value`]
//! (`Null`/`Int64`/`Float64`/`Bool`/`Utf8`); mapping keys through
//! [`types::Key`].
//!
//! ## Quick example: filter → map → sum
//!
//! ```rust
//! use fluent_collections::collect;
//! use fluent_collections::types::Value;
//!
//! let c = collect(vec![1i64, 2, 3, 4]);
//! let total = c
//!     .filter(|v| matches!(v, Value::Int64(n) if n % 2 == 0))
//!     .map(|v| match v {
//!         Value::Int64(n) => Value::Int64(n * 10),
//!         other => other.clone(),
//!     })
//!     .sum()
//!     .unwrap();
//! assert_eq!(total, Value::Int64(60));
//! // The original is untouched.
//! assert_eq!(c.count(), 4);
//! ```
//!
//! ## Keyed collections
//!
//! Mappings keep their keys through transforms, and the `_entries` variants of
//! `map`/`filter`/`fold`/`reduce` pass the key to the callback. Sequence
//! shapes take part in the same keyed view with their zero-based positions as
//! synthetic keys:
//!
//! ```rust
//! use fluent_collections::collect;
//! use fluent_collections::types::{Key, Value};
//! use indexmap::IndexMap;
//!
//! let scores = collect(IndexMap::from([("ada", 3i64), ("grace", 5)]));
//! let labeled = scores.map_entries(|k, v| {
//!     Value::Utf8(format!("{}={}", k.as_str().unwrap(), v.as_i64().unwrap()))
//! });
//! assert_eq!(labeled.keys(), vec![Key::from("ada"), Key::from("grace")]);
//! assert_eq!(labeled.first(), Some(&Value::from("ada=3")));
//!
//! assert_eq!(collect(vec!["a", "b"]).keys(), vec![Key::Int64(0), Key::Int64(1)]);
//! ```
//!
//! ## Slicing
//!
//! [`Collection::slice`] reproduces Python slice semantics (negative indices,
//! clamping, negative step), with `start` always explicit. `take`, `rest`,
//! and `reverse` are slices in disguise. The index arithmetic itself is the
//! standalone pure function [`slice::indices`].
//!
//! ```rust
//! use fluent_collections::collect;
//! use fluent_collections::types::Value;
//!
//! let c = collect(vec![1i64, 2, 3, 4, 5]);
//! assert_eq!(c.slice(-2, None, None).unwrap().list(),
//!            vec![Value::Int64(4), Value::Int64(5)]);
//! assert_eq!(c.take(2).list(), vec![Value::Int64(1), Value::Int64(2)]);
//! assert_eq!(c.reverse().first(), Some(&Value::Int64(5)));
//! ```
//!
//! ## Shape conversion and JSON
//!
//! [`Collection::eject`] converts the wrapped container to another shape
//! (values keep their order; sequences re-key by position), and
//! [`Collection::into_shape`] re-wraps the result. Flat JSON arrays and
//! objects round-trip through [`Collection::from_json`] /
//! [`Collection::to_json`].
//!
//! ## Modules
//!
//! - [`collection`]: the [`Collection`] wrapper, construction, and accessors
//! - [`types`]: [`types::Value`], [`types::Key`], [`types::Shape`], and the
//!   wrapped [`types::Items`] container
//! - [`slice`]: Python-style slice-index normalization
//! - [`error`]: error types shared across operations

pub mod collection;
pub mod error;
mod json;
pub mod slice;
mod transform;
pub mod types;

pub use collection::{Collection, collect};
pub use error::{CollectionError, CollectionResult};
