//! Higher-order operations: `map`, `filter`, `fold`, `reduce`.
//!
//! Each operation comes in a value-only form and an `_entries` form that also
//! receives the entry's key (a mapping's own key, or the zero-based position
//! for sequence shapes). The pairs replace the upstream arity-sniffing
//! dispatch: callers pick the key-aware variant explicitly.

use crate::collection::Collection;
use crate::error::{CollectionError, CollectionResult};
use crate::types::{Items, Key, Value};

impl Collection {
    /// Returns a new collection with every value transformed by `f`.
    ///
    /// The shape is preserved; mappings keep their keys and order.
    pub fn map<F>(&self, mut f: F) -> Collection
    where
        F: FnMut(&Value) -> Value,
    {
        self.map_entries(|_, v| f(v))
    }

    /// Like [`Collection::map`], with the entry's key passed alongside the
    /// value.
    pub fn map_entries<F>(&self, mut f: F) -> Collection
    where
        F: FnMut(&Key, &Value) -> Value,
    {
        let items = match &self.items {
            Items::Sequence(v) => Items::Sequence(
                v.iter()
                    .enumerate()
                    .map(|(i, x)| f(&Key::Int64(i as i64), x))
                    .collect(),
            ),
            Items::FixedSequence(v) => Items::FixedSequence(
                v.iter()
                    .enumerate()
                    .map(|(i, x)| f(&Key::Int64(i as i64), x))
                    .collect(),
            ),
            Items::Mapping(m) => {
                Items::Mapping(m.iter().map(|(k, x)| (k.clone(), f(k, x))).collect())
            }
        };
        Collection::from(items)
    }

    /// Returns a new collection of only the values for which `predicate`
    /// returns `true`.
    ///
    /// Mappings retain the surviving keys; sequence shapes are re-indexed
    /// densely.
    pub fn filter<F>(&self, mut predicate: F) -> Collection
    where
        F: FnMut(&Value) -> bool,
    {
        self.filter_entries(|_, v| predicate(v))
    }

    /// Like [`Collection::filter`], with the entry's key passed alongside the
    /// value.
    pub fn filter_entries<F>(&self, mut predicate: F) -> Collection
    where
        F: FnMut(&Key, &Value) -> bool,
    {
        let items = match &self.items {
            Items::Sequence(v) => Items::Sequence(
                v.iter()
                    .enumerate()
                    .filter(|&(i, x)| predicate(&Key::Int64(i as i64), x))
                    .map(|(_, x)| x.clone())
                    .collect(),
            ),
            Items::FixedSequence(v) => Items::FixedSequence(
                v.iter()
                    .enumerate()
                    .filter(|&(i, x)| predicate(&Key::Int64(i as i64), x))
                    .map(|(_, x)| x.clone())
                    .collect(),
            ),
            Items::Mapping(m) => Items::Mapping(
                m.iter()
                    .filter(|&(k, x)| predicate(k, x))
                    .map(|(k, x)| (k.clone(), x.clone()))
                    .collect(),
            ),
        };
        Collection::from(items)
    }

    /// Folds all values left to right into an accumulator seeded with `init`.
    ///
    /// This is the spec's `reduce` with an initial value, shaped like
    /// `Iterator::fold`.
    pub fn fold<A, F>(&self, init: A, mut f: F) -> A
    where
        F: FnMut(A, &Value) -> A,
    {
        self.values().fold(init, |acc, v| f(acc, v))
    }

    /// Like [`Collection::fold`], with the entry's key passed alongside the
    /// value.
    pub fn fold_entries<A, F>(&self, init: A, mut f: F) -> A
    where
        F: FnMut(A, &Key, &Value) -> A,
    {
        self.entries().fold(init, |acc, (k, v)| f(acc, &k, v))
    }

    /// Folds all values left to right, seeding the accumulator with the first
    /// value.
    ///
    /// The remaining entries are taken positionally (the entry after the
    /// first, in iteration order), never by key lookup. Fails with
    /// [`CollectionError::EmptyReduce`] when the collection is empty.
    pub fn reduce<F>(&self, mut f: F) -> CollectionResult<Value>
    where
        F: FnMut(Value, &Value) -> Value,
    {
        let mut values = self.values();
        let first = values.next().ok_or(CollectionError::EmptyReduce)?.clone();
        Ok(values.fold(first, |acc, v| f(acc, v)))
    }

    /// Like [`Collection::reduce`], with the entry's key passed alongside the
    /// value.
    ///
    /// The first entry only seeds the accumulator; its key is not passed to
    /// `f`.
    pub fn reduce_entries<F>(&self, mut f: F) -> CollectionResult<Value>
    where
        F: FnMut(Value, &Key, &Value) -> Value,
    {
        let mut entries = self.entries();
        let (_, first) = entries.next().ok_or(CollectionError::EmptyReduce)?;
        let seed = first.clone();
        Ok(entries.fold(seed, |acc, (k, v)| f(acc, &k, v)))
    }
}
