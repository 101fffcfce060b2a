//! The fluent, immutable [`Collection`] wrapper and its basic accessors.

use indexmap::IndexMap;

use crate::error::{CollectionError, CollectionResult};
use crate::types::{Items, Key, Shape, Value};

/// An immutable fluent wrapper over one [`Items`] container.
///
/// Every transforming method returns a new `Collection`; the receiver is never
/// mutated. The wrapped container's shape is preserved by every operation
/// unless the method documents a shape change ([`Collection::eject`],
/// [`Collection::into_shape`]).
///
/// ```rust
/// use fluent_collections::collect;
/// use fluent_collections::types::Value;
///
/// let c = collect(vec![1i64, 2, 3]);
/// let doubled = c.map(|v| match v {
///     Value::Int64(n) => Value::Int64(n * 2),
///     other => other.clone(),
/// });
/// assert_eq!(doubled.list(), vec![Value::Int64(2), Value::Int64(4), Value::Int64(6)]);
/// // The original is untouched.
/// assert_eq!(c.list(), vec![Value::Int64(1), Value::Int64(2), Value::Int64(3)]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    pub(crate) items: Items,
}

/// Wrap a container in a [`Collection`].
///
/// Accepts anything convertible to [`Items`]: `Vec<T>`, `Box<[T]>`, or an
/// `IndexMap<K, V>` whose keys and values convert to [`Key`]/[`Value`].
/// The empty collection is [`Collection::default`].
pub fn collect<I: Into<Items>>(items: I) -> Collection {
    Collection::new(items)
}

impl Default for Collection {
    /// An empty growable sequence.
    fn default() -> Self {
        Collection {
            items: Items::default(),
        }
    }
}

impl From<Items> for Collection {
    fn from(items: Items) -> Self {
        Collection { items }
    }
}

impl Collection {
    /// Create a collection from any container convertible to [`Items`].
    pub fn new(items: impl Into<Items>) -> Self {
        Collection {
            items: items.into(),
        }
    }

    /// The raw wrapped container, unchanged.
    pub fn all(&self) -> &Items {
        &self.items
    }

    /// The shape tag of the wrapped container.
    pub fn shape(&self) -> Shape {
        self.items.shape()
    }

    /// Number of entries.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// True iff the collection has no entries.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The first value in iteration order, or `None` when empty.
    ///
    /// For mappings this is the value at the first position, not the value of
    /// the smallest key.
    pub fn first(&self) -> Option<&Value> {
        match &self.items {
            Items::Sequence(v) => v.first(),
            Items::FixedSequence(v) => v.first(),
            Items::Mapping(m) => m.first().map(|(_, v)| v),
        }
    }

    /// The last value in iteration order, or `None` when empty.
    pub fn last(&self) -> Option<&Value> {
        match &self.items {
            Items::Sequence(v) => v.last(),
            Items::FixedSequence(v) => v.last(),
            Items::Mapping(m) => m.last().map(|(_, v)| v),
        }
    }

    /// All keys in iteration order.
    ///
    /// For mappings these are the mapping's own keys; for sequence shapes the
    /// synthetic positions `0, 1, .., count-1`. This shared keyed view is what
    /// lets the `_entries` operations treat all three shapes uniformly.
    pub fn keys(&self) -> Vec<Key> {
        match &self.items {
            Items::Mapping(m) => m.keys().cloned().collect(),
            _ => (0..self.count() as i64).map(Key::Int64).collect(),
        }
    }

    /// All values in iteration order, keys dropped.
    pub fn list(&self) -> Vec<Value> {
        self.values().cloned().collect()
    }

    /// All entries as an insertion-ordered mapping.
    ///
    /// Sequence shapes are keyed by their zero-based position.
    pub fn dict(&self) -> IndexMap<Key, Value> {
        match &self.items {
            Items::Mapping(m) => m.clone(),
            _ => self.entries().map(|(k, v)| (k, v.clone())).collect(),
        }
    }

    /// Convert the wrapped container to the requested shape, unwrapped.
    ///
    /// Sequence targets from a mapping drop the keys and keep the values in
    /// order; a mapping target from a sequence shape re-keys by position.
    /// Converting to the current shape returns an equal container.
    pub fn eject(&self, target: Shape) -> Items {
        match target {
            Shape::Sequence => Items::Sequence(self.list()),
            Shape::FixedSequence => Items::FixedSequence(self.list().into_boxed_slice()),
            Shape::Mapping => Items::Mapping(self.dict()),
        }
    }

    /// Like [`Collection::eject`], but re-wrapped as a new collection.
    pub fn into_shape(&self, target: Shape) -> Collection {
        Collection::from(self.eject(target))
    }

    /// Returns a new collection of the same shape with each value appended at
    /// the end, in the order given.
    ///
    /// Appending to a mapping inserts under synthetic integer keys: the next
    /// key is the largest existing `Int64` key plus one, starting at 0 when no
    /// integer key exists.
    pub fn append<I>(&self, values: I) -> Collection
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        match &self.items {
            Items::Sequence(v) => {
                let mut out = v.clone();
                out.extend(values.into_iter().map(Into::into));
                Collection::from(Items::Sequence(out))
            }
            Items::FixedSequence(v) => {
                let mut out = v.to_vec();
                out.extend(values.into_iter().map(Into::into));
                Collection::from(Items::FixedSequence(out.into_boxed_slice()))
            }
            Items::Mapping(m) => {
                let mut out = m.clone();
                let mut next = next_int_key(m);
                for value in values {
                    out.insert(Key::Int64(next), value.into());
                    next = next.saturating_add(1);
                }
                Collection::from(Items::Mapping(out))
            }
        }
    }

    /// Arithmetic sum of all values, keys ignored.
    ///
    /// Accumulates left to right; an all-`Int64` collection sums to `Int64`,
    /// any `Float64` promotes the accumulator. The empty sum is `Int64(0)`.
    /// Fails with [`CollectionError::NonNumeric`] on the first value that does
    /// not support numeric addition (including `Null` and `Bool`).
    pub fn sum(&self) -> CollectionResult<Value> {
        let mut acc = Value::Int64(0);
        for value in self.values() {
            acc = match (acc, value) {
                (Value::Int64(a), Value::Int64(b)) => Value::Int64(a + b),
                (Value::Int64(a), Value::Float64(b)) => Value::Float64(a as f64 + b),
                (Value::Float64(a), Value::Int64(b)) => Value::Float64(a + *b as f64),
                (Value::Float64(a), Value::Float64(b)) => Value::Float64(a + b),
                (_, other) => {
                    return Err(CollectionError::NonNumeric {
                        found: other.type_name(),
                    });
                }
            };
        }
        Ok(acc)
    }

    /// Arithmetic mean of all values, always `Float64`.
    ///
    /// Fails with [`CollectionError::DivisionByZero`] when the collection is
    /// empty, and propagates [`CollectionError::NonNumeric`] from the sum.
    pub fn avg(&self) -> CollectionResult<Value> {
        let count = self.count();
        if count == 0 {
            return Err(CollectionError::DivisionByZero);
        }
        let total = match self.sum()? {
            Value::Int64(n) => n as f64,
            Value::Float64(f) => f,
            _ => unreachable!("sum only returns numeric values"),
        };
        Ok(Value::Float64(total / count as f64))
    }

    pub(crate) fn values(&self) -> Values<'_> {
        match &self.items {
            Items::Sequence(v) => Values::Seq(v.iter()),
            Items::FixedSequence(v) => Values::Seq(v.iter()),
            Items::Mapping(m) => Values::Map(m.values()),
        }
    }

    pub(crate) fn entries(&self) -> Entries<'_> {
        match &self.items {
            Items::Sequence(v) => Entries::Seq(v.iter().enumerate()),
            Items::FixedSequence(v) => Entries::Seq(v.iter().enumerate()),
            Items::Mapping(m) => Entries::Map(m.iter()),
        }
    }
}

/// Iterator over a collection's values, uniform across shapes.
pub(crate) enum Values<'a> {
    Seq(std::slice::Iter<'a, Value>),
    Map(indexmap::map::Values<'a, Key, Value>),
}

impl<'a> Iterator for Values<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Values::Seq(iter) => iter.next(),
            Values::Map(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Values::Seq(iter) => iter.size_hint(),
            Values::Map(iter) => iter.size_hint(),
        }
    }
}

/// Iterator over `(key, value)` entries; sequence positions become `Int64`
/// keys.
pub(crate) enum Entries<'a> {
    Seq(std::iter::Enumerate<std::slice::Iter<'a, Value>>),
    Map(indexmap::map::Iter<'a, Key, Value>),
}

impl<'a> Iterator for Entries<'a> {
    type Item = (Key, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Entries::Seq(iter) => iter.next().map(|(i, v)| (Key::Int64(i as i64), v)),
            Entries::Map(iter) => iter.next().map(|(k, v)| (k.clone(), v)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Entries::Seq(iter) => iter.size_hint(),
            Entries::Map(iter) => iter.size_hint(),
        }
    }
}

fn next_int_key(entries: &IndexMap<Key, Value>) -> i64 {
    entries
        .keys()
        .filter_map(Key::as_i64)
        .max()
        .map_or(0, |k| k.saturating_add(1))
}

#[cfg(test)]
mod tests {
    use super::collect;
    use crate::types::{Items, Key, Shape, Value};
    use indexmap::IndexMap;

    fn words() -> super::Collection {
        collect(vec!["foo", "bar"])
    }

    fn scores() -> super::Collection {
        collect(IndexMap::from([("a", 1i64), ("b", 2), ("c", 3)]))
    }

    #[test]
    fn empty_collections_are_empty_across_shapes() {
        assert!(collect(Vec::<Value>::new()).is_empty());
        assert!(collect(Vec::<Value>::new().into_boxed_slice()).is_empty());
        assert!(collect(IndexMap::<Key, Value>::new()).is_empty());
        assert!(!words().is_empty());
    }

    #[test]
    fn all_returns_wrapped_container() {
        let c = words();
        assert_eq!(c.all(), &Items::from(vec!["foo", "bar"]));
        assert_eq!(c.count(), 2);
    }

    #[test]
    fn first_and_last_follow_iteration_order() {
        let c = words();
        assert_eq!(c.first(), Some(&Value::from("foo")));
        assert_eq!(c.last(), Some(&Value::from("bar")));

        let m = scores();
        assert_eq!(m.first(), Some(&Value::Int64(1)));
        assert_eq!(m.last(), Some(&Value::Int64(3)));
    }

    #[test]
    fn first_and_last_are_none_when_empty() {
        let c = super::Collection::default();
        assert_eq!(c.first(), None);
        assert_eq!(c.last(), None);
    }

    #[test]
    fn keys_are_positions_for_sequences_and_own_keys_for_mappings() {
        assert_eq!(words().keys(), vec![Key::Int64(0), Key::Int64(1)]);
        assert_eq!(
            scores().keys(),
            vec![Key::from("a"), Key::from("b"), Key::from("c")]
        );
    }

    #[test]
    fn list_drops_mapping_keys() {
        assert_eq!(
            scores().list(),
            vec![Value::Int64(1), Value::Int64(2), Value::Int64(3)]
        );
    }

    #[test]
    fn dict_keys_sequences_by_position() {
        let d = words().dict();
        assert_eq!(d.get(&Key::Int64(0)), Some(&Value::from("foo")));
        assert_eq!(d.get(&Key::Int64(1)), Some(&Value::from("bar")));
    }

    #[test]
    fn eject_converts_between_shapes() {
        assert_eq!(
            scores().eject(Shape::Sequence),
            Items::Sequence(vec![Value::Int64(1), Value::Int64(2), Value::Int64(3)])
        );
        assert_eq!(
            words().eject(Shape::Mapping),
            Items::Mapping(IndexMap::from([
                (Key::Int64(0), Value::from("foo")),
                (Key::Int64(1), Value::from("bar")),
            ]))
        );
        // Identity conversion.
        assert_eq!(words().eject(Shape::Sequence), *words().all());
    }

    #[test]
    fn into_shape_rewraps_the_conversion() {
        let fixed = words().into_shape(Shape::FixedSequence);
        assert_eq!(fixed.shape(), Shape::FixedSequence);
        assert_eq!(fixed.list(), words().list());
    }

    #[test]
    fn append_keeps_shape_and_order() {
        let c = words();
        let out = c.append(["baz", "qux"]);
        assert_eq!(
            out.list(),
            vec![
                Value::from("foo"),
                Value::from("bar"),
                Value::from("baz"),
                Value::from("qux")
            ]
        );
        assert_eq!(out.shape(), Shape::Sequence);
        // Original untouched.
        assert_eq!(c.count(), 2);

        let fixed = c.into_shape(Shape::FixedSequence).append(["baz"]);
        assert_eq!(fixed.shape(), Shape::FixedSequence);
        assert_eq!(fixed.count(), 3);
    }

    #[test]
    fn append_to_mapping_uses_next_integer_key() {
        let out = scores().append([10i64, 11]);
        assert_eq!(
            out.keys(),
            vec![
                Key::from("a"),
                Key::from("b"),
                Key::from("c"),
                Key::Int64(0),
                Key::Int64(1)
            ]
        );

        let keyed = collect(IndexMap::from([(5i64, 1i64)])).append([2i64]);
        assert_eq!(keyed.keys(), vec![Key::Int64(5), Key::Int64(6)]);
    }

    #[test]
    fn sum_accumulates_and_promotes() {
        assert_eq!(
            collect(vec![2i64, 1, 0]).sum().unwrap(),
            Value::Int64(3)
        );
        let s = collect(vec![
            Value::Int64(-666),
            Value::Int64(42),
            Value::Float64(0.1),
        ])
        .sum()
        .unwrap();
        match s {
            Value::Float64(f) => assert!((f - (-623.9)).abs() < 1e-9),
            other => panic!("expected float sum, got {other:?}"),
        }
        assert_eq!(
            super::Collection::default().sum().unwrap(),
            Value::Int64(0)
        );
    }

    #[test]
    fn sum_rejects_non_numeric_values() {
        let err = words().sum().unwrap_err();
        assert!(err.to_string().contains("found utf8"));
        let err = collect(vec![Value::Int64(1), Value::Null]).sum().unwrap_err();
        assert!(err.to_string().contains("found null"));
    }

    #[test]
    fn avg_divides_sum_by_count() {
        let avg = collect(vec![
            Value::Int64(-666),
            Value::Int64(42),
            Value::Float64(0.1),
        ])
        .avg()
        .unwrap();
        match avg {
            Value::Float64(f) => assert_eq!((f * 100.0).round() / 100.0, -207.97),
            other => panic!("expected float avg, got {other:?}"),
        }
    }

    #[test]
    fn avg_fails_on_empty_collection() {
        let err = super::Collection::default().avg().unwrap_err();
        assert!(err.to_string().contains("cannot average"));
    }
}
