//! JSON interop for flat collections.
//!
//! Supported inputs:
//! - A JSON array of scalars: `[1, 2.5, "x", true, null]` → `Sequence`
//! - A JSON object of scalars: `{"a": 1, "b": 2}` → `Mapping` (string keys,
//!   insertion order preserved)
//!
//! Nested arrays/objects are rejected; collections hold scalars only.

use indexmap::IndexMap;

use crate::collection::Collection;
use crate::error::{CollectionError, CollectionResult};
use crate::types::{Items, Key, Value};

impl Collection {
    /// Parse a flat JSON array or object into a collection.
    ///
    /// Integral numbers become [`Value::Int64`], other numbers
    /// [`Value::Float64`]. Fails with [`CollectionError::UnsupportedJson`] on
    /// scalar top-level values or nested containers.
    pub fn from_json(input: &str) -> CollectionResult<Collection> {
        let parsed: serde_json::Value = serde_json::from_str(input)?;
        match parsed {
            serde_json::Value::Array(elements) => {
                let mut values = Vec::with_capacity(elements.len());
                for (i, element) in elements.iter().enumerate() {
                    values.push(scalar_from_json(element).ok_or_else(|| {
                        CollectionError::UnsupportedJson {
                            message: format!("array element {i} is not a scalar"),
                        }
                    })?);
                }
                Ok(Collection::from(Items::Sequence(values)))
            }
            serde_json::Value::Object(object) => {
                let mut entries = IndexMap::with_capacity(object.len());
                for (key, element) in &object {
                    let value = scalar_from_json(element).ok_or_else(|| {
                        CollectionError::UnsupportedJson {
                            message: format!("value of '{key}' is not a scalar"),
                        }
                    })?;
                    entries.insert(Key::Utf8(key.clone()), value);
                }
                Ok(Collection::from(Items::Mapping(entries)))
            }
            _ => Err(CollectionError::UnsupportedJson {
                message: "json must be an array or an object".to_string(),
            }),
        }
    }

    /// Render the collection as JSON.
    ///
    /// Sequence shapes become arrays; mappings become objects with their keys
    /// stringified (`Int64` and `Bool` keys render as their decimal/`true`/
    /// `false` text). Fails on non-finite floats, which JSON cannot
    /// represent.
    pub fn to_json(&self) -> CollectionResult<String> {
        let rendered = match &self.items {
            Items::Sequence(_) | Items::FixedSequence(_) => {
                let mut elements = Vec::with_capacity(self.count());
                for value in self.values() {
                    elements.push(scalar_to_json(value)?);
                }
                serde_json::Value::Array(elements)
            }
            Items::Mapping(m) => {
                let mut object = serde_json::Map::with_capacity(m.len());
                for (key, value) in m {
                    object.insert(key_string(key), scalar_to_json(value)?);
                }
                serde_json::Value::Object(object)
            }
        };
        Ok(serde_json::to_string(&rendered)?)
    }
}

fn scalar_from_json(v: &serde_json::Value) -> Option<Value> {
    match v {
        serde_json::Value::Null => Some(Value::Null),
        serde_json::Value::Bool(b) => Some(Value::Bool(*b)),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(Value::Int64(i))
            } else {
                n.as_f64().map(Value::Float64)
            }
        }
        serde_json::Value::String(s) => Some(Value::Utf8(s.clone())),
        _ => None,
    }
}

fn scalar_to_json(v: &Value) -> CollectionResult<serde_json::Value> {
    match v {
        Value::Null => Ok(serde_json::Value::Null),
        Value::Int64(n) => Ok(serde_json::Value::from(*n)),
        Value::Float64(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .ok_or_else(|| CollectionError::UnsupportedJson {
                message: format!("float {f} has no json representation"),
            }),
        Value::Bool(b) => Ok(serde_json::Value::Bool(*b)),
        Value::Utf8(s) => Ok(serde_json::Value::String(s.clone())),
    }
}

fn key_string(k: &Key) -> String {
    match k {
        Key::Int64(n) => n.to_string(),
        Key::Bool(b) => b.to_string(),
        Key::Utf8(s) => s.clone(),
    }
}
